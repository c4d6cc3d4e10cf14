use core::arch::wasm32::*;

/// Widens a packed color (alpha cleared) to 16-bit lanes: `[r, g, b, 0, r, g, b, 0]`.
#[inline]
pub(crate) fn widen_color(color_rgb: u32) -> v128 {
    u16x8_extend_low_u8x16(u32x4_splat(color_rgb))
}

/// Computes the squared RGB distance between 4 pixels and a single reference color.
///
/// - `pixels`: 4 packed pixels with the alpha byte cleared.
/// - `reference`: a color widened with [`widen_color`].
///
/// Returns the 4 distances as 32-bit lanes, in pixel order.
#[inline]
pub(crate) fn rgb_distance_x4(pixels: v128, reference: v128) -> v128 {
    let diff_lo = i16x8_sub(u16x8_extend_low_u8x16(pixels), reference);
    let diff_hi = i16x8_sub(u16x8_extend_high_u8x16(pixels), reference);

    // [p0 r²+g², p0 b², p1 r²+g², p1 b²] and the same for p2, p3
    let sq_lo = i32x4_dot_i16x8(diff_lo, diff_lo);
    let sq_hi = i32x4_dot_i16x8(diff_hi, diff_hi);

    i32x4_add(
        i32x4_shuffle::<0, 2, 4, 6>(sq_lo, sq_hi),
        i32x4_shuffle::<1, 3, 5, 7>(sq_lo, sq_hi),
    )
}
