#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Sums the four 32-bit lanes of a register.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn hsum_epi32(v: __m128i) -> i32 {
    // [0+2, 1+3, ..]
    let upper = _mm_unpackhi_epi64(v, v);
    let sum2 = _mm_add_epi32(v, upper);

    // [0+2+1+3, ..]
    let lane1 = _mm_shuffle_epi32::<0b01>(sum2);
    _mm_cvtsi128_si32(_mm_add_epi32(sum2, lane1))
}

/// Widens a packed color (alpha cleared) to 16-bit lanes: `[r, g, b, 0, r, g, b, 0]`.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn widen_color(color_rgb: u32) -> __m128i {
    _mm_unpacklo_epi8(_mm_set1_epi32(color_rgb as i32), _mm_setzero_si128())
}

/// Computes the squared RGB distance between 4 pixels and a single reference color.
///
/// - `pixels`: 4 packed pixels with the alpha byte cleared.
/// - `reference`: a color widened with [`widen_color`].
///
/// Returns the 4 distances as 32-bit lanes, in pixel order.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn rgb_distance_x4(pixels: __m128i, reference: __m128i) -> __m128i {
    let zero = _mm_setzero_si128();
    let diff_lo = _mm_sub_epi16(_mm_unpacklo_epi8(pixels, zero), reference);
    let diff_hi = _mm_sub_epi16(_mm_unpackhi_epi8(pixels, zero), reference);

    // [p0 r²+g², p0 b², p1 r²+g², p1 b²] and the same for p2, p3
    let sq_lo = _mm_madd_epi16(diff_lo, diff_lo);
    let sq_hi = _mm_madd_epi16(diff_hi, diff_hi);

    // Gather the even and odd halves of each pixel's sum, then add them.
    let even = _mm_castps_si128(_mm_shuffle_ps::<0b10_00_10_00>(
        _mm_castsi128_ps(sq_lo),
        _mm_castsi128_ps(sq_hi),
    ));
    let odd = _mm_castps_si128(_mm_shuffle_ps::<0b11_01_11_01>(
        _mm_castsi128_ps(sq_lo),
        _mm_castsi128_ps(sq_hi),
    ));
    _mm_add_epi32(even, odd)
}
