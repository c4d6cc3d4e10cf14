use crate::color_8888::{ColorPair, RGB_MASK_U32};
use crate::intrinsics::wasm_simd::{rgb_distance_x4, widen_color};
use crate::pixel_block::{PixelBlock, PIXELS_PER_CELL};
use core::arch::wasm32::*;

/// WebAssembly SIMD implementation of [`crate::calc_cell_bitmap`], processing 4 pixels per
/// iteration.
///
/// # Safety
///
/// Requires the `simd128` target feature, which is checked at compile time.
#[target_feature(enable = "simd128")]
pub unsafe fn calc_cell_bitmap_wasm_simd(block: &PixelBlock, pair: &ColorPair) -> u64 {
    let pixels_ptr = block.as_ptr() as *const v128;
    let rgb_mask = u32x4_splat(RGB_MASK_U32);
    let fg = widen_color(pair.fg.to_u32() & RGB_MASK_U32);
    let bg = widen_color(pair.bg.to_u32() & RGB_MASK_U32);

    let mut bitmap = 0u64;
    for x in 0..PIXELS_PER_CELL / 4 {
        let pixels = v128_and(v128_load(pixels_ptr.add(x)), rgb_mask);
        let foreground = i32x4_gt(rgb_distance_x4(pixels, bg), rgb_distance_x4(pixels, fg));
        bitmap |= (i32x4_bitmask(foreground) as u64) << (x * 4);
    }

    bitmap.reverse_bits()
}
