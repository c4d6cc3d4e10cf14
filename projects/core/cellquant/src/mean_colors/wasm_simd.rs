use crate::color_accum::ColorAccum;
use crate::coverage_mask::CoverageMask;
use crate::pixel_block::{PixelBlock, PIXELS_PER_CELL};
use core::arch::wasm32::*;

/// WebAssembly SIMD implementation of [`crate::extract_cell_mean_colors`], processing 4 pixels
/// per iteration.
///
/// # Safety
///
/// Requires the `simd128` target feature, which is checked at compile time.
#[target_feature(enable = "simd128")]
pub unsafe fn extract_cell_mean_colors_wasm_simd(
    block: &PixelBlock,
    mask: &CoverageMask,
) -> [ColorAccum; 2] {
    let pixels_ptr = block.as_ptr() as *const v128;
    let mask_ptr = mask.as_ptr() as *const v128;

    let mut bg_sum = i16x8_splat(0);
    let mut fg_sum = i16x8_splat(0);
    for x in 0..PIXELS_PER_CELL / 4 {
        let pixels = v128_load(pixels_ptr.add(x));
        let words = v128_load(mask_ptr.add(x));

        let fg = v128_and(pixels, words);
        let bg = v128_andnot(pixels, words);

        fg_sum = i16x8_add(
            fg_sum,
            i16x8_add(u16x8_extend_low_u8x16(fg), u16x8_extend_high_u8x16(fg)),
        );
        bg_sum = i16x8_add(
            bg_sum,
            i16x8_add(u16x8_extend_low_u8x16(bg), u16x8_extend_high_u8x16(bg)),
        );
    }

    bg_sum = i16x8_add(bg_sum, i64x2_shuffle::<1, 1>(bg_sum, bg_sum));
    fg_sum = i16x8_add(fg_sum, i64x2_shuffle::<1, 1>(fg_sum, fg_sum));

    let mut accums = [ColorAccum::ZERO; 2];
    v128_store(
        accums.as_mut_ptr() as *mut v128,
        i64x2_shuffle::<0, 2>(bg_sum, fg_sum),
    );
    accums
}
