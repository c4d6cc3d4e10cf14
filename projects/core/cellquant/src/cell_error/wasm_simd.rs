use crate::color_8888::{ColorPair, RGB_MASK_U32};
use crate::coverage_mask::CoverageMask;
use crate::pixel_block::{PixelBlock, PIXELS_PER_CELL};
use core::arch::wasm32::*;

/// WebAssembly SIMD implementation of [`crate::calc_cell_error`], processing 4 pixels per
/// iteration.
///
/// # Safety
///
/// Requires the `simd128` target feature, which is checked at compile time.
#[target_feature(enable = "simd128")]
pub unsafe fn calc_cell_error_wasm_simd(
    block: &PixelBlock,
    pair: &ColorPair,
    mask: &CoverageMask,
) -> u32 {
    let pixels_ptr = block.as_ptr() as *const v128;
    let mask_ptr = mask.as_ptr() as *const v128;

    let rgb_mask = u32x4_splat(RGB_MASK_U32);
    let fg = u32x4_splat(pair.fg.to_u32() & RGB_MASK_U32);
    let bg = u32x4_splat(pair.bg.to_u32() & RGB_MASK_U32);

    let mut total = i32x4_splat(0);
    for x in 0..PIXELS_PER_CELL / 4 {
        let pixels = v128_and(v128_load(pixels_ptr.add(x)), rgb_mask);
        let selected = v128_bitselect(fg, bg, v128_load(mask_ptr.add(x)));

        let diff_lo = i16x8_sub(
            u16x8_extend_low_u8x16(pixels),
            u16x8_extend_low_u8x16(selected),
        );
        let diff_hi = i16x8_sub(
            u16x8_extend_high_u8x16(pixels),
            u16x8_extend_high_u8x16(selected),
        );

        total = i32x4_add(total, i32x4_dot_i16x8(diff_lo, diff_lo));
        total = i32x4_add(total, i32x4_dot_i16x8(diff_hi, diff_hi));
    }

    (i32x4_extract_lane::<0>(total)
        + i32x4_extract_lane::<1>(total)
        + i32x4_extract_lane::<2>(total)
        + i32x4_extract_lane::<3>(total)) as u32
}
