use crate::color_8888::{ColorPair, RGB_MASK_U32};
use crate::coverage_mask::CoverageMask;
use crate::intrinsics::sse2::hsum_epi32;
use crate::pixel_block::{PixelBlock, PIXELS_PER_CELL};
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// SSE2 implementation of [`crate::calc_cell_error`], processing 4 pixels per iteration.
///
/// # Safety
///
/// The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn calc_cell_error_sse2(
    block: &PixelBlock,
    pair: &ColorPair,
    mask: &CoverageMask,
) -> u32 {
    let pixels_ptr = block.as_ptr() as *const __m128i;
    let mask_ptr = mask.as_ptr() as *const __m128i;

    let rgb_mask = _mm_set1_epi32(RGB_MASK_U32 as i32);
    let fg = _mm_set1_epi32((pair.fg.to_u32() & RGB_MASK_U32) as i32);
    let bg = _mm_set1_epi32((pair.bg.to_u32() & RGB_MASK_U32) as i32);
    let zero = _mm_setzero_si128();

    // Max total is 64 * 3 * 255², well within i32.
    let mut total = _mm_setzero_si128();
    for x in 0..PIXELS_PER_CELL / 4 {
        let pixels = _mm_and_si128(_mm_loadu_si128(pixels_ptr.add(x)), rgb_mask);
        let words = _mm_loadu_si128(mask_ptr.add(x));

        // Mask words are all ones or all zeros, so and/andnot acts as a select.
        let selected = _mm_or_si128(_mm_and_si128(words, fg), _mm_andnot_si128(words, bg));

        let diff_lo = _mm_sub_epi16(
            _mm_unpacklo_epi8(pixels, zero),
            _mm_unpacklo_epi8(selected, zero),
        );
        let diff_hi = _mm_sub_epi16(
            _mm_unpackhi_epi8(pixels, zero),
            _mm_unpackhi_epi8(selected, zero),
        );

        total = _mm_add_epi32(total, _mm_madd_epi16(diff_lo, diff_lo));
        total = _mm_add_epi32(total, _mm_madd_epi16(diff_hi, diff_hi));
    }

    hsum_epi32(total) as u32
}
