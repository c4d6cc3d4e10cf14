use crate::color_accum::ColorAccum;
use crate::coverage_mask::CoverageMask;
use crate::pixel_block::{PixelBlock, PIXELS_PER_CELL};
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// SSE2 implementation of [`crate::extract_cell_mean_colors`], processing 4 pixels per iteration.
///
/// # Safety
///
/// The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn extract_cell_mean_colors_sse2(
    block: &PixelBlock,
    mask: &CoverageMask,
) -> [ColorAccum; 2] {
    let pixels_ptr = block.as_ptr() as *const __m128i;
    let mask_ptr = mask.as_ptr() as *const __m128i;
    let zero = _mm_setzero_si128();

    // Each 16-bit lane sums 32 channel values at most (8160), so 16 bits is enough.
    let mut bg_sum = _mm_setzero_si128();
    let mut fg_sum = _mm_setzero_si128();
    for x in 0..PIXELS_PER_CELL / 4 {
        let pixels = _mm_loadu_si128(pixels_ptr.add(x));
        let words = _mm_loadu_si128(mask_ptr.add(x));

        let fg = _mm_and_si128(words, pixels);
        let bg = _mm_andnot_si128(words, pixels);

        fg_sum = _mm_add_epi16(
            fg_sum,
            _mm_add_epi16(_mm_unpacklo_epi8(fg, zero), _mm_unpackhi_epi8(fg, zero)),
        );
        bg_sum = _mm_add_epi16(
            bg_sum,
            _mm_add_epi16(_mm_unpacklo_epi8(bg, zero), _mm_unpackhi_epi8(bg, zero)),
        );
    }

    // Fold the two pixel columns together; the low 64 bits then hold the [r, g, b, a] sums.
    bg_sum = _mm_add_epi16(bg_sum, _mm_unpackhi_epi64(bg_sum, bg_sum));
    fg_sum = _mm_add_epi16(fg_sum, _mm_unpackhi_epi64(fg_sum, fg_sum));

    let mut accums = [ColorAccum::ZERO; 2];
    _mm_storeu_si128(
        accums.as_mut_ptr() as *mut __m128i,
        _mm_unpacklo_epi64(bg_sum, fg_sum),
    );
    accums
}
