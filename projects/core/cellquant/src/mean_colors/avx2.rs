use crate::color_accum::ColorAccum;
use crate::coverage_mask::CoverageMask;
use crate::pixel_block::{PixelBlock, PIXELS_PER_CELL};
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// AVX2 implementation of [`crate::extract_cell_mean_colors`], processing 8 pixels per iteration.
///
/// # Safety
///
/// The CPU must support AVX2.
#[target_feature(enable = "avx2")]
pub unsafe fn extract_cell_mean_colors_avx2(
    block: &PixelBlock,
    mask: &CoverageMask,
) -> [ColorAccum; 2] {
    let pixels_ptr = block.as_ptr() as *const __m256i;
    let mask_ptr = mask.as_ptr() as *const __m256i;
    let zero = _mm256_setzero_si256();

    let mut bg_sum = _mm256_setzero_si256();
    let mut fg_sum = _mm256_setzero_si256();
    for x in 0..PIXELS_PER_CELL / 8 {
        let pixels = _mm256_loadu_si256(pixels_ptr.add(x));
        let words = _mm256_loadu_si256(mask_ptr.add(x));

        let fg = _mm256_and_si256(words, pixels);
        let bg = _mm256_andnot_si256(words, pixels);

        fg_sum = _mm256_add_epi16(
            fg_sum,
            _mm256_add_epi16(_mm256_unpacklo_epi8(fg, zero), _mm256_unpackhi_epi8(fg, zero)),
        );
        bg_sum = _mm256_add_epi16(
            bg_sum,
            _mm256_add_epi16(_mm256_unpacklo_epi8(bg, zero), _mm256_unpackhi_epi8(bg, zero)),
        );
    }

    // Fold the 128-bit lanes, then the two pixel columns within the lane.
    let mut bg_folded = _mm_add_epi16(
        _mm256_castsi256_si128(bg_sum),
        _mm256_extracti128_si256::<1>(bg_sum),
    );
    let mut fg_folded = _mm_add_epi16(
        _mm256_castsi256_si128(fg_sum),
        _mm256_extracti128_si256::<1>(fg_sum),
    );
    bg_folded = _mm_add_epi16(bg_folded, _mm_unpackhi_epi64(bg_folded, bg_folded));
    fg_folded = _mm_add_epi16(fg_folded, _mm_unpackhi_epi64(fg_folded, fg_folded));

    let mut accums = [ColorAccum::ZERO; 2];
    _mm_storeu_si128(
        accums.as_mut_ptr() as *mut __m128i,
        _mm_unpacklo_epi64(bg_folded, fg_folded),
    );
    accums
}
