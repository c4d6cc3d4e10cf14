use crate::color_8888::{ColorPair, RGB_MASK_U32};
use crate::coverage_mask::CoverageMask;
use crate::intrinsics::sse2::hsum_epi32;
use crate::pixel_block::{PixelBlock, PIXELS_PER_CELL};
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// AVX2 implementation of [`crate::calc_cell_error`], processing 8 pixels per iteration.
///
/// # Safety
///
/// The CPU must support AVX2.
#[target_feature(enable = "avx2")]
pub unsafe fn calc_cell_error_avx2(
    block: &PixelBlock,
    pair: &ColorPair,
    mask: &CoverageMask,
) -> u32 {
    let pixels_ptr = block.as_ptr() as *const __m256i;
    let mask_ptr = mask.as_ptr() as *const __m256i;

    let rgb_mask = _mm256_set1_epi32(RGB_MASK_U32 as i32);
    let fg = _mm256_set1_epi32((pair.fg.to_u32() & RGB_MASK_U32) as i32);
    let bg = _mm256_set1_epi32((pair.bg.to_u32() & RGB_MASK_U32) as i32);
    let zero = _mm256_setzero_si256();

    let mut total = _mm256_setzero_si256();
    for x in 0..PIXELS_PER_CELL / 8 {
        let pixels = _mm256_and_si256(_mm256_loadu_si256(pixels_ptr.add(x)), rgb_mask);
        let words = _mm256_loadu_si256(mask_ptr.add(x));
        let selected = _mm256_blendv_epi8(bg, fg, words);

        // Unpacks stay within 128-bit lanes, which doesn't matter as everything gets summed.
        let diff_lo = _mm256_sub_epi16(
            _mm256_unpacklo_epi8(pixels, zero),
            _mm256_unpacklo_epi8(selected, zero),
        );
        let diff_hi = _mm256_sub_epi16(
            _mm256_unpackhi_epi8(pixels, zero),
            _mm256_unpackhi_epi8(selected, zero),
        );

        total = _mm256_add_epi32(total, _mm256_madd_epi16(diff_lo, diff_lo));
        total = _mm256_add_epi32(total, _mm256_madd_epi16(diff_hi, diff_hi));
    }

    let folded = _mm_add_epi32(
        _mm256_castsi256_si128(total),
        _mm256_extracti128_si256::<1>(total),
    );
    hsum_epi32(folded) as u32
}
