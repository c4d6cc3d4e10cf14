#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Widens a packed color (alpha cleared) to 16-bit lanes, repeated across the whole register.
#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn widen_color(color_rgb: u32) -> __m256i {
    _mm256_unpacklo_epi8(_mm256_set1_epi32(color_rgb as i32), _mm256_setzero_si256())
}

/// Computes the squared RGB distance between 8 pixels and a single reference color.
///
/// - `pixels`: 8 packed pixels with the alpha byte cleared.
/// - `reference`: a color widened with [`widen_color`].
///
/// Returns the 8 distances as 32-bit lanes, in pixel order.
#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn rgb_distance_x8(pixels: __m256i, reference: __m256i) -> __m256i {
    let zero = _mm256_setzero_si256();

    // Per 128-bit lane: lo holds pixels 0,1 (4,5) and hi holds pixels 2,3 (6,7).
    let diff_lo = _mm256_sub_epi16(_mm256_unpacklo_epi8(pixels, zero), reference);
    let diff_hi = _mm256_sub_epi16(_mm256_unpackhi_epi8(pixels, zero), reference);

    let sq_lo = _mm256_madd_epi16(diff_lo, diff_lo);
    let sq_hi = _mm256_madd_epi16(diff_hi, diff_hi);

    // hadd works per lane, so the result is [d0, d1, d2, d3 | d4, d5, d6, d7].
    _mm256_hadd_epi32(sq_lo, sq_hi)
}
