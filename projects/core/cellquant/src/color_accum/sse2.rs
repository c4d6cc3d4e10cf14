use super::ColorAccum;
use crate::reciprocal::{reciprocal, RECIPROCAL_ROUNDING, RECIPROCAL_SHIFT};
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// SSE2 implementation of [`ColorAccum::div_scalar`], dividing all 4 channels at once.
///
/// # Safety
///
/// The CPU must support SSE2.
///
/// # Panics
///
/// If `divisor` is greater than 256.
#[target_feature(enable = "sse2")]
pub unsafe fn div_scalar_sse2(accum: &mut ColorAccum, divisor: u16) {
    let recip = reciprocal(divisor) as i32;

    // The reciprocal for a divisor of 1 (32768) doesn't fit an i16 multiplier, so it is split in
    // two halves; madd multiplies each copy of a channel by one half and adds the products.
    let recip_lo = recip / 2;
    let recip_hi = recip - recip_lo;
    let multiplier = _mm_set1_epi32((recip_hi << 16) | recip_lo);

    let ptr = accum.ch.as_mut_ptr() as *mut __m128i;
    let channels = _mm_loadl_epi64(ptr);

    // [r, r, g, g, b, b, a, a]
    let doubled = _mm_unpacklo_epi16(channels, channels);
    let products = _mm_madd_epi16(doubled, multiplier);
    let rounded = _mm_add_epi32(products, _mm_set1_epi32(RECIPROCAL_ROUNDING));
    let quotients = _mm_srai_epi32::<{ RECIPROCAL_SHIFT as i32 }>(rounded);

    // Quotients are never larger in magnitude than the sums, so the saturating pack is exact.
    _mm_storel_epi64(ptr, _mm_packs_epi32(quotients, quotients));
}
