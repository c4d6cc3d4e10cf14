use super::ColorAccum;
use crate::reciprocal::{reciprocal, RECIPROCAL_ROUNDING, RECIPROCAL_SHIFT};
use core::arch::wasm32::*;

/// WebAssembly SIMD implementation of [`ColorAccum::div_scalar`], dividing all 4 channels at once.
///
/// # Safety
///
/// Requires the `simd128` target feature, which is checked at compile time.
///
/// # Panics
///
/// If `divisor` is greater than 256.
#[target_feature(enable = "simd128")]
pub unsafe fn div_scalar_wasm_simd(accum: &mut ColorAccum, divisor: u16) {
    let recip = reciprocal(divisor) as i32;

    // Split so each half fits an i16 lane; see the SSE2 version.
    let recip_lo = recip / 2;
    let recip_hi = recip - recip_lo;
    let multiplier = i32x4_splat((recip_hi << 16) | recip_lo);

    let ptr = accum.ch.as_mut_ptr();
    let channels = v128_load64_zero(ptr as *const u64);

    let doubled = i16x8_shuffle::<0, 0, 1, 1, 2, 2, 3, 3>(channels, channels);
    let products = i32x4_dot_i16x8(doubled, multiplier);
    let rounded = i32x4_add(products, i32x4_splat(RECIPROCAL_ROUNDING));
    let quotients = i32x4_shr(rounded, RECIPROCAL_SHIFT);

    v128_store64_lane::<0>(i16x8_narrow_i32x4(quotients, quotients), ptr as *mut u64);
}
