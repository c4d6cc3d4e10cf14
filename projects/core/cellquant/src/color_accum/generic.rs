use super::ColorAccum;
use crate::reciprocal::{reciprocal, RECIPROCAL_ROUNDING, RECIPROCAL_SHIFT};

/// Scalar reference implementation of [`ColorAccum::div_scalar`].
///
/// # Panics
///
/// If `divisor` is greater than 256.
#[inline]
pub fn div_scalar_generic(accum: &mut ColorAccum, divisor: u16) {
    let recip = reciprocal(divisor) as i32;
    for c in accum.ch.iter_mut() {
        *c = ((*c as i32 * recip + RECIPROCAL_ROUNDING) >> RECIPROCAL_SHIFT) as i16;
    }
}
