//! # Cell Error
//!
//! Scores how well a [`ColorPair`] and [`CoverageMask`] represent a [`PixelBlock`].
//!
//! For every pixel, the mask selects either the foreground or the background color; the error
//! is the sum over all 64 pixels of the squared per-channel difference between that selected
//! color and the pixel:
//!
//! ```text
//! error = Σ (sel.r - px.r)² + (sel.g - px.g)² + (sel.b - px.b)²
//! ```
//!
//! Alpha does not contribute to the error. Differences are taken after widening the
//! channels, so they never wrap around. The largest possible error is `64 * 3 * 255²`.
//!
//! The result is only used to rank candidates against each other (lower is better), which
//! makes this the hot path of symbol selection: it runs once per candidate symbol per cell.

pub(crate) mod generic;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod sse2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod avx2;

#[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
pub(crate) mod wasm_simd;

use crate::color_8888::ColorPair;
use crate::coverage_mask::CoverageMask;
use crate::pixel_block::PixelBlock;

/// Calculates the error of approximating `block` with `pair`, using `mask` to pick the
/// endpoint for each pixel. Uses the best known implementation for the current CPU.
///
/// # Examples
///
/// ```
/// use cellquant::{calc_cell_error, Color8888, ColorPair, CoverageMask, PixelBlock};
///
/// let block = PixelBlock::new(Color8888::new(10, 20, 30, 255));
/// let pair = ColorPair::new(Color8888::new(10, 20, 30, 0), Color8888::new(0, 0, 0, 0));
///
/// assert_eq!(calc_cell_error(&block, &pair, &CoverageMask::ALL_FOREGROUND), 0);
/// assert_eq!(
///     calc_cell_error(&block, &pair, &CoverageMask::ALL_BACKGROUND),
///     64 * (10 * 10 + 20 * 20 + 30 * 30)
/// );
/// ```
#[inline]
#[allow(unreachable_code)]
pub fn calc_cell_error(block: &PixelBlock, pair: &ColorPair, mask: &CoverageMask) -> u32 {
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    return unsafe { calc_cell_error_x86(block, pair, mask) };

    #[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
    return unsafe { wasm_simd::calc_cell_error_wasm_simd(block, pair, mask) };

    generic::calc_cell_error_generic(block, pair, mask)
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn calc_cell_error_x86(block: &PixelBlock, pair: &ColorPair, mask: &CoverageMask) -> u32 {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        use crate::cpu_detect::*;

        if has_avx2() {
            return avx2::calc_cell_error_avx2(block, pair, mask);
        }

        if has_sse2() {
            return sse2::calc_cell_error_sse2(block, pair, mask);
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        if cfg!(target_feature = "avx2") {
            return avx2::calc_cell_error_avx2(block, pair, mask);
        }

        if cfg!(target_feature = "sse2") {
            return sse2::calc_cell_error_sse2(block, pair, mask);
        }
    }

    generic::calc_cell_error_generic(block, pair, mask)
}
