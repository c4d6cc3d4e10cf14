//! # Cell Bitmap
//!
//! Derives the coverage bitmap which best represents a [`PixelBlock`] with a given [`ColorPair`].
//!
//! Each pixel is assigned to whichever endpoint it is closer to (squared RGB distance). A pixel
//! is placed in the foreground only when its distance to the background is strictly greater than
//! its distance to the foreground; equal distances stay in the background.
//!
//! Since every pixel picks the closer endpoint independently, the resulting mask has the lowest
//! [`crate::calc_cell_error`] of any mask for the same block and pair.
//!
//! The result uses the packed bitmap layout described in [`crate::CoverageMask`]:
//! pixel `i` is bit `63 - i`.

pub(crate) mod generic;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod sse2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod avx2;

#[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
pub(crate) mod wasm_simd;

use crate::color_8888::ColorPair;
use crate::pixel_block::PixelBlock;

/// Calculates the coverage bitmap for `block` which minimizes the error against `pair`.
/// Uses the best known implementation for the current CPU.
///
/// # Examples
///
/// ```
/// use cellquant::{calc_cell_bitmap, Color8888, ColorPair, PixelBlock};
///
/// let fg = Color8888::new(255, 255, 255, 255);
/// let bg = Color8888::new(0, 0, 0, 255);
///
/// let mut block = PixelBlock::new(bg);
/// block.pixels[0] = Color8888::new(200, 200, 200, 255);
///
/// assert_eq!(calc_cell_bitmap(&block, &ColorPair::new(fg, bg)), 1 << 63);
/// ```
#[inline]
#[allow(unreachable_code)]
pub fn calc_cell_bitmap(block: &PixelBlock, pair: &ColorPair) -> u64 {
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    return unsafe { calc_cell_bitmap_x86(block, pair) };

    #[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
    return unsafe { wasm_simd::calc_cell_bitmap_wasm_simd(block, pair) };

    generic::calc_cell_bitmap_generic(block, pair)
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn calc_cell_bitmap_x86(block: &PixelBlock, pair: &ColorPair) -> u64 {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        use crate::cpu_detect::*;

        if has_avx2() {
            return avx2::calc_cell_bitmap_avx2(block, pair);
        }

        if has_sse2() {
            return sse2::calc_cell_bitmap_sse2(block, pair);
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        if cfg!(target_feature = "avx2") {
            return avx2::calc_cell_bitmap_avx2(block, pair);
        }

        if cfg!(target_feature = "sse2") {
            return sse2::calc_cell_bitmap_sse2(block, pair);
        }
    }

    generic::calc_cell_bitmap_generic(block, pair)
}
