//! # Mean Colors
//!
//! Splits the pixels of a [`PixelBlock`] into two groups using a [`CoverageMask`] and sums each
//! group into a [`ColorAccum`]. The result is always ordered background first:
//!
//! - `[0]`: sum of the pixels whose mask word is clear (background)
//! - `[1]`: sum of the pixels whose mask word is set (foreground)
//!
//! Every pixel lands in exactly one group, so the two sums always add up to
//! [`PixelBlock::channel_sums`].
//!
//! [`calc_mean_color_pair`] combines this with [`ColorAccum::div_scalar`] to produce the
//! mean-color [`ColorPair`] for a mask.

pub(crate) mod generic;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod sse2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod avx2;

#[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
pub(crate) mod wasm_simd;

use crate::color_8888::ColorPair;
use crate::color_accum::ColorAccum;
use crate::coverage_mask::CoverageMask;
use crate::pixel_block::{PixelBlock, PIXELS_PER_CELL};

/// Sums the background (`[0]`) and foreground (`[1]`) pixels of `block` separately.
/// Uses the best known implementation for the current CPU.
///
/// # Examples
///
/// ```
/// use cellquant::{extract_cell_mean_colors, Color8888, ColorAccum, CoverageMask, PixelBlock};
///
/// let block = PixelBlock::new(Color8888::new(100, 150, 200, 255));
/// let [bg, fg] = extract_cell_mean_colors(&block, &CoverageMask::ALL_FOREGROUND);
///
/// assert_eq!(bg, ColorAccum::ZERO);
/// assert_eq!(fg, ColorAccum::new(6400, 9600, 12800, 16320));
/// ```
#[inline]
#[allow(unreachable_code)]
pub fn extract_cell_mean_colors(block: &PixelBlock, mask: &CoverageMask) -> [ColorAccum; 2] {
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    return unsafe { extract_cell_mean_colors_x86(block, mask) };

    #[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
    return unsafe { wasm_simd::extract_cell_mean_colors_wasm_simd(block, mask) };

    generic::extract_cell_mean_colors_generic(block, mask)
}

/// Computes the mean foreground and background colors of `block` under `mask`.
///
/// The background sum is divided by the number of background pixels and the foreground sum by
/// the number of foreground pixels. A group with no pixels gets a mean of all zeros.
///
/// # Examples
///
/// ```
/// use cellquant::{calc_mean_color_pair, Color8888, CoverageMask, PixelBlock};
///
/// let red = Color8888::new(255, 0, 0, 255);
/// let blue = Color8888::new(0, 0, 255, 255);
/// let mut block = PixelBlock::new(blue);
/// block.pixels[..32].fill(red);
///
/// let pair = calc_mean_color_pair(&block, &CoverageMask::from_bitmap(0xFFFF_FFFF_0000_0000));
/// assert_eq!(pair.fg, red);
/// assert_eq!(pair.bg, blue);
/// ```
#[inline]
pub fn calc_mean_color_pair(block: &PixelBlock, mask: &CoverageMask) -> ColorPair {
    let foreground_count = mask.foreground_count() as u16;
    let [mut bg, mut fg] = extract_cell_mean_colors(block, mask);
    bg.div_scalar(PIXELS_PER_CELL as u16 - foreground_count);
    fg.div_scalar(foreground_count);
    ColorPair::new(fg.to_color(), bg.to_color())
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn extract_cell_mean_colors_x86(
    block: &PixelBlock,
    mask: &CoverageMask,
) -> [ColorAccum; 2] {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        use crate::cpu_detect::*;

        if has_avx2() {
            return avx2::extract_cell_mean_colors_avx2(block, mask);
        }

        if has_sse2() {
            return sse2::extract_cell_mean_colors_sse2(block, mask);
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        if cfg!(target_feature = "avx2") {
            return avx2::extract_cell_mean_colors_avx2(block, mask);
        }

        if cfg!(target_feature = "sse2") {
            return sse2::extract_cell_mean_colors_sse2(block, mask);
        }
    }

    generic::extract_cell_mean_colors_generic(block, mask)
}
