//! # Palette Matching
//!
//! Finds the entry of a palette nearest to a target color, measured as the squared RGB distance
//! (see [`Color8888::rgb_distance`]). Alpha is ignored.
//!
//! When several entries are equally near, the one with the lowest index wins. Palettes come from
//! the output device and are often built from overlapping color cubes, so exact duplicates are
//! common and the choice has to be stable.

pub(crate) mod generic;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod sse2;

#[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
pub(crate) mod wasm_simd;

use crate::color_8888::Color8888;

/// Returns the index of the entry in `palette` nearest to `target`.
/// Uses the best known implementation for the current CPU.
///
/// # Panics
///
/// If `palette` is empty.
///
/// # Examples
///
/// ```
/// use cellquant::{find_nearest_palette_index, Color8888};
///
/// let palette = [Color8888::opaque(0, 0, 0), Color8888::opaque(255, 255, 255)];
/// assert_eq!(find_nearest_palette_index(Color8888::opaque(10, 10, 10), &palette), 0);
/// assert_eq!(find_nearest_palette_index(Color8888::opaque(200, 200, 200), &palette), 1);
/// ```
#[inline]
#[allow(unreachable_code)]
pub fn find_nearest_palette_index(target: Color8888, palette: &[Color8888]) -> usize {
    assert!(!palette.is_empty(), "palette must contain at least one color");

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    return unsafe { find_nearest_palette_index_x86(target, palette) };

    #[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
    return unsafe { wasm_simd::find_nearest_palette_index_wasm_simd(target, palette) };

    generic::find_nearest_palette_index_generic(target, palette)
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn find_nearest_palette_index_x86(target: Color8888, palette: &[Color8888]) -> usize {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        use crate::cpu_detect::*;

        if has_sse2() {
            return sse2::find_nearest_palette_index_sse2(target, palette);
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        if cfg!(target_feature = "sse2") {
            return sse2::find_nearest_palette_index_sse2(target, palette);
        }
    }

    generic::find_nearest_palette_index_generic(target, palette)
}
