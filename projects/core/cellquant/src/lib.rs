#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

mod cell_bitmap;
mod cell_error;
mod color_8888;
mod color_accum;
mod coverage_mask;
mod intrinsics;
mod mean_colors;
mod palette_match;
mod pixel_block;

pub mod cpu_detect;
pub mod reciprocal;

pub use cell_bitmap::calc_cell_bitmap;
pub use cell_error::calc_cell_error;
pub use color_8888::{Color8888, ColorPair};
pub use color_accum::ColorAccum;
pub use coverage_mask::{CoverageMask, BACKGROUND_WORD, FOREGROUND_WORD};
pub use mean_colors::{calc_mean_color_pair, extract_cell_mean_colors};
pub use palette_match::find_nearest_palette_index;
pub use pixel_block::{PixelBlock, CELL_HEIGHT, CELL_WIDTH, PIXELS_PER_CELL};

// Re-export functions for benchmarking when the 'bench' feature is enabled
#[cfg(feature = "bench")]
pub mod bench;

#[cfg(test)]
pub(crate) mod test_prelude;
