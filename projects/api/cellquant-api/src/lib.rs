#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

// Module declarations
pub mod block;
pub mod cell;
pub mod error;
pub mod palette;

// Re-export main functionality at crate root
pub use block::{coverage_mask_from_flags, pixel_block_from_rgba_bytes, pixel_block_from_slice};
pub use cell::{
    calc_cell_bitmap, calc_cell_error, calc_mean_color_pair, div_color_accum,
    extract_cell_mean_colors,
};
pub use error::CellQuantError;
pub use palette::find_nearest_palette_index;

// Types shared with the core crate
pub use cellquant::{Color8888, ColorAccum, ColorPair, CoverageMask, PixelBlock, PIXELS_PER_CELL};
