//! # Pixel Block
//!
//! This module provides the [`PixelBlock`] structure: the 64 source pixels covered by a single
//! terminal cell.
//!
//! ## Memory Layout
//!
//! The pixels are stored in row-major order, 8 pixels per row:
//! ```text
//! [ 0] [ 1] [ 2] [ 3] [ 4] [ 5] [ 6] [ 7]
//! [ 8] [ 9] [10] [11] [12] [13] [14] [15]
//!  ..
//! [56] [57] [58] [59] [60] [61] [62] [63]
//! ```
//!
//! The pixel index is the index used by every coverage mask representation in this crate
//! (see [`crate::CoverageMask`]).

use crate::color_8888::Color8888;

/// Width of a cell, in pixels.
pub const CELL_WIDTH: usize = 8;

/// Height of a cell, in pixels.
pub const CELL_HEIGHT: usize = 8;

/// Number of pixels in a single cell.
pub const PIXELS_PER_CELL: usize = CELL_WIDTH * CELL_HEIGHT;

/// Represents the 64 pixels of a single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C, align(32))]
pub struct PixelBlock {
    /// The 64 pixels in the block (row-major order)
    /// (i.e. `pixels[0]` is top-left, `pixels[7]` is top-right, etc.)
    pub pixels: [Color8888; PIXELS_PER_CELL],
}

impl PixelBlock {
    /// Constructs a new block initialised with 64 copies of the provided pixel.
    ///
    /// # Examples
    ///
    /// ```
    /// use cellquant::{Color8888, PixelBlock};
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// let block = PixelBlock::new(pixel);
    /// assert!(block.pixels.iter().all(|&p| p == pixel));
    /// ```
    #[inline]
    pub const fn new(pixel: Color8888) -> Self {
        Self {
            pixels: [pixel; PIXELS_PER_CELL],
        }
    }

    /// Constructs a block from an array of pixels in row-major order.
    #[inline]
    pub const fn from_pixels(pixels: [Color8888; PIXELS_PER_CELL]) -> Self {
        Self { pixels }
    }

    /// Constructs a block from 256 bytes of tightly packed RGBA data in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cellquant::{Color8888, PixelBlock};
    ///
    /// let mut bytes = [0u8; 256];
    /// bytes[..4].copy_from_slice(&[1, 2, 3, 4]);
    /// let block = PixelBlock::from_rgba_bytes(&bytes);
    /// assert_eq!(block.pixels[0], Color8888::new(1, 2, 3, 4));
    /// assert_eq!(block.pixels[1], Color8888::new(0, 0, 0, 0));
    /// ```
    pub fn from_rgba_bytes(bytes: &[u8; PIXELS_PER_CELL * 4]) -> Self {
        let mut pixels = [Color8888::default(); PIXELS_PER_CELL];
        for (pixel, rgba) in pixels.iter_mut().zip(bytes.chunks_exact(4)) {
            *pixel = Color8888::new(rgba[0], rgba[1], rgba[2], rgba[3]);
        }
        Self { pixels }
    }

    /// Gets a pixel at the specified coordinates (0-7, 0-7).
    ///
    /// # Panics
    ///
    /// If `x` or `y` is 8 or greater.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Color8888 {
        assert!(x < CELL_WIDTH && y < CELL_HEIGHT, "pixel ({x}, {y}) is outside the cell");
        self.pixels[y * CELL_WIDTH + x]
    }

    /// Sets a pixel at the specified coordinates (0-7, 0-7).
    ///
    /// # Panics
    ///
    /// If `x` or `y` is 8 or greater.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Color8888) {
        assert!(x < CELL_WIDTH && y < CELL_HEIGHT, "pixel ({x}, {y}) is outside the cell");
        self.pixels[y * CELL_WIDTH + x] = pixel;
    }

    /// Returns the per-channel (R, G, B, A) sum of every pixel in the block.
    pub fn channel_sums(&self) -> [i32; 4] {
        self.pixels.iter().fold([0i32; 4], |mut sums, pixel| {
            sums[0] += pixel.r as i32;
            sums[1] += pixel.g as i32;
            sums[2] += pixel.b as i32;
            sums[3] += pixel.a as i32;
            sums
        })
    }

    /// Raw pointer to the first pixel, for the SIMD kernels.
    #[inline(always)]
    pub(crate) fn as_ptr(&self) -> *const Color8888 {
        self.pixels.as_ptr()
    }
}

impl Default for PixelBlock {
    fn default() -> Self {
        Self::new(Color8888::default())
    }
}

impl From<[Color8888; PIXELS_PER_CELL]> for PixelBlock {
    fn from(pixels: [Color8888; PIXELS_PER_CELL]) -> Self {
        Self::from_pixels(pixels)
    }
}
