//! Building cells from slices.

use crate::error::CellQuantError;
use cellquant::{Color8888, CoverageMask, PIXELS_PER_CELL, PixelBlock};

/// Builds a [`PixelBlock`] from 64 pixels in row-major order.
///
/// # Errors
///
/// - [`CellQuantError::InvalidBlockLength`] if `pixels` doesn't contain exactly 64 pixels
///
/// # Examples
///
/// ```
/// # use cellquant_api::{pixel_block_from_slice, Color8888, CellQuantError};
/// let pixels = vec![Color8888::opaque(1, 2, 3); 64];
/// let block = pixel_block_from_slice(&pixels)?;
/// assert_eq!(block.pixels[63], Color8888::opaque(1, 2, 3));
///
/// assert!(pixel_block_from_slice(&pixels[..63]).is_err());
/// # Ok::<(), CellQuantError>(())
/// ```
pub fn pixel_block_from_slice(pixels: &[Color8888]) -> Result<PixelBlock, CellQuantError> {
    let pixels: &[Color8888; PIXELS_PER_CELL] = pixels
        .try_into()
        .map_err(|_| CellQuantError::InvalidBlockLength(pixels.len()))?;
    Ok(PixelBlock::from_pixels(*pixels))
}

/// Builds a [`PixelBlock`] from 256 bytes of tightly packed RGBA data in row-major order.
///
/// # Errors
///
/// - [`CellQuantError::InvalidBlockLength`] if `bytes` isn't exactly 256 bytes long
pub fn pixel_block_from_rgba_bytes(bytes: &[u8]) -> Result<PixelBlock, CellQuantError> {
    let bytes: &[u8; PIXELS_PER_CELL * 4] = bytes
        .try_into()
        .map_err(|_| CellQuantError::InvalidBlockLength(bytes.len()))?;
    Ok(PixelBlock::from_rgba_bytes(bytes))
}

/// Builds a [`CoverageMask`] from 64 foreground flags in pixel order.
///
/// # Errors
///
/// - [`CellQuantError::InvalidMaskLength`] if `flags` doesn't contain exactly 64 flags
pub fn coverage_mask_from_flags(flags: &[bool]) -> Result<CoverageMask, CellQuantError> {
    let flags: &[bool; PIXELS_PER_CELL] = flags
        .try_into()
        .map_err(|_| CellQuantError::InvalidMaskLength(flags.len()))?;
    Ok(CoverageMask::from_flags(flags))
}
