//! Per-cell scoring, mask synthesis and mean color operations over pixel slices.
//!
//! Coverage masks are passed as packed bitmaps: pixel `i` is bit `63 - i`.

use crate::block::pixel_block_from_slice;
use crate::error::CellQuantError;
use cellquant::reciprocal::MAX_DIVISOR;
use cellquant::{Color8888, ColorAccum, ColorPair, CoverageMask};

/// Calculates the error of approximating a cell with `pair`, using `bitmap` to pick the
/// endpoint for each pixel.
///
/// See [`cellquant::calc_cell_error`].
///
/// # Errors
///
/// - [`CellQuantError::InvalidBlockLength`] if `pixels` doesn't contain exactly 64 pixels
///
/// # Examples
///
/// ```
/// # use cellquant_api::{calc_cell_error, Color8888, ColorPair, CellQuantError};
/// let pixels = vec![Color8888::opaque(10, 0, 0); 64];
/// let pair = ColorPair::new(Color8888::opaque(0, 0, 0), Color8888::opaque(10, 0, 0));
///
/// assert_eq!(calc_cell_error(&pixels, &pair, 0)?, 0);
/// assert_eq!(calc_cell_error(&pixels, &pair, u64::MAX)?, 64 * 100);
/// # Ok::<(), CellQuantError>(())
/// ```
pub fn calc_cell_error(
    pixels: &[Color8888],
    pair: &ColorPair,
    bitmap: u64,
) -> Result<u32, CellQuantError> {
    let block = pixel_block_from_slice(pixels)?;
    Ok(cellquant::calc_cell_error(
        &block,
        pair,
        &CoverageMask::from_bitmap(bitmap),
    ))
}

/// Calculates the coverage bitmap of a cell which minimizes the error against `pair`.
///
/// See [`cellquant::calc_cell_bitmap`].
///
/// # Errors
///
/// - [`CellQuantError::InvalidBlockLength`] if `pixels` doesn't contain exactly 64 pixels
pub fn calc_cell_bitmap(pixels: &[Color8888], pair: &ColorPair) -> Result<u64, CellQuantError> {
    let block = pixel_block_from_slice(pixels)?;
    Ok(cellquant::calc_cell_bitmap(&block, pair))
}

/// Sums the background (`[0]`) and foreground (`[1]`) pixels of a cell separately.
///
/// See [`cellquant::extract_cell_mean_colors`].
///
/// # Errors
///
/// - [`CellQuantError::InvalidBlockLength`] if `pixels` doesn't contain exactly 64 pixels
pub fn extract_cell_mean_colors(
    pixels: &[Color8888],
    bitmap: u64,
) -> Result<[ColorAccum; 2], CellQuantError> {
    let block = pixel_block_from_slice(pixels)?;
    Ok(cellquant::extract_cell_mean_colors(
        &block,
        &CoverageMask::from_bitmap(bitmap),
    ))
}

/// Divides every channel of `accum` by `divisor` with the fixed-point reciprocal table,
/// `(ch * RECIPROCALS[divisor] + (1 << 14)) >> 15`. For divisors up to 64 the result is within 1
/// of the true average, but not always the nearest integer (`3 / 6` gives 0).
/// A divisor of 0 sets every channel to 0.
///
/// See [`ColorAccum::div_scalar`].
///
/// # Errors
///
/// - [`CellQuantError::InvalidDivisor`] if `divisor` is greater than 256
///
/// # Examples
///
/// ```
/// # use cellquant_api::{div_color_accum, ColorAccum, CellQuantError};
/// let mut accum = ColorAccum::new(6400, 9600, 12800, 16320);
/// div_color_accum(&mut accum, 64)?;
/// assert_eq!(accum, ColorAccum::new(100, 150, 200, 255));
///
/// assert_eq!(
///     div_color_accum(&mut accum, 257),
///     Err(CellQuantError::InvalidDivisor(257))
/// );
/// # Ok::<(), CellQuantError>(())
/// ```
pub fn div_color_accum(accum: &mut ColorAccum, divisor: u16) -> Result<(), CellQuantError> {
    if divisor > MAX_DIVISOR {
        return Err(CellQuantError::InvalidDivisor(divisor));
    }

    accum.div_scalar(divisor);
    Ok(())
}

/// Computes the mean foreground and background colors of a cell under `bitmap`.
///
/// See [`cellquant::calc_mean_color_pair`].
///
/// # Errors
///
/// - [`CellQuantError::InvalidBlockLength`] if `pixels` doesn't contain exactly 64 pixels
pub fn calc_mean_color_pair(
    pixels: &[Color8888],
    bitmap: u64,
) -> Result<ColorPair, CellQuantError> {
    let block = pixel_block_from_slice(pixels)?;
    Ok(cellquant::calc_mean_color_pair(
        &block,
        &CoverageMask::from_bitmap(bitmap),
    ))
}
