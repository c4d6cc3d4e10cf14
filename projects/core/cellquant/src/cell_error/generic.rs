use crate::color_8888::ColorPair;
use crate::coverage_mask::{CoverageMask, BACKGROUND_WORD};
use crate::pixel_block::PixelBlock;

/// Scalar reference implementation of [`crate::calc_cell_error`].
///
/// Evaluates one pixel at a time; every vectorized implementation must produce exactly
/// the same result.
#[inline]
pub fn calc_cell_error_generic(block: &PixelBlock, pair: &ColorPair, mask: &CoverageMask) -> u32 {
    block
        .pixels
        .iter()
        .zip(mask.words().iter())
        .map(|(&pixel, &word)| pair.select(word != BACKGROUND_WORD).rgb_distance(pixel))
        .sum()
}
