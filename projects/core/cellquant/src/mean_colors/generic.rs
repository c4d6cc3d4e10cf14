use crate::color_accum::ColorAccum;
use crate::coverage_mask::{CoverageMask, BACKGROUND_WORD};
use crate::pixel_block::PixelBlock;

/// Scalar reference implementation of [`crate::extract_cell_mean_colors`].
#[inline]
pub fn extract_cell_mean_colors_generic(
    block: &PixelBlock,
    mask: &CoverageMask,
) -> [ColorAccum; 2] {
    let mut accums = [ColorAccum::ZERO; 2];
    for (&pixel, &word) in block.pixels.iter().zip(mask.words().iter()) {
        accums[(word != BACKGROUND_WORD) as usize].add_color(pixel);
    }
    accums
}
