use crate::color_8888::ColorPair;
use crate::pixel_block::PixelBlock;

/// Scalar reference implementation of [`crate::calc_cell_bitmap`].
#[inline]
pub fn calc_cell_bitmap_generic(block: &PixelBlock, pair: &ColorPair) -> u64 {
    block.pixels.iter().fold(0u64, |bitmap, &pixel| {
        let foreground = pixel.rgb_distance(pair.bg) > pixel.rgb_distance(pair.fg);
        (bitmap << 1) | foreground as u64
    })
}
