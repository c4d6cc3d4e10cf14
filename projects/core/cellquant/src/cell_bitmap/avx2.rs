use crate::color_8888::{ColorPair, RGB_MASK_U32};
use crate::intrinsics::avx2::{rgb_distance_x8, widen_color};
use crate::pixel_block::{PixelBlock, PIXELS_PER_CELL};
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// AVX2 implementation of [`crate::calc_cell_bitmap`], processing 8 pixels per iteration.
///
/// # Safety
///
/// The CPU must support AVX2.
#[target_feature(enable = "avx2")]
pub unsafe fn calc_cell_bitmap_avx2(block: &PixelBlock, pair: &ColorPair) -> u64 {
    let pixels_ptr = block.as_ptr() as *const __m256i;
    let rgb_mask = _mm256_set1_epi32(RGB_MASK_U32 as i32);
    let fg = widen_color(pair.fg.to_u32() & RGB_MASK_U32);
    let bg = widen_color(pair.bg.to_u32() & RGB_MASK_U32);

    let mut bitmap = 0u64;
    for x in 0..PIXELS_PER_CELL / 8 {
        let pixels = _mm256_and_si256(_mm256_loadu_si256(pixels_ptr.add(x)), rgb_mask);
        let foreground =
            _mm256_cmpgt_epi32(rgb_distance_x8(pixels, bg), rgb_distance_x8(pixels, fg));
        let bits = _mm256_movemask_ps(_mm256_castsi256_ps(foreground)) as u32 as u64;
        bitmap |= bits << (x * 8);
    }

    bitmap.reverse_bits()
}
