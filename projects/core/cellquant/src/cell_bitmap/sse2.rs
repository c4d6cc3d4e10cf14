use crate::color_8888::{ColorPair, RGB_MASK_U32};
use crate::intrinsics::sse2::{rgb_distance_x4, widen_color};
use crate::pixel_block::{PixelBlock, PIXELS_PER_CELL};
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// SSE2 implementation of [`crate::calc_cell_bitmap`], processing 4 pixels per iteration.
///
/// # Safety
///
/// The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn calc_cell_bitmap_sse2(block: &PixelBlock, pair: &ColorPair) -> u64 {
    let pixels_ptr = block.as_ptr() as *const __m128i;
    let rgb_mask = _mm_set1_epi32(RGB_MASK_U32 as i32);
    let fg = widen_color(pair.fg.to_u32() & RGB_MASK_U32);
    let bg = widen_color(pair.bg.to_u32() & RGB_MASK_U32);

    // Built with pixel i at bit i, then reversed into the canonical order.
    let mut bitmap = 0u64;
    for x in 0..PIXELS_PER_CELL / 4 {
        let pixels = _mm_and_si128(_mm_loadu_si128(pixels_ptr.add(x)), rgb_mask);
        let foreground = _mm_cmpgt_epi32(rgb_distance_x4(pixels, bg), rgb_distance_x4(pixels, fg));
        let bits = _mm_movemask_ps(_mm_castsi128_ps(foreground)) as u64;
        bitmap |= bits << (x * 4);
    }

    bitmap.reverse_bits()
}
