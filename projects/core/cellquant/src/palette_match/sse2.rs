use crate::color_8888::{Color8888, RGB_MASK_U32};
use crate::intrinsics::sse2::{rgb_distance_x4, widen_color};
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// SSE2 implementation of [`crate::find_nearest_palette_index`], comparing 4 entries per
/// iteration.
///
/// Returns 0 for an empty palette.
///
/// # Safety
///
/// The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn find_nearest_palette_index_sse2(target: Color8888, palette: &[Color8888]) -> usize {
    let rgb_mask = _mm_set1_epi32(RGB_MASK_U32 as i32);
    let reference = widen_color(target.to_u32() & RGB_MASK_U32);

    // Each lane tracks the nearest entry among the indices congruent to it mod 4.
    let mut best_distance = _mm_set1_epi32(i32::MAX);
    let mut best_index = _mm_setzero_si128();
    let mut index = _mm_setr_epi32(0, 1, 2, 3);
    let step = _mm_set1_epi32(4);

    let mut chunks = palette.chunks_exact(4);
    for chunk in &mut chunks {
        let entries = _mm_and_si128(_mm_loadu_si128(chunk.as_ptr() as *const __m128i), rgb_mask);
        let distance = rgb_distance_x4(entries, reference);

        let nearer = _mm_cmplt_epi32(distance, best_distance);
        best_distance = _mm_or_si128(
            _mm_and_si128(nearer, distance),
            _mm_andnot_si128(nearer, best_distance),
        );
        best_index = _mm_or_si128(
            _mm_and_si128(nearer, index),
            _mm_andnot_si128(nearer, best_index),
        );
        index = _mm_add_epi32(index, step);
    }

    let mut lane_distances = [0i32; 4];
    let mut lane_indices = [0i32; 4];
    _mm_storeu_si128(lane_distances.as_mut_ptr() as *mut __m128i, best_distance);
    _mm_storeu_si128(lane_indices.as_mut_ptr() as *mut __m128i, best_index);

    // Ties between lanes go to the lowest index.
    let (mut nearest_distance, mut nearest_index) = lane_distances
        .iter()
        .zip(lane_indices.iter())
        .map(|(&distance, &index)| (distance as u32, index as usize))
        .min()
        .unwrap_or((u32::MAX, 0));

    // Any remaining entries come after every vectorized one, so a strict comparison keeps ties
    // on the earlier index.
    let remainder_start = palette.len() - chunks.remainder().len();
    for (offset, &entry) in chunks.remainder().iter().enumerate() {
        let distance = target.rgb_distance(entry);
        if distance < nearest_distance {
            nearest_distance = distance;
            nearest_index = remainder_start + offset;
        }
    }

    nearest_index
}
