use crate::color_8888::{Color8888, RGB_MASK_U32};
use crate::intrinsics::wasm_simd::{rgb_distance_x4, widen_color};
use core::arch::wasm32::*;

/// WebAssembly SIMD implementation of [`crate::find_nearest_palette_index`], comparing 4
/// entries per iteration.
///
/// Returns 0 for an empty palette.
///
/// # Safety
///
/// Requires the `simd128` target feature, which is checked at compile time.
#[target_feature(enable = "simd128")]
pub unsafe fn find_nearest_palette_index_wasm_simd(
    target: Color8888,
    palette: &[Color8888],
) -> usize {
    let rgb_mask = u32x4_splat(RGB_MASK_U32);
    let reference = widen_color(target.to_u32() & RGB_MASK_U32);

    let mut best_distance = i32x4_splat(i32::MAX);
    let mut best_index = i32x4_splat(0);
    let mut index = i32x4(0, 1, 2, 3);
    let step = i32x4_splat(4);

    let mut chunks = palette.chunks_exact(4);
    for chunk in &mut chunks {
        let entries = v128_and(v128_load(chunk.as_ptr() as *const v128), rgb_mask);
        let distance = rgb_distance_x4(entries, reference);

        let nearer = i32x4_lt(distance, best_distance);
        best_distance = v128_bitselect(distance, best_distance, nearer);
        best_index = v128_bitselect(index, best_index, nearer);
        index = i32x4_add(index, step);
    }

    let mut lane_distances = [0i32; 4];
    let mut lane_indices = [0i32; 4];
    v128_store(lane_distances.as_mut_ptr() as *mut v128, best_distance);
    v128_store(lane_indices.as_mut_ptr() as *mut v128, best_index);

    let (mut nearest_distance, mut nearest_index) = lane_distances
        .iter()
        .zip(lane_indices.iter())
        .map(|(&distance, &index)| (distance as u32, index as usize))
        .min()
        .unwrap_or((u32::MAX, 0));

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
