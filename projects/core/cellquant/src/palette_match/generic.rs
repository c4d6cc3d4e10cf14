use crate::color_8888::Color8888;
use multiversion::multiversion;

/// Scalar reference implementation of [`crate::find_nearest_palette_index`].
///
/// Returns 0 for an empty palette; callers are expected to have rejected that already.
///
/// The dispatcher only falls back to this on targets without SSE2 or SIMD128. On x86_64 it is
/// reached only as the reference for tests, benches and fuzzing, which is what the clones are for.
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
pub fn find_nearest_palette_index_generic(target: Color8888, palette: &[Color8888]) -> usize {
    let mut best_index = 0;
    let mut best_distance = u32::MAX;
    for (index, &entry) in palette.iter().enumerate() {
        let distance = target.rgb_distance(entry);
        // Strict comparison keeps the earliest of equally near entries.
        if distance < best_distance {
            best_distance = distance;
            best_index = index;
        }
    }
    best_index
}
