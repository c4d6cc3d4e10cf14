//! Kernel implementations re-exported for external benchmarks and fuzzing.
//!
//! Every operation is normally reached through its dispatcher, which picks an implementation
//! for the current CPU. With the `bench` feature enabled, the individual implementations can be
//! called directly, so they can be measured and compared against each other.
#![allow(clippy::missing_safety_doc)]
#![cfg(not(tarpaulin_include))]
#![allow(missing_docs)]

pub mod cell_error {
    //! Cell error implementations

    pub use crate::cell_error::generic::calc_cell_error_generic;

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub use crate::cell_error::avx2::calc_cell_error_avx2;
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub use crate::cell_error::sse2::calc_cell_error_sse2;

    #[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
    pub use crate::cell_error::wasm_simd::calc_cell_error_wasm_simd;
}

pub mod cell_bitmap {
    //! Cell bitmap implementations

    pub use crate::cell_bitmap::generic::calc_cell_bitmap_generic;

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub use crate::cell_bitmap::avx2::calc_cell_bitmap_avx2;
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub use crate::cell_bitmap::sse2::calc_cell_bitmap_sse2;

    #[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
    pub use crate::cell_bitmap::wasm_simd::calc_cell_bitmap_wasm_simd;
}

pub mod mean_colors {
    //! Mean color extraction implementations

    pub use crate::mean_colors::generic::extract_cell_mean_colors_generic;

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub use crate::mean_colors::avx2::extract_cell_mean_colors_avx2;
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub use crate::mean_colors::sse2::extract_cell_mean_colors_sse2;

    #[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
    pub use crate::mean_colors::wasm_simd::extract_cell_mean_colors_wasm_simd;
}

pub mod color_accum {
    //! Accumulator division implementations

    pub use crate::color_accum::generic::div_scalar_generic;

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub use crate::color_accum::sse2::div_scalar_sse2;

    #[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
    pub use crate::color_accum::wasm_simd::div_scalar_wasm_simd;
}

pub mod palette_match {
    //! Palette matching implementations

    pub use crate::palette_match::generic::find_nearest_palette_index_generic;

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub use crate::palette_match::sse2::find_nearest_palette_index_sse2;

    #[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
    pub use crate::palette_match::wasm_simd::find_nearest_palette_index_wasm_simd;
}
