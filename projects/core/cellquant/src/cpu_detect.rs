//! Helpers for CPU feature detection without using std.
//!
//! This module provides CPU feature detection for SIMD instruction sets using the
//! `cpufeatures` crate. These functions are used to determine at runtime which kernel
//! implementations can be safely executed on the current CPU.
//!
//! The functions are minimal overhead, they have an init that's called once, and every subsequent
//! call simply loads and compares a bool.

/// Checks if the CPU supports AVX2 (Advanced Vector Extensions 2) instructions.
///
/// AVX2 extends AVX by providing 256-bit integer SIMD instructions, letting the
/// cell kernels process 8 pixels per iteration.
///
/// # Returns
/// `true` if the CPU supports AVX2 instructions, `false` otherwise.
#[inline]
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub fn has_avx2() -> bool {
    cpufeatures::new!(cpuid_avx2, "avx2");
    cpuid_avx2::get()
}

/// Checks if the CPU supports SSE2 (Streaming SIMD Extensions 2) instructions.
///
/// SSE2 is available on virtually all x86-64 processors and forms the baseline
/// 4-pixels-per-iteration implementation of every kernel.
///
/// # Returns
/// `true` if the CPU supports SSE2 instructions, `false` otherwise.
#[inline]
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub fn has_sse2() -> bool {
    cpufeatures::new!(cpuid_sse2, "sse2");
    cpuid_sse2::get()
}
