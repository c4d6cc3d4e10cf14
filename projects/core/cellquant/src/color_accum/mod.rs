//! # Color Accumulators
//!
//! A [`ColorAccum`] holds per-channel sums of [`Color8888`] pixels. A cell has at most 64
//! pixels, so each channel sum is at most `64 * 255 = 16320`, which fits in an `i16`.
//!
//! Accumulators are produced in pairs by [`crate::extract_cell_mean_colors`] and turned into
//! mean colors with [`ColorAccum::div_scalar`], which divides using the fixed-point
//! [`crate::reciprocal::RECIPROCALS`] table instead of an integer division:
//!
//! ```text
//! mean = (sum * RECIPROCALS[count] + 2^14) >> 15
//! ```

pub(crate) mod generic;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod sse2;

#[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
pub(crate) mod wasm_simd;

use crate::color_8888::Color8888;
use core::ops::{Add, AddAssign};

/// Per-channel sums of a group of pixels, in `R, G, B, A` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(C, align(8))]
pub struct ColorAccum {
    /// Channel sums: red, green, blue, alpha.
    pub ch: [i16; 4],
}

impl ColorAccum {
    /// An empty accumulator.
    pub const ZERO: Self = Self { ch: [0; 4] };

    /// Constructs an accumulator from explicit channel sums.
    #[inline]
    pub const fn new(r: i16, g: i16, b: i16, a: i16) -> Self {
        Self { ch: [r, g, b, a] }
    }

    /// Constructs an accumulator with the same value in every channel.
    #[inline]
    pub const fn splat(value: i16) -> Self {
        Self { ch: [value; 4] }
    }

    /// Adds a single pixel to the sums.
    #[inline(always)]
    pub fn add_color(&mut self, color: Color8888) {
        self.ch[0] = self.ch[0].wrapping_add(color.r as i16);
        self.ch[1] = self.ch[1].wrapping_add(color.g as i16);
        self.ch[2] = self.ch[2].wrapping_add(color.b as i16);
        self.ch[3] = self.ch[3].wrapping_add(color.a as i16);
    }

    /// Divides every channel by `divisor` in place, computing
    /// `(ch * RECIPROCALS[divisor] + (1 << 14)) >> 15`.
    /// Uses the best known implementation for the current CPU.
    ///
    /// For divisors up to [`crate::PIXELS_PER_CELL`] and sums of that many pixels, the result is
    /// within 1 of the true average, and exact for powers of two. It is not always the nearest
    /// integer (`3 / 6` gives 0), and larger divisors can drift further.
    ///
    /// A divisor of 0 sets every channel to 0.
    ///
    /// [`RECIPROCALS`]: crate::reciprocal::RECIPROCALS
    ///
    /// # Panics
    ///
    /// If `divisor` is greater than 256.
    ///
    /// # Examples
    ///
    /// ```
    /// use cellquant::ColorAccum;
    ///
    /// let mut accum = ColorAccum::new(6400, 9600, 12800, 16320);
    /// accum.div_scalar(64);
    /// assert_eq!(accum, ColorAccum::new(100, 150, 200, 255));
    ///
    /// accum.div_scalar(0);
    /// assert_eq!(accum, ColorAccum::ZERO);
    /// ```
    #[inline]
    #[allow(unreachable_code)]
    pub fn div_scalar(&mut self, divisor: u16) {
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        return unsafe { div_scalar_x86(self, divisor) };

        #[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
        return unsafe { wasm_simd::div_scalar_wasm_simd(self, divisor) };

        generic::div_scalar_generic(self, divisor)
    }

    /// Converts the accumulator to a color, clamping every channel to `0..=255`.
    ///
    /// Normally called after [`Self::div_scalar`].
    #[inline]
    pub fn to_color(&self) -> Color8888 {
        let [r, g, b, a] = self.ch.map(|c| c.clamp(0, 255) as u8);
        Color8888::new(r, g, b, a)
    }
}

impl Add for ColorAccum {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for ColorAccum {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.ch.iter_mut().zip(rhs.ch) {
            *lhs = lhs.wrapping_add(rhs);
        }
    }
}

impl From<Color8888> for ColorAccum {
    fn from(color: Color8888) -> Self {
        Self::new(color.r as i16, color.g as i16, color.b as i16, color.a as i16)
    }
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn div_scalar_x86(accum: &mut ColorAccum, divisor: u16) {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        use crate::cpu_detect::*;

        if has_sse2() {
            return sse2::div_scalar_sse2(accum, divisor);
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        if cfg!(target_feature = "sse2") {
            return sse2::div_scalar_sse2(accum, divisor);
        }
    }

    generic::div_scalar_generic(accum, divisor)
}
