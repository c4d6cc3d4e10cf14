//! # RGBA8888 Colors
//!
//! [`Color8888`] is the single color representation used throughout the crate: source pixels,
//! the foreground/background endpoints of a [`ColorPair`] and palette entries all share it.
//!
//! The struct is `#[repr(C)]` with channels stored in `R, G, B, A` byte order, so a
//! [`Color8888`] read as a native `u32` on a little endian machine holds red in the lowest
//! byte and alpha in the highest. The SIMD kernels rely on this layout to process 4 (or 8)
//! pixels per register.

/// Represents a single RGBA8888 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(C, align(4))]
pub struct Color8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

/// Packed mask which keeps the red, green and blue bytes of a [`Color8888`] read as a native `u32`.
pub(crate) const RGB_MASK_U32: u32 = u32::from_ne_bytes([0xFF, 0xFF, 0xFF, 0x00]);

impl Color8888 {
    /// Constructs a new [`Color8888`] from the specified red, green, blue, and alpha components.
    ///
    /// # Examples
    ///
    /// ```
    /// use cellquant::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.a, 255);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Constructs an opaque [`Color8888`] (alpha 255).
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Reinterprets the color as a `u32` in native byte order.
    #[inline(always)]
    pub const fn to_u32(self) -> u32 {
        u32::from_ne_bytes([self.r, self.g, self.b, self.a])
    }

    /// Builds a color from a `u32` in native byte order; inverse of [`Self::to_u32`].
    #[inline(always)]
    pub const fn from_u32(value: u32) -> Self {
        let [r, g, b, a] = value.to_ne_bytes();
        Self { r, g, b, a }
    }

    /// Returns the squared euclidean distance between two colors over the red, green
    /// and blue channels. Alpha is ignored.
    ///
    /// Channels are widened before subtraction, so the result is exactly
    /// `dr² + dg² + db²` (at most `3 * 255²`).
    ///
    /// # Examples
    ///
    /// ```
    /// use cellquant::Color8888;
    ///
    /// let black = Color8888::new(0, 0, 0, 0);
    /// let grey = Color8888::new(10, 10, 10, 255);
    /// assert_eq!(black.rgb_distance(grey), 300);
    /// ```
    #[inline(always)]
    pub const fn rgb_distance(self, other: Self) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl From<u32> for Color8888 {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<Color8888> for u32 {
    fn from(color: Color8888) -> Self {
        color.to_u32()
    }
}

/// A foreground/background pair of colors approximating a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(C)]
pub struct ColorPair {
    /// Color used for pixels whose coverage flag is set.
    pub fg: Color8888,
    /// Color used for pixels whose coverage flag is clear.
    pub bg: Color8888,
}

impl ColorPair {
    /// Constructs a new pair from a foreground and background color.
    #[inline]
    pub const fn new(fg: Color8888, bg: Color8888) -> Self {
        Self { fg, bg }
    }

    /// Returns the endpoint selected by a coverage flag.
    #[inline(always)]
    pub const fn select(&self, foreground: bool) -> Color8888 {
        if foreground {
            self.fg
        } else {
            self.bg
        }
    }
}
