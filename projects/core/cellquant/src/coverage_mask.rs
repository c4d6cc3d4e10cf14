//! # Coverage Masks
//!
//! A coverage mask partitions the 64 pixels of a [`crate::PixelBlock`] into a foreground and a
//! background group. Two representations are used, and convert exactly into one another:
//!
//! - A packed `u64` bitmap. Pixel `i` maps to bit `63 - i`, i.e. the top-left pixel is the most
//!   significant bit:
//!
//! ```text
//! bit:   63  62  61  ..   1   0
//! pixel:  0   1   2  ..  62  63
//! ```
//!
//! - A [`CoverageMask`]: one 32-bit word per pixel, all ones for foreground and all zeros for
//!   background. Each word lines up with one [`crate::Color8888`], so SIMD kernels can load 4
//!   pixels and their 4 mask words with the same stride and use the mask directly as a select.

use crate::pixel_block::PIXELS_PER_CELL;

/// Per-pixel word used to mark a pixel as foreground.
pub const FOREGROUND_WORD: u32 = u32::MAX;

/// Per-pixel word used to mark a pixel as background.
pub const BACKGROUND_WORD: u32 = 0;

/// A coverage mask in per-pixel word form, ready for vector selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C, align(32))]
pub struct CoverageMask {
    words: [u32; PIXELS_PER_CELL],
}

impl CoverageMask {
    /// A mask with every pixel assigned to the background.
    pub const ALL_BACKGROUND: Self = Self {
        words: [BACKGROUND_WORD; PIXELS_PER_CELL],
    };

    /// A mask with every pixel assigned to the foreground.
    pub const ALL_FOREGROUND: Self = Self {
        words: [FOREGROUND_WORD; PIXELS_PER_CELL],
    };

    /// Expands a packed bitmap into per-pixel words.
    ///
    /// # Examples
    ///
    /// ```
    /// use cellquant::CoverageMask;
    ///
    /// let mask = CoverageMask::from_bitmap(0x8000_0000_0000_0001);
    /// assert!(mask.is_foreground(0));
    /// assert!(!mask.is_foreground(1));
    /// assert!(mask.is_foreground(63));
    /// ```
    #[inline]
    pub const fn from_bitmap(bitmap: u64) -> Self {
        let mut words = [BACKGROUND_WORD; PIXELS_PER_CELL];
        let mut x = 0;
        while x < PIXELS_PER_CELL {
            // Replicate the pixel's bit into every bit of the word.
            words[x] = 0u32.wrapping_sub(((bitmap >> (63 - x)) & 1) as u32);
            x += 1;
        }
        Self { words }
    }

    /// Packs the mask back into a bitmap; inverse of [`Self::from_bitmap`].
    #[inline]
    pub const fn to_bitmap(&self) -> u64 {
        let mut bitmap = 0u64;
        let mut x = 0;
        while x < PIXELS_PER_CELL {
            bitmap = (bitmap << 1) | (self.words[x] >> 31) as u64;
            x += 1;
        }
        bitmap
    }

    /// Builds a mask from 64 foreground flags in pixel order.
    pub fn from_flags(flags: &[bool; PIXELS_PER_CELL]) -> Self {
        let mut words = [BACKGROUND_WORD; PIXELS_PER_CELL];
        for (word, &flag) in words.iter_mut().zip(flags.iter()) {
            if flag {
                *word = FOREGROUND_WORD;
            }
        }
        Self { words }
    }

    /// Returns the 64 foreground flags in pixel order.
    pub fn to_flags(&self) -> [bool; PIXELS_PER_CELL] {
        let mut flags = [false; PIXELS_PER_CELL];
        for (flag, &word) in flags.iter_mut().zip(self.words.iter()) {
            *flag = word != BACKGROUND_WORD;
        }
        flags
    }

    /// Returns `true` if pixel `index` belongs to the foreground group.
    ///
    /// # Panics
    ///
    /// If `index` is 64 or greater.
    #[inline]
    pub fn is_foreground(&self, index: usize) -> bool {
        self.words[index] != BACKGROUND_WORD
    }

    /// Assigns pixel `index` to the foreground (`true`) or background (`false`) group.
    ///
    /// # Panics
    ///
    /// If `index` is 64 or greater.
    #[inline]
    pub fn set_foreground(&mut self, index: usize, foreground: bool) {
        self.words[index] = if foreground {
            FOREGROUND_WORD
        } else {
            BACKGROUND_WORD
        };
    }

    /// Number of pixels in the foreground group.
    ///
    /// This is the divisor for the foreground accumulator; the background divisor is
    /// `64 - foreground_count()`.
    #[inline]
    pub const fn foreground_count(&self) -> u32 {
        self.to_bitmap().count_ones()
    }

    /// Returns the per-pixel words.
    #[inline]
    pub const fn words(&self) -> &[u32; PIXELS_PER_CELL] {
        &self.words
    }

    /// Raw pointer to the first mask word, for the SIMD kernels.
    #[inline(always)]
    pub(crate) fn as_ptr(&self) -> *const u32 {
        self.words.as_ptr()
    }
}

impl Default for CoverageMask {
    fn default() -> Self {
        Self::ALL_BACKGROUND
    }
}

impl From<u64> for CoverageMask {
    fn from(bitmap: u64) -> Self {
        Self::from_bitmap(bitmap)
    }
}

impl From<CoverageMask> for u64 {
    fn from(mask: CoverageMask) -> Self {
        mask.to_bitmap()
    }
}
