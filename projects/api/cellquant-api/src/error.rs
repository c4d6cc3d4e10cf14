//! Error types for cell operations.

use thiserror::Error;

/// Errors returned when the input to a cell operation is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CellQuantError {
    /// The pixel data does not describe exactly one cell.
    #[error("Invalid block length: {0} elements. A cell must contain exactly 64 pixels (256 RGBA bytes).")]
    InvalidBlockLength(usize),

    /// The coverage flags do not cover exactly one cell.
    #[error("Invalid mask length: {0} flags. A coverage mask must contain exactly 64 flags.")]
    InvalidMaskLength(usize),

    /// The divisor is larger than the number of pixels the reciprocal table covers.
    #[error("Invalid divisor: {0}. Divisor must be in range [0, 256].")]
    InvalidDivisor(u16),

    /// Nearest color lookups need at least one palette entry.
    #[error("Palette is empty. A palette must contain at least one color.")]
    EmptyPalette,
}
