//! Palette lookups.

use crate::error::CellQuantError;
use cellquant::Color8888;

/// Returns the index of the entry in `palette` nearest to `target` (squared RGB distance,
/// alpha ignored). Ties go to the lowest index.
///
/// See [`cellquant::find_nearest_palette_index`].
///
/// # Errors
///
/// - [`CellQuantError::EmptyPalette`] if `palette` is empty
///
/// # Examples
///
/// ```
/// # use cellquant_api::{find_nearest_palette_index, Color8888, CellQuantError};
/// let palette = [Color8888::opaque(0, 0, 0), Color8888::opaque(255, 255, 255)];
/// assert_eq!(find_nearest_palette_index(Color8888::opaque(10, 10, 10), &palette)?, 0);
/// # Ok::<(), CellQuantError>(())
/// ```
pub fn find_nearest_palette_index(
    target: Color8888,
    palette: &[Color8888],
) -> Result<usize, CellQuantError> {
    if palette.is_empty() {
        return Err(CellQuantError::EmptyPalette);
    }

    Ok(cellquant::find_nearest_palette_index(target, palette))
}
