//! Glyph display trait

use crate::game::Cell;

/// A bank-addressed display that can blit one glyph per cell
///
/// Writes are fire-and-forget. Addresses outside the controller's range
/// are a caller bug and are not checked.
pub trait GlyphDisplay {
    /// Blank the whole display
    fn clear(&mut self);

    /// Draw the glyph for `cell` with its left edge at `column` in `bank`
    fn draw_glyph(&mut self, bank: u8, column: u8, cell: Cell);
}
