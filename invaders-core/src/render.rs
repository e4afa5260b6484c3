//! Render pass
//!
//! Full clear, then one glyph per occupied cell. No dirty tracking, so
//! per-frame bus traffic is fixed: one clear plus at most three glyphs.

use crate::config::{GAME_HEIGHT, PCD8544_BANKS};
use crate::game::GameState;
use crate::traits::GlyphDisplay;

/// Map a logical grid row onto a controller bank
///
/// The grid has more rows than the controller has banks, so rows are
/// scaled down into `0..PCD8544_BANKS`. Rows 0 and 1 share bank 0 and
/// rows 4 and 5 share bank 3: a piece crossing either pair appears to
/// hold still for one tick, and two pieces on a shared bank in the same
/// column land on one address, where the later glyph overwrites the
/// earlier one.
pub fn bank_for_row(row: usize) -> u8 {
    (row * PCD8544_BANKS / GAME_HEIGHT) as u8
}

/// Map a logical grid column onto a controller column
pub fn column_for_col(col: usize) -> u8 {
    col as u8
}

/// Redraw the whole frame from the current state
pub fn render<D: GlyphDisplay>(state: &GameState, display: &mut D) {
    display.clear();

    let grid = state.grid();
    for (row, col, cell) in grid.occupied() {
        display.draw_glyph(bank_for_row(row), column_for_col(col), cell);
    }
}
