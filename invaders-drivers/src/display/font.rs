//! Glyph bitmaps for the game's cell tags
//!
//! Each glyph is five column bytes; bit 0 is the top pixel of the bank.

use invaders_core::config::GLYPH_WIDTH;
use invaders_core::game::Cell;

/// Glyph table indexed by [`Cell::index`]
pub const GLYPHS: [[u8; GLYPH_WIDTH]; 4] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // Empty
    [0x1F, 0x1F, 0x1F, 0x1F, 0x1F], // Player
    [0x00, 0x1F, 0x1F, 0x1F, 0x00], // Invader
    [0x1F, 0x1F, 0x00, 0x1F, 0x1F], // Missile
];

/// Get the glyph for a cell tag
pub fn glyph(cell: Cell) -> &'static [u8; GLYPH_WIDTH] {
    &GLYPHS[cell.index()]
}
