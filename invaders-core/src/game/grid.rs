//! Fixed-size game grid

use super::cell::Cell;
use super::state::Position;
use crate::config::{GAME_HEIGHT, GAME_WIDTH};

/// `GAME_HEIGHT` rows by `GAME_WIDTH` columns of cell tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; GAME_WIDTH]; GAME_HEIGHT],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an all-empty grid
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; GAME_WIDTH]; GAME_HEIGHT],
        }
    }

    /// Get the tag at (row, col), or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Write a tag at a position
    ///
    /// Positions outside the grid are ignored and return false.
    pub fn place(&mut self, pos: Position, cell: Cell) -> bool {
        match pos.grid_index() {
            Some((row, col)) => {
                self.cells[row][col] = cell;
                true
            }
            None => false,
        }
    }

    /// Iterate non-empty cells in row-major order as (row, col, tag)
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| !cell.is_empty())
                .map(move |(col, &cell)| (row, col, cell))
        })
    }

    /// Count cells holding a given tag
    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }
}
