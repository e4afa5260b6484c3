//! Game state and the per-tick update rule
//!
//! Motion is deterministic and axis-aligned. There is no collision
//! detection: the enemy and the missile may share a cell without effect,
//! and the enemy keeps respawning above the player forever.

use super::cell::Cell;
use super::grid::Grid;
use crate::config::{GAME_HEIGHT, GAME_WIDTH};
use crate::input::Buttons;

const LAST_COL: i16 = GAME_WIDTH as i16 - 1;
const ROWS: i16 = GAME_HEIGHT as i16;

/// Signed grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    /// Column
    pub x: i16,
    /// Row (0 is the top)
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// (row, col) if the position lies inside the grid
    pub fn grid_index(self) -> Option<(usize, usize)> {
        let in_cols = (0..GAME_WIDTH as i16).contains(&self.x);
        let in_rows = (0..ROWS).contains(&self.y);
        if in_cols && in_rows {
            Some((self.y as usize, self.x as usize))
        } else {
            None
        }
    }
}

/// Player projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Missile {
    /// Nothing in flight; the player may fire
    #[default]
    Inactive,
    /// In flight at this position
    Active(Position),
}

impl Missile {
    /// Check if the missile is in flight
    pub fn is_active(&self) -> bool {
        matches!(self, Missile::Active(_))
    }

    /// Position while in flight
    pub fn position(&self) -> Option<Position> {
        match self {
            Missile::Active(pos) => Some(*pos),
            Missile::Inactive => None,
        }
    }

    /// Move one row up; leaving the top row deactivates it
    pub fn advanced(self) -> Self {
        match self {
            Missile::Active(pos) if pos.y > 0 => Missile::Active(Position::new(pos.x, pos.y - 1)),
            _ => Missile::Inactive,
        }
    }
}

/// Authoritative game state
///
/// Owned by the frame loop and mutated once per tick by [`update`] and
/// [`apply_input`].
///
/// [`update`]: GameState::update
/// [`apply_input`]: GameState::apply_input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    player: Position,
    invader: Position,
    missile: Missile,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Initial state: player bottom-center, enemy top-center, no missile
    pub const fn new() -> Self {
        Self {
            player: Position::new(GAME_WIDTH as i16 / 2, ROWS - 1),
            invader: Position::new(GAME_WIDTH as i16 / 2, 0),
            missile: Missile::Inactive,
        }
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn invader(&self) -> Position {
        self.invader
    }

    pub fn missile(&self) -> Missile {
        self.missile
    }

    /// Missile column, -1 while inactive
    pub fn missile_x(&self) -> i16 {
        self.missile.position().map_or(-1, |p| p.x)
    }

    /// Missile row, -1 while inactive
    pub fn missile_y(&self) -> i16 {
        self.missile.position().map_or(-1, |p| p.y)
    }

    /// Advance one tick: enemy first, then missile
    pub fn update(&mut self) {
        self.invader.y += 1;
        if self.invader.y >= ROWS {
            // Respawn above wherever the player stands right now
            self.invader.y = 0;
            self.invader.x = self.player.x;
        }

        self.missile = self.missile.advanced();
    }

    /// Move the player one column left, stopping at column 0
    pub fn move_left(&mut self) {
        if self.player.x > 0 {
            self.player.x -= 1;
        }
    }

    /// Move the player one column right, stopping at the last column
    pub fn move_right(&mut self) {
        if self.player.x < LAST_COL {
            self.player.x += 1;
        }
    }

    /// Launch a missile from the row above the player
    ///
    /// Returns false (and does nothing) while a missile is already in flight.
    pub fn fire(&mut self) -> bool {
        if self.missile.is_active() {
            return false;
        }
        self.missile = Missile::Active(Position::new(self.player.x, self.player.y - 1));
        true
    }

    /// Apply every pressed button, in left, right, fire order
    pub fn apply_input(&mut self, buttons: Buttons) {
        if buttons.left {
            self.move_left();
        }
        if buttons.right {
            self.move_right();
        }
        if buttons.fire {
            self.fire();
        }
    }

    /// Project the entities onto a fresh grid
    ///
    /// Later writes win on a shared cell: invader, then missile, then
    /// player, so the player is always visible.
    pub fn grid(&self) -> Grid {
        let mut grid = Grid::new();
        grid.place(self.invader, Cell::Invader);
        if let Some(pos) = self.missile.position() {
            grid.place(pos, Cell::Missile);
        }
        grid.place(self.player, Cell::Player);
        grid
    }
}
