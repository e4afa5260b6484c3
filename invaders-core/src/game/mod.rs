//! Game state and update rule
//!
//! The scalar entity positions are the owned state. The grid is a
//! projection rebuilt from them whenever it is needed for rendering.

pub mod cell;
pub mod grid;
pub mod state;

pub use cell::Cell;
pub use grid::Grid;
pub use state::{GameState, Missile, Position};
