//! Game configuration types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of columns in the game grid
pub const GAME_WIDTH: usize = 14;

/// Number of rows in the game grid
pub const GAME_HEIGHT: usize = 8;

/// Pause at the end of every frame, in milliseconds
pub const FRAME_DELAY_MS: u32 = 100;

/// Frame loop configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// Blocking delay after each render
    pub frame_delay_ms: u32,
}

impl GameConfig {
    /// Reference timing: one frame every 100 ms
    pub const REFERENCE: Self = Self {
        frame_delay_ms: FRAME_DELAY_MS,
    };

    /// Create a config with a custom frame delay
    pub const fn new(frame_delay_ms: u32) -> Self {
        Self { frame_delay_ms }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::REFERENCE
    }
}
