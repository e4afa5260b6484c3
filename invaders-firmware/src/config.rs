//! Build-time configuration
//!
//! Constants come from game.toml, validated by build.rs.

use invaders_core::config::{DisplayConfig, GameConfig};

include!(concat!(env!("OUT_DIR"), "/game_config.rs"));

/// Frame loop settings
pub fn game_config() -> GameConfig {
    GameConfig::new(FRAME_DELAY_MS)
}

/// PCD8544 analog settings
pub fn display_config() -> DisplayConfig {
    DisplayConfig {
        vop: DISPLAY_VOP,
        temp_coeff: DISPLAY_TEMP_COEFF,
        bias: DISPLAY_BIAS,
    }
}
