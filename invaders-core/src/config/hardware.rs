//! Display hardware configuration
//!
//! Geometry of the PCD8544 controller and the bias/contrast settings sent
//! during initialization.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical columns on the PCD8544
pub const PCD8544_WIDTH: usize = 84;

/// 8-pixel banks on the PCD8544 (48 rows / 8)
pub const PCD8544_BANKS: usize = 6;

/// Width of one glyph in columns
pub const GLYPH_WIDTH: usize = 5;

/// Controller analog settings applied in the extended instruction set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Operating voltage (contrast), 7 bits
    pub vop: u8,
    /// Temperature coefficient, 2 bits
    pub temp_coeff: u8,
    /// Bias system, 3 bits
    pub bias: u8,
}

impl DisplayConfig {
    /// Settings producing the reference init bytes `0xC0 0x07 0x13`
    pub const REFERENCE: Self = Self {
        vop: 0x40,
        temp_coeff: 3,
        bias: 3,
    };

    /// Check that every field fits its command bit field
    pub fn is_valid(&self) -> bool {
        self.vop <= 0x7F && self.temp_coeff <= 3 && self.bias <= 7
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::REFERENCE
    }
}
