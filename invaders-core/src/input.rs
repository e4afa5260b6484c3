//! Sampled button state
//!
//! One snapshot per tick. Buttons are independent: several may be held
//! at once and each applies its effect. There is no edge detection, so
//! a held button repeats every tick.

/// Pressed state of the three game buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons {
    /// Move one column left
    pub left: bool,
    /// Move one column right
    pub right: bool,
    /// Launch a missile
    pub fire: bool,
}

impl Buttons {
    /// Nothing pressed
    pub const NONE: Self = Self {
        left: false,
        right: false,
        fire: false,
    };
}
