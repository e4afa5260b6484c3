//! Active-low push buttons
//!
//! Each button pulls its line to ground when pressed; the line idles high
//! through a pull-up. Lines are read once per sample with no debounce and
//! no edge detection, so a held button reads as pressed every tick.

use invaders_core::input::Buttons;
use invaders_core::traits::InputSource;
use invaders_hal::InputPin;

/// Three active-low buttons: left, right, fire
pub struct ActiveLowButtons<L, R, F> {
    left: L,
    right: R,
    fire: F,
}

impl<L: InputPin, R: InputPin, F: InputPin> ActiveLowButtons<L, R, F> {
    /// Create a sampler over three pulled-up input lines
    pub fn new(left: L, right: R, fire: F) -> Self {
        Self { left, right, fire }
    }
}

impl<L: InputPin, R: InputPin, F: InputPin> InputSource for ActiveLowButtons<L, R, F> {
    fn sample(&mut self) -> Buttons {
        Buttons {
            left: self.left.is_low(),
            right: self.right.is_low(),
            fire: self.fire.is_low(),
        }
    }
}
