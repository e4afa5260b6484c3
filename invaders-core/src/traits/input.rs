//! Input source trait

use crate::input::Buttons;

/// Something that can be sampled for the current button state
pub trait InputSource {
    /// Read every button once
    fn sample(&mut self) -> Buttons;
}
