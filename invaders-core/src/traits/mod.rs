//! Hardware abstraction traits
//!
//! These traits define the interface between the game logic and the
//! display/input drivers.

pub mod display;
pub mod input;

pub use display::GlyphDisplay;
pub use input::InputSource;
