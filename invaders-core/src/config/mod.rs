//! Configuration types
//!
//! Grid geometry and timing constants plus the small value types the
//! firmware fills in from its build-time configuration.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
