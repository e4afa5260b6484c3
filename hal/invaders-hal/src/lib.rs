//! Invaders Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware capabilities the game
//! needs. Everything above it (display driver, input sampler, frame loop)
//! is written against these traits, so the same code runs on the target
//! board and against simulated lines in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  invaders-firmware / invaders-drivers   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  invaders-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  embedded-hal 1.0 (via Hal* adapters)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital lines
//! - [`spi::SerialWrite`] - Write-only synchronous serial transport
//! - [`delay::DelayMs`] - Blocking delay

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use delay::{DelayMs, HalDelay};
pub use gpio::{HalInput, HalOutput, InputPin, OutputPin};
pub use spi::{HalSpi, SerialWrite};
