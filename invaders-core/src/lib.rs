//! Board-agnostic core logic for the Invaders handheld
//!
//! This crate contains all game logic that does not depend on specific
//! hardware implementations:
//!
//! - Game state and the per-tick update rule
//! - Player actions derived from sampled buttons
//! - Render pass mapping the grid onto display banks/columns
//! - The fixed-timestep frame loop
//! - Display and input traits implemented by `invaders-drivers`
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod game;
pub mod input;
pub mod render;
pub mod runner;
pub mod traits;
