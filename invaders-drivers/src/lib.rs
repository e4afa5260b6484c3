//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in invaders-core, built on the capability traits of invaders-hal:
//!
//! - Serial transport (bit-banged clock/data)
//! - PCD8544 display driver with the game's glyph font
//! - Active-low button sampler

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod display;
pub mod input;

#[cfg(test)]
mod sim;
