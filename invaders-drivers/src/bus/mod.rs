//! Serial transports for the display

pub mod bitbang;

pub use bitbang::BitBangSerial;
