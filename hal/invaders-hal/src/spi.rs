//! Synchronous serial transport abstractions
//!
//! The display only ever listens, so the transport is write-only: one
//! byte at a time, most-significant bit first, no acknowledgment.

/// Write-only synchronous serial transport
pub trait SerialWrite {
    /// Shift one byte out, MSB first
    fn transfer(&mut self, byte: u8);

    /// Shift a run of bytes out in order
    fn transfer_all(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.transfer(b);
        }
    }
}

/// Transport adapter for a hardware SPI block
///
/// Wraps any `embedded_hal::spi::SpiBus<u8>` configured for mode 0,
/// MSB first. Bus errors are dropped.
pub struct HalSpi<S> {
    bus: S,
}

impl<S: embedded_hal::spi::SpiBus<u8>> HalSpi<S> {
    /// Wrap a configured SPI bus
    pub fn new(bus: S) -> Self {
        Self { bus }
    }

    /// Release the wrapped bus
    pub fn into_inner(self) -> S {
        self.bus
    }
}

impl<S: embedded_hal::spi::SpiBus<u8>> SerialWrite for HalSpi<S> {
    fn transfer(&mut self, byte: u8) {
        self.transfer_all(&[byte]);
    }

    fn transfer_all(&mut self, bytes: &[u8]) {
        // The D/C line is sampled with the last bit, so the bus must be idle
        // before the caller flips it for the next byte.
        self.bus.write(bytes).ok();
        self.bus.flush().ok();
    }
}
