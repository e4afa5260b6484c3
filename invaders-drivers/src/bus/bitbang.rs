//! Bit-banged serial transport
//!
//! Shifts bytes out on two GPIOs: serial clock and serial data. The
//! receiver samples data on the clock's rising edge, so each bit drives
//! CLK low, sets DIN, then drives CLK high. There is no handshake and
//! nothing is read back.

use invaders_hal::{OutputPin, SerialWrite};

/// Write-only serial bus on a clock pin and a data pin
pub struct BitBangSerial<CLK, DIN> {
    clk: CLK,
    din: DIN,
}

impl<CLK: OutputPin, DIN: OutputPin> BitBangSerial<CLK, DIN> {
    /// Create a transport over the two lines
    pub fn new(clk: CLK, din: DIN) -> Self {
        Self { clk, din }
    }
}

impl<CLK: OutputPin, DIN: OutputPin> SerialWrite for BitBangSerial<CLK, DIN> {
    fn transfer(&mut self, byte: u8) {
        let mut bits = byte;
        for _ in 0..8 {
            self.clk.set_low();
            self.din.set_state(bits & 0x80 != 0);
            self.clk.set_high();
            bits <<= 1;
        }
    }
}
