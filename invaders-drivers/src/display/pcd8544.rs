//! PCD8544 LCD Driver
//!
//! Driver for 84x48 PCD8544-based monochrome LCDs (Nokia 5110) over a
//! write-only serial transport. The panel is split into 6 banks of 8
//! pixel rows; each data byte fills one column of the current bank and
//! advances the column address.
//!
//! Nothing is read back from the controller, so a missing or faulty panel
//! is invisible to this driver.

use invaders_core::config::{DisplayConfig, PCD8544_BANKS, PCD8544_WIDTH};
use invaders_core::game::Cell;
use invaders_core::traits::GlyphDisplay;
use invaders_hal::{DelayMs, OutputPin, SerialWrite};

use super::font::glyph;

/// Reset pulse width (datasheet minimum is 100 ns)
const RESET_PULSE_MS: u32 = 1;

/// PCD8544 instruction set
pub mod cmd {
    /// Function set: `0x20 | PD | V | H`
    pub const FUNCTION_SET: u8 = 0x20;
    /// H bit: select the extended instruction set
    pub const EXTENDED: u8 = 0x01;
    /// V bit: vertical addressing
    pub const VERTICAL: u8 = 0x02;
    /// PD bit: power down
    pub const POWER_DOWN: u8 = 0x04;

    // Basic instruction set (H = 0)
    /// Display control: `0x08 | D | E`
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const DISPLAY_BLANK: u8 = 0x00;
    pub const DISPLAY_ALL_ON: u8 = 0x01;
    pub const DISPLAY_NORMAL: u8 = 0x04;
    pub const DISPLAY_INVERSE: u8 = 0x05;
    /// Set bank (Y) address: `0x40 | Y[2:0]`
    pub const SET_Y_ADDR: u8 = 0x40;
    /// Set column (X) address: `0x80 | X[6:0]`
    pub const SET_X_ADDR: u8 = 0x80;

    // Extended instruction set (H = 1)
    /// Temperature coefficient: `0x04 | TC[1:0]`
    pub const TEMP_CONTROL: u8 = 0x04;
    /// Bias system: `0x10 | BS[2:0]`
    pub const BIAS_SYSTEM: u8 = 0x10;
    /// Operating voltage: `0x80 | Vop[6:0]`
    pub const SET_VOP: u8 = 0x80;
}

/// Commands sent after reset, in controller order
///
/// The analog settings only exist in the extended set, so the sequence
/// enters it, configures, returns to the basic set and turns the display
/// on. With [`DisplayConfig::REFERENCE`] this is `21 C0 07 13 20 0C`.
pub fn init_sequence(config: &DisplayConfig) -> [u8; 6] {
    [
        cmd::FUNCTION_SET | cmd::EXTENDED,
        cmd::SET_VOP | (config.vop & 0x7F),
        cmd::TEMP_CONTROL | (config.temp_coeff & 0x03),
        cmd::BIAS_SYSTEM | (config.bias & 0x07),
        cmd::FUNCTION_SET,
        cmd::DISPLAY_CONTROL | cmd::DISPLAY_NORMAL,
    ]
}

/// PCD8544 driver
///
/// - `B`: serial transport carrying clock and data
/// - `RST`: reset line (active low)
/// - `CE`: chip enable (active low)
/// - `DC`: command (low) / data (high) select
pub struct Pcd8544<B, RST, CE, DC> {
    bus: B,
    rst: RST,
    ce: CE,
    dc: DC,
    config: DisplayConfig,
}

impl<B, RST, CE, DC> Pcd8544<B, RST, CE, DC>
where
    B: SerialWrite,
    RST: OutputPin,
    CE: OutputPin,
    DC: OutputPin,
{
    /// Create a driver; the controller is left deselected until [`init`]
    ///
    /// [`init`]: Pcd8544::init
    pub fn new(bus: B, rst: RST, mut ce: CE, dc: DC, config: DisplayConfig) -> Self {
        ce.set_high();
        Self {
            bus,
            rst,
            ce,
            dc,
            config,
        }
    }

    /// Reset and configure the controller
    ///
    /// Chip enable stays asserted afterwards; the display is the only
    /// device on the bus.
    pub fn init<T: DelayMs>(&mut self, delay: &mut T) {
        self.rst.set_low();
        delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high();

        self.ce.set_low();

        for c in init_sequence(&self.config) {
            self.command(c);
        }
    }

    /// Send a command byte
    pub fn command(&mut self, byte: u8) {
        self.dc.set_low();
        self.bus.transfer(byte);
    }

    /// Send a data byte (one column of 8 pixels)
    pub fn data(&mut self, byte: u8) {
        self.dc.set_high();
        self.bus.transfer(byte);
    }

    /// Point the RAM cursor at a bank and column
    pub fn set_address(&mut self, bank: u8, column: u8) {
        self.command(cmd::SET_Y_ADDR | bank);
        self.command(cmd::SET_X_ADDR | column);
    }

    /// Blank every bank
    pub fn clear(&mut self) {
        for bank in 0..PCD8544_BANKS as u8 {
            self.set_address(bank, 0);
            for _ in 0..PCD8544_WIDTH {
                self.data(0x00);
            }
        }
    }

    /// Blit the glyph for `cell` at `bank`, starting at `column`
    pub fn draw_glyph(&mut self, bank: u8, column: u8, cell: Cell) {
        self.set_address(bank, column);
        for &b in glyph(cell) {
            self.data(b);
        }
    }

    /// Current analog settings
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }
}

impl<B, RST, CE, DC> GlyphDisplay for Pcd8544<B, RST, CE, DC>
where
    B: SerialWrite,
    RST: OutputPin,
    CE: OutputPin,
    DC: OutputPin,
{
    fn clear(&mut self) {
        Pcd8544::clear(self);
    }

    fn draw_glyph(&mut self, bank: u8, column: u8, cell: Cell) {
        Pcd8544::draw_glyph(self, bank, column, cell);
    }
}
