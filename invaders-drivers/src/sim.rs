//! Simulated wiring for driver tests
//!
//! Models the display's serial receiver: bits are sampled on CLK rising
//! edges while CE is low, and each completed byte is logged as a command
//! or data byte according to the D/C level at the eighth edge.

use core::cell::RefCell;

use heapless::Vec;
use invaders_hal::{InputPin, OutputPin};

/// Wire capacity, enough for init plus a full frame
const LOG_LEN: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Rst = 0,
    Ce = 1,
    Dc = 2,
    Din = 3,
    Clk = 4,
    Left = 5,
    Right = 6,
    Fire = 7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Byte {
    Command(u8),
    Data(u8),
}

pub struct Wire {
    levels: [bool; 8],
    shift: u8,
    bits: u8,
    pub received: Vec<Byte, LOG_LEN>,
    pub resets: u32,
    pub rising_edges: u32,
}

impl Wire {
    /// Every line idles high
    pub fn new() -> Self {
        Self {
            levels: [true; 8],
            shift: 0,
            bits: 0,
            received: Vec::new(),
            resets: 0,
            rising_edges: 0,
        }
    }

    pub fn level(&self, line: Line) -> bool {
        self.levels[line as usize]
    }

    pub fn drive(&mut self, line: Line, high: bool) {
        let was_high = self.levels[line as usize];
        self.levels[line as usize] = high;

        match line {
            Line::Clk if !was_high && high => self.clock_in(),
            Line::Rst if !was_high && high => {
                self.resets += 1;
                self.bits = 0;
            }
            Line::Ce if high => self.bits = 0,
            _ => {}
        }
    }

    fn clock_in(&mut self) {
        self.rising_edges += 1;
        if self.level(Line::Ce) {
            return;
        }

        self.shift = (self.shift << 1) | self.level(Line::Din) as u8;
        self.bits += 1;
        if self.bits == 8 {
            let byte = if self.level(Line::Dc) {
                Byte::Data(self.shift)
            } else {
                Byte::Command(self.shift)
            };
            self.received.push(byte).unwrap();
            self.bits = 0;
        }
    }

    pub fn commands(&self) -> impl Iterator<Item = u8> + '_ {
        self.received.iter().filter_map(|b| match b {
            Byte::Command(c) => Some(*c),
            Byte::Data(_) => None,
        })
    }

    pub fn data(&self) -> impl Iterator<Item = u8> + '_ {
        self.received.iter().filter_map(|b| match b {
            Byte::Data(d) => Some(*d),
            Byte::Command(_) => None,
        })
    }
}

/// One simulated GPIO attached to the shared wire
pub struct SimPin<'a> {
    wire: &'a RefCell<Wire>,
    line: Line,
}

impl<'a> SimPin<'a> {
    pub fn new(wire: &'a RefCell<Wire>, line: Line) -> Self {
        Self { wire, line }
    }
}

impl OutputPin for SimPin<'_> {
    fn set_high(&mut self) {
        self.wire.borrow_mut().drive(self.line, true);
    }

    fn set_low(&mut self) {
        self.wire.borrow_mut().drive(self.line, false);
    }

    fn is_set_high(&self) -> bool {
        self.wire.borrow().level(self.line)
    }
}

impl InputPin for SimPin<'_> {
    fn is_high(&mut self) -> bool {
        self.wire.borrow().level(self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::BitBangSerial;
    use crate::display::Pcd8544;
    use crate::input::ActiveLowButtons;
    use invaders_core::config::{DisplayConfig, GameConfig};
    use invaders_core::runner::Console;
    use invaders_hal::DelayMs;

    struct NoDelay;

    impl DelayMs for NoDelay {
        fn delay_ms(&mut self, _ms: u32) {}
    }

    #[test]
    fn test_console_frame_on_the_wire() {
        let wire = RefCell::new(Wire::new());
        let mut lcd = Pcd8544::new(
            BitBangSerial::new(SimPin::new(&wire, Line::Clk), SimPin::new(&wire, Line::Din)),
            SimPin::new(&wire, Line::Rst),
            SimPin::new(&wire, Line::Ce),
            SimPin::new(&wire, Line::Dc),
            DisplayConfig::default(),
        );
        lcd.init(&mut NoDelay);
        let buttons = ActiveLowButtons::new(
            SimPin::new(&wire, Line::Left),
            SimPin::new(&wire, Line::Right),
            SimPin::new(&wire, Line::Fire),
        );
        let mut console = Console::new(lcd, buttons, NoDelay, GameConfig::default());

        wire.borrow_mut().received.clear();
        wire.borrow_mut().drive(Line::Fire, false);
        wire.borrow_mut().drive(Line::Right, false);
        console.tick();

        assert_eq!(console.state().player().x, 8);
        assert_eq!(console.state().missile_y(), 6);

        let w = wire.borrow();
        // Clear, then invader (row 1), missile (row 6), player (row 7)
        assert_eq!(w.data().count(), 504 + 3 * 5);
        let glyph_cmds: Vec<u8, 6> = w.commands().skip(12).collect();
        assert_eq!(glyph_cmds.as_slice(), &[0x40, 0x87, 0x44, 0x88, 0x45, 0x88]);
    }
}
