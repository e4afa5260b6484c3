//! Invaders - handheld dot-matrix game
//!
//! Firmware binary for an RP2040 board with a PCD8544 (Nokia 5110) LCD
//! and three push buttons. One fixed-timestep loop runs the whole game:
//! update, sample buttons, redraw, wait.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use invaders_core::runner::Console;
use invaders_drivers::bus::BitBangSerial;
use invaders_drivers::display::Pcd8544;
use invaders_drivers::input::ActiveLowButtons;
use invaders_hal::{HalDelay, HalInput, HalOutput};

mod config;

/// Log a heartbeat every N frames (5 s at the reference frame rate)
const HEARTBEAT_FRAMES: u32 = 50;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Invaders firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Display bus
    // Pin assignments are board-specific (RST=GPIO0, CE=GPIO1, DC=GPIO2, DIN=GPIO3, CLK=GPIO4)
    let rst = HalOutput::new(Output::new(p.PIN_0, Level::High), true);
    let ce = HalOutput::new(Output::new(p.PIN_1, Level::High), true);
    let dc = HalOutput::new(Output::new(p.PIN_2, Level::Low), false);
    let din = HalOutput::new(Output::new(p.PIN_3, Level::Low), false);
    let clk = HalOutput::new(Output::new(p.PIN_4, Level::High), true);

    let mut delay = HalDelay(Delay);

    let mut lcd = Pcd8544::new(
        BitBangSerial::new(clk, din),
        rst,
        ce,
        dc,
        config::display_config(),
    );
    lcd.init(&mut delay);
    info!("PCD8544 initialized: {}", lcd.config());

    // Buttons, pulled up, pressed = low
    // Pin assignments are board-specific (LEFT=GPIO6, RIGHT=GPIO7, FIRE=GPIO8)
    let buttons = ActiveLowButtons::new(
        HalInput::new(Input::new(p.PIN_6, Pull::Up)),
        HalInput::new(Input::new(p.PIN_7, Pull::Up)),
        HalInput::new(Input::new(p.PIN_8, Pull::Up)),
    );

    let game = config::game_config();
    info!("Frame loop starting ({} ms/frame)", game.frame_delay_ms);

    // Blocks this task forever; nothing else runs on the executor
    Console::new(lcd, buttons, delay, game).run_with(|frame, state, buttons| {
        trace!(
            "frame {}: player={} invader={} missile={} buttons={}",
            frame,
            state.player(),
            state.invader(),
            state.missile(),
            buttons
        );

        if frame % HEARTBEAT_FRAMES == 0 {
            debug!("heartbeat: {} frames", frame);
        }
    })
}
