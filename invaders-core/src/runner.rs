//! Fixed-timestep frame loop
//!
//! One tick is: update the game, sample the buttons, render, then block
//! for the frame delay. The loop owns the game state exclusively and
//! never returns.

use invaders_hal::DelayMs;

use crate::config::GameConfig;
use crate::game::GameState;
use crate::input::Buttons;
use crate::render::render;
use crate::traits::{GlyphDisplay, InputSource};

/// The handheld: game state plus the hardware it is wired to
pub struct Console<D, I, T> {
    state: GameState,
    display: D,
    input: I,
    delay: T,
    config: GameConfig,
    frames: u32,
}

impl<D, I, T> Console<D, I, T>
where
    D: GlyphDisplay,
    I: InputSource,
    T: DelayMs,
{
    /// Create a console around an already-initialized display
    pub fn new(display: D, input: I, delay: T, config: GameConfig) -> Self {
        Self {
            state: GameState::new(),
            display,
            input,
            delay,
            config,
            frames: 0,
        }
    }

    /// Run one frame
    ///
    /// Returns the buttons sampled during this frame.
    pub fn tick(&mut self) -> Buttons {
        self.state.update();

        let buttons = self.input.sample();
        self.state.apply_input(buttons);

        render(&self.state, &mut self.display);

        self.delay.delay_ms(self.config.frame_delay_ms);
        self.frames = self.frames.wrapping_add(1);

        buttons
    }

    /// Run forever
    pub fn run(self) -> ! {
        self.run_with(|_, _, _| {})
    }

    /// Run forever, calling `on_frame` after every tick
    ///
    /// The hook sees the frame count, the post-tick state and the sampled
    /// buttons. It runs before the next update, inside the same thread.
    pub fn run_with<F>(mut self, mut on_frame: F) -> !
    where
        F: FnMut(u32, &GameState, Buttons),
    {
        loop {
            let buttons = self.tick();
            on_frame(self.frames, &self.state, buttons);
        }
    }

    /// Current game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The display driver
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Frames completed so far (wraps)
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Missile, Position};

    /// Counts what the render pass asked for
    #[derive(Default)]
    struct CountingDisplay {
        clears: u32,
        glyphs: u32,
        last_player: Option<(u8, u8)>,
    }

    impl GlyphDisplay for CountingDisplay {
        fn clear(&mut self) {
            self.clears += 1;
        }

        fn draw_glyph(&mut self, bank: u8, column: u8, cell: Cell) {
            self.glyphs += 1;
            if cell == Cell::Player {
                self.last_player = Some((bank, column));
            }
        }
    }

    /// Replays a fixed script, then reports nothing pressed
    struct Script {
        frames: &'static [Buttons],
        next: usize,
    }

    impl InputSource for Script {
        fn sample(&mut self) -> Buttons {
            let b = self.frames.get(self.next).copied().unwrap_or(Buttons::NONE);
            self.next += 1;
            b
        }
    }

    #[derive(Default)]
    struct FakeDelay {
        total_ms: u32,
        calls: u32,
    }

    impl DelayMs for FakeDelay {
        fn delay_ms(&mut self, ms: u32) {
            self.total_ms += ms;
            self.calls += 1;
        }
    }

    const FIRE: Buttons = Buttons {
        left: false,
        right: false,
        fire: true,
    };
    const LEFT: Buttons = Buttons {
        left: true,
        right: false,
        fire: false,
    };

    fn console(
        script: &'static [Buttons],
    ) -> Console<CountingDisplay, Script, FakeDelay> {
        Console::new(
            CountingDisplay::default(),
            Script {
                frames: script,
                next: 0,
            },
            FakeDelay::default(),
            GameConfig::default(),
        )
    }

    #[test]
    fn test_tick_order_and_delay() {
        let mut c = console(&[]);
        c.tick();

        assert_eq!(c.frames(), 1);
        assert_eq!(c.delay.calls, 1);
        assert_eq!(c.delay.total_ms, 100);
        assert_eq!(c.display().clears, 1);
        // Invader and player
        assert_eq!(c.display().glyphs, 2);
        assert_eq!(c.state().invader(), Position::new(7, 1));
    }

    #[test]
    fn test_update_runs_before_input() {
        // Fire on the first frame: the missile spawns after the update
        // step, so it is still at its spawn row when rendered.
        let mut c = console(&[FIRE]);
        c.tick();
        assert_eq!(c.state().missile(), Missile::Active(Position::new(7, 6)));
        assert_eq!(c.display().glyphs, 3);
    }

    #[test]
    fn test_missile_lifecycle_through_loop() {
        let mut c = console(&[FIRE]);
        c.tick();
        for _ in 0..6 {
            c.tick();
        }
        assert_eq!(c.state().missile_y(), 0);
        c.tick();
        assert_eq!(c.state().missile_y(), -1);
        assert_eq!(c.state().missile_x(), -1);
    }

    #[test]
    fn test_held_button_repeats() {
        static HELD: [Buttons; 3] = [LEFT, LEFT, LEFT];
        let mut c = console(&HELD);
        for _ in 0..3 {
            c.tick();
        }
        assert_eq!(c.state().player().x, 4);
        assert_eq!(c.display().last_player, Some((5, 4)));
    }

    #[test]
    fn test_custom_frame_delay() {
        let mut c = Console::new(
            CountingDisplay::default(),
            Script {
                frames: &[],
                next: 0,
            },
            FakeDelay::default(),
            GameConfig::new(16),
        );
        c.tick();
        c.tick();
        assert_eq!(c.delay.total_ms, 32);
    }
}
