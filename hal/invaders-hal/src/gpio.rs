//! GPIO pin abstractions
//!
//! Provides traits for digital input and output lines, plus adapters
//! that lift `embedded-hal` 1.0 pins into them.

use embedded_hal::digital;

/// Digital output pin
///
/// Writes are fire-and-forget: a line that fails to change level is not
/// reported back to the caller.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// Reading takes `&mut self` because sampling a real line may touch
/// peripheral state.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

/// Output adapter for any `embedded_hal::digital::OutputPin`
///
/// Tracks the last commanded level so `is_set_high` does not need a
/// stateful pin. Errors from the wrapped pin are dropped.
pub struct HalOutput<P> {
    pin: P,
    high: bool,
}

impl<P: digital::OutputPin> HalOutput<P> {
    /// Wrap a pin, driving it to `initial_high` immediately
    pub fn new(pin: P, initial_high: bool) -> Self {
        let mut out = Self {
            pin,
            high: initial_high,
        };
        out.set_state(initial_high);
        out
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: digital::OutputPin> OutputPin for HalOutput<P> {
    fn set_high(&mut self) {
        self.pin.set_high().ok();
        self.high = true;
    }

    fn set_low(&mut self) {
        self.pin.set_low().ok();
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Input adapter for any `embedded_hal::digital::InputPin`
///
/// A failed read reports high, the idle level of a pulled-up line.
pub struct HalInput<P> {
    pin: P,
}

impl<P: digital::InputPin> HalInput<P> {
    /// Wrap a pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: digital::InputPin> InputPin for HalInput<P> {
    fn is_high(&mut self) -> bool {
        self.pin.is_high().unwrap_or(true)
    }
}
