//! Blocking delay abstraction

/// Blocking millisecond delay
///
/// The whole system stalls for the duration; nothing else is serviced.
pub trait DelayMs {
    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

impl<T: DelayMs + ?Sized> DelayMs for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms);
    }
}

/// Delay adapter for any `embedded_hal::delay::DelayNs`
pub struct HalDelay<D>(pub D);

impl<D: embedded_hal::delay::DelayNs> DelayMs for HalDelay<D> {
    fn delay_ms(&mut self, ms: u32) {
        embedded_hal::delay::DelayNs::delay_ms(&mut self.0, ms);
    }
}
