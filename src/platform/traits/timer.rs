//! Timer interface trait
//!
//! This module defines the timing interface that platform implementations must
//! provide. Delays are blocking: this targets single-threaded, cooperative
//! firmware and the calling context is stalled for the full duration.

use crate::platform::Result;

/// Timer interface trait
pub trait TimerInterface {
    /// Delay for the given number of microseconds (blocking)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the duration cannot be represented
    /// by the underlying timer.
    fn delay_us(&mut self, us: u32) -> Result<()>;

    /// Delay for the given number of milliseconds (blocking)
    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.delay_us(ms.saturating_mul(1000))
    }

    /// Microseconds elapsed since boot
    fn now_us(&self) -> u64;

    /// Milliseconds elapsed since boot
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }
}

impl<T: TimerInterface + ?Sized> TimerInterface for &mut T {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        T::delay_us(self, us)
    }

    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        T::delay_ms(self, ms)
    }

    fn now_us(&self) -> u64 {
        T::now_us(self)
    }

    fn now_ms(&self) -> u64 {
        T::now_ms(self)
    }
}
