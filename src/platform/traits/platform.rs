//! Root platform trait
//!
//! This module defines the root Platform trait that aggregates all peripheral
//! interfaces.

use super::{GpioInterface, I2cBus, I2cConfig, TimerInterface};
use crate::platform::Result;

/// Root platform trait
///
/// This trait aggregates all platform-specific peripheral interfaces and
/// provides platform initialization and peripheral creation.
///
/// Platform implementations must provide concrete types for each peripheral
/// interface via associated types, enabling zero-cost abstractions through
/// compile-time dispatch.
pub trait Platform: Sized {
    /// I2C peripheral type
    type I2c: I2cBus;

    /// GPIO peripheral type
    type Gpio: GpioInterface;

    /// Timer peripheral type
    type Timer: TimerInterface;

    /// Initialize the platform
    ///
    /// Performs platform-specific initialization: clock configuration,
    /// peripheral bring-up, system setup.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InitializationFailed` if initialization fails.
    fn init() -> Result<Self>;

    /// Get system clock frequency in Hz
    fn system_clock_hz(&self) -> u32;

    /// Create an I2C bus instance
    ///
    /// The returned handle is exclusively owned by the caller for the lifetime
    /// of the device it serves; no internal locking is provided.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if the I2C bus is already
    /// in use or the I2C ID is invalid.
    fn create_i2c(&mut self, i2c_id: u8, config: I2cConfig) -> Result<Self::I2c>;

    /// Create a GPIO pin instance
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if the pin is already in
    /// use or the pin number is invalid.
    fn create_gpio(&mut self, pin: u8) -> Result<Self::Gpio>;

    /// Get timer instance
    fn timer(&self) -> &Self::Timer;

    /// Get mutable timer instance
    fn timer_mut(&mut self) -> &mut Self::Timer;
}
