//! Mock Platform implementation for testing

use crate::platform::{
    error::PlatformError,
    traits::{I2cConfig, Platform},
    Result,
};

use super::{MockGpio, MockI2c, MockTimer};
use std::vec::Vec;

/// Mock Platform implementation
///
/// Provides mock peripheral implementations for hardware-free testing.
///
/// # Example
///
/// ```ignore
/// use thermocam::platform::mock::MockPlatform;
/// use thermocam::platform::traits::{I2cBus, Platform, XferMode};
///
/// let mut platform = MockPlatform::new();
/// let mut i2c = platform.create_i2c(0, Default::default()).unwrap();
/// i2c.write(0x33, &[0x24, 0x00], XferMode::Stop).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockPlatform {
    timer: MockTimer,
    gpio_allocated: Vec<u8>,
}

impl MockPlatform {
    /// Create a new mock platform
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of I2C peripherals
    pub const MAX_I2CS: u8 = 2;

    /// Maximum GPIO pin number
    pub const MAX_GPIO: u8 = 29;
}

impl Platform for MockPlatform {
    type I2c = MockI2c;
    type Gpio = MockGpio;
    type Timer = MockTimer;

    fn init() -> Result<Self> {
        Ok(Self::new())
    }

    fn system_clock_hz(&self) -> u32 {
        125_000_000 // Simulated 125 MHz system clock
    }

    fn create_i2c(&mut self, i2c_id: u8, config: I2cConfig) -> Result<Self::I2c> {
        if i2c_id >= Self::MAX_I2CS {
            return Err(PlatformError::ResourceUnavailable);
        }
        Ok(MockI2c::new(config))
    }

    fn create_gpio(&mut self, pin: u8) -> Result<Self::Gpio> {
        if pin > Self::MAX_GPIO || self.gpio_allocated.contains(&pin) {
            return Err(PlatformError::ResourceUnavailable);
        }
        self.gpio_allocated.push(pin);
        Ok(MockGpio::new_output())
    }

    fn timer(&self) -> &Self::Timer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut Self::Timer {
        &mut self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::traits::{GpioInterface, TimerInterface};

    #[test]
    fn test_mock_platform_init() {
        let platform = MockPlatform::init().unwrap();
        assert_eq!(platform.system_clock_hz(), 125_000_000);
    }

    #[test]
    fn test_mock_platform_i2c() {
        let mut platform = MockPlatform::new();
        let _i2c0 = platform.create_i2c(0, I2cConfig::default()).unwrap();
        let _i2c1 = platform.create_i2c(1, I2cConfig::default()).unwrap();

        assert!(platform.create_i2c(10, I2cConfig::default()).is_err());
    }

    #[test]
    fn test_mock_platform_gpio() {
        let mut platform = MockPlatform::new();
        let mut gpio0 = platform.create_gpio(0).unwrap();
        gpio0.set_high().unwrap();

        // Same GPIO should not be allocatable twice
        assert!(platform.create_gpio(0).is_err());

        let _gpio1 = platform.create_gpio(1).unwrap();
        assert!(platform.create_gpio(100).is_err());
    }

    #[test]
    fn test_mock_platform_timer() {
        let mut platform = MockPlatform::new();
        platform.timer_mut().delay_us(1000).unwrap();
        assert_eq!(platform.timer().now_us(), 1000);
    }
}
