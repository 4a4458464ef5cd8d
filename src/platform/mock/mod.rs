//! Mock platform implementations for testing
//!
//! Std-backed test doubles for every platform trait, plus a mock MPU port for
//! the boot configurator. Available in unit tests and behind the `mock`
//! feature for host integration tests.

pub mod gpio;
pub mod i2c;
pub mod mpu;
pub mod platform;
pub mod timer;

pub use gpio::MockGpio;
pub use i2c::{I2cTransaction, MockI2c};
pub use mpu::MockMpu;
pub use platform::MockPlatform;
pub use timer::MockTimer;
