//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod gpio;
pub mod i2c;
pub mod platform;
pub mod timer;

// Re-export trait interfaces
pub use gpio::{GpioInterface, GpioMode};
pub use i2c::{I2cBus, I2cConfig, XferMode, GENERAL_CALL_RESET};
pub use platform::Platform;
pub use timer::TimerInterface;
