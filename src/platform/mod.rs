//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the peripherals the sensor and
//! boot layers depend on. All platform-specific code must be isolated to this
//! module.

pub mod error;
pub mod traits;

// Adapter for buses implementing the embedded-hal 1.0 I2C traits
pub mod ehal;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{GpioInterface, I2cBus, I2cConfig, Platform, TimerInterface, XferMode};
