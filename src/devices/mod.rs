//! Device drivers
//!
//! This module contains device drivers that use platform abstraction traits,
//! plus the sensor platform shim that adapts vendor register contracts onto
//! the I2C transaction layer.
//!
//! ## Modules
//!
//! - `bridge`: sensor platform shim (bus + address + reset/power pins + timer)
//! - `thermal`: thermal-array sensor drivers
//! - `traits`: device trait definitions (SensorIo, SensorError)
//! - `wire`: big-endian wire codec, the single endianness boundary

pub mod bridge;
pub mod thermal;
pub mod traits;
pub mod wire;

pub use bridge::SensorBridge;
pub use traits::{SensorError, SensorIo};
