#![cfg_attr(not(test), no_std)]

//! thermocam - Sensor and boot support library for a thermal/ToF camera module
//!
//! This library provides the I2C transaction layer, the sensor platform shim,
//! device drivers and the boot-time memory protection configuration used by a
//! camera-module firmware.

#[cfg(any(test, feature = "mock"))]
extern crate std;

// Platform abstraction layer (I2C transaction layer, GPIO, timers)
pub mod platform;

// Device drivers and the sensor platform shim built on platform abstraction
pub mod devices;

// Bootloader support: partition descriptors and MPU configuration
pub mod boot;

// Core systems (logging)
pub mod core;
