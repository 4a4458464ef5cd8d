//! I2C transaction layer trait
//!
//! This module defines the addressed, length-bounded byte transfer interface
//! that platform implementations must provide, with explicit control over
//! whether the bus is released between transfer phases.

use crate::platform::Result;

/// General-call broadcast command that resets all listening devices.
///
/// Sent to the general-call address (0x00) to quiesce every device sharing the
/// bus before per-device initialization.
pub const GENERAL_CALL_RESET: u8 = 0x06;

/// I2C configuration
#[derive(Debug, Clone, Copy)]
pub struct I2cConfig {
    /// Bus frequency in Hz (typically 100_000 or 400_000)
    pub frequency: u32,
    /// Timeout in microseconds
    pub timeout_us: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            frequency: 100_000,    // 100 kHz standard mode
            timeout_us: 1_000_000, // 1 second
        }
    }
}

/// Transfer completion mode
///
/// Controls what happens on the bus after the last byte of a transfer phase.
/// A register-address phase followed by a data phase must be one atomic bus
/// transaction: the first phase uses `NoStop` or `Suspend` so no other master
/// can win arbitration between the phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum XferMode {
    /// Issue a stop condition and release the bus.
    Stop,
    /// End the phase without a stop; the next phase begins with a repeated
    /// start. Used for a register-address write followed by a data read.
    NoStop,
    /// Hold the transfer open; the next phase continues it without a restart.
    /// Used for a register-address write followed by a data write.
    Suspend,
}

/// I2C transaction layer trait
///
/// Platform implementations must provide this interface for I2C bus
/// communication.
///
/// # Safety Invariants
///
/// - I2C peripheral must be initialized before use
/// - Only one owner per I2C bus instance; sharing a bus between contexts
///   requires external serialization
/// - Address must be 7-bit (valid range: 0x00..=0x7F)
/// - Every internal status poll must be bounded and surface
///   `I2cError::Timeout` rather than spinning forever
pub trait I2cBus {
    /// Write data to an I2C device
    ///
    /// Performs START - ADDR(W) - DATA, then completes according to `mode`.
    ///
    /// # Arguments
    ///
    /// * `addr` - 7-bit I2C device address
    /// * `data` - Data bytes to write
    /// * `mode` - Transfer completion mode
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::I2c` if the device does not acknowledge,
    /// arbitration is lost, a bus error occurs or the timeout expires. A
    /// failed phase leaves the whole logical transaction failed; no partial
    /// write is ever reported as success.
    fn write(&mut self, addr: u8, data: &[u8], mode: XferMode) -> Result<()>;

    /// Read data from an I2C device
    ///
    /// Performs START - ADDR(R) - DATA, then completes according to `mode`.
    /// When this phase follows a `NoStop` write it begins with a repeated
    /// start on the held bus.
    ///
    /// # Arguments
    ///
    /// * `addr` - 7-bit I2C device address
    /// * `buffer` - Buffer to receive data
    /// * `mode` - Transfer completion mode
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::I2c` on NACK, arbitration loss, bus error or
    /// timeout. Buffer contents are undefined after a failed read.
    fn read(&mut self, addr: u8, buffer: &mut [u8], mode: XferMode) -> Result<()>;

    /// Send a general-call command
    ///
    /// Broadcasts `cmd` to the general-call address (0x00). Commonly used with
    /// [`GENERAL_CALL_RESET`] to reset all devices sharing the bus.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::I2c` if no device acknowledges the broadcast.
    fn general_call(&mut self, cmd: u8) -> Result<()>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    fn write(&mut self, addr: u8, data: &[u8], mode: XferMode) -> Result<()> {
        T::write(self, addr, data, mode)
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8], mode: XferMode) -> Result<()> {
        T::read(self, addr, buffer, mode)
    }

    fn general_call(&mut self, cmd: u8) -> Result<()> {
        T::general_call(self, cmd)
    }
}
