//! Device trait definitions
//!
//! [`SensorIo`] is the capability set a portable sensor core algorithm calls:
//! register reads and writes, hardware reset/power lines and a blocking
//! delay. A driver written against it runs unchanged over any transport that
//! provides the set, including the host-side mocks.

/// Sensor-level status
///
/// The shim deliberately collapses bus-specific failure detail: the sensor
/// algorithm layer is bus-agnostic and only needs "this exchange failed".
/// Retries, where a register operation allows them, belong to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Bus transfer failed (NACK, arbitration loss, bus error)
    Bus,
    /// Bounded wait for device state expired
    Timeout,
    /// Request exceeds the shim's transfer limits
    InvalidParam,
    /// Driver not initialized
    NotInitialized,
}

/// Sensor I/O capability set
///
/// Word-oriented operations follow the big-endian 16-bit register model used
/// by the thermal-array family; byte-oriented operations serve devices whose
/// vendor algorithm hands over raw byte blocks. In both cases the address
/// phase and the data phase form one atomic bus transaction.
pub trait SensorIo {
    /// Read `out.len()` consecutive registers starting at `start`.
    ///
    /// On success every word in `out` is host-order. On failure `out` is
    /// untouched, but callers must treat its contents as undefined.
    fn read_words(&mut self, start: u16, out: &mut [u16]) -> Result<(), SensorError>;

    /// Write one 16-bit register.
    fn write_word(&mut self, addr: u16, value: u16) -> Result<(), SensorError>;

    /// Read a raw byte block starting at a 16-bit register address.
    ///
    /// No byte swapping is applied; byte-oriented vendor algorithms do their
    /// own structure decoding (see [`crate::devices::wire::swap_u32_buffer`]).
    fn read_bytes(&mut self, addr: u16, buf: &mut [u8]) -> Result<(), SensorError>;

    /// Write a raw byte block starting at a 16-bit register address.
    fn write_bytes(&mut self, addr: u16, data: &[u8]) -> Result<(), SensorError>;

    /// Broadcast a general-call reset to every device on the bus.
    fn general_reset(&mut self) -> Result<(), SensorError>;

    /// Pulse the sensor's hardware reset line.
    ///
    /// Side-effecting only; the caller supplies any settle delay. Calling it
    /// twice leaves the device in the same state as calling it once.
    fn reset(&mut self);

    /// Drive the sensor's shutdown/power line low.
    fn shutdown(&mut self);

    /// Block the calling context for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}
