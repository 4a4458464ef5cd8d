//! Sensor platform shim
//!
//! [`SensorBridge`] adapts a sensor vendor's raw register contract onto the
//! I2C transaction layer. It owns everything one physical sensor needs: the
//! bus handle (or a `&mut` lease on a shared one), the 7-bit device address,
//! the reset and shutdown lines and a timer for blocking delays.
//!
//! Multi-phase framing is the load-bearing part: a register-address phase is
//! issued with `NoStop` (before a read) or `Suspend` (before a write) so the
//! address and data phases form one atomic bus transaction no other master
//! can interleave. Endianness is normalized exactly once, at this boundary,
//! via [`crate::devices::wire`].

use crate::devices::traits::{SensorError, SensorIo};
use crate::devices::wire;
use crate::platform::error::{I2cError, PlatformError};
use crate::platform::traits::{GpioInterface, GpioMode, I2cBus, TimerInterface, XferMode};

/// Largest burst the shim will move in one transaction, in 16-bit words.
///
/// Sized for the biggest block in the supported sensor family (a full
/// thermal-array frame plus aux data).
pub const MAX_BLOCK_WORDS: usize = 256;

/// Reset line pulse width
const RESET_PULSE_MS: u32 = 1;

/// Platform context for one physical sensor
///
/// Created once per sensor at init; the device address is immutable
/// afterwards. The bus handle is exclusively owned for the bridge's lifetime;
/// to share a bus between sensors, lend it as `&mut` with external
/// serialization.
pub struct SensorBridge<B, G, T> {
    bus: B,
    address: u8,
    reset_pin: G,
    shutdown_pin: G,
    timer: T,
    scratch: [u8; MAX_BLOCK_WORDS * 2],
}

impl<B, G, T> SensorBridge<B, G, T>
where
    B: I2cBus,
    G: GpioInterface,
    T: TimerInterface,
{
    /// Create a platform context for one sensor.
    ///
    /// Both pins are configured as push-pull outputs and driven high
    /// (reset deasserted, device powered).
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::I2c(I2cError::InvalidAddress)` for an address
    /// outside the 7-bit range, or a GPIO error if a pin cannot be
    /// configured.
    pub fn new(
        bus: B,
        address: u8,
        mut reset_pin: G,
        mut shutdown_pin: G,
        timer: T,
    ) -> Result<Self, PlatformError> {
        if address > 0x7F {
            return Err(PlatformError::I2c(I2cError::InvalidAddress));
        }
        reset_pin.set_mode(GpioMode::OutputPushPull)?;
        reset_pin.set_high()?;
        shutdown_pin.set_mode(GpioMode::OutputPushPull)?;
        shutdown_pin.set_high()?;
        Ok(Self {
            bus,
            address,
            reset_pin,
            shutdown_pin,
            timer,
            scratch: [0; MAX_BLOCK_WORDS * 2],
        })
    }

    /// 7-bit device address this context serves
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Access the underlying bus handle (diagnostics, tests)
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }
}

impl<B, G, T> SensorIo for SensorBridge<B, G, T>
where
    B: I2cBus,
    G: GpioInterface,
    T: TimerInterface,
{
    fn read_words(&mut self, start: u16, out: &mut [u16]) -> Result<(), SensorError> {
        let len = out.len() * 2;
        if len > self.scratch.len() {
            return Err(SensorError::InvalidParam);
        }
        // Address phase held open, data phase closes the transaction.
        self.bus
            .write(self.address, &wire::encode_u16(start), XferMode::NoStop)
            .map_err(|_| SensorError::Bus)?;
        self.bus
            .read(self.address, &mut self.scratch[..len], XferMode::Stop)
            .map_err(|_| SensorError::Bus)?;
        wire::decode_words(&self.scratch[..len], out);
        Ok(())
    }

    fn write_word(&mut self, addr: u16, value: u16) -> Result<(), SensorError> {
        self.bus
            .write(self.address, &wire::encode_u16(addr), XferMode::Suspend)
            .map_err(|_| SensorError::Bus)?;
        self.bus
            .write(self.address, &wire::encode_u16(value), XferMode::Stop)
            .map_err(|_| SensorError::Bus)
    }

    fn read_bytes(&mut self, addr: u16, buf: &mut [u8]) -> Result<(), SensorError> {
        self.bus
            .write(self.address, &wire::encode_u16(addr), XferMode::NoStop)
            .map_err(|_| SensorError::Bus)?;
        self.bus
            .read(self.address, buf, XferMode::Stop)
            .map_err(|_| SensorError::Bus)
    }

    fn write_bytes(&mut self, addr: u16, data: &[u8]) -> Result<(), SensorError> {
        self.bus
            .write(self.address, &wire::encode_u16(addr), XferMode::Suspend)
            .map_err(|_| SensorError::Bus)?;
        self.bus
            .write(self.address, data, XferMode::Stop)
            .map_err(|_| SensorError::Bus)
    }

    fn general_reset(&mut self) -> Result<(), SensorError> {
        self.bus.general_call(crate::platform::traits::GENERAL_CALL_RESET)
            .map_err(|_| SensorError::Bus)
    }

    fn reset(&mut self) {
        // Pins are outputs by construction, drives cannot fail.
        let _ = self.reset_pin.set_low();
        let _ = self.timer.delay_ms(RESET_PULSE_MS);
        let _ = self.reset_pin.set_high();
    }

    fn shutdown(&mut self) {
        let _ = self.shutdown_pin.set_low();
    }

    fn delay_ms(&mut self, ms: u32) {
        let _ = self.timer.delay_ms(ms);
    }
}
