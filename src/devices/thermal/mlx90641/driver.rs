//! MLX90641 Thermal Array Driver Implementation
//!
//! Core driver for reading frame data over the sensor platform shim.

use super::config::Mlx90641Config;
use super::registers;
use crate::devices::traits::{SensorError, SensorIo};

/// Maximum consecutive errors before marking the sensor unhealthy
const MAX_CONSECUTIVE_ERRORS: u32 = 3;

/// Settle time after a power-on/general-call reset
const POR_SETTLE_MS: u32 = 80;

/// Status poll spacing while waiting for a frame
const FRAME_POLL_INTERVAL_MS: u32 = 2;

/// Poll attempts before a frame wait times out.
///
/// Covers one full period at the slowest refresh rate.
const FRAME_POLL_ATTEMPTS: u32 = 1100;

/// One measurement frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Pixel and auxiliary words, host order
    pub data: [u16; registers::FRAME_WORDS],
    /// Control register value at capture time
    pub control: u16,
    /// Subpage of this measurement
    pub subpage: u8,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            data: [0; registers::FRAME_WORDS],
            control: 0,
            subpage: 0,
        }
    }
}

/// MLX90641 thermal-array driver
///
/// Generic over the sensor I/O capability set, so it runs unchanged over any
/// transport: the real I2C shim in firmware, mocks in host tests.
pub struct Mlx90641<S: SensorIo> {
    /// Platform shim for this sensor
    io: S,

    /// Driver configuration
    config: Mlx90641Config,

    /// Health status
    healthy: bool,

    /// Consecutive error count
    error_count: u32,

    /// Initialization complete flag
    initialized: bool,
}

impl<S: SensorIo> Mlx90641<S> {
    /// Create and initialize a new MLX90641 driver
    ///
    /// # Errors
    ///
    /// Returns the underlying `SensorError` if the device cannot be reset,
    /// probed or configured.
    pub fn new(io: S, config: Mlx90641Config) -> Result<Self, SensorError> {
        let mut driver = Self {
            io,
            config,
            healthy: false,
            error_count: 0,
            initialized: false,
        };
        driver.init()?;
        Ok(driver)
    }

    fn init(&mut self) -> Result<(), SensorError> {
        // Quiesce every device on the bus, then let the sensor reboot.
        self.io.general_reset()?;
        self.io.delay_ms(POR_SETTLE_MS);

        // Probe: a readable serial number means the device is alive.
        let id = self.serial_number()?;
        crate::log_info!(
            "MLX90641 detected (serial {:#x} {:#x} {:#x})",
            id[0],
            id[1],
            id[2]
        );

        // Program the refresh rate, preserving the rest of the control word.
        let mut ctrl = [0u16; 1];
        self.read(registers::CTRL_REG, &mut ctrl)?;
        let ctrl = (ctrl[0] & !registers::CTRL_REFRESH_MASK)
            | (self.config.refresh_rate.field_value() << registers::CTRL_REFRESH_SHIFT);
        self.write(registers::CTRL_REG, ctrl)?;

        self.initialized = true;
        self.healthy = true;
        crate::log_info!("MLX90641 initialized");
        Ok(())
    }

    /// Read the device serial number from EEPROM
    pub fn serial_number(&mut self) -> Result<[u16; registers::EEPROM_ID_WORDS], SensorError> {
        let mut id = [0u16; registers::EEPROM_ID_WORDS];
        self.read(registers::EEPROM_ID_START, &mut id)?;
        Ok(id)
    }

    /// Wait for a new measurement, then read the whole frame
    ///
    /// Blocks until the device signals new data (bounded; see
    /// `FRAME_POLL_ATTEMPTS`), rearms the measurement and burst-reads the
    /// frame RAM. A failure at any step propagates as "no valid frame".
    ///
    /// # Errors
    ///
    /// - `SensorError::NotInitialized` before a successful `new`
    /// - `SensorError::Timeout` if no frame becomes ready
    /// - `SensorError::Bus` on any failed exchange
    pub fn read_frame(&mut self) -> Result<Frame, SensorError> {
        if !self.initialized {
            return Err(SensorError::NotInitialized);
        }

        let status = self.wait_new_data()?;

        // Rearm before draining RAM so the next measurement can start.
        self.write(registers::STATUS_REG, registers::STATUS_CLEAR)?;

        let mut frame = Frame {
            subpage: (status & registers::STATUS_SUBPAGE_MASK) as u8,
            ..Frame::default()
        };
        self.read(registers::RAM_BASE, &mut frame.data)?;

        let mut ctrl = [0u16; 1];
        self.read(registers::CTRL_REG, &mut ctrl)?;
        frame.control = ctrl[0];

        Ok(frame)
    }

    /// Whether the driver initialized and recent exchanges succeeded
    pub fn is_healthy(&self) -> bool {
        self.initialized && self.healthy
    }

    /// Release the underlying platform shim
    pub fn free(self) -> S {
        self.io
    }

    /// Poll the status register until new data is flagged
    fn wait_new_data(&mut self) -> Result<u16, SensorError> {
        for _ in 0..FRAME_POLL_ATTEMPTS {
            let mut status = [0u16; 1];
            self.read(registers::STATUS_REG, &mut status)?;
            if status[0] & registers::STATUS_NEW_DATA != 0 {
                return Ok(status[0]);
            }
            self.io.delay_ms(FRAME_POLL_INTERVAL_MS);
        }
        crate::log_warn!("MLX90641 frame wait timed out");
        Err(SensorError::Timeout)
    }

    fn read(&mut self, start: u16, out: &mut [u16]) -> Result<(), SensorError> {
        self.io.read_words(start, out).map_err(|e| {
            self.error_count += 1;
            if self.error_count >= MAX_CONSECUTIVE_ERRORS {
                self.healthy = false;
            }
            e
        })?;
        self.error_count = 0;
        Ok(())
    }

    fn write(&mut self, addr: u16, value: u16) -> Result<(), SensorError> {
        self.io.write_word(addr, value).map_err(|e| {
            self.error_count += 1;
            if self.error_count >= MAX_CONSECUTIVE_ERRORS {
                self.healthy = false;
            }
            e
        })?;
        self.error_count = 0;
        Ok(())
    }
}
