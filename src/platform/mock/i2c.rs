//! Mock I2C implementation for testing
//!
//! Models a bus with one big-endian 16-bit-register device attached, the
//! register model shared by the thermal-array sensor family: a transfer opens
//! with a two-byte register address, the device auto-increments one word per
//! word transferred, and multi-phase framing (`NoStop`/`Suspend`) keeps the
//! address and data phases joined exactly like real hardware does.

use crate::platform::error::{I2cError, PlatformError};
use crate::platform::traits::{I2cBus, I2cConfig, XferMode};
use crate::platform::Result;
use std::collections::BTreeMap;
use std::vec::Vec;

/// I2C transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    /// Write transaction
    Write {
        addr: u8,
        data: Vec<u8>,
        mode: XferMode,
    },
    /// Read transaction
    Read { addr: u8, len: usize, mode: XferMode },
    /// General-call broadcast
    GeneralCall { cmd: u8 },
}

/// Mock I2C implementation
///
/// Records all transactions for test verification, serves reads and writes
/// from a word-addressed register file, and supports fault injection
/// (device absent, forced one-shot error).
#[derive(Debug)]
pub struct MockI2c {
    config: I2cConfig,
    transactions: Vec<I2cTransaction>,
    regs: BTreeMap<u16, u16>,
    /// Device register pointer, set by the last address phase.
    pointer: u16,
    /// Bytes held by an open `NoStop`/`Suspend` phase.
    pending: Vec<u8>,
    pending_addr: Option<u8>,
    present: bool,
    fail_next: Option<I2cError>,
}

impl MockI2c {
    /// Create a new mock I2C with an empty register file
    pub fn new(config: I2cConfig) -> Self {
        Self {
            config,
            transactions: Vec::new(),
            regs: BTreeMap::new(),
            pointer: 0,
            pending: Vec::new(),
            pending_addr: None,
            present: true,
            fail_next: None,
        }
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> &[I2cTransaction] {
        &self.transactions
    }

    /// Clear transaction log
    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    /// Preload a device register
    pub fn set_reg(&mut self, addr: u16, value: u16) {
        self.regs.insert(addr, value);
    }

    /// Read back a device register (0 if never written)
    pub fn reg(&self, addr: u16) -> u16 {
        self.regs.get(&addr).copied().unwrap_or(0)
    }

    /// Simulate the device being absent: every transfer is NACKed
    pub fn set_present(&mut self, present: bool) {
        self.present = present;
    }

    /// Fail the next transfer with the given error
    pub fn fail_next(&mut self, err: I2cError) {
        self.fail_next = Some(err);
    }

    /// Get current frequency
    pub fn frequency(&self) -> u32 {
        self.config.frequency
    }

    fn check(&mut self, addr: u8) -> Result<()> {
        if addr > 0x7F {
            return Err(PlatformError::I2c(I2cError::InvalidAddress));
        }
        if let Some(err) = self.fail_next.take() {
            self.pending.clear();
            self.pending_addr = None;
            return Err(PlatformError::I2c(err));
        }
        if !self.present {
            self.pending.clear();
            self.pending_addr = None;
            return Err(PlatformError::I2c(I2cError::Nack));
        }
        Ok(())
    }

    /// Commit a completed write: leading two bytes select the register,
    /// remaining byte pairs are stored as consecutive words.
    fn commit_write(&mut self, bytes: &[u8]) {
        if bytes.len() < 2 {
            return;
        }
        self.pointer = u16::from_be_bytes([bytes[0], bytes[1]]);
        let mut addr = self.pointer;
        for pair in bytes[2..].chunks_exact(2) {
            self.regs
                .insert(addr, u16::from_be_bytes([pair[0], pair[1]]));
            addr = addr.wrapping_add(1);
        }
    }
}

impl I2cBus for MockI2c {
    fn write(&mut self, addr: u8, data: &[u8], mode: XferMode) -> Result<()> {
        self.check(addr)?;
        if let Some(pending_addr) = self.pending_addr {
            if pending_addr != addr {
                self.pending.clear();
                self.pending_addr = None;
                return Err(PlatformError::I2c(I2cError::InvalidAddress));
            }
        }
        self.transactions.push(I2cTransaction::Write {
            addr,
            data: data.to_vec(),
            mode,
        });
        match mode {
            XferMode::NoStop | XferMode::Suspend => {
                self.pending_addr = Some(addr);
                self.pending.extend_from_slice(data);
            }
            XferMode::Stop => {
                let mut bytes = core::mem::take(&mut self.pending);
                self.pending_addr = None;
                bytes.extend_from_slice(data);
                self.commit_write(&bytes);
            }
        }
        Ok(())
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8], mode: XferMode) -> Result<()> {
        self.check(addr)?;
        self.transactions.push(I2cTransaction::Read {
            addr,
            len: buffer.len(),
            mode,
        });
        // An open address phase selects the start register; otherwise the
        // device reads from its current pointer.
        if self.pending_addr == Some(addr) && self.pending.len() >= 2 {
            self.pointer = u16::from_be_bytes([self.pending[0], self.pending[1]]);
        }
        self.pending.clear();
        self.pending_addr = None;

        for (i, byte) in buffer.iter_mut().enumerate() {
            let word = self.reg(self.pointer.wrapping_add((i / 2) as u16));
            *byte = if i % 2 == 0 {
                (word >> 8) as u8
            } else {
                word as u8
            };
        }
        self.pointer = self.pointer.wrapping_add(buffer.len().div_ceil(2) as u16);
        Ok(())
    }

    fn general_call(&mut self, cmd: u8) -> Result<()> {
        if let Some(err) = self.fail_next.take() {
            return Err(PlatformError::I2c(err));
        }
        self.transactions.push(I2cTransaction::GeneralCall { cmd });
        // Broadcast reset returns the device to its power-on state.
        self.pointer = 0;
        self.pending.clear();
        self.pending_addr = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_i2c_write_commits_register() {
        let mut i2c = MockI2c::new(I2cConfig::default());
        // Address phase held, value phase closes the transfer.
        i2c.write(0x33, &[0x80, 0x0D], XferMode::Suspend).unwrap();
        i2c.write(0x33, &[0x12, 0x34], XferMode::Stop).unwrap();

        assert_eq!(i2c.reg(0x800D), 0x1234);
        assert_eq!(i2c.transactions().len(), 2);
    }

    #[test]
    fn test_mock_i2c_addressed_read() {
        let mut i2c = MockI2c::new(I2cConfig::default());
        i2c.set_reg(0x2400, 0xBEEF);
        i2c.set_reg(0x2401, 0xCAFE);

        i2c.write(0x33, &[0x24, 0x00], XferMode::NoStop).unwrap();
        let mut buf = [0u8; 4];
        i2c.read(0x33, &mut buf, XferMode::Stop).unwrap();
        assert_eq!(buf, [0xBE, 0xEF, 0xCA, 0xFE]);
    }

    #[test]
    fn test_mock_i2c_pointer_advances() {
        let mut i2c = MockI2c::new(I2cConfig::default());
        i2c.set_reg(0x0400, 0x0001);
        i2c.set_reg(0x0401, 0x0002);

        i2c.write(0x33, &[0x04, 0x00], XferMode::NoStop).unwrap();
        let mut buf = [0u8; 2];
        i2c.read(0x33, &mut buf, XferMode::Stop).unwrap();
        assert_eq!(buf, [0x00, 0x01]);

        // Next read continues from the advanced pointer.
        i2c.read(0x33, &mut buf, XferMode::Stop).unwrap();
        assert_eq!(buf, [0x00, 0x02]);
    }

    #[test]
    fn test_mock_i2c_absent_device_nacks() {
        let mut i2c = MockI2c::new(I2cConfig::default());
        i2c.set_present(false);

        let err = i2c.write(0x33, &[0x00], XferMode::Stop).unwrap_err();
        assert_eq!(err, PlatformError::I2c(I2cError::Nack));
    }

    #[test]
    fn test_mock_i2c_fail_next_is_one_shot() {
        let mut i2c = MockI2c::new(I2cConfig::default());
        i2c.fail_next(I2cError::ArbitrationLost);

        let err = i2c.write(0x33, &[0x00], XferMode::Stop).unwrap_err();
        assert_eq!(err, PlatformError::I2c(I2cError::ArbitrationLost));
        assert!(i2c.write(0x33, &[0x00, 0x00], XferMode::Stop).is_ok());
    }

    #[test]
    fn test_mock_i2c_general_call_resets_pointer() {
        let mut i2c = MockI2c::new(I2cConfig::default());
        i2c.set_reg(0x0000, 0xAA55);
        i2c.write(0x33, &[0x24, 0x00], XferMode::NoStop).unwrap();

        i2c.general_call(0x06).unwrap();

        let mut buf = [0u8; 2];
        i2c.read(0x33, &mut buf, XferMode::Stop).unwrap();
        assert_eq!(buf, [0xAA, 0x55]);
        assert_eq!(
            i2c.transactions()[1],
            I2cTransaction::GeneralCall { cmd: 0x06 }
        );
    }
}
