//! Adapter for buses implementing the embedded-hal 1.0 I2C traits
//!
//! [`HalI2cBus`] turns any [`embedded_hal::i2c::I2c`] implementation into an
//! [`I2cBus`]. embedded-hal has no notion of a held transfer, so `NoStop` and
//! `Suspend` phases are buffered and replayed as a single combined operation
//! when the closing `Stop` phase arrives:
//!
//! - address write (`NoStop`) + data read (`Stop`) becomes one `write_read`,
//!   which embedded-hal guarantees is joined by a repeated start
//! - address write (`Suspend`) + data write (`Stop`) becomes one `write`
//!
//! The device therefore still sees a single atomic transaction.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};
use heapless::Vec;

use crate::platform::error::{I2cError, PlatformError};
use crate::platform::traits::{I2cBus, XferMode};
use crate::platform::Result;

/// Capacity of the held-phase buffer in bytes.
///
/// Held phases carry register addresses and small payloads; bulk data always
/// travels in the closing phase, which is passed through unbuffered.
const HOLD_CAP: usize = 64;

/// [`I2cBus`] implementation over an embedded-hal 1.0 I2C bus.
pub struct HalI2cBus<T> {
    inner: T,
    held: Option<Held>,
}

struct Held {
    addr: u8,
    buf: Vec<u8, HOLD_CAP>,
}

impl<T: I2c> HalI2cBus<T> {
    /// Wrap an embedded-hal I2C bus.
    pub fn new(inner: T) -> Self {
        Self { inner, held: None }
    }

    /// Release the wrapped bus.
    pub fn free(self) -> T {
        self.inner
    }

    fn check_addr(&mut self, addr: u8) -> Result<()> {
        if addr > 0x7F {
            self.held = None;
            return Err(PlatformError::I2c(I2cError::InvalidAddress));
        }
        if let Some(held) = &self.held {
            // A held transfer must complete on the device that opened it.
            if held.addr != addr {
                self.held = None;
                return Err(PlatformError::I2c(I2cError::InvalidAddress));
            }
        }
        Ok(())
    }

    fn hold(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        let held = self.held.get_or_insert_with(|| Held {
            addr,
            buf: Vec::new(),
        });
        held.buf
            .extend_from_slice(data)
            .map_err(|_| PlatformError::InvalidConfig)
    }
}

fn map_err(kind: ErrorKind) -> PlatformError {
    PlatformError::I2c(match kind {
        ErrorKind::NoAcknowledge(_) => I2cError::Nack,
        ErrorKind::ArbitrationLoss => I2cError::ArbitrationLost,
        _ => I2cError::BusError,
    })
}

impl<T: I2c> I2cBus for HalI2cBus<T> {
    fn write(&mut self, addr: u8, data: &[u8], mode: XferMode) -> Result<()> {
        self.check_addr(addr)?;
        match mode {
            XferMode::NoStop | XferMode::Suspend => self.hold(addr, data),
            XferMode::Stop => {
                let res = match self.held.take() {
                    Some(mut held) => {
                        held.buf
                            .extend_from_slice(data)
                            .map_err(|_| PlatformError::InvalidConfig)?;
                        self.inner.write(addr, &held.buf)
                    }
                    None => self.inner.write(addr, data),
                };
                res.map_err(|e| map_err(e.kind()))
            }
        }
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8], mode: XferMode) -> Result<()> {
        self.check_addr(addr)?;
        if mode != XferMode::Stop {
            // A read can only close a transaction on this adapter.
            self.held = None;
            return Err(PlatformError::InvalidConfig);
        }
        let res = match self.held.take() {
            Some(held) => self.inner.write_read(addr, &held.buf, buffer),
            None => self.inner.read(addr, buffer),
        };
        res.map_err(|e| map_err(e.kind()))
    }

    fn general_call(&mut self, cmd: u8) -> Result<()> {
        self.held = None;
        self.inner.write(0x00, &[cmd]).map_err(|e| map_err(e.kind()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorType, NoAcknowledgeSource, Operation};
    use std::vec::Vec as StdVec;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Write { addr: u8, data: StdVec<u8> },
        Read { addr: u8, len: usize },
    }

    #[derive(Debug, Clone, Copy)]
    struct FakeError(ErrorKind);

    impl embedded_hal::i2c::Error for FakeError {
        fn kind(&self) -> ErrorKind {
            self.0
        }
    }

    /// Minimal embedded-hal bus recording each transaction's operations.
    #[derive(Default)]
    struct FakeHalBus {
        calls: StdVec<Call>,
        read_data: StdVec<u8>,
        fail: Option<ErrorKind>,
    }

    impl ErrorType for FakeHalBus {
        type Error = FakeError;
    }

    impl I2c for FakeHalBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> core::result::Result<(), Self::Error> {
            if let Some(kind) = self.fail.take() {
                return Err(FakeError(kind));
            }
            for op in operations {
                match op {
                    Operation::Write(data) => self.calls.push(Call::Write {
                        addr: address,
                        data: data.to_vec(),
                    }),
                    Operation::Read(buf) => {
                        let n = buf.len().min(self.read_data.len());
                        buf[..n].copy_from_slice(&self.read_data[..n]);
                        self.read_data.drain(..n);
                        self.calls.push(Call::Read {
                            addr: address,
                            len: buf.len(),
                        });
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_no_stop_write_then_read_combines() {
        let mut bus = HalI2cBus::new(FakeHalBus::default());
        bus.inner.read_data = vec![0xAA, 0xBB];

        bus.write(0x33, &[0x24, 0x00], XferMode::NoStop).unwrap();
        // Nothing hits the wire until the closing phase.
        assert!(bus.inner.calls.is_empty());

        let mut buf = [0u8; 2];
        bus.read(0x33, &mut buf, XferMode::Stop).unwrap();
        assert_eq!(buf, [0xAA, 0xBB]);
        assert_eq!(
            bus.inner.calls,
            vec![
                Call::Write {
                    addr: 0x33,
                    data: vec![0x24, 0x00]
                },
                Call::Read { addr: 0x33, len: 2 },
            ]
        );
    }

    #[test]
    fn test_suspend_write_then_write_combines() {
        let mut bus = HalI2cBus::new(FakeHalBus::default());

        bus.write(0x33, &[0x80, 0x0D], XferMode::Suspend).unwrap();
        bus.write(0x33, &[0x12, 0x34], XferMode::Stop).unwrap();

        // One transaction, address and value back to back.
        assert_eq!(
            bus.inner.calls,
            vec![Call::Write {
                addr: 0x33,
                data: vec![0x80, 0x0D, 0x12, 0x34]
            }]
        );
    }

    #[test]
    fn test_plain_write_and_read() {
        let mut bus = HalI2cBus::new(FakeHalBus::default());
        bus.inner.read_data = vec![0x01];

        bus.write(0x10, &[0x55], XferMode::Stop).unwrap();
        let mut buf = [0u8; 1];
        bus.read(0x10, &mut buf, XferMode::Stop).unwrap();
        assert_eq!(buf, [0x01]);
        assert_eq!(bus.inner.calls.len(), 2);
    }

    #[test]
    fn test_held_phase_address_mismatch() {
        let mut bus = HalI2cBus::new(FakeHalBus::default());
        bus.write(0x33, &[0x24, 0x00], XferMode::NoStop).unwrap();

        let mut buf = [0u8; 2];
        let err = bus.read(0x29, &mut buf, XferMode::Stop).unwrap_err();
        assert_eq!(err, PlatformError::I2c(I2cError::InvalidAddress));
        // The held phase is dropped, not replayed against the next device.
        assert!(bus.inner.calls.is_empty());
    }

    #[test]
    fn test_nack_maps_to_i2c_error() {
        let mut bus = HalI2cBus::new(FakeHalBus::default());
        bus.inner.fail = Some(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));

        let err = bus.write(0x33, &[0x00], XferMode::Stop).unwrap_err();
        assert_eq!(err, PlatformError::I2c(I2cError::Nack));
    }

    #[test]
    fn test_general_call() {
        let mut bus = HalI2cBus::new(FakeHalBus::default());
        bus.general_call(crate::platform::traits::GENERAL_CALL_RESET)
            .unwrap();
        assert_eq!(
            bus.inner.calls,
            vec![Call::Write {
                addr: 0x00,
                data: vec![0x06]
            }]
        );
    }

    #[test]
    fn test_invalid_address_rejected() {
        let mut bus = HalI2cBus::new(FakeHalBus::default());
        let err = bus.write(0x80, &[0x00], XferMode::Stop).unwrap_err();
        assert_eq!(err, PlatformError::I2c(I2cError::InvalidAddress));
    }
}
