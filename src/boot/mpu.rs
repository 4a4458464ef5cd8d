//! Boot memory protection configurator
//!
//! Walks a static partition table and programs one hardware MPU region per
//! entry, so execution after boot has the correct cacheability and access
//! semantics everywhere and no range is left with default/open permissions.
//!
//! The configurator is a small state machine:
//!
//! ```text
//! Unconfigured -> load_defaults -> Defaults -> apply -> Configured -> deinit -> Unconfigured
//! ```
//!
//! `apply` validates the entire table before touching a single hardware slot;
//! on overlap, bad range or resource exhaustion it fails fast and the caller
//! must halt. A half-programmed MPU is never observable.

use crate::boot::partition::{MemAttr, Partition};
use crate::boot::BootError;
use crate::log_error;

/// Hardware region descriptor derived from one partition entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegionConfig {
    /// Region base address (inclusive)
    pub base: u32,
    /// Region limit address (exclusive)
    pub limit: u32,
    /// Writes are faulted when set
    pub read_only: bool,
    /// Instruction fetch is faulted when set
    pub execute_never: bool,
    /// Memory attribute class
    pub attr: MemAttr,
}

impl RegionConfig {
    /// Resolve the hardware descriptor for a partition entry.
    ///
    /// Only read-only non-device regions are executable: code runs from
    /// flash-backed read-only ranges, everything else is execute-never.
    pub fn from_partition(p: &Partition) -> Self {
        let device = p.attr == MemAttr::DeviceNGnRE;
        Self {
            base: p.start,
            limit: p.limit,
            read_only: p.read_only,
            execute_never: !p.read_only || device,
            attr: p.attr,
        }
    }
}

/// Hardware MPU seam
///
/// Implemented once per port; the configurator drives it and a test double
/// stands in for it on the host.
pub trait MpuPort {
    /// Number of region slots the hardware provides (commonly 8 or 16)
    fn region_count(&self) -> usize;

    /// Reset all slots to the port's safe power-on defaults
    fn load_defaults(&mut self) -> Result<(), BootError>;

    /// Commit one region descriptor to a hardware slot.
    ///
    /// Must be atomic from the caller's point of view: either the slot holds
    /// the full descriptor afterwards or an error is returned and the slot is
    /// unchanged.
    fn configure_region(&mut self, slot: usize, config: &RegionConfig) -> Result<(), BootError>;

    /// Enable the MPU
    fn enable(&mut self);

    /// Disable the MPU
    fn disable(&mut self);

    /// Read back a programmed slot, where the hardware supports it
    fn read_region(&self, slot: usize) -> Option<RegionConfig>;
}

/// Configurator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MpuState {
    /// No configuration loaded
    Unconfigured,
    /// Safe defaults loaded, ready for a partition table
    Defaults,
    /// Partition table programmed and MPU enabled
    Configured,
}

/// Boot memory protection configurator
pub struct BootMpu<P: MpuPort> {
    port: P,
    state: MpuState,
}

impl<P: MpuPort> BootMpu<P> {
    /// Create a configurator over a hardware port
    pub fn new(port: P) -> Self {
        Self {
            port,
            state: MpuState::Unconfigured,
        }
    }

    /// Current state
    pub fn state(&self) -> MpuState {
        self.state
    }

    /// Access the underlying port (read-back, tests)
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Load the port's safe defaults
    ///
    /// # Errors
    ///
    /// `BootError::BadState` unless the configurator is `Unconfigured`.
    pub fn load_defaults(&mut self) -> Result<(), BootError> {
        if self.state != MpuState::Unconfigured {
            return Err(BootError::BadState);
        }
        self.port.load_defaults()?;
        self.state = MpuState::Defaults;
        Ok(())
    }

    /// Validate and program a partition table, then enable the MPU
    ///
    /// The whole table is validated before any slot is written. Any error is
    /// fatal: the caller must halt rather than boot with an unprotected
    /// region.
    ///
    /// # Errors
    ///
    /// - `BadState` unless defaults are loaded
    /// - `TooManyRegions` if the table needs more slots than the MPU has
    /// - `InvalidRange` for an entry with `start >= limit`
    /// - `DuplicateRegion` if two entries claim one slot
    /// - `Overlap` if two entries cover intersecting address ranges
    pub fn apply(&mut self, table: &[Partition]) -> Result<(), BootError> {
        if self.state != MpuState::Defaults {
            return Err(BootError::BadState);
        }
        Self::validate(table, self.port.region_count())?;

        for p in table {
            self.port
                .configure_region(p.region as usize, &RegionConfig::from_partition(p))?;
        }
        self.port.enable();
        self.state = MpuState::Configured;
        Ok(())
    }

    /// Disable the MPU at handoff
    pub fn deinit(&mut self) {
        self.port.disable();
        self.state = MpuState::Unconfigured;
    }

    fn validate(table: &[Partition], available: usize) -> Result<(), BootError> {
        if table.len() > available {
            log_error!(
                "partition table needs {} regions, MPU has {}",
                table.len(),
                available
            );
            return Err(BootError::TooManyRegions {
                needed: table.len(),
                available,
            });
        }
        for (i, p) in table.iter().enumerate() {
            if p.start >= p.limit {
                log_error!("partition {} has empty or inverted range", i);
                return Err(BootError::InvalidRange(i));
            }
            if p.region < 0 || p.region as usize >= available {
                return Err(BootError::TooManyRegions {
                    needed: p.region.unsigned_abs() as usize + 1,
                    available,
                });
            }
        }
        for (i, a) in table.iter().enumerate() {
            for (j, b) in table.iter().enumerate().skip(i + 1) {
                if a.region == b.region {
                    return Err(BootError::DuplicateRegion(a.region));
                }
                if a.overlaps(b) {
                    log_error!("partitions {} and {} overlap", i, j);
                    return Err(BootError::Overlap(i, j));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boot::partition::PartitionType;
    use crate::platform::mock::MockMpu;

    fn flash(region: i32, start: u32, limit: u32) -> Partition {
        Partition::new(
            PartitionType::AxiFlash,
            region,
            true,
            start,
            limit,
            MemAttr::NormalWbRaWa,
        )
    }

    #[test]
    fn test_state_machine() {
        let mut mpu = BootMpu::new(MockMpu::new(8));
        assert_eq!(mpu.state(), MpuState::Unconfigured);

        // apply before load_defaults is a state error
        assert_eq!(mpu.apply(&[]), Err(BootError::BadState));

        mpu.load_defaults().unwrap();
        assert_eq!(mpu.state(), MpuState::Defaults);
        assert_eq!(mpu.load_defaults(), Err(BootError::BadState));

        mpu.apply(&[flash(0, 0x0, 0x10_0000)]).unwrap();
        assert_eq!(mpu.state(), MpuState::Configured);
        assert!(mpu.port().enabled());

        mpu.deinit();
        assert_eq!(mpu.state(), MpuState::Unconfigured);
        assert!(!mpu.port().enabled());
    }

    #[test]
    fn test_two_partition_table_programs_matching_regions() {
        let table = [
            Partition::new(
                PartitionType::AxiFlash,
                0,
                true,
                0x0000_0000,
                0x0010_0000,
                MemAttr::NormalWbRaWa,
            ),
            Partition::new(
                PartitionType::SpiFlash,
                1,
                false,
                0x0010_0000,
                0x0020_0000,
                MemAttr::NormalNoCache,
            ),
        ];
        let mut mpu = BootMpu::new(MockMpu::new(8));
        mpu.load_defaults().unwrap();
        mpu.apply(&table).unwrap();

        let r0 = mpu.port().read_region(0).unwrap();
        assert_eq!(r0.base, 0x0000_0000);
        assert_eq!(r0.limit, 0x0010_0000);
        assert!(r0.read_only);
        assert!(!r0.execute_never); // read-only flash is executable
        assert_eq!(r0.attr, MemAttr::NormalWbRaWa);

        let r1 = mpu.port().read_region(1).unwrap();
        assert_eq!(r1.attr, MemAttr::NormalNoCache);
        assert!(!r1.read_only);
        assert!(r1.execute_never);
    }

    #[test]
    fn test_overlap_fails_fast_and_programs_nothing() {
        let table = [flash(0, 0x0, 0x10_0000), flash(1, 0x08_0000, 0x20_0000)];
        let mut mpu = BootMpu::new(MockMpu::new(8));
        mpu.load_defaults().unwrap();

        assert_eq!(mpu.apply(&table), Err(BootError::Overlap(0, 1)));
        // Validation runs before programming: neither entry reached hardware.
        assert!(mpu.port().read_region(0).is_none());
        assert!(mpu.port().read_region(1).is_none());
        assert_eq!(mpu.state(), MpuState::Defaults);
    }

    #[test]
    fn test_slot_exhaustion_is_deterministic() {
        let table = [
            flash(0, 0x0000, 0x1000),
            flash(1, 0x1000, 0x2000),
            flash(2, 0x2000, 0x3000),
        ];
        let mut mpu = BootMpu::new(MockMpu::new(2));
        mpu.load_defaults().unwrap();

        assert_eq!(
            mpu.apply(&table),
            Err(BootError::TooManyRegions {
                needed: 3,
                available: 2
            })
        );
        assert!(mpu.port().read_region(0).is_none());
    }

    #[test]
    fn test_out_of_range_slot_rejected() {
        let mut mpu = BootMpu::new(MockMpu::new(4));
        mpu.load_defaults().unwrap();
        let err = mpu.apply(&[flash(7, 0x0, 0x1000)]).unwrap_err();
        assert_eq!(
            err,
            BootError::TooManyRegions {
                needed: 8,
                available: 4
            }
        );
    }

    #[test]
    fn test_duplicate_region_rejected() {
        let table = [flash(0, 0x0000, 0x1000), flash(0, 0x1000, 0x2000)];
        let mut mpu = BootMpu::new(MockMpu::new(8));
        mpu.load_defaults().unwrap();
        assert_eq!(mpu.apply(&table), Err(BootError::DuplicateRegion(0)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut mpu = BootMpu::new(MockMpu::new(8));
        mpu.load_defaults().unwrap();
        assert_eq!(
            mpu.apply(&[flash(0, 0x2000, 0x1000)]),
            Err(BootError::InvalidRange(0))
        );
    }

    #[test]
    fn test_device_window_is_execute_never() {
        let p = Partition::new(
            PartitionType::SpiFlash,
            0,
            true,
            0x4000_0000,
            0x4001_0000,
            MemAttr::DeviceNGnRE,
        );
        let r = RegionConfig::from_partition(&p);
        // Device memory never executes, read-only or not.
        assert!(r.execute_never);
        assert!(r.read_only);
    }
}
