//! Bootloader support
//!
//! Declarative flash/memory partition descriptors and the boot-time memory
//! protection configurator that programs them into the MPU before control is
//! handed to the application image.

pub mod mpu;
pub mod partition;

pub use mpu::{BootMpu, MpuPort, MpuState, RegionConfig};
pub use partition::{MemAttr, Partition, PartitionType};

/// Boot-configuration errors
///
/// All of these are fatal: continuing with an unprotected or misattributed
/// memory region is unsafe, so the caller must halt instead of booting the
/// application image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootError {
    /// Two partition entries cover overlapping address ranges
    Overlap(usize, usize),
    /// A partition entry has `start >= limit`
    InvalidRange(usize),
    /// Two partition entries claim the same hardware region slot
    DuplicateRegion(i32),
    /// The table needs more regions than the MPU provides
    TooManyRegions { needed: usize, available: usize },
    /// An attribute word does not name a known memory attribute class
    BadAttr(u32),
    /// Operation not valid in the configurator's current state
    BadState,
    /// The MPU port rejected a region descriptor
    Port,
}
