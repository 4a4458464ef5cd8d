//! Partition descriptor model
//!
//! A partition table declares, as pure data, the memory layout the bootloader
//! must protect before handing control to the application image. Tables are
//! `const`-constructible and compiled into the boot image; there is no
//! versioning field, so the table must match the running application's
//! expectations exactly.

use crate::boot::BootError;

/// Partition type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PartitionType {
    /// Internal flash behind the AXI bus
    AxiFlash,
    /// External SPI flash accessed through a controller window
    SpiFlash,
    /// Memory-mapped (execute-in-place) external flash
    XipFlash,
    /// Recovery/bootloader flash
    RecFlash,
}

/// Memory attribute class
///
/// Exactly one class applies per partition entry; there is no default. Raw
/// attribute words from a serialized table are decoded with
/// [`MemAttr::from_raw`], which fails on unknown values rather than falling
/// back to anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MemAttr {
    /// Device memory, non-gathering, non-reordering, early ack
    DeviceNGnRE,
    /// Normal memory, read-allocate
    NormalRa,
    /// Normal memory, write-back, read/write-allocate
    NormalWbRaWa,
    /// Normal memory, non-transient, read-allocate
    NormalNtRa,
    /// Normal memory, non-cacheable
    NormalNoCache,
}

impl MemAttr {
    /// Decode a raw attribute word from a partition table
    pub const fn from_raw(raw: u32) -> Result<Self, BootError> {
        match raw {
            0 => Ok(MemAttr::DeviceNGnRE),
            1 => Ok(MemAttr::NormalRa),
            2 => Ok(MemAttr::NormalWbRaWa),
            3 => Ok(MemAttr::NormalNtRa),
            4 => Ok(MemAttr::NormalNoCache),
            _ => Err(BootError::BadAttr(raw)),
        }
    }

    /// Encode this class as a raw attribute word
    pub const fn as_raw(self) -> u32 {
        match self {
            MemAttr::DeviceNGnRE => 0,
            MemAttr::NormalRa => 1,
            MemAttr::NormalWbRaWa => 2,
            MemAttr::NormalNtRa => 3,
            MemAttr::NormalNoCache => 4,
        }
    }
}

/// Partition entry
///
/// `read_only` and `attr` are orthogonal: a region can be read-only normal
/// cacheable memory (code) or read-write device memory (peripheral window).
/// Entries are immutable at runtime and consumed top-to-bottom by the boot
/// configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Partition {
    /// Partition type
    pub ptype: PartitionType,
    /// Hardware MPU region slot this entry programs
    pub region: i32,
    /// Writes are faulted when set
    pub read_only: bool,
    /// Start address (inclusive)
    pub start: u32,
    /// Limit address (exclusive)
    pub limit: u32,
    /// Memory attribute class
    pub attr: MemAttr,
}

impl Partition {
    /// Build a partition entry
    pub const fn new(
        ptype: PartitionType,
        region: i32,
        read_only: bool,
        start: u32,
        limit: u32,
        attr: MemAttr,
    ) -> Self {
        Self {
            ptype,
            region,
            read_only,
            start,
            limit,
            attr,
        }
    }

    /// Whether this entry's `[start, limit)` range overlaps `other`'s
    pub fn overlaps(&self, other: &Partition) -> bool {
        self.start < other.limit && other.start < self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mem_attr_raw_round_trip() {
        for attr in [
            MemAttr::DeviceNGnRE,
            MemAttr::NormalRa,
            MemAttr::NormalWbRaWa,
            MemAttr::NormalNtRa,
            MemAttr::NormalNoCache,
        ] {
            assert_eq!(MemAttr::from_raw(attr.as_raw()), Ok(attr));
        }
    }

    #[test]
    fn test_mem_attr_unknown_is_error() {
        // No defaulting: an unknown attribute word must not decode.
        assert_eq!(MemAttr::from_raw(5), Err(BootError::BadAttr(5)));
        assert_eq!(MemAttr::from_raw(0xFFFF_FFFF), Err(BootError::BadAttr(0xFFFF_FFFF)));
    }

    #[test]
    fn test_partition_overlap() {
        let a = Partition::new(
            PartitionType::AxiFlash,
            0,
            true,
            0x0000_0000,
            0x0010_0000,
            MemAttr::NormalWbRaWa,
        );
        let b = Partition::new(
            PartitionType::SpiFlash,
            1,
            false,
            0x0010_0000,
            0x0020_0000,
            MemAttr::NormalNoCache,
        );
        let c = Partition::new(
            PartitionType::XipFlash,
            2,
            true,
            0x000F_0000,
            0x0018_0000,
            MemAttr::NormalNtRa,
        );

        // Adjacent ranges do not overlap; c straddles both.
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(a.overlaps(&c));
        assert!(b.overlaps(&c));
        assert!(c.overlaps(&b));
    }
}
