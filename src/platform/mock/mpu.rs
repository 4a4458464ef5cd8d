//! Mock MPU port for testing the boot configurator

use crate::boot::mpu::{MpuPort, RegionConfig};
use crate::boot::BootError;
use std::vec;
use std::vec::Vec;

/// Mock MPU port
///
/// Simulates a fixed number of region slots with full read-back, so tests can
/// verify exactly what the configurator committed.
#[derive(Debug)]
pub struct MockMpu {
    slots: Vec<Option<RegionConfig>>,
    defaults_loaded: bool,
    enabled: bool,
    /// When set, the next `configure_region` call fails
    fail_configure: bool,
}

impl MockMpu {
    /// Create a mock MPU with the given number of region slots
    pub fn new(region_count: usize) -> Self {
        Self {
            slots: vec![None; region_count],
            defaults_loaded: false,
            enabled: false,
            fail_configure: false,
        }
    }

    /// Whether the MPU is currently enabled
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Whether safe defaults were loaded
    pub fn defaults_loaded(&self) -> bool {
        self.defaults_loaded
    }

    /// Make the next `configure_region` call fail
    pub fn fail_next_configure(&mut self) {
        self.fail_configure = true;
    }
}

impl MpuPort for MockMpu {
    fn region_count(&self) -> usize {
        self.slots.len()
    }

    fn load_defaults(&mut self) -> Result<(), BootError> {
        self.slots.fill(None);
        self.defaults_loaded = true;
        Ok(())
    }

    fn configure_region(&mut self, slot: usize, config: &RegionConfig) -> Result<(), BootError> {
        if self.fail_configure {
            self.fail_configure = false;
            return Err(BootError::Port);
        }
        // Committed atomically: the slot either holds the full descriptor or
        // keeps its previous contents.
        let entry = self.slots.get_mut(slot).ok_or(BootError::Port)?;
        *entry = Some(*config);
        Ok(())
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn read_region(&self, slot: usize) -> Option<RegionConfig> {
        self.slots.get(slot).copied().flatten()
    }
}
