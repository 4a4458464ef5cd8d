//! MLX90641 Register and Memory Map Definitions
//!
//! Based on the MLX90641 datasheet (16x12 far-infrared thermal array).

#![allow(dead_code)]

/// Default 7-bit I2C address
pub const MLX90641_ADDR: u8 = 0x33;

/// Measurement RAM base address
pub const RAM_BASE: u16 = 0x0400;

/// One frame: 192 pixel words plus auxiliary data
pub const FRAME_WORDS: usize = 242;

/// EEPROM base address
pub const EEPROM_BASE: u16 = 0x2400;

/// EEPROM word count
pub const EEPROM_WORDS: usize = 832;

/// Device serial number, three EEPROM words
pub const EEPROM_ID_START: u16 = 0x2407;
pub const EEPROM_ID_WORDS: usize = 3;

/// Status register
pub const STATUS_REG: u16 = 0x8000;

/// Status: new measurement data available in RAM
pub const STATUS_NEW_DATA: u16 = 0x0008;

/// Status: subpage of the last measurement
pub const STATUS_SUBPAGE_MASK: u16 = 0x0001;

/// Value written to the status register to arm the next measurement
/// (clears the new-data flag, enables RAM overwrite)
pub const STATUS_CLEAR: u16 = 0x0030;

/// Control register 1
pub const CTRL_REG: u16 = 0x800D;

/// Refresh-rate field in control register 1
pub const CTRL_REFRESH_SHIFT: u16 = 7;
pub const CTRL_REFRESH_MASK: u16 = 0x0380;
