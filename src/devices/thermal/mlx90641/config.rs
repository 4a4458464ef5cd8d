//! MLX90641 driver configuration

/// Measurement refresh rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RefreshRate {
    /// 0.5 Hz
    Hz0_5,
    /// 1 Hz
    Hz1,
    /// 2 Hz
    Hz2,
    /// 4 Hz
    Hz4,
    /// 8 Hz
    Hz8,
    /// 16 Hz
    Hz16,
    /// 32 Hz
    Hz32,
    /// 64 Hz
    Hz64,
}

impl RefreshRate {
    /// Field value for the control register refresh-rate bits
    pub fn field_value(self) -> u16 {
        match self {
            RefreshRate::Hz0_5 => 0b000,
            RefreshRate::Hz1 => 0b001,
            RefreshRate::Hz2 => 0b010,
            RefreshRate::Hz4 => 0b011,
            RefreshRate::Hz8 => 0b100,
            RefreshRate::Hz16 => 0b101,
            RefreshRate::Hz32 => 0b110,
            RefreshRate::Hz64 => 0b111,
        }
    }
}

/// MLX90641 driver configuration
#[derive(Debug, Clone, Copy)]
pub struct Mlx90641Config {
    /// Measurement refresh rate
    pub refresh_rate: RefreshRate,
}

impl Default for Mlx90641Config {
    fn default() -> Self {
        Self {
            refresh_rate: RefreshRate::Hz2,
        }
    }
}
