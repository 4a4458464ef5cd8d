//! MLX90641 thermal-array sensor driver
//!
//! 16x12 far-infrared array with a big-endian 16-bit register interface.

pub mod config;
pub mod driver;
pub mod registers;

pub use config::{Mlx90641Config, RefreshRate};
pub use driver::{Frame, Mlx90641};
