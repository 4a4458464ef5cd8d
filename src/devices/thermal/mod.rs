//! Thermal-array sensor drivers
//!
//! ## Modules
//!
//! - `mlx90641`: MLX90641 16x12 far-infrared thermal array

pub mod mlx90641;
