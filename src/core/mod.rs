//! Core systems
//!
//! ## Modules
//!
//! - `logging`: unified logging macros across embedded and host targets

pub mod logging;
