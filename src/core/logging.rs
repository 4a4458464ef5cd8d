//! Logging abstraction
//!
//! Provides unified logging macros that work across different targets:
//! - Embedded (`defmt` feature): uses defmt
//! - Host tests and `mock` builds: uses println!
//! - Anything else: no-op
//!
//! Format strings must stay within the subset both defmt and core::fmt
//! accept (`{}`, `{:?}`, `{:#x}`).

/// Log at info level
#[cfg(all(feature = "defmt", target_os = "none"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { ::defmt::info!($($arg)*) };
}

/// Log at warn level
#[cfg(all(feature = "defmt", target_os = "none"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { ::defmt::warn!($($arg)*) };
}

/// Log at error level
#[cfg(all(feature = "defmt", target_os = "none"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { ::defmt::error!($($arg)*) };
}

/// Log at debug level
#[cfg(all(feature = "defmt", target_os = "none"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { ::defmt::debug!($($arg)*) };
}

#[cfg(all(
    not(all(feature = "defmt", target_os = "none")),
    any(test, feature = "mock")
))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { ::std::println!("[INFO] {}", ::core::format_args!($($arg)*)) };
}

#[cfg(all(
    not(all(feature = "defmt", target_os = "none")),
    any(test, feature = "mock")
))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { ::std::println!("[WARN] {}", ::core::format_args!($($arg)*)) };
}

#[cfg(all(
    not(all(feature = "defmt", target_os = "none")),
    any(test, feature = "mock")
))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { ::std::println!("[ERROR] {}", ::core::format_args!($($arg)*)) };
}

#[cfg(all(
    not(all(feature = "defmt", target_os = "none")),
    any(test, feature = "mock")
))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { ::std::println!("[DEBUG] {}", ::core::format_args!($($arg)*)) };
}

#[cfg(all(
    not(all(feature = "defmt", target_os = "none")),
    not(any(test, feature = "mock"))
))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{}};
}

#[cfg(all(
    not(all(feature = "defmt", target_os = "none")),
    not(any(test, feature = "mock"))
))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{}};
}

#[cfg(all(
    not(all(feature = "defmt", target_os = "none")),
    not(any(test, feature = "mock"))
))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{}};
}

#[cfg(all(
    not(all(feature = "defmt", target_os = "none")),
    not(any(test, feature = "mock"))
))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{}};
}
