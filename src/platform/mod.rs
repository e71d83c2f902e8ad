//! Platform integration.
//!
//! The engine only has an OS backend on macOS; the pure core compiles and
//! tests everywhere.

#[cfg(target_os = "macos")]
pub mod macos;
