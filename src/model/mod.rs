//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies):
//! dock geometry, running-application records, the matching decision core,
//! and the fixed configuration tables.
//!
//! Platform-specific collection of this data lives in `platform::macos`.

pub mod constants;
pub mod dock;
pub mod geometry;
pub mod matcher;
pub mod running_app;

pub use constants::*;
pub use dock::{DockItem, DockSnapshot};
pub use geometry::{Point, Rect};
pub use matcher::{decide, Decision};
pub use running_app::RunningApp;
