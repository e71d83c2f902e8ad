//! dockhide: hide the frontmost app by clicking its Dock icon.
//!
//! The pure core (`model`, `state`, `events`) is free of macOS FFI so its
//! tests run as normal cargo tests on any host. Everything that talks to
//! the OS (the accessibility tree walker, the event tap, the workspace
//! directory, preferences) lives under [`platform`] behind a target cfg.

pub mod events;
pub mod model;
pub mod platform;
pub mod state;

// Re-export the decision core for convenience
pub use model::{decide, Decision, DockItem, DockSnapshot, Point, Rect, RunningApp};

// Re-export shared state and events
pub use events::{AppEvent, EventBus, EventPublisher};
pub use state::SharedState;
