//! Event system for decoupled inter-module communication.
//!
//! A simple publish/subscribe mechanism over std `mpsc` channels. Producers
//! (workspace notification observers, the status-bar toggle, trust setup)
//! publish without knowing who handles the event; the main-loop dispatcher
//! drains the bus on a timer and reacts.
//!
//! - [`types`]: event definitions (`AppEvent`)
//! - [`bus`]: `EventBus` and `EventPublisher`
//! - [`global`]: static accessor functions

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish, publisher};
pub use types::AppEvent;
