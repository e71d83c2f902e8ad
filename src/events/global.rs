//! Global access to the application event bus.
//!
//! The bus is initialized once at startup via [`init_event_bus`]; after
//! that any module can publish via [`publish`] or grab a reusable
//! [`publisher`]. The main loop drains with [`drain_events`].
//!
//! The sender lives in a `OnceLock` (it is `Send + Sync`); the receiver is
//! wrapped in a `Mutex` but only ever touched from the main thread.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, OnceLock};

use super::bus::EventPublisher;
use super::types::AppEvent;

static SENDER: OnceLock<Sender<AppEvent>> = OnceLock::new();
static RECEIVER: OnceLock<Mutex<Receiver<AppEvent>>> = OnceLock::new();

/// Initialize the global event bus.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init_event_bus() {
    let (sender, receiver) = mpsc::channel();

    SENDER
        .set(sender)
        .expect("event bus already initialized (sender)");
    RECEIVER
        .set(Mutex::new(receiver))
        .expect("event bus already initialized (receiver)");
}

/// A publisher handle for the global bus.
///
/// # Panics
///
/// Panics if [`init_event_bus`] has not been called.
pub fn publisher() -> EventPublisher {
    let sender = SENDER
        .get()
        .expect("event bus not initialized - call init_event_bus() first");
    EventPublisher::from_sender(sender.clone())
}

/// Publish a single event to the global bus.
///
/// # Panics
///
/// Panics if [`init_event_bus`] has not been called.
pub fn publish(event: AppEvent) {
    let sender = SENDER
        .get()
        .expect("event bus not initialized - call init_event_bus() first");
    // Ignore send errors - receiver dropped means the app is shutting down
    let _ = sender.send(event);
}

/// Drain all pending events. Called from the main-loop dispatcher.
///
/// # Panics
///
/// Panics if [`init_event_bus`] has not been called.
pub fn drain_events() -> Vec<AppEvent> {
    let receiver = RECEIVER
        .get()
        .expect("event bus not initialized - call init_event_bus() first");
    let receiver = receiver.lock().expect("event bus receiver mutex poisoned");

    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}
