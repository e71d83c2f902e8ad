//! Dock index builder: debounced, asynchronous snapshot rebuilds.
//!
//! Owns the rebuild pipeline: a refresh request passes the trust gate and
//! the debounce gate, then a worker thread walks the dock's accessibility
//! tree and publishes the finished snapshot in one swap. Clicks arriving
//! mid-rebuild see whatever was last published; stale-by-one-rebuild is
//! fine.

use std::sync::Arc;
use std::thread;

use tracing::debug;

use crate::model::dock::DockSnapshot;
use crate::state::{DebounceGate, SharedState};

use super::{axtree, workspace};

pub struct DockIndexBuilder {
    shared: Arc<SharedState>,
    gate: DebounceGate,
}

impl DockIndexBuilder {
    pub fn new(shared: Arc<SharedState>) -> Self {
        Self {
            shared,
            gate: DebounceGate::default(),
        }
    }

    /// Request a snapshot rebuild.
    ///
    /// A safe no-op while untrusted and while a rebuild window is already
    /// armed; otherwise triggers exactly one asynchronous rebuild. Never
    /// blocks the caller.
    pub fn request_refresh(&self) {
        if !self.shared.is_trusted() {
            return;
        }
        if !self.gate.try_arm() {
            return;
        }

        let shared = self.shared.clone();
        thread::spawn(move || {
            let items = match unsafe { workspace::dock_pid() } {
                Some(pid) => axtree::dock_items(pid),
                // Dock process not found: clear rather than leave a stale
                // snapshot published.
                None => Vec::new(),
            };
            debug!(count = items.len(), "dock snapshot rebuilt");
            shared.snapshot.publish(DockSnapshot::new(items));
        });
    }
}
