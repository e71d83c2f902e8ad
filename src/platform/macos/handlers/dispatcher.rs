//! Event dispatcher for the main loop.
//!
//! Drains the global event bus on a timer and executes the corresponding
//! actions. Dock-affecting events all funnel into a single refresh request
//! per drain; the builder's debounce gate collapses bursts (app-switch
//! storms fire several workspace notifications back to back).

use std::sync::Arc;

use tracing::debug;

use crate::events::drain_events;

use super::super::dock_index::DockIndexBuilder;

/// Drain and handle all pending events. Called from the main-loop timer.
pub fn dispatch_events(builder: &Arc<DockIndexBuilder>) {
    let events = drain_events();
    if events.is_empty() {
        return;
    }

    let mut refresh = false;
    for event in events {
        debug!(event = event.description(), "dispatching");
        // FeatureToggled needs no action here: the setter already flipped
        // the flag the tap callback reads.
        refresh |= event.triggers_refresh();
    }

    if refresh {
        builder.request_refresh();
    }
}
