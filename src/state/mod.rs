//! Shared engine state.
//!
//! The event-tap callback runs on the privileged input-dispatch path and
//! must never block or perform I/O. Everything it reads is routed through
//! the types here:
//!
//! - [`SnapshotCell`]: single-writer/multiple-reader published dock
//!   snapshot. The writer swaps in a freshly built `Arc`; a reader holds an
//!   uncontended read lock only long enough to clone the `Arc`, so it never
//!   observes a partially built snapshot and never waits on a rebuild.
//! - [`FeatureFlag`]: the click-to-hide toggle as an atomic, updated
//!   synchronously by `set()` before the change notification goes out.
//! - [`DebounceGate`]: single-slot gate collapsing rapid refresh triggers
//!   into one rebuild per window.
//! - [`SharedState`]: the explicit context object (snapshot + feature +
//!   trust) handed to the index builder, the event tap, and the UI glue at
//!   construction. There is no hidden global application state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Mutex, RwLock};

use crate::model::constants::REFRESH_DEBOUNCE_MS;
use crate::model::dock::DockSnapshot;

/// Published-value cell for the current dock snapshot.
pub struct SnapshotCell {
    inner: RwLock<Arc<DockSnapshot>>,
}

impl SnapshotCell {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Arc::new(DockSnapshot::empty())),
        }
    }

    /// Atomically replace the published snapshot. The previous snapshot is
    /// dropped once its last reader releases it.
    pub fn publish(&self, snapshot: DockSnapshot) {
        *self.inner.write() = Arc::new(snapshot);
    }

    /// Grab the latest published snapshot.
    pub fn load(&self) -> Arc<DockSnapshot> {
        self.inner.read().clone()
    }
}

impl Default for SnapshotCell {
    fn default() -> Self {
        Self::new()
    }
}

/// The click-to-hide feature toggle.
///
/// `set()` updates the in-memory value before any notification is
/// published, so the event tap never reads a stale value after being told
/// the flag changed. Persistence is the caller's concern (the storage
/// layer writes through on every change).
pub struct FeatureFlag {
    enabled: AtomicBool,
}

impl FeatureFlag {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
        }
    }

    pub fn get(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    pub fn set(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }
}

/// Single-slot debounce gate.
///
/// The first `try_arm()` succeeds and opens a window; further calls within
/// the window fail. Matches the reference behavior: the first trigger
/// rebuilds immediately, repeats inside the window are dropped entirely.
pub struct DebounceGate {
    window: Duration,
    armed_at: Mutex<Option<Instant>>,
}

impl DebounceGate {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            armed_at: Mutex::new(None),
        }
    }

    /// Try to claim the gate. Returns `true` exactly once per window.
    pub fn try_arm(&self) -> bool {
        let mut armed_at = self.armed_at.lock();
        let now = Instant::now();
        match *armed_at {
            Some(t) if now.duration_since(t) < self.window => false,
            _ => {
                *armed_at = Some(now);
                true
            }
        }
    }
}

impl Default for DebounceGate {
    fn default() -> Self {
        Self::new(Duration::from_millis(REFRESH_DEBOUNCE_MS))
    }
}

/// Everything shared between the privileged callback, the background index
/// builder, and the UI glue.
pub struct SharedState {
    pub snapshot: SnapshotCell,
    pub feature: FeatureFlag,
    trusted: AtomicBool,
}

impl SharedState {
    pub fn new(feature_enabled: bool) -> Self {
        Self {
            snapshot: SnapshotCell::new(),
            feature: FeatureFlag::new(feature_enabled),
            trusted: AtomicBool::new(false),
        }
    }

    /// Is the process currently authorized for accessibility queries and
    /// global event interception?
    pub fn is_trusted(&self) -> bool {
        self.trusted.load(Ordering::SeqCst)
    }

    /// Record a trust transition. Returns `true` only when the value
    /// actually changed, so a grant can be acted on exactly once.
    pub fn set_trusted(&self, trusted: bool) -> bool {
        self.trusted.swap(trusted, Ordering::SeqCst) != trusted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dock::DockItem;
    use crate::model::geometry::{Point, Rect};

    #[test]
    fn snapshot_cell_starts_empty() {
        let cell = SnapshotCell::new();
        assert!(cell.load().is_empty());
    }

    #[test]
    fn publish_replaces_snapshot_wholesale() {
        let cell = SnapshotCell::new();
        cell.publish(DockSnapshot::new(vec![DockItem::new(
            Rect::new(0.0, 0.0, 50.0, 50.0),
            "Finder",
        )]));
        assert_eq!(cell.load().len(), 1);

        cell.publish(DockSnapshot::empty());
        assert!(cell.load().is_empty());
    }

    #[test]
    fn readers_keep_their_snapshot_across_a_publish() {
        let cell = SnapshotCell::new();
        cell.publish(DockSnapshot::new(vec![DockItem::new(
            Rect::new(0.0, 0.0, 50.0, 50.0),
            "Finder",
        )]));

        let held = cell.load();
        cell.publish(DockSnapshot::empty());

        // The reader's copy is unaffected by the swap.
        assert!(held.item_at(Point::new(10.0, 10.0)).is_some());
        assert!(cell.load().is_empty());
    }

    #[test]
    fn feature_flag_round_trips() {
        let flag = FeatureFlag::new(true);
        assert!(flag.get());
        flag.set(false);
        assert!(!flag.get());
    }

    #[test]
    fn debounce_gate_arms_once_per_window() {
        let gate = DebounceGate::new(Duration::from_secs(60));
        assert!(gate.try_arm());
        assert!(!gate.try_arm());
        assert!(!gate.try_arm());
    }

    #[test]
    fn debounce_gate_rearms_after_window_elapses() {
        let gate = DebounceGate::new(Duration::from_millis(10));
        assert!(gate.try_arm());
        std::thread::sleep(Duration::from_millis(20));
        assert!(gate.try_arm());
    }

    #[test]
    fn trust_transition_reports_change_exactly_once() {
        let state = SharedState::new(true);
        assert!(!state.is_trusted());
        assert!(state.set_trusted(true));
        assert!(!state.set_trusted(true));
        assert!(state.is_trusted());
    }
}
