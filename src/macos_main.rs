//! macOS-specific entry point and application wiring.
//!
//! Builds the shared context (snapshot cell, feature flag, trust flag),
//! installs the workspace observers and status bar, and runs two timers on
//! the main run loop: a fast bus-drain dispatcher and the slow trust poll
//! that performs idempotent tap/index setup once permission is granted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use block2::RcBlock;
use tracing::{info, warn};

use dockhide::events::{publish, AppEvent};
use dockhide::model::constants::{DISPATCH_INTERVAL_SECS, TRUST_POLL_SECS};
use dockhide::platform::macos::dock_index::DockIndexBuilder;
use dockhide::platform::macos::ffi::accessibility::is_process_trusted;
use dockhide::platform::macos::ffi::bridge::{autoreleasepool, get_class, id, msg_send, NSApp, YES};
use dockhide::platform::macos::handlers::dispatch_events;
use dockhide::platform::macos::{event_tap, observers, status_bar, storage};
use dockhide::state::SharedState;

/// Main entry point for macOS.
pub fn run() {
    autoreleasepool(|| unsafe {
        let enabled = storage::load_feature_enabled();
        let shared = Arc::new(SharedState::new(enabled));
        let builder = Arc::new(DockIndexBuilder::new(shared.clone()));

        let app = NSApp();
        // NSApplicationActivationPolicyAccessory = 1: menu-bar only, no
        // dock tile of our own
        let _: bool = msg_send![app, setActivationPolicy: 1i64];

        observers::install_workspace_observers();
        status_bar::install_status_bar(shared.clone());

        // Bus drain: coalesces dock-change notifications into refreshes
        let dispatch_builder = builder.clone();
        let dispatch_block = RcBlock::new(move |_timer: id| {
            dispatch_events(&dispatch_builder);
        });
        let _: id = msg_send![
            get_class("NSTimer"),
            scheduledTimerWithTimeInterval: DISPATCH_INTERVAL_SECS,
            repeats: YES,
            block: &*dispatch_block
        ];

        // Trust poll: prompt once, then re-check silently. Setup is
        // idempotent, so polling an already-satisfied state is a no-op.
        check_trust_and_setup(&shared, &builder);
        let poll_shared = shared.clone();
        let poll_builder = builder.clone();
        let trust_block = RcBlock::new(move |_timer: id| {
            check_trust_and_setup(&poll_shared, &poll_builder);
        });
        let _: id = msg_send![
            get_class("NSTimer"),
            scheduledTimerWithTimeInterval: TRUST_POLL_SECS,
            repeats: YES,
            block: &*trust_block
        ];

        info!("dockhide running");
        let _: () = msg_send![app, run];
    });
}

/// Re-check the accessibility trust precondition and, once granted, bring
/// up the event tap and the first dock snapshot. Safe to call repeatedly.
fn check_trust_and_setup(shared: &Arc<SharedState>, builder: &Arc<DockIndexBuilder>) {
    static PROMPTED: AtomicBool = AtomicBool::new(false);

    // Only the very first check may show the system authorization dialog.
    let prompt = !PROMPTED.swap(true, Ordering::SeqCst);
    let trusted = unsafe { is_process_trusted(prompt) };

    if !trusted {
        if prompt {
            info!("accessibility permission prompt requested");
        }
        return;
    }

    if shared.set_trusted(true) {
        info!("accessibility trust established");
        publish(AppEvent::TrustGranted);
    }

    if !event_tap::is_installed() {
        if let Err(err) = unsafe { event_tap::install(shared.clone()) } {
            warn!(error = %err, "event tap installation failed; will retry");
        }
    }

    if shared.snapshot.load().is_empty() {
        builder.request_refresh();
    }
}
