//! Global event interception loop.
//!
//! A CGEventTap appended at the tail of the HID event stream receives every
//! left-mouse-down before the dock does. The callback runs on the
//! privileged event-dispatch path: it reads only the published snapshot,
//! the atomic flags, and a fresh workspace query, runs the pure matcher,
//! and either swallows the event (returning null) or forwards it untouched.
//!
//! Installation fails while the process is untrusted; callers retry on the
//! periodic trust check.

use std::ffi::c_void;
use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};
use std::sync::Arc;

use core_graphics::event::CGEventType;
use thiserror::Error;
use tracing::info;

use crate::model::geometry::Point;
use crate::model::matcher::{decide, Decision};
use crate::model::running_app::RunningApp;
use crate::state::SharedState;

use super::ffi::coregraphics::{
    kCFRunLoopCommonModes, kCGEventTapOptionDefault, kCGHIDEventTap, kCGTailAppendEventTap,
    CFMachPortCreateRunLoopSource, CFRelease, CFRunLoopAddSource, CFRunLoopGetCurrent,
    CGEventGetLocation, CGEventRef, CGEventTapCreate, CGEventTapEnable,
};
use super::workspace;

/// The live tap's mach port. Needed by the callback to re-enable the tap
/// after an OS-side disable.
static TAP_PORT: AtomicPtr<c_void> = AtomicPtr::new(ptr::null_mut());

#[derive(Debug, Error)]
pub enum TapError {
    #[error("event tap creation failed (accessibility permission not granted?)")]
    CreateFailed,
    #[error("run loop source creation failed")]
    SourceFailed,
}

/// Is the interception loop currently installed?
pub fn is_installed() -> bool {
    !TAP_PORT.load(Ordering::SeqCst).is_null()
}

/// Install the global left-mouse-down tap on the current run loop.
///
/// Idempotent: a no-op once installed.
///
/// # Safety
/// Must be called from the thread that will run the event loop.
pub unsafe fn install(shared: Arc<SharedState>) -> Result<(), TapError> {
    if is_installed() {
        return Ok(());
    }

    let mask = 1u64 << (CGEventType::LeftMouseDown as u64);
    let user_info = Arc::into_raw(shared) as *mut c_void;

    let tap = CGEventTapCreate(
        kCGHIDEventTap,
        kCGTailAppendEventTap,
        kCGEventTapOptionDefault,
        mask,
        tap_callback,
        user_info,
    );
    if tap.is_null() {
        // Reclaim the context reference; the callback will never run.
        drop(Arc::from_raw(user_info as *const SharedState));
        return Err(TapError::CreateFailed);
    }

    let source = CFMachPortCreateRunLoopSource(ptr::null(), tap, 0);
    if source.is_null() {
        CGEventTapEnable(tap, false);
        CFRelease(tap as *const c_void);
        drop(Arc::from_raw(user_info as *const SharedState));
        return Err(TapError::SourceFailed);
    }

    CFRunLoopAddSource(CFRunLoopGetCurrent(), source, kCFRunLoopCommonModes);
    CGEventTapEnable(tap, true);
    TAP_PORT.store(tap, Ordering::SeqCst);
    info!("event tap installed");
    Ok(())
}

extern "C" fn tap_callback(
    _proxy: *mut c_void,
    event_type: CGEventType,
    event: CGEventRef,
    user_info: *mut c_void,
) -> CGEventRef {
    // The OS disables a tap that is slow (timeout) or on secure input;
    // re-arm and forward.
    if matches!(
        event_type,
        CGEventType::TapDisabledByTimeout | CGEventType::TapDisabledByUserInput
    ) {
        let port = TAP_PORT.load(Ordering::SeqCst);
        if !port.is_null() {
            unsafe { CGEventTapEnable(port, true) };
        }
        return event;
    }
    if !matches!(event_type, CGEventType::LeftMouseDown) {
        return event;
    }

    let shared = unsafe { &*(user_info as *const SharedState) };

    let enabled = shared.feature.get();
    if !enabled {
        return event;
    }
    let fullscreen = unsafe { workspace::active_app_fullscreen() };
    if fullscreen {
        return event;
    }

    let location = unsafe { CGEventGetLocation(event) };
    let point = Point::new(location.x, location.y);

    let snapshot = shared.snapshot.load();
    // Spatial reject before the directory query: most clicks are nowhere
    // near the dock.
    if snapshot.item_at(point).is_none() {
        return event;
    }

    let apps = unsafe { workspace::running_applications() };
    let records: Vec<RunningApp> = apps.iter().map(|a| a.info.clone()).collect();

    match decide(point, &snapshot, &records, enabled, fullscreen) {
        Decision::Intercept(idx) => {
            info!(app = %records[idx].display_name, "hiding frontmost app");
            apps[idx].hide();
            ptr::null_mut()
        }
        Decision::PassThrough => event,
    }
}
