//! Workspace directory: running applications, dock lookup, hide.
//!
//! A thin querying layer over `NSWorkspace`. Each query returns fresh
//! records; nothing here is cached. Unreadable records are skipped rather
//! than failing the whole query.

use std::ffi::{c_char, CStr};

use crate::model::constants::DOCK_BUNDLE_ID;
use crate::model::running_app::RunningApp;

use super::ffi::bridge::{get_class, id, msg_send, nil, NSApp};

/// A running application: the pure record used for matching plus the
/// retained `NSRunningApplication` the hide call goes to.
pub struct AppHandle {
    pub info: RunningApp,
    obj: id,
}

impl AppHandle {
    /// Ask the platform to hide this application's windows. Fire-and-forget.
    pub fn hide(&self) {
        unsafe {
            let _: bool = msg_send![self.obj, hide];
        }
    }

    pub fn pid(&self) -> i32 {
        unsafe { msg_send![self.obj, processIdentifier] }
    }
}

impl Drop for AppHandle {
    fn drop(&mut self) {
        unsafe {
            let _: () = msg_send![self.obj, release];
        }
    }
}

/// Read an NSString into an owned Rust string.
///
/// # Safety
/// `s` must be nil or a valid NSString.
unsafe fn nsstring_to_string(s: id) -> Option<String> {
    if s == nil {
        return None;
    }
    let bytes: *const c_char = msg_send![s, UTF8String];
    if bytes.is_null() {
        return None;
    }
    Some(CStr::from_ptr(bytes).to_string_lossy().into_owned())
}

/// Snapshot the current set of running applications.
///
/// Applications without a readable display name cannot participate in
/// matching and are dropped; a missing bundle identifier is kept as empty.
///
/// # Safety
/// Must be called with a valid autorelease pool.
pub unsafe fn running_applications() -> Vec<AppHandle> {
    let workspace: id = msg_send![get_class("NSWorkspace"), sharedWorkspace];
    if workspace == nil {
        return Vec::new();
    }
    let apps: id = msg_send![workspace, runningApplications];
    if apps == nil {
        return Vec::new();
    }

    let count: usize = msg_send![apps, count];
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let app: id = msg_send![apps, objectAtIndex: i];
        if app == nil {
            continue;
        }

        let name_obj: id = msg_send![app, localizedName];
        let display_name = match nsstring_to_string(name_obj) {
            Some(name) => name,
            None => continue,
        };
        let bundle_obj: id = msg_send![app, bundleIdentifier];
        let bundle_id = nsstring_to_string(bundle_obj).unwrap_or_default();
        let is_active: bool = msg_send![app, isActive];
        let is_hidden: bool = msg_send![app, isHidden];

        let _: id = msg_send![app, retain];
        out.push(AppHandle {
            info: RunningApp {
                display_name,
                bundle_id,
                is_active,
                is_hidden,
            },
            obj: app,
        });
    }
    out
}

/// Pid of the process presenting the Dock, or `None` if it is not running.
///
/// # Safety
/// Must be called with a valid autorelease pool.
pub unsafe fn dock_pid() -> Option<i32> {
    running_applications()
        .iter()
        .find(|a| a.info.bundle_id == DOCK_BUNDLE_ID)
        .map(|a| a.pid())
}

/// Is a fullscreen-styled key window currently visible?
///
/// Fullscreen foreground windows keep their native dock-click semantics, so
/// the matcher passes everything through while this holds.
///
/// # Safety
/// Must be called with a valid autorelease pool.
pub unsafe fn active_app_fullscreen() -> bool {
    let app = NSApp();
    let windows: id = msg_send![app, windows];
    if windows == nil {
        return false;
    }
    let count: usize = msg_send![windows, count];
    for i in 0..count {
        let window: id = msg_send![windows, objectAtIndex: i];
        if window == nil {
            continue;
        }
        let visible: bool = msg_send![window, isVisible];
        let key: bool = msg_send![window, isKeyWindow];
        if !visible || !key {
            continue;
        }
        // NSWindowStyleMaskFullSizeContentView = 1 << 15
        let mask: u64 = msg_send![window, styleMask];
        if mask & (1 << 15) != 0 {
            return true;
        }
    }
    false
}
