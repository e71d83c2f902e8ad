//! Workspace notification observers.
//!
//! The dock layout shifts whenever applications launch, terminate, or
//! activate, and whenever the active Space changes. Each of those
//! notifications publishes a [`AppEvent::DockChanged`] onto the bus; the
//! main-loop dispatcher turns them into (debounced) index refreshes.

use block2::RcBlock;

use crate::events::{publish, AppEvent};

use super::ffi::bridge::{get_class, id, msg_send, nil};

/// Install observers for every workspace event that can move dock icons.
///
/// # Safety
/// Must be called from the main thread with a valid autorelease pool.
pub unsafe fn install_workspace_observers() {
    let ws: id = msg_send![get_class("NSWorkspace"), sharedWorkspace];
    let nc: id = msg_send![ws, notificationCenter];

    // Helper to add an observer for a given notification name (C string)
    let add_obs = |name_cstr: &std::ffi::CStr| {
        let name: id = msg_send![get_class("NSString"), stringWithUTF8String: name_cstr.as_ptr()];
        let block = RcBlock::new(move |_note: id| {
            publish(AppEvent::DockChanged);
        });
        let _: id =
            msg_send![nc, addObserverForName: name, object: nil, queue: nil, usingBlock: &*block];
    };

    add_obs(c"NSWorkspaceDidLaunchApplicationNotification");
    add_obs(c"NSWorkspaceDidActivateApplicationNotification");
    add_obs(c"NSWorkspaceDidTerminateApplicationNotification");
    add_obs(c"NSWorkspaceActiveSpaceDidChangeNotification");
}
