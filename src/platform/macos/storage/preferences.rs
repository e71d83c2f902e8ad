//! Persistence of the feature flag to NSUserDefaults.

use crate::model::constants::PREF_CLICK_TO_HIDE;

use super::super::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id, NO, YES};

/// Reads a bool from NSUserDefaults, returns default if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_bool(key: &str, default: bool) -> bool {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(key);
    let obj: id = msg_send![ud, objectForKey: k];
    if obj == nil {
        default
    } else {
        msg_send![ud, boolForKey: k]
    }
}

/// Saves a bool to NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_set_bool(key: &str, val: bool) {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(key);
    let v = if val { YES } else { NO };
    let _: () = msg_send![ud, setBool: v, forKey: k];
}

/// Load the click-to-hide flag, seeding the default (enabled) on first run
/// so later reads are unambiguous. Idempotent.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn load_feature_enabled() -> bool {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(PREF_CLICK_TO_HIDE);
    let obj: id = msg_send![ud, objectForKey: k];
    if obj == nil {
        let _: () = msg_send![ud, setBool: YES, forKey: k];
        return true;
    }
    msg_send![ud, boolForKey: k]
}

/// Persist the click-to-hide flag. Called on every change.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn save_feature_enabled(enabled: bool) {
    prefs_set_bool(PREF_CLICK_TO_HIDE, enabled);
}
