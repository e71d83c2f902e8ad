//! Status bar (menu bar) item with dropdown menu.
//!
//! The app runs as a menu-bar accessory; this is its whole UI surface:
//! - Click to Hide (checkable toggle, wired to the feature flag)
//! - Accessibility / Automation privacy-pane shortcuts
//! - Quit

use std::ffi::c_void;
use std::sync::Arc;

use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};
use objc2::sel;

use crate::events::{publish, AppEvent};
use crate::state::SharedState;

use super::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id, ObjectExt};
use super::storage;

/// Global references so the status item and the menu target outlive the
/// installing scope (NSMenuItem targets are not retained by AppKit).
static mut STATUS_ITEM: id = std::ptr::null_mut();
static mut MENU_TARGET: id = std::ptr::null_mut();

/// Install the status bar item with its menu.
///
/// # Safety
/// Must be called from main thread, after the app is initialized.
pub unsafe fn install_status_bar(shared: Arc<SharedState>) {
    let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];

    // NSVariableStatusItemLength = -1.0
    let status_item: id = msg_send![status_bar, statusItemWithLength: -1.0f64];

    // Keep a strong reference so it doesn't get deallocated
    let _: id = msg_send![status_item, retain];
    STATUS_ITEM = status_item;

    let button: id = msg_send![status_item, button];
    if button != nil {
        let _: () = msg_send![button, setTitle: nsstring_id("⬓")];
    }

    let target = create_menu_target(shared);
    MENU_TARGET = target;

    let menu = create_status_menu(target);
    let _: () = msg_send![status_item, setMenu: menu];
}

/// Register (once) and instantiate the menu action target, parking the
/// shared-state pointer in an ivar.
unsafe fn create_menu_target(shared: Arc<SharedState>) -> id {
    let class_name = c"DockhideMenuTarget";
    let cls = if let Some(cls) = AnyClass::get(class_name) {
        cls
    } else {
        let superclass = AnyClass::get(c"NSObject").unwrap();
        let mut builder = ClassBuilder::new(class_name, superclass).unwrap();

        builder.add_ivar::<*mut c_void>(c"_shared");

        builder.add_method(
            sel!(toggleClickToHide:),
            toggle_click_to_hide as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.add_method(
            sel!(openAccessibilityPrefs:),
            open_accessibility_prefs as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.add_method(
            sel!(openAutomationPrefs:),
            open_automation_prefs as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.add_method(
            sel!(statusBarQuit:),
            status_bar_quit as unsafe extern "C-unwind" fn(_, _, _),
        );

        builder.register()
    };

    let target: id = msg_send![cls, new];
    (*target).store_ivar::<*mut c_void>("_shared", Arc::into_raw(shared) as *mut c_void);
    target
}

/// Create the dropdown menu for the status bar item.
unsafe fn create_status_menu(target: id) -> id {
    let menu: id = msg_send![get_class("NSMenu"), alloc];
    let menu: id = msg_send![menu, init];

    // Toggle item with a checkmark reflecting the flag
    let toggle_item: id = msg_send![get_class("NSMenuItem"), alloc];
    let toggle_item: id = msg_send![
        toggle_item,
        initWithTitle: nsstring_id("Click to Hide"),
        action: sel!(toggleClickToHide:),
        keyEquivalent: nsstring_id("")
    ];
    let _: () = msg_send![toggle_item, setTarget: target];
    let enabled = shared_from(&*target).feature.get();
    let state: i64 = if enabled { 1 } else { 0 };
    let _: () = msg_send![toggle_item, setState: state];
    let _: () = msg_send![menu, addItem: toggle_item];

    let separator: id = msg_send![get_class("NSMenuItem"), separatorItem];
    let _: () = msg_send![menu, addItem: separator];

    let acc_item: id = msg_send![get_class("NSMenuItem"), alloc];
    let acc_item: id = msg_send![
        acc_item,
        initWithTitle: nsstring_id("Accessibility Settings…"),
        action: sel!(openAccessibilityPrefs:),
        keyEquivalent: nsstring_id("")
    ];
    let _: () = msg_send![acc_item, setTarget: target];
    let _: () = msg_send![menu, addItem: acc_item];

    let auto_item: id = msg_send![get_class("NSMenuItem"), alloc];
    let auto_item: id = msg_send![
        auto_item,
        initWithTitle: nsstring_id("Automation Settings…"),
        action: sel!(openAutomationPrefs:),
        keyEquivalent: nsstring_id("")
    ];
    let _: () = msg_send![auto_item, setTarget: target];
    let _: () = msg_send![menu, addItem: auto_item];

    let separator2: id = msg_send![get_class("NSMenuItem"), separatorItem];
    let _: () = msg_send![menu, addItem: separator2];

    let quit_item: id = msg_send![get_class("NSMenuItem"), alloc];
    let quit_item: id = msg_send![
        quit_item,
        initWithTitle: nsstring_id("Quit"),
        action: sel!(statusBarQuit:),
        keyEquivalent: nsstring_id("")
    ];
    let _: () = msg_send![quit_item, setTarget: target];
    let _: () = msg_send![menu, addItem: quit_item];

    menu
}

unsafe fn shared_from(this: &AnyObject) -> &SharedState {
    let ptr = *this.load_ivar::<*mut c_void>("_shared") as *const SharedState;
    &*ptr
}

unsafe extern "C-unwind" fn toggle_click_to_hide(this: &mut AnyObject, _cmd: Sel, sender: id) {
    unsafe {
        let shared = shared_from(this);
        let enabled = !shared.feature.get();
        // In-memory first, then write-through, then notify.
        shared.feature.set(enabled);
        storage::save_feature_enabled(enabled);

        let state: i64 = if enabled { 1 } else { 0 };
        let _: () = msg_send![sender, setState: state];

        publish(AppEvent::FeatureToggled(enabled));
    }
}

unsafe extern "C-unwind" fn open_accessibility_prefs(
    _this: &mut AnyObject,
    _cmd: Sel,
    _sender: id,
) {
    unsafe {
        open_prefs_pane("x-apple.systempreferences:com.apple.preference.security?Privacy_Accessibility");
    }
}

unsafe extern "C-unwind" fn open_automation_prefs(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    unsafe {
        open_prefs_pane("x-apple.systempreferences:com.apple.preference.security?Privacy_Automation");
    }
}

unsafe extern "C-unwind" fn status_bar_quit(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    unsafe {
        let app: id = msg_send![get_class("NSApplication"), sharedApplication];
        let _: () = msg_send![app, terminate: nil];
    }
}

unsafe fn open_prefs_pane(url: &str) {
    let url_obj: id = msg_send![get_class("NSURL"), URLWithString: nsstring_id(url)];
    if url_obj == nil {
        return;
    }
    let workspace: id = msg_send![get_class("NSWorkspace"), sharedWorkspace];
    let _: bool = msg_send![workspace, openURL: url_obj];
}
