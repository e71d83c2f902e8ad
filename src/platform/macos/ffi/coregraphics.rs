//! FFI bindings for CoreGraphics event taps and CoreFoundation utilities.
//!
//! The `core-graphics` crate supplies the event-type and tap-location
//! enums; the tap installation entry points themselves are declared here.

#![allow(non_upper_case_globals)]
#![allow(non_snake_case)]

use std::ffi::c_void;

use core_graphics::event::CGEventType;
use core_graphics::geometry::CGPoint;

/// Opaque CGEventRef. Null means "swallow the event".
pub type CGEventRef = *mut c_void;

/// Opaque CFMachPortRef returned by `CGEventTapCreate`.
pub type CFMachPortRef = *mut c_void;

/// Event tap callback signature.
pub type CGEventTapCallBack = extern "C" fn(
    proxy: *mut c_void,
    event_type: CGEventType,
    event: CGEventRef,
    user_info: *mut c_void,
) -> CGEventRef;

// CGEventTapLocation: kCGHIDEventTap = 0
pub const kCGHIDEventTap: u32 = 0;

// CGEventTapPlacement: append after existing filters, like the dock's own
pub const kCGTailAppendEventTap: u32 = 1;

// CGEventTapOptions: an active (filtering) tap
pub const kCGEventTapOptionDefault: u32 = 0;

// === FFI Declarations - CoreGraphics ===

#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {
    pub fn CGEventTapCreate(
        tap: u32,
        place: u32,
        options: u32,
        events_of_interest: u64,
        callback: CGEventTapCallBack,
        user_info: *mut c_void,
    ) -> CFMachPortRef;

    pub fn CGEventTapEnable(tap: CFMachPortRef, enable: bool);

    pub fn CGEventGetLocation(event: CGEventRef) -> CGPoint;
}

// === FFI Declarations - CoreFoundation ===

#[link(name = "CoreFoundation", kind = "framework")]
extern "C" {
    pub fn CFRelease(obj: *const c_void);

    pub fn CFMachPortCreateRunLoopSource(
        allocator: *const c_void,
        port: CFMachPortRef,
        order: i64,
    ) -> *mut c_void;

    pub fn CFRunLoopGetCurrent() -> *mut c_void;

    pub fn CFRunLoopAddSource(rl: *mut c_void, source: *mut c_void, mode: *const c_void);

    pub fn CFDictionaryCreate(
        allocator: *const c_void,
        keys: *const *const c_void,
        values: *const *const c_void,
        numValues: isize,
        keyCallBacks: *const c_void,
        valueCallBacks: *const c_void,
    ) -> *const c_void;

    pub static kCFBooleanTrue: *const c_void;
    pub static kCFTypeDictionaryKeyCallBacks: *const c_void;
    pub static kCFTypeDictionaryValueCallBacks: *const c_void;
    pub static kCFRunLoopCommonModes: *const c_void;
}
