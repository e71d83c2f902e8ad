//! FFI bindings for ApplicationServices (Accessibility).
//!
//! This module provides the TCC trust-check API and the AXUIElement query
//! primitives used by the dock tree walker.

#![allow(non_upper_case_globals)]

use std::ffi::c_void;

use super::coregraphics::{
    kCFBooleanTrue, kCFTypeDictionaryKeyCallBacks, kCFTypeDictionaryValueCallBacks,
    CFDictionaryCreate, CFRelease,
};

/// Opaque AXUIElementRef.
pub type AXUIElementRef = *const c_void;

/// AXError code for success.
pub const kAXErrorSuccess: i32 = 0;

/// AXValue wrapped-type tag for CGPoint.
pub const kAXValueCGPointType: i32 = 1;

/// AXValue wrapped-type tag for CGSize.
pub const kAXValueCGSizeType: i32 = 2;

// === FFI Declarations ===

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    pub fn AXIsProcessTrusted() -> bool;

    pub fn AXIsProcessTrustedWithOptions(options: *const c_void) -> bool;

    pub static kAXTrustedCheckOptionPrompt: *const c_void;

    pub fn AXUIElementCreateApplication(pid: i32) -> AXUIElementRef;

    pub fn AXUIElementCopyAttributeValue(
        element: AXUIElementRef,
        attribute: *const c_void,
        value: *mut *const c_void,
    ) -> i32;

    pub fn AXValueGetValue(
        value: *const c_void,
        the_type: i32,
        value_ptr: *mut c_void,
    ) -> bool;
}

/// Check trust, optionally asking the OS to show its authorization dialog.
///
/// # Safety
/// Must be called with a valid autorelease pool.
pub unsafe fn is_process_trusted(prompt: bool) -> bool {
    if !prompt {
        return AXIsProcessTrusted();
    }

    // CFDictionary with kAXTrustedCheckOptionPrompt = true
    let keys = [kAXTrustedCheckOptionPrompt];
    let values = [kCFBooleanTrue];

    let dict = CFDictionaryCreate(
        std::ptr::null(), // default allocator
        keys.as_ptr() as *const _,
        values.as_ptr() as *const _,
        1, // one key-value pair
        kCFTypeDictionaryKeyCallBacks,
        kCFTypeDictionaryValueCallBacks,
    );

    let trusted = AXIsProcessTrustedWithOptions(dict);

    if !dict.is_null() {
        CFRelease(dict);
    }
    trusted
}
