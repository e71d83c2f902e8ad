//! Dynamic-messaging bridge over the objc2 runtime.
//!
//! Type aliases and small helpers so the rest of the backend can use
//! `msg_send!` with untyped object pointers where a fully typed objc2
//! binding would be overkill (one-shot AppKit calls, dynamically registered
//! classes).

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

pub use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
pub use objc2::{class, msg_send, sel};

use objc2::encode::Encode;
use objc2::rc::Retained;
use objc2_app_kit::NSApplication;
use objc2_foundation::NSString;

/// Objective-C object pointer.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C BOOL constants (u8-backed, not Rust bool).
pub const YES: Bool = Bool::YES;
pub const NO: Bool = Bool::NO;

/// The shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

/// Create an NSString and return it as a raw id pointer.
///
/// The returned pointer is retained; for app-lifetime strings (menu titles,
/// preference keys) that is exactly what we want.
#[inline]
pub fn nsstring_id(s: &str) -> id {
    let ns = NSString::from_str(s);
    Retained::into_raw(ns) as id
}

/// Look up a class by name, panicking if not found.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = std::ffi::CString::new(name).expect("invalid class name");
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("class '{}' not found", name))
}

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}

/// Extension trait for accessing instance variables on `AnyObject`.
pub trait ObjectExt {
    /// Load an instance variable.
    ///
    /// # Safety
    /// The ivar must exist and be of type T.
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T;

    /// Store a value in an instance variable.
    ///
    /// # Safety
    /// The ivar must exist and be of type T.
    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T {
        let cls = self.class();
        let c_name = std::ffi::CString::new(name).unwrap();
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        ivar.load::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T) {
        let cls = self.class();
        let c_name = std::ffi::CString::new(name).unwrap();
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        *ivar.load_mut::<T>(self) = value;
    }
}
