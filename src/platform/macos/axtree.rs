//! Accessibility tree walker for the Dock process.
//!
//! Extracts the bounding box and label of every dock icon by walking the
//! dock's accessibility tree: `AXList` containers are collected depth-first
//! (bounded depth), then each list's `AXDockItem` children are read.
//!
//! All queries are inter-process and may block; callers run this off any
//! latency-sensitive thread. A missing attribute is never an error; the
//! element is skipped, which is routine during dock animation.

use std::ffi::c_void;

use core_foundation::array::{CFArrayGetCount, CFArrayGetValueAtIndex};
use core_foundation::base::{CFRelease, CFRetain, CFTypeRef, TCFType};
use core_foundation::string::CFString;
use core_graphics::geometry::{CGPoint, CGSize};

use crate::model::constants::MAX_TREE_DEPTH;
use crate::model::dock::DockItem;
use crate::model::geometry::Rect;

use super::ffi::accessibility::{
    kAXErrorSuccess, kAXValueCGPointType, kAXValueCGSizeType, AXUIElementCopyAttributeValue,
    AXUIElementCreateApplication, AXValueGetValue,
};

const ROLE_LIST: &str = "AXList";
const ROLE_DOCK_ITEM: &str = "AXDockItem";

/// RAII wrapper for a retained accessibility element (or any CFTypeRef).
struct Element(CFTypeRef);

impl Element {
    /// Root element of an application's accessibility tree.
    fn application(pid: i32) -> Option<Element> {
        let ptr = unsafe { AXUIElementCreateApplication(pid) };
        if ptr.is_null() {
            None
        } else {
            Some(Element(ptr))
        }
    }

    /// Copy an attribute value. `None` when the attribute is absent or the
    /// query fails.
    fn attribute(&self, name: &str) -> Option<Element> {
        let attr = CFString::new(name);
        let mut value: CFTypeRef = std::ptr::null();
        let err = unsafe {
            AXUIElementCopyAttributeValue(self.0, attr.as_CFTypeRef() as *const _, &mut value)
        };
        if err != kAXErrorSuccess || value.is_null() {
            None
        } else {
            Some(Element(value))
        }
    }

    fn string_attribute(&self, name: &str) -> Option<String> {
        let handle = self.attribute(name)?;
        // Ownership of the CFString moves into the wrapper.
        let s = unsafe { CFString::wrap_under_create_rule(handle.0 as _) };
        std::mem::forget(handle);
        Some(s.to_string())
    }

    fn role(&self) -> Option<String> {
        self.string_attribute("AXRole")
    }

    fn title(&self) -> Option<String> {
        self.string_attribute("AXTitle")
    }

    fn position(&self) -> Option<(f64, f64)> {
        let value = self.attribute("AXPosition")?;
        let mut point = CGPoint::new(0.0, 0.0);
        let ok = unsafe {
            AXValueGetValue(
                value.0,
                kAXValueCGPointType,
                &mut point as *mut _ as *mut c_void,
            )
        };
        ok.then_some((point.x, point.y))
    }

    fn size(&self) -> Option<(f64, f64)> {
        let value = self.attribute("AXSize")?;
        let mut size = CGSize::new(0.0, 0.0);
        let ok = unsafe {
            AXValueGetValue(
                value.0,
                kAXValueCGSizeType,
                &mut size as *mut _ as *mut c_void,
            )
        };
        ok.then_some((size.width, size.height))
    }

    /// Retained copies of the element's children, in platform order.
    fn children(&self) -> Vec<Element> {
        let array = match self.attribute("AXChildren") {
            Some(a) => a,
            None => return Vec::new(),
        };

        let count = unsafe { CFArrayGetCount(array.0 as _) };
        let mut out = Vec::with_capacity(count.max(0) as usize);
        for i in 0..count {
            let child = unsafe { CFArrayGetValueAtIndex(array.0 as _, i) };
            if child.is_null() {
                continue;
            }
            unsafe { CFRetain(child) };
            out.push(Element(child));
        }
        out
    }
}

impl Drop for Element {
    fn drop(&mut self) {
        if !self.0.is_null() {
            unsafe { CFRelease(self.0) };
        }
    }
}

/// Walk the dock process's accessibility tree and return every dock item's
/// rectangle and label, in traversal order.
///
/// Returns an empty vector when the process cannot be queried or the tree
/// yields no matches; that is not an error.
pub fn dock_items(dock_pid: i32) -> Vec<DockItem> {
    let root = match Element::application(dock_pid) {
        Some(root) => root,
        None => return Vec::new(),
    };

    let mut lists = Vec::new();
    collect_lists(root, 0, &mut lists);

    let mut items = Vec::new();
    for list in &lists {
        for icon in list.children() {
            if icon.role().as_deref() != Some(ROLE_DOCK_ITEM) {
                continue;
            }
            // Position, size and title must all be readable; transient
            // animation states routinely drop one of them.
            let (Some((x, y)), Some((w, h)), Some(label)) =
                (icon.position(), icon.size(), icon.title())
            else {
                continue;
            };
            items.push(DockItem::new(Rect::new(x, y, w, h), label));
        }
    }
    items
}

/// Depth-first collection of `AXList` elements, bounded by
/// [`MAX_TREE_DEPTH`]. Lists are collected, everything else is descended
/// into.
fn collect_lists(element: Element, depth: usize, lists: &mut Vec<Element>) {
    if depth > MAX_TREE_DEPTH {
        return;
    }
    if element.role().as_deref() == Some(ROLE_LIST) {
        lists.push(element);
        return;
    }
    for child in element.children() {
        collect_lists(child, depth + 1, lists);
    }
}
