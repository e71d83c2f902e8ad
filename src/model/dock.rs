//! Dock item model (pure Rust, no FFI).
//!
//! A [`DockSnapshot`] is the engine's spatial index: the bounding boxes and
//! labels of every dock icon, rebuilt wholesale by the index builder and
//! published atomically. Items are immutable once constructed.

use super::geometry::{Point, Rect};

/// One icon in the dock: its bounding box in global screen coordinates and
/// its display label. The label is empty for separators and spacer tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct DockItem {
    pub rect: Rect,
    pub label: String,
}

impl DockItem {
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        Self {
            rect,
            label: label.into(),
        }
    }
}

/// An ordered collection of dock items, in accessibility traversal order.
///
/// Lookup returns the first containing item; ties among overlapping
/// rectangles are deliberately broken by traversal order, which reproduces
/// the dock's own left-to-right icon layering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DockSnapshot {
    items: Vec<DockItem>,
}

impl DockSnapshot {
    pub fn new(items: Vec<DockItem>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// First item whose rectangle contains `point`, in traversal order.
    pub fn item_at(&self, point: Point) -> Option<&DockItem> {
        self.items.iter().find(|item| item.rect.contains(point))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DockItem> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(x: f64, label: &str) -> DockItem {
        DockItem::new(Rect::new(x, 0.0, 50.0, 50.0), label)
    }

    #[test]
    fn item_at_finds_containing_item() {
        let snapshot = DockSnapshot::new(vec![item(0.0, "Finder"), item(60.0, "Notes")]);
        assert_eq!(
            snapshot.item_at(Point::new(80.0, 10.0)).map(|i| i.label.as_str()),
            Some("Notes")
        );
    }

    #[test]
    fn item_at_returns_none_when_nothing_contains() {
        let snapshot = DockSnapshot::new(vec![item(0.0, "Finder")]);
        assert!(snapshot.item_at(Point::new(500.0, 500.0)).is_none());
    }

    #[test]
    fn overlapping_items_resolve_in_traversal_order() {
        // Two rectangles covering the same point: the first one wins.
        let snapshot = DockSnapshot::new(vec![
            DockItem::new(Rect::new(0.0, 0.0, 100.0, 50.0), "First"),
            DockItem::new(Rect::new(50.0, 0.0, 100.0, 50.0), "Second"),
        ]);
        assert_eq!(
            snapshot.item_at(Point::new(75.0, 25.0)).map(|i| i.label.as_str()),
            Some("First")
        );
    }

    #[test]
    fn empty_snapshot_has_no_items() {
        let snapshot = DockSnapshot::empty();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
        assert!(snapshot.item_at(Point::new(0.0, 0.0)).is_none());
    }
}
