//! The click matcher: the pure decision core of the engine.
//!
//! Given a click location, the current dock snapshot and a fresh view of the
//! running applications, [`decide`] determines whether the click should be
//! swallowed and which application should be hidden. Everything here is pure
//! so the whole decision table is testable without macOS.

use super::constants::{BUNDLE_ALIASES, SYSTEM_ITEMS};
use super::dock::DockSnapshot;
use super::geometry::Point;
use super::running_app::RunningApp;

/// Outcome of a matching decision.
///
/// `Intercept` carries the index of the application to hide within the
/// running-application slice passed to [`decide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Forward the event untouched; the dock handles the click natively.
    PassThrough,
    /// Swallow the event and hide the application at this index.
    Intercept(usize),
}

/// Decide whether a click at `point` should be intercepted.
///
/// The rules, in order:
/// 1. Feature disabled or active window fullscreen → pass through.
/// 2. No dock item under the click → pass through.
/// 3. Non-application dock regions (and unlabeled items) → pass through.
/// 4. Label resolves to no running application → pass through.
/// 5. Resolved application not active, or already hidden → pass through
///    (clicking a background app's icon must keep its native
///    bring-to-front behavior).
/// 6. Otherwise intercept and hide.
pub fn decide(
    point: Point,
    snapshot: &DockSnapshot,
    apps: &[RunningApp],
    feature_enabled: bool,
    fullscreen: bool,
) -> Decision {
    if !feature_enabled || fullscreen {
        return Decision::PassThrough;
    }

    let item = match snapshot.item_at(point) {
        Some(item) => item,
        None => return Decision::PassThrough,
    };

    if item.label.is_empty() || is_system_item(&item.label) {
        return Decision::PassThrough;
    }

    let idx = match resolve_app(&item.label, apps) {
        Some(idx) => idx,
        None => return Decision::PassThrough,
    };

    let app = &apps[idx];
    if !app.is_active || app.is_hidden {
        return Decision::PassThrough;
    }

    Decision::Intercept(idx)
}

/// Is this label a known non-application dock affordance?
pub fn is_system_item(label: &str) -> bool {
    SYSTEM_ITEMS.iter().any(|s| *s == label)
}

/// Resolve a dock label to a running application.
///
/// Rules are tried in precedence order, each scanned across the whole list,
/// so an exact match anywhere beats a substring match anywhere:
/// 1. exact display-name equality
/// 2. case-insensitive display-name equality
/// 3. exact bundle-identifier equality
/// 4. the fixed label/bundle-identifier alias table
/// 5. substring containment in either direction
///    (covers labels like "Terminal — zsh" vs the app name "Terminal")
pub fn resolve_app(label: &str, apps: &[RunningApp]) -> Option<usize> {
    if let Some(idx) = apps.iter().position(|a| a.display_name == label) {
        return Some(idx);
    }

    let label_lower = label.to_lowercase();
    if let Some(idx) = apps
        .iter()
        .position(|a| a.display_name.to_lowercase() == label_lower)
    {
        return Some(idx);
    }

    if let Some(idx) = apps
        .iter()
        .position(|a| !a.bundle_id.is_empty() && a.bundle_id == label)
    {
        return Some(idx);
    }

    if let Some((_, bundle_id)) = BUNDLE_ALIASES.iter().find(|(name, _)| *name == label) {
        if let Some(idx) = apps.iter().position(|a| a.bundle_id == *bundle_id) {
            return Some(idx);
        }
    }

    apps.iter().position(|a| {
        !a.display_name.is_empty()
            && (a.display_name.contains(label) || label.contains(&a.display_name))
    })
}
