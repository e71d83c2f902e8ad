//! Configuration constants and fixed tables.
//!
//! This module contains the tunables of the engine (debounce window, trust
//! poll cadence, traversal depth) together with the fixed tables the matcher
//! consults: the non-application dock regions and the display-name to
//! bundle-identifier alias table.

// === Preferences (NSUserDefaults keys) ===

/// Key for the click-to-hide feature flag.
pub const PREF_CLICK_TO_HIDE: &str = "ClickToHideEnabled";

// === Timing ===

/// Debounce window for dock snapshot rebuilds, in milliseconds.
pub const REFRESH_DEBOUNCE_MS: u64 = 500;

/// Accessibility trust re-check interval, in seconds.
pub const TRUST_POLL_SECS: f64 = 5.0;

/// Event-bus drain interval for the main-loop dispatcher, in seconds.
pub const DISPATCH_INTERVAL_SECS: f64 = 0.25;

// === Accessibility tree traversal ===

/// Hard ceiling on tree recursion depth. Protects against malformed or
/// cyclic accessibility trees returned by a misbehaving host.
pub const MAX_TREE_DEPTH: usize = 4;

/// Bundle identifier of the process presenting the Dock.
pub const DOCK_BUNDLE_ID: &str = "com.apple.dock";

// === Matching tables ===

/// Dock items that are never application windows. Clicks on these always
/// fall through to native dock handling.
pub const SYSTEM_ITEMS: &[&str] = &["Launchpad", "Trash", "Downloads", "Apps"];

/// Display-name to bundle-identifier aliases for applications whose bundle
/// identifier diverges from their dock label.
pub const BUNDLE_ALIASES: &[(&str, &str)] = &[
    ("WhatsApp", "net.whatsapp.WhatsApp"),
    ("Google Chrome", "com.google.Chrome"),
];
