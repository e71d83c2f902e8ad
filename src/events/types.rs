//! Application events for inter-module communication.
//!
//! These events represent engine-level notifications that can be published
//! by any module (workspace observers, the status-bar menu, trust setup)
//! and handled by the main-loop dispatcher. Pure Rust, no FFI.

/// Engine-level events for decoupled communication between modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The dock layout may have changed (app launched/terminated/activated,
    /// active space switched). The index builder should refresh.
    DockChanged,

    /// The click-to-hide flag was flipped; carries the new value.
    FeatureToggled(bool),

    /// Accessibility trust was just granted.
    TrustGranted,
}

impl AppEvent {
    /// Should this event trigger a dock snapshot refresh?
    pub fn triggers_refresh(&self) -> bool {
        matches!(self, AppEvent::DockChanged | AppEvent::TrustGranted)
    }

    /// Human-readable description for logging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::DockChanged => "dock layout changed",
            AppEvent::FeatureToggled(true) => "click-to-hide enabled",
            AppEvent::FeatureToggled(false) => "click-to-hide disabled",
            AppEvent::TrustGranted => "accessibility trust granted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_triggering_events() {
        assert!(AppEvent::DockChanged.triggers_refresh());
        assert!(AppEvent::TrustGranted.triggers_refresh());
        assert!(!AppEvent::FeatureToggled(true).triggers_refresh());
        assert!(!AppEvent::FeatureToggled(false).triggers_refresh());
    }

    #[test]
    fn all_events_have_descriptions() {
        let events = [
            AppEvent::DockChanged,
            AppEvent::FeatureToggled(true),
            AppEvent::FeatureToggled(false),
            AppEvent::TrustGranted,
        ];
        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
