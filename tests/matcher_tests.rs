//! Integration tests for the decision core: the scenario table the engine
//! is specified against, plus the shared-state behaviors the event tap
//! relies on.

use std::time::Duration;

use dockhide::model::matcher::resolve_app;
use dockhide::state::{DebounceGate, SharedState, SnapshotCell};
use dockhide::{decide, Decision, DockItem, DockSnapshot, Point, Rect, RunningApp};

fn notes_snapshot() -> DockSnapshot {
    DockSnapshot::new(vec![DockItem::new(Rect::new(100.0, 0.0, 50.0, 50.0), "Notes")])
}

fn running(name: &str, bundle: &str, active: bool, hidden: bool) -> RunningApp {
    RunningApp::new(name, bundle, active, hidden)
}

// === Scenario table ===

#[test]
fn scenario_a_active_visible_app_is_intercepted() {
    let apps = vec![running("Notes", "com.apple.Notes", true, false)];
    let decision = decide(Point::new(120.0, 20.0), &notes_snapshot(), &apps, true, false);
    assert_eq!(decision, Decision::Intercept(0));
}

#[test]
fn scenario_b_inactive_app_passes_through() {
    let apps = vec![running("Notes", "com.apple.Notes", false, false)];
    let decision = decide(Point::new(120.0, 20.0), &notes_snapshot(), &apps, true, false);
    assert_eq!(decision, Decision::PassThrough);
}

#[test]
fn scenario_c_click_outside_every_item_passes_through() {
    let apps = vec![running("Notes", "com.apple.Notes", true, false)];
    let decision = decide(Point::new(500.0, 500.0), &notes_snapshot(), &apps, true, false);
    assert_eq!(decision, Decision::PassThrough);
}

#[test]
fn scenario_d_unlabeled_item_passes_through_regardless_of_apps() {
    let snapshot = DockSnapshot::new(vec![DockItem::new(Rect::new(0.0, 0.0, 50.0, 50.0), "")]);
    let apps = vec![
        running("Notes", "com.apple.Notes", true, false),
        running("", "com.example.anon", true, false),
    ];
    let decision = decide(Point::new(25.0, 25.0), &snapshot, &apps, true, false);
    assert_eq!(decision, Decision::PassThrough);
}

#[test]
fn scenario_e_whatsapp_label_resolves_through_alias_table() {
    // No running app is named "WhatsApp" verbatim. The helper at index 0
    // would win under the substring rule; the alias table maps the label to
    // the bundle identifier first.
    let apps = vec![
        running("WhatsApp Business Helper", "com.example.helper", false, false),
        running("WhatsApp Desktop", "net.whatsapp.WhatsApp", true, false),
    ];
    let snapshot =
        DockSnapshot::new(vec![DockItem::new(Rect::new(200.0, 0.0, 50.0, 50.0), "WhatsApp")]);
    let decision = decide(Point::new(210.0, 10.0), &snapshot, &apps, true, false);
    assert_eq!(decision, Decision::Intercept(1));
}

// === Gates ===

#[test]
fn disabled_feature_passes_everything_through() {
    let apps = vec![running("Notes", "com.apple.Notes", true, false)];
    let snapshot = notes_snapshot();
    for point in [
        Point::new(120.0, 20.0),
        Point::new(100.0, 0.0),
        Point::new(500.0, 500.0),
    ] {
        assert_eq!(
            decide(point, &snapshot, &apps, false, false),
            Decision::PassThrough
        );
    }
}

#[test]
fn fullscreen_passes_everything_through() {
    let apps = vec![running("Notes", "com.apple.Notes", true, false)];
    let decision = decide(Point::new(120.0, 20.0), &notes_snapshot(), &apps, true, true);
    assert_eq!(decision, Decision::PassThrough);
}

#[test]
fn system_items_pass_through_even_when_a_matching_app_is_active() {
    let apps = vec![running("Downloads", "com.example.downloads", true, false)];
    let snapshot =
        DockSnapshot::new(vec![DockItem::new(Rect::new(0.0, 0.0, 50.0, 50.0), "Downloads")]);
    let decision = decide(Point::new(10.0, 10.0), &snapshot, &apps, true, false);
    assert_eq!(decision, Decision::PassThrough);
}

#[test]
fn hidden_app_passes_through() {
    let apps = vec![running("Notes", "com.apple.Notes", true, true)];
    let decision = decide(Point::new(120.0, 20.0), &notes_snapshot(), &apps, true, false);
    assert_eq!(decision, Decision::PassThrough);
}

#[test]
fn unresolvable_label_passes_through() {
    let apps = vec![running("Safari", "com.apple.Safari", true, false)];
    let decision = decide(Point::new(120.0, 20.0), &notes_snapshot(), &apps, true, false);
    assert_eq!(decision, Decision::PassThrough);
}

// === Resolution precedence ===

#[test]
fn exact_name_beats_substring_match() {
    // "Mail Helper" substring-matches the label and precedes the exact
    // match in the list; precedence must still pick "Mail".
    let apps = vec![
        running("Mail Helper", "com.example.helper", true, false),
        running("Mail", "com.apple.mail", true, false),
    ];
    assert_eq!(resolve_app("Mail", &apps), Some(1));
}

#[test]
fn case_insensitive_beats_bundle_and_substring() {
    let apps = vec![
        running("spotify helper", "Spotify", true, false),
        running("SPOTIFY", "com.spotify.client", true, false),
    ];
    assert_eq!(resolve_app("Spotify", &apps), Some(1));
}

#[test]
fn overlapping_items_intercept_by_traversal_order() {
    let snapshot = DockSnapshot::new(vec![
        DockItem::new(Rect::new(0.0, 0.0, 100.0, 50.0), "Notes"),
        DockItem::new(Rect::new(50.0, 0.0, 100.0, 50.0), "Safari"),
    ]);
    let apps = vec![
        running("Safari", "com.apple.Safari", true, false),
        running("Notes", "com.apple.Notes", true, false),
    ];
    // (75, 25) is inside both rectangles; the first item wins.
    let decision = decide(Point::new(75.0, 25.0), &snapshot, &apps, true, false);
    assert_eq!(decision, Decision::Intercept(1));
}

// === Shared state ===

#[test]
fn published_snapshot_is_replaced_wholesale() {
    let cell = SnapshotCell::new();
    cell.publish(notes_snapshot());
    assert_eq!(cell.load().len(), 1);

    // A rebuild that finds no dock clears the snapshot rather than leaving
    // it stale.
    cell.publish(DockSnapshot::empty());
    assert!(cell.load().is_empty());
}

#[test]
fn matcher_runs_against_the_snapshot_a_reader_holds() {
    let state = SharedState::new(true);
    state.snapshot.publish(notes_snapshot());

    let held = state.snapshot.load();
    state.snapshot.publish(DockSnapshot::empty());

    let apps = vec![running("Notes", "com.apple.Notes", true, false)];
    // The in-flight reader still decides against its own (stale-by-one)
    // snapshot; the next load sees the new one.
    assert_eq!(
        decide(Point::new(120.0, 20.0), &held, &apps, true, false),
        Decision::Intercept(0)
    );
    assert_eq!(
        decide(Point::new(120.0, 20.0), &state.snapshot.load(), &apps, true, false),
        Decision::PassThrough
    );
}

#[test]
fn refresh_requests_within_the_window_collapse_to_one() {
    let gate = DebounceGate::new(Duration::from_secs(60));
    let mut rebuilds = 0;
    for _ in 0..5 {
        if gate.try_arm() {
            rebuilds += 1;
        }
    }
    assert_eq!(rebuilds, 1);
}

#[test]
fn feature_flag_converges_before_notification() {
    let state = SharedState::new(true);
    state.feature.set(false);
    // The loop reads the flag directly; a reader after set() can never see
    // the old value.
    assert!(!state.feature.get());
}
