//! Tests for app state

use ratatui::layout::Rect;
use std::time::{Duration, Instant};

use super::*;
use crate::config::{Config, ScrollbarMode};
use crate::test_utils::test_helpers::test_app;

#[test]
fn test_app_mounts_one_region_per_pane() {
    let app = test_app(&[10, 20, 30]);

    assert_eq!(app.panes.len(), 3);
    assert_eq!(app.host.regions().count(), 3);
    assert_eq!(app.focused_region(), Some(app.panes[0].region));
}

#[test]
fn test_panes_join_group_when_sync_enabled() {
    let app = test_app(&[10, 20]);

    let group = app.host.group(app.group).unwrap();
    assert!(app.sync_enabled);
    assert!(app.panes.iter().all(|pane| group.contains(pane.region)));
    assert!(!group.is_horizontal());
}

#[test]
fn test_config_disables_sync() {
    let mut config = Config::default();
    config.sync.enabled = false;
    config.sync.horizontal = true;

    let app = App::new(
        vec![crate::content::PaneContent::from_text("a", "x")],
        &config,
    );

    assert!(!app.sync_enabled);
    assert!(app.host.group(app.group).unwrap().is_empty());
    assert!(app.host.group(app.group).unwrap().is_horizontal());
}

#[test]
fn test_config_mode_applied_to_regions() {
    let mut config = Config::default();
    config.scrollbar.mode = Some(ScrollbarMode::Invisible);

    let app = App::new(
        vec![crate::content::PaneContent::from_text("a", "x")],
        &config,
    );

    assert_eq!(app.mode, ScrollbarMode::Invisible);
    assert_eq!(
        app.host.region(app.panes[0].region).unwrap().mode(),
        ScrollbarMode::Invisible
    );
}

#[test]
fn test_toggle_sync() {
    let mut app = test_app(&[10, 20]);

    app.toggle_sync();
    assert!(!app.sync_enabled);
    assert_eq!(app.host.group_of(app.panes[1].region), None);

    app.toggle_sync();
    assert!(app.sync_enabled);
    assert_eq!(app.host.group_of(app.panes[1].region), Some(app.group));
}

#[test]
fn test_cycle_mode_updates_every_region() {
    let mut app = test_app(&[10, 20]);

    app.cycle_mode();

    assert_eq!(app.mode, ScrollbarMode::AlwaysPresent);
    assert!(
        app.host
            .regions()
            .all(|region| region.mode() == ScrollbarMode::AlwaysPresent)
    );
}

#[test]
fn test_focus_next_wraps() {
    let mut app = test_app(&[1, 1]);

    app.focus_next();
    assert_eq!(app.focus, 1);
    app.focus_next();
    assert_eq!(app.focus, 0);
}

#[test]
fn test_focus_at_uses_pane_areas() {
    let mut app = test_app(&[1, 1]);
    app.panes[0].area = Some(Rect::new(0, 0, 10, 10));
    app.panes[1].area = Some(Rect::new(10, 0, 10, 10));

    app.focus_at(15, 3);
    assert_eq!(app.focus, 1);

    app.focus_at(50, 50);
    assert_eq!(app.focus, 1);
}

#[test]
fn test_initial_needs_render_true() {
    let app = test_app(&[1]);
    assert!(
        app.should_render(),
        "New app should have needs_render=true for initial render"
    );
}

#[test]
fn test_clear_and_mark_dirty() {
    let mut app = test_app(&[1]);

    app.clear_dirty();
    assert!(!app.should_render());

    app.note_changes(&[]);
    assert!(!app.should_render());

    app.show_warning("Invalid config: oops");
    assert!(app.should_render());
    assert_eq!(
        app.warning.as_ref().map(|w| w.message.as_str()),
        Some("Invalid config: oops")
    );
}

#[test]
fn test_fresh_warning_is_kept() {
    let mut app = test_app(&[1]);
    app.show_warning("Invalid config: oops");

    assert!(!app.clear_warning_if_expired());
    assert!(app.warning.is_some());
}

#[test]
fn test_expired_warning_is_cleared() {
    let mut app = test_app(&[1]);
    app.show_warning("Invalid config: oops");
    if let Some(warning) = app.warning.as_mut() {
        warning.shown_at = Instant::now()
            .checked_sub(WARNING_DURATION + Duration::from_secs(1))
            .unwrap();
    }
    app.clear_dirty();

    assert!(app.clear_warning_if_expired());
    assert!(app.warning.is_none());
    assert!(app.should_render());
}

#[test]
fn test_dismiss_without_warning_stays_clean() {
    let mut app = test_app(&[1]);
    app.clear_dirty();

    app.dismiss_warning();

    assert!(!app.should_render());
}

#[test]
fn test_toggle_horizontal_sync() {
    let mut app = test_app(&[10, 20]);
    assert!(!app.horizontal_sync());

    app.toggle_horizontal_sync();
    assert!(app.horizontal_sync());
    assert!(app.host.group(app.group).unwrap().is_horizontal());

    app.toggle_horizontal_sync();
    assert!(!app.horizontal_sync());
}
