//! Tests for key and mouse handling
//!
//! Each app is drawn once on a 40x12 test terminal so regions are measured.
//! With two panes each is 20 columns wide with an 18x9 inner area, and the
//! first pane's vertical scrollbar sits in column 18.

use ratatui::crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend};

use super::*;
use crate::test_utils::test_helpers::{key, key_with_mods, left_down, mouse, test_app};

fn rendered_app(pane_lines: &[usize]) -> App {
    let mut app = test_app(pane_lines);
    let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    app.clear_dirty();
    app
}

fn top(app: &App, pane: usize) -> f64 {
    app.host.region(app.panes[pane].region).unwrap().offset().top
}

#[test]
fn test_quit_keys() {
    for event in [
        key(KeyCode::Char('q')),
        key(KeyCode::Esc),
        key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let mut app = test_app(&[1]);
        app.handle_key_event(event);
        assert!(app.should_quit());
    }
}

#[test]
fn test_other_control_keys_ignored() {
    let mut app = rendered_app(&[100]);

    app.handle_key_event(key_with_mods(KeyCode::Char('j'), KeyModifiers::CONTROL));

    assert_eq!(top(&app, 0), 0.0);
    assert!(!app.should_quit());
}

#[test]
fn test_line_keys_scroll_focused_pane() {
    let mut app = rendered_app(&[100, 100]);

    app.handle_key_event(key(KeyCode::Char('j')));
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Char('k')));

    assert_eq!(top(&app, 0), 1.0);
    assert!((top(&app, 1) - 1.0).abs() < 1e-9);
    assert!(app.should_render());
}

#[test]
fn test_sync_maps_by_ratio() {
    let mut app = rendered_app(&[100, 50]);

    app.handle_key_event(key(KeyCode::End));

    assert_eq!(top(&app, 0), 91.0);
    assert_eq!(top(&app, 1), 41.0);
}

#[test]
fn test_page_keys() {
    let mut app = rendered_app(&[100]);

    app.handle_key_event(key(KeyCode::PageDown));
    assert_eq!(top(&app, 0), 9.0);

    app.handle_key_event(key(KeyCode::PageUp));
    assert_eq!(top(&app, 0), 0.0);
}

#[test]
fn test_top_and_bottom_keys() {
    let mut app = rendered_app(&[100]);

    app.handle_key_event(key(KeyCode::Char('G')));
    assert_eq!(top(&app, 0), 91.0);

    app.handle_key_event(key(KeyCode::Char('g')));
    assert_eq!(top(&app, 0), 0.0);

    app.handle_key_event(key(KeyCode::End));
    app.handle_key_event(key(KeyCode::Home));
    assert_eq!(top(&app, 0), 0.0);
}

#[test]
fn test_unchanged_offset_does_not_mark_dirty() {
    let mut app = rendered_app(&[100]);

    app.handle_key_event(key(KeyCode::Char('k')));

    assert!(!app.should_render());
}

#[test]
fn test_horizontal_keys() {
    let mut app = test_app(&[1]);
    app.panes[0].content = crate::content::PaneContent::from_text("wide", &"x".repeat(60));
    let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    let region = app.panes[0].region;

    app.handle_key_event(key(KeyCode::Char('l')));
    app.handle_key_event(key(KeyCode::Right));
    app.handle_key_event(key(KeyCode::Char('h')));

    assert_eq!(app.host.region(region).unwrap().offset().left, 1.0);
}

#[test]
fn test_tab_moves_focus_and_keys_follow() {
    let mut app = rendered_app(&[100, 100]);
    app.toggle_sync();

    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Char('j')));

    assert_eq!(app.focus, 1);
    assert_eq!(top(&app, 0), 0.0);
    assert_eq!(top(&app, 1), 1.0);
}

#[test]
fn test_sync_toggle_key() {
    let mut app = rendered_app(&[100, 100]);

    app.handle_key_event(key(KeyCode::Char('s')));
    app.handle_key_event(key(KeyCode::Char('j')));

    assert!(!app.sync_enabled);
    assert_eq!(top(&app, 1), 0.0);
}

#[test]
fn test_horizontal_sync_key() {
    let mut app = test_app(&[1, 1]);
    let wide = vec!["x".repeat(60); 100].join("\n");
    for pane in &mut app.panes {
        pane.content = crate::content::PaneContent::from_text("wide", &wide);
    }
    let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    let left = |app: &App, pane: usize| app.host.region(app.panes[pane].region).unwrap().offset().left;

    app.handle_key_event(key(KeyCode::Char('l')));
    assert_eq!(left(&app, 0), 1.0);
    assert_eq!(left(&app, 1), 0.0);

    app.handle_key_event(key(KeyCode::Char('x')));
    app.handle_key_event(key(KeyCode::Char('l')));

    assert!(app.horizontal_sync());
    assert_eq!(left(&app, 0), 2.0);
    assert!((left(&app, 1) - 2.0).abs() < 1e-9);
}

#[test]
fn test_key_press_dismisses_warning() {
    let mut app = test_app(&[1]);
    app.show_warning("Invalid config: boom");

    app.handle_key_event(key(KeyCode::Char('s')));

    assert!(app.warning.is_none());
}

#[test]
fn test_mode_key_cycles() {
    let mut app = test_app(&[1]);

    app.handle_key_event(key(KeyCode::Char('m')));
    assert_eq!(app.mode, crate::config::ScrollbarMode::AlwaysPresent);

    app.handle_key_event(key(KeyCode::Char('m')));
    assert_eq!(app.mode, crate::config::ScrollbarMode::Invisible);
}

#[test]
fn test_wheel_scrolls_pane_under_pointer() {
    let mut app = rendered_app(&[100, 100]);
    app.toggle_sync();

    app.handle_mouse_event(mouse(MouseEventKind::ScrollDown, 25, 5));

    assert_eq!(top(&app, 0), 0.0);
    assert_eq!(top(&app, 1), 3.0);
    assert_eq!(app.focus, 0);
}

#[test]
fn test_wheel_lines_from_config() {
    let mut app = rendered_app(&[100]);
    app.wheel_lines = 5;

    app.handle_mouse_event(mouse(MouseEventKind::ScrollDown, 5, 5));

    assert_eq!(top(&app, 0), 5.0);
}

#[test]
fn test_arrow_click() {
    let mut app = rendered_app(&[100, 100]);

    app.handle_mouse_event(left_down(18, 9));

    assert_eq!(top(&app, 0), 3.0);
}

#[test]
fn test_thumb_drag_over_mouse_events() {
    let mut app = rendered_app(&[100, 100]);

    // Thumb covers rows 2..4 at offset zero
    app.handle_mouse_event(left_down(18, 2));
    assert!(app.host.active_drag().is_some());
    assert!(app.should_render());

    app.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 30, 7));
    assert_eq!(top(&app, 0), 91.0);
    assert_eq!(top(&app, 1), 91.0);

    app.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0));
    assert!(app.host.active_drag().is_none());
}

#[test]
fn test_click_focuses_pane() {
    let mut app = rendered_app(&[100, 100]);

    app.handle_mouse_event(left_down(25, 5));

    assert_eq!(app.focus, 1);
}
