use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::time::Duration;

use super::app_state::App;
use super::mouse_events::to_input_event;
use crate::geometry::{Axis, Direction};
use crate::router::InputEvent;
use crate::scroll::{ScrollChange, ScrollRegion};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);
const KEY_SCROLL_LINES: f64 = 1.0;

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.clear_warning_if_expired();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    self.handle_mouse_event(mouse_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.dismiss_warning();

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_focused(|r| r.apply_wheel_delta(0.0, KEY_SCROLL_LINES));
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_focused(|r| r.apply_wheel_delta(0.0, -KEY_SCROLL_LINES));
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.scroll_focused(|r| r.apply_wheel_delta(KEY_SCROLL_LINES, 0.0));
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.scroll_focused(|r| r.apply_wheel_delta(-KEY_SCROLL_LINES, 0.0));
            }
            KeyCode::PageDown => {
                self.scroll_focused(|r| r.page(Axis::Vertical, Direction::Forward));
            }
            KeyCode::PageUp => {
                self.scroll_focused(|r| r.page(Axis::Vertical, Direction::Backward));
            }
            KeyCode::Char('g') | KeyCode::Home => self.scroll_focused_to_top(),
            KeyCode::Char('G') | KeyCode::End => {
                self.scroll_focused(ScrollRegion::scroll_to_bottom);
            }
            KeyCode::Tab => self.focus_next(),
            KeyCode::Char('m') => self.cycle_mode(),
            KeyCode::Char('s') => self.toggle_sync(),
            KeyCode::Char('x') => self.toggle_horizontal_sync(),
            _ => {}
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            self.focus_at(mouse.column, mouse.row);
        }

        let was_dragging = self.host.active_drag().is_some();
        let Some(event) = to_input_event(mouse, self.wheel_lines) else {
            return;
        };
        let changes = self.host.handle(event);
        self.note_changes(&changes);

        // Thumb color follows the drag state
        if was_dragging != self.host.active_drag().is_some() {
            self.mark_dirty();
        }
    }

    fn scroll_focused<F>(&mut self, op: F)
    where
        F: FnOnce(&mut ScrollRegion) -> Option<ScrollChange>,
    {
        if let Some(id) = self.focused_region() {
            let changes = self.host.apply(id, op);
            self.note_changes(&changes);
        }
    }

    /// Scroll-to-top command; keeps the horizontal position
    fn scroll_focused_to_top(&mut self) {
        let Some(id) = self.focused_region() else {
            return;
        };
        let Some(left) = self.host.region(id).map(|r| r.offset().left) else {
            return;
        };
        let changes = self.host.handle(InputEvent::ScrollTo {
            region: id,
            top: 0.0,
            left,
        });
        self.note_changes(&changes);
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
