//! Shared test utilities for scrollsync
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use ratatui::buffer::Buffer;

    use crate::app::App;
    use crate::config::Config;
    use crate::content::PaneContent;

    /// Numbered lines `line 1` .. `line N`
    pub fn numbered_lines(count: usize) -> String {
        (1..=count)
            .map(|n| format!("line {}", n))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Helper to create App over in-memory panes with default config
    pub fn test_app(pane_lines: &[usize]) -> App {
        let panes = pane_lines
            .iter()
            .enumerate()
            .map(|(i, count)| PaneContent::from_text(format!("pane{}", i + 1), &numbered_lines(*count)))
            .collect();
        App::new(panes, &Config::default())
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Helper to create a mouse event at a cell
    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    pub fn left_down(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    /// Buffer contents as plain text, one trimmed line per row
    pub fn buffer_rows(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                let row: String = (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect();
                row.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
