//! Mouse event translation
//!
//! Maps terminal mouse events onto engine input events. Cells are addressed
//! by their center so a click always lands inside the drawn part.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::geometry::Point;
use crate::router::InputEvent;

/// Translate a mouse event; `None` for events the engine does not use
pub fn to_input_event(mouse: MouseEvent, wheel_lines: u16) -> Option<InputEvent> {
    let point = Point::new(f64::from(mouse.column) + 0.5, f64::from(mouse.row) + 0.5);
    let lines = f64::from(wheel_lines);

    let wheel = |delta_x: f64, delta_y: f64| InputEvent::Wheel {
        point,
        delta_x,
        delta_y,
    };

    match mouse.kind {
        MouseEventKind::ScrollDown => Some(wheel(0.0, lines)),
        MouseEventKind::ScrollUp => Some(wheel(0.0, -lines)),
        MouseEventKind::ScrollRight => Some(wheel(lines, 0.0)),
        MouseEventKind::ScrollLeft => Some(wheel(-lines, 0.0)),
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::PointerDown { point }),
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            Some(InputEvent::PointerMove { point })
        }
        MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::PointerUp { point }),
        _ => None,
    }
}

#[cfg(test)]
#[path = "mouse_events_tests.rs"]
mod mouse_events_tests;
