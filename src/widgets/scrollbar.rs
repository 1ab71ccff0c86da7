//! Scrollbar painting for terminal regions
//!
//! Draws the engine's scrollbar geometry cell by cell. One engine pixel is
//! one terminal cell, so geometry is rounded to the nearest cell.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};

use crate::geometry::{self, Axis};
use crate::render::ScrollbarGeometry;
use crate::theme;

const TRACK_SYMBOL: &str = "░";
const THUMB_SYMBOL: &str = "█";

/// Draw one scrollbar of a region whose local origin is `area`'s top-left
///
/// The track is cleared before painting, so stale thumb cells from a
/// previous offset never survive. Cells outside `area` are never touched.
pub fn render_scrollbar(buf: &mut Buffer, area: Rect, bar: &ScrollbarGeometry, dragging: bool) {
    let thumb_color = if dragging {
        theme::scrollbar::THUMB_DRAGGING
    } else {
        theme::scrollbar::THUMB
    };
    let (start_arrow, end_arrow) = match bar.axis {
        Axis::Vertical => ("▲", "▼"),
        Axis::Horizontal => ("◀", "▶"),
    };

    let clip = area.intersection(buf.area);
    fill(buf, clip, cells(area, bar.track), TRACK_SYMBOL, theme::scrollbar::TRACK);
    fill(buf, clip, cells(area, bar.thumb), THUMB_SYMBOL, thumb_color);
    fill(buf, clip, cells(area, bar.arrow_start), start_arrow, theme::scrollbar::ARROW);
    fill(buf, clip, cells(area, bar.arrow_end), end_arrow, theme::scrollbar::ARROW);
}

fn fill(buf: &mut Buffer, clip: Rect, target: Rect, symbol: &str, color: Color) {
    let target = target.intersection(clip);
    let style = Style::default().fg(color);

    for y in target.top()..target.bottom() {
        for x in target.left()..target.right() {
            buf[(x, y)].reset();
            buf[(x, y)].set_symbol(symbol).set_style(style);
        }
    }
}

/// Map a region-local rect to absolute cells inside `area`
///
/// Non-empty geometry always covers at least one cell along each side.
fn cells(area: Rect, local: geometry::Rect) -> Rect {
    let (x, width) = span(local.x, local.width, area.width);
    let (y, height) = span(local.y, local.height, area.height);
    Rect::new(area.x.saturating_add(x), area.y.saturating_add(y), width, height)
}

fn span(start: f64, length: f64, limit: u16) -> (u16, u16) {
    let limit_f = f64::from(limit);
    let first = start.round().clamp(0.0, limit_f);
    let mut last = (start + length).round().clamp(0.0, limit_f);

    if length > 0.0 && last <= first && first < limit_f {
        last = first + 1.0;
    }

    let first = first as u16;
    (first, (last as u16).saturating_sub(first))
}

#[cfg(test)]
#[path = "scrollbar_tests.rs"]
mod scrollbar_tests;
