//! Scrolled text content of a pane

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::content::PaneContent;
use crate::geometry::Offset;
use crate::theme;

/// Draw the part of `content` visible at `offset` into `viewport`
///
/// Only the rows inside the viewport are laid out.
pub fn render_pane_content(buf: &mut Buffer, viewport: Rect, content: &PaneContent, offset: Offset) {
    if viewport.is_empty() {
        return;
    }

    // Row skip stays in usize; only the column scroll is bounded by u16
    let top = offset.top.round().max(0.0) as usize;
    let left = offset.left.round().clamp(0.0, f64::from(u16::MAX)) as u16;
    let lines: Vec<Line> = content
        .lines
        .iter()
        .skip(top)
        .take(usize::from(viewport.height))
        .map(|line| Line::raw(line.as_str()))
        .collect();

    Paragraph::new(lines)
        .style(Style::default().fg(theme::pane::TEXT))
        .scroll((0, left))
        .render(viewport, buf);
}

#[cfg(test)]
#[path = "pane_tests.rs"]
mod pane_tests;
