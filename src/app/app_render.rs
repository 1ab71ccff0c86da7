use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::app_state::App;
use crate::geometry;
use crate::theme;
use crate::widgets::{pane::render_pane_content, scrollbar::render_scrollbar};

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [panes_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        let count = self.panes.len().max(1) as u32;
        let constraints = vec![Constraint::Ratio(1, count); self.panes.len()];
        let pane_areas = Layout::horizontal(constraints).split(panes_area);

        for (index, area) in pane_areas.iter().enumerate() {
            self.render_pane(frame, index, *area);
        }

        self.render_status(frame, status_area);
    }

    /// Draw one pane and measure its region from the drawn area
    fn render_pane(&mut self, frame: &mut Frame, index: usize, area: Rect) {
        let focused = index == self.focus;
        let Some(pane) = self.panes.get_mut(index) else {
            return;
        };
        pane.area = Some(area);

        let (border, title) = if focused {
            (theme::pane::BORDER_FOCUSED, theme::pane::TITLE_FOCUSED)
        } else {
            (theme::pane::BORDER_UNFOCUSED, theme::pane::TITLE_UNFOCUSED)
        };
        let block = Block::bordered()
            .border_style(Style::default().fg(border))
            .title(Span::styled(format!(" {} ", pane.content.title), title));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Resize clamps stay local to the pane
        let region = pane.region;
        self.host.set_bounds(region, engine_rect(inner));
        self.host.set_content_size(region, pane.content.size());

        let Some(model) = self.host.render_model(region) else {
            return;
        };
        let viewport = Rect::new(
            inner.x,
            inner.y,
            (model.viewport.width.max(0.0) as u16).min(inner.width),
            (model.viewport.height.max(0.0) as u16).min(inner.height),
        );
        let dragging = self.host.active_drag() == Some(region);
        let buf = frame.buffer_mut();

        render_pane_content(buf, viewport, &pane.content, model.offset);
        for bar in model.scrollbars() {
            render_scrollbar(buf, inner, bar, dragging);
        }
    }

    /// Status line; key hints are dropped first when the terminal is narrow
    fn render_status(&self, frame: &mut Frame, area: Rect) {
        if let Some(warning) = &self.warning {
            let line = Line::from(Span::styled(
                format!(" {} ", warning.message),
                theme::status::WARNING,
            ));
            frame.render_widget(Paragraph::new(line), area);
            return;
        }

        let key = |k: &'static str| Span::styled(k, Style::default().fg(theme::status::KEY));
        let desc =
            |d: String| Span::styled(d, Style::default().fg(theme::status::DESCRIPTION));
        let sync_color = if self.sync_enabled {
            theme::status::SYNC_ON
        } else {
            theme::status::SYNC_OFF
        };
        let sync_label = match (self.sync_enabled, self.horizontal_sync()) {
            (false, _) => "off",
            (true, false) => "on",
            (true, true) => "on+x",
        };

        let hints = vec![key("q"), desc(" quit  ".into()), key("Tab"), desc(" focus  ".into())];
        let mut state = vec![
            key("m"),
            desc(format!(" mode:{}  ", self.mode.label())),
            key("s"),
            Span::styled(format!(" sync:{}", sync_label), Style::default().fg(sync_color)),
        ];
        if let Some(region) = self.focused_region().and_then(|id| self.host.region(id)) {
            state.push(desc(format!(
                "  {:.0}/{:.0}",
                region.offset().top,
                region.max_offset().top
            )));
        }

        let width = |spans: &[Span]| spans.iter().map(Span::width).sum::<usize>();
        let mut spans = vec![Span::raw(" ")];
        if 1 + width(&hints) + width(&state) <= usize::from(area.width) {
            spans.extend(hints);
        }
        spans.extend(state);

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn engine_rect(area: Rect) -> geometry::Rect {
    geometry::Rect::new(
        f64::from(area.x),
        f64::from(area.y),
        f64::from(area.width),
        f64::from(area.height),
    )
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
