use ratatui::layout::Rect;
use std::time::{Duration, Instant};

use crate::config::{Config, ScrollbarMode};
use crate::content::PaneContent;
use crate::router::ScrollHost;
use crate::scroll::{RegionId, ScrollChange};
use crate::sync::GroupId;

/// How long a warning replaces the status line
pub const WARNING_DURATION: Duration = Duration::from_secs(5);

/// Status line warning with the time it was raised
#[derive(Debug, Clone)]
pub struct Warning {
    pub message: String,
    pub shown_at: Instant,
}

impl Warning {
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() > WARNING_DURATION
    }
}

/// One file shown in its own scroll region
pub struct Pane {
    pub region: RegionId,
    pub content: PaneContent,
    /// Outer area including the border, set on each render
    pub area: Option<Rect>,
}

pub struct App {
    pub host: ScrollHost,
    pub panes: Vec<Pane>,
    pub group: GroupId,
    pub sync_enabled: bool,
    pub mode: ScrollbarMode,
    pub focus: usize,
    pub wheel_lines: u16,
    pub warning: Option<Warning>,
    pub should_quit: bool,
    /// Set by any state change, cleared after drawing
    pub needs_render: bool,
}

impl App {
    pub fn new(contents: Vec<PaneContent>, config: &Config) -> Self {
        let scroll_config = config.terminal_scroll_config();
        let mut host = ScrollHost::new();
        let group = host.create_group(config.sync.horizontal);

        let panes: Vec<Pane> = contents
            .into_iter()
            .map(|content| Pane {
                region: host.mount(scroll_config),
                content,
                area: None,
            })
            .collect();

        let mut app = Self {
            host,
            panes,
            group,
            sync_enabled: false,
            mode: scroll_config.mode,
            focus: 0,
            wheel_lines: config.wheel.lines,
            warning: None,
            should_quit: false,
            needs_render: true,
        };
        app.set_sync(config.sync.enabled);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.needs_render
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    pub fn focused_region(&self) -> Option<RegionId> {
        self.panes.get(self.focus).map(|pane| pane.region)
    }

    pub fn focus_next(&mut self) {
        if !self.panes.is_empty() {
            self.focus = (self.focus + 1) % self.panes.len();
            self.mark_dirty();
        }
    }

    /// Focus the pane whose outer area contains the cell
    pub fn focus_at(&mut self, column: u16, row: u16) {
        let position = ratatui::layout::Position::new(column, row);
        if let Some(index) = self
            .panes
            .iter()
            .position(|pane| pane.area.is_some_and(|area| area.contains(position)))
            && index != self.focus
        {
            self.focus = index;
            self.mark_dirty();
        }
    }

    /// Join or leave the shared sync group for every pane
    pub fn set_sync(&mut self, enabled: bool) {
        for pane in &self.panes {
            if enabled {
                self.host.join(self.group, pane.region, None);
            } else {
                self.host.leave(pane.region);
            }
        }
        self.sync_enabled = enabled;
        self.mark_dirty();

        #[cfg(debug_assertions)]
        log::debug!("Sync {}", if enabled { "enabled" } else { "disabled" });
    }

    pub fn toggle_sync(&mut self) {
        self.set_sync(!self.sync_enabled);
    }

    pub fn horizontal_sync(&self) -> bool {
        self.host
            .group(self.group)
            .is_some_and(|group| group.is_horizontal())
    }

    /// Switch whether synced panes also share the left offset
    pub fn toggle_horizontal_sync(&mut self) {
        let horizontal = !self.horizontal_sync();
        if self.host.set_group_horizontal(self.group, horizontal) {
            self.mark_dirty();

            #[cfg(debug_assertions)]
            log::debug!("Horizontal sync {}", if horizontal { "on" } else { "off" });
        }
    }

    /// Switch every pane to the next scrollbar mode
    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
        for pane in &self.panes {
            self.host.set_mode(pane.region, self.mode);
        }
        self.mark_dirty();
    }

    pub fn show_warning(&mut self, message: &str) {
        self.warning = Some(Warning {
            message: message.to_string(),
            shown_at: Instant::now(),
        });
        self.mark_dirty();
    }

    /// Drop the warning so the status line comes back
    pub fn dismiss_warning(&mut self) {
        if self.warning.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Clear an expired warning, returns true if cleared
    pub fn clear_warning_if_expired(&mut self) -> bool {
        if self.warning.as_ref().is_some_and(Warning::is_expired) {
            self.dismiss_warning();
            return true;
        }
        false
    }

    /// Record the outcome of an engine call
    pub fn note_changes(&mut self, changes: &[ScrollChange]) {
        if !changes.is_empty() {
            self.mark_dirty();
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
