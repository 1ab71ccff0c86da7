// Configuration type definitions

use serde::Deserialize;

use super::scroll_config::{ScrollConfig, ScrollbarMode, TrackClickPaging};

/// Scrollbar configuration section
///
/// Every field is optional; missing ones keep the host's defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
pub struct ScrollbarSection {
    #[serde(default)]
    pub mode: Option<ScrollbarMode>,
    #[serde(default)]
    pub thickness: Option<f64>,
    #[serde(default)]
    pub min_thumb_length: Option<f64>,
    #[serde(default)]
    pub arrow_step: Option<f64>,
    #[serde(default)]
    pub track_click_paging: Option<TrackClickPaging>,
}

impl ScrollbarSection {
    /// Overlay the configured values on `base`
    ///
    /// Non-positive or non-finite lengths are ignored.
    pub fn apply_to(&self, base: ScrollConfig) -> ScrollConfig {
        let positive = |value: Option<f64>| value.filter(|v| v.is_finite() && *v > 0.0);

        ScrollConfig {
            mode: self.mode.unwrap_or(base.mode),
            scrollbar_thickness: positive(self.thickness).unwrap_or(base.scrollbar_thickness),
            min_thumb_length: positive(self.min_thumb_length).unwrap_or(base.min_thumb_length),
            arrow_step: positive(self.arrow_step).unwrap_or(base.arrow_step),
            track_click_paging: self.track_click_paging.unwrap_or(base.track_click_paging),
        }
    }
}

/// Sync configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SyncSection {
    #[serde(default = "default_sync_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub horizontal: bool,
}

fn default_sync_enabled() -> bool {
    true
}

impl Default for SyncSection {
    fn default() -> Self {
        SyncSection {
            enabled: true,
            horizontal: false,
        }
    }
}

/// Mouse wheel configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WheelSection {
    #[serde(default = "default_wheel_lines")]
    pub lines: u16,
}

fn default_wheel_lines() -> u16 {
    3
}

impl Default for WheelSection {
    fn default() -> Self {
        WheelSection { lines: 3 }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scrollbar: ScrollbarSection,
    #[serde(default)]
    pub sync: SyncSection,
    #[serde(default)]
    pub wheel: WheelSection,
}

impl Config {
    /// Region options for a terminal host after applying this file
    pub fn terminal_scroll_config(&self) -> ScrollConfig {
        self.scrollbar.apply_to(ScrollConfig::terminal())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
