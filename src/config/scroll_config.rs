// Engine configuration shared by every scroll region

use serde::{Deserialize, Serialize};

/// Policy governing whether and how a scrollbar reserves space and renders
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollbarMode {
    /// Scrollbar shown only when the content overflows
    #[default]
    Normal,
    /// Scrollbar always reserves space and renders
    AlwaysPresent,
    /// No scrollbar and no reserved space; scrolling still works
    Invisible,
}

impl ScrollbarMode {
    /// Next mode in display order, wrapping around
    pub fn next(self) -> Self {
        match self {
            ScrollbarMode::Normal => ScrollbarMode::AlwaysPresent,
            ScrollbarMode::AlwaysPresent => ScrollbarMode::Invisible,
            ScrollbarMode::Invisible => ScrollbarMode::Normal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScrollbarMode::Normal => "normal",
            ScrollbarMode::AlwaysPresent => "always-present",
            ScrollbarMode::Invisible => "invisible",
        }
    }
}

/// What a click on the empty part of a track does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackClickPaging {
    /// Jump to the clicked ratio of the track, minus half an arrow step
    #[default]
    JumpToRatio,
    /// Move one viewport length toward the click
    PageByViewport,
}

/// Recognized options of a scroll region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    pub mode: ScrollbarMode,
    pub scrollbar_thickness: f64,
    pub min_thumb_length: f64,
    pub arrow_step: f64,
    pub track_click_paging: TrackClickPaging,
}

pub const DEFAULT_SCROLLBAR_THICKNESS: f64 = 12.0;
pub const DEFAULT_MIN_THUMB_LENGTH: f64 = 20.0;
pub const DEFAULT_ARROW_STEP: f64 = 40.0;

impl ScrollConfig {
    /// Defaults for a terminal host where one cell is one pixel
    pub fn terminal() -> Self {
        Self {
            mode: ScrollbarMode::Normal,
            scrollbar_thickness: 1.0,
            min_thumb_length: 2.0,
            arrow_step: 3.0,
            track_click_paging: TrackClickPaging::JumpToRatio,
        }
    }

    pub fn with_mode(self, mode: ScrollbarMode) -> Self {
        Self { mode, ..self }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            mode: ScrollbarMode::Normal,
            scrollbar_thickness: DEFAULT_SCROLLBAR_THICKNESS,
            min_thumb_length: DEFAULT_MIN_THUMB_LENGTH,
            arrow_step: DEFAULT_ARROW_STEP,
            track_click_paging: TrackClickPaging::JumpToRatio,
        }
    }
}
