//! Centralized theme configuration for the viewer.
//!
//! Render files use `theme::module::CONSTANT` rather than hardcoded `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
}

/// Text pane styles
pub mod pane {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const TEXT: Color = palette::TEXT;

    pub const TITLE_FOCUSED: Style = Style::new()
        .fg(palette::CYAN)
        .add_modifier(Modifier::BOLD);
    pub const TITLE_UNFOCUSED: Style = Style::new().fg(palette::TEXT_MUTED);
}

/// Scrollbar styles
pub mod scrollbar {
    use super::*;

    pub const TRACK: Color = palette::BG_HIGHLIGHT;
    pub const THUMB: Color = palette::CYAN;
    pub const THUMB_DRAGGING: Color = palette::PINK;
    pub const ARROW: Color = palette::TEXT_MUTED;
}

/// Status line styles
pub mod status {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SYNC_ON: Color = palette::CYAN;
    pub const SYNC_OFF: Color = palette::TEXT_DIM;
    pub const WARNING: Style = Style::new()
        .fg(palette::BG_DARK)
        .bg(palette::WARNING);
}
