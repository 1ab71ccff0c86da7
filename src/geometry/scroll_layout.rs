use super::calculator::{compute_max_offset, compute_thumb_length, compute_thumb_position};
use super::geometry_types::{Axis, Offset, Reserve, Size};
use crate::config::{ScrollConfig, ScrollbarMode};

/// Derived geometry for one axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisLayout {
    /// Whether this axis renders a scrollbar
    pub shown: bool,
    pub max_offset: f64,
    /// Viewport length left after the perpendicular scrollbar is reserved
    pub viewport: f64,
    pub content: f64,
    pub track_length: f64,
    /// Length of each arrow button at the track ends
    pub arrow_length: f64,
    pub thumb_length: f64,
}

impl AxisLayout {
    /// Distance the thumb can travel between the arrows
    pub fn scroll_area(&self) -> f64 {
        (self.track_length - self.thumb_length - 2.0 * self.arrow_length).max(0.0)
    }

    /// Thumb start measured from the track start (arrow included)
    pub fn thumb_start(&self, offset: f64) -> f64 {
        self.arrow_length
            + compute_thumb_position(
                offset,
                self.max_offset,
                self.track_length,
                self.thumb_length,
                self.arrow_length,
            )
    }
}

/// Scroll bounds and scrollbar geometry of one region
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollLayout {
    pub container: Size,
    pub content: Size,
    pub thickness: f64,
    pub reserve: Reserve,
    pub vertical: AxisLayout,
    pub horizontal: AxisLayout,
}

impl ScrollLayout {
    pub fn compute(container: Size, content: Size, config: &ScrollConfig) -> Self {
        let mode = config.mode;
        let thickness = match mode {
            ScrollbarMode::Invisible => 0.0,
            _ => config.scrollbar_thickness.max(0.0),
        };

        let (v_shown, h_shown) = match mode {
            ScrollbarMode::Invisible => (false, false),
            ScrollbarMode::AlwaysPresent => (true, true),
            ScrollbarMode::Normal => (
                content.height > container.height,
                content.width > container.width,
            ),
        };

        let reserve = Reserve {
            vertical: if v_shown { thickness } else { 0.0 },
            horizontal: if h_shown { thickness } else { 0.0 },
        };

        // An axis that fits the raw container never scrolls, unless its
        // scrollbar is always present and the reserved room hides content.
        let raw_max = compute_max_offset(container, content, reserve);
        let always = mode == ScrollbarMode::AlwaysPresent;
        let max_offset = Offset {
            top: if content.height > container.height || always {
                raw_max.top
            } else {
                0.0
            },
            left: if content.width > container.width || always {
                raw_max.left
            } else {
                0.0
            },
        };

        let available = Size::new(
            (container.width - reserve.vertical).max(0.0),
            (container.height - reserve.horizontal).max(0.0),
        );

        let axis_layout = |shown: bool, viewport: f64, content: f64, max_offset: f64| {
            if !shown {
                return AxisLayout {
                    shown,
                    max_offset,
                    viewport,
                    content,
                    ..AxisLayout::default()
                };
            }
            // Scrollbars run along the available viewport so they never
            // overlap in the corner.
            let track_length = viewport;
            let arrow_length = thickness.min(track_length / 2.0);
            AxisLayout {
                shown,
                max_offset,
                viewport,
                content,
                track_length,
                arrow_length,
                thumb_length: compute_thumb_length(
                    viewport,
                    content,
                    track_length,
                    arrow_length,
                    config.min_thumb_length,
                ),
            }
        };

        Self {
            container,
            content,
            thickness,
            reserve,
            vertical: axis_layout(v_shown, available.height, content.height, max_offset.top),
            horizontal: axis_layout(h_shown, available.width, content.width, max_offset.left),
        }
    }

    pub fn axis(&self, axis: Axis) -> &AxisLayout {
        match axis {
            Axis::Vertical => &self.vertical,
            Axis::Horizontal => &self.horizontal,
        }
    }

    pub fn max_offset(&self) -> Offset {
        Offset::new(self.vertical.max_offset, self.horizontal.max_offset)
    }

    pub fn available_viewport(&self) -> Size {
        Size::new(self.horizontal.viewport, self.vertical.viewport)
    }
}
