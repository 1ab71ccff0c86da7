use serde::Serialize;

use crate::config::ScrollbarMode;
use crate::geometry::{Axis, AxisLayout, Offset, Point, Rect};
use crate::scroll::{RegionId, ScrollRegion};

/// Content translation applied by the drawing layer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Translation {
    pub x: f64,
    pub y: f64,
}

/// Rectangles making up one scrollbar
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollbarGeometry {
    pub axis: Axis,
    pub track: Rect,
    pub thumb: Rect,
    pub arrow_start: Rect,
    pub arrow_end: Rect,
}

impl ScrollbarGeometry {
    fn build(
        axis: Axis,
        layout: &AxisLayout,
        cross_start: f64,
        thickness: f64,
        offset: f64,
    ) -> Self {
        let thumb_start = layout.thumb_start(offset);
        let arrow = layout.arrow_length;
        let end = layout.track_length - arrow;

        // Lay out along the axis, then flip into x/y
        let span = |start: f64, length: f64| match axis {
            Axis::Vertical => Rect::new(cross_start, start, thickness, length),
            Axis::Horizontal => Rect::new(start, cross_start, length, thickness),
        };

        Self {
            axis,
            track: span(0.0, layout.track_length),
            thumb: span(thumb_start, layout.thumb_length),
            arrow_start: span(0.0, arrow),
            arrow_end: span(end, arrow),
        }
    }

    /// Coordinate of `point` along the track, measured from the track start
    pub fn along_track(&self, point: Point) -> f64 {
        match self.axis {
            Axis::Vertical => point.y - self.track.y,
            Axis::Horizontal => point.x - self.track.x,
        }
    }
}

/// Everything needed to draw one region for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    pub region: RegionId,
    pub mode: ScrollbarMode,
    pub offset: Offset,
    pub max_offset: Offset,
    pub content_transform: Translation,
    /// Visible content area, excluding reserved scrollbar room
    pub viewport: Rect,
    pub vertical: Option<ScrollbarGeometry>,
    pub horizontal: Option<ScrollbarGeometry>,
}

impl RenderModel {
    pub fn from_region(region: &ScrollRegion) -> Self {
        let layout = region.layout();
        let offset = region.offset();
        let available = layout.available_viewport();
        let container = region.container_size();

        // Nothing to draw until both measurements are in
        let (vertical, horizontal) = if region.is_ready() {
            (
                layout.vertical.shown.then(|| {
                    ScrollbarGeometry::build(
                        Axis::Vertical,
                        &layout.vertical,
                        container.width - layout.thickness,
                        layout.thickness,
                        offset.top,
                    )
                }),
                layout.horizontal.shown.then(|| {
                    ScrollbarGeometry::build(
                        Axis::Horizontal,
                        &layout.horizontal,
                        container.height - layout.thickness,
                        layout.thickness,
                        offset.left,
                    )
                }),
            )
        } else {
            (None, None)
        };

        Self {
            region: region.id(),
            mode: region.mode(),
            offset,
            max_offset: region.max_offset(),
            content_transform: Translation {
                x: -offset.left,
                y: -offset.top,
            },
            viewport: Rect::new(0.0, 0.0, available.width, available.height),
            vertical,
            horizontal,
        }
    }

    pub fn scrollbar(&self, axis: Axis) -> Option<&ScrollbarGeometry> {
        match axis {
            Axis::Vertical => self.vertical.as_ref(),
            Axis::Horizontal => self.horizontal.as_ref(),
        }
    }

    pub fn scrollbars(&self) -> impl Iterator<Item = &ScrollbarGeometry> {
        self.vertical.iter().chain(self.horizontal.iter())
    }
}
