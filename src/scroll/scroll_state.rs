use serde::Serialize;

use super::drag_state::DragState;
use crate::config::{ScrollConfig, ScrollbarMode, TrackClickPaging};
use crate::geometry::{
    Axis, Direction, Offset, Point, Rect, ScrollLayout, Size, clamp,
    offset_delta_for_thumb_displacement,
};

/// Handle of a mounted scroll region
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RegionId(u64);

impl RegionId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Change notification emitted when a region's offset moves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollChange {
    pub region: RegionId,
    pub position: Offset,
    pub max_offset: Offset,
}

impl ScrollChange {
    /// Offset divided by max offset per axis, 0 where nothing can scroll
    pub fn ratio(&self) -> Offset {
        ratio_of(self.position, self.max_offset)
    }
}

fn ratio_of(position: Offset, max_offset: Offset) -> Offset {
    let axis_ratio = |position: f64, max: f64| {
        if max > 0.0 {
            clamp(position / max, 0.0, 1.0)
        } else {
            0.0
        }
    };
    Offset::new(
        axis_ratio(position.top, max_offset.top),
        axis_ratio(position.left, max_offset.left),
    )
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// One independently scrollable viewport/content pair
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRegion {
    id: RegionId,
    config: ScrollConfig,
    origin: Point,
    container: Option<Size>,
    content: Option<Size>,
    layout: ScrollLayout,
    offset: Offset,
    drag: DragState,
}

impl ScrollRegion {
    pub fn new(id: RegionId, config: ScrollConfig) -> Self {
        Self {
            id,
            config,
            origin: Point::default(),
            container: None,
            content: None,
            layout: ScrollLayout::default(),
            offset: Offset::ZERO,
            drag: DragState::Idle,
        }
    }

    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn mode(&self) -> ScrollbarMode {
        self.config.mode
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn max_offset(&self) -> Offset {
        self.layout.max_offset()
    }

    pub fn layout(&self) -> &ScrollLayout {
        &self.layout
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn ratio(&self) -> Offset {
        ratio_of(self.offset, self.max_offset())
    }

    /// Container size, `{0,0}` while unmeasured
    pub fn container_size(&self) -> Size {
        self.container.unwrap_or_default()
    }

    /// Content size, `{0,0}` while unmeasured
    pub fn content_size(&self) -> Size {
        self.content.unwrap_or_default()
    }

    /// Both container and content have been measured
    pub fn is_ready(&self) -> bool {
        self.container.is_some() && self.content.is_some()
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Container rectangle in host surface coordinates
    pub fn bounds(&self) -> Rect {
        let size = self.container_size();
        Rect::new(self.origin.x, self.origin.y, size.width, size.height)
    }

    /// Translate a host surface point into container-local coordinates
    pub fn to_local(&self, point: Point) -> Point {
        Point::new(point.x - self.origin.x, point.y - self.origin.y)
    }

    /// Replace both measurements
    ///
    /// A missing measurement is kept as unmeasured and recomputation is
    /// deferred until both sides are known.
    pub fn resize(
        &mut self,
        container: Option<Size>,
        content: Option<Size>,
    ) -> Option<ScrollChange> {
        self.container = container;
        self.content = content;
        self.relayout()
    }

    pub fn set_container_size(&mut self, container: Size) -> Option<ScrollChange> {
        self.resize(Some(container), self.content)
    }

    pub fn set_content_size(&mut self, content: Size) -> Option<ScrollChange> {
        self.resize(self.container, Some(content))
    }

    pub fn set_mode(&mut self, mode: ScrollbarMode) -> Option<ScrollChange> {
        self.set_config(self.config.with_mode(mode))
    }

    pub fn set_config(&mut self, config: ScrollConfig) -> Option<ScrollChange> {
        self.config = config;
        self.relayout()
    }

    fn relayout(&mut self) -> Option<ScrollChange> {
        let (Some(container), Some(content)) = (self.container, self.content) else {
            #[cfg(debug_assertions)]
            log::debug!("Region {:?} not measured yet, layout deferred", self.id);
            return None;
        };

        self.layout = ScrollLayout::compute(container, content, &self.config);
        self.set_offset(self.offset)
    }

    /// Clamp `target` into range and store it
    ///
    /// Returns a change only when the stored offset actually moved.
    fn set_offset(&mut self, target: Offset) -> Option<ScrollChange> {
        let max = self.max_offset();
        let clamped = Offset::new(
            clamp(target.top, 0.0, max.top),
            clamp(target.left, 0.0, max.left),
        );

        if clamped == self.offset {
            return None;
        }

        self.offset = clamped;
        Some(ScrollChange {
            region: self.id,
            position: clamped,
            max_offset: max,
        })
    }

    fn set_axis_offset(&mut self, axis: Axis, value: f64) -> Option<ScrollChange> {
        self.set_offset(self.offset.with(axis, value))
    }

    /// Add a wheel delta, clamping silently
    pub fn apply_wheel_delta(&mut self, delta_x: f64, delta_y: f64) -> Option<ScrollChange> {
        self.set_offset(Offset::new(
            self.offset.top + finite_or_zero(delta_y),
            self.offset.left + finite_or_zero(delta_x),
        ))
    }

    /// Externally driven scroll-to
    pub fn apply_absolute(&mut self, top: f64, left: f64) -> Option<ScrollChange> {
        self.set_offset(Offset::new(finite_or_zero(top), finite_or_zero(left)))
    }

    pub fn scroll_to_top(&mut self) -> Option<ScrollChange> {
        self.apply_absolute(0.0, self.offset.left)
    }

    pub fn scroll_to_bottom(&mut self) -> Option<ScrollChange> {
        self.apply_absolute(self.max_offset().top, self.offset.left)
    }

    /// Move one available-viewport length along `axis`
    pub fn page(&mut self, axis: Axis, direction: Direction) -> Option<ScrollChange> {
        let page = self.layout.axis(axis).viewport;
        let current = self.offset.along(axis);
        self.set_axis_offset(axis, current + direction.sign() * page)
    }

    pub fn begin_thumb_drag(&mut self, axis: Axis, pointer: Point) {
        #[cfg(debug_assertions)]
        log::debug!("Region {:?} begins {:?} thumb drag", self.id, axis);

        self.drag = DragState::Dragging {
            axis,
            origin: pointer.along(axis),
            offset_at_start: self.offset.along(axis),
        };
    }

    /// Move the offset by the pointer displacement since the drag began
    ///
    /// No-op while idle.
    pub fn update_thumb_drag(&mut self, pointer: Point) -> Option<ScrollChange> {
        let DragState::Dragging {
            axis,
            origin,
            offset_at_start,
        } = self.drag
        else {
            return None;
        };

        let axis_layout = self.layout.axis(axis);
        let delta = offset_delta_for_thumb_displacement(
            pointer.along(axis) - origin,
            axis_layout.max_offset,
            axis_layout.scroll_area(),
        );
        self.set_axis_offset(axis, offset_at_start + delta)
    }

    pub fn end_thumb_drag(&mut self) {
        #[cfg(debug_assertions)]
        {
            if self.drag.is_dragging() {
                log::debug!("Region {:?} ends thumb drag", self.id);
            }
        }

        self.drag = DragState::Idle;
    }

    /// Click on the track at `coordinate`, measured from the track start
    ///
    /// Clicks on the thumb are ignored.
    pub fn handle_track_click(&mut self, axis: Axis, coordinate: f64) -> Option<ScrollChange> {
        let axis_layout = *self.layout.axis(axis);
        if !axis_layout.shown || axis_layout.track_length <= 0.0 {
            return None;
        }

        let current = self.offset.along(axis);
        let thumb_start = axis_layout.thumb_start(current);
        let thumb_end = thumb_start + axis_layout.thumb_length;
        if coordinate >= thumb_start && coordinate <= thumb_end {
            return None;
        }

        let target = match self.config.track_click_paging {
            TrackClickPaging::JumpToRatio => {
                let ratio = clamp(coordinate / axis_layout.track_length, 0.0, 1.0);
                ratio * axis_layout.max_offset - self.config.arrow_step / 2.0
            }
            TrackClickPaging::PageByViewport => {
                if coordinate < thumb_start {
                    current - axis_layout.viewport
                } else {
                    current + axis_layout.viewport
                }
            }
        };
        self.set_axis_offset(axis, target)
    }

    pub fn handle_arrow_click(&mut self, axis: Axis, direction: Direction) -> Option<ScrollChange> {
        let current = self.offset.along(axis);
        self.set_axis_offset(axis, current + direction.sign() * self.config.arrow_step)
    }
}
