//! Geometry calculator for scrollable regions
//!
//! Pure functions mapping container size, content size and scroll offset to
//! scrollbar geometry. Nothing in here holds state; `ScrollLayout` is a plain
//! value recomputed whenever a measurement or the scrollbar mode changes.

mod calculator;
mod geometry_types;
mod scroll_layout;

pub use calculator::{
    clamp, compute_max_offset, compute_thumb_length, compute_thumb_position,
    offset_delta_for_thumb_displacement,
};
pub use geometry_types::{Axis, Direction, Offset, Point, Rect, Reserve, Size};
pub use scroll_layout::{AxisLayout, ScrollLayout};
