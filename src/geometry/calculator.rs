use super::geometry_types::{Offset, Reserve, Size};

/// Standard clamp that never panics
///
/// Degenerates to `min` when `min > max` and maps NaN to `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if min > max || value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

/// Greatest valid offset on both axes
///
/// `reserve` must only carry the thickness of scrollbars that are currently
/// shown; the vertical scrollbar eats into the horizontal room and vice versa.
pub fn compute_max_offset(container: Size, content: Size, reserve: Reserve) -> Offset {
    Offset {
        top: (content.height - (container.height - reserve.horizontal)).max(0.0),
        left: (content.width - (container.width - reserve.vertical)).max(0.0),
    }
}

/// Thumb length for one axis
///
/// Proportional to the visible share of the content, measured on the track
/// between the two arrow buttons. Never shorter than `min_thumb` so it stays
/// grabbable, even if that makes it longer than a tiny track.
pub fn compute_thumb_length(
    viewport_available: f64,
    content_dim: f64,
    track_dim: f64,
    arrow_reserve: f64,
    min_thumb: f64,
) -> f64 {
    let inner_track = (track_dim - 2.0 * arrow_reserve).max(0.0);
    if content_dim <= 0.0 {
        return inner_track.max(min_thumb);
    }

    let proportional = viewport_available / content_dim * inner_track;
    proportional.min(inner_track).max(min_thumb)
}

/// Thumb position along the track, relative to the end of the start arrow
///
/// The offset ratio counts as 0 when nothing can scroll.
pub fn compute_thumb_position(
    offset: f64,
    max_offset: f64,
    track_dim: f64,
    thumb_length: f64,
    arrow_reserve: f64,
) -> f64 {
    let ratio = if max_offset > 0.0 {
        clamp(offset / max_offset, 0.0, 1.0)
    } else {
        0.0
    };
    ratio * (track_dim - thumb_length - 2.0 * arrow_reserve).max(0.0)
}

/// Inverse of `compute_thumb_position` for a thumb displacement
///
/// `scroll_area` is the distance the thumb can travel. Returns 0 when the
/// thumb cannot move at all.
pub fn offset_delta_for_thumb_displacement(
    displacement: f64,
    max_offset: f64,
    scroll_area: f64,
) -> f64 {
    if scroll_area <= 0.0 || !displacement.is_finite() {
        return 0.0;
    }
    displacement * max_offset / scroll_area
}
