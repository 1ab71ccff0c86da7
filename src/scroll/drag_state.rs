use crate::geometry::Axis;

/// Thumb drag lifecycle of one region
///
/// `Idle -> Dragging(axis) -> Idle`. Pointer moves while idle are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        axis: Axis,
        /// Pointer coordinate along `axis` when the drag started
        origin: f64,
        /// Offset along `axis` when the drag started
        offset_at_start: f64,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn axis(&self) -> Option<Axis> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { axis, .. } => Some(*axis),
        }
    }
}
