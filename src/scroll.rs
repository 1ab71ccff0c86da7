//! Per-region scroll state
//!
//! A `ScrollRegion` owns the offset and drag state of one scrollable area.
//! Every mutation clamps to `[0, max_offset]`; operations that move the
//! offset hand back a `ScrollChange` for the host to forward.

mod drag_state;
mod scroll_state;

pub use drag_state::DragState;
pub use scroll_state::{RegionId, ScrollChange, ScrollRegion};
