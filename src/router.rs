//! Input routing
//!
//! `ScrollHost` owns every mounted region and sync group, routes wheel and
//! pointer events to the region under the pointer, and fans each resulting
//! change out to the region's sync group within the same call.

mod input_event;
mod scroll_host;

pub use hit_test::{ScrollbarHit, ScrollbarPart, hit_test};
pub use input_event::InputEvent;
pub use scroll_host::ScrollHost;
