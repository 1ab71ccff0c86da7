mod app_events;
mod app_render;
mod app_state;
mod mouse_events;

// Re-export public types
pub use app_state::{App, Pane};
pub use mouse_events::to_input_event;
