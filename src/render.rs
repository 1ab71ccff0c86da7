//! Renderer adapter
//!
//! Turns a region's logical scroll state into what any drawing layer needs:
//! the content translation and, per shown scrollbar, the track, thumb and
//! arrow rectangles in container-local coordinates.

mod render_model;

pub use render_model::{RenderModel, ScrollbarGeometry, Translation};
