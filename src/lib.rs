//! scrollsync library - Scroll synchronization engine
//!
//! Virtualized scroll regions with custom scrollbars, pointer and wheel
//! routing, and proportional scroll sync across panels. The terminal viewer
//! in the binary is one host of the engine.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod geometry;
pub mod inspect;
pub mod render;
pub mod router;
pub mod scroll;
pub mod sync;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::{Config, ScrollConfig, ScrollbarMode};
pub use router::{InputEvent, ScrollHost};
pub use scroll::{RegionId, ScrollChange, ScrollRegion};
pub use sync::{GroupId, SyncGroup};
