//! Headless layout inspection
//!
//! Builds a single region from explicit measurements and reports what a
//! renderer would draw for it.

use crate::config::{ScrollConfig, ScrollbarMode};
use crate::error::ScrollsyncError;
use crate::geometry::Size;
use crate::render::RenderModel;
use crate::scroll::{RegionId, ScrollRegion};

/// Parse `WIDTHxHEIGHT`, e.g. `400x300`
pub fn parse_size(input: &str) -> Result<Size, ScrollsyncError> {
    let invalid = || ScrollsyncError::InvalidSize(input.to_string());

    let (width, height) = input
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(invalid)?;
    let width: f64 = width.trim().parse().map_err(|_| invalid())?;
    let height: f64 = height.trim().parse().map_err(|_| invalid())?;

    if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
        return Err(invalid());
    }
    Ok(Size::new(width, height))
}

/// One region's measurements and requested offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InspectRequest {
    pub container: Size,
    pub content: Size,
    pub top: f64,
    pub left: f64,
    pub mode: ScrollbarMode,
}

impl InspectRequest {
    /// Lay out with engine defaults, scroll, and describe the result
    ///
    /// The requested offset is clamped like any other absolute scroll.
    pub fn run(&self) -> RenderModel {
        let mut region = ScrollRegion::new(
            RegionId::new(1),
            ScrollConfig::default().with_mode(self.mode),
        );
        region.resize(Some(self.container), Some(self.content));
        region.apply_absolute(self.top, self.left);
        RenderModel::from_region(&region)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.run())
    }
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod inspect_tests;
