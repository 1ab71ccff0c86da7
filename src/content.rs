//! Text content shown in a viewer pane

use std::fs;
use std::path::Path;

use ratatui::text::Line;

use crate::error::ScrollsyncError;
use crate::geometry::Size;

const TAB_WIDTH: usize = 4;

/// Lines of one pane plus their measured extent in cells
#[derive(Debug, Clone, PartialEq)]
pub struct PaneContent {
    pub title: String,
    pub lines: Vec<String>,
    width: usize,
}

impl PaneContent {
    /// Read a file as lossy UTF-8
    pub fn load(path: &Path) -> Result<Self, ScrollsyncError> {
        let bytes = fs::read(path).map_err(|source| ScrollsyncError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);

        #[cfg(debug_assertions)]
        log::debug!("Loaded {:?}: {} bytes", path, bytes.len());

        Ok(Self::from_text(path.display().to_string(), &text))
    }

    pub fn from_text(title: impl Into<String>, text: &str) -> Self {
        let lines: Vec<String> = text
            .lines()
            .map(|line| line.replace('\t', &" ".repeat(TAB_WIDTH)))
            .collect();
        let width = lines
            .iter()
            .map(|line| Line::raw(line.as_str()).width())
            .max()
            .unwrap_or(0);

        Self {
            title: title.into(),
            lines,
            width,
        }
    }

    /// Content size in cells: widest line by line count
    pub fn size(&self) -> Size {
        Size::new(self.width as f64, self.lines.len() as f64)
    }
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod content_tests;
