//! Tests for PaneContent

use std::fs;

use tempfile::TempDir;

use super::*;
use crate::error::ScrollsyncError;

#[test]
fn test_size_is_widest_line_by_count() {
    let content = PaneContent::from_text("t", "ab\nabcdef\n\nxyz");

    assert_eq!(content.size(), Size::new(6.0, 4.0));
    assert_eq!(content.lines.len(), 4);
}

#[test]
fn test_tabs_expand() {
    let content = PaneContent::from_text("t", "\tx");

    assert_eq!(content.lines[0], "    x");
    assert_eq!(content.size().width, 5.0);
}

#[test]
fn test_wide_characters_measured_in_cells() {
    let content = PaneContent::from_text("t", "日本");

    assert_eq!(content.size().width, 4.0);
}

#[test]
fn test_empty_text() {
    let content = PaneContent::from_text("empty", "");

    assert_eq!(content.size(), Size::ZERO);
}

#[test]
fn test_load_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "one\ntwo\nthree\n").unwrap();

    let content = PaneContent::load(&path).unwrap();

    assert_eq!(content.lines.len(), 3);
    assert!(content.title.ends_with("notes.txt"));
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.txt");

    let err = PaneContent::load(&path).unwrap_err();

    assert!(matches!(err, ScrollsyncError::Io { .. }));
    assert!(err.to_string().contains("missing.txt"));
}
