//! Tests for headless inspection

use super::*;
use crate::geometry::Offset;

fn request(container: Size, content: Size, top: f64) -> InspectRequest {
    InspectRequest {
        container,
        content,
        top,
        left: 0.0,
        mode: ScrollbarMode::Normal,
    }
}

#[test]
fn test_parse_size() {
    assert_eq!(parse_size("400x300").unwrap(), Size::new(400.0, 300.0));
    assert_eq!(parse_size(" 12.5X7 ").unwrap(), Size::new(12.5, 7.0));
}

#[test]
fn test_parse_size_rejects_malformed() {
    for input in ["", "400", "x300", "400x", "axb", "-1x5", "400x300x2", "NaNx1"] {
        let err = parse_size(input).unwrap_err();
        assert!(
            matches!(err, ScrollsyncError::InvalidSize(ref s) if s == input),
            "expected InvalidSize for {:?}",
            input
        );
    }
}

#[test]
fn test_run_clamps_requested_offset() {
    let model = request(Size::new(400.0, 300.0), Size::new(400.0, 1200.0), 5000.0).run();

    assert_eq!(model.offset, Offset::new(900.0, 0.0));
    assert_eq!(model.max_offset, Offset::new(900.0, 0.0));
}

#[test]
fn test_run_respects_mode() {
    let mut req = request(Size::new(400.0, 300.0), Size::new(400.0, 1200.0), 0.0);
    req.mode = ScrollbarMode::Invisible;

    assert_eq!(req.run().scrollbars().count(), 0);
}

#[test]
fn test_to_json() {
    let json = request(Size::new(400.0, 300.0), Size::new(400.0, 1200.0), 450.0)
        .to_json()
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["offset"]["top"], 450.0);
    assert_eq!(value["max_offset"]["top"], 900.0);
    assert_eq!(value["content_transform"]["y"], -450.0);
}
