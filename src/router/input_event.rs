use crate::geometry::Point;
use crate::scroll::RegionId;

/// Framework-independent input consumed by the host
///
/// Points are in host surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Wheel { point: Point, delta_x: f64, delta_y: f64 },
    PointerDown { point: Point },
    PointerMove { point: Point },
    /// Observed globally: ends a drag wherever it happens
    PointerUp { point: Point },
    ScrollTo { region: RegionId, top: f64, left: f64 },
}
