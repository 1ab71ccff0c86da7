use serde::Serialize;

/// Scroll axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Direction along an axis (toward the start or the end of the content)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Backward => -1.0,
            Direction::Forward => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }
}

/// Scroll position in content pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Offset {
    pub top: f64,
    pub left: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset {
        top: 0.0,
        left: 0.0,
    };

    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    pub fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.top,
            Axis::Horizontal => self.left,
        }
    }

    pub fn with(self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::Vertical => Offset { top: value, ..self },
            Axis::Horizontal => Offset {
                left: value,
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.y,
            Axis::Horizontal => self.x,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Space taken away from the viewport by shown scrollbars
///
/// `vertical` is the width eaten by a vertical scrollbar, `horizontal` the
/// height eaten by a horizontal one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Reserve {
    pub vertical: f64,
    pub horizontal: f64,
}
