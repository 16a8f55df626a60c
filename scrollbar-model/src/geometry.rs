//! Toolkit-independent geometry primitives.
//!
//! All values are logical points in `f64`. Rects are origin + size with the
//! origin at the top-left corner.

/// A location in a 2D coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Same point with the horizontal component replaced.
    pub const fn with_x(self, x: f64) -> Self {
        Self { x, y: self.y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
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
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Rect at the origin with the given size.
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::ZERO,
            size,
        }
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Shrink (or grow, for negative values) the rect symmetrically.
    ///
    /// Insetting past the centre collapses the affected axis to zero at the
    /// midpoint instead of producing a negative size.
    pub fn inset_by(&self, dx: f64, dy: f64) -> Rect {
        let width = self.size.width - 2.0 * dx;
        let height = self.size.height - 2.0 * dy;
        let (x, width) = if width < 0.0 {
            (self.origin.x + self.size.width / 2.0, 0.0)
        } else {
            (self.origin.x + dx, width)
        };
        let (y, height) = if height < 0.0 {
            (self.origin.y + self.size.height / 2.0, 0.0)
        } else {
            (self.origin.y + dy, height)
        };
        Rect::new(x, y, width, height)
    }

    /// Half-open containment on the horizontal axis.
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.min_x() && x < self.max_x()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.contains_x(point.x)
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    /// True when the two rects overlap with a non-empty area on the x axis.
    pub fn intersects_x(&self, other: &Rect) -> bool {
        self.min_x() < other.max_x() && other.min_x() < self.max_x()
    }
}
