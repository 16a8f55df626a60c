use crate::geometry::{Rect, Size};

/// Visible area of a carousel, owned by the container and replaced on resize.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Negative or non-finite extents are stored as zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Bounds rect with the origin at zero.
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size())
    }
}

impl From<Size> for Viewport {
    fn from(size: Size) -> Self {
        Viewport::new(size.width, size.height)
    }
}

impl From<Rect> for Viewport {
    fn from(rect: Rect) -> Self {
        Viewport::new(rect.width(), rect.height())
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
