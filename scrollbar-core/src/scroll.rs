//! Scroll geometry: the content offset of the scrolling area and its mappings
//! to normalized and item-index positions.

use scrollbar_model::{NormalizedOffset, Point, Size};

use crate::constants::snap::OFFSET_PRECISION;

#[inline]
fn round_offset(value: f64) -> f64 {
    (value * OFFSET_PRECISION).round() / OFFSET_PRECISION
}

/// Content offset plus the sizes that bound it.
///
/// The offset is kept inside `[0, content - viewport]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollGeometry {
    content_offset: Point,
    content_size: Size,
    viewport: Size,
}

impl ScrollGeometry {
    pub fn new(viewport: Size, content_size: Size) -> Self {
        Self {
            content_offset: Point::ZERO,
            content_size,
            viewport,
        }
    }

    pub fn content_offset(&self) -> Point {
        self.content_offset
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Largest horizontal offset, zero when the content fits.
    pub fn max_scroll_x(&self) -> f64 {
        (self.content_size.width - self.viewport.width).max(0.0)
    }

    pub fn max_scroll_y(&self) -> f64 {
        (self.content_size.height - self.viewport.height).max(0.0)
    }

    /// Clamp a horizontal offset into the scrollable range. Non-finite input
    /// maps to the start.
    pub fn clamp_x(&self, x: f64) -> f64 {
        if x.is_finite() {
            x.clamp(0.0, self.max_scroll_x())
        } else {
            0.0
        }
    }

    fn clamp_y(&self, y: f64) -> f64 {
        if y.is_finite() {
            y.clamp(0.0, self.max_scroll_y())
        } else {
            0.0
        }
    }

    /// Set the offset, clamped. Returns the offset actually applied.
    pub fn set_content_offset(&mut self, offset: Point) -> Point {
        self.content_offset =
            Point::new(self.clamp_x(offset.x), self.clamp_y(offset.y));
        self.content_offset
    }

    pub fn set_offset_x(&mut self, x: f64) -> f64 {
        self.set_content_offset(self.content_offset.with_x(x)).x
    }

    /// Replace both sizes and pull the offset back into the new range.
    pub fn resize(&mut self, viewport: Size, content_size: Size) {
        self.viewport = viewport;
        self.content_size = content_size;
        self.set_content_offset(self.content_offset);
    }

    /// Offset as a fraction of the scrollable range, rounded to two decimals.
    /// An axis without a scrollable range reports NaN.
    pub fn normalized_offset(&self) -> NormalizedOffset {
        let normalize = |offset: f64, content: f64, viewport: f64| {
            let range = content - viewport;
            if range > 0.0 && range.is_finite() {
                round_offset(offset / range)
            } else {
                f64::NAN
            }
        };
        NormalizedOffset::new(
            normalize(
                self.content_offset.x,
                self.content_size.width,
                self.viewport.width,
            ),
            normalize(
                self.content_offset.y,
                self.content_size.height,
                self.viewport.height,
            ),
        )
    }

    /// Move to a fraction of the scrollable range. NaN components leave that
    /// axis untouched.
    pub fn set_normalized_offset(&mut self, offset: NormalizedOffset) {
        let mut target = self.content_offset;
        if !offset.x.is_nan() {
            target.x = self.max_scroll_x() * offset.x;
        }
        if !offset.y.is_nan() {
            target.y = self.max_scroll_y() * offset.y;
        }
        self.set_content_offset(target);
    }

    /// Index of the first visible item plus the fraction of it scrolled off,
    /// rounded to two decimals. 7.5 means item 7 is half offscreen.
    ///
    /// NaN when `item_extent` is not positive.
    pub fn item_offset(&self, item_extent: f64) -> f64 {
        if item_extent > 0.0 && item_extent.is_finite() {
            round_offset(self.content_offset.x / item_extent)
        } else {
            f64::NAN
        }
    }

    /// Scroll so that `item_offset` is the first visible position. Ignored
    /// for NaN offsets or a non-positive extent.
    pub fn set_item_offset(&mut self, item_offset: f64, item_extent: f64) {
        if item_offset.is_nan() || item_extent.is_nan() || item_extent <= 0.0 {
            return;
        }
        self.set_offset_x(item_extent * item_offset);
    }
}
