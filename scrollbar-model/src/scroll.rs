use crate::geometry::Point;

/// Scroll position as a fraction of the scrollable range, per axis.
///
/// A component is NaN when the content on that axis is not longer than the
/// viewport, i.e. when there is nothing to scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedOffset {
    pub x: f64,
    pub y: f64,
}

impl NormalizedOffset {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_scrollable_x(&self) -> bool {
        !self.x.is_nan()
    }
}

/// Snapped offset produced by the pagination engine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageTarget {
    /// Target content offset; `y` is carried over from the proposal.
    pub offset: Point,
    /// Page the offset snapped to. Equal to the raw fractional page when the
    /// engine returned the proposal unchanged.
    pub page_index: f64,
}

impl PageTarget {
    pub fn x(&self) -> f64 {
        self.offset.x
    }
}
