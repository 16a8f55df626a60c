use crate::geometry::{Rect, Size};

/// A separator decoration placed before the item at `index`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeparatorFrame {
    pub index: usize,
    /// Frame in content coordinates.
    pub frame: Rect,
    /// Draw order relative to the items, which sit at zero.
    pub z_index: i32,
}

/// Output of one layout pass over a carousel.
///
/// Frames of the container chrome (`collection_frame`, arrows, top separator)
/// are local to the container, whose origin is always zero. Item and separator frames are in
/// content coordinates, i.e. before the scroll offset is applied.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutPass {
    pub bounds: Rect,
    pub collection_frame: Rect,
    pub item_size: Size,
    /// Gap between two neighbouring items.
    pub spacing: f64,
    pub content_size: Size,
    pub item_frames: Vec<Rect>,
    pub separators: Vec<SeparatorFrame>,
    /// `None` when separators are hidden.
    pub top_separator: Option<Rect>,
    pub left_arrow_frame: Rect,
    pub right_arrow_frame: Rect,
}

impl LayoutPass {
    pub fn item_count(&self) -> usize {
        self.item_frames.len()
    }

    /// Item width plus spacing, the unit of horizontal snapping.
    pub fn item_extent(&self) -> f64 {
        self.item_size.width + self.spacing
    }

    /// Frame of the scrollable content, in content coordinates.
    pub fn content_frame(&self) -> Rect {
        Rect::from_size(self.content_size)
    }

    /// Largest horizontal content offset, zero when the content fits.
    pub fn max_scroll_x(&self) -> f64 {
        (self.content_size.width - self.collection_frame.width()).max(0.0)
    }
}
