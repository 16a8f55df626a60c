//! Layout coordinator
//!
//! Applies the sizing calculator to concrete container bounds and derives the
//! state that hangs off a layout pass: item and separator frames, arrow
//! enablement, the visible item range and resize anchoring.

use std::ops::Range;

use scrollbar_model::{
    ArrowEnablement, LayoutPass, Rect, SeparatorFrame, Size, SizingPolicy,
};

use crate::constants::separators::{
    HEIGHT_RATIO, LINE_SPACING, TOP_HEIGHT, Z_INDEX,
};
use crate::settings::Gutters;
use crate::sizing::{compute_item_width, content_width};

/// Inter-item spacing for the given separator visibility.
pub fn spacing_for(shows_separators: bool) -> f64 {
    if shows_separators { LINE_SPACING } else { 0.0 }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutCoordinator {
    gutters: Gutters,
}

impl LayoutCoordinator {
    pub fn new(gutters: Gutters) -> Self {
        Self { gutters }
    }

    pub fn gutters(&self) -> Gutters {
        self.gutters
    }

    pub fn set_gutters(&mut self, gutters: Gutters) {
        self.gutters = gutters;
    }

    /// Frame of the scrolling area: `bounds` minus an arrow gutter per side.
    pub fn collection_frame(&self, bounds: Rect) -> Rect {
        bounds.inset_by(self.gutters.inset(), 0.0)
    }

    /// Item width for a scrolling area `available_width` wide. An empty
    /// carousel has zero-width items.
    pub fn item_width(
        &self,
        policy: SizingPolicy,
        available_width: f64,
        item_count: usize,
        spacing: f64,
    ) -> f64 {
        if item_count == 0 {
            return 0.0;
        }
        compute_item_width(policy, available_width, item_count, spacing)
    }

    /// Full layout of a carousel occupying `bounds`.
    ///
    /// Pure: the same inputs always produce the same pass.
    pub fn layout(
        &self,
        bounds: Rect,
        policy: SizingPolicy,
        item_count: usize,
        shows_separators: bool,
    ) -> LayoutPass {
        let spacing = spacing_for(shows_separators);
        let collection_frame = self.collection_frame(bounds);
        let item_size = Size::new(
            self.item_width(
                policy,
                collection_frame.width(),
                item_count,
                spacing,
            ),
            collection_frame.height(),
        );
        let item_frames = item_frames(item_size, item_count, spacing);
        let separators = if shows_separators {
            separator_frames(&item_frames, spacing)
        } else {
            Vec::new()
        };
        let content_size = Size::new(
            content_width(item_count, item_size.width, spacing).max(0.0),
            item_size.height,
        );

        let top_separator = shows_separators.then(|| {
            let mut frame = bounds.inset_by(self.gutters.arrow_width, 0.0);
            frame.size.height = TOP_HEIGHT;
            frame
        });
        let left_arrow_frame = Rect::new(
            bounds.min_x(),
            bounds.min_y(),
            self.gutters.arrow_width,
            bounds.height(),
        );
        let right_arrow_frame = Rect::new(
            collection_frame.max_x() + self.gutters.arrow_spacing,
            bounds.min_y(),
            self.gutters.arrow_width,
            bounds.height(),
        );

        tracing::debug!(
            %policy,
            item_count,
            width = bounds.width(),
            item_width = item_size.width,
            content_width = content_size.width,
            "carousel layout pass"
        );

        LayoutPass {
            bounds,
            collection_frame,
            item_size,
            spacing,
            content_size,
            item_frames,
            separators,
            top_separator,
            left_arrow_frame,
            right_arrow_frame,
        }
    }
}

/// Frames of `item_count` items laid out left to right in content
/// coordinates.
pub fn item_frames(item_size: Size, item_count: usize, spacing: f64) -> Vec<Rect> {
    let stride = item_size.width + spacing;
    (0..item_count)
        .map(|index| {
            Rect::new(
                index as f64 * stride,
                0.0,
                item_size.width,
                item_size.height,
            )
        })
        .collect()
}

/// One separator per item boundary, skipping the first item: `spacing` wide,
/// half the item height, vertically centred, right before the item's leading
/// edge.
pub fn separator_frames(item_frames: &[Rect], spacing: f64) -> Vec<SeparatorFrame> {
    item_frames
        .iter()
        .enumerate()
        .skip(1)
        .map(|(index, item)| {
            let height = item.height() * HEIGHT_RATIO;
            SeparatorFrame {
                index,
                frame: Rect::new(
                    item.min_x() - spacing,
                    item.min_y() + (item.height() - height) / 2.0,
                    spacing,
                    height,
                ),
                z_index: Z_INDEX,
            }
        })
        .collect()
}

/// Separators that overlap `rect` horizontally (content coordinates).
pub fn separators_in<'a>(
    pass: &'a LayoutPass,
    rect: Rect,
) -> impl Iterator<Item = &'a SeparatorFrame> + 'a {
    pass.separators
        .iter()
        .filter(move |separator| separator.frame.intersects_x(&rect))
}

/// Arrow enablement from the normalized horizontal offset.
///
/// NaN (content not longer than the viewport) disables both arrows.
pub fn derive_arrow_enablement(normalized_offset_x: f64) -> ArrowEnablement {
    if normalized_offset_x.is_nan() {
        return ArrowEnablement::DISABLED;
    }
    ArrowEnablement {
        left: normalized_offset_x > 0.0,
        right: normalized_offset_x < 1.0,
    }
}

/// Item offset to restore after a resize, if any.
///
/// Only dynamic carousels keep their anchor item: their item width follows the
/// viewport, so the same pixel offset would land on a different item. Fixed
/// carousels keep their pixel offset.
pub fn preserved_item_offset(
    old_item_offset: f64,
    policy: SizingPolicy,
) -> Option<f64> {
    (policy.is_dynamic() && !old_item_offset.is_nan()).then_some(old_item_offset)
}

/// Indices of the items intersecting a viewport `viewport_width` wide
/// scrolled to `offset_x`.
pub fn visible_range(
    pass: &LayoutPass,
    offset_x: f64,
    viewport_width: f64,
) -> Range<usize> {
    let total = pass.item_count();
    let stride = pass.item_extent();
    if total == 0 || stride <= 0.0 || viewport_width <= 0.0 {
        return 0..0;
    }
    let first = (offset_x.max(0.0) / stride).floor() as usize;
    let last = ((offset_x + viewport_width - 1e-6).max(0.0) / stride).floor()
        as usize;
    let start = first.min(total);
    let end = last.saturating_add(1).min(total);
    start..end
}

/// Item under a horizontal content coordinate. Gaps between items hit
/// nothing.
pub fn item_at(pass: &LayoutPass, content_x: f64) -> Option<usize> {
    let stride = pass.item_extent();
    if stride <= 0.0 || !content_x.is_finite() || content_x < 0.0 {
        return None;
    }
    let index = (content_x / stride).floor() as usize;
    pass.item_frames
        .get(index)
        .filter(|frame| frame.contains_x(content_x))
        .map(|_| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinator() -> LayoutCoordinator {
        LayoutCoordinator::new(Gutters::default())
    }

    #[test]
    fn collection_frame_reserves_arrow_gutters() {
        let frame = coordinator().collection_frame(Rect::new(0.0, 0.0, 460.0, 100.0));
        assert_eq!(frame, Rect::new(70.0, 0.0, 320.0, 100.0));
    }

    #[test]
    fn layout_sizes_items_from_the_collection_width() {
        let pass = coordinator().layout(
            Rect::new(0.0, 0.0, 460.0, 100.0),
            SizingPolicy::dynamic(2),
            7,
            false,
        );
        assert_eq!(pass.item_size, Size::new(160.0, 100.0));
        assert_eq!(pass.spacing, 0.0);
        assert_eq!(pass.content_size, Size::new(1120.0, 100.0));
        assert_eq!(pass.content_frame(), Rect::new(0.0, 0.0, 1120.0, 100.0));
        assert_eq!(pass.max_scroll_x(), 800.0);
        assert_eq!(pass.item_frames[3], Rect::new(480.0, 0.0, 160.0, 100.0));
        assert!(pass.separators.is_empty());
        assert!(pass.top_separator.is_none());
    }

    #[test]
    fn layout_places_arrows_beside_the_collection() {
        let pass = coordinator().layout(
            Rect::new(0.0, 0.0, 460.0, 80.0),
            SizingPolicy::fixed(150.0),
            3,
            true,
        );
        assert_eq!(pass.left_arrow_frame, Rect::new(0.0, 0.0, 50.0, 80.0));
        assert_eq!(pass.right_arrow_frame, Rect::new(410.0, 0.0, 50.0, 80.0));
        assert_eq!(pass.top_separator, Some(Rect::new(50.0, 0.0, 360.0, 1.0)));
    }

    #[test]
    fn separators_sit_before_every_item_but_the_first() {
        let pass = coordinator().layout(
            Rect::new(0.0, 0.0, 460.0, 100.0),
            SizingPolicy::fixed(150.0),
            4,
            true,
        );
        assert_eq!(pass.spacing, 1.0);
        assert_eq!(pass.separators.len(), 3);
        let first = pass.separators[0];
        assert_eq!(first.index, 1);
        assert_eq!(first.frame, Rect::new(150.0, 25.0, 1.0, 50.0));
        assert_eq!(first.z_index, i32::MAX);
        let item = pass.item_frames[first.index];
        assert_eq!(first.frame.max_x(), item.min_x());
    }

    #[test]
    fn empty_carousel_has_zero_width_items() {
        let pass = coordinator().layout(
            Rect::new(0.0, 0.0, 460.0, 100.0),
            SizingPolicy::dynamic(2),
            0,
            true,
        );
        assert_eq!(pass.item_size.width, 0.0);
        assert_eq!(pass.content_size.width, 0.0);
        assert!(pass.separators.is_empty());
    }

    #[test]
    fn layout_is_idempotent() {
        let bounds = Rect::new(0.0, 0.0, 390.0, 120.0);
        let first =
            coordinator().layout(bounds, SizingPolicy::fixed(150.0), 7, true);
        let second =
            coordinator().layout(bounds, SizingPolicy::fixed(150.0), 7, true);
        assert_eq!(first, second);
    }

    #[test]
    fn arrow_enablement_at_the_extremes() {
        assert_eq!(
            derive_arrow_enablement(0.0),
            ArrowEnablement { left: false, right: true }
        );
        assert_eq!(
            derive_arrow_enablement(1.0),
            ArrowEnablement { left: true, right: false }
        );
        assert_eq!(
            derive_arrow_enablement(0.4),
            ArrowEnablement { left: true, right: true }
        );
        assert_eq!(derive_arrow_enablement(f64::NAN), ArrowEnablement::DISABLED);
    }

    #[test]
    fn only_dynamic_policies_preserve_the_anchor_item() {
        assert_eq!(
            preserved_item_offset(2.5, SizingPolicy::dynamic(2)),
            Some(2.5)
        );
        assert_eq!(preserved_item_offset(2.5, SizingPolicy::fixed(150.0)), None);
        assert_eq!(
            preserved_item_offset(f64::NAN, SizingPolicy::dynamic(2)),
            None
        );
    }

    #[test]
    fn visible_range_and_hit_testing() {
        let pass = coordinator().layout(
            Rect::new(0.0, 0.0, 460.0, 100.0),
            SizingPolicy::fixed(150.0),
            7,
            true,
        );
        // stride 151, viewport 320
        assert_eq!(visible_range(&pass, 0.0, 320.0), 0..3);
        assert_eq!(visible_range(&pass, 151.0, 320.0), 1..4);
        assert_eq!(visible_range(&pass, 736.0, 320.0), 4..7);

        assert_eq!(item_at(&pass, 10.0), Some(0));
        assert_eq!(item_at(&pass, 150.5), None);
        assert_eq!(item_at(&pass, 151.0), Some(1));
        assert_eq!(item_at(&pass, 5_000.0), None);
        assert_eq!(item_at(&pass, -1.0), None);
    }

    #[test]
    fn separators_in_filters_by_overlap() {
        let pass = coordinator().layout(
            Rect::new(0.0, 0.0, 460.0, 100.0),
            SizingPolicy::fixed(150.0),
            7,
            true,
        );
        let visible: Vec<usize> = separators_in(&pass, Rect::new(0.0, 0.0, 320.0, 100.0))
            .map(|separator| separator.index)
            .collect();
        assert_eq!(visible, vec![1, 2]);
    }
}
