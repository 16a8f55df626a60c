//! Item sizing calculator
//!
//! Derives the width of every item from the width available to the scrolling
//! area, the item count, the inter-item spacing and the sizing policy.

use scrollbar_model::SizingPolicy;

/// Width of one item under `policy`.
///
/// - `Dynamic(n)`: `n` items fill `available_width` exactly. The result is not
///   clamped and may be zero or negative for very narrow viewports. `n == 0`
///   is treated as one item per page.
/// - `Fixed(min)`: `min`, unless the whole content is narrower than the
///   available width, in which case the items stretch to fill it. With zero
///   items the content is a single `min`-wide item.
pub fn compute_item_width(
    policy: SizingPolicy,
    available_width: f64,
    item_count: usize,
    spacing: f64,
) -> f64 {
    match policy {
        SizingPolicy::Dynamic { items_per_page } => {
            let per_page = items_per_page.max(1) as f64;
            (available_width - (per_page - 1.0) * spacing) / per_page
        }
        SizingPolicy::Fixed { minimum_item_width } => {
            let count = item_count.max(1) as f64;
            let gaps = count - 1.0;
            let content_width =
                (minimum_item_width + spacing) * gaps + minimum_item_width;
            if available_width > content_width {
                (available_width - gaps * spacing) / count
            } else {
                minimum_item_width
            }
        }
    }
}

/// Total width of `item_count` items of `item_width` separated by `spacing`.
pub fn content_width(item_count: usize, item_width: f64, spacing: f64) -> f64 {
    if item_count == 0 {
        return 0.0;
    }
    let count = item_count as f64;
    count * item_width + (count - 1.0) * spacing
}
