//! Pagination engine
//!
//! Converts a proposed content offset and a release velocity into the offset
//! of a page boundary. A page is `max(step_size, 1)` items; its width is the
//! item extent (item width + spacing) times that step. Everything here is a
//! pure function of its inputs.

use scrollbar_model::{PageTarget, Point};

use crate::constants::snap::{PAGE_INDEX_PRECISION, RELEASE_VELOCITY};

/// Which boundary a release snaps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapDirection {
    /// Near-zero velocity: the closest boundary.
    Nearest,
    /// Leftward flick: the next boundary to the left.
    Backward,
    /// Rightward flick: the next boundary to the right.
    Forward,
}

impl SnapDirection {
    /// Classify a horizontal velocity. NaN counts as a release.
    pub fn from_velocity(velocity_x: f64) -> Self {
        if velocity_x.is_nan() || velocity_x.abs() < RELEASE_VELOCITY {
            Self::Nearest
        } else if velocity_x < 0.0 {
            Self::Backward
        } else {
            Self::Forward
        }
    }
}

/// Items per snapping unit. A step of zero disables drag snapping but paging
/// still moves by one item.
#[inline]
pub fn effective_step(step_size: usize) -> usize {
    step_size.max(1)
}

/// Number of pages needed to cover `item_count` items.
#[inline]
pub fn page_count(item_count: usize, step_size: usize) -> usize {
    item_count.div_ceil(effective_step(step_size))
}

/// Round a fractional page index to one decimal to absorb float noise.
#[inline]
fn settle_page_index(raw: f64) -> f64 {
    (raw * PAGE_INDEX_PRECISION).round() / PAGE_INDEX_PRECISION
}

/// Snap a raw fractional page index in `direction`, bounded to
/// `[0, page_count]`.
///
/// Flicks settle the index to one decimal before taking ceil/floor. A release
/// rounds the raw index so 1.49 pages stays on page 1: settling first would
/// turn 1.49 into 1.5 and round it up to page 2.
pub fn snap_page_index(
    page_index: f64,
    direction: SnapDirection,
    page_count: usize,
) -> f64 {
    let last = page_count as f64;
    let snapped = match direction {
        SnapDirection::Nearest => page_index.round(),
        SnapDirection::Backward => {
            (settle_page_index(page_index).ceil() - 1.0).max(0.0)
        }
        SnapDirection::Forward => {
            (settle_page_index(page_index).floor() + 1.0).min(last)
        }
    };
    snapped.clamp(0.0, last)
}

/// Snapped horizontal offset for a release at `proposed_offset_x`.
///
/// `page_width` is the item extent already multiplied by the effective step.
/// Degenerate inputs (no pages, non-positive page width, non-finite proposal)
/// return the proposal unchanged. The result may exceed the scrollable range
/// by up to one page; callers clamp.
pub fn compute_target_offset(
    proposed_offset_x: f64,
    velocity_x: f64,
    page_width: f64,
    item_count: usize,
    step_size: usize,
) -> f64 {
    if !(page_width > 0.0 && page_width.is_finite())
        || item_count == 0
        || !proposed_offset_x.is_finite()
    {
        return proposed_offset_x;
    }

    let pages = page_count(item_count, step_size);
    let page_index = proposed_offset_x / page_width;
    let direction = SnapDirection::from_velocity(velocity_x);
    snap_page_index(page_index, direction, pages) * page_width
}

/// Snapping geometry of one carousel at one moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pager {
    /// Item width plus inter-item spacing.
    pub item_extent: f64,
    pub item_count: usize,
    /// Items per page; zero is treated as one.
    pub step_size: usize,
}

impl Pager {
    pub fn new(item_extent: f64, item_count: usize, step_size: usize) -> Self {
        Self {
            item_extent,
            item_count,
            step_size,
        }
    }

    /// Same geometry with a different step size.
    pub fn with_step(self, step_size: usize) -> Self {
        Self { step_size, ..self }
    }

    pub fn page_width(&self) -> f64 {
        self.item_extent * effective_step(self.step_size) as f64
    }

    pub fn page_count(&self) -> usize {
        page_count(self.item_count, self.step_size)
    }

    /// Snapped target for a release at `proposed`; `y` is carried over.
    pub fn target(&self, proposed: Point, velocity_x: f64) -> PageTarget {
        let page_width = self.page_width();
        let x = compute_target_offset(
            proposed.x,
            velocity_x,
            page_width,
            self.item_count,
            self.step_size,
        );
        let page_index = if page_width > 0.0 && page_width.is_finite() {
            x / page_width
        } else {
            0.0
        };
        tracing::trace!(
            proposed = proposed.x,
            velocity_x,
            page_width,
            target = x,
            "snapped page target"
        );
        PageTarget {
            offset: proposed.with_x(x),
            page_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn is_multiple_of(value: f64, unit: f64) -> bool {
        let ratio = value / unit;
        (ratio - ratio.round()).abs() < 1e-6
    }

    #[test]
    fn release_rounds_to_nearest_page() {
        assert_eq!(compute_target_offset(149.0, 0.0, 100.0, 7, 1), 100.0);
        assert_eq!(compute_target_offset(151.0, 0.1, 100.0, 7, 1), 200.0);
        assert_eq!(compute_target_offset(149.0, -0.19, 100.0, 7, 1), 100.0);
    }

    #[test]
    fn leftward_flick_goes_to_previous_boundary() {
        assert_eq!(compute_target_offset(250.0, -1.0, 100.0, 5, 1), 200.0);
        assert_eq!(compute_target_offset(200.0, -1.0, 100.0, 5, 1), 100.0);
        assert_eq!(compute_target_offset(30.0, -5.0, 100.0, 5, 1), 0.0);
        assert_eq!(compute_target_offset(0.0, -5.0, 100.0, 5, 1), 0.0);
    }

    #[test]
    fn rightward_flick_goes_to_next_boundary() {
        assert_eq!(compute_target_offset(250.0, 1.0, 100.0, 5, 1), 300.0);
        assert_eq!(compute_target_offset(200.0, 0.2, 100.0, 5, 1), 300.0);
        assert_eq!(compute_target_offset(480.0, 3.0, 100.0, 5, 1), 500.0);
        assert_eq!(compute_target_offset(500.0, 3.0, 100.0, 5, 1), 500.0);
    }

    #[test]
    fn float_noise_does_not_skip_a_page() {
        // 2.000145 pages must not ceil to 3 on a leftward flick.
        let target = compute_target_offset(200.0145, -1.0, 100.0, 7, 1);
        assert_eq!(target, 100.0);
    }

    #[test]
    fn step_size_groups_items_into_pages() {
        // 7 items in steps of 2 -> 4 pages of width 2 * 101.
        let pager = Pager::new(101.0, 7, 2);
        assert_eq!(pager.page_width(), 202.0);
        assert_eq!(pager.page_count(), 4);

        let target = pager.target(Point::new(250.0, 3.0), 1.0);
        assert_eq!(target.offset, Point::new(404.0, 3.0));
        assert!((target.page_index - 2.0).abs() < EPS);

        let last = pager.target(Point::new(800.0, 0.0), 1.0);
        assert_eq!(last.x(), 808.0);
    }

    #[test]
    fn zero_step_still_pages_by_one_item() {
        let pager = Pager::new(100.0, 7, 0);
        assert_eq!(pager.page_width(), 100.0);
        assert_eq!(pager.target(Point::new(0.0, 0.0), 1.0).x(), 100.0);
    }

    #[test]
    fn degenerate_inputs_return_the_proposal() {
        assert_eq!(compute_target_offset(123.0, 1.0, 0.0, 7, 1), 123.0);
        assert_eq!(compute_target_offset(123.0, 1.0, -5.0, 7, 1), 123.0);
        assert_eq!(compute_target_offset(123.0, 1.0, f64::NAN, 7, 1), 123.0);
        assert_eq!(compute_target_offset(123.0, -1.0, 100.0, 0, 1), 123.0);

        let target = Pager::new(0.0, 3, 1).target(Point::new(42.0, 1.0), 0.0);
        assert_eq!(target.offset, Point::new(42.0, 1.0));
        assert_eq!(target.page_index, 0.0);
    }

    #[test]
    fn nan_velocity_is_a_release() {
        assert_eq!(SnapDirection::from_velocity(f64::NAN), SnapDirection::Nearest);
        assert_eq!(compute_target_offset(149.0, f64::NAN, 100.0, 7, 1), 100.0);
    }

    #[test]
    fn output_is_a_bounded_page_multiple() {
        let extents = [37.5, 100.0, 161.0];
        let velocities = [-3.0, -0.5, -0.1, 0.0, 0.15, 0.5, 4.0];
        for &extent in &extents {
            for count in 1..=9usize {
                let upper = extent * page_count(count, 1) as f64;
                let mut proposed = -extent;
                while proposed <= upper + extent {
                    for &velocity in &velocities {
                        let target = compute_target_offset(
                            proposed, velocity, extent, count, 1,
                        );
                        assert!(is_multiple_of(target, extent));
                        assert!(target >= -EPS && target <= upper + EPS);
                    }
                    proposed += extent / 7.0;
                }
            }
        }
    }

    #[test]
    fn release_on_a_target_is_idempotent() {
        for proposed in [0.0, 37.0, 149.0, 250.0, 333.0, 499.0] {
            for velocity in [-2.0, 0.0, 2.0] {
                let first = compute_target_offset(proposed, velocity, 100.0, 5, 1);
                let second = compute_target_offset(first, 0.0, 100.0, 5, 1);
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn flicks_never_move_against_their_direction() {
        for tenth in 0..=50 {
            let proposed = tenth as f64 * 10.0;
            let left = compute_target_offset(proposed, -1.0, 100.0, 5, 1);
            let right = compute_target_offset(proposed, 1.0, 100.0, 5, 1);
            assert!(left <= proposed + EPS);
            assert!(right >= proposed - EPS);
        }
    }
}
