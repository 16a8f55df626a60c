//! Carousel constants
//!
//! Geometry and interaction defaults shared by every carousel. Tuning should
//! happen here so all carousels update consistently.

/// Chrome reserved on each side of the scrolling area for the paging arrows.
pub mod gutters {
    /// Width of one paging arrow.
    pub const ARROW_WIDTH: f64 = 50.0;
    /// Gap between an arrow and the scrolling area.
    pub const ARROW_SPACING: f64 = 20.0;
}

/// Separator decorations.
pub mod separators {
    /// Inter-item spacing while separators are shown; zero otherwise.
    pub const LINE_SPACING: f64 = 1.0;
    /// Separator height as a fraction of the item height.
    pub const HEIGHT_RATIO: f64 = 0.5;
    /// Height of the hairline above the scrolling area.
    pub const TOP_HEIGHT: f64 = 1.0;
    /// Separators draw above items.
    pub const Z_INDEX: i32 = i32::MAX;
}

/// Pagination engine tuning.
pub mod snap {
    /// Velocities below this magnitude are a release, not a flick.
    pub const RELEASE_VELOCITY: f64 = 0.2;
    /// Fractional page indices are rounded to one decimal (x10) before
    /// branching so 2.000145 does not round up on a leftward flick.
    pub const PAGE_INDEX_PRECISION: f64 = 10.0;
    /// Normalized and item offsets are rounded to two decimals (x100).
    pub const OFFSET_PRECISION: f64 = 100.0;
}

/// Paging arrow presentation.
pub mod arrows {
    /// Largest box the chevron may occupy inside the arrow frame.
    pub const MAX_CHEVRON_WIDTH: f64 = 14.0;
    pub const MAX_CHEVRON_HEIGHT: f64 = 50.0;
    /// Stroke width of an idle arrow; pressed arrows add one point.
    pub const LINE_WIDTH: f64 = 2.0;
    /// Duration of the autohide fade on hover.
    pub const HOVER_FADE_MS: u64 = 250;
}
