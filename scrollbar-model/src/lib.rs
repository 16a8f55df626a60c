//! Core data model definitions shared across the scrollbar crates.
#![allow(missing_docs)]

pub mod arrow;
pub mod geometry;
pub mod layout;
pub mod scroll;
pub mod sizing;
pub mod viewport;

pub use arrow::{ArrowDirection, ArrowEnablement};
pub use geometry::{Point, Rect, Size};
pub use layout::{LayoutPass, SeparatorFrame};
pub use scroll::{NormalizedOffset, PageTarget};
pub use sizing::SizingPolicy;
pub use viewport::Viewport;
