//! # Scrollbar Core
//!
//! Geometry engine behind a horizontally paginated, snap-scrolling carousel.
//!
//! ## Overview
//!
//! - **Pagination**: turns a proposed content offset and a release velocity
//!   into the offset of a page boundary
//! - **Item Sizing**: item width under a fixed-minimum or items-per-page policy
//! - **Layout**: item, separator and arrow frames for concrete bounds, plus
//!   arrow enablement from the scroll position
//! - **Carousel**: the stateful container that owns the frame, scroll offset
//!   and settings, and reports events to a consumer
//!
//! Rendering, animation and gesture recognition belong to the presentation
//! layer. It talks to the carousel through the traits in
//! `scrollbar-contracts`.
//!
//! ## Examples
//!
//! ```
//! use scrollbar_core::prelude::*;
//!
//! #[derive(Debug)]
//! struct Numbers(usize);
//!
//! impl ItemProvider for Numbers {
//!     type Data = usize;
//!
//!     fn item_count(&self) -> usize {
//!         self.0
//!     }
//!
//!     fn item_at(&self, index: usize) -> ItemSpec<usize> {
//!         ItemSpec::new("Number", index)
//!     }
//! }
//!
//! let mut carousel =
//!     ScrollbarCarousel::without_events(Numbers(7), ScrollbarSettings::paged_defaults());
//! carousel.set_frame(Rect::new(0.0, 0.0, 400.0, 100.0));
//!
//! assert_eq!(carousel.item_size(), Size::new(130.0, 100.0));
//! assert_eq!(carousel.page_forward(), Point::new(260.0, 0.0));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Paging arrow presentation state
pub mod arrows;
/// Stateful carousel container
pub mod carousel;
pub mod constants;
pub mod error;
/// Layout coordinator and the state derived from a layout pass
pub mod layout;
/// Snap-to-page computations
pub mod pagination;
/// Reuse-identifier registry for renderable items
pub mod registry;
pub mod scroll;
pub mod settings;
/// Item width calculator
pub mod sizing;

pub use arrows::{ArrowFade, ArrowState, ArrowStyle, HoverPhase, PagingArrows};
pub use carousel::ScrollbarCarousel;
pub use error::{Result, ScrollbarError};
pub use layout::LayoutCoordinator;
pub use pagination::{Pager, SnapDirection, compute_target_offset};
pub use registry::{ItemRegistry, RealizedItem};
pub use scroll::ScrollGeometry;
pub use settings::{Gutters, ScrollbarSettings};
pub use sizing::compute_item_width;

/// Everything a presentation layer needs to drive a carousel.
pub mod prelude {
    pub use crate::arrows::{ArrowFade, HoverPhase, PagingArrows};
    pub use crate::carousel::ScrollbarCarousel;
    pub use crate::error::ScrollbarError;
    pub use crate::settings::{Gutters, ScrollbarSettings};
    pub use scrollbar_contracts::prelude::*;
    pub use scrollbar_model::{
        ArrowDirection, ArrowEnablement, LayoutPass, NormalizedOffset, Point,
        Rect, Size, SizingPolicy, Viewport,
    };
}
