//! Trait surfaces that describe how a carousel talks to its presentation layer.

pub mod events;
pub mod item;
pub mod provider;

/// Frequently used traits for presentation crates.
pub mod prelude {
    pub use super::events::{NoopEvents, ScrollbarEvents};
    pub use super::item::RenderableItem;
    pub use super::provider::{ItemProvider, ItemSpec};
}
