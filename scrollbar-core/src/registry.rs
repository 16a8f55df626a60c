//! Item registration and reuse
//!
//! Maps reuse identifiers to factories of renderable items and keeps a pool
//! of recycled items per identifier.

use std::collections::HashMap;
use std::fmt;

use scrollbar_contracts::item::RenderableItem;
use scrollbar_model::Rect;

use crate::error::{Result, ScrollbarError};

type ItemFactory<D> = Box<dyn Fn() -> Box<dyn RenderableItem<D>>>;

pub struct ItemRegistry<D> {
    factories: HashMap<String, ItemFactory<D>>,
    pool: HashMap<String, Vec<Box<dyn RenderableItem<D>>>>,
}

impl<D: 'static> ItemRegistry<D> {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
            pool: HashMap::new(),
        }
    }

    /// Register (or replace) the item type built for `identifier`.
    pub fn register<F, I>(&mut self, identifier: impl Into<String>, factory: F)
    where
        F: Fn() -> I + 'static,
        I: RenderableItem<D> + 'static,
    {
        let identifier = identifier.into();
        tracing::debug!(%identifier, "registered carousel item type");
        // Pooled items were built by the previous factory.
        self.pool.remove(&identifier);
        self.factories.insert(
            identifier,
            Box::new(move || Box::new(factory()) as Box<dyn RenderableItem<D>>),
        );
    }

    pub fn is_registered(&self, identifier: &str) -> bool {
        self.factories.contains_key(identifier)
    }

    /// A recycled item for `identifier`, or a fresh one from its factory.
    pub fn dequeue(
        &mut self,
        identifier: &str,
    ) -> Result<Box<dyn RenderableItem<D>>> {
        if let Some(item) =
            self.pool.get_mut(identifier).and_then(|pool| pool.pop())
        {
            return Ok(item);
        }
        let factory = self.factories.get(identifier).ok_or_else(|| {
            ScrollbarError::UnregisteredItem {
                identifier: identifier.to_string(),
            }
        })?;
        Ok(factory())
    }

    /// Reset `item` and return it to the pool of `identifier`.
    pub fn recycle(
        &mut self,
        identifier: impl Into<String>,
        mut item: Box<dyn RenderableItem<D>>,
    ) {
        item.reset();
        self.pool.entry(identifier.into()).or_default().push(item);
    }

    /// Number of recycled items waiting for reuse under `identifier`.
    pub fn pooled(&self, identifier: &str) -> usize {
        self.pool.get(identifier).map_or(0, Vec::len)
    }
}

impl<D: 'static> Default for ItemRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for ItemRegistry<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut identifiers: Vec<&String> = self.factories.keys().collect();
        identifiers.sort();
        f.debug_struct("ItemRegistry")
            .field("identifiers", &identifiers)
            .field(
                "pooled",
                &self.pool.values().map(Vec::len).sum::<usize>(),
            )
            .finish()
    }
}

/// An item currently placed in the carousel.
pub struct RealizedItem<D> {
    pub index: usize,
    pub reuse_identifier: String,
    /// Frame in content coordinates.
    pub frame: Rect,
    pub item: Box<dyn RenderableItem<D>>,
}

impl<D> fmt::Debug for RealizedItem<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RealizedItem")
            .field("index", &self.index)
            .field("reuse_identifier", &self.reuse_identifier)
            .field("frame", &self.frame)
            .field("item", &self.item)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Label {
        text: Option<String>,
        frame: Rect,
    }

    impl RenderableItem<String> for Label {
        fn configure(&mut self, data: String) {
            self.text = Some(data);
        }

        fn layout(&mut self, frame: Rect) {
            self.frame = frame;
        }

        fn reset(&mut self) {
            self.text = None;
        }
    }

    #[test]
    fn unregistered_identifier_is_an_error() {
        let mut registry = ItemRegistry::<String>::new();
        let err = registry.dequeue("Cell").unwrap_err();
        assert_eq!(
            err,
            ScrollbarError::UnregisteredItem {
                identifier: "Cell".into()
            }
        );
    }

    #[test]
    fn recycled_items_are_reset_and_reused() {
        let mut registry = ItemRegistry::<String>::new();
        registry.register("Cell", Label::default);
        assert!(registry.is_registered("Cell"));

        let mut item = registry.dequeue("Cell").unwrap();
        item.configure("1".to_string());
        registry.recycle("Cell", item);
        assert_eq!(registry.pooled("Cell"), 1);

        let reused = registry.dequeue("Cell").unwrap();
        assert_eq!(registry.pooled("Cell"), 0);
        assert!(format!("{reused:?}").contains("text: None"));
    }

    #[test]
    fn reregistering_drops_the_old_pool() {
        let mut registry = ItemRegistry::<String>::new();
        registry.register("Cell", Label::default);
        let item = registry.dequeue("Cell").unwrap();
        registry.recycle("Cell", item);
        registry.register("Cell", Label::default);
        assert_eq!(registry.pooled("Cell"), 0);
    }
}
