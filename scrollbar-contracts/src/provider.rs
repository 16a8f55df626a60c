/// What to render at a given index: the reuse identifier selects a registered
/// item type, `data` is handed to [`RenderableItem::configure`].
///
/// [`RenderableItem::configure`]: crate::item::RenderableItem::configure
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSpec<D> {
    pub reuse_identifier: String,
    pub data: D,
}

impl<D> ItemSpec<D> {
    pub fn new(reuse_identifier: impl Into<String>, data: D) -> Self {
        Self {
            reuse_identifier: reuse_identifier.into(),
            data,
        }
    }
}

/// Data source for a carousel. Queried lazily during layout and rendering.
pub trait ItemProvider {
    /// Payload used to configure a renderable item.
    type Data;

    /// Number of items in the carousel.
    fn item_count(&self) -> usize;

    /// Item to show at `index`. Only called for `index < item_count()`.
    fn item_at(&self, index: usize) -> ItemSpec<Self::Data>;
}

impl<P: ItemProvider + ?Sized> ItemProvider for Box<P> {
    type Data = P::Data;

    fn item_count(&self) -> usize {
        (**self).item_count()
    }

    fn item_at(&self, index: usize) -> ItemSpec<Self::Data> {
        (**self).item_at(index)
    }
}
