use scrollbar_model::Rect;

/// A cell the carousel can configure, place and recycle.
///
/// Implementations are registered under a reuse identifier and created by the
/// carousel's registry; they never subclass a base cell.
pub trait RenderableItem<D>: std::fmt::Debug {
    /// Apply the payload for the index this item now represents.
    fn configure(&mut self, data: D);

    /// Place the item's content inside `frame` (item-local coordinates).
    fn layout(&mut self, frame: Rect);

    /// Drop per-index state before the item goes back into the reuse pool.
    fn reset(&mut self);
}
