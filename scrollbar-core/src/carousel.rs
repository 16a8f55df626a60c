//! ScrollbarCarousel: the container that owns a carousel's frame, scroll
//! position and settings, and routes interaction through the pagination
//! engine and layout coordinator.
//!
//! All methods run synchronously on the owning (UI) thread. Every call that
//! changes geometry finishes with a fresh layout pass or arrow update, so the
//! state observed after any call is consistent.

use std::fmt;
use std::ops::Range;

use scrollbar_contracts::events::{NoopEvents, ScrollbarEvents};
use scrollbar_contracts::item::RenderableItem;
use scrollbar_contracts::provider::ItemProvider;
use scrollbar_model::{
    ArrowDirection, ArrowEnablement, LayoutPass, NormalizedOffset, Point, Rect,
    Size, SizingPolicy, Viewport,
};

use crate::arrows::{ArrowFade, HoverPhase, PagingArrows};
use crate::error::{Result, ScrollbarError};
use crate::layout::{
    LayoutCoordinator, derive_arrow_enablement, item_at, preserved_item_offset,
    spacing_for, visible_range,
};
use crate::pagination::{Pager, effective_step};
use crate::registry::{ItemRegistry, RealizedItem};
use crate::scroll::ScrollGeometry;
use crate::settings::{Gutters, ScrollbarSettings};

pub struct ScrollbarCarousel<P: ItemProvider, E = NoopEvents> {
    settings: ScrollbarSettings,
    coordinator: LayoutCoordinator,
    bounds: Rect,
    item_count: usize,
    pass: LayoutPass,
    scroll: ScrollGeometry,
    arrows: PagingArrows,
    dragging: bool,
    provider: P,
    events: E,
    registry: ItemRegistry<P::Data>,
    realized: Vec<RealizedItem<P::Data>>,
}

impl<P> ScrollbarCarousel<P, NoopEvents>
where
    P: ItemProvider,
    P::Data: 'static,
{
    /// Carousel without an event sink.
    pub fn without_events(provider: P, settings: ScrollbarSettings) -> Self {
        Self::new(provider, NoopEvents, settings)
    }
}

impl<P, E> ScrollbarCarousel<P, E>
where
    P: ItemProvider,
    P::Data: 'static,
    E: ScrollbarEvents,
{
    /// Create a carousel with an empty frame. Call [`Self::set_frame`] once the
    /// container knows its bounds.
    pub fn new(provider: P, events: E, settings: ScrollbarSettings) -> Self {
        let item_count = provider.item_count();
        let mut carousel = Self {
            settings,
            coordinator: LayoutCoordinator::new(settings.gutters),
            bounds: Rect::ZERO,
            item_count,
            pass: LayoutPass::default(),
            scroll: ScrollGeometry::default(),
            arrows: PagingArrows::new(
                settings.shows_arrows,
                settings.autohide_arrows,
            ),
            dragging: false,
            provider,
            events,
            registry: ItemRegistry::new(),
            realized: Vec::new(),
        };
        carousel.layout_in_frame(Rect::ZERO);
        carousel
    }

    // ========== LAYOUT ==========

    /// Resize the carousel and run a layout pass.
    pub fn set_frame(&mut self, bounds: Rect) {
        self.layout_in_frame(bounds);
    }

    pub fn frame(&self) -> Rect {
        self.bounds
    }

    /// Rerun the layout pass for the current frame.
    pub fn invalidate_layout(&mut self) {
        self.layout_in_frame(self.bounds);
    }

    /// Re-query the item count from the provider and lay out again.
    pub fn reload_data(&mut self) {
        self.recycle_realized();
        self.item_count = self.provider.item_count();
        tracing::debug!(item_count = self.item_count, "reloaded carousel data");
        self.invalidate_layout();
    }

    /// Lay out for `bounds`. The frames of the layout pass are local to the
    /// carousel: they start at the origin whatever the position of `bounds`
    /// in the parent.
    fn layout_in_frame(&mut self, bounds: Rect) {
        let old_extent = self.pass.item_extent();
        let item_offset = self.scroll.item_offset(old_extent);
        let old_offset = self.scroll.content_offset();

        self.bounds = bounds;
        self.pass = self.coordinator.layout(
            Rect::from_size(bounds.size),
            self.settings.sizing,
            self.item_count,
            self.settings.shows_separators,
        );
        self.scroll
            .resize(self.viewport().size(), self.pass.content_size);

        // Re-anchor only when the item extent changed, so repeated passes over
        // the same frame leave the offset alone.
        let new_extent = self.pass.item_extent();
        if (new_extent - old_extent).abs() > f64::EPSILON
            && let Some(anchor) =
                preserved_item_offset(item_offset, self.settings.sizing)
        {
            self.scroll.set_item_offset(anchor, new_extent);
            tracing::debug!(
                anchor,
                offset = self.scroll.content_offset().x,
                "restored anchor item after resize"
            );
        }

        self.update_arrow_availability();

        let offset = self.scroll.content_offset();
        if offset != old_offset {
            self.events.did_scroll(offset);
        }
    }

    /// Item size this carousel would use inside `frame`. Consumers use it to
    /// size the container ahead of layout, e.g. to keep an aspect ratio.
    ///
    /// The width is computed from the full width of `frame`; the height is
    /// the current scrolling area height.
    pub fn calculate_item_size(&self, frame: Rect) -> Size {
        let width = self.coordinator.item_width(
            self.settings.sizing,
            frame.width(),
            self.item_count,
            spacing_for(self.settings.shows_separators),
        );
        Size::new(width, self.pass.collection_frame.height())
    }

    /// Visible area of the scrolling content.
    pub fn viewport(&self) -> Viewport {
        Viewport::from(self.pass.collection_frame)
    }

    pub fn layout(&self) -> &LayoutPass {
        &self.pass
    }

    pub fn item_size(&self) -> Size {
        self.pass.item_size
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    // ========== SETTINGS ==========

    pub fn settings(&self) -> &ScrollbarSettings {
        &self.settings
    }

    /// Replace all settings at once and lay out again.
    pub fn apply_settings(&mut self, settings: ScrollbarSettings) {
        self.settings = settings;
        self.coordinator.set_gutters(settings.gutters);
        self.arrows.set_shows_arrows(settings.shows_arrows);
        self.arrows.set_autohide(settings.autohide_arrows);
        self.invalidate_layout();
    }

    pub fn set_sizing_policy(&mut self, sizing: SizingPolicy) {
        self.settings.sizing = sizing;
        self.invalidate_layout();
    }

    /// Items to page by at drag end; zero disables drag snapping.
    pub fn set_snapping_step_size(&mut self, step_size: usize) {
        self.settings.snapping_step_size = step_size;
    }

    pub fn set_shows_separators(&mut self, shows_separators: bool) {
        self.settings.shows_separators = shows_separators;
        self.invalidate_layout();
    }

    pub fn set_shows_arrows(&mut self, shows_arrows: bool) {
        self.settings.shows_arrows = shows_arrows;
        self.arrows.set_shows_arrows(shows_arrows);
    }

    pub fn set_autohide_arrows(&mut self, autohide: bool) {
        self.settings.autohide_arrows = autohide;
        self.arrows.set_autohide(autohide);
    }

    /// Disable drag scrolling. The arrows keep working.
    pub fn set_scroll_enabled(&mut self, scroll_enabled: bool) {
        self.settings.scroll_enabled = scroll_enabled;
        if !scroll_enabled {
            self.dragging = false;
        }
    }

    /// Change the arrow gutters, which moves the scrolling area's edges.
    pub fn set_gutters(&mut self, gutters: Gutters) {
        let changed = gutters != self.settings.gutters;
        self.settings.gutters = gutters;
        self.coordinator.set_gutters(gutters);
        self.invalidate_layout();
        if changed {
            self.events.did_change_adjusted_content_inset();
        }
    }

    // ========== SCROLL POSITION ==========

    pub fn content_offset(&self) -> Point {
        self.scroll.content_offset()
    }

    pub fn normalized_offset(&self) -> NormalizedOffset {
        self.scroll.normalized_offset()
    }

    /// Fractional index of the first visible item.
    pub fn item_offset(&self) -> f64 {
        self.scroll.item_offset(self.pass.item_extent())
    }

    pub fn max_scroll_x(&self) -> f64 {
        self.scroll.max_scroll_x()
    }

    /// Move the content, clamped to the scrollable range. Returns the applied
    /// offset.
    pub fn scroll_to(&mut self, offset: Point) -> Point {
        let before = self.scroll.content_offset();
        let applied = self.scroll.set_content_offset(offset);
        if applied != before {
            self.update_arrow_availability();
            self.events.did_scroll(applied);
        }
        applied
    }

    pub fn set_normalized_offset(&mut self, offset: NormalizedOffset) {
        let mut scroll = self.scroll;
        scroll.set_normalized_offset(offset);
        self.scroll_to(scroll.content_offset());
    }

    pub fn set_item_offset(&mut self, item_offset: f64) {
        let mut scroll = self.scroll;
        scroll.set_item_offset(item_offset, self.pass.item_extent());
        self.scroll_to(scroll.content_offset());
    }

    fn pager(&self) -> Pager {
        Pager::new(
            self.pass.item_extent(),
            self.item_count,
            self.settings.snapping_step_size,
        )
    }

    // ========== DRAGGING ==========

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Start a user drag. Returns false when scrolling is disabled.
    pub fn begin_drag(&mut self) -> bool {
        if !self.settings.scroll_enabled {
            tracing::trace!("drag ignored, scrolling disabled");
            return false;
        }
        self.dragging = true;
        self.events.will_begin_dragging();
        true
    }

    /// Follow the finger during a drag.
    pub fn drag_to(&mut self, offset: Point) -> Point {
        if !self.dragging {
            return self.scroll.content_offset();
        }
        self.scroll_to(offset)
    }

    /// Where a drag released at `proposed` with `velocity_x` comes to rest,
    /// clamped to the scrollable range. Without a step size the proposal is
    /// kept as is.
    pub fn drag_target(&self, proposed: Point, velocity_x: f64) -> Point {
        let target = if self.settings.snapping_step_size == 0 {
            proposed
        } else {
            self.pager().target(proposed, velocity_x).offset
        };
        target.with_x(self.scroll.clamp_x(target.x))
    }

    /// Finish a drag. The event sink may rewrite the target before the
    /// carousel settles on it. Returns the resting offset.
    pub fn end_drag(&mut self, proposed: Point, velocity: Point) -> Point {
        if !self.dragging {
            return self.scroll.content_offset();
        }
        self.dragging = false;

        let mut target = self.drag_target(proposed, velocity.x);
        self.events.will_end_dragging(velocity, &mut target);
        target = target.with_x(self.scroll.clamp_x(target.x));

        let will_decelerate = target != self.scroll.content_offset();
        self.events.did_end_dragging(will_decelerate);
        tracing::debug!(
            proposed = proposed.x,
            velocity = velocity.x,
            target = target.x,
            "drag ended"
        );
        if will_decelerate {
            self.events.will_begin_decelerating();
            self.scroll_to(target);
            self.events.did_end_decelerating();
        }
        self.scroll.content_offset()
    }

    // ========== PAGING ==========

    /// Move one page to the right; a page is at least one item even when drag
    /// snapping is disabled.
    pub fn page_forward(&mut self) -> Point {
        self.page(ArrowDirection::Right)
    }

    /// Move one page to the left.
    pub fn page_backward(&mut self) -> Point {
        self.page(ArrowDirection::Left)
    }

    fn page(&mut self, direction: ArrowDirection) -> Point {
        let pager = self
            .pager()
            .with_step(effective_step(self.settings.snapping_step_size));
        let current = self.scroll.content_offset();
        let target = pager.target(current, direction.velocity());
        let x = match direction {
            ArrowDirection::Left => target.x().max(0.0),
            ArrowDirection::Right => target.x().min(self.scroll.max_scroll_x()),
        };
        tracing::debug!(
            ?direction,
            from = current.x,
            to = x,
            page = target.page_index,
            "paging"
        );
        let applied = self.scroll_to(current.with_x(x));
        self.events.did_end_scrolling_animation();
        applied
    }

    // ========== ARROWS ==========

    pub fn arrows(&self) -> &PagingArrows {
        &self.arrows
    }

    pub fn arrow_enablement(&self) -> ArrowEnablement {
        self.arrows.enablement()
    }

    fn update_arrow_availability(&mut self) {
        let normalized = self.scroll.normalized_offset();
        let enablement = derive_arrow_enablement(normalized.x);
        tracing::trace!(
            normalized = normalized.x,
            left = enablement.left,
            right = enablement.right,
            "arrow availability"
        );
        self.arrows.apply_enablement(enablement);
    }

    /// Tap on a paging arrow. Ignored (returns `None`) when the arrow is
    /// hidden or disabled.
    pub fn tap_arrow(&mut self, direction: ArrowDirection) -> Option<Point> {
        if !self.arrows.get(direction).accepts_taps() {
            tracing::trace!(?direction, "arrow tap ignored");
            return None;
        }
        Some(self.page(direction))
    }

    pub fn press_arrow(&mut self, direction: ArrowDirection) {
        self.arrows.get_mut(direction).pressed = true;
    }

    pub fn release_arrow(&mut self, direction: ArrowDirection) {
        self.arrows.get_mut(direction).pressed = false;
    }

    /// Pointer hover over the carousel. Returns the arrow fade to run.
    pub fn hover(&mut self, phase: HoverPhase) -> Option<ArrowFade> {
        self.arrows.hover(phase)
    }

    // ========== SELECTION ==========

    /// Tap at `point`, relative to the carousel's own origin rather than its
    /// parent. Returns the selected item, if the tap landed on one.
    pub fn tap(&mut self, point: Point) -> Option<usize> {
        let collection = self.pass.collection_frame;
        if !collection.contains(point) {
            return None;
        }
        let content_x =
            point.x - collection.min_x() + self.scroll.content_offset().x;
        let index = item_at(&self.pass, content_x)?;
        self.select_item(index).ok()?;
        Some(index)
    }

    /// Report `index` as selected to the event sink.
    pub fn select_item(&mut self, index: usize) -> Result<()> {
        if index >= self.item_count {
            let err = ScrollbarError::IndexOutOfBounds {
                index,
                count: self.item_count,
            };
            tracing::error!(%err, "selection ignored");
            return Err(err);
        }
        self.events.item_selected(index);
        Ok(())
    }

    // ========== ITEMS ==========

    /// Register the item type built for `identifier`.
    pub fn register<F, I>(&mut self, identifier: impl Into<String>, factory: F)
    where
        F: Fn() -> I + 'static,
        I: RenderableItem<P::Data> + 'static,
    {
        self.registry.register(identifier, factory);
    }

    pub fn registry(&self) -> &ItemRegistry<P::Data> {
        &self.registry
    }

    /// Indices of the items currently intersecting the scrolling area.
    pub fn visible_range(&self) -> Range<usize> {
        visible_range(
            &self.pass,
            self.scroll.content_offset().x,
            self.viewport().width,
        )
    }

    /// Configure and place an item for every visible index, recycling the
    /// previously realized ones. Items whose reuse identifier is not
    /// registered are logged and skipped.
    pub fn realize_visible_items(&mut self) -> &[RealizedItem<P::Data>] {
        self.recycle_realized();
        for index in self.visible_range() {
            let Some(frame) = self.pass.item_frames.get(index).copied() else {
                continue;
            };
            let spec = self.provider.item_at(index);
            match self.registry.dequeue(&spec.reuse_identifier) {
                Ok(mut item) => {
                    item.configure(spec.data);
                    item.layout(Rect::from_size(frame.size));
                    self.realized.push(RealizedItem {
                        index,
                        reuse_identifier: spec.reuse_identifier,
                        frame,
                        item,
                    });
                }
                Err(err) => {
                    tracing::error!(%err, index, "skipping carousel item");
                }
            }
        }
        &self.realized
    }

    pub fn realized_items(&self) -> &[RealizedItem<P::Data>] {
        &self.realized
    }

    fn recycle_realized(&mut self) {
        for realized in self.realized.drain(..) {
            self.registry.recycle(realized.reuse_identifier, realized.item);
        }
    }

    // ========== COLLABORATORS ==========

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable access to the provider. Call [`Self::reload_data`] after
    /// changing the item count.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }
}

impl<P: ItemProvider, E> fmt::Debug for ScrollbarCarousel<P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollbarCarousel")
            .field("settings", &self.settings)
            .field("bounds", &self.bounds)
            .field("item_count", &self.item_count)
            .field("item_size", &self.pass.item_size)
            .field("content_offset", &self.scroll.content_offset())
            .field("arrows", &self.arrows)
            .field("dragging", &self.dragging)
            .field("registry", &self.registry)
            .field("realized", &self.realized.len())
            .finish()
    }
}
