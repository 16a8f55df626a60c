use scrollbar_model::Point;

/// Event sink for a carousel. Every method defaults to a no-op so consumers
/// implement only what they observe.
pub trait ScrollbarEvents {
    /// An item was tapped.
    fn item_selected(&mut self, _index: usize) {}

    /// The content offset changed, by user drag or programmatic paging.
    fn did_scroll(&mut self, _offset: Point) {}

    fn will_begin_dragging(&mut self) {}

    /// Called before the carousel settles on `target`. Implementations may
    /// rewrite it; the carousel clamps whatever comes back.
    fn will_end_dragging(&mut self, _velocity: Point, _target: &mut Point) {}

    fn did_end_dragging(&mut self, _will_decelerate: bool) {}

    fn will_begin_decelerating(&mut self) {}

    fn did_end_decelerating(&mut self) {}

    fn did_end_scrolling_animation(&mut self) {}

    fn did_change_adjusted_content_inset(&mut self) {}
}

/// Sink that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEvents;

impl ScrollbarEvents for NoopEvents {}

impl<E: ScrollbarEvents + ?Sized> ScrollbarEvents for Box<E> {
    fn item_selected(&mut self, index: usize) {
        (**self).item_selected(index)
    }

    fn did_scroll(&mut self, offset: Point) {
        (**self).did_scroll(offset)
    }

    fn will_begin_dragging(&mut self) {
        (**self).will_begin_dragging()
    }

    fn will_end_dragging(&mut self, velocity: Point, target: &mut Point) {
        (**self).will_end_dragging(velocity, target)
    }

    fn did_end_dragging(&mut self, will_decelerate: bool) {
        (**self).did_end_dragging(will_decelerate)
    }

    fn will_begin_decelerating(&mut self) {
        (**self).will_begin_decelerating()
    }

    fn did_end_decelerating(&mut self) {
        (**self).did_end_decelerating()
    }

    fn did_end_scrolling_animation(&mut self) {
        (**self).did_end_scrolling_animation()
    }

    fn did_change_adjusted_content_inset(&mut self) {
        (**self).did_change_adjusted_content_inset()
    }
}
