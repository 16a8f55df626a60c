//! Scripted interaction run by the demo binary in place of a real user.

use serde::Serialize;

use scrollbar_contracts::events::ScrollbarEvents;
use scrollbar_contracts::provider::ItemProvider;
use scrollbar_core::ScrollbarCarousel;
use scrollbar_model::{ArrowDirection, Point, Rect};

use crate::screen::{DemoScreen, ScreenSummary};

/// Release velocity of the scripted flicks, in points per millisecond.
const FLICK_VELOCITY: f64 = 1.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStep {
    pub action: String,
    pub summary: ScreenSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionReport {
    pub steps: Vec<SessionStep>,
}

impl SessionReport {
    fn record(&mut self, action: impl Into<String>, screen: &DemoScreen) {
        let action = action.into();
        tracing::info!(%action, "session step");
        self.steps.push(SessionStep {
            action,
            summary: screen.summary(),
        });
    }

    pub fn last(&self) -> Option<&SessionStep> {
        self.steps.last()
    }
}

/// Drag a carousel by `distance` points and release it with `velocity`.
fn flick<P, E>(
    carousel: &mut ScrollbarCarousel<P, E>,
    distance: f64,
    velocity: f64,
) where
    P: ItemProvider,
    P::Data: 'static,
    E: ScrollbarEvents,
{
    if !carousel.begin_drag() {
        return;
    }
    let start = carousel.content_offset();
    let released = carousel.drag_to(start.with_x(start.x + distance));
    carousel.end_drag(released, Point::new(velocity, 0.0));
    carousel.realize_visible_items();
}

/// Lay the screen out at `bounds`, then flick and page both carousels, tap
/// an image and optionally resize to `resize_width`.
pub fn run(
    screen: &mut DemoScreen,
    bounds: Rect,
    resize_width: Option<f64>,
) -> SessionReport {
    let mut report = SessionReport::default();

    screen.layout_subviews(bounds);
    report.record(format!("layout {}x{}", bounds.width(), bounds.height()), screen);

    flick(&mut screen.text, 220.0, FLICK_VELOCITY);
    report.record("flick text carousel right", screen);

    screen.text.tap_arrow(ArrowDirection::Right);
    screen.text.realize_visible_items();
    report.record("tap text carousel right arrow", screen);

    screen.images.tap_arrow(ArrowDirection::Right);
    screen.images.realize_visible_items();
    report.record("tap image carousel right arrow", screen);

    flick(&mut screen.images, 40.0, FLICK_VELOCITY);
    report.record("flick image carousel right", screen);

    let image_frame = screen.images.frame();
    let centre = Point::new(
        image_frame.min_x() + image_frame.width() / 2.0,
        image_frame.min_y() + image_frame.height() / 2.0,
    );
    if let Some((carousel, index)) = screen.tap(centre) {
        tracing::debug!(carousel, index, "tap hit");
    }
    report.record("tap centre of image carousel", screen);

    if let Some(width) = resize_width {
        let resized = Rect::new(bounds.min_x(), bounds.min_y(), width, bounds.height());
        screen.layout_subviews(resized);
        report.record(format!("resize to {width}x{}", bounds.height()), screen);
    }

    flick(&mut screen.images, -40.0, -FLICK_VELOCITY);
    report.record("flick image carousel left", screen);

    report
}
