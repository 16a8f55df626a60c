//! Demo screen: a text carousel above an image carousel.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

use scrollbar_config::ScrollbarConfig;
use scrollbar_contracts::events::ScrollbarEvents;
use scrollbar_contracts::provider::ItemProvider;
use scrollbar_core::{ScrollbarCarousel, ScrollbarSettings};
use scrollbar_model::{ArrowEnablement, Point, Rect, Size};

use crate::items::{IMAGE_CELL, ImageItem, ImageItems, TEXT_CELL, TextItem, TextItems};

pub const TEXT_CAROUSEL: &str = "text";
pub const IMAGE_CAROUSEL: &str = "images";

const TEXT_TOP: f64 = 100.0;
const TEXT_HEIGHT: f64 = 100.0;
const CAROUSEL_GAP: f64 = 100.0;
/// Image carousel height relative to its item width.
const IMAGE_ASPECT: f64 = 0.7;

/// Event sink shared by both carousels: logs and records selections.
#[derive(Debug, Clone)]
pub struct SelectionLog {
    carousel: &'static str,
    pub selected: Vec<usize>,
}

impl SelectionLog {
    pub fn new(carousel: &'static str) -> Self {
        Self {
            carousel,
            selected: Vec::new(),
        }
    }
}

impl ScrollbarEvents for SelectionLog {
    fn item_selected(&mut self, index: usize) {
        tracing::info!(carousel = self.carousel, "Did select item: {index}");
        self.selected.push(index);
    }
}

pub type TextCarousel = ScrollbarCarousel<TextItems, SelectionLog>;
pub type ImageCarousel = ScrollbarCarousel<ImageItems, SelectionLog>;

#[derive(Debug)]
pub struct DemoScreen {
    bounds: Rect,
    pub text: TextCarousel,
    pub images: ImageCarousel,
}

impl DemoScreen {
    /// Build both carousels from `config`, falling back to the presets for
    /// carousels it does not name.
    pub fn new(config: &ScrollbarConfig, item_count: usize) -> Self {
        let text_settings = config.settings_for(
            TEXT_CAROUSEL,
            ScrollbarSettings::fixed_width_defaults(),
        );
        let image_settings =
            config.settings_for(IMAGE_CAROUSEL, ScrollbarSettings::paged_defaults());

        let mut text = ScrollbarCarousel::new(
            TextItems { count: item_count },
            SelectionLog::new(TEXT_CAROUSEL),
            text_settings,
        );
        text.register(TEXT_CELL, TextItem::default);

        let mut images = ScrollbarCarousel::new(
            ImageItems {
                count: item_count,
                image_size: Size::ZERO,
            },
            SelectionLog::new(IMAGE_CAROUSEL),
            image_settings,
        );
        images.register(IMAGE_CELL, ImageItem::default);

        Self {
            bounds: Rect::ZERO,
            text,
            images,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Lay both carousels out for a screen of `bounds` and realize their
    /// visible items.
    ///
    /// The text carousel spans the full width at a fixed height. The image
    /// carousel sits below it, with its height derived from the item width so
    /// the images keep their aspect ratio across resizes.
    pub fn layout_subviews(&mut self, bounds: Rect) {
        self.bounds = bounds;

        let text_frame = Rect::new(0.0, TEXT_TOP, bounds.width(), TEXT_HEIGHT);
        self.text.set_frame(text_frame);

        let item_width = self.images.calculate_item_size(bounds).width;
        self.images.set_frame(Rect::new(
            0.0,
            text_frame.max_y() + CAROUSEL_GAP,
            bounds.width(),
            item_width * IMAGE_ASPECT,
        ));
        // Images render at the full-screen item size, now with the new height.
        self.images.provider_mut().image_size =
            self.images.calculate_item_size(bounds);

        tracing::debug!(
            width = bounds.width(),
            image_height = self.images.frame().height(),
            "demo screen laid out"
        );

        self.text.realize_visible_items();
        self.images.realize_visible_items();
    }

    /// Tap at a point in screen coordinates. Routes to whichever carousel
    /// contains it and returns `(carousel, item)` on a hit.
    pub fn tap(&mut self, point: Point) -> Option<(&'static str, usize)> {
        if let Some(local) = to_local(self.text.frame(), point) {
            return self.text.tap(local).map(|index| (TEXT_CAROUSEL, index));
        }
        if let Some(local) = to_local(self.images.frame(), point) {
            return self.images.tap(local).map(|index| (IMAGE_CAROUSEL, index));
        }
        None
    }

    pub fn summary(&self) -> ScreenSummary {
        ScreenSummary {
            width: self.bounds.width(),
            height: self.bounds.height(),
            carousels: vec![
                CarouselSummary::of(TEXT_CAROUSEL, &self.text),
                CarouselSummary::of(IMAGE_CAROUSEL, &self.images),
            ],
        }
    }
}

fn to_local(frame: Rect, point: Point) -> Option<Point> {
    frame
        .contains(point)
        .then(|| Point::new(point.x - frame.min_x(), point.y - frame.min_y()))
}

/// Observable state of one carousel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselSummary {
    pub name: &'static str,
    pub frame: Rect,
    pub item_size: Size,
    pub content_offset: f64,
    /// NaN (serialized as null) when the content fits the viewport.
    pub normalized_offset: f64,
    pub item_offset: f64,
    pub arrows: ArrowEnablement,
    pub visible: Range<usize>,
    pub selected: Vec<usize>,
}

impl CarouselSummary {
    fn of<P: ItemProvider>(
        name: &'static str,
        carousel: &ScrollbarCarousel<P, SelectionLog>,
    ) -> Self
    where
        P::Data: 'static,
    {
        Self {
            name,
            frame: carousel.frame(),
            item_size: carousel.item_size(),
            content_offset: carousel.content_offset().x,
            normalized_offset: carousel.normalized_offset().x,
            item_offset: carousel.item_offset(),
            arrows: carousel.arrow_enablement(),
            visible: carousel.visible_range(),
            selected: carousel.events().selected.clone(),
        }
    }
}

impl fmt::Display for CarouselSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = |enabled: bool| if enabled { "on" } else { "off" };
        write!(
            f,
            "{:<7} frame {}x{} @ y={}  item {:.1}x{:.1}  offset {:.1} (normalized {:.2}, item {:.2})  arrows <{} {}>  visible {:?}",
            self.name,
            self.frame.width(),
            self.frame.height(),
            self.frame.min_y(),
            self.item_size.width,
            self.item_size.height,
            self.content_offset,
            self.normalized_offset,
            self.item_offset,
            arrow(self.arrows.left),
            arrow(self.arrows.right),
            self.visible,
        )?;
        if !self.selected.is_empty() {
            write!(f, "  selected {:?}", self.selected)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenSummary {
    pub width: f64,
    pub height: f64,
    pub carousels: Vec<CarouselSummary>,
}

impl fmt::Display for ScreenSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "screen {}x{}", self.width, self.height)?;
        for carousel in &self.carousels {
            writeln!(f, "  {carousel}")?;
        }
        Ok(())
    }
}
