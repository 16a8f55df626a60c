//! Item types and data sources of the demo screen.

use rand::Rng;
use serde::Serialize;

use scrollbar_contracts::item::RenderableItem;
use scrollbar_contracts::provider::{ItemProvider, ItemSpec};
use scrollbar_model::{Rect, Size};

pub const TEXT_CELL: &str = "Cell";
pub const IMAGE_CELL: &str = "ImageCell";

/// Opaque RGB colour with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Colour {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Colour {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            red: rng.random(),
            green: rng.random(),
            blue: rng.random(),
        }
    }
}

/// Title shown by the text cell at `index`.
pub fn text_title(index: usize) -> String {
    format!(
        "{} and some more text and more and more and even more and even even more !!!",
        index + 1
    )
}

#[derive(Debug, Clone, Copy)]
pub struct TextItems {
    pub count: usize,
}

impl ItemProvider for TextItems {
    type Data = String;

    fn item_count(&self) -> usize {
        self.count
    }

    fn item_at(&self, index: usize) -> ItemSpec<String> {
        ItemSpec::new(TEXT_CELL, text_title(index))
    }
}

/// A generated placeholder image: a label on a solid colour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageContent {
    pub label: String,
    pub colour: Colour,
    pub size: Size,
}

#[derive(Debug, Clone, Copy)]
pub struct ImageItems {
    pub count: usize,
    /// Size the placeholder images are rendered at. Follows the carousel's
    /// item size.
    pub image_size: Size,
}

impl ItemProvider for ImageItems {
    type Data = ImageContent;

    fn item_count(&self) -> usize {
        self.count
    }

    fn item_at(&self, index: usize) -> ItemSpec<ImageContent> {
        let content = ImageContent {
            label: (index + 1).to_string(),
            colour: Colour::random(&mut rand::rng()),
            size: self.image_size,
        };
        ItemSpec::new(IMAGE_CELL, content)
    }
}

/// Text cell: a title label filling the item.
#[derive(Debug, Default)]
pub struct TextItem {
    pub title: Option<String>,
    pub label_frame: Rect,
}

impl RenderableItem<String> for TextItem {
    fn configure(&mut self, title: String) {
        self.title = Some(title);
    }

    fn layout(&mut self, frame: Rect) {
        self.label_frame = frame;
    }

    fn reset(&mut self) {
        self.title = None;
    }
}

/// Image cell: an image view filling the item.
#[derive(Debug, Default)]
pub struct ImageItem {
    pub image: Option<ImageContent>,
    pub image_frame: Rect,
}

impl RenderableItem<ImageContent> for ImageItem {
    fn configure(&mut self, image: ImageContent) {
        self.image = Some(image);
    }

    fn layout(&mut self, frame: Rect) {
        self.image_frame = frame;
    }

    fn reset(&mut self) {
        self.image = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_one_based() {
        assert!(text_title(0).starts_with("1 and some more text"));
        assert!(text_title(6).starts_with("7 and"));
    }

    #[test]
    fn image_items_carry_label_and_size() {
        let provider = ImageItems {
            count: 7,
            image_size: Size::new(195.0, 136.5),
        };
        let spec = provider.item_at(2);
        assert_eq!(spec.reuse_identifier, IMAGE_CELL);
        assert_eq!(spec.data.label, "3");
        assert_eq!(spec.data.size, Size::new(195.0, 136.5));
        let colour = spec.data.colour;
        for component in [colour.red, colour.green, colour.blue] {
            assert!((0.0..=1.0).contains(&component));
        }
    }
}
