//! Carousel configuration surface.

use serde::{Deserialize, Serialize};

use scrollbar_model::SizingPolicy;

use crate::constants::gutters::{ARROW_SPACING, ARROW_WIDTH};

/// Horizontal chrome reserved for the paging arrows on each side.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Gutters {
    pub arrow_width: f64,
    /// Gap between an arrow and the scrolling area.
    pub arrow_spacing: f64,
}

impl Gutters {
    /// Horizontal inset applied to each side of the scrolling area.
    pub fn inset(&self) -> f64 {
        self.arrow_width + self.arrow_spacing
    }
}

impl Default for Gutters {
    fn default() -> Self {
        Self {
            arrow_width: ARROW_WIDTH,
            arrow_spacing: ARROW_SPACING,
        }
    }
}

/// Settings of one carousel instance. Every field can be changed at runtime
/// through the carousel's setters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrollbarSettings {
    /// How item widths are derived.
    pub sizing: SizingPolicy,
    /// Items to page by when a drag ends. Zero disables drag snapping; the
    /// arrows still move one item.
    pub snapping_step_size: usize,
    /// Draw a separator between items and a hairline above the carousel.
    pub shows_separators: bool,
    pub shows_arrows: bool,
    /// Hide the arrows until the pointer hovers the carousel.
    pub autohide_arrows: bool,
    /// When false only the arrows move the content.
    pub scroll_enabled: bool,
    pub gutters: Gutters,
}

impl Default for ScrollbarSettings {
    fn default() -> Self {
        Self {
            sizing: SizingPolicy::default(),
            snapping_step_size: 1,
            shows_separators: true,
            shows_arrows: true,
            autohide_arrows: false,
            scroll_enabled: true,
            gutters: Gutters::default(),
        }
    }
}

impl ScrollbarSettings {
    /// Fixed 150pt text cells, free scrolling, separators between cells.
    pub const fn fixed_width_defaults() -> Self {
        Self {
            sizing: SizingPolicy::fixed(150.0),
            snapping_step_size: 0,
            shows_separators: true,
            shows_arrows: true,
            autohide_arrows: false,
            scroll_enabled: true,
            gutters: Gutters {
                arrow_width: ARROW_WIDTH,
                arrow_spacing: ARROW_SPACING,
            },
        }
    }

    /// Two cells per page, snapping two at a time, no separators.
    pub const fn paged_defaults() -> Self {
        Self {
            sizing: SizingPolicy::dynamic(2),
            snapping_step_size: 2,
            shows_separators: false,
            shows_arrows: true,
            autohide_arrows: false,
            scroll_enabled: true,
            gutters: Gutters {
                arrow_width: ARROW_WIDTH,
                arrow_spacing: ARROW_SPACING,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let settings: ScrollbarSettings = serde_json::from_str(
            r#"{"snapping_step_size": 3, "gutters": {"arrow_width": 40.0}}"#,
        )
        .unwrap();
        assert_eq!(settings.snapping_step_size, 3);
        assert_eq!(settings.sizing, SizingPolicy::dynamic(2));
        assert_eq!(settings.gutters.arrow_width, 40.0);
        assert_eq!(settings.gutters.arrow_spacing, ARROW_SPACING);
        assert_eq!(settings.gutters.inset(), 60.0);
    }
}
