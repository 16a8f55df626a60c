/// How a carousel derives the width of its items.
///
/// Serialized as an externally tagged enum, e.g.
/// `{ "fixed": { "minimum_item_width": 150.0 } }` or
/// `{ "dynamic": { "items_per_page": 2 } }`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SizingPolicy {
    /// Items keep `minimum_item_width` unless the viewport is wider than the
    /// whole content, in which case they stretch to fill it.
    Fixed { minimum_item_width: f64 },
    /// Exactly `items_per_page` items fill the viewport.
    Dynamic { items_per_page: usize },
}

impl SizingPolicy {
    pub const fn fixed(minimum_item_width: f64) -> Self {
        Self::Fixed { minimum_item_width }
    }

    pub const fn dynamic(items_per_page: usize) -> Self {
        Self::Dynamic { items_per_page }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic { .. })
    }
}

impl Default for SizingPolicy {
    fn default() -> Self {
        Self::Dynamic { items_per_page: 2 }
    }
}

impl std::fmt::Display for SizingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed { minimum_item_width } => {
                write!(f, "fixed({minimum_item_width})")
            }
            Self::Dynamic { items_per_page } => {
                write!(f, "dynamic({items_per_page})")
            }
        }
    }
}
