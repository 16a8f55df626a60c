use std::fmt;

use scrollbar_core::{Gutters, ScrollbarSettings};
use scrollbar_model::SizingPolicy;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.hint {
            Some(hint) => write!(f, "{} ({hint})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Non-fatal findings about a loaded configuration. The carousel still runs
/// with such settings; the degenerate values fall back to safe geometry.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

/// Check one carousel's settings. `name` prefixes every message.
pub fn validate_settings(
    name: &str,
    settings: &ScrollbarSettings,
) -> ConfigWarnings {
    let mut warnings = ConfigWarnings::default();

    match settings.sizing {
        SizingPolicy::Dynamic { items_per_page: 0 } => {
            warnings.push_with_hint(
                format!("{name}: sizing.dynamic.items_per_page is 0"),
                "treated as 1 item per page",
            );
        }
        SizingPolicy::Fixed { minimum_item_width }
            if !(minimum_item_width.is_finite() && minimum_item_width > 0.0) =>
        {
            warnings.push_with_hint(
                format!(
                    "{name}: sizing.fixed.minimum_item_width must be positive, got {minimum_item_width}"
                ),
                "items collapse unless the content is narrower than the viewport",
            );
        }
        _ => {}
    }

    check_gutters(name, &settings.gutters, &mut warnings);
    warnings
}

fn check_gutters(name: &str, gutters: &Gutters, warnings: &mut ConfigWarnings) {
    for (field, value) in [
        ("arrow_width", gutters.arrow_width),
        ("arrow_spacing", gutters.arrow_spacing),
    ] {
        if !value.is_finite() || value < 0.0 {
            warnings.push(format!(
                "{name}: gutters.{field} must be a non-negative number, got {value}"
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_clean() {
        assert!(validate_settings("text", &ScrollbarSettings::default()).is_empty());
        assert!(
            validate_settings("text", &ScrollbarSettings::fixed_width_defaults())
                .is_empty()
        );
    }

    #[test]
    fn zero_items_per_page_is_reported_with_a_hint() {
        let settings = ScrollbarSettings {
            sizing: SizingPolicy::dynamic(0),
            ..ScrollbarSettings::default()
        };
        let warnings = validate_settings("images", &settings);
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings.items[0].to_string(),
            "images: sizing.dynamic.items_per_page is 0 (treated as 1 item per page)"
        );
    }

    #[test]
    fn bad_fixed_width_and_gutters_accumulate() {
        let settings = ScrollbarSettings {
            sizing: SizingPolicy::fixed(f64::NAN),
            gutters: Gutters {
                arrow_width: -1.0,
                arrow_spacing: f64::INFINITY,
            },
            ..ScrollbarSettings::default()
        };
        let warnings = validate_settings("text", &settings);
        assert_eq!(warnings.len(), 3);
        assert!(warnings.items[1].message.contains("gutters.arrow_width"));
        assert!(warnings.items[2].message.contains("gutters.arrow_spacing"));
    }
}
