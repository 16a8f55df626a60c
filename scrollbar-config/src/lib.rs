//! Configuration loading for scrollbar carousels.
//!
//! Settings come from a TOML or JSON file, inline JSON in the environment, or
//! well-known default files, and are validated into non-fatal warnings.

pub mod scrollbar;
pub mod validation;

pub use scrollbar::{
    CONFIG_JSON_VAR, CONFIG_PATH_VAR, ConfigFormat, ScrollbarConfig, ScrollbarConfigSource,
};
pub use validation::{ConfigWarning, ConfigWarnings, validate_settings};
