use anyhow::Context;
use scrollbar_core::ScrollbarSettings;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    env, fs,
    path::{Path, PathBuf},
};

use crate::validation::{ConfigWarnings, validate_settings};

pub const CONFIG_PATH_VAR: &str = "SCROLLBAR_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "SCROLLBAR_CONFIG_JSON";

const DEFAULT_CANDIDATES: &[&str] = &[
    "scrollbar.toml",
    "scrollbar.json",
    "config/scrollbar.toml",
    "config/scrollbar.json",
];

/// Source that produced the carousel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScrollbarConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Document shape shared by both formats, before the per-carousel decode.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "V: Deserialize<'de>"))]
struct CarouselTable<V> {
    #[serde(default)]
    carousels: BTreeMap<String, V>,
}

/// Serialization format of a settings document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" | "tml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// JSON documents are objects; anything else is read as TOML.
    pub fn sniff(contents: &str) -> Self {
        if contents.trim_start().starts_with('{') {
            Self::Json
        } else {
            Self::Toml
        }
    }
}

/// Named carousel settings, keyed by the carousel's role on screen (the demo
/// uses `text` and `images`). Carousels without an entry use their own
/// preset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrollbarConfig {
    pub carousels: BTreeMap<String, ScrollbarSettings>,
}

impl ScrollbarConfig {
    /// Load carousel settings using environment variables.
    /// Evaluation order:
    /// 1) `$SCROLLBAR_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$SCROLLBAR_CONFIG_JSON` (inline JSON),
    /// 3) `scrollbar.{toml,json}` or `config/scrollbar.{toml,json}` in the
    ///    working directory,
    /// 4) defaults if none of the above is present.
    pub fn load_from_env() -> anyhow::Result<(Self, ScrollbarConfigSource)> {
        Self::load_from_sources(
            env::var(CONFIG_PATH_VAR).ok(),
            env::var(CONFIG_JSON_VAR).ok(),
            Path::new("."),
        )
    }

    /// [`Self::load_from_env`] with the variable values and the directory
    /// searched for default files passed in.
    pub fn load_from_sources(
        path_var: Option<String>,
        json_var: Option<String>,
        search_root: &Path,
    ) -> anyhow::Result<(Self, ScrollbarConfigSource)> {
        let non_blank = |value: Option<String>| {
            value.filter(|value| !value.trim().is_empty())
        };

        if let Some(path) = non_blank(path_var).map(PathBuf::from) {
            let config = Self::load_from_file(&path)
                .with_context(|| format!("{CONFIG_PATH_VAR} points at an unusable file"))?;
            return Ok((config, ScrollbarConfigSource::EnvPath(path)));
        }

        if let Some(raw) = non_blank(json_var) {
            let config = Self::parse(&raw, ConfigFormat::Json)
                .with_context(|| format!("{CONFIG_JSON_VAR} holds unusable settings"))?;
            return Ok((config, ScrollbarConfigSource::EnvInline));
        }

        match Self::find_default_file(search_root) {
            Some(path) => {
                let config = Self::load_from_file(&path)?;
                Ok((config, ScrollbarConfigSource::File(path)))
            }
            None => Ok((Self::default(), ScrollbarConfigSource::Default)),
        }
    }

    /// Read carousel settings from `path`. The format follows the extension;
    /// files without a known one are sniffed.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let format = ConfigFormat::from_path(path)
            .unwrap_or_else(|| ConfigFormat::sniff(&contents));
        tracing::debug!(path = %path.display(), ?format, "loading carousel settings");
        Self::parse(&contents, format)
            .with_context(|| format!("cannot load carousels from {}", path.display()))
    }

    /// Parse a whole document. Each carousel is decoded on its own so errors
    /// name the carousel at fault.
    pub fn parse(contents: &str, format: ConfigFormat) -> anyhow::Result<Self> {
        match format {
            ConfigFormat::Toml => {
                let document: CarouselTable<toml::Value> = toml::from_str(contents)
                    .context("carousel table is not valid TOML")?;
                Self::from_table(document, |value: toml::Value| value.try_into())
            }
            ConfigFormat::Json => {
                let document: CarouselTable<serde_json::Value> =
                    serde_json::from_str(contents)
                        .context("carousel table is not valid JSON")?;
                Self::from_table(document, serde_json::from_value)
            }
        }
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        Self::parse(raw, ConfigFormat::Json)
    }

    fn from_table<V, E>(
        document: CarouselTable<V>,
        decode: impl Fn(V) -> Result<ScrollbarSettings, E>,
    ) -> anyhow::Result<Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let carousels = document
            .carousels
            .into_iter()
            .map(|(name, value)| -> anyhow::Result<(String, ScrollbarSettings)> {
                let settings = decode(value)
                    .with_context(|| format!("carousel `{name}` has invalid settings"))?;
                Ok((name, settings))
            })
            .collect::<anyhow::Result<_>>()?;
        Ok(Self { carousels })
    }

    fn find_default_file(search_root: &Path) -> Option<PathBuf> {
        DEFAULT_CANDIDATES
            .iter()
            .map(|candidate| search_root.join(candidate))
            .find(|path| path.exists())
    }

    /// Settings for the carousel `name`, or `fallback` when not configured.
    pub fn settings_for(
        &self,
        name: &str,
        fallback: ScrollbarSettings,
    ) -> ScrollbarSettings {
        self.carousels.get(name).copied().unwrap_or(fallback)
    }

    /// Collect warnings for every configured carousel.
    pub fn validate(&self) -> ConfigWarnings {
        let mut warnings = ConfigWarnings::default();
        for (name, settings) in &self.carousels {
            warnings.extend(validate_settings(name, settings));
        }
        for warning in warnings.iter() {
            tracing::warn!(%warning, "scrollbar config");
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollbar_model::SizingPolicy;

    #[test]
    fn toml_and_json_describe_the_same_settings() {
        let toml = r#"
            [carousels.text]
            snapping_step_size = 0
            sizing = { fixed = { minimum_item_width = 150.0 } }
        "#;
        let json = r#"{"carousels": {"text": {
            "snapping_step_size": 0,
            "sizing": {"fixed": {"minimum_item_width": 150.0}}
        }}}"#;

        let from_toml = ScrollbarConfig::parse(toml, ConfigFormat::sniff(toml)).unwrap();
        let from_json = ScrollbarConfig::parse(json, ConfigFormat::sniff(json)).unwrap();
        assert_eq!(from_toml, from_json);

        let text = from_toml.settings_for("text", ScrollbarSettings::default());
        assert_eq!(text.sizing, SizingPolicy::fixed(150.0));
        assert_eq!(text.snapping_step_size, 0);
        assert!(text.shows_arrows);
    }

    #[test]
    fn unknown_sizing_policy_is_rejected() {
        let err = ScrollbarConfig::parse_json(
            r#"{"carousels": {"text": {}, "images": {"sizing": {"elastic": {}}}}}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "carousel `images` has invalid settings");
        assert!(format!("{err:#}").contains("elastic"));
    }

    #[test]
    fn formats_follow_the_extension_then_the_contents() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a/scrollbar.tml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("scrollbar.conf")), None);
        assert_eq!(ConfigFormat::sniff("  {\"carousels\": {}}"), ConfigFormat::Json);
        assert_eq!(ConfigFormat::sniff("[carousels.text]"), ConfigFormat::Toml);
    }

    #[test]
    fn missing_carousels_use_the_fallback() {
        let config = ScrollbarConfig::default();
        assert_eq!(
            config.settings_for("images", ScrollbarSettings::paged_defaults()),
            ScrollbarSettings::paged_defaults()
        );
        assert!(config.validate().is_empty());
    }
}
