//! Skin configuration as supplied in the player setup.
//!
//! Every field is optional. Three global colors act as fallbacks for the
//! four per-category override blocks. Keys use the player's camelCase
//! names (`iconsActive`, `textActive`); unknown keys are ignored. A color
//! that is not a string (`0`, `false`, `null`) reads as unset.

use std::path::Path;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use reel_types::error::{ReelError, Result};

/// Sparse skin configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkinConfig {
    /// Accent color for active/hovered elements.
    #[serde(deserialize_with = "lenient_color")]
    pub active: Option<String>,
    /// Color for idle icons and text.
    #[serde(deserialize_with = "lenient_color")]
    pub inactive: Option<String>,
    /// Background of bars, menus and tooltips.
    #[serde(deserialize_with = "lenient_color")]
    pub background: Option<String>,

    pub controlbar: Option<ControlbarOverrides>,
    pub timeslider: Option<TimesliderOverrides>,
    pub menus: Option<MenusOverrides>,
    pub tooltips: Option<TooltipsOverrides>,
}

/// Control bar overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlbarOverrides {
    #[serde(deserialize_with = "lenient_color")]
    pub icons_active: Option<String>,
    #[serde(deserialize_with = "lenient_color")]
    pub icons: Option<String>,
    #[serde(deserialize_with = "lenient_color")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient_color")]
    pub background: Option<String>,
}

/// Time slider overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimesliderOverrides {
    #[serde(deserialize_with = "lenient_color")]
    pub progress: Option<String>,
    #[serde(deserialize_with = "lenient_color")]
    pub rail: Option<String>,
    /// Cue and time-background color. Never inherited from the globals.
    #[serde(deserialize_with = "lenient_color")]
    pub background: Option<String>,
}

/// Settings menu and next-up overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenusOverrides {
    #[serde(deserialize_with = "lenient_color")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient_color")]
    pub text_active: Option<String>,
    #[serde(deserialize_with = "lenient_color")]
    pub background: Option<String>,
}

/// Tooltip overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipsOverrides {
    #[serde(deserialize_with = "lenient_color")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient_color")]
    pub background: Option<String>,
}

/// A color slot as found in a setup file: a string, or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawColor {
    Text(String),
    Other(IgnoredAny),
}

/// Accept any value for a color field, keeping only strings.
fn lenient_color<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match RawColor::deserialize(deserializer)? {
        RawColor::Text(s) => Ok(Some(s)),
        RawColor::Other(_) => {
            log::trace!("Ignoring non-string skin color");
            Ok(None)
        },
    }
}

impl SkinConfig {
    /// Parse the `skin` object of a JSON player setup.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_toml(toml: &str) -> Result<Self> {
        Ok(toml::from_str(toml)?)
    }

    /// Load a skin from a `.json` or `.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Self::from_json(&std::fs::read_to_string(path)?),
            Some("toml") => Self::from_toml(&std::fs::read_to_string(path)?),
            other => {
                log::warn!("Skin config '{}' has unsupported extension", path.display());
                Err(ReelError::Config(format!(
                    "unsupported skin config extension: {}",
                    other.unwrap_or("<none>")
                )))
            },
        }
    }
}
