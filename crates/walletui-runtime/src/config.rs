use crate::surface::{LocationProvider, SurfacePages, UiSurfaceDetector};
use crate::Result;
use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};
use std::path::Path;
use walletui_core::{date, text};

/// Display defaults for the text helpers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub truncate_len: usize,
    pub strip_trailing_comma: bool,
    pub address_edge_len: usize,
    pub description_len: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            truncate_len: text::DEFAULT_TRUNCATE_LEN,
            strip_trailing_comma: false,
            address_edge_len: text::DEFAULT_ADDRESS_EDGE_LEN,
            description_len: text::DEFAULT_DESCRIPTION_LEN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    pub format: String,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            format: date::DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Presentation settings, usually embedded in the extension bundle as TOML.
///
/// Every section and field is optional; missing values fall back to the
/// built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub text: TextConfig,
    #[serde(default)]
    pub date: DateConfig,
    #[serde(default)]
    pub surface: SurfacePages,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Read config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn truncate(&self, s: &str) -> String {
        text::truncate_with_ellipsis(s, self.text.truncate_len, self.text.strip_trailing_comma)
    }

    pub fn shorten_address(&self, address: Option<&str>) -> String {
        text::shorten_address(address, self.text.address_edge_len)
    }

    pub fn shorten_description(&self, desc: Option<&str>) -> String {
        text::shorten_description(desc, self.text.description_len)
    }

    pub fn format_date<T: Datelike + Timelike>(&self, value: &T) -> String {
        date::format_date(value, &self.date.format)
    }

    pub fn surface_detector<L: LocationProvider>(&self, location: L) -> UiSurfaceDetector<L> {
        UiSurfaceDetector::with_pages(location, self.surface.clone())
    }
}
