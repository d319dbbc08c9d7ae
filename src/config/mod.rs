//! Page configuration
//!
//! Defaults describe the markup the site ships with. A page can override any
//! field with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="page-behavior-config">
//!   { "stats": { "api_base": "https://codeforces.com/api" } }
//! </script>
//! ```

use serde::Deserialize;

use crate::error::ConfigError;
use crate::page::Page;

/// Id of the inline JSON configuration element
pub const CONFIG_ELEMENT_ID: &str = "page-behavior-config";

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub theme: ThemeConfig,
    pub nav: NavConfig,
    pub anchors: AnchorConfig,
    pub year: YearConfig,
    pub stats: StatsConfig,
    pub log_level: LogLevel,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// Storage key holding the user's explicit choice
    pub storage_key: String,
    /// Attribute set on the document root
    pub attribute: String,
    pub toggle_id: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "pref-theme".into(),
            attribute: "data-theme".into(),
            toggle_id: "theme-toggle".into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavConfig {
    pub toggle_selector: String,
    pub menu_id: String,
    pub open_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".nav-toggle".into(),
            menu_id: "nav-menu".into(),
            open_class: "open".into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnchorConfig {
    pub header_selector: String,
    /// Extra clearance below the sticky header, in CSS pixels
    pub header_padding: f64,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            header_selector: ".site-header".into(),
            header_padding: 8.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct YearConfig {
    pub element_id: String,
}

impl Default for YearConfig {
    fn default() -> Self {
        Self {
            element_id: "year".into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct StatsConfig {
    pub container_selector: String,
    pub handle_attribute: String,
    /// Handle value shipped in the page template; treated as "not configured"
    pub handle_placeholder: String,
    pub rating_id: String,
    pub latest_id: String,
    pub api_base: String,
    /// Text shown in both fields when the stats cannot be loaded
    pub unavailable_text: String,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            container_selector: ".cf-stats".into(),
            handle_attribute: "data-cf-handle".into(),
            handle_placeholder: "your_codeforces_handle".into(),
            rating_id: "cf-rating-value".into(),
            latest_id: "cf-latest-value".into(),
            api_base: "https://codeforces.com/api".into(),
            unavailable_text: "\u{2014}".into(),
        }
    }
}

/// Maximum level forwarded to the browser console
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Load configuration from the page, falling back to defaults when the page
/// carries no configuration block.
pub fn load_config<P: Page>(page: &P) -> Result<PageConfig, ConfigError> {
    let Some(element) = page.element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(PageConfig::default());
    };
    match page.text(&element) {
        Some(text) if !text.trim().is_empty() => PageConfig::from_json(&text),
        _ => Ok(PageConfig::default()),
    }
}
