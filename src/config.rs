//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by an optional `config.toml` in the content directory.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Portfolio"
//! description = ""
//! owner = ""                     # Footer copyright line
//!
//! [content]
//! source = "content.json"        # Path (relative to content dir) or http(s) URL
//! timeout_secs = 10              # Remote fetch timeout
//!
//! [layout]
//! mounts = ["marketing-cards", "web3-cards", "ai-cards", "blog-items"]
//! nav = [{ label = "Work", href = "#work" }, …]
//!
//! [interactions]
//! section_threshold = 0.5        # Visible fraction that marks a nav link active
//!
//! [interactions.reveal]
//! threshold = 0.1
//! bottom_margin_px = -50
//! stagger_ms = 50
//! stagger = "document"           # or "batch"
//!
//! [interactions.scroll]
//! offset_px = 60.0
//! breakpoint_px = 1200.0
//!
//! [interactions.parallax]
//! min_viewport_px = 768.0
//! factor = 0.5
//!
//! [glyphs]
//! dark = "◐"
//! light = "◑"
//!
//! [colors.dark]                  # Default theme
//! [colors.light]                 # Applied with the light-theme class
//!
//! [metadata]
//! version_major = 11
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::interactions::{ParallaxOptions, RevealOptions, ScrollOptions, ThemeGlyphs};
use crate::render::MountPoint;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page title and footer text.
    pub site: SiteInfo,
    /// Where the Content Document comes from.
    pub content: ContentConfig,
    /// Mount points and navigation present on the page.
    pub layout: LayoutConfig,
    /// Parameters handed to the interaction script.
    pub interactions: InteractionsConfig,
    /// Theme toggle glyphs.
    pub glyphs: ThemeGlyphs,
    /// Color schemes for the dark (default) and light themes.
    pub colors: ColorConfig,
    /// Version string settings.
    pub metadata: MetadataConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let reveal = &self.interactions.reveal;
        if !(0.0..=1.0).contains(&reveal.threshold) {
            return Err(ConfigError::Validation(
                "interactions.reveal.threshold must be 0.0-1.0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.interactions.section_threshold) {
            return Err(ConfigError::Validation(
                "interactions.section_threshold must be 0.0-1.0".into(),
            ));
        }
        if self.interactions.scroll.offset_px < 0.0 {
            return Err(ConfigError::Validation(
                "interactions.scroll.offset_px must not be negative".into(),
            ));
        }
        if self.content.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "content.timeout_secs must be non-zero".into(),
            ));
        }
        if self.content.source.trim().is_empty() {
            return Err(ConfigError::Validation(
                "content.source must not be empty".into(),
            ));
        }
        for (idx, mount) in self.layout.mounts.iter().enumerate() {
            if self.layout.mounts[..idx].contains(mount) {
                return Err(ConfigError::Validation(format!(
                    "layout.mounts lists {mount} more than once"
                )));
            }
        }
        if let Some(link) = self.layout.nav.iter().find(|l| l.href.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "layout.nav entry '{}' has an empty href",
                link.label
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    pub title: String,
    pub description: String,
    /// Name shown in the footer. Empty hides the copyright line.
    pub owner: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: String::new(),
            owner: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    /// Path relative to the content directory, absolute path, or URL.
    pub source: String,
    /// Remote fetch timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: "content.json".to_string(),
            timeout_secs: 10,
        }
    }
}

impl ContentConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Mount points the page template contains, in page order. Leaving one
    /// out drops that block from the page.
    pub mounts: Vec<MountPoint>,
    /// Header and mobile navigation links.
    pub nav: Vec<NavLink>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mounts: MountPoint::ALL.to_vec(),
            nav: vec![
                NavLink::new("Work", "#work"),
                NavLink::new("Writing", "#writing"),
                NavLink::new("Contact", "#contact"),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InteractionsConfig {
    /// Visible fraction at which a section's nav link becomes active.
    pub section_threshold: f64,
    pub reveal: RevealOptions,
    pub scroll: ScrollOptions,
    pub parallax: ParallaxOptions,
}

impl Default for InteractionsConfig {
    fn default() -> Self {
        Self {
            section_threshold: 0.5,
            reveal: RevealOptions::default(),
            scroll: ScrollOptions::default(),
            parallax: ParallaxOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetadataConfig {
    /// Major part of the `v{major}.{year}` version string.
    pub version_major: u32,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self { version_major: 11 }
    }
}

/// Color configuration for the two themes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Default scheme.
    pub dark: ColorScheme,
    /// Scheme applied when the root carries `light-theme`.
    pub light: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            dark: ColorScheme::default_dark(),
            light: ColorScheme::default_light(),
        }
    }
}

/// Individual color scheme.
///
/// Every field is required when a scheme is decoded on its own. Partial
/// schemes in `config.toml` are completed by [`merge_toml`] from the stock
/// scheme of the same theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background.
    pub background: String,
    /// Card and panel background.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Dates, decks, meta text.
    pub text_muted: String,
    /// Tags, active nav link, primary buttons.
    pub accent: String,
    pub border: String,
}

impl ColorScheme {
    pub fn default_dark() -> Self {
        Self {
            background: "#0b0b0c".to_string(),
            surface: "#151517".to_string(),
            text: "#f2f2f0".to_string(),
            text_muted: "#8a8a88".to_string(),
            accent: "#d4ff3a".to_string(),
            border: "#2a2a2d".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#f4f3ef".to_string(),
            surface: "#ffffff".to_string(),
            text: "#111111".to_string(),
            text_muted: "#666662".to_string(),
            accent: "#3a4bff".to_string(),
            border: "#dcdad4".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value
/// (arrays included, so `layout.mounts` is replaced, not appended).
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# folio configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Site
# ---------------------------------------------------------------------------
[site]
title = "Portfolio"
description = ""
# Name in the footer copyright line. Empty hides the line.
owner = ""

# ---------------------------------------------------------------------------
# Content document
# ---------------------------------------------------------------------------
[content]
# Path relative to the content directory, an absolute path, or an
# http(s) URL. On any load failure the built-in fallback content is used.
source = "content.json"
# Timeout for remote sources, in seconds.
timeout_secs = 10

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[layout]
# Mount points present on the page. Remove one to drop that block.
mounts = ["marketing-cards", "web3-cards", "ai-cards", "blog-items"]
nav = [
    { label = "Work", href = "#work" },
    { label = "Writing", href = "#writing" },
    { label = "Contact", href = "#contact" },
]

# ---------------------------------------------------------------------------
# Interactions
# ---------------------------------------------------------------------------
[interactions]
# Visible fraction of a section that marks its nav link active.
section_threshold = 0.5

[interactions.reveal]
# Visible fraction that triggers a reveal.
threshold = 0.1
# Bottom root margin in px. Negative values shrink the trigger zone.
bottom_margin_px = -50
# Delay step between revealed elements, in ms.
stagger_ms = 50
# "document": index in page order. "batch": index within one observer batch.
stagger = "document"

[interactions.scroll]
# Offset subtracted from anchor targets below the breakpoint (fixed header).
offset_px = 60.0
breakpoint_px = 1200.0

[interactions.parallax]
# Parallax is enabled when the viewport is wider than this at load time.
min_viewport_px = 768.0
# Fraction of the scroll offset applied to the hero background.
factor = 0.5

# ---------------------------------------------------------------------------
# Theme toggle
# ---------------------------------------------------------------------------
[glyphs]
dark = "◐"
light = "◑"

# ---------------------------------------------------------------------------
# Colors - dark theme (default)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0b0b0c"
surface = "#151517"
text = "#f2f2f0"
text_muted = "#8a8a88"
accent = "#d4ff3a"
border = "#2a2a2d"

# ---------------------------------------------------------------------------
# Colors - light theme (after the theme toggle)
# ---------------------------------------------------------------------------
[colors.light]
background = "#f4f3ef"
surface = "#ffffff"
text = "#111111"
text_muted = "#666662"
accent = "#3a4bff"
border = "#dcdad4"

# ---------------------------------------------------------------------------
# Build metadata
# ---------------------------------------------------------------------------
[metadata]
# Version string is rendered as v{version_major}.{year}.
version_major = 11
"##
}

fn scheme_vars(scheme: &ColorScheme) -> String {
    format!(
        r#"    --color-bg: {};
    --color-surface: {};
    --color-text: {};
    --color-text-muted: {};
    --color-accent: {};
    --color-border: {};"#,
        scheme.background,
        scheme.surface,
        scheme.text,
        scheme.text_muted,
        scheme.accent,
        scheme.border,
    )
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        ":root {{\n{}\n}}\n\n:root.light-theme {{\n{}\n}}",
        scheme_vars(&colors.dark),
        scheme_vars(&colors.light),
    )
}
