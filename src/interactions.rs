//! Interaction settings for the generated page.
//!
//! The browser side lives in `static/site.js` and only wires DOM listeners.
//! Its thresholds, offsets, glyphs and stagger mode are configured here and
//! handed to the script as JSON via [`InteractionSettings`].

use serde::{Deserialize, Serialize};

/// How the reveal stagger index is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaggerMode {
    /// Position among the entries of one intersection batch.
    Batch,
    /// Position in document order within the element's mount point, emitted
    /// at render time as `data-reveal-index`.
    #[default]
    Document,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// Bottom root margin in pixels; negative shrinks the trigger zone.
    pub bottom_margin_px: i32,
    pub stagger_ms: u32,
    pub stagger: StaggerMode,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: -50,
            stagger_ms: 50,
            stagger: StaggerMode::Document,
        }
    }
}

impl RevealOptions {
    /// `rootMargin` string for the IntersectionObserver.
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.bottom_margin_px)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeGlyphs {
    pub dark: String,
    pub light: String,
}

impl Default for ThemeGlyphs {
    fn default() -> Self {
        Self {
            dark: "◐".to_string(),
            light: "◑".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollOptions {
    /// Fixed-header offset applied below the breakpoint.
    pub offset_px: f64,
    pub breakpoint_px: f64,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            offset_px: 60.0,
            breakpoint_px: 1200.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParallaxOptions {
    /// Parallax is registered only when the viewport is wider than this at
    /// load time.
    pub min_viewport_px: f64,
    pub factor: f64,
}

impl Default for ParallaxOptions {
    fn default() -> Self {
        Self {
            min_viewport_px: 768.0,
            factor: 0.5,
        }
    }
}

/// Everything `site.js` needs, embedded in the page as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionSettings {
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub stagger_ms: u32,
    pub stagger: StaggerMode,
    pub section_threshold: f64,
    pub scroll_offset_px: f64,
    pub scroll_breakpoint_px: f64,
    pub parallax_min_viewport_px: f64,
    pub parallax_factor: f64,
    pub glyphs: ThemeGlyphs,
}

impl InteractionSettings {
    pub fn new(
        reveal: &RevealOptions,
        section_threshold: f64,
        scroll: &ScrollOptions,
        parallax: &ParallaxOptions,
        glyphs: &ThemeGlyphs,
    ) -> Self {
        Self {
            reveal_threshold: reveal.threshold,
            reveal_root_margin: reveal.root_margin(),
            stagger_ms: reveal.stagger_ms,
            stagger: reveal.stagger,
            section_threshold,
            scroll_offset_px: scroll.offset_px,
            scroll_breakpoint_px: scroll.breakpoint_px,
            parallax_min_viewport_px: parallax.min_viewport_px,
            parallax_factor: parallax.factor,
            glyphs: glyphs.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
