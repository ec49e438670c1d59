//! Site generation: the composition root.
//!
//! [`build_site`] owns the whole build and runs each step once, in order:
//!
//! ```text
//! 1. Config     content/config.toml  → SiteConfig
//! 2. Load       content source       → ContentDocument (or fallback)
//! 3. Render     ContentDocument      → mount-point markup
//! 4. Wiring     SiteConfig           → interaction settings JSON
//! 5. Metadata   clock + RNG          → date label, version, build tag
//! 6. Write      page + assets        → dist/
//! ```
//!
//! Steps 4 and 5 do not depend on the content. Nothing is retained between
//! builds.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html        # The page: inline CSS, settings JSON, site.js
//! └── img/…             # Everything under content/assets/, copied verbatim
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors injected from config)
//! - `static/site.js`: Interaction wiring, driven by the settings JSON

use crate::config::{self, ConfigError, SiteConfig};
use crate::content::{ContentDocument, Links, SectionKey, SocialChannel};
use crate::interactions::InteractionSettings;
use crate::loader::{self, ContentSource, Loaded, Origin};
use crate::metadata::BuildMetadata;
use crate::render::{self, MountPoint};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Asset copy error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// What a build produced, for CLI output.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub source: String,
    pub origin: Origin,
    pub index_path: PathBuf,
    /// Rendered mount points with their element counts, in page order.
    pub mounts: Vec<(MountPoint, usize)>,
    pub assets_copied: usize,
    pub metadata: BuildMetadata,
}

/// Run the full build for a content directory.
pub fn build_site(source_dir: &Path, output_dir: &Path) -> Result<BuildReport, GenerateError> {
    let config = config::load_config(source_dir)?;
    let source = ContentSource::parse(&config.content.source, source_dir);
    let loaded = loader::load(&source, config.content.timeout());
    let metadata = BuildMetadata::capture(
        &chrono::Local::now(),
        &mut rand::thread_rng(),
        config.metadata.version_major,
    );
    generate(&config, &source, &loaded, &metadata, source_dir, output_dir)
}

/// Render and write the site from already-loaded inputs.
pub fn generate(
    config: &SiteConfig,
    source: &ContentSource,
    loaded: &Loaded,
    metadata: &BuildMetadata,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<BuildReport, GenerateError> {
    let doc = &loaded.document;
    let mounts = render::render_mounts(doc, &config.layout.mounts);

    let page = render_page(config, doc, &mounts, metadata)?;

    fs::create_dir_all(output_dir)?;
    let assets_copied = copy_assets(&source_dir.join("assets"), output_dir)?;

    let index_path = output_dir.join("index.html");
    fs::write(&index_path, page.into_string())?;
    log::info!("Generated {}", index_path.display());

    Ok(BuildReport {
        source: source.to_string(),
        origin: loaded.origin.clone(),
        index_path,
        mounts: config
            .layout
            .mounts
            .iter()
            .filter(|m| mounts.contains_key(*m))
            .map(|&m| (m, mount_len(doc, m)))
            .collect(),
        assets_copied,
        metadata: metadata.clone(),
    })
}

fn mount_len(doc: &ContentDocument, mount: MountPoint) -> usize {
    match mount.section() {
        Some(key) => doc.sections.get(key).map_or(0, |s| s.items.len()),
        None => doc.blog.len(),
    }
}

/// Copy `assets/` into the output root. Returns the number of files copied;
/// a missing assets directory copies nothing. A top-level `index.html` is
/// skipped so it cannot replace the generated page.
fn copy_assets(assets_dir: &Path, output_dir: &Path) -> Result<usize, GenerateError> {
    if !assets_dir.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(assets_dir).min_depth(1) {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(assets_dir) else {
            continue;
        };
        if rel == Path::new("index.html") {
            log::warn!(
                "Skipping {}: index.html is generated",
                entry.path().display()
            );
            continue;
        }
        let dst = output_dir.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst)?;
        } else {
            if let Some(parent) = dst.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dst)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Settings JSON safe to embed in a `<script>` element.
fn settings_json(config: &SiteConfig) -> Result<String, serde_json::Error> {
    let settings = InteractionSettings::new(
        &config.interactions.reveal,
        config.interactions.section_threshold,
        &config.interactions.scroll,
        &config.interactions.parallax,
        &config.glyphs,
    );
    Ok(settings.to_json()?.replace('<', "\\u003c"))
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(config: &SiteConfig, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (config.site.title) }
                @if !config.site.description.is_empty() {
                    meta name="description" content=(config.site.description);
                }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Header with desktop nav, theme toggle and the mobile menu button
fn site_header(config: &SiteConfig) -> Markup {
    html! {
        header.site-header {
            a.logo href="#top" { (config.site.title) }
            nav.site-nav {
                @for link in &config.layout.nav {
                    a.nav-link href=(link.href) { (link.label) }
                }
            }
            button.theme-toggle type="button" aria-label="Toggle theme" {
                span.theme-icon { (config.glyphs.dark) }
            }
            button.mobile-menu-toggle type="button" aria-label="Menu" {
                span.hamburger-line {}
                span.hamburger-line {}
                span.hamburger-line {}
            }
        }
        nav.mobile-nav {
            @for link in &config.layout.nav {
                a.nav-link href=(link.href) { (link.label) }
            }
        }
    }
}

fn hero(doc: &ContentDocument) -> Markup {
    html! {
        section.hero id="top" {
            div.hero-bg {}
            div.hero-inner {
                p.hero-kicker data-reveal { (doc.hero.kicker) }
                h1.hero-headline data-reveal { (doc.hero.headline) }
                p.hero-deck data-reveal { (doc.hero.deck) }
                @if !doc.hero.ctas.is_empty() {
                    div.hero-ctas data-reveal {
                        @for cta in &doc.hero.ctas {
                            a class=(cta.variant.class()) href=(cta.href) { (cta.label) }
                        }
                    }
                }
            }
        }
    }
}

fn group_heading(key: SectionKey) -> &'static str {
    match key {
        SectionKey::Marketing => "Marketing",
        SectionKey::Web3 => "Web3",
        SectionKey::Ai => "AI",
    }
}

/// Card groups, one block per rendered card mount
fn work_section(config: &SiteConfig, mounts: &BTreeMap<MountPoint, Markup>) -> Markup {
    let groups: Vec<(MountPoint, SectionKey, &Markup)> = config
        .layout
        .mounts
        .iter()
        .filter_map(|&m| Some((m, m.section()?, mounts.get(&m)?)))
        .collect();

    html! {
        @if !groups.is_empty() {
            section.work id="work" {
                h2.section-title data-reveal { "Work" }
                @for (mount, key, markup) in groups {
                    div.card-group {
                        h3.group-title data-reveal { (group_heading(key)) }
                        div.cards-grid id=(mount.id()) { (markup) }
                    }
                }
            }
        }
    }
}

fn writing_section(mounts: &BTreeMap<MountPoint, Markup>) -> Markup {
    html! {
        @if let Some(markup) = mounts.get(&MountPoint::BlogItems) {
            section.writing id="writing" {
                h2.section-title data-reveal { "Writing" }
                div.blog-list id=(MountPoint::BlogItems.id()) { (markup) }
            }
        }
    }
}

/// Contact block: one primary link per channel
fn contact_section(links: &Links) -> Markup {
    html! {
        section.contact id="contact" {
            h2.section-title data-reveal { "Let's Build Together" }
            div.contact-links data-reveal {
                @for channel in SocialChannel::ALL {
                    (render::render_social_link(links, channel, true, &format!("Follow on {}", channel.label())))
                }
            }
        }
    }
}

fn site_footer(config: &SiteConfig, links: &Links, metadata: &BuildMetadata) -> Markup {
    html! {
        footer.site-footer {
            div.footer-social {
                @for channel in SocialChannel::ALL {
                    (render::render_social_link(links, channel, false, channel.label()))
                }
            }
            @if !config.site.owner.is_empty() {
                p.copyright { "© " (config.site.owner) }
            }
        }
        div.corner-meta.top-left { (metadata.date_label) }
        div.corner-meta.bottom-right {
            span.version { (metadata.version) }
            " "
            span.hash { (metadata.build_label()) }
        }
    }
}

// ============================================================================
// Page Renderer
// ============================================================================

/// Renders the complete page.
pub fn render_page(
    config: &SiteConfig,
    doc: &ContentDocument,
    mounts: &BTreeMap<MountPoint, Markup>,
    metadata: &BuildMetadata,
) -> Result<Markup, GenerateError> {
    let css = format!("{}\n\n{}", config::generate_color_css(&config.colors), CSS_STATIC);
    let settings = settings_json(config)?;

    let content = html! {
        (site_header(config))
        main {
            (hero(doc))
            (work_section(config, mounts))
            (writing_section(mounts))
            (contact_section(&doc.links))
        }
        (site_footer(config, &doc.links, metadata))
        script type="application/json" id="folio-settings" { (PreEscaped(settings)) }
        script { (PreEscaped(JS)) }
    };

    Ok(base_document(config, &css, content))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn metadata() -> BuildMetadata {
        BuildMetadata {
            date_label: "DEC 2024".to_string(),
            version: "v11.2024".to_string(),
            build_tag: "abc123".to_string(),
        }
    }

    fn page(config: &SiteConfig, doc: &ContentDocument) -> String {
        let mounts = render::render_mounts(doc, &config.layout.mounts);
        render_page(config, doc, &mounts, &metadata())
            .unwrap()
            .into_string()
    }

    #[test]
    fn page_includes_doctype_and_title() {
        let mut config = SiteConfig::default();
        config.site.title = "Nicholas Woo".to_string();
        let html = page(&config, &sample_document());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Nicholas Woo</title>"));
    }

    #[test]
    fn page_contains_all_mount_points() {
        let html = page(&SiteConfig::default(), &sample_document());
        for mount in MountPoint::ALL {
            assert!(html.contains(&format!(r#"id="{}""#, mount.id())), "{mount}");
        }
    }

    #[test]
    fn undeclared_mount_is_left_out() {
        let mut config = SiteConfig::default();
        config.layout.mounts = vec![MountPoint::AiCards];
        let html = page(&config, &sample_document());
        assert!(html.contains(r#"id="ai-cards""#));
        assert!(!html.contains(r#"id="marketing-cards""#));
        assert!(!html.contains(r#"id="blog-items""#));
        assert!(!html.contains(r#"id="writing""#));
    }

    #[test]
    fn missing_sections_drop_the_work_block() {
        let mut doc = sample_document();
        doc.sections = Default::default();
        let html = page(&SiteConfig::default(), &doc);
        assert!(!html.contains(r#"id="work""#));
        assert!(html.contains(r#"id="blog-items""#));
    }

    #[test]
    fn page_has_interaction_hooks() {
        let html = page(&SiteConfig::default(), &sample_document());
        assert!(html.contains(r#"class="mobile-menu-toggle""#));
        assert!(html.contains(r#"class="mobile-nav""#));
        assert!(html.contains(r#"class="theme-toggle""#));
        assert!(html.contains(r#"<span class="theme-icon">◐</span>"#));
        assert!(html.contains(r#"class="hero-bg""#));
        assert_eq!(count(&html, r#"class="nav-link""#), 6);
    }

    #[test]
    fn page_has_metadata_corners() {
        let html = page(&SiteConfig::default(), &sample_document());
        assert!(html.contains(r#"<div class="corner-meta top-left">DEC 2024</div>"#));
        assert!(html.contains(r#"<span class="version">v11.2024</span>"#));
        assert!(html.contains(r#"<span class="hash">build:abc123</span>"#));
    }

    #[test]
    fn page_has_social_links_for_every_channel() {
        let doc = sample_document();
        let html = page(&SiteConfig::default(), &doc);
        assert_eq!(count(&html, r#"data-social="telegram""#), 2);
        assert_eq!(count(&html, r#"data-social="x""#), 2);
        assert_eq!(count(&html, r#"data-social="email""#), 2);
        assert_eq!(count(&html, r#"class="contact-link""#), 3);
        assert!(html.contains(&format!("{} on Telegram", doc.links.telegram)));
    }

    #[test]
    fn settings_json_is_embedded() {
        let html = page(&SiteConfig::default(), &sample_document());
        let json = extract_all(
            &html,
            r#"<script type="application/json" id="folio-settings">"#,
            "</script>",
        );
        assert_eq!(json.len(), 1);
        let settings: InteractionSettings = serde_json::from_str(json[0]).unwrap();
        assert_eq!(settings.scroll_offset_px, 60.0);
        assert_eq!(settings.glyphs.light, "◑");
    }

    #[test]
    fn settings_json_cannot_close_script() {
        let mut config = SiteConfig::default();
        config.glyphs.dark = "</script><b>".to_string();
        let json = settings_json(&config).unwrap();
        assert!(!json.contains("</script>"));
        let settings: InteractionSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings.glyphs.dark, "</script><b>");
    }

    #[test]
    fn page_render_is_deterministic() {
        let config = SiteConfig::default();
        let doc = sample_document();
        assert_eq!(page(&config, &doc), page(&config, &doc));
    }

    #[test]
    fn cta_buttons_use_variant_classes() {
        let html = page(&SiteConfig::default(), &ContentDocument::fallback());
        assert!(html.contains(r##"<a class="btn btn-primary" href="#contact">"##));
        assert!(html.contains(r##"<a class="btn btn-secondary" href="#work">"##));
    }

    #[test]
    fn colors_are_injected() {
        let mut config = SiteConfig::default();
        config.colors.dark.accent = "#ff00ff".to_string();
        let html = page(&config, &sample_document());
        assert!(html.contains("--color-accent: #ff00ff"));
    }

    // =========================================================================
    // build_site / generate tests
    // =========================================================================

    #[test]
    fn build_site_writes_index_and_assets() {
        let content = setup_content_dir();
        let out = TempDir::new().unwrap();

        let report = build_site(content.path(), out.path()).unwrap();
        assert_eq!(report.origin, Origin::Source);
        assert!(out.path().join("index.html").exists());
        assert!(out.path().join("img/m-1.jpg").exists());
        assert_eq!(report.assets_copied, 1);
        assert_eq!(
            report.mounts,
            vec![
                (MountPoint::MarketingCards, 3),
                (MountPoint::Web3Cards, 2),
                (MountPoint::AiCards, 2),
                (MountPoint::BlogItems, 2),
            ]
        );
    }

    #[test]
    fn asset_named_index_html_does_not_replace_page() {
        let content = setup_content_dir();
        fs::write(content.path().join("assets/index.html"), "STALE").unwrap();
        fs::write(content.path().join("assets/img/index.html"), "nested").unwrap();
        let out = TempDir::new().unwrap();

        let report = build_site(content.path(), out.path()).unwrap();
        let html = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(!html.contains("STALE"));
        // Only the top-level page name is reserved
        assert!(out.path().join("img/index.html").exists());
        assert_eq!(report.assets_copied, 2);
    }

    #[test]
    fn build_site_falls_back_without_content() {
        let content = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();

        let report = build_site(content.path(), out.path()).unwrap();
        assert!(matches!(report.origin, Origin::Fallback { .. }));
        let html = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(html.contains("Content vs Copy"));
        assert_eq!(report.assets_copied, 0);
    }

    #[test]
    fn build_site_rejects_bad_config() {
        let content = setup_content_dir();
        fs::write(content.path().join("config.toml"), "[site]\nbogus = 1\n").unwrap();
        let out = TempDir::new().unwrap();
        assert!(matches!(
            build_site(content.path(), out.path()),
            Err(GenerateError::Config(_))
        ));
    }

    #[test]
    fn generate_is_repeatable() {
        let content = setup_content_dir();
        let out = TempDir::new().unwrap();
        let config = SiteConfig::default();
        let source = ContentSource::parse("content.json", content.path());
        let loaded = loader::load(&source, config.content.timeout());

        generate(&config, &source, &loaded, &metadata(), content.path(), out.path()).unwrap();
        let first = fs::read_to_string(out.path().join("index.html")).unwrap();
        generate(&config, &source, &loaded, &metadata(), content.path(), out.path()).unwrap();
        let second = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert_eq!(first, second);
    }
}
