//! CLI output formatting for `check` and `build`.
//!
//! # Information-First Display
//!
//! Output is **content-centric, not file-centric**. Each entity (card group,
//! card, post, link) leads with its positional index and title; details like
//! dates, tags and link targets follow as indented context lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Content: content/content.json
//! Hero
//!     SHARP NARRATIVE. OPERATOR-GRADE GTM. HIGH-SIGNAL WRITING.
//!     2 calls to action
//!
//! Sections
//! 001 marketing (1 item)
//!     001 Content vs Copy
//!         Date: NOV 2024
//!         Tags: STRATEGY, WRITING
//!
//! Blog
//! 001 Why You Should Hire a Web3 Writer
//!     Date: DEC 15, 2024
//!
//! Links
//!     telegram → https://t.me/nikolei666
//! ```
//!
//! ## Build
//!
//! ```text
//! Content: content/content.json
//! marketing-cards → 3 cards
//! blog-items → 2 posts
//! Assets: 4 files copied
//! Metadata: DEC 2024 · v11.2024 · build:k3x9q0
//! Generated dist/index.html
//! ```
//!
//! When the fallback document is in use, the `Content:` line says so and
//! names the reason.
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::content::{ContentDocument, SocialChannel};
use crate::generate::BuildReport;
use crate::loader::{Loaded, Origin};
use crate::render::MountPoint;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 item`, `3 items`
fn plural(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    }
}

fn content_line(source: &str, origin: &Origin) -> String {
    match origin {
        Origin::Source => format!("Content: {source}"),
        Origin::Fallback { reason } => {
            format!("Content: built-in fallback ({source}: {reason})")
        }
    }
}

// ============================================================================
// check
// ============================================================================

/// Format an inventory of the loaded Content Document.
pub fn format_check_output(loaded: &Loaded, source: &str) -> Vec<String> {
    let doc: &ContentDocument = &loaded.document;
    let mut lines = vec![content_line(source, &loaded.origin)];

    lines.push("Hero".to_string());
    lines.push(format!("{}{}", indent(1), truncate(&doc.hero.headline, 72)));
    lines.push(format!(
        "{}{}",
        indent(1),
        plural(doc.hero.ctas.len(), "call to action", "calls to action")
    ));

    lines.push(String::new());
    lines.push("Sections".to_string());
    if doc.sections.iter().next().is_none() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (pos, (key, section)) in doc.sections.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(pos + 1),
            key.as_str(),
            plural(section.items.len(), "item", "items")
        ));
        for (idx, item) in section.items.iter().enumerate() {
            lines.push(format!(
                "{}{} {}",
                indent(1),
                format_index(idx + 1),
                item.title
            ));
            lines.push(format!("{}Date: {}", indent(2), item.date));
            if !item.tags.is_empty() {
                lines.push(format!("{}Tags: {}", indent(2), item.tags.join(", ")));
            }
        }
    }

    if !doc.blog.is_empty() {
        lines.push(String::new());
        lines.push("Blog".to_string());
        for (idx, post) in doc.blog.iter().enumerate() {
            lines.push(format!("{} {}", format_index(idx + 1), post.title));
            lines.push(format!("{}Date: {}", indent(1), post.date));
        }
    }

    lines.push(String::new());
    lines.push("Links".to_string());
    for channel in SocialChannel::ALL {
        lines.push(format!(
            "{}{} \u{2192} {}",
            indent(1),
            channel.as_str(),
            doc.links.href(channel)
        ));
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_output(loaded: &Loaded, source: &str) {
    for line in format_check_output(loaded, source) {
        println!("{}", line);
    }
}

// ============================================================================
// build
// ============================================================================

fn mount_summary(mount: MountPoint, count: usize) -> String {
    let what = match mount {
        MountPoint::BlogItems => plural(count, "post", "posts"),
        _ => plural(count, "card", "cards"),
    };
    format!("{} \u{2192} {}", mount.id(), what)
}

/// Format the result of a build.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = vec![content_line(&report.source, &report.origin)];
    for &(mount, count) in &report.mounts {
        lines.push(mount_summary(mount, count));
    }
    lines.push(format!(
        "Assets: {} copied",
        plural(report.assets_copied, "file", "files")
    ));
    lines.push(format!(
        "Metadata: {} \u{b7} {} \u{b7} {}",
        report.metadata.date_label,
        report.metadata.version,
        report.metadata.build_label()
    ));
    lines.push(format!("Generated {}", report.index_path.display()));
    lines
}

/// Print build output to stdout.
pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::BuildMetadata;
    use crate::test_helpers::*;
    use std::path::PathBuf;

    fn loaded(origin: Origin) -> Loaded {
        Loaded {
            document: ContentDocument::fallback(),
            origin,
        }
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ab—cd", 3), "ab—...");
    }

    #[test]
    fn check_output_lists_cards() {
        let lines = format_check_output(&loaded(Origin::Source), "content.json");
        assert_eq!(lines[0], "Content: content.json");
        assert!(lines.contains(&"001 marketing (1 item)".to_string()));
        assert!(lines.contains(&"    001 Content vs Copy".to_string()));
        assert!(lines.contains(&"        Tags: STRATEGY, WRITING".to_string()));
        assert!(lines.contains(&"003 ai (1 item)".to_string()));
        assert!(lines.contains(&"    2 calls to action".to_string()));
    }

    #[test]
    fn check_output_lists_link_targets() {
        let lines = format_check_output(&loaded(Origin::Source), "content.json");
        assert!(lines.contains(&"    telegram \u{2192} https://t.me/nikolei666".to_string()));
        assert!(lines.contains(&"    email \u{2192} mailto:nicholas.woojw@gmail.com".to_string()));
    }

    #[test]
    fn check_output_flags_fallback() {
        let lines = format_check_output(
            &loaded(Origin::Fallback {
                reason: "IO error: not found".to_string(),
            }),
            "content.json",
        );
        assert_eq!(
            lines[0],
            "Content: built-in fallback (content.json: IO error: not found)"
        );
    }

    #[test]
    fn check_output_without_sections() {
        let mut l = loaded(Origin::Source);
        l.document.sections = Default::default();
        let lines = format_check_output(&l, "content.json");
        assert!(lines.contains(&"    (none)".to_string()));
    }

    #[test]
    fn build_output_summarizes_mounts() {
        let doc = sample_document();
        let report = BuildReport {
            source: "content/content.json".to_string(),
            origin: Origin::Source,
            index_path: PathBuf::from("dist/index.html"),
            mounts: vec![
                (MountPoint::MarketingCards, 3),
                (MountPoint::AiCards, 1),
                (MountPoint::BlogItems, doc.blog.len()),
            ],
            assets_copied: 1,
            metadata: BuildMetadata {
                date_label: "DEC 2024".to_string(),
                version: "v11.2024".to_string(),
                build_tag: "abc123".to_string(),
            },
        };
        let lines = format_build_output(&report);
        assert_eq!(
            lines,
            vec![
                "Content: content/content.json",
                "marketing-cards \u{2192} 3 cards",
                "ai-cards \u{2192} 1 card",
                "blog-items \u{2192} 2 posts",
                "Assets: 1 file copied",
                "Metadata: DEC 2024 \u{b7} v11.2024 \u{b7} build:abc123",
                "Generated dist/index.html",
            ]
        );
    }
}
