//! Shared test utilities.
//!
//! Provides a richer sample document than the built-in fallback, a temp
//! content directory builder, and small string helpers for asserting on
//! rendered markup without pulling in an HTML parser.
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let html = render_cards(&sample_document().sections.ai.unwrap().items, true);
//! assert_eq!(count(&html.into_string(), "card-icon"), 2);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::content::{BlogPost, ContentDocument, Item, Section};

// =========================================================================
// Fixtures
// =========================================================================

fn item(title: &str, date: &str, tags: &[&str], image: &str) -> Item {
    Item {
        title: title.to_string(),
        date: date.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        insight: format!("Notes on {title}."),
        image: image.to_string(),
    }
}

/// The fallback document with several items per section and two posts.
pub fn sample_document() -> ContentDocument {
    let mut doc = ContentDocument::fallback();
    doc.sections.marketing = Some(Section {
        items: vec![
            item("Content vs Copy", "NOV 2024", &["STRATEGY", "WRITING"], "m-1.jpg"),
            item("Positioning Sprints", "SEP 2024", &["GTM"], "m-2.jpg"),
            item("Launch Narratives", "JUL 2024", &["LAUNCH", "STORY", "PR"], "m-3.jpg"),
        ],
    });
    doc.sections.web3 = Some(Section {
        items: vec![
            item("Token Economics", "OCT 2024", &["DEFI", "STRATEGY"], "w-1.jpg"),
            item("DAO Onboarding", "AUG 2024", &["COMMUNITY"], "w-2.jpg"),
        ],
    });
    doc.sections.ai = Some(Section {
        items: vec![
            item("AI-Native GTM", "DEC 2024", &["AI", "GROWTH"], "a-1.jpg"),
            item("Agents in Sales", "NOV 2024", &["AI"], "a-2.jpg"),
        ],
    });
    doc.blog.push(BlogPost {
        date: "NOV 02, 2024".to_string(),
        title: "Writing for Protocols".to_string(),
        deck: "Docs are marketing.".to_string(),
        href: "https://example.com/protocols".to_string(),
    });
    doc
}

/// A temp content directory holding `content.json` (the sample document)
/// and an `assets/` folder with one placeholder image.
pub fn setup_content_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_content(tmp.path(), &sample_document());
    let assets = tmp.path().join("assets");
    std::fs::create_dir_all(assets.join("img")).unwrap();
    std::fs::write(assets.join("img/m-1.jpg"), b"jpeg").unwrap();
    tmp
}

pub fn write_content(dir: &Path, doc: &ContentDocument) {
    let json = serde_json::to_string_pretty(doc).unwrap();
    std::fs::write(dir.join("content.json"), json).unwrap();
}

// =========================================================================
// Markup helpers
// =========================================================================

/// Non-overlapping occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Every substring found between `open` and the next `close`, in order.
pub fn extract_all<'a>(haystack: &'a str, open: &str, close: &str) -> Vec<&'a str> {
    let mut found = Vec::new();
    let mut rest = haystack;
    while let Some(start) = rest.find(open) {
        let after = &rest[start + open.len()..];
        match after.find(close) {
            Some(end) => {
                found.push(&after[..end]);
                rest = &after[end + close.len()..];
            }
            None => break,
        }
    }
    found
}
