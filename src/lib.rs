//! # folio
//!
//! A single-page static site generator for personal portfolios. One JSON
//! content document drives every piece of text and every link on the page:
//! project cards in three groups, a blog list, and contact links.
//!
//! # Architecture: One Pass, Fixed Order
//!
//! ```text
//! 1. Load      content.json (file or URL)  →  ContentDocument   (fallback on failure)
//! 2. Render    ContentDocument             →  mount-point markup
//! 3. Wiring    config.toml                 →  interaction settings JSON
//! 4. Metadata  clock + RNG                 →  date label, version, build tag
//! 5. Write     page + assets               →  dist/index.html
//! ```
//!
//! [`generate::build_site`] is the composition root: it constructs each step
//! in this order and holds no state once the build returns.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Typed Content Document, strict decode, fallback document, link transforms |
//! | [`loader`] | Reads or fetches the document; never fails, falls back with a warning |
//! | [`render`] | Projects the document into mount-point markup using Maud |
//! | [`interactions`] | Reveal, nav, scroll, parallax and theme settings handed to `site.js` |
//! | [`metadata`] | Date label, version string, random build tag |
//! | [`generate`] | Page assembly and output writing |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Strict Content Decoding
//!
//! The content document is decoded into typed structs with unknown keys
//! rejected and every card field required. A document that fails to decode
//! is treated exactly like one that failed to load: the built-in fallback is
//! used and a warning is logged. Missing *sections* are fine; that card group
//! is simply not on the page.
//!
//! ## Maud Over String Templates
//!
//! All interpolation goes through Maud, which escapes by default. Content text
//! is always data, never markup.
//!
//! ## Interaction Settings Come From Config
//!
//! The browser script hard-codes no numbers. Thresholds, offsets, glyphs
//! and the stagger mode are defined in [`interactions`], configured through
//! `config.toml`, and embedded in the page as JSON. The script's behavior is
//! tested in a real browser.

pub mod config;
pub mod content;
pub mod generate;
pub mod interactions;
pub mod loader;
pub mod metadata;
pub mod output;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
