//! Projection of the Content Document into mount-point markup.
//!
//! Each [`MountPoint`] is a named container on the page (`marketing-cards`,
//! `web3-cards`, `ai-cards`, `blog-items`). Rendering is a pure function of
//! the document: no state is retained and two renders of the same document
//! produce identical bytes.
//!
//! All text is interpolated through maud, so content is always escaped and
//! never interpreted as markup.
//!
//! ## Card markup
//!
//! ```html
//! <article class="card" data-reveal data-reveal-index="0">
//!   <div class="card-image">
//!     <img src="marketing-1.jpg" alt="Content vs Copy" loading="lazy">
//!     <div class="card-meta">NOV 2024</div>
//!     <!-- svg.card-icon, ai group only -->
//!   </div>
//!   <div class="card-content">
//!     <h3 class="card-title">Content vs Copy</h3>
//!     <div class="card-tags"><span class="tag">STRATEGY</span>…</div>
//!     <p class="card-insight">…</p>
//!   </div>
//! </article>
//! ```

use crate::content::{BlogPost, ContentDocument, Item, Links, SectionKey, SocialChannel};
use maud::{Markup, PreEscaped, html};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Shield glyph shown on AI cards.
const CARD_ICON: &str = r#"<svg class="card-icon" viewBox="0 0 24 24" aria-hidden="true"><path d="M12 2L2 7v10c0 5.55 3.84 10.74 9 12 5.16-1.26 9-6.45 9-12V7l-10-5z"/></svg>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MountPoint {
    #[serde(rename = "marketing-cards")]
    MarketingCards,
    #[serde(rename = "web3-cards")]
    Web3Cards,
    #[serde(rename = "ai-cards")]
    AiCards,
    #[serde(rename = "blog-items")]
    BlogItems,
}

impl MountPoint {
    pub const ALL: [MountPoint; 4] = [
        MountPoint::MarketingCards,
        MountPoint::Web3Cards,
        MountPoint::AiCards,
        MountPoint::BlogItems,
    ];

    /// DOM id of the container.
    pub fn id(self) -> &'static str {
        match self {
            MountPoint::MarketingCards => "marketing-cards",
            MountPoint::Web3Cards => "web3-cards",
            MountPoint::AiCards => "ai-cards",
            MountPoint::BlogItems => "blog-items",
        }
    }

    /// Backing card section; `None` for the blog list.
    pub fn section(self) -> Option<SectionKey> {
        match self {
            MountPoint::MarketingCards => Some(SectionKey::Marketing),
            MountPoint::Web3Cards => Some(SectionKey::Web3),
            MountPoint::AiCards => Some(SectionKey::Ai),
            MountPoint::BlogItems => None,
        }
    }

    pub fn shows_icon(self) -> bool {
        self == MountPoint::AiCards
    }
}

impl fmt::Display for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Renders one card per item, in order.
pub fn render_cards(items: &[Item], show_icon: bool) -> Markup {
    html! {
        @for (idx, item) in items.iter().enumerate() {
            article.card data-reveal data-reveal-index=(idx) {
                div.card-image {
                    img src=(item.image) alt=(item.title) loading="lazy";
                    div.card-meta { (item.date) }
                    @if show_icon {
                        (PreEscaped(CARD_ICON))
                    }
                }
                div.card-content {
                    h3.card-title { (item.title) }
                    div.card-tags {
                        @for tag in &item.tags {
                            span.tag { (tag) }
                        }
                    }
                    p.card-insight { (item.insight) }
                }
            }
        }
    }
}

pub fn render_blog(posts: &[BlogPost]) -> Markup {
    html! {
        @for (idx, post) in posts.iter().enumerate() {
            a.blog-item href=(post.href) data-reveal data-reveal-index=(idx) {
                div.blog-date { (post.date) }
                h3.blog-title { (post.title) }
                p.blog-deck { (post.deck) }
            }
        }
    }
}

/// Contents of a single mount point, or `None` when its section is absent.
pub fn render_mount(doc: &ContentDocument, mount: MountPoint) -> Option<Markup> {
    match mount.section() {
        Some(key) => doc
            .sections
            .get(key)
            .map(|section| render_cards(&section.items, mount.shows_icon())),
        None => Some(render_blog(&doc.blog)),
    }
}

/// Renders the mount points the page declares. Mount points whose data is
/// missing are skipped.
pub fn render_mounts(
    doc: &ContentDocument,
    mounts: &[MountPoint],
) -> BTreeMap<MountPoint, Markup> {
    mounts
        .iter()
        .filter_map(|&mount| render_mount(doc, mount).map(|markup| (mount, markup)))
        .collect()
}

/// A social link anchor.
///
/// Every link gets `data-social` and its channel target. Primary contact
/// links also carry `contact-link` and show the channel's display text;
/// x keeps `default_text` either way.
pub fn render_social_link(
    links: &Links,
    channel: SocialChannel,
    primary: bool,
    default_text: &str,
) -> Markup {
    let text = if primary {
        links
            .contact_text(channel)
            .unwrap_or_else(|| default_text.to_string())
    } else {
        default_text.to_string()
    };
    let external = channel != SocialChannel::Email;

    html! {
        a class=[primary.then_some("contact-link")]
            href=(links.href(channel))
            data-social=(channel.as_str())
            target=[external.then_some("_blank")]
            rel=[external.then_some("noopener")] {
            (text)
        }
    }
}
