//! The Content Document: every piece of text and every link on the page.
//!
//! The document is decoded once from JSON and never mutated afterwards.
//! Decoding is strict: unknown keys are rejected and every [`Item`] must carry
//! all five of its fields, so a half-shaped document fails here instead of
//! leaking empty strings into the rendered page.
//!
//! ```json
//! {
//!   "hero": { "kicker": "…", "headline": "…", "deck": "…", "ctas": [] },
//!   "sections": {
//!     "marketing": { "items": [ { "title": "…", "date": "NOV 2024",
//!                                 "tags": ["STRATEGY"], "insight": "…",
//!                                 "image": "marketing-1.jpg" } ] }
//!   },
//!   "blog": [ { "date": "…", "title": "…", "deck": "…", "href": "#" } ],
//!   "links": { "telegram": "@handle", "x": "https://x.com/…", "email": "a@b.c" }
//! }
//! ```
//!
//! Section keys (`marketing`, `web3`, `ai`) are individually optional. A
//! missing section means its card group is not rendered.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Content validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentDocument {
    pub hero: Hero,
    pub sections: Sections,
    pub blog: Vec<BlogPost>,
    pub links: Links,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    pub kicker: String,
    pub headline: String,
    pub deck: String,
    #[serde(default)]
    pub ctas: Vec<CallToAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
    pub variant: CtaVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaVariant {
    Primary,
    Secondary,
}

impl CtaVariant {
    /// CSS class for the button.
    pub fn class(self) -> &'static str {
        match self {
            CtaVariant::Primary => "btn btn-primary",
            CtaVariant::Secondary => "btn btn-secondary",
        }
    }
}

/// Card groups keyed by section. Each key is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sections {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketing: Option<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web3: Option<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai: Option<Section>,
}

impl Sections {
    pub fn get(&self, key: SectionKey) -> Option<&Section> {
        match key {
            SectionKey::Marketing => self.marketing.as_ref(),
            SectionKey::Web3 => self.web3.as_ref(),
            SectionKey::Ai => self.ai.as_ref(),
        }
    }

    /// Present sections in page order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &Section)> {
        SectionKey::ALL
            .into_iter()
            .filter_map(|key| self.get(key).map(|s| (key, s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKey {
    Marketing,
    Web3,
    Ai,
}

impl SectionKey {
    pub const ALL: [SectionKey; 3] = [SectionKey::Marketing, SectionKey::Web3, SectionKey::Ai];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::Marketing => "marketing",
            SectionKey::Web3 => "web3",
            SectionKey::Ai => "ai",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Section {
    pub items: Vec<Item>,
}

/// One card: all five fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Item {
    pub title: String,
    /// Display string, not parsed (e.g. `"NOV 2024"`).
    pub date: String,
    pub tags: Vec<String>,
    pub insight: String,
    /// Asset reference, relative to the output root or absolute URL.
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlogPost {
    pub date: String,
    pub title: String,
    pub deck: String,
    pub href: String,
}

/// Contact channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Links {
    /// Handle, usually with a leading `@`.
    pub telegram: String,
    /// Full profile URL.
    pub x: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialChannel {
    Telegram,
    X,
    Email,
}

impl SocialChannel {
    pub const ALL: [SocialChannel; 3] =
        [SocialChannel::Telegram, SocialChannel::X, SocialChannel::Email];

    /// Value of the `data-social` marker.
    pub fn as_str(self) -> &'static str {
        match self {
            SocialChannel::Telegram => "telegram",
            SocialChannel::X => "x",
            SocialChannel::Email => "email",
        }
    }

    /// Label used when a link keeps its default text.
    pub fn label(self) -> &'static str {
        match self {
            SocialChannel::Telegram => "Telegram",
            SocialChannel::X => "X",
            SocialChannel::Email => "Email",
        }
    }
}

impl Links {
    /// Link target for a channel.
    ///
    /// - telegram `@abc` → `https://t.me/abc` (first `@` removed)
    /// - x → the profile URL as-is
    /// - email `x@y.com` → `mailto:x@y.com`
    pub fn href(&self, channel: SocialChannel) -> String {
        match channel {
            SocialChannel::Telegram => {
                format!("https://t.me/{}", self.telegram.replacen('@', "", 1))
            }
            SocialChannel::X => self.x.clone(),
            SocialChannel::Email => format!("mailto:{}", self.email),
        }
    }

    /// Visible text for the primary contact link of a channel.
    ///
    /// `None` means the link keeps whatever text the page gave it.
    pub fn contact_text(&self, channel: SocialChannel) -> Option<String> {
        match channel {
            SocialChannel::Telegram => Some(format!("{} on Telegram", self.telegram)),
            SocialChannel::X => None,
            SocialChannel::Email => Some(self.email.clone()),
        }
    }
}

impl ContentDocument {
    /// Decode and validate a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let doc: ContentDocument = serde_json::from_str(json)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Checks serde cannot express: required strings must be non-empty.
    pub fn validate(&self) -> Result<(), ContentError> {
        for (key, section) in self.sections.iter() {
            for (idx, item) in section.items.iter().enumerate() {
                let at = format!("sections.{}.items[{}]", key.as_str(), idx);
                if item.title.trim().is_empty() {
                    return Err(ContentError::Validation(format!("{at}.title is empty")));
                }
                if item.tags.iter().any(|t| t.trim().is_empty()) {
                    return Err(ContentError::Validation(format!(
                        "{at}.tags contains an empty tag"
                    )));
                }
            }
        }
        for (idx, post) in self.blog.iter().enumerate() {
            if post.title.trim().is_empty() {
                return Err(ContentError::Validation(format!(
                    "blog[{idx}].title is empty"
                )));
            }
            if post.href.trim().is_empty() {
                return Err(ContentError::Validation(format!(
                    "blog[{idx}].href is empty"
                )));
            }
        }
        for (idx, cta) in self.hero.ctas.iter().enumerate() {
            if cta.href.trim().is_empty() {
                return Err(ContentError::Validation(format!(
                    "hero.ctas[{idx}].href is empty"
                )));
            }
        }
        Ok(())
    }

    /// Total number of cards across all present sections.
    pub fn card_count(&self) -> usize {
        self.sections.iter().map(|(_, s)| s.items.len()).sum()
    }

    /// Built-in document used when the configured source cannot be loaded.
    pub fn fallback() -> Self {
        let item = |title: &str, date: &str, tags: &[&str], insight: &str, image: &str| Item {
            title: title.to_string(),
            date: date.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            insight: insight.to_string(),
            image: image.to_string(),
        };

        Self {
            hero: Hero {
                kicker: "NICHOLAS WOO — WEB3 GTM STRATEGIST & WRITER".to_string(),
                headline: "SHARP NARRATIVE. OPERATOR-GRADE GTM. HIGH-SIGNAL WRITING."
                    .to_string(),
                deck: "I write the foundations of Web3 business growth.".to_string(),
                ctas: vec![
                    CallToAction {
                        label: "Let's Build Together".to_string(),
                        href: "#contact".to_string(),
                        variant: CtaVariant::Primary,
                    },
                    CallToAction {
                        label: "View Work".to_string(),
                        href: "#work".to_string(),
                        variant: CtaVariant::Secondary,
                    },
                ],
            },
            sections: Sections {
                marketing: Some(Section {
                    items: vec![item(
                        "Content vs Copy",
                        "NOV 2024",
                        &["STRATEGY", "WRITING"],
                        "Good commercial writers know how to use both styles.",
                        "marketing-1.jpg",
                    )],
                }),
                web3: Some(Section {
                    items: vec![item(
                        "Token Economics",
                        "OCT 2024",
                        &["DEFI", "STRATEGY"],
                        "Sustainable tokenomics require narrative alignment.",
                        "web3-1.jpg",
                    )],
                }),
                ai: Some(Section {
                    items: vec![item(
                        "AI-Native GTM",
                        "DEC 2024",
                        &["AI", "GROWTH"],
                        "The future of marketing is augmented intelligence.",
                        "ai-1.jpg",
                    )],
                }),
            },
            blog: vec![BlogPost {
                date: "DEC 15, 2024".to_string(),
                title: "Why You Should Hire a Web3 Writer".to_string(),
                deck: "And why it should be me.".to_string(),
                href: "#".to_string(),
            }],
            links: Links {
                telegram: "@nikolei666".to_string(),
                x: "https://x.com/nicholaswoo".to_string(),
                email: "nicholas.woojw@gmail.com".to_string(),
            },
        }
    }

    /// Pretty JSON of the fallback document, used by `gen-content`.
    pub fn fallback_json() -> String {
        serde_json::to_string_pretty(&Self::fallback()).unwrap_or_default()
    }
}
