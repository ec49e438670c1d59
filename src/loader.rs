//! Content loading with a built-in fallback.
//!
//! The content source is either a local JSON file or an `http(s)://` URL.
//! [`load`] never fails: any IO, network, status or decode error is logged as
//! a warning and the built-in [`ContentDocument::fallback`] is used instead,
//! so a build always produces a complete page.

use crate::content::{ContentDocument, ContentError};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} returned {status}")]
    Status { url: String, status: u16 },
    #[error("invalid content: {0}")]
    Content(#[from] ContentError),
}

/// Where the Content Document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    File(PathBuf),
    Remote(String),
}

impl ContentSource {
    /// Parse a configured source. URLs stay as-is; relative paths resolve
    /// against `base` (the content directory).
    pub fn parse(source: &str, base: &Path) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            return ContentSource::Remote(source.to_string());
        }
        let path = Path::new(source);
        if path.is_absolute() {
            ContentSource::File(path.to_path_buf())
        } else {
            ContentSource::File(base.join(path))
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::File(path) => write!(f, "{}", path.display()),
            ContentSource::Remote(url) => write!(f, "{url}"),
        }
    }
}

/// Whether the document came from the configured source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Source,
    Fallback { reason: String },
}

#[derive(Debug, Clone)]
pub struct Loaded {
    pub document: ContentDocument,
    pub origin: Origin,
}

impl Loaded {
    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, Origin::Fallback { .. })
    }
}

/// Read and decode the document, surfacing every failure.
pub fn try_load(source: &ContentSource, timeout: Duration) -> Result<ContentDocument, LoadError> {
    let body = match source {
        ContentSource::File(path) => fs::read_to_string(path)?,
        ContentSource::Remote(url) => fetch(url, timeout)?,
    };
    Ok(ContentDocument::from_json(&body)?)
}

fn fetch(url: &str, timeout: Duration) -> Result<String, LoadError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    let resp = client.get(url).send()?;
    if !resp.status().is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: resp.status().as_u16(),
        });
    }
    Ok(resp.text()?)
}

/// Load the document, substituting the fallback on any failure.
pub fn load(source: &ContentSource, timeout: Duration) -> Loaded {
    match try_load(source, timeout) {
        Ok(document) => {
            log::debug!("Loaded content from {source}");
            Loaded {
                document,
                origin: Origin::Source,
            }
        }
        Err(e) => {
            log::warn!("Failed to load {source} ({e}), using fallback content");
            Loaded {
                document: ContentDocument::fallback(),
                origin: Origin::Fallback {
                    reason: e.to_string(),
                },
            }
        }
    }
}
