//! Build metadata shown in the page corners.
//!
//! Three strings, captured once per build from the wall clock and an RNG:
//!
//! - date label: `NOV 2024`
//! - version: `v11.2024` (major from config, minor is the year)
//! - build tag: `build:k3x9q0`, six random base-36 characters
//!
//! The build tag is decorative. It is not a content hash and is not
//! reproducible between builds.

use chrono::{DateTime, Datelike, TimeZone};
use rand::Rng;

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub const BUILD_TAG_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMetadata {
    pub date_label: String,
    pub version: String,
    pub build_tag: String,
}

impl BuildMetadata {
    pub fn capture<Tz: TimeZone, R: Rng>(
        now: &DateTime<Tz>,
        rng: &mut R,
        version_major: u32,
    ) -> Self {
        Self {
            date_label: month_label(now),
            version: version_string(version_major, now.year()),
            build_tag: build_tag(rng),
        }
    }

    /// Text for the `.hash` element.
    pub fn build_label(&self) -> String {
        format!("build:{}", self.build_tag)
    }
}

/// `NOV 2024`
pub fn month_label<D: Datelike>(date: &D) -> String {
    format!("{} {}", MONTHS[date.month0() as usize], date.year())
}

/// `v11.2024`
pub fn version_string(major: u32, year: i32) -> String {
    format!("v{major}.{year}")
}

/// The first six base-36 digits of a fraction in `[0, 1)`, zero padded.
pub fn build_tag_from_fraction(fraction: f64) -> String {
    let mut frac = fraction.clamp(0.0, 1.0 - f64::EPSILON);
    let mut tag = String::with_capacity(BUILD_TAG_LEN);
    for _ in 0..BUILD_TAG_LEN {
        frac *= 36.0;
        let digit = frac.floor();
        tag.push(BASE36[digit as usize] as char);
        frac -= digit;
    }
    tag
}

pub fn build_tag<R: Rng>(rng: &mut R) -> String {
    build_tag_from_fraction(rng.r#gen::<f64>())
}
