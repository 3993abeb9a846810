//! LRC format parser
//!
//! Parses synchronized lyrics in LRC format:
//! [mm:ss.xx] Lyrics line here
//!
//! Example:
//! [00:12.34] Hello world
//! [00:15.00] Another line
//!
//! Lines without a time tag (metadata such as `[ar:Artist]`, credits, stray
//! text) are skipped. Output keeps source order; nothing is re-sorted.

use crate::error::{LyriflowError, LyriflowResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

static TIME_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([0-9]+):([0-9]+)\.([0-9]+)\]\s*(.*)").expect("time tag pattern is valid")
});

/// A single line of lyrics with its start offset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricLine {
    /// Seconds from the start of the track
    #[serde(rename = "time")]
    timestamp: f64,
    /// The lyrics text; empty marks an instrumental break
    text: String,
}

impl LyricLine {
    pub fn new(timestamp: f64, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            text: text.into(),
        }
    }

    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this line marks a stretch without vocals
    pub fn is_instrumental(&self) -> bool {
        self.text.is_empty()
    }
}

/// Parse LRC text into timestamped lines
///
/// Fails with [`LyriflowError::NoValidLyrics`] when no line carries a
/// usable `[MM:SS.CC]` tag.
pub fn parse_lrc(content: &str) -> LyriflowResult<Vec<LyricLine>> {
    let mut lines = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(parsed) = parse_tagged_line(line) {
            lines.push(parsed);
        }
    }

    if lines.is_empty() {
        return Err(LyriflowError::NoValidLyrics);
    }

    debug!("Parsed {} lyric lines", lines.len());
    Ok(lines)
}

/// Parse one trimmed line like `[01:02.03] text`
fn parse_tagged_line(line: &str) -> Option<LyricLine> {
    let caps = TIME_TAG_RE.captures(line)?;

    // Digit runs too long for u64 are skipped like any other bad tag
    let minutes: u64 = caps[1].parse().ok()?;
    let seconds: u64 = caps[2].parse().ok()?;
    let centiseconds: u64 = caps[3].parse().ok()?;

    let timestamp = minutes as f64 * 60.0 + seconds as f64 + centiseconds as f64 / 100.0;
    Some(LyricLine::new(timestamp, caps[4].trim()))
}
