//! Persisted cache record format

use crate::lyrics::LyricLine;
use serde::{Deserialize, Serialize};

/// Cached outcome of a lyrics lookup for one track
///
/// Stored as `{"response": ..., "parsed_lyrics": [...], "not_found": bool}`.
/// Files that mix the two shapes are rejected on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredRecord", into = "StoredRecord")]
pub enum CacheRecord {
    /// Lyrics were fetched and parsed
    Found {
        /// Provider payload, kept verbatim
        response: Option<serde_json::Value>,
        /// Parsed lines in provider order
        lines: Vec<LyricLine>,
    },
    /// A previous lookup found no usable lyrics
    NotFound,
}

impl CacheRecord {
    pub fn found(response: Option<serde_json::Value>, lines: Vec<LyricLine>) -> Self {
        Self::Found { response, lines }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Parsed lines, or `None` for a negative record
    pub fn lines(&self) -> Option<&[LyricLine]> {
        match self {
            Self::Found { lines, .. } => Some(lines.as_slice()),
            Self::NotFound => None,
        }
    }
}

/// On-disk shape of a record
#[derive(Debug, Serialize, Deserialize)]
struct StoredRecord {
    #[serde(default)]
    response: Option<serde_json::Value>,
    #[serde(default)]
    parsed_lyrics: Option<Vec<LyricLine>>,
    #[serde(default)]
    not_found: bool,
}

impl TryFrom<StoredRecord> for CacheRecord {
    type Error = String;

    fn try_from(stored: StoredRecord) -> Result<Self, Self::Error> {
        match stored {
            StoredRecord {
                not_found: true,
                response: None,
                parsed_lyrics: None,
            } => Ok(Self::NotFound),
            StoredRecord {
                not_found: true,
                parsed_lyrics: Some(lines),
                response: None,
            } if lines.is_empty() => Ok(Self::NotFound),
            StoredRecord {
                not_found: true, ..
            } => Err("not-found record carries lyric data".to_string()),
            StoredRecord {
                parsed_lyrics: None,
                ..
            } => Err("record has neither lyrics nor not_found flag".to_string()),
            StoredRecord {
                response,
                parsed_lyrics: Some(lines),
                not_found: false,
            } => Ok(Self::Found { response, lines }),
        }
    }
}

impl From<CacheRecord> for StoredRecord {
    fn from(record: CacheRecord) -> Self {
        match record {
            CacheRecord::Found { response, lines } => Self {
                response,
                parsed_lyrics: Some(lines),
                not_found: false,
            },
            CacheRecord::NotFound => Self {
                response: None,
                parsed_lyrics: None,
                not_found: true,
            },
        }
    }
}
