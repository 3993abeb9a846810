//! Lyrics provider abstraction
//!
//! The resolver only depends on [`LyricsProvider`]; [`LrclibClient`] is the
//! production implementation.

pub mod lrclib;

pub use lrclib::LrclibClient;

use crate::error::LyriflowResult;
use async_trait::async_trait;

/// Identifying fields of a track
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackQuery {
    pub title: String,
    pub artist: String,
    pub album: String,
}

impl TrackQuery {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
        }
    }
}

/// A matched track as reported by the provider
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    /// Provider marked the track as having no vocals
    pub instrumental: bool,
    /// LRC text, if the provider has timed lyrics
    pub synced_lyrics: Option<String>,
    /// Full response body, cached verbatim
    pub payload: serde_json::Value,
}

impl ProviderResponse {
    /// Synced lyrics that are worth parsing, if any
    pub fn usable_synced_lyrics(&self) -> Option<&str> {
        if self.instrumental {
            return None;
        }
        self.synced_lyrics.as_deref().filter(|text| !text.is_empty())
    }
}

/// Result of a provider lookup that reached the provider
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderOutcome {
    Found(ProviderResponse),
    NotFound,
}

/// Source of synchronized lyrics
///
/// Transport failures are returned as `Err`; "no such track" is a normal
/// [`ProviderOutcome::NotFound`].
#[async_trait]
pub trait LyricsProvider: Send + Sync {
    /// Look up lyrics for a track
    async fn fetch(&self, track: &TrackQuery) -> LyriflowResult<ProviderOutcome>;

    /// Human-readable provider name for logs
    fn provider_name(&self) -> &'static str;
}
