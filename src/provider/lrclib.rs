//! LRCLIB API client
//!
//! LRCLIB is a free lyrics API that provides synchronized (LRC format) lyrics.
//! API Documentation: https://lrclib.net/docs

use super::{LyricsProvider, ProviderOutcome, ProviderResponse, TrackQuery};
use crate::error::{LyriflowError, LyriflowResult};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Fields of the LRCLIB `/get` response the resolver looks at
///
/// Everything else is kept only in the raw payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LrclibTrack {
    #[serde(default)]
    instrumental: bool,
    #[serde(default)]
    synced_lyrics: Option<String>,
}

/// LRCLIB API client
///
/// Requests carry no timeout; a stalled request holds the caller's cache
/// lock until the connection gives up.
#[derive(Clone)]
pub struct LrclibClient {
    agent: ureq::Agent,
    base_url: String,
    user_agent: String,
}

impl LrclibClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://lrclib.net/api";

    /// Create a client identifying itself with the given app version
    pub fn new(version: &str) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            user_agent: format!("LyriFlow/{} (https://github.com/arrow2nd/lyriflow)", version),
        }
    }

    /// Point the client at another LRCLIB-compatible server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Exact-match lookup against `/get`; blocks on network I/O
    fn get_exact(&self, track: &TrackQuery) -> LyriflowResult<ProviderOutcome> {
        let url = format!("{}/get", self.base_url);
        debug!("GET {} for {} - {}", url, track.title, track.artist);

        let result = self
            .agent
            .get(&url)
            .header("User-Agent", self.user_agent.as_str())
            .query("track_name", &track.title)
            .query("artist_name", &track.artist)
            .query("album_name", &track.album)
            .call();

        let mut response = match result {
            Ok(response) => response,
            Err(ureq::Error::StatusCode(404)) => {
                debug!("LRCLIB has no match");
                return Ok(ProviderOutcome::NotFound);
            }
            Err(ureq::Error::StatusCode(code)) => {
                return Err(LyriflowError::Transport(format!(
                    "unexpected status code: {}",
                    code
                )))
            }
            Err(e) => return Err(LyriflowError::Transport(e.to_string())),
        };

        let status = response.status().as_u16();
        if status != 200 {
            return Err(LyriflowError::Transport(format!(
                "unexpected status code: {}",
                status
            )));
        }

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| LyriflowError::Transport(format!("reading response body: {}", e)))?;

        parse_response(&body)
    }
}

#[async_trait]
impl LyricsProvider for LrclibClient {
    async fn fetch(&self, track: &TrackQuery) -> LyriflowResult<ProviderOutcome> {
        let client = self.clone();
        let track = track.clone();

        tokio::task::spawn_blocking(move || client.get_exact(&track))
            .await
            .map_err(|e| LyriflowError::Internal(format!("provider task failed: {}", e)))?
    }

    fn provider_name(&self) -> &'static str {
        "lrclib"
    }
}

/// Decode a successful `/get` body
fn parse_response(body: &str) -> LyriflowResult<ProviderOutcome> {
    let payload: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| LyriflowError::Transport(format!("failed to decode response: {}", e)))?;

    let track = LrclibTrack::deserialize(&payload)
        .map_err(|e| LyriflowError::Transport(format!("failed to decode response: {}", e)))?;

    Ok(ProviderOutcome::Found(ProviderResponse {
        instrumental: track.instrumental,
        synced_lyrics: track.synced_lyrics,
        payload,
    }))
}
