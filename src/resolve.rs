//! Resolution of the lyric line for a track at a playback position
//!
//! Flow for one call:
//! 1. Derive the cache key and take its lock
//! 2. Read the cached record; on a miss, ask the provider, parse, and store
//!    the result (or a negative record)
//! 3. Release the lock and look up the line for the position
//!
//! The lock covers the network fetch, so a second process asking for the
//! same track waits and then reads the record the first one wrote.

use crate::cache::{CacheKey, CacheRecord, CacheStore};
use crate::error::{LyriflowError, LyriflowResult};
use crate::lyrics::{line_at, parse_lrc, LyricLine};
use crate::provider::{LyricsProvider, ProviderOutcome, TrackQuery};
use tracing::{debug, info, warn};

/// What to show for a track at a position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Active line; empty text means an instrumental break
    Line(String),
    /// The provider has no entry for this track
    NotFound,
    /// No line to show: no synced lyrics, unparsable lyrics, or the
    /// position is before the first line
    NoLyrics,
}

impl Resolution {
    pub fn is_instrumental(&self) -> bool {
        matches!(self, Self::Line(text) if text.is_empty())
    }

    /// Map a soft error onto its status; hard errors are handed back
    fn from_soft(err: LyriflowError) -> LyriflowResult<Self> {
        match err {
            LyriflowError::ProviderNotFound => Ok(Self::NotFound),
            err if err.is_soft() => {
                debug!("No lyrics to show: {}", err);
                Ok(Self::NoLyrics)
            }
            err => Err(err),
        }
    }
}

/// Cache-backed lyrics resolver
pub struct Resolver<P> {
    store: CacheStore,
    provider: P,
}

impl<P: LyricsProvider> Resolver<P> {
    pub fn new(store: CacheStore, provider: P) -> Self {
        Self { store, provider }
    }

    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    /// Resolve the line for `track` at `position` seconds
    ///
    /// Soft outcomes come back as [`Resolution::NotFound`] or
    /// [`Resolution::NoLyrics`]; storage, lock and transport failures are
    /// returned as errors.
    pub async fn resolve(&self, track: &TrackQuery, position: f64) -> LyriflowResult<Resolution> {
        let lines = match self.cached_or_fetched_lines(track).await {
            Ok(lines) => lines,
            Err(err) => return Resolution::from_soft(err),
        };

        match line_at(&lines, position) {
            Ok(text) => Ok(Resolution::Line(text.to_string())),
            Err(err) => Resolution::from_soft(err),
        }
    }

    /// Lines for `track`, fetching and caching them under the key's lock
    ///
    /// Negative outcomes are returned as soft errors after being persisted.
    pub async fn cached_or_fetched_lines(
        &self,
        track: &TrackQuery,
    ) -> LyriflowResult<Vec<LyricLine>> {
        let key = CacheKey::derive(&track.title, &track.artist, &track.album);

        // Dropping the lock on an early return releases it as well
        let mut lock = self.store.lock(&key).await?;
        let result = self.load_or_fetch(&key, track).await;
        lock.release();

        result
    }

    async fn load_or_fetch(
        &self,
        key: &CacheKey,
        track: &TrackQuery,
    ) -> LyriflowResult<Vec<LyricLine>> {
        match self.store.get(key).await? {
            Some(CacheRecord::NotFound) => return Err(LyriflowError::ProviderNotFound),
            Some(CacheRecord::Found { lines, .. }) => return Ok(lines),
            None => {}
        }

        info!(
            "Fetching lyrics for {} - {} from {}",
            track.title,
            track.artist,
            self.provider.provider_name()
        );

        let response = match self.provider.fetch(track).await? {
            ProviderOutcome::Found(response) => response,
            ProviderOutcome::NotFound => {
                self.store.put_not_found(key).await?;
                return Err(LyriflowError::ProviderNotFound);
            }
        };

        let Some(synced) = response.usable_synced_lyrics() else {
            debug!(
                "No synced lyrics (instrumental: {}), caching negative result",
                response.instrumental
            );
            self.store.put_not_found(key).await?;
            return Err(LyriflowError::NoSynchronizedLyrics);
        };

        let lines = match parse_lrc(synced) {
            Ok(lines) => lines,
            Err(err) => {
                warn!("Provider lyrics for {} could not be parsed", key);
                return Err(err);
            }
        };

        let record = CacheRecord::found(Some(response.payload), lines.clone());
        self.store.put(key, &record).await?;

        Ok(lines)
    }
}
