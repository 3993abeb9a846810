//! lyriflow - Synchronized lyrics for your music
//!
//! Resolves the lyric line for a track at a playback position. Lyrics come
//! from LRCLIB and are cached on disk, one record per track, with a
//! cross-process lock so concurrent callers fetch each track only once.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod lyrics;
pub mod provider;
pub mod resolve;
pub mod ui;

pub use error::{LyriflowError, LyriflowResult};
pub use resolve::{Resolution, Resolver};
