//! Error types for lyriflow
//!
//! All modules use `LyriflowResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for lyriflow operations
pub type LyriflowResult<T> = Result<T, LyriflowError>;

/// All errors that can occur in lyriflow
#[derive(Error, Debug)]
pub enum LyriflowError {
    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine a cache directory for this platform")]
    CacheDirUnknown,

    // Cache errors
    #[error("Corrupt cache record {path}: {reason}")]
    CorruptCache { path: PathBuf, reason: String },

    #[error("Failed to acquire lock {path}: {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Provider errors
    #[error("Lyrics provider request failed: {0}")]
    Transport(String),

    #[error("Lyrics not found")]
    ProviderNotFound,

    #[error("Track has no synchronized lyrics")]
    NoSynchronizedLyrics,

    // Lyric model errors
    #[error("No valid lyrics found")]
    NoValidLyrics,

    #[error("No lyrics at time {0:.2}")]
    NoApplicableLine(f64),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LyriflowError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a corrupt cache error for a record file
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::CorruptCache {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a lock error for a lock file
    pub fn lock(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Lock {
            path: path.into(),
            source,
        }
    }

    /// Check if the error is a "no lyrics" outcome rather than a failure
    ///
    /// Soft outcomes are reported to the user as a status line and never
    /// abort the process with a non-zero exit code.
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            Self::ProviderNotFound
                | Self::NoSynchronizedLyrics
                | Self::NoValidLyrics
                | Self::NoApplicableLine(_)
        )
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::CorruptCache { .. } => Some("Run: lyriflow cache purge"),
            Self::CacheDirUnknown => Some("Pass --cache-dir or set LYRIFLOW_CACHE_DIR"),
            Self::ConfigInvalid { .. } => Some("Run: lyriflow config init --force"),
            Self::Transport(_) => Some("Check your network connection and try again"),
            _ => None,
        }
    }
}
