//! Cache key derivation for tracks
//!
//! The key names both the record file and its lock file, so it is limited
//! to lowercase hex digits.

use sha2::{Digest, Sha256};
use std::fmt;

/// Number of digest bytes kept in a key (16 hex chars)
const KEY_BYTES: usize = 8;

/// Stable identifier for a (title, artist, album) triple
///
/// Fields are joined with `_` before hashing and are not escaped, so two
/// triples whose joined strings are equal, such as `("a_b", "c", "d")` and
/// `("a", "b_c", "d")`, share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key for a track; any field may be empty
    pub fn derive(title: &str, artist: &str, album: &str) -> Self {
        let joined = format!("{}_{}_{}", title, artist, album);

        let mut hasher = Sha256::new();
        hasher.update(joined.as_bytes());
        let digest = hasher.finalize();

        Self(hex::encode(&digest[..KEY_BYTES]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the persisted record
    pub fn record_file_name(&self) -> String {
        format!("{}.json", self.0)
    }

    /// File name of the lock guarding the record
    pub fn lock_file_name(&self) -> String {
        format!("{}.lock", self.0)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
