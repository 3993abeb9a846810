//! File-backed record store

use super::key::CacheKey;
use super::lock::CacheLock;
use super::record::CacheRecord;
use crate::error::{LyriflowError, LyriflowResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

/// Lyrics cache rooted at one directory
///
/// Reads and writes are unsynchronized; hold the key's [`CacheLock`]
/// (see [`CacheStore::lock`]) around every get/put sequence.
#[derive(Debug, Clone)]
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    /// Open the cache at `root`, creating the directory if needed
    pub async fn new(root: impl Into<PathBuf>) -> LyriflowResult<Self> {
        let store = Self { root: root.into() };
        store.ensure_root().await?;
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Take the exclusive lock for `key`, waiting for other holders
    pub async fn lock(&self, key: &CacheKey) -> LyriflowResult<CacheLock> {
        CacheLock::acquire_async(self.lock_path(key)).await
    }

    /// Load the record for `key`
    ///
    /// Returns `Ok(None)` when nothing was ever stored and
    /// [`LyriflowError::CorruptCache`] when the file cannot be decoded.
    pub async fn get(&self, key: &CacheKey) -> LyriflowResult<Option<CacheRecord>> {
        let path = self.record_path(key);

        let content = match fs::read(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Cache miss for {}", key);
                return Ok(None);
            }
            Err(e) => {
                return Err(LyriflowError::io(
                    format!("reading cache file {}", path.display()),
                    e,
                ))
            }
        };

        let record: CacheRecord =
            serde_json::from_slice(&content).map_err(|e| LyriflowError::corrupt(&path, e))?;

        debug!(
            "Cache hit for {} ({})",
            key,
            if record.is_not_found() { "not found" } else { "lyrics" }
        );
        Ok(Some(record))
    }

    /// Store a positive record for `key`, replacing whatever was there
    pub async fn put(&self, key: &CacheKey, record: &CacheRecord) -> LyriflowResult<()> {
        if record.is_not_found() {
            return Err(LyriflowError::Internal(
                "put called with a not-found record; use put_not_found".to_string(),
            ));
        }
        self.write_record(key, record).await
    }

    /// Remember that `key` has no usable lyrics
    pub async fn put_not_found(&self, key: &CacheKey) -> LyriflowResult<()> {
        self.write_record(key, &CacheRecord::NotFound).await
    }

    /// Delete every record and lock file, leaving an empty cache directory
    pub async fn clear(&self) -> LyriflowResult<()> {
        match fs::remove_dir_all(&self.root).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Cache directory {} did not exist", self.root.display());
            }
            Err(e) => {
                return Err(LyriflowError::io(
                    format!("removing cache directory {}", self.root.display()),
                    e,
                ))
            }
        }

        self.ensure_root().await?;
        info!("Cleared cache at {}", self.root.display());
        Ok(())
    }

    /// Write through a temp file and rename so readers never see a torn record
    async fn write_record(&self, key: &CacheKey, record: &CacheRecord) -> LyriflowResult<()> {
        let path = self.record_path(key);
        let tmp_path = self
            .root
            .join(format!(".{}.{}.tmp", key, Uuid::new_v4().simple()));
        let content = serde_json::to_string(record)?;

        fs::write(&tmp_path, content)
            .await
            .map_err(|e| LyriflowError::io(format!("writing cache file {}", tmp_path.display()), e))?;

        if let Err(e) = fs::rename(&tmp_path, &path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(LyriflowError::io(
                format!("moving cache file into place at {}", path.display()),
                e,
            ));
        }

        debug!("Cached {} at {}", key, path.display());
        Ok(())
    }

    async fn ensure_root(&self) -> LyriflowResult<()> {
        fs::create_dir_all(&self.root).await.map_err(|e| {
            LyriflowError::io(format!("creating cache directory {}", self.root.display()), e)
        })
    }

    fn record_path(&self, key: &CacheKey) -> PathBuf {
        self.root.join(key.record_file_name())
    }

    fn lock_path(&self, key: &CacheKey) -> PathBuf {
        self.root.join(key.lock_file_name())
    }
}
