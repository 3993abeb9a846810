//! Cross-process advisory locks for cache records
//!
//! Each cache key has a sibling `.lock` file. Holding an exclusive OS file
//! lock on it (`flock(2)` on Unix, `LockFileEx` on Windows) grants the right
//! to read, fetch and write that key's record. The OS drops the lock when
//! the handle closes, so a crashed holder never leaves a key wedged.
//!
//! Acquisition has no timeout: a holder stuck on a slow network fetch
//! blocks every other caller for the same key until it finishes.

use crate::error::{LyriflowError, LyriflowResult};
use fs4::fs_std::FileExt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Exclusive lock on one cache key
///
/// Released by [`CacheLock::release`] or on drop, whichever comes first.
#[derive(Debug)]
pub struct CacheLock {
    path: PathBuf,
    file: Option<File>,
}

impl CacheLock {
    /// Block until the exclusive lock on `path` is held
    ///
    /// Creates the lock file if needed. Locks taken through separate calls
    /// exclude each other even within one process.
    pub fn acquire(path: &Path) -> LyriflowResult<Self> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| LyriflowError::lock(path, e))?;

        debug!("Waiting for lock {}", path.display());
        lock_exclusive(&file).map_err(|e| LyriflowError::lock(path, e))?;
        debug!("Acquired lock {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            file: Some(file),
        })
    }

    /// Acquire on Tokio's blocking pool so waiting does not stall the runtime
    pub async fn acquire_async(path: PathBuf) -> LyriflowResult<Self> {
        tokio::task::spawn_blocking(move || Self::acquire(&path))
            .await
            .map_err(|e| LyriflowError::Internal(format!("lock task failed: {}", e)))?
    }

    /// Release the lock; calling it again is a no-op
    pub fn release(&mut self) {
        if let Some(file) = self.file.take() {
            if let Err(e) = FileExt::unlock(&file) {
                // Closing the descriptor below releases it regardless
                debug!("Explicit unlock of {} failed: {}", self.path.display(), e);
            }
            debug!("Released lock {}", self.path.display());
        }
    }

    /// Whether the lock is still held by this handle
    pub fn is_held(&self) -> bool {
        self.file.is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for CacheLock {
    fn drop(&mut self) {
        self.release();
    }
}

/// Blocking exclusive lock, retried when a signal interrupts the wait
fn lock_exclusive(file: &File) -> io::Result<()> {
    loop {
        match FileExt::lock_exclusive(file) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            result => return result,
        }
    }
}
