//! Cache command - manage the lyrics cache

use crate::cache::CacheStore;
use crate::cli::args::{CacheAction, CacheArgs};
use crate::error::LyriflowResult;
use crate::ui;
use std::path::Path;

/// Execute the cache command
pub async fn execute(args: CacheArgs, cache_dir: &Path) -> LyriflowResult<()> {
    match args.action {
        CacheAction::Purge => purge(cache_dir).await,
        CacheAction::Path => {
            println!("{}", cache_dir.display());
            Ok(())
        }
    }
}

/// Remove every cached record and lock file
async fn purge(cache_dir: &Path) -> LyriflowResult<()> {
    let store = CacheStore::new(cache_dir).await?;
    store.clear().await?;
    ui::step_ok("Cache cleared successfully");
    Ok(())
}
