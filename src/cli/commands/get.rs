//! Get command - print the lyric line at a playback position

use crate::cache::CacheStore;
use crate::cli::args::GetArgs;
use crate::config::Config;
use crate::error::LyriflowResult;
use crate::provider::{LrclibClient, TrackQuery};
use crate::resolve::Resolver;
use crate::ui;
use std::path::Path;
use tracing::debug;

/// Execute the get command
pub async fn execute(args: GetArgs, config: &Config, cache_dir: &Path) -> LyriflowResult<()> {
    let track = TrackQuery::new(args.title, args.artist, args.album);
    debug!(
        "Resolving {} - {} ({}) at {:.2}s",
        track.title, track.artist, track.album, args.position
    );

    let store = CacheStore::new(cache_dir).await?;
    let provider =
        LrclibClient::new(env!("CARGO_PKG_VERSION")).with_base_url(&config.provider.base_url);
    let resolver = Resolver::new(store, provider);

    let resolution = resolver.resolve(&track, args.position).await?;
    println!("{}", ui::render(&resolution, &track, args.waybar)?);

    Ok(())
}
