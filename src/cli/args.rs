//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// lyriflow - Synchronized lyrics for your music
///
/// Prints the lyric line for a track at a playback position, fetching
/// lyrics from LRCLIB once and caching them on disk.
#[derive(Parser, Debug)]
#[command(name = "lyriflow")]
#[command(author, about, long_about = None)]
#[command(version = concat!("version ", env!("CARGO_PKG_VERSION")))]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LYRIFLOW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Cache directory (overrides config)
    #[arg(long, global = true, env = "LYRIFLOW_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get lyrics at specified time
    Get(GetArgs),

    /// Manage the lyrics cache
    Cache(CacheArgs),

    /// Show or initialize configuration
    Config(ConfigArgs),

    /// Show version information
    #[command(visible_alias = "v")]
    Version,
}

/// Arguments for the get command
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Track title
    #[arg(short, long)]
    pub title: String,

    /// Artist name
    #[arg(short, long)]
    pub artist: String,

    /// Album name
    #[arg(short = 'A', long)]
    pub album: String,

    /// Current playback position in seconds
    #[arg(short, long, allow_negative_numbers = true, value_parser = parse_position)]
    pub position: f64,

    /// Output in waybar JSON format
    #[arg(long)]
    pub waybar: bool,
}

/// Parse a playback position, rejecting NaN and infinities
fn parse_position(value: &str) -> Result<f64, String> {
    let position: f64 = value
        .parse()
        .map_err(|_| format!("invalid position: {}", value))?;
    if !position.is_finite() {
        return Err(format!("position must be a finite number of seconds, got {}", value));
    }
    Ok(position)
}

/// Arguments for the cache command
#[derive(Parser, Debug)]
pub struct CacheArgs {
    /// Subcommand for cache
    #[command(subcommand)]
    pub action: CacheAction,
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// Clear lyrics cache
    Purge,

    /// Show cache directory path
    Path,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}
