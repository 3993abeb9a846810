//! lyriflow - Synchronized lyrics for your music
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use lyriflow::cli::{Cli, Commands};
use lyriflow::config::{Config, ConfigManager};
use lyriflow::error::LyriflowResult;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> LyriflowResult<()> {
    let cli = Cli::parse();

    // Version needs neither config nor logging
    if let Commands::Version = cli.command {
        lyriflow::cli::commands::version();
        return Ok(());
    }

    // Load configuration
    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };
    let config = config_manager.load().await?;

    init_logging(cli.verbose, &config);
    debug!("Using config file {}", config_manager.path().display());

    let cache_dir = ConfigManager::cache_dir(cli.cache_dir.as_deref(), &config)?;
    debug!("Using cache directory {}", cache_dir.display());

    // Dispatch to command
    match cli.command {
        Commands::Version => unreachable!("Version handled above"),
        Commands::Get(args) => lyriflow::cli::commands::get(args, &config, &cache_dir).await,
        Commands::Cache(args) => lyriflow::cli::commands::cache(args, &cache_dir).await,
        Commands::Config(args) => {
            lyriflow::cli::commands::config(args, &config, &config_manager).await
        }
    }
}

/// Initialize logging: 0 = warn, 1 = info, 2+ = debug
///
/// Logs go to stderr; stdout is reserved for lyric output.
fn init_logging(verbose: u8, config: &Config) {
    let filter = match verbose {
        0 => EnvFilter::new("lyriflow=warn"),
        1 => EnvFilter::new("lyriflow=info"),
        _ => EnvFilter::new("lyriflow=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
