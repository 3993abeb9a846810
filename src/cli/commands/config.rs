//! Config command - show or initialize configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::LyriflowResult;
use crate::ui;
use console::style;

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    config: &Config,
    manager: &ConfigManager,
) -> LyriflowResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => show_path(manager),
        Some(ConfigAction::Init { force }) => init_config(manager, force).await?,
    }

    Ok(())
}

fn show_config(config: &Config) -> LyriflowResult<()> {
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

fn show_path(manager: &ConfigManager) {
    println!("{}", manager.path().display());
}

async fn init_config(manager: &ConfigManager, force: bool) -> LyriflowResult<()> {
    let path = manager.path();

    if path.exists() && !force {
        println!(
            "{} Config already exists at {} - {}",
            style("!").yellow(),
            path.display(),
            style("Use --force to overwrite").dim()
        );
        return Ok(());
    }

    manager.save(&Config::default()).await?;
    ui::step_ok(&format!("Configuration initialized ({})", path.display()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn init_writes_default_config() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp.path().join("config.toml"));

        init_config(&manager, false).await.unwrap();

        let content = std::fs::read_to_string(manager.path()).unwrap();
        assert!(content.contains("[provider]"));
    }

    #[tokio::test]
    async fn init_keeps_existing_without_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[general]\nlog_format = \"json\"\n").unwrap();
        let manager = ConfigManager::with_path(path.clone());

        init_config(&manager, false).await.unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("json"));

        init_config(&manager, true).await.unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("\"text\""));
    }
}
