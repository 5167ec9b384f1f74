use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use skinmarket::config::Config;
use skinmarket::logging::init_tracing;
use skinmarket::ui::{self, Page};

/// Terminal storefront for a game-skins marketplace.
#[derive(Debug, Parser)]
#[command(name = "skinmarket", version, about)]
struct Cli {
    /// Item store URL (overrides `api.url` from the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Alternate config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Page shown on startup
    #[arg(long, value_enum)]
    page: Option<Page>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(&cli)?;
    tracing::debug!(?config, "Config loaded");

    ui::run(&config)
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };

    if let Some(url) = &cli.api_url {
        config.api.url = url.clone();
    }
    if let Some(page) = cli.page {
        config.ui.start_page = page;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_on_top_of_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nstart_page = \"cart\"\n").unwrap();

        let cli = Cli::parse_from([
            "skinmarket",
            "--config",
            path.to_str().unwrap(),
            "--api-url",
            "http://127.0.0.1:9000/items",
            "--page",
            "admin",
        ]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.api.url, "http://127.0.0.1:9000/items");
        assert_eq!(config.ui.start_page, Page::Admin);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from([
            "skinmarket",
            "--config",
            dir.path().join("missing.toml").to_str().unwrap(),
            "--api-url",
            "ftp://example.com",
        ]);
        assert!(load_config(&cli).is_err());
    }
}
