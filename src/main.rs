use std::path::PathBuf;

use analytics_screen::config::Config;
use analytics_screen::context::Services;
use analytics_screen::logging::init_tracing;
use anyhow::Context;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "analytics-screen", version, about = "Single-screen analytics demo")]
struct Cli {
    /// Path to config file (default: <config_dir>/analytics-screen/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log filter directive, overrides logging.level from the config file
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_tracing(&config.logging)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting analytics-screen");

    let services = Services::new();
    analytics_screen::ui::run(&services, &config.ui).context("Terminal UI failed")?;

    tracing::info!("Exited cleanly");
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
        config.validate()?;
    }

    Ok(config)
}
