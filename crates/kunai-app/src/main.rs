use clap::Parser;
use kunai_app::cli::Cli;
use kunai_app::{commands, logging};
use kunai_core::config::load_config;

fn main() -> anyhow::Result<()> {
    let filter_handle = logging::init();
    let cli = Cli::parse();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    logging::apply_level(&filter_handle, &config.logging.level);

    let output = commands::run(&cli.command, &config)?;
    println!("{output}");

    Ok(())
}
