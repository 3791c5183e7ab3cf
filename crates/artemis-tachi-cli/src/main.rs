mod cli;
mod commands;
mod input;
mod screen;

use anyhow::{Context, Result};
use artemis_tachi::{Config, SqliteSource};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("artemis_tachi={}", level).parse()?)
                .add_directive(format!("artemis_tachi_cli={}", level).parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli);
    let source = SqliteSource::open(&config.database)
        .with_context(|| format!("Failed to open database {}", config.database.display()))?;

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => commands::interactive::run(&source, &config),
        Command::Stats => commands::stats::run(&source),
        Command::Lookup { game, card } => commands::lookup::run(&source, game, &card),
        Command::Export { game, player } => {
            commands::export::run(&source, &config, game, player.card, player.user)
        }
    }
}

/// Merge the config file with command line overrides
fn load_config(cli: &Cli) -> Config {
    let base = match Config::load(&cli.config) {
        Ok(config) => {
            info!("Loaded config from {:?}", cli.config);
            config
        }
        Err(e) if e.is_not_found() => {
            debug!("No config file at {:?}, using defaults", cli.config);
            Config::default()
        }
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        }
    };

    let mut builder = Config::builder().base(base);
    if let Some(database) = &cli.database {
        builder = builder.database(database);
    }
    if let Some(export_dir) = &cli.export_dir {
        builder = builder.export_dir(export_dir);
    }
    builder.build()
}
