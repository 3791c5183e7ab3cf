//! Command line definitions.

use std::path::PathBuf;

use artemis_tachi::Game;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "artemis-tachi")]
#[command(about = "Export ARTEMiS play history as Tachi batch-manual imports")]
#[command(version)]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, default_value = artemis_tachi::CONFIG_FILE)]
    pub config: PathBuf,

    /// ARTEMiS SQLite database (overrides the config file)
    #[arg(short, long, env = "DB_URL")]
    pub database: Option<PathBuf>,

    /// Directory export files are written to (overrides the config file)
    #[arg(short, long)]
    pub export_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Browse games and export interactively (default)
    Interactive,
    /// Show the number of players per game
    Stats,
    /// Look up the player behind an Aime card
    Lookup {
        #[arg(short, long, value_parser = parse_game)]
        game: Game,
        /// Aime access code
        #[arg(long)]
        card: String,
    },
    /// Export a player's scores to a Tachi batch-manual file
    Export {
        #[arg(short, long, value_parser = parse_game)]
        game: Game,
        #[command(flatten)]
        player: PlayerArgs,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct PlayerArgs {
    /// Aime access code
    #[arg(long)]
    pub card: Option<String>,
    /// ARTEMiS user id
    #[arg(long)]
    pub user: Option<String>,
}

fn parse_game(name: &str) -> Result<Game, String> {
    Game::parse(name).map_err(|e| e.to_string())
}
