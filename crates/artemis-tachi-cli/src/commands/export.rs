//! Export command for writing a Tachi batch-manual file.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use artemis_tachi::{Config, DataSource, Game, export, user_from_card, write_export};

/// Export one player's scores and write them under the configured directory
pub fn export_to_file(
    source: &dyn DataSource,
    config: &Config,
    game: Game,
    user_id: &str,
) -> Result<PathBuf> {
    let document = export(source, game, user_id)
        .with_context(|| format!("Failed to build {} export for user {}", game, user_id))?;
    let path = write_export(&document, &config.export_dir)
        .with_context(|| format!("Failed to write export to {}", config.export_dir.display()))?;
    Ok(path)
}

pub fn run(
    source: &dyn DataSource,
    config: &Config,
    game: Game,
    card: Option<String>,
    user: Option<String>,
) -> Result<()> {
    let user_id = match (card, user) {
        (_, Some(user)) => user,
        (Some(card), None) => user_from_card(source, &card)?,
        (None, None) => bail!("Either --card or --user is required"),
    };

    let path = export_to_file(source, config, game, &user_id)?;
    println!("Exported to Tachi and saved to {}", path.display());
    Ok(())
}
