//! Stats command: player counts per game.

use anyhow::Result;
use artemis_tachi::{DataSource, user_counts};
use owo_colors::OwoColorize;

pub fn run(source: &dyn DataSource) -> Result<()> {
    for (game, count) in user_counts(source)? {
        let export = if game.is_exportable() {
            "".to_string()
        } else {
            " (no export)".dimmed().to_string()
        };
        println!("{} {:>6} users{}", format!("{:<10}", game).bold(), count, export);
    }
    Ok(())
}
