//! Lookup command: resolve an Aime card to a player.

use anyhow::Result;
use artemis_tachi::{DataSource, Game, find_player};

pub fn run(source: &dyn DataSource, game: Game, card: &str) -> Result<()> {
    let player = find_player(source, game, card)?;
    println!("Selected Game: {}", player.game);
    println!("User ID: {}", player.user_id);
    println!("UserName: {}", player.name);
    Ok(())
}
