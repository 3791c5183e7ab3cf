//! Player lookups shown before an export

use tracing::debug;

use crate::error::{Error, Result};
use crate::game::Game;
use crate::source::DataSource;

/// A player resolved from an Aime card for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub game: Game,
    pub user_id: String,
    pub name: String,
}

/// Resolve an Aime access code to a user id
pub fn user_from_card(source: &dyn DataSource, access_code: &str) -> Result<String> {
    let access_code = access_code.trim();
    source
        .user_from_card(access_code)?
        .ok_or_else(|| Error::CardNotFound(access_code.to_string()))
}

/// Resolve a card and the matching profile name for `game`
pub fn find_player(source: &dyn DataSource, game: Game, access_code: &str) -> Result<Player> {
    let user_id = user_from_card(source, access_code)?;
    debug!("Card {} belongs to user {}", access_code.trim(), user_id);
    player_by_id(source, game, user_id)
}

/// Look up the profile name of a known user id
pub fn player_by_id(source: &dyn DataSource, game: Game, user_id: String) -> Result<Player> {
    match source.user_name(game, &user_id)? {
        Some(name) => Ok(Player {
            game,
            user_id,
            name,
        }),
        None => Err(Error::UserNotFound { game, user_id }),
    }
}

/// Distinct player count for every game, in menu order
pub fn user_counts(source: &dyn DataSource) -> Result<Vec<(Game, u64)>> {
    Game::ALL
        .iter()
        .map(|&game| Ok((game, source.user_count(game)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::MemorySource;

    fn source() -> MemorySource {
        let mut source = MemorySource::default();
        source
            .cards
            .insert("01234567890123456789".into(), "42".into());
        source
            .names
            .insert((Game::Chunithm, "42".into()), "PLAYER".into());
        source
            .names
            .insert((Game::Ongeki, "7".into()), "OTHER".into());
        source
    }

    #[test]
    fn test_find_player() {
        let player = find_player(&source(), Game::Chunithm, " 01234567890123456789\n").unwrap();
        assert_eq!(
            player,
            Player {
                game: Game::Chunithm,
                user_id: "42".into(),
                name: "PLAYER".into(),
            }
        );
    }

    #[test]
    fn test_find_player_unknown_card() {
        let err = find_player(&source(), Game::Chunithm, "1").unwrap_err();
        assert!(matches!(err, Error::CardNotFound(ref code) if code == "1"));
        assert!(err.is_lookup());
    }

    #[test]
    fn test_find_player_without_profile() {
        let err = find_player(&source(), Game::Ongeki, "01234567890123456789").unwrap_err();
        assert!(matches!(
            err,
            Error::UserNotFound { game: Game::Ongeki, ref user_id } if user_id == "42"
        ));
    }

    #[test]
    fn test_user_counts() {
        assert_eq!(
            user_counts(&source()).unwrap(),
            vec![(Game::Chunithm, 1), (Game::Ongeki, 1), (Game::MaiMai, 0)]
        );
    }
}
