use thiserror::Error;

use crate::game::Game;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Aime card not found: {0}")]
    CardNotFound(String),

    #[error("User {user_id} not found in {game}")]
    UserNotFound { game: Game, user_id: String },

    #[error("No {game} profile for user {user_id}")]
    ProfileNotFound { game: Game, user_id: String },

    #[error("Unknown game: {0}")]
    UnknownGame(String),

    #[error("{0} export is not implemented")]
    UnsupportedGame(Game),

    #[error("Failed to parse play date {value:?}: {source}")]
    TimestampParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Lookup failures are shown to the user and never end the session
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            Error::CardNotFound(_) | Error::UserNotFound { .. } | Error::ProfileNotFound { .. }
        )
    }
}
