//! Supported games and their per-game transformation rules.

mod chunithm;
mod ongeki;

pub use chunithm::*;
pub use ongeki::*;

use std::str::FromStr;

use strum::{Display, EnumString, IntoStaticStr};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, Display)]
#[strum(ascii_case_insensitive)]
pub enum Game {
    Chunithm,
    Ongeki,
    MaiMai,
}

impl Game {
    /// Every game with a profile table, in menu order
    pub const ALL: [Game; 3] = [Game::Chunithm, Game::Ongeki, Game::MaiMai];

    /// Parse a game name as typed by the user
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name.trim()).map_err(|_| Error::UnknownGame(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Table holding one profile row per player
    pub fn profile_table(&self) -> &'static str {
        match self {
            Self::Chunithm => "chuni_profile_data",
            Self::Ongeki => "ongeki_profile_data",
            Self::MaiMai => "mai2_profile_detail",
        }
    }

    /// Whether a score export exists for this game
    pub fn is_exportable(&self) -> bool {
        matches!(self, Self::Chunithm | Self::Ongeki)
    }
}

/// Reason a playlog row was left out of an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    /// A required column was NULL
    MissingField(&'static str),
    /// Chart type scored on an incompatible scale (WORLD'S END)
    NonComparableChart { rom_version: String, level: i64 },
    /// Difficulty code outside the game's table
    DifficultyOutOfRange(i64),
}

impl Skip {
    /// Skips that point at bad upstream data rather than expected gaps
    pub fn is_anomaly(&self) -> bool {
        matches!(self, Self::DifficultyOutOfRange(_))
    }
}

/// Unwrap a required column or skip the row
pub(crate) fn require<T>(value: Option<T>, column: &'static str) -> std::result::Result<T, Skip> {
    value.ok_or(Skip::MissingField(column))
}
