//! Data source abstraction over the ARTEMiS database.
//!
//! Playlog access is a visitor over a forward-only cursor: the implementation
//! owns the cursor for the duration of the call, so it is released on return
//! whether the scan finished or the visitor aborted it with an error.

#[cfg(test)]
pub(crate) mod memory;
mod sqlite;

pub use sqlite::SqliteSource;

use crate::error::Result;
use crate::game::{ChunithmPlaylog, ChunithmProfile, Game, OngekiPlaylog};

pub trait DataSource {
    /// Resolve an Aime access code to a user id
    fn user_from_card(&self, access_code: &str) -> Result<Option<String>>;

    /// Number of distinct players with a profile for `game`
    fn user_count(&self, game: Game) -> Result<u64>;

    /// Display name of a player's profile for `game`
    fn user_name(&self, game: Game, user_id: &str) -> Result<Option<String>>;

    fn chunithm_profile(&self, user_id: &str) -> Result<Option<ChunithmProfile>>;

    /// Visit every CHUNITHM playlog row of a player, oldest first
    fn scan_chunithm_playlog(
        &self,
        user_id: &str,
        visit: &mut dyn FnMut(ChunithmPlaylog) -> Result<()>,
    ) -> Result<()>;

    /// Visit every O.N.G.E.K.I. playlog row of a player, oldest first
    fn scan_ongeki_playlog(
        &self,
        user_id: &str,
        visit: &mut dyn FnMut(OngekiPlaylog) -> Result<()>,
    ) -> Result<()>;
}
