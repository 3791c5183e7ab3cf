//! In-memory data source for tests

use std::collections::HashMap;

use crate::error::Result;
use crate::game::{ChunithmPlaylog, ChunithmProfile, Game, OngekiPlaylog};

use super::DataSource;

#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pub cards: HashMap<String, String>,
    pub names: HashMap<(Game, String), String>,
    pub chunithm_profiles: HashMap<String, ChunithmProfile>,
    pub chunithm_playlog: Vec<(String, ChunithmPlaylog)>,
    pub ongeki_playlog: Vec<(String, OngekiPlaylog)>,
}

impl DataSource for MemorySource {
    fn user_from_card(&self, access_code: &str) -> Result<Option<String>> {
        Ok(self.cards.get(access_code).cloned())
    }

    fn user_count(&self, game: Game) -> Result<u64> {
        Ok(self.names.keys().filter(|(g, _)| *g == game).count() as u64)
    }

    fn user_name(&self, game: Game, user_id: &str) -> Result<Option<String>> {
        Ok(self.names.get(&(game, user_id.to_string())).cloned())
    }

    fn chunithm_profile(&self, user_id: &str) -> Result<Option<ChunithmProfile>> {
        Ok(self.chunithm_profiles.get(user_id).copied())
    }

    fn scan_chunithm_playlog(
        &self,
        user_id: &str,
        visit: &mut dyn FnMut(ChunithmPlaylog) -> Result<()>,
    ) -> Result<()> {
        for (_, row) in self.chunithm_playlog.iter().filter(|(u, _)| u == user_id) {
            visit(row.clone())?;
        }
        Ok(())
    }

    fn scan_ongeki_playlog(
        &self,
        user_id: &str,
        visit: &mut dyn FnMut(OngekiPlaylog) -> Result<()>,
    ) -> Result<()> {
        for (_, row) in self.ongeki_playlog.iter().filter(|(u, _)| u == user_id) {
            visit(row.clone())?;
        }
        Ok(())
    }
}
