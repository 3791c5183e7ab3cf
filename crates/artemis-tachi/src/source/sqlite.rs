//! ARTEMiS database access through SQLite

use std::path::Path;

use rusqlite::{Connection, OpenFlags, OptionalExtension, Row, params};
use tracing::debug;

use crate::error::Result;
use crate::game::{ChunithmPlaylog, ChunithmProfile, Game, OngekiPlaylog};

use super::DataSource;

const CARD_QUERY: &str = "SELECT user FROM aime_card WHERE access_code = ?1";

const CHUNITHM_PROFILE_QUERY: &str =
    "SELECT classEmblemBase, classEmblemMedal FROM chuni_profile_data WHERE user = ?1";

const CHUNITHM_PLAYLOG_QUERY: &str = "
    SELECT
        romVersion, userPlayDate, musicId, level, score, maxCombo,
        judgeGuilty, judgeAttack, judgeJustice, judgeCritical, judgeHeaven,
        isFullCombo, isAllJustice, isClear
    FROM chuni_score_playlog
    WHERE user = ?1
    ORDER BY userPlayDate";

const ONGEKI_PLAYLOG_QUERY: &str = "
    SELECT
        userPlayDate, musicId, clearStatus, level, techScore, maxCombo,
        judgeMiss, judgeHit, judgeBreak, judgeCriticalBreak,
        bellCount, damageCount, isFullCombo, isFullBell, isAllBreak,
        platinumScore, totalBellCount
    FROM ongeki_score_playlog
    WHERE user = ?1
    ORDER BY userPlayDate";

/// Read-only view of an ARTEMiS SQLite database
pub struct SqliteSource {
    conn: Connection,
}

impl SqliteSource {
    /// Open an existing database file without write access
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path.as_ref(),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!("Opened database {}", path.as_ref().display());
        Ok(Self { conn })
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

impl DataSource for SqliteSource {
    fn user_from_card(&self, access_code: &str) -> Result<Option<String>> {
        let user: Option<Option<i64>> = self
            .conn
            .query_row(CARD_QUERY, params![access_code], |row| row.get(0))
            .optional()?;
        Ok(user.flatten().map(|user| user.to_string()))
    }

    fn user_count(&self, game: Game) -> Result<u64> {
        let query = format!("SELECT COUNT(DISTINCT user) FROM {}", game.profile_table());
        let count: i64 = self.conn.query_row(&query, [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    fn user_name(&self, game: Game, user_id: &str) -> Result<Option<String>> {
        let query = format!("SELECT userName FROM {} WHERE user = ?1", game.profile_table());
        let name: Option<Option<String>> = self
            .conn
            .query_row(&query, params![user_id], |row| row.get(0))
            .optional()?;
        Ok(name.flatten())
    }

    fn chunithm_profile(&self, user_id: &str) -> Result<Option<ChunithmProfile>> {
        let profile = self
            .conn
            .query_row(CHUNITHM_PROFILE_QUERY, params![user_id], |row| {
                Ok(ChunithmProfile {
                    class_emblem_base: row.get("classEmblemBase")?,
                    class_emblem_medal: row.get("classEmblemMedal")?,
                })
            })
            .optional()?;
        Ok(profile)
    }

    fn scan_chunithm_playlog(
        &self,
        user_id: &str,
        visit: &mut dyn FnMut(ChunithmPlaylog) -> Result<()>,
    ) -> Result<()> {
        let mut stmt = self.conn.prepare(CHUNITHM_PLAYLOG_QUERY)?;
        let mut rows = stmt.query(params![user_id])?;
        while let Some(row) = rows.next()? {
            visit(parse_chunithm_row(row)?)?;
        }
        Ok(())
    }

    fn scan_ongeki_playlog(
        &self,
        user_id: &str,
        visit: &mut dyn FnMut(OngekiPlaylog) -> Result<()>,
    ) -> Result<()> {
        let mut stmt = self.conn.prepare(ONGEKI_PLAYLOG_QUERY)?;
        let mut rows = stmt.query(params![user_id])?;
        while let Some(row) = rows.next()? {
            visit(parse_ongeki_row(row)?)?;
        }
        Ok(())
    }
}

fn parse_chunithm_row(row: &Row<'_>) -> rusqlite::Result<ChunithmPlaylog> {
    Ok(ChunithmPlaylog {
        rom_version: row.get("romVersion")?,
        user_play_date: row.get("userPlayDate")?,
        music_id: row.get("musicId")?,
        level: row.get("level")?,
        score: row.get("score")?,
        max_combo: row.get("maxCombo")?,
        judge_guilty: row.get("judgeGuilty")?,
        judge_attack: row.get("judgeAttack")?,
        judge_justice: row.get("judgeJustice")?,
        judge_critical: row.get("judgeCritical")?,
        judge_heaven: row.get("judgeHeaven")?,
        is_full_combo: row.get("isFullCombo")?,
        is_all_justice: row.get("isAllJustice")?,
        is_clear: row.get("isClear")?,
    })
}

fn parse_ongeki_row(row: &Row<'_>) -> rusqlite::Result<OngekiPlaylog> {
    Ok(OngekiPlaylog {
        user_play_date: row.get("userPlayDate")?,
        music_id: row.get("musicId")?,
        clear_status: row.get("clearStatus")?,
        level: row.get("level")?,
        tech_score: row.get("techScore")?,
        max_combo: row.get("maxCombo")?,
        judge_miss: row.get("judgeMiss")?,
        judge_hit: row.get("judgeHit")?,
        judge_break: row.get("judgeBreak")?,
        judge_critical_break: row.get("judgeCriticalBreak")?,
        bell_count: row.get("bellCount")?,
        damage_count: row.get("damageCount")?,
        is_full_combo: row.get("isFullCombo")?,
        is_full_bell: row.get("isFullBell")?,
        is_all_break: row.get("isAllBreak")?,
        platinum_score: row.get("platinumScore")?,
        total_bell_count: row.get("totalBellCount")?,
    })
}
