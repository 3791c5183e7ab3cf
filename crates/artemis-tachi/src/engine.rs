//! Score transformation engine.
//!
//! One pipeline drives every game: scan rows, decode or skip, normalize the
//! play date, build the record, and finish the document with the game's
//! metadata. A [`GamePolicy`] supplies the per-game pieces.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::export::{BatchManual, BatchManualScore, Classes, ExportDocument, Meta, PLAYTYPE};
use crate::game::{ChunithmPolicy, Game, OngekiPolicy, Skip};
use crate::source::DataSource;
use crate::timestamp::TimestampPolicy;

/// Per-game rules plugged into the export pipeline
pub trait GamePolicy {
    /// Raw playlog row as read from the database
    type Row;
    /// Row with every required column present
    type Decoded;
    type Lamp: Serialize;
    type Judgements: Serialize;
    type Optional: Serialize;

    const GAME: Game;
    /// Tachi game name (`meta.game`)
    const TACHI_GAME: &'static str;
    /// Service name (`meta.service`)
    const SERVICE: &'static str;
    const TIMESTAMP: TimestampPolicy;

    fn scan(
        source: &dyn DataSource,
        user_id: &str,
        visit: &mut dyn FnMut(Self::Row) -> Result<()>,
    ) -> Result<()>;

    /// Class badges for the document, for games that have them
    fn classes(_source: &dyn DataSource, _user_id: &str) -> Result<Option<Classes>> {
        Ok(None)
    }

    fn decode(row: Self::Row) -> std::result::Result<Self::Decoded, Skip>;

    fn play_date(decoded: &Self::Decoded) -> Option<&str>;

    fn build(
        decoded: &Self::Decoded,
        time_achieved: Option<i64>,
    ) -> BatchManualScore<Self::Lamp, Self::Judgements, Self::Optional>;

    fn meta() -> Meta {
        Meta {
            game: Self::TACHI_GAME,
            playtype: PLAYTYPE,
            service: Self::SERVICE,
        }
    }
}

/// Counters for a finished scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub rows: usize,
    pub exported: usize,
    pub skipped: usize,
}

/// Run the pipeline for one game and player.
///
/// Any error from the scan, the visitor, or the class lookup fails the whole
/// export; a partial document is never returned.
pub fn export_with<P: GamePolicy>(
    source: &dyn DataSource,
    user_id: &str,
) -> Result<BatchManual<P::Lamp, P::Judgements, P::Optional>> {
    let classes = P::classes(source, user_id)?;

    let mut scores = Vec::new();
    let mut summary = ScanSummary::default();

    P::scan(source, user_id, &mut |row| {
        summary.rows += 1;
        match P::decode(row) {
            Ok(decoded) => {
                let time_achieved = P::TIMESTAMP.normalize(P::play_date(&decoded))?;
                scores.push(P::build(&decoded, time_achieved));
                summary.exported += 1;
            }
            Err(skip) => {
                summary.skipped += 1;
                if skip.is_anomaly() {
                    warn!("Skipping {} playlog row: {:?}", P::GAME, skip);
                } else {
                    debug!("Skipping {} playlog row: {:?}", P::GAME, skip);
                }
            }
        }
        Ok(())
    })?;

    info!(
        "{} export for user {}: {} rows, {} exported, {} skipped",
        P::GAME,
        user_id,
        summary.rows,
        summary.exported,
        summary.skipped
    );

    Ok(BatchManual {
        meta: P::meta(),
        scores,
        classes,
    })
}

/// Build the export document for `game` and `user_id`
pub fn export(source: &dyn DataSource, game: Game, user_id: &str) -> Result<ExportDocument> {
    match game {
        Game::Chunithm => Ok(ExportDocument::Chunithm(export_with::<ChunithmPolicy>(
            source, user_id,
        )?)),
        Game::Ongeki => Ok(ExportDocument::Ongeki(export_with::<OngekiPolicy>(
            source, user_id,
        )?)),
        Game::MaiMai => Err(Error::UnsupportedGame(game)),
    }
}
