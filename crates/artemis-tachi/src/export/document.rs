//! Tachi batch-manual JSON structures
//!
//! The record and document types are generic over the game's lamp,
//! judgement, and optional-counter types so both games share one shape.

use serde::Serialize;

use crate::game::{ChunithmJudgements, ChunithmLamp, ChunithmOptional, Game};
use crate::game::{OngekiJudgements, OngekiLamp, OngekiOptional};

/// Every exported score identifies its chart by the in-game music id
pub const MATCH_TYPE: &str = "inGameID";

/// Only single-player play types exist for the exported games
pub const PLAYTYPE: &str = "Single";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meta {
    pub game: &'static str,
    pub playtype: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchManualScore<L, J, O> {
    pub identifier: String,
    pub match_type: &'static str,
    pub score: i64,
    pub lamp: L,
    pub difficulty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_achieved: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub judgements: Option<J>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<O>,
}

/// Class badges earned outside individual plays
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dan: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emblem: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchManual<L, J, O> {
    pub meta: Meta,
    pub scores: Vec<BatchManualScore<L, J, O>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Classes>,
}

pub type ChunithmBatchManual = BatchManual<ChunithmLamp, ChunithmJudgements, ChunithmOptional>;
pub type OngekiBatchManual = BatchManual<OngekiLamp, OngekiJudgements, OngekiOptional>;

/// A finished export for one of the exportable games
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExportDocument {
    Chunithm(ChunithmBatchManual),
    Ongeki(OngekiBatchManual),
}

impl ExportDocument {
    pub fn game(&self) -> Game {
        match self {
            Self::Chunithm(_) => Game::Chunithm,
            Self::Ongeki(_) => Game::Ongeki,
        }
    }

    pub fn meta(&self) -> &Meta {
        match self {
            Self::Chunithm(doc) => &doc.meta,
            Self::Ongeki(doc) => &doc.meta,
        }
    }

    /// Number of exported scores
    pub fn len(&self) -> usize {
        match self {
            Self::Chunithm(doc) => doc.scores.len(),
            Self::Ongeki(doc) => doc.scores.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// File name the document is written under
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Chunithm(_) => "chuni_tachi_export.json",
            Self::Ongeki(_) => "ongeki_tachi_export.json",
        }
    }
}
