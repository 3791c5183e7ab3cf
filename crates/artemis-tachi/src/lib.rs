//! # artemis-tachi
//!
//! Exports ARTEMiS arcade server play history as Tachi batch-manual imports.
//!
//! This crate provides:
//! - Per-game playlog decoding, lamp and difficulty classification
//! - A generic export pipeline driven by a [`GamePolicy`] per game
//! - A [`DataSource`] trait with a SQLite implementation
//! - Player lookups by Aime card and per-game player counts
//! - Tachi batch-manual document types and the export file writer

pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod game;
pub mod lookup;
pub mod source;
pub mod timestamp;

pub use config::{CONFIG_FILE, Config, ConfigBuilder};
pub use engine::{GamePolicy, ScanSummary, export, export_with};
pub use error::{Error, Result};
pub use export::{
    BatchManual, BatchManualScore, ChunithmBatchManual, Classes, ExportDocument, Meta,
    OngekiBatchManual, to_pretty_json, write_export,
};
pub use game::{
    ChunithmDifficulty, ChunithmLamp, ChunithmPlaylog, ChunithmPolicy, ChunithmProfile, Game,
    OngekiLamp, OngekiPlaylog, OngekiPolicy, Skip, chunithm_class, ongeki_difficulty,
};
pub use lookup::{Player, find_player, player_by_id, user_counts, user_from_card};
pub use source::{DataSource, SqliteSource};
pub use timestamp::{ParseFailure, TimeUnit, TimestampPolicy};
