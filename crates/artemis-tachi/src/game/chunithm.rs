//! CHUNITHM playlog rules.

use serde::Serialize;
use strum::{Display, FromRepr, IntoStaticStr};

use crate::engine::GamePolicy;
use crate::error::{Error, Result};
use crate::export::{BatchManualScore, Classes, MATCH_TYPE};
use crate::game::{Game, Skip, require};
use crate::source::DataSource;
use crate::timestamp::{ParseFailure, TimeUnit, TimestampPolicy};

/// Raw `chuni_score_playlog` row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunithmPlaylog {
    pub rom_version: Option<String>,
    pub user_play_date: Option<String>,
    pub music_id: Option<i64>,
    pub level: Option<i64>,
    pub score: Option<i64>,
    pub max_combo: Option<i64>,
    pub judge_guilty: Option<i64>,
    pub judge_attack: Option<i64>,
    pub judge_justice: Option<i64>,
    pub judge_critical: Option<i64>,
    pub judge_heaven: Option<i64>,
    pub is_full_combo: Option<bool>,
    pub is_all_justice: Option<bool>,
    pub is_clear: Option<bool>,
}

/// Class emblem codes from `chuni_profile_data`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChunithmProfile {
    pub class_emblem_base: Option<i64>,
    pub class_emblem_medal: Option<i64>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, IntoStaticStr, Display,
)]
pub enum ChunithmLamp {
    #[serde(rename = "FAILED")]
    #[strum(serialize = "FAILED")]
    Failed,
    #[serde(rename = "CLEAR")]
    #[strum(serialize = "CLEAR")]
    Clear,
    #[serde(rename = "FULL COMBO")]
    #[strum(serialize = "FULL COMBO")]
    FullCombo,
    #[serde(rename = "ALL JUSTICE")]
    #[strum(serialize = "ALL JUSTICE")]
    AllJustice,
    #[serde(rename = "ALL JUSTICE CRITICAL")]
    #[strum(serialize = "ALL JUSTICE CRITICAL")]
    AllJusticeCritical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, IntoStaticStr, Display)]
#[repr(u8)]
pub enum ChunithmDifficulty {
    #[strum(serialize = "BASIC")]
    Basic = 0,
    #[strum(serialize = "ADVANCED")]
    Advanced = 1,
    #[strum(serialize = "EXPERT")]
    Expert = 2,
    #[strum(serialize = "MASTER")]
    Master = 3,
    #[strum(serialize = "ULTIMA")]
    Ultima = 4,
}

impl ChunithmDifficulty {
    /// Look up a `level` code; `None` outside 0..=4
    pub fn from_code(code: i64) -> Option<Self> {
        u8::try_from(code).ok().and_then(Self::from_repr)
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }
}

/// Tachi class names indexed by emblem code; index 0 means no class
const CLASS_BADGES: [&str; 7] = [
    "",
    "DAN_I",
    "DAN_II",
    "DAN_III",
    "DAN_IV",
    "DAN_V",
    "DAN_INFINITE",
];

/// Translate an emblem code to a Tachi class
pub fn chunithm_class(code: i64) -> Option<&'static str> {
    usize::try_from(code)
        .ok()
        .and_then(|index| CLASS_BADGES.get(index))
        .copied()
        .filter(|badge| !badge.is_empty())
}

/// Clear flags that decide the lamp
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChunithmLampFlags {
    pub is_all_justice: bool,
    pub is_full_combo: bool,
    pub is_clear: bool,
    pub judge_justice: i64,
}

impl ChunithmLampFlags {
    pub fn lamp(&self) -> ChunithmLamp {
        if self.is_all_justice && self.judge_justice == 0 {
            ChunithmLamp::AllJusticeCritical
        } else if self.is_all_justice {
            ChunithmLamp::AllJustice
        } else if self.is_full_combo {
            ChunithmLamp::FullCombo
        } else if self.is_clear {
            ChunithmLamp::Clear
        } else {
            ChunithmLamp::Failed
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChunithmJudgements {
    pub jcrit: i64,
    pub justice: i64,
    pub attack: i64,
    pub miss: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunithmOptional {
    pub max_combo: i64,
}

/// Playlog row that passed decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunithmScore {
    pub music_id: i64,
    pub difficulty: ChunithmDifficulty,
    pub score: i64,
    pub flags: ChunithmLampFlags,
    pub play_date: Option<String>,
    pub max_combo: Option<i64>,
    pub judge_critical: Option<i64>,
    pub judge_heaven: Option<i64>,
    pub judge_attack: Option<i64>,
    pub judge_guilty: Option<i64>,
}

impl ChunithmScore {
    /// WORLD'S END charts use `level` 4 before 2.00 and 5 from 2.00 on
    fn is_worlds_end(rom_version: &str, level: i64) -> bool {
        (rom_version.starts_with("1.") && level == 4)
            || (rom_version.starts_with("2.") && level == 5)
    }

    pub fn decode(row: ChunithmPlaylog) -> std::result::Result<Self, Skip> {
        let rom_version = require(row.rom_version, "romVersion")?;
        let music_id = require(row.music_id, "musicId")?;
        let level = require(row.level, "level")?;
        let score = require(row.score, "score")?;
        let judge_justice = require(row.judge_justice, "judgeJustice")?;
        let is_all_justice = require(row.is_all_justice, "isAllJustice")?;
        let is_full_combo = require(row.is_full_combo, "isFullCombo")?;
        let is_clear = require(row.is_clear, "isClear")?;

        if Self::is_worlds_end(&rom_version, level) {
            return Err(Skip::NonComparableChart { rom_version, level });
        }
        let difficulty =
            ChunithmDifficulty::from_code(level).ok_or(Skip::DifficultyOutOfRange(level))?;

        Ok(Self {
            music_id,
            difficulty,
            score,
            flags: ChunithmLampFlags {
                is_all_justice,
                is_full_combo,
                is_clear,
                judge_justice,
            },
            play_date: row.user_play_date,
            max_combo: row.max_combo,
            judge_critical: row.judge_critical,
            judge_heaven: row.judge_heaven,
            judge_attack: row.judge_attack,
            judge_guilty: row.judge_guilty,
        })
    }

    /// JUSTICE CRITICAL count folds in HEAVEN judgements where the version has them
    pub fn judgements(&self) -> Option<ChunithmJudgements> {
        let critical = self.judge_critical?;
        Some(ChunithmJudgements {
            jcrit: critical + self.judge_heaven.unwrap_or(0),
            justice: self.flags.judge_justice,
            attack: self.judge_attack?,
            miss: self.judge_guilty?,
        })
    }

    pub fn optional(&self) -> Option<ChunithmOptional> {
        self.max_combo.map(|max_combo| ChunithmOptional { max_combo })
    }
}

pub struct ChunithmPolicy;

impl GamePolicy for ChunithmPolicy {
    type Row = ChunithmPlaylog;
    type Decoded = ChunithmScore;
    type Lamp = ChunithmLamp;
    type Judgements = ChunithmJudgements;
    type Optional = ChunithmOptional;

    const GAME: Game = Game::Chunithm;
    const TACHI_GAME: &'static str = "chunithm";
    const SERVICE: &'static str = "Cozynet";
    const TIMESTAMP: TimestampPolicy = TimestampPolicy {
        unit: TimeUnit::Seconds,
        offset_ms: 0,
        on_parse_failure: ParseFailure::Omit,
    };

    fn scan(
        source: &dyn DataSource,
        user_id: &str,
        visit: &mut dyn FnMut(Self::Row) -> Result<()>,
    ) -> Result<()> {
        source.scan_chunithm_playlog(user_id, visit)
    }

    fn classes(source: &dyn DataSource, user_id: &str) -> Result<Option<Classes>> {
        let profile = source
            .chunithm_profile(user_id)?
            .ok_or_else(|| Error::ProfileNotFound {
                game: Game::Chunithm,
                user_id: user_id.to_string(),
            })?;

        Ok(Some(Classes {
            dan: profile.class_emblem_base.and_then(chunithm_class),
            emblem: profile.class_emblem_medal.and_then(chunithm_class),
        }))
    }

    fn decode(row: Self::Row) -> std::result::Result<Self::Decoded, Skip> {
        ChunithmScore::decode(row)
    }

    fn play_date(decoded: &Self::Decoded) -> Option<&str> {
        decoded.play_date.as_deref()
    }

    fn build(
        decoded: &Self::Decoded,
        time_achieved: Option<i64>,
    ) -> BatchManualScore<Self::Lamp, Self::Judgements, Self::Optional> {
        BatchManualScore {
            identifier: decoded.music_id.to_string(),
            match_type: MATCH_TYPE,
            score: decoded.score,
            lamp: decoded.flags.lamp(),
            difficulty: decoded.difficulty.label(),
            time_achieved,
            judgements: decoded.judgements(),
            optional: decoded.optional(),
        }
    }
}
