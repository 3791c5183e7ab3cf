//! O.N.G.E.K.I. playlog rules.

use serde::Serialize;
use strum::{Display, IntoStaticStr};

use crate::engine::GamePolicy;
use crate::error::Result;
use crate::export::{BatchManualScore, MATCH_TYPE};
use crate::game::{Game, Skip, require};
use crate::source::DataSource;
use crate::timestamp::{ParseFailure, TimeUnit, TimestampPolicy};

/// The database lags the game's JST play time by nine hours
pub const ONGEKI_TIME_OFFSET_MS: i64 = 9 * 3600 * 1000;

/// Label for difficulty codes missing from the table
pub const UNKNOWN_DIFFICULTY: &str = "UNKNOWN";

/// Raw `ongeki_score_playlog` row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OngekiPlaylog {
    pub user_play_date: Option<String>,
    pub music_id: Option<i64>,
    pub clear_status: Option<i64>,
    pub level: Option<i64>,
    pub tech_score: Option<i64>,
    pub max_combo: Option<i64>,
    pub judge_miss: Option<i64>,
    pub judge_hit: Option<i64>,
    pub judge_break: Option<i64>,
    pub judge_critical_break: Option<i64>,
    pub bell_count: Option<i64>,
    pub damage_count: Option<i64>,
    pub is_full_combo: Option<i64>,
    pub is_full_bell: Option<i64>,
    pub is_all_break: Option<i64>,
    pub platinum_score: Option<i64>,
    pub total_bell_count: Option<i64>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, IntoStaticStr, Display,
)]
pub enum OngekiLamp {
    #[serde(rename = "LOSS")]
    #[strum(serialize = "LOSS")]
    Loss,
    #[serde(rename = "CLEAR")]
    #[strum(serialize = "CLEAR")]
    Clear,
    #[serde(rename = "FULL BELL")]
    #[strum(serialize = "FULL BELL")]
    FullBell,
    #[serde(rename = "FULL COMBO")]
    #[strum(serialize = "FULL COMBO")]
    FullCombo,
    #[serde(rename = "ALL BREAK")]
    #[strum(serialize = "ALL BREAK")]
    AllBreak,
}

/// Map a `level` code to its Tachi difficulty name
pub fn ongeki_difficulty(code: i64) -> &'static str {
    match code {
        0 => "BASIC",
        1 => "ADVANCED",
        2 => "EXPERT",
        3 => "MASTER",
        10 => "LUNATIC",
        _ => UNKNOWN_DIFFICULTY,
    }
}

/// Flag columns that decide the lamp; set flags are stored as 1
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OngekiLampFlags {
    pub is_all_break: i64,
    pub is_full_combo: i64,
    pub is_full_bell: i64,
    pub clear_status: i64,
}

impl OngekiLampFlags {
    pub fn lamp(&self) -> OngekiLamp {
        if self.is_all_break == 1 {
            OngekiLamp::AllBreak
        } else if self.is_full_combo == 1 {
            OngekiLamp::FullCombo
        } else if self.is_full_bell == 1 {
            OngekiLamp::FullBell
        } else if self.clear_status > 0 {
            OngekiLamp::Clear
        } else {
            OngekiLamp::Loss
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OngekiJudgements {
    pub cbreak: i64,
    #[serde(rename = "break")]
    pub r#break: i64,
    pub hit: i64,
    pub miss: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OngekiOptional {
    pub max_combo: i64,
    pub damage: i64,
    pub bell_count: i64,
    pub total_bell_count: i64,
    pub plat_score: i64,
}

/// Playlog row that passed decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OngekiScore {
    pub music_id: i64,
    pub level: Option<i64>,
    pub tech_score: i64,
    pub flags: OngekiLampFlags,
    pub play_date: Option<String>,
    pub judge_critical_break: Option<i64>,
    pub judge_break: Option<i64>,
    pub judge_hit: Option<i64>,
    pub judge_miss: Option<i64>,
    pub max_combo: Option<i64>,
    pub damage_count: Option<i64>,
    pub bell_count: Option<i64>,
    pub total_bell_count: Option<i64>,
    pub platinum_score: Option<i64>,
}

impl OngekiScore {
    pub fn decode(row: OngekiPlaylog) -> std::result::Result<Self, Skip> {
        Ok(Self {
            music_id: require(row.music_id, "musicId")?,
            level: row.level,
            tech_score: require(row.tech_score, "techScore")?,
            flags: OngekiLampFlags {
                is_all_break: require(row.is_all_break, "isAllBreak")?,
                is_full_combo: require(row.is_full_combo, "isFullCombo")?,
                is_full_bell: require(row.is_full_bell, "isFullBell")?,
                clear_status: require(row.clear_status, "clearStatus")?,
            },
            play_date: row.user_play_date,
            judge_critical_break: row.judge_critical_break,
            judge_break: row.judge_break,
            judge_hit: row.judge_hit,
            judge_miss: row.judge_miss,
            max_combo: row.max_combo,
            damage_count: row.damage_count,
            bell_count: row.bell_count,
            total_bell_count: row.total_bell_count,
            platinum_score: row.platinum_score,
        })
    }

    /// Missing or unmapped codes resolve to `UNKNOWN` instead of dropping the row
    pub fn difficulty(&self) -> &'static str {
        self.level.map_or(UNKNOWN_DIFFICULTY, ongeki_difficulty)
    }

    pub fn judgements(&self) -> Option<OngekiJudgements> {
        Some(OngekiJudgements {
            cbreak: self.judge_critical_break?,
            r#break: self.judge_break?,
            hit: self.judge_hit?,
            miss: self.judge_miss?,
        })
    }

    pub fn optional(&self) -> Option<OngekiOptional> {
        Some(OngekiOptional {
            max_combo: self.max_combo?,
            damage: self.damage_count?,
            bell_count: self.bell_count?,
            total_bell_count: self.total_bell_count?,
            plat_score: self.platinum_score?,
        })
    }
}

pub struct OngekiPolicy;

impl GamePolicy for OngekiPolicy {
    type Row = OngekiPlaylog;
    type Decoded = OngekiScore;
    type Lamp = OngekiLamp;
    type Judgements = OngekiJudgements;
    type Optional = OngekiOptional;

    const GAME: Game = Game::Ongeki;
    const TACHI_GAME: &'static str = "ongeki";
    const SERVICE: &'static str = "batch-artemis-export";
    // Unlike CHUNITHM, an unparseable date fails the export instead of dropping the field
    const TIMESTAMP: TimestampPolicy = TimestampPolicy {
        unit: TimeUnit::Milliseconds,
        offset_ms: ONGEKI_TIME_OFFSET_MS,
        on_parse_failure: ParseFailure::Abort,
    };

    fn scan(
        source: &dyn DataSource,
        user_id: &str,
        visit: &mut dyn FnMut(Self::Row) -> Result<()>,
    ) -> Result<()> {
        source.scan_ongeki_playlog(user_id, visit)
    }

    fn decode(row: Self::Row) -> std::result::Result<Self::Decoded, Skip> {
        OngekiScore::decode(row)
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
            score: decoded.tech_score,
            lamp: decoded.flags.lamp(),
            difficulty: decoded.difficulty(),
            time_achieved,
            judgements: decoded.judgements(),
            optional: decoded.optional(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_row() -> OngekiPlaylog {
        OngekiPlaylog {
            user_play_date: Some("2024-01-01 12:00:00".into()),
            music_id: Some(8091),
            clear_status: Some(1),
            level: Some(10),
            tech_score: Some(1_004_321),
            max_combo: Some(812),
            judge_miss: Some(0),
            judge_hit: Some(3),
            judge_break: Some(40),
            judge_critical_break: Some(1100),
            bell_count: Some(120),
            damage_count: Some(0),
            is_full_combo: Some(1),
            is_full_bell: Some(1),
            is_all_break: Some(0),
            platinum_score: Some(2210),
            total_bell_count: Some(120),
        }
    }

    fn flags(all_break: i64, full_combo: i64, full_bell: i64, clear: i64) -> OngekiLampFlags {
        OngekiLampFlags {
            is_all_break: all_break,
            is_full_combo: full_combo,
            is_full_bell: full_bell,
            clear_status: clear,
        }
    }

    #[test]
    fn test_lamp_strongest_flag_wins() {
        assert_eq!(flags(1, 1, 1, 1).lamp(), OngekiLamp::AllBreak);
        assert_eq!(flags(1, 0, 0, 0).lamp(), OngekiLamp::AllBreak);
        assert_eq!(flags(0, 1, 1, 1).lamp(), OngekiLamp::FullCombo);
        assert_eq!(flags(0, 0, 1, 1).lamp(), OngekiLamp::FullBell);
        assert_eq!(flags(0, 0, 0, 2).lamp(), OngekiLamp::Clear);
        assert_eq!(flags(0, 0, 0, 0).lamp(), OngekiLamp::Loss);
    }

    #[test]
    fn test_lamp_flags_other_than_one_are_unset() {
        assert_eq!(flags(2, 0, 0, 0).lamp(), OngekiLamp::Loss);
        assert_eq!(flags(0, -1, 0, 1).lamp(), OngekiLamp::Clear);
    }

    #[test]
    fn test_difficulty_table() {
        assert_eq!(ongeki_difficulty(0), "BASIC");
        assert_eq!(ongeki_difficulty(3), "MASTER");
        assert_eq!(ongeki_difficulty(10), "LUNATIC");
        assert_eq!(ongeki_difficulty(4), "UNKNOWN");
        assert_eq!(ongeki_difficulty(99), "UNKNOWN");
        assert_eq!(ongeki_difficulty(-1), "UNKNOWN");
    }

    #[test]
    fn test_decode_missing_required_field() {
        let cases: [(fn(&mut OngekiPlaylog), &str); 6] = [
            (|r| r.music_id = None, "musicId"),
            (|r| r.tech_score = None, "techScore"),
            (|r| r.is_all_break = None, "isAllBreak"),
            (|r| r.is_full_combo = None, "isFullCombo"),
            (|r| r.is_full_bell = None, "isFullBell"),
            (|r| r.clear_status = None, "clearStatus"),
        ];
        for (clear, column) in cases {
            let mut row = complete_row();
            clear(&mut row);
            assert_eq!(OngekiScore::decode(row), Err(Skip::MissingField(column)));
        }
    }

    #[test]
    fn test_missing_level_exports_as_unknown() {
        let mut row = complete_row();
        row.level = None;
        let score = OngekiScore::decode(row).unwrap();
        assert_eq!(score.difficulty(), UNKNOWN_DIFFICULTY);

        let record = OngekiPolicy::build(&score, None);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["identifier"], "8091");
        assert_eq!(json["difficulty"], "UNKNOWN");
        assert_eq!(json["lamp"], "FULL COMBO");
    }

    #[test]
    fn test_decode_optional_columns_absent() {
        let row = OngekiPlaylog {
            music_id: Some(1),
            level: Some(2),
            tech_score: Some(900_000),
            is_all_break: Some(0),
            is_full_combo: Some(0),
            is_full_bell: Some(0),
            clear_status: Some(0),
            ..Default::default()
        };
        let score = OngekiScore::decode(row).unwrap();
        assert_eq!(score.judgements(), None);
        assert_eq!(score.optional(), None);
        assert_eq!(score.play_date, None);
    }

    #[test]
    fn test_groups_are_independent() {
        let mut row = complete_row();
        row.platinum_score = None;
        let score = OngekiScore::decode(row).unwrap();
        assert_eq!(score.optional(), None);
        assert_eq!(
            score.judgements(),
            Some(OngekiJudgements {
                cbreak: 1100,
                r#break: 40,
                hit: 3,
                miss: 0,
            })
        );

        let mut row = complete_row();
        row.judge_hit = None;
        let score = OngekiScore::decode(row).unwrap();
        assert_eq!(score.judgements(), None);
        assert!(score.optional().is_some());
    }

    #[test]
    fn test_build_record() {
        let score = OngekiScore::decode(complete_row()).unwrap();
        let time = OngekiPolicy::TIMESTAMP
            .normalize(OngekiPolicy::play_date(&score))
            .unwrap();
        let record = OngekiPolicy::build(&score, time);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["identifier"], "8091");
        assert_eq!(json["matchType"], "inGameID");
        assert_eq!(json["score"], 1_004_321);
        assert_eq!(json["lamp"], "FULL COMBO");
        assert_eq!(json["difficulty"], "LUNATIC");
        assert_eq!(json["timeAchieved"], 1_704_110_400_000i64 + 32_400_000);
        assert_eq!(json["judgements"]["cbreak"], 1100);
        assert_eq!(json["judgements"]["break"], 40);
        assert_eq!(json["optional"]["totalBellCount"], 120);
        assert_eq!(json["optional"]["platScore"], 2210);
    }

    #[test]
    fn test_unparseable_play_date_is_fatal() {
        let mut row = complete_row();
        row.user_play_date = Some("0000-00-00 00:00:00".into());
        let score = OngekiScore::decode(row).unwrap();
        assert!(
            OngekiPolicy::TIMESTAMP
                .normalize(OngekiPolicy::play_date(&score))
                .is_err()
        );
    }
}
