//! Play date normalization.
//!
//! ARTEMiS stores `userPlayDate` as a zone-less `YYYY-MM-DD hh:mm:ss` string.
//! Each game decides the unit of the exported instant, a fixed offset, and
//! whether an unparseable value aborts the export.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::{Error, Result};

/// Layout of `userPlayDate`; a trailing fraction of a second is tolerated
pub const PLAY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Milliseconds,
}

/// What to do with a play date that does not parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// Drop `timeAchieved` from the record
    Omit,
    /// Fail the whole export
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampPolicy {
    pub unit: TimeUnit,
    /// Added after conversion to an absolute instant
    pub offset_ms: i64,
    pub on_parse_failure: ParseFailure,
}

impl TimestampPolicy {
    /// Convert an optional play date to `timeAchieved`
    pub fn normalize(&self, play_date: Option<&str>) -> Result<Option<i64>> {
        let Some(raw) = play_date else {
            return Ok(None);
        };

        let parsed = match NaiveDateTime::parse_from_str(raw, PLAY_DATE_FORMAT) {
            Ok(parsed) => parsed.and_utc(),
            Err(source) => {
                return match self.on_parse_failure {
                    ParseFailure::Omit => {
                        debug!("Dropping unparseable play date {:?}: {}", raw, source);
                        Ok(None)
                    }
                    ParseFailure::Abort => Err(Error::TimestampParse {
                        value: raw.to_string(),
                        source,
                    }),
                };
            }
        };

        let value = match self.unit {
            TimeUnit::Seconds => parsed.timestamp() + self.offset_ms / 1000,
            TimeUnit::Milliseconds => parsed.timestamp_millis() + self.offset_ms,
        };
        Ok(Some(value))
    }
}
