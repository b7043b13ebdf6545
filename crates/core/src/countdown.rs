//! Countdown to the campaign draw.

use std::fmt;

use chrono::NaiveDateTime;

use crate::error::CoreError;

/// Draw date shown on the landing page, local time.
pub const DEFAULT_DRAW_DATE: &str = "2026-04-16T00:00:00";

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Remaining time broken into display units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    pub fn is_zero(&self) -> bool {
        *self == TimeLeft::default()
    }
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} días {:02} h {:02} min {:02} s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Time left from `now` until `target`. All zeros once the target has
/// been reached.
pub fn time_left(target: NaiveDateTime, now: NaiveDateTime) -> TimeLeft {
    let diff = (target - now).num_milliseconds();
    if diff <= 0 {
        return TimeLeft::default();
    }
    TimeLeft {
        days: diff / MS_PER_DAY,
        hours: (diff % MS_PER_DAY) / MS_PER_HOUR,
        minutes: (diff % MS_PER_HOUR) / MS_PER_MINUTE,
        seconds: (diff % MS_PER_MINUTE) / MS_PER_SECOND,
    }
}

/// Parse a `YYYY-MM-DDTHH:MM:SS` draw date.
pub fn parse_draw_date(value: &str) -> Result<NaiveDateTime, CoreError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| CoreError::Validation(format!("invalid draw date '{value}': {e}")))
}
