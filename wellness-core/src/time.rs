//! Civil-time helpers: which calendar day a request belongs to.
//!
//! Every check-in, water entry and food log is stamped with the date in one
//! fixed zone (Asia/Kolkata unless configured otherwise), computed fresh from
//! the wall clock on each request.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::error::{EngineError, EngineResult};

pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

/// A fixed civil zone used to derive "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilClock {
    tz: Tz,
}

impl CivilClock {
    pub fn new(tz: &str) -> EngineResult<Self> {
        let tz: Tz = tz
            .parse()
            .map_err(|_| EngineError::configuration(format!("invalid timezone: {tz}")))?;
        Ok(Self { tz })
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Calendar date of `now` in this zone.
    pub fn date_at(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.tz).date_naive()
    }

    /// Wall-clock timestamp of `now` in this zone, without offset.
    pub fn local_at(&self, now: DateTime<Utc>) -> NaiveDateTime {
        now.with_timezone(&self.tz).naive_local()
    }

    pub fn today(&self) -> NaiveDate {
        self.date_at(Utc::now())
    }

    pub fn now_local(&self) -> NaiveDateTime {
        self.local_at(Utc::now())
    }
}

impl Default for CivilClock {
    fn default() -> Self {
        Self {
            tz: chrono_tz::Asia::Kolkata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn midnight_boundary_in_ist() {
        let clock = CivilClock::default();
        // 18:29 UTC is 23:59 IST, 18:31 UTC is 00:01 IST next day.
        let before = Utc.with_ymd_and_hms(2026, 2, 11, 18, 29, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2026, 2, 11, 18, 31, 0).unwrap();
        assert_eq!(clock.date_at(before), NaiveDate::from_ymd_opt(2026, 2, 11).unwrap());
        assert_eq!(clock.date_at(after), NaiveDate::from_ymd_opt(2026, 2, 12).unwrap());
    }

    #[test]
    fn local_timestamp_is_offset() {
        let clock = CivilClock::new("Asia/Kolkata").unwrap();
        let now = Utc.with_ymd_and_hms(2026, 2, 12, 0, 0, 0).unwrap();
        assert_eq!(clock.local_at(now).to_string(), "2026-02-12 05:30:00");
    }

    #[test]
    fn invalid_timezone_rejected() {
        assert!(matches!(
            CivilClock::new("Mars/Olympus"),
            Err(EngineError::Configuration(_))
        ));
    }
}
