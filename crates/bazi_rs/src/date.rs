//! Birth date input with string parsing.

use std::str::FromStr;

use bazi_search::SearchError;
use bazi_time::CivilTime;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

/// Civil birth moment to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BirthDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl BirthDate {
    pub const fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    pub fn to_civil(&self) -> CivilTime {
        CivilTime::new(self.year, self.month, self.day, self.hour, self.minute, 0.0)
    }
}

impl From<CivilTime> for BirthDate {
    fn from(t: CivilTime) -> Self {
        Self::new(t.year, t.month, t.day, t.hour, t.minute)
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM[:SS]` or the same with `T`.
/// A bare date means midnight.
impl FromStr for BirthDate {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
            .ok_or(SearchError::InvalidRequest(
                "birth date must look like YYYY-MM-DD or YYYY-MM-DD HH:MM",
            ))?;
        Ok(Self::new(
            parsed.year(),
            parsed.month(),
            parsed.day(),
            parsed.hour(),
            parsed.minute(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_forms() {
        let want = BirthDate::new(1990, 6, 15, 8, 45);
        assert_eq!("1990-06-15 08:45".parse::<BirthDate>(), Ok(want));
        assert_eq!("1990-06-15T08:45:30".parse::<BirthDate>(), Ok(want));
        assert_eq!(
            "1990-06-15".parse::<BirthDate>(),
            Ok(BirthDate::new(1990, 6, 15, 0, 0))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!("1990-02-30".parse::<BirthDate>().is_err());
        assert!("yesterday".parse::<BirthDate>().is_err());
    }

    #[test]
    fn display_and_civil() {
        let d = BirthDate::new(2024, 1, 5, 9, 3);
        assert_eq!(d.to_string(), "2024-01-05 09:03");
        assert_eq!(d.to_civil().ymd(), (2024, 1, 5));
    }
}
