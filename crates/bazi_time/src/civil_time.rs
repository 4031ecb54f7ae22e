//! Civil (wall-clock) date and time at a fixed UTC offset.
//!
//! `CivilTime` is the canonical moment representation used by the chart
//! builders. Conversion to/from a UT Julian Date needs the offset of the
//! zone the wall clock refers to (China Standard Time is +8).

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, days_in_month, jd_to_calendar};

/// Civil date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of a date.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Check field ranges, including the day count of the month.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidDate(format!("month {}", self.month)));
        }
        let dim = days_in_month(self.year, self.month);
        if self.day == 0 || self.day > dim {
            return Err(TimeError::InvalidDate(format!(
                "day {} in {}-{:02}",
                self.day, self.year, self.month
            )));
        }
        if self.hour > 23 || self.minute > 59 || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidDate(format!(
                "time {:02}:{:02}:{}",
                self.hour, self.minute, self.second
            )));
        }
        Ok(())
    }

    /// Fraction of the civil day elapsed (0.0 at midnight).
    pub fn day_fraction(&self) -> f64 {
        self.hour as f64 / 24.0 + self.minute as f64 / 1440.0 + self.second / 86_400.0
    }

    /// Convert to a UT Julian Date given the zone offset in hours east of UTC.
    pub fn to_jd_ut(&self, utc_offset_hours: f64) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64 + self.day_fraction())
            - utc_offset_hours / 24.0
    }

    /// Convert a UT Julian Date back to civil time at the given offset.
    pub fn from_jd_ut(jd_ut: f64, utc_offset_hours: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd_ut + utc_offset_hours / 24.0);
        let day = day_frac.floor() as u32;
        // round to the millisecond so 12:00 does not print as 11:59:59.999
        let total_ms = (day_frac.fract() * 86_400_000.0).round();
        let mut total_seconds = total_ms / 1000.0;
        let mut civil_day = (year, month, day);
        if total_seconds >= 86_400.0 {
            total_seconds -= 86_400.0;
            let next = Self::date(year, month, day).add_days(1);
            civil_day = (next.year, next.month, next.day);
        }
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year: civil_day.0,
            month: civil_day.1,
            day: civil_day.2,
            hour,
            minute,
            second,
        }
    }

    /// Shift by whole days, keeping the wall-clock time.
    pub fn add_days(&self, days: i64) -> Self {
        let jd = calendar_to_jd(self.year, self.month, self.day as f64) + days as f64;
        let (year, month, day_frac) = jd_to_calendar(jd);
        Self {
            year,
            month,
            day: day_frac.round() as u32,
            ..*self
        }
    }

    /// Civil date as `(year, month, day)`.
    pub fn ymd(&self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second as u32
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = CivilTime::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(t.ymd(), (2024, 3, 20));
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_feb_30() {
        assert!(CivilTime::date(2023, 2, 30).validate().is_err());
        assert!(CivilTime::date(2024, 2, 29).validate().is_ok());
        assert!(CivilTime::new(2024, 1, 1, 24, 0, 0.0).validate().is_err());
    }

    #[test]
    fn jd_roundtrip_with_offset() {
        let t = CivilTime::new(1990, 6, 15, 8, 45, 0.0);
        let jd = t.to_jd_ut(8.0);
        let back = CivilTime::from_jd_ut(jd, 8.0);
        assert_eq!(back.ymd(), (1990, 6, 15));
        assert_eq!((back.hour, back.minute), (8, 45));
    }

    #[test]
    fn offset_moves_jd_back() {
        let t = CivilTime::new(2000, 1, 1, 20, 0, 0.0);
        // 20:00 at +8 is 12:00 UT
        assert!((t.to_jd_ut(8.0) - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn add_days_crosses_month() {
        let t = CivilTime::new(2024, 2, 28, 23, 0, 0.0);
        let n = t.add_days(2);
        assert_eq!(n.ymd(), (2024, 3, 1));
        assert_eq!(n.hour, 23);
        let p = CivilTime::date(2024, 1, 1).add_days(-1);
        assert_eq!(p.ymd(), (2023, 12, 31));
    }

    #[test]
    fn display_format() {
        let t = CivilTime::new(2024, 1, 15, 9, 5, 7.0);
        assert_eq!(t.to_string(), "2024-01-15 09:05:07");
    }
}
