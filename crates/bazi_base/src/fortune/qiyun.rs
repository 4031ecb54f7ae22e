//! Commencement (QiYun): when the first decade period begins.
//!
//! The distance from birth to the adjacent jie term is scaled to a
//! lifetime offset. Two conversion schools are in use:
//!
//! - school 1: 3 days = 1 year, 1 day = 4 months, 1 double-hour = 10 days
//! - school 2: 4320 minutes = 1 year, 360 = 1 month, 12 = 1 day, 1 = 2 hours

use serde::Serialize;

use bazi_time::{CivilTime, day_number, days_in_month};

use crate::error::BaziError;

/// Conversion school for the birth-to-jie distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum YunSchool {
    /// Whole days and double-hours.
    #[default]
    DaysAndShichen,
    /// Exact minutes.
    Minutes,
}

impl YunSchool {
    /// 1 or 2.
    pub const fn from_code(code: u8) -> Result<Self, BaziError> {
        match code {
            1 => Ok(Self::DaysAndShichen),
            2 => Ok(Self::Minutes),
            _ => Err(BaziError::InvalidInput("yun school must be 1 or 2")),
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::DaysAndShichen => 1,
            Self::Minutes => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::DaysAndShichen => "按天数和时辰数计算",
            Self::Minutes => "按分钟数计算",
        }
    }
}

/// Offset from birth to the start of the first decade period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Commencement {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub school: YunSchool,
    /// True when the offset is a configured estimate, not a computed one.
    pub estimated: bool,
}

/// Double-hour index with 23:00 counted as the last one of the day.
fn shichen_index(t: &CivilTime) -> i64 {
    if t.hour == 23 {
        11
    } else {
        ((t.hour as i64 + 1) / 2) % 12
    }
}

fn minute_of_day(t: &CivilTime) -> i64 {
    t.hour as i64 * 60 + t.minute as i64
}

impl Commencement {
    /// Convert the span `start..end` (same UTC offset, `start` first).
    ///
    /// Forward charts pass birth and the next jie; backward charts pass
    /// the previous jie and birth.
    pub fn between(start: &CivilTime, end: &CivilTime, school: YunSchool) -> Self {
        let day_diff = day_number(end.year, end.month, end.day)
            - day_number(start.year, start.month, start.day);
        let (years, months, days, hours) = match school {
            YunSchool::DaysAndShichen => {
                let mut hour_diff = shichen_index(end) - shichen_index(start);
                let mut day_diff = day_diff;
                if hour_diff < 0 {
                    hour_diff += 12;
                    day_diff -= 1;
                }
                let day_diff = day_diff.max(0);
                let month_diff = hour_diff * 10 / 30;
                let total_months = day_diff * 4 + month_diff;
                let days = hour_diff * 10 - month_diff * 30;
                (total_months / 12, total_months % 12, days, 0)
            }
            YunSchool::Minutes => {
                let mut minutes =
                    (day_diff * 1440 + minute_of_day(end) - minute_of_day(start)).max(0);
                let years = minutes / 4320;
                minutes -= years * 4320;
                let months = minutes / 360;
                minutes -= months * 360;
                let days = minutes / 12;
                minutes -= days * 12;
                (years, months, days, minutes * 2)
            }
        };
        Self {
            years: years as u32,
            months: months as u32,
            days: days as u32,
            hours: hours as u32,
            school,
            estimated: false,
        }
    }

    /// A whole-year estimate for when no jie distance is available.
    pub const fn estimated(years: u32, school: YunSchool) -> Self {
        Self {
            years,
            months: 0,
            days: 0,
            hours: 0,
            school,
            estimated: true,
        }
    }

    /// Birth moment shifted by this offset. Month steps clamp the day to
    /// the target month's length.
    pub fn start_date(&self, birth: &CivilTime) -> CivilTime {
        let total_months = birth.month as i64 - 1 + self.months as i64 + 12 * self.years as i64;
        let year = birth.year + total_months.div_euclid(12) as i32;
        let month = total_months.rem_euclid(12) as u32 + 1;
        let day = birth.day.min(days_in_month(year, month));
        let shifted = CivilTime::new(year, month, day, birth.hour, birth.minute, birth.second)
            .add_days(self.days as i64);
        if self.hours == 0 {
            shifted
        } else {
            CivilTime::from_jd_ut(shifted.to_jd_ut(0.0) + self.hours as f64 / 24.0, 0.0)
        }
    }
}

impl std::fmt::Display for Commencement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}年{}个月{}天{}小时",
            self.years, self.months, self.days, self.hours
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn school_one_days_and_double_hours() {
        // 7 days and 3 double-hours: 28 months + 1 month = 2y5m, 0 days
        let start = CivilTime::new(1990, 5, 10, 8, 0, 0.0);
        let end = CivilTime::new(1990, 5, 17, 14, 0, 0.0);
        let c = Commencement::between(&start, &end, YunSchool::DaysAndShichen);
        assert_eq!((c.years, c.months, c.days, c.hours), (2, 5, 0, 0));
    }

    #[test]
    fn school_one_borrows_a_day() {
        // end double-hour earlier than start: 1 day back, 10 double-hours
        let start = CivilTime::new(1990, 5, 10, 20, 0, 0.0);
        let end = CivilTime::new(1990, 5, 13, 0, 30, 0.0);
        let c = Commencement::between(&start, &end, YunSchool::DaysAndShichen);
        // 3 days, 0 - 10 double-hours: borrow to 2 days and 2 double-hours
        assert_eq!((c.years, c.months, c.days), (0, 8, 20));
    }

    #[test]
    fn school_two_minutes() {
        // 4320 + 360 + 12 + 1 minutes
        let start = CivilTime::new(2000, 1, 1, 0, 0, 0.0);
        let end = CivilTime::new(2000, 1, 4, 6, 13, 0.0);
        let c = Commencement::between(&start, &end, YunSchool::Minutes);
        assert_eq!((c.years, c.months, c.days, c.hours), (1, 1, 1, 2));
    }

    #[test]
    fn start_date_clamps_month_end() {
        let c = Commencement {
            years: 0,
            months: 1,
            days: 0,
            hours: 0,
            school: YunSchool::DaysAndShichen,
            estimated: false,
        };
        let d = c.start_date(&CivilTime::new(2001, 1, 31, 10, 0, 0.0));
        assert_eq!(d.ymd(), (2001, 2, 28));
        let e = Commencement::estimated(5, YunSchool::Minutes);
        assert_eq!(e.start_date(&CivilTime::new(1990, 6, 1, 0, 0, 0.0)).year, 1995);
        assert!(e.estimated);
    }
}
