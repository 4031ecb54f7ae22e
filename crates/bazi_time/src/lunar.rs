//! Chinese lunisolar calendar conversion.
//!
//! Months begin on the civil day (Beijing time) of a new moon. A "sui"
//! runs from the month containing one winter solstice to the month
//! containing the next; month 11 always holds the solstice. A sui of 13
//! months takes a leap month at the first month without a principal
//! term (zhongqi). Months 11 and 12 of a sui belong to the previous
//! lunar year.

use crate::error::TimeError;
use crate::julian::{date_from_day_number, day_number, ut_to_tt};
use crate::moon_phase::{lunation_at_or_before, new_moon_jd_ut};
use crate::solar_term::{SolarTerm, solar_term_jd};
use crate::sun::sun_apparent_longitude;

/// Offset of the reference meridian (120E) in hours.
pub const BEIJING_OFFSET_HOURS: f64 = 8.0;

/// A date in the Chinese lunar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDate {
    pub year: i32,
    /// 1-12.
    pub month: u32,
    /// 1-30.
    pub day: u32,
    pub is_leap: bool,
}

/// One lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonth {
    pub year: i32,
    pub month: u32,
    pub is_leap: bool,
    /// Julian Day Number of day 1.
    pub start_jdn: i64,
    /// 29 or 30.
    pub days: u32,
}

/// Beijing civil day number of a UT instant.
fn beijing_day(jd_ut: f64) -> i64 {
    (jd_ut + BEIJING_OFFSET_HOURS / 24.0 + 0.5).floor() as i64
}

/// UT instant of Beijing midnight opening day `jdn`.
fn beijing_midnight(jdn: i64) -> f64 {
    jdn as f64 - 0.5 - BEIJING_OFFSET_HOURS / 24.0
}

/// Lunation whose Beijing start day is on or before `jdn`.
fn lunation_starting_by(jdn: i64) -> i64 {
    lunation_at_or_before(beijing_midnight(jdn + 1) - 1e-9)
}

/// Beijing start day of lunation `k`.
fn lunation_start(k: i64) -> i64 {
    beijing_day(new_moon_jd_ut(k))
}

/// Principal-term index (longitude / 30) at Beijing midnight of `jdn`.
fn zhongqi_index(jdn: i64) -> i64 {
    (sun_apparent_longitude(ut_to_tt(beijing_midnight(jdn))) / 30.0).floor() as i64
}

/// Lunation number of the month containing the winter solstice of `year`.
fn solstice_lunation(year: i32) -> Result<i64, TimeError> {
    let solstice = solar_term_jd(year, SolarTerm::DongZhi)?;
    Ok(lunation_starting_by(beijing_day(solstice)))
}

/// Months of the sui that starts at month 11 of lunar year `year - 1`
/// (containing the winter solstice of Gregorian `year - 1`) and ends
/// before the month containing the solstice of `year`.
pub fn sui_months(year: i32) -> Result<Vec<LunarMonth>, TimeError> {
    let k_start = solstice_lunation(year - 1)?;
    let k_end = solstice_lunation(year)?;
    let starts: Vec<i64> = (k_start..=k_end).map(lunation_start).collect();
    let count = (k_end - k_start) as usize;
    let leap_sui = count == 13;

    let mut months = Vec::with_capacity(count);
    let mut number = 11u32;
    let mut leap_taken = false;
    for i in 0..count {
        let (start, next) = (starts[i], starts[i + 1]);
        let is_leap = leap_sui
            && !leap_taken
            && i > 0
            && zhongqi_index(start) == zhongqi_index(next);
        if is_leap {
            leap_taken = true;
        } else if i > 0 {
            number = number % 12 + 1;
        }
        let lunar_year = if number >= 11 && i < 3 { year - 1 } else { year };
        months.push(LunarMonth {
            year: lunar_year,
            month: number,
            is_leap,
            start_jdn: start,
            days: (next - start) as u32,
        });
    }
    Ok(months)
}

/// Convert a lunar date to a Gregorian `(year, month, day)`.
pub fn lunar_to_solar(date: LunarDate) -> Result<(i32, u32, u32), TimeError> {
    let describe = || {
        format!(
            "{}年{}{}月{}日",
            date.year,
            if date.is_leap { "闰" } else { "" },
            date.month,
            date.day
        )
    };
    if !(1..=12).contains(&date.month) || !(1..=30).contains(&date.day) {
        return Err(TimeError::InvalidDate(describe()));
    }
    // months 1-10 live in sui(year), 11-12 in sui(year + 1)
    let sui_year = if date.month >= 11 { date.year + 1 } else { date.year };
    let month = sui_months(sui_year)?
        .into_iter()
        .find(|m| m.year == date.year && m.month == date.month && m.is_leap == date.is_leap)
        .ok_or_else(|| TimeError::NoSuchLunarDate(describe()))?;
    if date.day > month.days {
        return Err(TimeError::NoSuchLunarDate(describe()));
    }
    Ok(date_from_day_number(month.start_jdn + date.day as i64 - 1))
}

/// Convert a Gregorian date to the lunar calendar.
pub fn solar_to_lunar(year: i32, month: u32, day: u32) -> Result<LunarDate, TimeError> {
    let jdn = day_number(year, month, day);
    let next_sui = sui_months(year + 1)?;
    let months = match next_sui.first() {
        Some(first) if jdn >= first.start_jdn => next_sui,
        _ => sui_months(year)?,
    };
    months
        .iter()
        .rev()
        .find(|m| m.start_jdn <= jdn)
        .map(|m| LunarDate {
            year: m.year,
            month: m.month,
            day: (jdn - m.start_jdn) as u32 + 1,
            is_leap: m.is_leap,
        })
        .ok_or_else(|| TimeError::InvalidDate(format!("{year}-{month:02}-{day:02}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spring_festival_2024() {
        let d = LunarDate { year: 2024, month: 1, day: 1, is_leap: false };
        assert_eq!(lunar_to_solar(d).unwrap(), (2024, 2, 10));
    }

    #[test]
    fn spring_festival_2000() {
        let d = LunarDate { year: 2000, month: 1, day: 1, is_leap: false };
        assert_eq!(lunar_to_solar(d).unwrap(), (2000, 2, 5));
    }

    #[test]
    fn leap_month_2023() {
        // 2023 has a leap second month starting 2023-03-22
        let d = LunarDate { year: 2023, month: 2, day: 1, is_leap: true };
        assert_eq!(lunar_to_solar(d).unwrap(), (2023, 3, 22));
        let lunar = solar_to_lunar(2023, 3, 22).unwrap();
        assert!(lunar.is_leap);
        assert_eq!((lunar.month, lunar.day), (2, 1));
    }

    #[test]
    fn missing_leap_month() {
        let d = LunarDate { year: 2024, month: 5, day: 1, is_leap: true };
        assert!(matches!(lunar_to_solar(d), Err(TimeError::NoSuchLunarDate(_))));
    }

    #[test]
    fn solar_to_lunar_before_new_year() {
        // 2024-01-15 is the 5th day of the 12th month of lunar 2023
        let l = solar_to_lunar(2024, 1, 15).unwrap();
        assert_eq!(l, LunarDate { year: 2023, month: 12, day: 5, is_leap: false });
    }

    #[test]
    fn sui_has_twelve_or_thirteen_months() {
        for y in [1990, 2001, 2020, 2023, 2033] {
            let n = sui_months(y).unwrap().len();
            assert!(n == 12 || n == 13, "{y}: {n}");
        }
    }
}
