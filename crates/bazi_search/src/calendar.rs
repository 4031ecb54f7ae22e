//! Calendar backend: the single seam where dates become pillars.
//!
//! Everything that needs solar terms or the lunar calendar goes through
//! [`CalendarBackend`], so callers can substitute another calendar (or a
//! failing one in tests) without touching the rule engine.
//! [`AstronomicalCalendar`] is the built-in implementation over
//! `bazi_time`.

use std::ops::RangeInclusive;

use bazi_base::fortune::month_pillars;
use bazi_base::{CYCLE_LEN, PillarSpec, RawPillars, next_year_for_ganzhi};
use bazi_time::{
    CivilTime, LunarDate, MAX_YEAR, MIN_YEAR, SolarTerm, date_from_day_number, day_number,
    lunar_to_solar, next_jie, prev_jie, solar_term_jd,
};

use crate::error::CalendarError;
use crate::pillars::{Sect, day_pillar, hour_pillar_at, pillars_at};

/// Operations the engine delegates to a calendar.
pub trait CalendarBackend {
    /// Four pillars of a civil moment.
    fn pillars_at(&self, moment: &CivilTime, sect: Sect) -> Result<RawPillars, CalendarError>;

    /// Gregorian date of a lunar date.
    fn lunar_to_solar(&self, date: LunarDate) -> Result<(i32, u32, u32), CalendarError>;

    /// Jie terms bracketing a moment: `(at or before, strictly after)`.
    fn jie_bracket(&self, moment: &CivilTime) -> Result<(CivilTime, CivilTime), CalendarError>;

    /// Moments whose pillars satisfy `spec`, the earliest one per
    /// sexagenary year in `years`, ascending.
    fn resolve(
        &self,
        spec: &PillarSpec,
        sect: Sect,
        years: RangeInclusive<i32>,
    ) -> Result<Vec<CivilTime>, CalendarError>;
}

/// Start hours of the thirteen civil-day slots; 子 is split at midnight.
const SLOT_STARTS: [u32; 13] = [0, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23];

/// Calendar computed from low-precision solar and lunar theory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AstronomicalCalendar {
    utc_offset_hours: f64,
}

impl Default for AstronomicalCalendar {
    fn default() -> Self {
        Self::new(8.0)
    }
}

impl AstronomicalCalendar {
    /// Calendar for civil times at `utc_offset_hours` east of UTC.
    pub const fn new(utc_offset_hours: f64) -> Self {
        Self { utc_offset_hours }
    }

    pub const fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }

    fn civil(&self, jd_ut: f64) -> CivilTime {
        CivilTime::from_jd_ut(jd_ut, self.utc_offset_hours)
    }

    /// Earliest moment of sexagenary `year` matching `spec`.
    fn first_match_in_year(
        &self,
        spec: &PillarSpec,
        sect: Sect,
        year: i32,
    ) -> Result<Option<CivilTime>, CalendarError> {
        for (k, month) in month_pillars(year).into_iter().enumerate() {
            if spec.month.is_some_and(|m| m != month) {
                continue;
            }
            let opens = month_boundary(year, k)?;
            let closes = month_boundary(year, k + 1)?;
            if let Some(t) = self.first_match_in_month(spec, sect, opens, closes) {
                return Ok(Some(t));
            }
        }
        Ok(None)
    }

    /// Scan the double-hour slots of every civil day in `[opens, closes)`.
    fn first_match_in_month(
        &self,
        spec: &PillarSpec,
        sect: Sect,
        opens: f64,
        closes: f64,
    ) -> Option<CivilTime> {
        let (y0, m0, d0) = self.civil(opens).ymd();
        let (y1, m1, d1) = self.civil(closes).ymd();
        for jdn in day_number(y0, m0, d0)..=day_number(y1, m1, d1) {
            let (y, m, d) = date_from_day_number(jdn);
            for (i, &hour) in SLOT_STARTS.iter().enumerate() {
                let slot_end = SLOT_STARTS.get(i + 1).copied().unwrap_or(24);
                let start = CivilTime::new(y, m, d, hour, 0, 0.0).to_jd_ut(self.utc_offset_hours);
                let end = start + (slot_end - hour) as f64 / 24.0;
                let at = start.max(opens);
                if at >= end || at >= closes {
                    continue;
                }
                let t = if at > start {
                    self.civil(at)
                } else {
                    CivilTime::new(y, m, d, hour, 0, 0.0)
                };
                if slot_matches(spec, sect, &t) {
                    return Some(t);
                }
            }
        }
        None
    }
}

/// Instant opening month `k` (0 = 寅) of sexagenary `year`; `k = 12`
/// is the next year's 立春.
fn month_boundary(year: i32, k: usize) -> Result<f64, CalendarError> {
    let branch = ((k + 2) % 12) as u8;
    let gregorian = if k >= 11 { year + 1 } else { year };
    Ok(solar_term_jd(gregorian, SolarTerm::jie_for_month_branch(branch))?)
}

fn slot_matches(spec: &PillarSpec, sect: Sect, t: &CivilTime) -> bool {
    let day_ok = spec.day.is_none_or(|d| d == day_pillar(t, sect));
    day_ok && spec.hour.is_none_or(|h| h == hour_pillar_at(t))
}

impl CalendarBackend for AstronomicalCalendar {
    fn pillars_at(&self, moment: &CivilTime, sect: Sect) -> Result<RawPillars, CalendarError> {
        Ok(pillars_at(moment, self.utc_offset_hours, sect)?)
    }

    fn lunar_to_solar(&self, date: LunarDate) -> Result<(i32, u32, u32), CalendarError> {
        Ok(lunar_to_solar(date)?)
    }

    fn jie_bracket(&self, moment: &CivilTime) -> Result<(CivilTime, CivilTime), CalendarError> {
        moment.validate()?;
        let jd = moment.to_jd_ut(self.utc_offset_hours);
        let (_, prev) = prev_jie(jd)?;
        let (_, next) = next_jie(jd)?;
        Ok((self.civil(prev), self.civil(next)))
    }

    fn resolve(
        &self,
        spec: &PillarSpec,
        sect: Sect,
        years: RangeInclusive<i32>,
    ) -> Result<Vec<CivilTime>, CalendarError> {
        let (first, last) = (*years.start(), *years.end());
        if first < MIN_YEAR || last >= MAX_YEAR {
            return Err(CalendarError::Unsupported(format!(
                "years {first}..={last} outside {MIN_YEAR}..{MAX_YEAR}"
            )));
        }
        let mut out = Vec::new();
        let mut year = next_year_for_ganzhi(first - 1, spec.year);
        while year <= last {
            if let Some(t) = self.first_match_in_year(spec, sect, year)? {
                out.push(t);
            }
            year += CYCLE_LEN as i32;
        }
        Ok(out)
    }
}
