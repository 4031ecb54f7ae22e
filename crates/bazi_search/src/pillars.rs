//! Four pillars of a civil moment.
//!
//! The year changes at 立春 and the month at each jie term, both taken
//! as exact instants. The day follows the civil date, except that school
//! 1 moves it at 23:00. The late 子 hour always takes its stem from the
//! following day.

pub use bazi_base::fortune::hour_pillar;

use bazi_base::fortune::month_pillars;
use bazi_base::{Branch, GanZhi, RawPillars};
use bazi_time::{CivilTime, TimeError, day_number, month_branch_index_at, solar_year_at};

use crate::error::SearchError;

/// Rule school for the late-night hour (23:00-24:00).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sect {
    /// School 1: the day pillar advances at 23:00.
    NextDayAt23,
    /// School 2: the day pillar advances at midnight.
    #[default]
    SameDayAt23,
}

impl Sect {
    /// 1 or 2.
    pub const fn from_code(code: u8) -> Result<Self, SearchError> {
        match code {
            1 => Ok(Self::NextDayAt23),
            2 => Ok(Self::SameDayAt23),
            _ => Err(SearchError::InvalidRequest("sect must be 1 or 2")),
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::NextDayAt23 => 1,
            Self::SameDayAt23 => 2,
        }
    }

    /// Whether the sexagenary day opens at 23:00.
    pub const fn day_turns_at_23(self) -> bool {
        matches!(self, Self::NextDayAt23)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::NextDayAt23 => "晚子时日柱算明天",
            Self::SameDayAt23 => "晚子时日柱算当天",
        }
    }
}

/// Branch index of the double-hour containing `hour`; 23:00 and 00:xx are 子.
pub const fn hour_branch_index(hour: u32) -> u8 {
    (((hour + 1) / 2) % 12) as u8
}

/// Month pillar of the solar month with branch `branch_index` in
/// sexagenary year `year`.
pub fn month_pillar(year: i32, branch_index: u8) -> GanZhi {
    month_pillars(year)[(branch_index as usize + 10) % 12]
}

/// Day pillar of a civil moment under `sect`.
pub fn day_pillar(t: &CivilTime, sect: Sect) -> GanZhi {
    let late = t.hour == 23 && sect == Sect::NextDayAt23;
    GanZhi::of_day_number(day_number(t.year, t.month, t.day) + late as i64)
}

/// Hour pillar of a civil moment.
pub fn hour_pillar_at(t: &CivilTime) -> GanZhi {
    let stem_day = day_number(t.year, t.month, t.day) + (t.hour == 23) as i64;
    let branch = Branch::wrapping(hour_branch_index(t.hour) as i64);
    hour_pillar(GanZhi::of_day_number(stem_day).stem(), branch)
}

/// All four pillars of a civil moment at `utc_offset_hours`.
pub fn pillars_at(
    t: &CivilTime,
    utc_offset_hours: f64,
    sect: Sect,
) -> Result<RawPillars, TimeError> {
    t.validate()?;
    let jd = t.to_jd_ut(utc_offset_hours);
    let year = solar_year_at(jd)?;
    let month_branch = month_branch_index_at(jd)?;
    Ok(RawPillars::new(
        GanZhi::of_year(year),
        month_pillar(year, month_branch),
        day_pillar(t, sect),
        hour_pillar_at(t),
    ))
}
