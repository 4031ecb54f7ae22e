//! Free functions over the global engine.

use bazi_base::Gender;
use bazi_search::{SearchError, YearMatches};
use bazi_time::LunarDate;

use crate::date::BirthDate;
use crate::engine::FullChart;
use crate::global::engine;

/// Full chart of a Gregorian civil moment.
pub fn analyze_solar(date: &BirthDate, gender: Gender) -> Result<FullChart, SearchError> {
    engine().analyze_solar(date, gender)
}

/// Full chart of a lunar date.
pub fn analyze_lunar(
    date: LunarDate,
    hour: u32,
    minute: u32,
    gender: Gender,
) -> Result<FullChart, SearchError> {
    engine().analyze_lunar(date, hour, minute, gender)
}

/// Full chart of a literal four-pillar string.
pub fn analyze_ganzhi(
    pillars: &str,
    gender: Gender,
    hint_year: Option<i32>,
) -> Result<FullChart, SearchError> {
    engine().analyze_ganzhi(pillars, gender, hint_year)
}

pub fn matching_years(spec: &str) -> Result<YearMatches, SearchError> {
    engine().matching_years(spec)
}

pub fn find_most_likely_year(spec: &str, hint: Option<i32>) -> Result<Option<i32>, SearchError> {
    engine().find_most_likely_year(spec, hint)
}
