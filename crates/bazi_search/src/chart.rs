//! Chart builders for solar, lunar and literal stem/branch input.

use bazi_base::{AnnotatedChart, Gender, PillarSpec, parse_four_pillars};
use bazi_time::{CivilTime, LunarDate};
use tracing::debug;

use crate::calendar::CalendarBackend;
use crate::error::SearchError;
use crate::pillars::Sect;
use crate::year_match::YearResolver;

/// A chart and the civil birth moment it was built from, when known.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthChart {
    pub chart: AnnotatedChart,
    /// `None` for a literal chart no calendar moment was found for.
    pub birth: Option<CivilTime>,
}

/// Chart of a Gregorian civil moment.
pub fn chart_from_solar<C: CalendarBackend + ?Sized>(
    calendar: &C,
    moment: &CivilTime,
    gender: Gender,
    sect: Sect,
) -> Result<BirthChart, SearchError> {
    moment.validate()?;
    let raw = calendar.pillars_at(moment, sect)?;
    debug!(%moment, pillars = %raw, ?sect, "chart from solar moment");
    Ok(BirthChart {
        chart: AnnotatedChart::annotate(raw, gender),
        birth: Some(*moment),
    })
}

/// Chart of a lunar date (leap months included) at a civil hour and minute.
pub fn chart_from_lunar<C: CalendarBackend + ?Sized>(
    calendar: &C,
    date: LunarDate,
    hour: u32,
    minute: u32,
    gender: Gender,
    sect: Sect,
) -> Result<BirthChart, SearchError> {
    let (year, month, day) = calendar.lunar_to_solar(date)?;
    let moment = CivilTime::new(year, month, day, hour, minute, 0.0);
    debug!(?date, %moment, "lunar date converted");
    chart_from_solar(calendar, &moment, gender, sect)
}

/// Chart of a literal four-pillar string.
///
/// The pillars are taken as given. The birth moment is looked up through
/// `resolver` (closest to `hint_year`, else the current year) so fortune
/// periods can be dated; a chart the calendar cannot place keeps
/// `birth: None` rather than failing.
pub fn chart_from_ganzhi<C: CalendarBackend + ?Sized>(
    resolver: &YearResolver<'_, C>,
    pillars: &str,
    gender: Gender,
    hint_year: Option<i32>,
) -> Result<BirthChart, SearchError> {
    let raw = parse_four_pillars(pillars)?;
    let spec = PillarSpec {
        year: raw.year,
        month: Some(raw.month),
        day: Some(raw.day),
        hour: Some(raw.hour),
    };
    let birth = resolver.most_likely_moment(&spec, hint_year);
    match &birth {
        Some(t) => debug!(pillars = %raw, birth = %t, "literal chart placed"),
        None => debug!(pillars = %raw, "literal chart has no calendar moment"),
    }
    Ok(BirthChart {
        chart: AnnotatedChart::annotate(raw, gender),
        birth,
    })
}
