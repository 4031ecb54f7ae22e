//! Commencement from the distance between birth and the adjacent jie.

use bazi_base::{AnnotatedChart, Commencement, Direction, YunSchool};
use bazi_time::CivilTime;
use tracing::warn;

use crate::calendar::CalendarBackend;
use crate::error::CalendarError;

/// Forward charts count to the next jie, backward charts from the
/// previous one.
pub fn resolve_commencement<C: CalendarBackend + ?Sized>(
    calendar: &C,
    chart: &AnnotatedChart,
    birth: &CivilTime,
    school: YunSchool,
) -> Result<Commencement, CalendarError> {
    let (prev, next) = calendar.jie_bracket(birth)?;
    Ok(match Direction::of(chart.gender(), chart.raw().year.stem()) {
        Direction::Forward => Commencement::between(birth, &next, school),
        Direction::Backward => Commencement::between(&prev, birth, school),
    })
}

/// [`resolve_commencement`], or a whole-year estimate when the calendar
/// cannot bracket the birth moment.
pub fn commencement_or_estimate<C: CalendarBackend + ?Sized>(
    calendar: &C,
    chart: &AnnotatedChart,
    birth: &CivilTime,
    school: YunSchool,
    estimate_years: u32,
) -> Commencement {
    match resolve_commencement(calendar, chart, birth, school) {
        Ok(c) => c,
        Err(e) => {
            warn!(
                error = %e,
                %birth,
                estimate_years,
                "jie distance unavailable, using estimated commencement"
            );
            Commencement::estimated(estimate_years, school)
        }
    }
}
