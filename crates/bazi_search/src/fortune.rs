//! Fortune periods dated from a birth moment.

use bazi_base::{
    AnnotatedChart, Fortune, FortuneOptions, LiuRi, LiuShi, SolarDate, YunSchool, build_fortune,
    generate_liu_ri, generate_liu_shi, generate_liu_yue,
};
use bazi_config::EngineConfig;
use bazi_time::CivilTime;
use tracing::debug;

use crate::calendar::CalendarBackend;
use crate::error::SearchError;
use crate::pillars::Sect;
use crate::qiyun::commencement_or_estimate;

/// Period counts and spans from the configuration.
pub fn fortune_options(config: &EngineConfig, liu_yue_year: Option<i32>) -> FortuneOptions {
    FortuneOptions {
        da_yun_count: config.da_yun_count,
        xiao_yun_count: config.xiao_yun_count,
        liu_nian_span: config.liu_nian_span,
        liu_yue_year,
    }
}

/// Every period layer of `chart`, dated from `birth`.
///
/// Never fails on calendar trouble: the commencement falls back to
/// `config.default_commencement_years`.
pub fn fortune_for_birth<C: CalendarBackend + ?Sized>(
    calendar: &C,
    chart: &AnnotatedChart,
    birth: &CivilTime,
    config: &EngineConfig,
    liu_yue_year: Option<i32>,
) -> Result<Fortune, SearchError> {
    let school = YunSchool::from_code(config.yun_sect)?;
    let commencement = commencement_or_estimate(
        calendar,
        chart,
        birth,
        school,
        config.default_commencement_years,
    );
    debug!(%birth, %commencement, estimated = commencement.estimated, "commencement");
    let options = fortune_options(config, liu_yue_year);
    Ok(build_fortune(chart, birth, commencement, &options))
}

/// Daily periods of month `month_index` (0 = 寅) of sexagenary `year`.
pub fn liu_ri_for_month(
    chart: &AnnotatedChart,
    year: i32,
    month_index: usize,
) -> Result<Vec<LiuRi>, SearchError> {
    let months = generate_liu_yue(chart, year);
    let month = months
        .get(month_index)
        .ok_or(SearchError::InvalidRequest("month index must be below 12"))?;
    if month.span.is_none() {
        return Err(SearchError::InvalidRequest("month outside the supported calendar range"));
    }
    let days = generate_liu_ri(chart, month);
    debug!(year, month = month.label, days = days.len(), "liu ri");
    Ok(days)
}

/// Double-hour periods of the sexagenary day of `date` under `sect`.
pub fn liu_shi_for_date(chart: &AnnotatedChart, date: SolarDate, sect: Sect) -> Vec<LiuShi> {
    generate_liu_shi(chart, date, sect.day_turns_at_23())
}
