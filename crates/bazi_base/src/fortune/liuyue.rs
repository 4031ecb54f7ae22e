//! Monthly periods (LiuYue) of one sexagenary year.
//!
//! Months run 寅 to 丑. Each starts on its jie term and ends the day
//! before the next one; the 丑 month's 小寒 falls in the following
//! Gregorian year.

use serde::Serialize;

use bazi_time::{CivilTime, SolarTerm, TimeError, solar_term_jd};

use super::types::{PeriodFacts, SolarDate};
use crate::branch::Branch;
use crate::chart::AnnotatedChart;
use crate::ganzhi::GanZhi;
use crate::stem::Stem;

const MONTH_LABELS: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "腊月",
];

/// Civil offset used for jie-term dates.
const JIE_DATE_OFFSET_HOURS: f64 = 8.0;

/// First and last civil day of a solar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthSpan {
    pub start: SolarDate,
    /// Inclusive.
    pub end: SolarDate,
    pub jie: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiuYue {
    /// The annual period this month belongs to.
    pub year: i32,
    /// 0 for 寅 (正月) through 11 for 丑 (腊月).
    pub index: u8,
    pub label: &'static str,
    pub facts: PeriodFacts,
    /// `None` outside the supported calendar range.
    pub span: Option<MonthSpan>,
}

/// Stem of the 寅 month by the five-tiger rule (甲己 → 丙, 乙庚 → 戊, ...).
pub const fn first_month_stem(year_stem: Stem) -> Stem {
    Stem::wrapping((year_stem.index() as i64 % 5) * 2 + 2)
}

/// Month pillars of a sexagenary year, 寅 month first.
pub fn month_pillars(year: i32) -> [GanZhi; 12] {
    let first_stem = first_month_stem(GanZhi::of_year(year).stem());
    let first = GanZhi::from_cycle_index(cycle_index_of(first_stem, Branch::Yin));
    std::array::from_fn(|k| first.step(k as i64))
}

/// Cycle position of a parity-matched stem and branch.
const fn cycle_index_of(stem: Stem, branch: Branch) -> i64 {
    (6 * stem.index() as i64 - 5 * branch.index() as i64).rem_euclid(60)
}

fn jie_date(year: i32, term: SolarTerm) -> Result<CivilTime, TimeError> {
    solar_term_jd(year, term).map(|jd| CivilTime::from_jd_ut(jd, JIE_DATE_OFFSET_HOURS))
}

/// Gregorian year in which month `k` of sexagenary `year` opens.
const fn opening_year(year: i32, k: usize) -> i32 {
    if k == 11 { year + 1 } else { year }
}

fn month_span(year: i32, k: usize) -> Result<MonthSpan, TimeError> {
    let branch = (2 + k as u8) % 12;
    let term = SolarTerm::jie_for_month_branch(branch);
    let start = jie_date(opening_year(year, k), term)?;
    let next_term = SolarTerm::jie_for_month_branch((branch + 1) % 12);
    let next_year = if k == 11 { year + 1 } else { opening_year(year, k + 1) };
    let end = jie_date(next_year, next_term)?.add_days(-1);
    let (sy, sm, sd) = start.ymd();
    let (ey, em, ed) = end.ymd();
    Ok(MonthSpan {
        start: SolarDate::new(sy, sm, sd),
        end: SolarDate::new(ey, em, ed),
        jie: term.name(),
    })
}

/// The twelve months of sexagenary `year`.
pub fn generate_liu_yue(chart: &AnnotatedChart, year: i32) -> Vec<LiuYue> {
    let day_master = chart.day_master();
    month_pillars(year)
        .into_iter()
        .enumerate()
        .map(|(k, gz)| LiuYue {
            year,
            index: k as u8,
            label: MONTH_LABELS[k],
            facts: PeriodFacts::new(gz, day_master, day_master),
            span: month_span(year, k).ok(),
        })
        .collect()
}
