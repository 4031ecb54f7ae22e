//! Annual periods (LiuNian).

use std::ops::RangeInclusive;

use serde::Serialize;

use super::dayun::DaYun;
use super::types::PeriodFacts;
use crate::chart::AnnotatedChart;
use crate::ganzhi::GanZhi;
use crate::shensha::Star;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiuNian {
    pub year: i32,
    /// Nominal age, 1 in the birth year.
    pub age: i32,
    /// Stars of the year pillar; always ends with 太岁.
    pub facts: PeriodFacts,
}

/// One period per year in `years`.
pub fn generate_liu_nian(
    chart: &AnnotatedChart,
    birth_year: i32,
    years: RangeInclusive<i32>,
) -> Vec<LiuNian> {
    let day_master = chart.day_master();
    years
        .map(|year| {
            let gz = GanZhi::of_year(year);
            let mut facts = PeriodFacts::new(gz, day_master, gz.stem());
            facts.stars.push(Star::TaiSui);
            LiuNian {
                year,
                age: year - birth_year + 1,
                facts,
            }
        })
        .collect()
}

/// The annual periods falling inside `da_yun`.
pub fn liu_nian_in<'a>(periods: &'a [LiuNian], da_yun: &DaYun) -> Vec<&'a LiuNian> {
    periods
        .iter()
        .filter(|ln| da_yun.contains_year(ln.year))
        .collect()
}
