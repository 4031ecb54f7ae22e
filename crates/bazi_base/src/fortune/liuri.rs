//! Daily periods (LiuRi) of one solar month.

use serde::Serialize;

use super::liuyue::LiuYue;
use super::types::{PeriodFacts, SolarDate};
use crate::chart::AnnotatedChart;
use crate::ganzhi::GanZhi;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiuRi {
    pub date: SolarDate,
    /// 1 on the jie day.
    pub index: u32,
    /// Pillar of the enclosing month.
    pub month: GanZhi,
    pub facts: PeriodFacts,
}

/// One period per civil day of `month`, from its jie day through the day
/// before the next jie. Empty when the month has no span.
pub fn generate_liu_ri(chart: &AnnotatedChart, month: &LiuYue) -> Vec<LiuRi> {
    let Some(span) = month.span else {
        return Vec::new();
    };
    let day_master = chart.day_master();
    (span.start.day_number()..=span.end.day_number())
        .zip(1..)
        .map(|(jdn, index)| LiuRi {
            date: SolarDate::from_day_number(jdn),
            index,
            month: month.facts.ganzhi,
            facts: PeriodFacts::new(GanZhi::of_day_number(jdn), day_master, day_master),
        })
        .collect()
}
