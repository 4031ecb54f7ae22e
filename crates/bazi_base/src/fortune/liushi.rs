//! Double-hour periods (LiuShi) of one civil date.
//!
//! When the day turns at 23:00 the date owns twelve hours, its 子 hour
//! opening at 23:00 of the previous date. When it turns at midnight the
//! date owns an early 子 (00:00-01:00) and a late 子 (23:00-24:00); the
//! late one takes its stem from the following day.

use serde::Serialize;

use super::types::{PeriodFacts, SolarDate};
use crate::branch::Branch;
use crate::chart::AnnotatedChart;
use crate::ganzhi::GanZhi;
use crate::stem::Stem;

const HOUR_LABELS: [&str; 12] = [
    "子时", "丑时", "寅时", "卯时", "辰时", "巳时", "午时", "未时", "申时", "酉时", "戌时", "亥时",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiuShi {
    /// Civil date on which the hour opens.
    pub date: SolarDate,
    pub start_hour: u32,
    /// Exclusive; 24 for the late 子 hour.
    pub end_hour: u32,
    pub branch: Branch,
    pub label: &'static str,
    /// The 子 hour opening at 23:00.
    pub late_zi: bool,
    pub facts: PeriodFacts,
}

impl LiuShi {
    /// `"HH:00-HH:00"`.
    pub fn range(&self) -> String {
        format!("{:02}:00-{:02}:00", self.start_hour, self.end_hour)
    }
}

/// Hour pillar by the five-rat rule (甲己 → 甲子, 乙庚 → 丙子, ...).
pub const fn hour_pillar(day_stem: Stem, branch: Branch) -> GanZhi {
    let stem = (day_stem.index() as i64 % 5) * 2 + branch.index() as i64;
    GanZhi::from_cycle_index(6 * stem - 5 * branch.index() as i64)
}

/// The double hours belonging to the sexagenary day of `date`.
pub fn generate_liu_shi(
    chart: &AnnotatedChart,
    date: SolarDate,
    day_turns_at_23: bool,
) -> Vec<LiuShi> {
    let day_master = chart.day_master();
    let day_stem = GanZhi::of_day_number(date.day_number()).stem();
    let entry = |date: SolarDate, start_hour: u32, end_hour: u32, branch: Branch, stem: Stem| {
        LiuShi {
            date,
            start_hour,
            end_hour,
            branch,
            label: HOUR_LABELS[branch.index() as usize],
            late_zi: start_hour == 23,
            facts: PeriodFacts::new(hour_pillar(stem, branch), day_master, day_master),
        }
    };

    let mut hours = Vec::with_capacity(13);
    if day_turns_at_23 {
        hours.push(entry(date.add_days(-1), 23, 1, Branch::Zi, day_stem));
    } else {
        hours.push(entry(date, 0, 1, Branch::Zi, day_stem));
    }
    for b in 1..12u32 {
        let start = 2 * b - 1;
        hours.push(entry(date, start, start + 2, Branch::wrapping(b as i64), day_stem));
    }
    if !day_turns_at_23 {
        let next_stem = GanZhi::of_day_number(date.day_number() + 1).stem();
        hours.push(entry(date, 23, 24, Branch::Zi, next_stem));
    }
    hours
}
