//! Decade periods (DaYun).

use serde::Serialize;

use super::types::{Direction, PeriodFacts};
use crate::chart::AnnotatedChart;

/// One ten-year luck period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaYun {
    /// 1-based position in the sequence.
    pub index: u32,
    pub start_year: i32,
    /// Inclusive.
    pub end_year: i32,
    /// Nominal age (birth year counts as 1).
    pub start_age: i32,
    pub end_age: i32,
    pub facts: PeriodFacts,
}

impl DaYun {
    pub const fn contains_year(&self, year: i32) -> bool {
        self.start_year <= year && year <= self.end_year
    }
}

/// `count` decades from the commencement year, stepping the month pillar
/// one place per decade in the chart's direction.
pub fn generate_da_yun(
    chart: &AnnotatedChart,
    birth_year: i32,
    commencement_year: i32,
    count: usize,
) -> Vec<DaYun> {
    let raw = chart.raw();
    let sign = Direction::of(chart.gender(), raw.year.stem()).sign();
    let day_master = chart.day_master();
    (1..=count as i32)
        .map(|i| {
            let start_year = commencement_year + (i - 1) * 10;
            let start_age = start_year - birth_year + 1;
            let gz = raw.month.step(sign * i as i64);
            DaYun {
                index: i as u32,
                start_year,
                end_year: start_year + 9,
                start_age,
                end_age: start_age + 9,
                facts: PeriodFacts::new(gz, day_master, gz.stem()),
            }
        })
        .collect()
}

/// `(start_year, pillar)` pairs, the input shape of a pattern trend.
pub fn decade_anchors(periods: &[DaYun]) -> Vec<(i32, crate::ganzhi::GanZhi)> {
    periods
        .iter()
        .map(|d| (d.start_year, d.facts.ganzhi))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Gender;
    use crate::dishi::DiShi;
    use crate::parse::parse_four_pillars;

    #[test]
    fn forward_for_yang_male() {
        let raw = parse_four_pillars("甲子 丙寅 戊辰 庚申").unwrap();
        let chart = AnnotatedChart::annotate(raw, Gender::Male);
        let dy = generate_da_yun(&chart, 1984, 1990, 3);
        let names: Vec<String> = dy.iter().map(|d| d.facts.ganzhi.name()).collect();
        assert_eq!(names, ["丁卯", "戊辰", "己巳"]);
        assert_eq!((dy[0].start_year, dy[0].end_year), (1990, 1999));
        assert_eq!((dy[0].start_age, dy[0].end_age), (7, 16));
        assert_eq!(dy[2].start_year, 2010);
        assert!(dy[1].contains_year(2009));
    }

    #[test]
    fn backward_for_yang_female() {
        let raw = parse_four_pillars("甲子 丙寅 戊辰 庚申").unwrap();
        let chart = AnnotatedChart::annotate(raw, Gender::Female);
        let dy = generate_da_yun(&chart, 1984, 1990, 2);
        assert_eq!(dy[0].facts.ganzhi.name(), "乙丑");
        assert_eq!(dy[1].facts.ganzhi.name(), "甲子");
    }

    #[test]
    fn stage_is_read_from_decade_stem() {
        let raw = parse_four_pillars("甲子 丙寅 戊辰 庚申").unwrap();
        let chart = AnnotatedChart::annotate(raw, Gender::Male);
        let dy = generate_da_yun(&chart, 1984, 1990, 1);
        // 丁 at 卯 is 病; the Day Master 戊 there would be 沐浴
        assert_eq!(dy[0].facts.dishi, DiShi::Bing);
    }
}
