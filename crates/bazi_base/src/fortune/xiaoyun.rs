//! Childhood single-year periods (XiaoYun), before the first decade.

use serde::Serialize;

use super::types::{Direction, PeriodFacts};
use crate::chart::AnnotatedChart;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XiaoYun {
    pub year: i32,
    /// Nominal age, 1 in the birth year.
    pub age: i32,
    pub facts: PeriodFacts,
}

/// The first `count` years of life; year `i` steps the hour pillar by its age.
pub fn generate_xiao_yun(chart: &AnnotatedChart, birth_year: i32, count: usize) -> Vec<XiaoYun> {
    let raw = chart.raw();
    let sign = Direction::of(chart.gender(), raw.year.stem()).sign();
    let day_master = chart.day_master();
    (0..count as i32)
        .map(|i| {
            let age = i + 1;
            let gz = raw.hour.step(sign * age as i64);
            XiaoYun {
                year: birth_year + i,
                age,
                facts: PeriodFacts::new(gz, day_master, day_master),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Gender;
    use crate::parse::parse_four_pillars;

    #[test]
    fn steps_hour_pillar() {
        let raw = parse_four_pillars("甲子 丙寅 戊辰 庚申").unwrap();
        let male = AnnotatedChart::annotate(raw, Gender::Male);
        let xy = generate_xiao_yun(&male, 1984, 2);
        assert_eq!((xy[0].year, xy[0].age), (1984, 1));
        assert_eq!(xy[0].facts.ganzhi.name(), "辛酉");
        assert_eq!(xy[1].facts.ganzhi.name(), "壬戌");

        let female = AnnotatedChart::annotate(raw, Gender::Female);
        let xy = generate_xiao_yun(&female, 1984, 1);
        assert_eq!(xy[0].facts.ganzhi.name(), "己未");
    }
}
