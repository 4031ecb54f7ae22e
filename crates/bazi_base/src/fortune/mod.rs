//! Fortune periods: decades, childhood years, years, months, days and
//! double hours.
//!
//! Every period steps a natal pillar (or the year itself) through the
//! sexagenary cycle and re-runs the star classifier on the result. The
//! only calendar-dependent input is the [`Commencement`], which the caller
//! resolves from the birth moment's distance to the adjacent jie term.

pub mod dayun;
pub mod liunian;
pub mod liuri;
pub mod liushi;
pub mod liuyue;
pub mod qiyun;
pub mod types;
pub mod xiaoyun;

pub use dayun::{DaYun, decade_anchors, generate_da_yun};
pub use liunian::{LiuNian, generate_liu_nian, liu_nian_in};
pub use liuri::{LiuRi, generate_liu_ri};
pub use liushi::{LiuShi, generate_liu_shi, hour_pillar};
pub use liuyue::{LiuYue, MonthSpan, first_month_stem, generate_liu_yue, month_pillars};
pub use qiyun::{Commencement, YunSchool};
pub use types::{Direction, PeriodFacts, SolarDate};
pub use xiaoyun::{XiaoYun, generate_xiao_yun};

use bazi_time::CivilTime;
use serde::Serialize;

use crate::chart::AnnotatedChart;

/// How many periods of each kind to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FortuneOptions {
    pub da_yun_count: usize,
    pub xiao_yun_count: usize,
    /// Annual periods, counted from the commencement year.
    pub liu_nian_span: usize,
    /// Year whose months are listed; the commencement year when `None`.
    pub liu_yue_year: Option<i32>,
}

impl Default for FortuneOptions {
    fn default() -> Self {
        Self {
            da_yun_count: 10,
            xiao_yun_count: 10,
            liu_nian_span: 10,
            liu_yue_year: None,
        }
    }
}

/// All period sequences of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fortune {
    pub direction: Direction,
    pub commencement: Commencement,
    pub commencement_date: SolarDate,
    pub da_yun: Vec<DaYun>,
    pub xiao_yun: Vec<XiaoYun>,
    pub liu_nian: Vec<LiuNian>,
    pub liu_yue: Vec<LiuYue>,
}

/// Expand a chart across time from a resolved commencement.
pub fn build_fortune(
    chart: &AnnotatedChart,
    birth: &CivilTime,
    commencement: Commencement,
    options: &FortuneOptions,
) -> Fortune {
    let start = commencement.start_date(birth);
    let first_year = start.year;
    let da_yun = generate_da_yun(chart, birth.year, first_year, options.da_yun_count);
    let xiao_yun = generate_xiao_yun(chart, birth.year, options.xiao_yun_count);
    let last_year = first_year + options.liu_nian_span as i32 - 1;
    let liu_nian = generate_liu_nian(chart, birth.year, first_year..=last_year);
    let liu_yue = generate_liu_yue(chart, options.liu_yue_year.unwrap_or(first_year));
    Fortune {
        direction: Direction::of(chart.gender(), chart.raw().year.stem()),
        commencement,
        commencement_date: SolarDate::new(start.year, start.month, start.day),
        da_yun,
        xiao_yun,
        liu_nian,
        liu_yue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Gender;
    use crate::parse::parse_four_pillars;

    #[test]
    fn estimated_commencement_still_yields_all_periods() {
        let raw = parse_four_pillars("甲子 丙寅 戊辰 庚申").unwrap();
        let chart = AnnotatedChart::annotate(raw, Gender::Male);
        let birth = CivilTime::new(1984, 3, 1, 8, 0, 0.0);
        let c = Commencement::estimated(5, YunSchool::DaysAndShichen);
        let f = build_fortune(&chart, &birth, c, &FortuneOptions::default());
        assert_eq!(f.commencement_date, SolarDate::new(1989, 3, 1));
        assert_eq!(f.da_yun.len(), 10);
        assert_eq!(f.da_yun[0].start_year, 1989);
        assert_eq!(f.xiao_yun.len(), 10);
        assert_eq!(f.liu_nian.first().map(|y| y.year), Some(1989));
        assert_eq!(f.liu_nian.last().map(|y| y.year), Some(1998));
        assert_eq!(f.liu_yue.len(), 12);
        assert_eq!(f.direction, Direction::Forward);
    }
}
