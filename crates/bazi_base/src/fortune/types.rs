//! Types shared by the fortune-period generators.

use bazi_time::{date_from_day_number, day_number};
use serde::Serialize;

use crate::branch::Branch;
use crate::chart::Gender;
use crate::dishi::{DiShi, dishi};
use crate::ganzhi::GanZhi;
use crate::hidden_stem::hidden_stems;
use crate::nayin::nayin;
use crate::shensha::{Star, classify_pillar_stars};
use crate::shishen::{ShiShen, shishen};
use crate::stem::Stem;
use crate::xunkong::xunkong;

/// Direction the luck pillars walk through the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Forward for a yang-year male or a yin-year female.
    pub const fn of(gender: Gender, year_stem: Stem) -> Self {
        match (gender, year_stem.is_yang()) {
            (Gender::Male, true) | (Gender::Female, false) => Self::Forward,
            _ => Self::Backward,
        }
    }

    pub const fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "顺行",
            Self::Backward => "逆行",
        }
    }
}

/// Facts derived from a period's own pillar, relative to the Day Master.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodFacts {
    pub ganzhi: GanZhi,
    pub stem_shishen: ShiShen,
    pub hidden_shishen: Vec<ShiShen>,
    pub nayin: &'static str,
    /// Twelve-stage position of the stage stem at the period branch.
    pub dishi: DiShi,
    pub xunkong: [Branch; 2],
    pub stars: Vec<Star>,
}

impl PeriodFacts {
    /// Periods never carry the year-keyed stars.
    ///
    /// `stage_stem` selects whose 地势 is read at the period branch: the
    /// period's own stem for 大运 and 流年, the Day Master otherwise.
    pub fn new(ganzhi: GanZhi, day_master: Stem, stage_stem: Stem) -> Self {
        let (stem, branch) = (ganzhi.stem(), ganzhi.branch());
        Self {
            ganzhi,
            stem_shishen: shishen(day_master, stem),
            hidden_shishen: hidden_stems(branch)
                .iter()
                .map(|&h| shishen(day_master, h))
                .collect(),
            nayin: nayin(ganzhi),
            dishi: dishi(stage_stem, branch),
            xunkong: xunkong(ganzhi),
            stars: classify_pillar_stars(day_master, stem, branch, None),
        }
    }
}

/// A proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SolarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SolarDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Julian Day Number at noon of this date.
    pub fn day_number(self) -> i64 {
        day_number(self.year, self.month, self.day)
    }

    pub fn from_day_number(jdn: i64) -> Self {
        let (year, month, day) = date_from_day_number(jdn);
        Self { year, month, day }
    }

    pub fn add_days(self, days: i64) -> Self {
        Self::from_day_number(self.day_number() + days)
    }
}

impl std::fmt::Display for SolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_rule() {
        assert_eq!(Direction::of(Gender::Male, Stem::Jia), Direction::Forward);
        assert_eq!(Direction::of(Gender::Male, Stem::Yi), Direction::Backward);
        assert_eq!(Direction::of(Gender::Female, Stem::Yi), Direction::Forward);
        assert_eq!(Direction::of(Gender::Female, Stem::Jia), Direction::Backward);
    }

    #[test]
    fn period_facts_skip_year_stars() {
        let f = PeriodFacts::new("丙寅".parse().unwrap(), Stem::Jia, Stem::Jia);
        assert_eq!(f.stem_shishen, ShiShen::EatingGod);
        assert_eq!(f.dishi, DiShi::LinGuan);
        assert!(!f.stars.contains(&Star::LuShen));
        assert!(!f.stars.contains(&Star::YiMa));
    }

    #[test]
    fn date_steps_cross_month_and_year() {
        let d = SolarDate::new(2024, 2, 28);
        assert_eq!(d.add_days(1), SolarDate::new(2024, 2, 29));
        assert_eq!(d.add_days(2), SolarDate::new(2024, 3, 1));
        assert_eq!(SolarDate::new(2000, 1, 1).add_days(-1), SolarDate::new(1999, 12, 31));
        assert_eq!(SolarDate::new(2000, 1, 1).day_number(), 2_451_545);
    }

    #[test]
    fn stage_stem_selects_dishi() {
        let gz: GanZhi = "丙寅".parse().unwrap();
        let own = PeriodFacts::new(gz, Stem::Jia, gz.stem());
        let day = PeriodFacts::new(gz, Stem::Jia, Stem::Jia);
        assert_eq!(own.dishi, DiShi::ChangSheng);
        assert_eq!(day.dishi, DiShi::LinGuan);
        assert_eq!(own.stars, day.stars);
        assert_eq!(own.stem_shishen, day.stem_shishen);
    }
}
