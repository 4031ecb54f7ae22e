//! Two-phase chart: bare pillars, then the fully annotated chart.
//!
//! `RawPillars` is what the calendar layer (or a parsed string) yields.
//! `AnnotatedChart::annotate` derives every per-pillar fact and the
//! Day-Master strength once; downstream analysis takes the annotated form,
//! so nothing has to be checked for "not computed yet".

use crate::ganzhi::GanZhi;
use crate::pillar::{ALL_PILLAR_KINDS, Pillar, PillarKind};
use crate::shensha::{Star, StarCombination, StarScore, combination_analysis, score_chart};
use crate::stem::Stem;
use crate::strength::{StrengthAnalysis, day_master_strength};
use crate::wuxing::Element;
use serde::Serialize;

/// Subject's gender; decides the direction of the luck cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }

    /// Numeric code used by calendar tools: 1 male, 0 female.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Male),
            0 => Some(Self::Female),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The four stem+branch pairs of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RawPillars {
    pub year: GanZhi,
    pub month: GanZhi,
    pub day: GanZhi,
    pub hour: GanZhi,
}

impl RawPillars {
    pub const fn new(year: GanZhi, month: GanZhi, day: GanZhi, hour: GanZhi) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Year, month, day, hour.
    pub const fn as_array(&self) -> [GanZhi; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    pub const fn day_stem(&self) -> Stem {
        self.day.stem()
    }

    pub const fn get(&self, kind: PillarKind) -> GanZhi {
        match kind {
            PillarKind::Year => self.year,
            PillarKind::Month => self.month,
            PillarKind::Day => self.day,
            PillarKind::Hour => self.hour,
        }
    }
}

impl std::fmt::Display for RawPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Auxiliary pillars derived from the main four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtraPillars {
    /// 胎元: month stem +5, month branch +3.
    pub tai_yuan: GanZhi,
    /// 命宫 (simplified): hour stem +7, hour branch +1.
    pub ming_gong: GanZhi,
    /// Zodiac animal of the year branch.
    pub sheng_xiao: &'static str,
}

impl ExtraPillars {
    pub const fn of(raw: &RawPillars) -> Self {
        // 15 = 5 (mod 10) = 3 (mod 12); 37 = 7 (mod 10) = 1 (mod 12)
        Self {
            tai_yuan: raw.month.step(15),
            ming_gong: raw.hour.step(37),
            sheng_xiao: raw.year.branch().zodiac(),
        }
    }
}

/// A chart with all per-pillar facts computed. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedChart {
    raw: RawPillars,
    gender: Gender,
    pillars: [Pillar; 4],
    strength: StrengthAnalysis,
    extras: ExtraPillars,
}

impl AnnotatedChart {
    /// Derive every pillar fact and the Day-Master strength.
    pub fn annotate(raw: RawPillars, gender: Gender) -> Self {
        let day_master = raw.day_stem();
        let pillars = ALL_PILLAR_KINDS.map(|kind| Pillar::new(kind, raw.get(kind), day_master));
        Self {
            raw,
            gender,
            pillars,
            strength: day_master_strength(&raw),
            extras: ExtraPillars::of(&raw),
        }
    }

    pub const fn raw(&self) -> &RawPillars {
        &self.raw
    }

    pub const fn gender(&self) -> Gender {
        self.gender
    }

    pub const fn pillars(&self) -> &[Pillar; 4] {
        &self.pillars
    }

    pub const fn pillar(&self, kind: PillarKind) -> &Pillar {
        &self.pillars[kind.index()]
    }

    pub const fn strength(&self) -> &StrengthAnalysis {
        &self.strength
    }

    pub const fn extras(&self) -> &ExtraPillars {
        &self.extras
    }

    pub const fn day_master(&self) -> Stem {
        self.raw.day_stem()
    }

    pub const fn day_element(&self) -> Element {
        self.raw.day_stem().element()
    }

    /// Every star on the chart with the pillar it sits on.
    pub fn stars(&self) -> Vec<(PillarKind, Star)> {
        self.pillars
            .iter()
            .flat_map(|p| p.stars.iter().map(move |&s| (p.kind, s)))
            .collect()
    }

    /// Star names prefixed with their pillar ("年柱:天乙贵人", ...).
    pub fn prefixed_star_names(&self) -> Vec<String> {
        self.pillars
            .iter()
            .flat_map(Pillar::prefixed_star_names)
            .collect()
    }

    /// Aggregate score over every star on the chart.
    pub fn star_score(&self) -> StarScore {
        score_chart(self.stars().iter().map(|(_, s)| s.name()))
    }

    /// Recognised star pairings present anywhere on the chart.
    pub fn star_combinations(&self) -> Vec<StarCombination> {
        let stars: Vec<Star> = self.stars().into_iter().map(|(_, s)| s).collect();
        combination_analysis(&stars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_four_pillars;

    #[test]
    fn extra_pillars() {
        let raw = parse_four_pillars("甲子 丙寅 戊辰 庚申").unwrap();
        let extras = ExtraPillars::of(&raw);
        // 丙+5 = 辛, 寅+3 = 巳
        assert_eq!(extras.tai_yuan.name(), "辛巳");
        // 庚+7 = 丁, 申+1 = 酉
        assert_eq!(extras.ming_gong.name(), "丁酉");
        assert_eq!(extras.sheng_xiao, "鼠");
    }

    #[test]
    fn annotate_keeps_raw_pillars() {
        let raw = parse_four_pillars("甲子 丙寅 戊辰 庚申").unwrap();
        let chart = AnnotatedChart::annotate(raw, Gender::Male);
        assert_eq!(chart.raw(), &raw);
        assert_eq!(chart.day_master(), Stem::Wu);
        assert_eq!(chart.pillar(PillarKind::Hour).ganzhi, raw.hour);
        assert_eq!(chart.day_element(), Element::Earth);
    }

    #[test]
    fn prefixed_names_cover_all_stars() {
        let raw = parse_four_pillars("甲子 丙寅 戊辰 庚申").unwrap();
        let chart = AnnotatedChart::annotate(raw, Gender::Female);
        assert_eq!(chart.prefixed_star_names().len(), chart.stars().len());
        let score = chart.star_score();
        assert_eq!(score.total, score.good_score - score.bad_score);
    }

    #[test]
    fn gender_codes() {
        assert_eq!(Gender::from_code(1), Some(Gender::Male));
        assert_eq!(Gender::from_code(0), Some(Gender::Female));
        assert_eq!(Gender::from_code(2), None);
    }
}
