//! One annotated pillar of a chart.

use crate::branch::Branch;
use crate::dishi::{DiShi, dishi};
use crate::ganzhi::GanZhi;
use crate::hidden_stem::hidden_stems;
use crate::nayin::nayin;
use crate::shensha::{Star, classify_pillar_stars};
use crate::shishen::{ShiShen, shishen};
use crate::stem::Stem;
use crate::wuxing::Element;
use crate::xunkong::xunkong;
use serde::Serialize;

/// Position of a pillar in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PillarKind {
    Year,
    Month,
    Day,
    Hour,
}

pub const ALL_PILLAR_KINDS: [PillarKind; 4] = [
    PillarKind::Year,
    PillarKind::Month,
    PillarKind::Day,
    PillarKind::Hour,
];

impl PillarKind {
    pub const fn index(self) -> usize {
        self as usize
    }

    /// "年柱", "月柱", "日柱", "时柱".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "年柱",
            Self::Month => "月柱",
            Self::Day => "日柱",
            Self::Hour => "时柱",
        }
    }

    /// Single-character label used in factor texts.
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Year => "年",
            Self::Month => "月",
            Self::Day => "日",
            Self::Hour => "时",
        }
    }
}

impl std::fmt::Display for PillarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A pillar with every fact derived from it and the Day Master.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pillar {
    pub kind: PillarKind,
    pub ganzhi: GanZhi,
    /// Hidden stems, main qi first.
    pub hidden_stems: &'static [Stem],
    /// Ten god of the visible stem; `None` on the day pillar (the Day Master itself).
    pub stem_shishen: Option<ShiShen>,
    /// Ten gods of the hidden stems, same order as `hidden_stems`.
    pub hidden_shishen: Vec<ShiShen>,
    pub nayin: &'static str,
    /// Stage of the Day Master at this pillar's branch.
    pub dishi: DiShi,
    pub xunkong: [Branch; 2],
    pub stars: Vec<Star>,
}

impl Pillar {
    /// Annotate `ganzhi` at position `kind` relative to `day_master`.
    pub fn new(kind: PillarKind, ganzhi: GanZhi, day_master: Stem) -> Self {
        let stem = ganzhi.stem();
        let branch = ganzhi.branch();
        let hidden = hidden_stems(branch);
        // 驿马 and 天喜 are keyed on the year pillar's own branch
        let year_branch = (kind == PillarKind::Year).then_some(branch);
        Self {
            kind,
            ganzhi,
            hidden_stems: hidden,
            stem_shishen: (kind != PillarKind::Day).then(|| shishen(day_master, stem)),
            hidden_shishen: hidden.iter().map(|&h| shishen(day_master, h)).collect(),
            nayin: nayin(ganzhi),
            dishi: dishi(day_master, branch),
            xunkong: xunkong(ganzhi),
            stars: classify_pillar_stars(day_master, stem, branch, year_branch),
        }
    }

    pub const fn stem(&self) -> Stem {
        self.ganzhi.stem()
    }

    pub const fn branch(&self) -> Branch {
        self.ganzhi.branch()
    }

    /// Elements of the stem and the branch.
    pub const fn elements(&self) -> (Element, Element) {
        (self.ganzhi.stem().element(), self.ganzhi.branch().element())
    }

    /// Star names prefixed with the pillar, e.g. "年柱:天乙贵人".
    pub fn prefixed_star_names(&self) -> Vec<String> {
        self.stars
            .iter()
            .map(|s| format!("{}:{}", self.kind.name(), s.name()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_pillar_has_no_stem_god() {
        let gz: GanZhi = "甲寅".parse().unwrap();
        let p = Pillar::new(PillarKind::Day, gz, Stem::Jia);
        assert_eq!(p.stem_shishen, None);
        assert_eq!(p.hidden_shishen[0], ShiShen::Companion);
        assert_eq!(p.dishi, DiShi::LinGuan);
        assert!(p.stars.contains(&Star::LuShen));
    }

    #[test]
    fn month_pillar_facts() {
        let gz: GanZhi = "丙寅".parse().unwrap();
        let p = Pillar::new(PillarKind::Month, gz, Stem::Jia);
        assert_eq!(p.stem_shishen, Some(ShiShen::EatingGod));
        assert_eq!(p.hidden_stems, &[Stem::Jia, Stem::Bing, Stem::Wu]);
        assert_eq!(p.nayin, "炉中火");
        assert_eq!(p.xunkong, [Branch::Xu, Branch::Hai]);
        assert_eq!(p.elements(), (Element::Fire, Element::Wood));
    }

    #[test]
    fn only_year_pillar_gets_year_keyed_stars() {
        // 寅 year: the horse is 申
        let year = Pillar::new(PillarKind::Year, "庚寅".parse().unwrap(), Stem::Jia);
        assert!(!year.stars.contains(&Star::YiMa));
        let hour = Pillar::new(PillarKind::Hour, "壬申".parse().unwrap(), Stem::Jia);
        assert!(!hour.stars.contains(&Star::YiMa));
        let prefixed = hour.prefixed_star_names();
        assert!(prefixed.iter().all(|n| n.starts_with("时柱:")));
    }
}
