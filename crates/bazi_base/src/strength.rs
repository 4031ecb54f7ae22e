//! Day-Master strength: elemental scores of the four pillars and the
//! seven-level classification derived from them.

use crate::branch::Branch;
use crate::chart::RawPillars;
use crate::combination::{BranchGroupKind, branch_groups, stem_combination};
use crate::hidden_stem::{HIDDEN_STEM_WEIGHTS, hidden_stems};
use crate::wuxing::{ALL_ELEMENTS, Element};
use serde::Serialize;

// ── Weights ──

const STEM_WEIGHT: f64 = 1.0;
const BRANCH_WEIGHT: f64 = 0.8;
const HIDDEN_SCALE: f64 = 0.5;
const SEASON_PRIMARY: f64 = 1.0;
const SEASON_SECONDARY: f64 = 0.5;
const STEM_COMBINATION_BONUS: f64 = 0.6;
const SANHE_BONUS: f64 = 1.2;
const SANHUI_BONUS: f64 = 1.0;

/// Seven-level Day-Master strength, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrengthLevel {
    ExtremelyWeak,
    Weak,
    SomewhatWeak,
    Balanced,
    SomewhatStrong,
    Strong,
    ExtremelyStrong,
}

pub const ALL_STRENGTH_LEVELS: [StrengthLevel; 7] = [
    StrengthLevel::ExtremelyWeak,
    StrengthLevel::Weak,
    StrengthLevel::SomewhatWeak,
    StrengthLevel::Balanced,
    StrengthLevel::SomewhatStrong,
    StrengthLevel::Strong,
    StrengthLevel::ExtremelyStrong,
];

impl StrengthLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ExtremelyWeak => "极弱",
            Self::Weak => "弱",
            Self::SomewhatWeak => "偏弱",
            Self::Balanced => "平衡",
            Self::SomewhatStrong => "偏旺",
            Self::Strong => "旺",
            Self::ExtremelyStrong => "极旺",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        ALL_STRENGTH_LEVELS.iter().copied().find(|l| l.name() == s)
    }

    /// Classify the ratio of the Day Master's element score to all others.
    pub fn from_ratio(ratio: f64) -> Self {
        match ratio {
            r if r >= 1.0 => Self::ExtremelyStrong,
            r if r >= 0.75 => Self::Strong,
            r if r >= 0.6 => Self::SomewhatStrong,
            r if r >= 0.45 => Self::Balanced,
            r if r >= 0.3 => Self::SomewhatWeak,
            r if r >= 0.2 => Self::Weak,
            _ => Self::ExtremelyWeak,
        }
    }

    /// 偏旺, 旺 or 极旺.
    pub const fn is_strong(self) -> bool {
        matches!(
            self,
            Self::SomewhatStrong | Self::Strong | Self::ExtremelyStrong
        )
    }

    /// 偏弱, 弱 or 极弱.
    pub const fn is_weak(self) -> bool {
        matches!(self, Self::SomewhatWeak | Self::Weak | Self::ExtremelyWeak)
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::ExtremelyStrong => "日主极旺，宜顺其旺势或重用克泄",
            Self::Strong => "日主旺相，宜用官杀、财星、食伤克泄耗",
            Self::SomewhatStrong => "日主偏旺，宜适度克泄，不宜再扶",
            Self::Balanced => "日主中和，五行较为平衡，随岁运调候",
            Self::SomewhatWeak => "日主偏弱，宜适度生扶",
            Self::Weak => "日主衰弱，宜用印星、比劫生扶",
            Self::ExtremelyWeak => "日主极弱，或可从势，忌强扶",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Score per element, indexed by `Element::index`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ElementScores(pub [f64; 5]);

impl ElementScores {
    pub fn get(&self, e: Element) -> f64 {
        self.0[e.index() as usize]
    }

    fn add(&mut self, e: Element, v: f64) {
        self.0[e.index() as usize] += v;
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// `(element, score)` pairs, strongest first.
    pub fn ranked(&self) -> Vec<(Element, f64)> {
        let mut v: Vec<(Element, f64)> = ALL_ELEMENTS.iter().map(|&e| (e, self.get(e))).collect();
        v.sort_by(|a, b| b.1.total_cmp(&a.1));
        v
    }
}

/// Result of the Day-Master strength evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrengthAnalysis {
    pub level: StrengthLevel,
    /// Day element score over the sum of the other four.
    pub ratio: f64,
    pub scores: ElementScores,
}

/// Seasonal (month branch) bonus: the ruling element and the one it feeds.
fn season_bonus(month: Branch) -> (Element, Element) {
    match month {
        Branch::Yin | Branch::Mao | Branch::Chen => (Element::Wood, Element::Fire),
        Branch::Si | Branch::Wu | Branch::Wei => (Element::Fire, Element::Earth),
        Branch::Shen | Branch::You | Branch::Xu => (Element::Metal, Element::Water),
        Branch::Hai | Branch::Zi | Branch::Chou => (Element::Water, Element::Wood),
    }
}

/// Elemental scores of the four pillars.
pub fn element_scores(raw: &RawPillars) -> ElementScores {
    let mut scores = ElementScores::default();
    let pillars = raw.as_array();

    for gz in pillars {
        scores.add(gz.stem().element(), STEM_WEIGHT);
        scores.add(gz.branch().element(), BRANCH_WEIGHT);
        for (stem, w) in hidden_stems(gz.branch()).iter().zip(HIDDEN_STEM_WEIGHTS) {
            scores.add(stem.element(), w * HIDDEN_SCALE);
        }
    }

    let (primary, secondary) = season_bonus(raw.month.branch());
    scores.add(primary, SEASON_PRIMARY);
    scores.add(secondary, SEASON_SECONDARY);

    for i in 0..pillars.len() {
        for j in (i + 1)..pillars.len() {
            if let Some(e) = stem_combination(pillars[i].stem(), pillars[j].stem()) {
                scores.add(e, STEM_COMBINATION_BONUS);
            }
        }
    }

    let branches = pillars.map(|gz| gz.branch());
    for group in branch_groups(&branches, 3) {
        let bonus = match group.kind {
            BranchGroupKind::SanHe => SANHE_BONUS,
            BranchGroupKind::SanHui => SANHUI_BONUS,
        };
        scores.add(group.element, bonus);
    }
    scores
}

/// Evaluate Day-Master strength.
pub fn day_master_strength(raw: &RawPillars) -> StrengthAnalysis {
    let scores = element_scores(raw);
    let own = scores.get(raw.day.stem().element());
    let others = scores.total() - own;
    let ratio = if others > 0.0 { own / others } else { f64::INFINITY };
    StrengthAnalysis {
        level: StrengthLevel::from_ratio(ratio),
        ratio,
        scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_four_pillars;

    #[test]
    fn thresholds() {
        assert_eq!(StrengthLevel::from_ratio(1.2), StrengthLevel::ExtremelyStrong);
        assert_eq!(StrengthLevel::from_ratio(0.75), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_ratio(0.6), StrengthLevel::SomewhatStrong);
        assert_eq!(StrengthLevel::from_ratio(0.5), StrengthLevel::Balanced);
        assert_eq!(StrengthLevel::from_ratio(0.3), StrengthLevel::SomewhatWeak);
        assert_eq!(StrengthLevel::from_ratio(0.2), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_ratio(0.1), StrengthLevel::ExtremelyWeak);
    }

    #[test]
    fn wood_dominant_chart_is_strong() {
        // spring wood with wood everywhere
        let raw = parse_four_pillars("甲寅 丙寅 甲寅 乙亥").unwrap();
        let a = day_master_strength(&raw);
        assert!(a.level >= StrengthLevel::Strong, "{:?} {}", a.level, a.ratio);
        assert_eq!(a.scores.ranked()[0].0, Element::Wood);
    }

    #[test]
    fn metal_heavy_chart_weakens_wood() {
        let raw = parse_four_pillars("庚申 乙酉 甲申 庚午").unwrap();
        let a = day_master_strength(&raw);
        assert!(a.level.is_weak(), "{:?} {}", a.level, a.ratio);
    }

    #[test]
    fn season_bonus_applies_to_month_branch() {
        let raw = parse_four_pillars("甲子 丙寅 戊辰 庚申").unwrap();
        let s = element_scores(&raw);
        // wood: 甲 1 + 寅 0.8 + hidden 甲 0.5 + 辰 hidden 乙 0.3 + spring 1.0
        assert!((s.get(Element::Wood) - 3.6).abs() < 1e-9, "{}", s.get(Element::Wood));
    }

    #[test]
    fn complete_sanhe_adds_bonus() {
        let with = parse_four_pillars("甲寅 庚午 丙戌 戊子").unwrap();
        let s = element_scores(&with);
        // 丙 1, 午 0.8, hidden 丙 0.3 丁 0.5 丁 0.15, summer month 1.0
        let fire_without_bonus = 1.0 + 0.8 + 0.3 + 0.5 + 0.15 + 1.0;
        assert!((s.get(Element::Fire) - (fire_without_bonus + SANHE_BONUS)).abs() < 1e-9);
    }
}
