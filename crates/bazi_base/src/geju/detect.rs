//! Candidate pattern detection over the Ten-God layout of a chart.

use crate::branch::Branch;
use crate::chart::AnnotatedChart;
use crate::pillar::PillarKind;
use crate::shensha::rules::lu_branch;
use crate::shishen::ShiShen::{self, *};
use crate::stem::Stem;
use crate::strength::StrengthLevel;
use serde::Serialize;

use super::config::{PatternName, priority};

const WEALTH: &[ShiShen] = &[DirectWealth, IndirectWealth];
const OFFICERS: &[ShiShen] = &[DirectOfficer, SevenKillings];
const RESOURCES: &[ShiShen] = &[DirectResource, IndirectResource];
const COMPANIONS: &[ShiShen] = &[Companion, RobWealth];

/// A detected (or fallback) pattern with its ranking keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pattern {
    pub name: PatternName,
    /// 0..=100.
    pub strength: f64,
    pub priority: i32,
    pub detail: &'static str,
}

impl Pattern {
    /// 杂气格, used when nothing else qualifies.
    pub fn fallback(level: StrengthLevel, month_branch: Branch) -> Self {
        Self {
            name: PatternName::Mixed,
            strength: 60.0,
            priority: priority(PatternName::Mixed, level, month_branch),
            detail: "八字中无明显格局特征，为杂气格。",
        }
    }
}

/// Ten gods of the visible and hidden stems, pillar by pillar.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiShenProfile {
    /// Visible-stem gods; the day slot is always `None`.
    pub stems: [Option<ShiShen>; 4],
    pub hidden: [Vec<ShiShen>; 4],
}

impl ShiShenProfile {
    pub fn of(chart: &AnnotatedChart) -> Self {
        let pillars = chart.pillars();
        Self {
            stems: [0, 1, 2, 3].map(|i| pillars[i].stem_shishen),
            hidden: [0, 1, 2, 3].map(|i| pillars[i].hidden_shishen.clone()),
        }
    }

    /// Gods used for presence tests: year, month and hour stems plus the
    /// hidden stems of those three branches. The day branch is left out.
    fn presence_pool(&self) -> impl Iterator<Item = ShiShen> + '_ {
        let outer = [PillarKind::Year, PillarKind::Month, PillarKind::Hour];
        outer
            .into_iter()
            .filter_map(|k| self.stems[k.index()])
            .chain(outer.into_iter().flat_map(|k| self.hidden[k.index()].iter().copied()))
    }

    pub fn has(&self, targets: &[ShiShen]) -> bool {
        self.presence_pool().any(|g| targets.contains(&g))
    }

    pub fn count(&self, targets: &[ShiShen]) -> usize {
        self.presence_pool().filter(|g| targets.contains(g)).count()
    }

    /// Weighted occurrence: month stem 2, year/hour stems 1, month hidden
    /// stems 1, other hidden stems (day branch included) 0.5.
    pub fn weighted(&self, targets: &[ShiShen]) -> f64 {
        let hit = |g: &ShiShen| targets.contains(g);
        let mut w = 0.0;
        for (kind, weight) in [
            (PillarKind::Year, 1.0),
            (PillarKind::Month, 2.0),
            (PillarKind::Hour, 1.0),
        ] {
            if self.stems[kind.index()].as_ref().is_some_and(hit) {
                w += weight;
            }
        }
        for (i, gods) in self.hidden.iter().enumerate() {
            let weight = if i == PillarKind::Month.index() { 1.0 } else { 0.5 };
            w += weight * gods.iter().filter(|&g| hit(g)).count() as f64;
        }
        w
    }

    /// Hidden gods of one pillar that fall in `targets`, in hidden-stem order.
    pub fn hidden_matches(&self, kind: PillarKind, targets: &[ShiShen]) -> Vec<ShiShen> {
        self.hidden[kind.index()]
            .iter()
            .copied()
            .filter(|g| targets.contains(g))
            .collect()
    }
}

/// 建禄: the Day Master's lu branch rules the month.
pub const fn builds_lu(day: Stem, month_branch: Branch) -> bool {
    lu_branch(day) as u8 == month_branch as u8
}

/// 建元: the month branch shares the Day Master's cycle position (甲子, 乙丑, ...).
pub const fn builds_yuan(day: Stem, month_branch: Branch) -> bool {
    day.index() == month_branch.index()
}

/// Strength of a single-god pattern: favoured when the Day Master leans
/// the right way, capped lower otherwise.
fn single_god_strength(weight: f64, favoured: bool) -> f64 {
    if favoured {
        (60.0 + weight * 5.0).min(80.0)
    } else {
        (40.0 + weight * 5.0).min(60.0)
    }
}

struct SingleGodRule {
    name: PatternName,
    gods: &'static [ShiShen],
    /// True when a strong Day Master is the favourable case.
    wants_strong: bool,
    detail: &'static str,
}

const SINGLE_GOD_RULES: [SingleGodRule; 11] = [
    SingleGodRule {
        name: PatternName::DirectResource,
        gods: &[DirectResource],
        wants_strong: false,
        detail: "八字中正印星当令或有力，且日主偏弱，取正印为用神，为正印格。",
    },
    SingleGodRule {
        name: PatternName::IndirectResource,
        gods: &[IndirectResource],
        wants_strong: false,
        detail: "八字中偏印星当令或有力，且日主偏弱，取偏印为用神，为偏印格。",
    },
    SingleGodRule {
        name: PatternName::Resources,
        gods: RESOURCES,
        wants_strong: false,
        detail: "八字中正印偏印并见且有力，日主得印星生扶，为印绶格。",
    },
    SingleGodRule {
        name: PatternName::DirectOfficer,
        gods: &[DirectOfficer],
        wants_strong: true,
        detail: "八字中正官星当令或有力，且日主旺盛，取正官为用神，为正官格。",
    },
    SingleGodRule {
        name: PatternName::SevenKillings,
        gods: &[SevenKillings],
        wants_strong: true,
        detail: "八字中七杀星当令或有力，且日主旺盛，取七杀为用神，为七杀格。",
    },
    SingleGodRule {
        name: PatternName::DirectWealth,
        gods: &[DirectWealth],
        wants_strong: true,
        detail: "八字中正财星当令或有力，且日主旺盛，取正财为用神，为正财格。",
    },
    SingleGodRule {
        name: PatternName::IndirectWealth,
        gods: &[IndirectWealth],
        wants_strong: true,
        detail: "八字中偏财星当令或有力，且日主旺盛，取偏财为用神，为偏财格。",
    },
    SingleGodRule {
        name: PatternName::EatingGod,
        gods: &[EatingGod],
        wants_strong: true,
        detail: "八字中食神当令或有力，且日主旺盛，取食神为用神，为食神格。",
    },
    SingleGodRule {
        name: PatternName::HurtingOfficer,
        gods: &[HurtingOfficer],
        wants_strong: true,
        detail: "八字中伤官当令或有力，且日主旺盛，取伤官为用神，为伤官格。",
    },
    SingleGodRule {
        name: PatternName::Companion,
        gods: &[Companion],
        wants_strong: false,
        detail: "八字中比肩当令或有力，且日主偏弱，取比肩为用神，为比肩格。",
    },
    SingleGodRule {
        name: PatternName::RobWealth,
        gods: &[RobWealth],
        wants_strong: false,
        detail: "八字中劫财当令或有力，且日主偏弱，取劫财为用神，为劫财格。",
    },
];

/// Every pattern the chart qualifies for, in detection order.
///
/// May be empty; [`super::resolve`] substitutes the fallback.
pub fn detect_candidates(chart: &AnnotatedChart) -> Vec<Pattern> {
    let profile = ShiShenProfile::of(chart);
    let level = chart.strength().level;
    let month_branch = chart.raw().month.branch();
    let day = chart.day_master();

    let mut found = Vec::new();
    let mut push = |name: PatternName, strength: f64, detail: &'static str| {
        found.push(Pattern {
            name,
            strength,
            priority: priority(name, level, month_branch),
            detail,
        });
    };

    if profile.has(WEALTH) && profile.has(OFFICERS) {
        let (cai, guan) = (profile.weighted(WEALTH), profile.weighted(OFFICERS));
        if cai >= 2.0 && guan >= 2.0 {
            push(
                PatternName::WealthAndOfficer,
                (60.0 + (cai + guan) * 5.0).min(85.0),
                "八字中财星和官星都旺盛有力，且日主适中，能够承受财官之力，为财官双美格。",
            );
        }
    }

    if profile.has(&[HurtingOfficer]) && profile.has(RESOURCES) {
        let (shang, yin) = (profile.weighted(&[HurtingOfficer]), profile.weighted(RESOURCES));
        if shang >= 2.0 && yin >= 2.0 {
            push(
                PatternName::HurtingOfficerWithSeal,
                (60.0 + (shang + yin) * 5.0).min(85.0),
                "八字中同时有伤官和印星，且两者力量均衡，相互制约，为伤官佩印格。",
            );
        }
    }

    if builds_lu(day, month_branch) {
        push(
            PatternName::BuildingLu,
            80.0,
            "日主天干与所处月令地支构成建禄关系，为日元建禄格。",
        );
    }
    if builds_yuan(day, month_branch) {
        push(
            PatternName::BuildingYuan,
            75.0,
            "日主天干与所处月令地支构成建元关系，为日元建元格。",
        );
    }

    let companions = profile.count(COMPANIONS);
    if matches!(level, StrengthLevel::ExtremelyStrong | StrengthLevel::Strong) && companions >= 3 {
        push(
            PatternName::FollowingStrength,
            (70.0 + companions as f64 * 5.0).min(90.0),
            "日主极旺，且有多个比劫帮扶，为从旺格。",
        );
    }

    let officers = profile.count(OFFICERS);
    if matches!(level, StrengthLevel::ExtremelyWeak | StrengthLevel::Weak) && officers >= 3 {
        push(
            PatternName::FollowingWeakness,
            (70.0 + officers as f64 * 5.0).min(90.0),
            "日主极弱，且有多个官杀克制，为从弱格。",
        );
    }

    if level == StrengthLevel::ExtremelyStrong && companions >= 4 {
        push(
            PatternName::Dominant,
            (70.0 + companions as f64 * 5.0).min(95.0),
            "日主极旺，比劫成势，一气专旺，为专旺格。",
        );
    }

    for rule in &SINGLE_GOD_RULES {
        if !profile.has(rule.gods) {
            continue;
        }
        let weight = profile.weighted(rule.gods);
        // 印绶 needs both resource gods and a heavier combined weight
        let qualifies = if rule.name == PatternName::Resources {
            profile.has(&[DirectResource]) && profile.has(&[IndirectResource]) && weight >= 3.0
        } else {
            weight >= 2.0
        };
        if qualifies {
            let favoured = if rule.wants_strong {
                level.is_strong()
            } else {
                level.is_weak()
            };
            push(rule.name, single_god_strength(weight, favoured), rule.detail);
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Gender;
    use crate::parse::parse_four_pillars;

    fn chart(s: &str) -> AnnotatedChart {
        AnnotatedChart::annotate(parse_four_pillars(s).unwrap(), Gender::Male)
    }

    #[test]
    fn lu_and_yuan_tables() {
        assert!(builds_lu(Stem::Jia, Branch::Yin));
        assert!(builds_lu(Stem::Wu, Branch::Si));
        assert!(builds_lu(Stem::Gui, Branch::Zi));
        assert!(!builds_lu(Stem::Jia, Branch::Mao));
        assert!(builds_yuan(Stem::Jia, Branch::Zi));
        assert!(builds_yuan(Stem::Gui, Branch::You));
        assert!(!builds_yuan(Stem::Yi, Branch::Zi));
    }

    #[test]
    fn weighted_counts_month_double() {
        // day 甲: month 辛 is 正官 (2), hour 庚 is 七杀 (1),
        // month 酉 hides 辛 (正官, 1)
        let c = chart("甲子 辛酉 甲寅 庚午");
        let p = ShiShenProfile::of(&c);
        assert_eq!(p.stems[2], None);
        assert_eq!(p.weighted(&[DirectOfficer]), 3.0);
        assert_eq!(p.weighted(OFFICERS), 4.0);
        assert!(p.has(&[SevenKillings]));
    }

    #[test]
    fn day_branch_only_counts_in_weight() {
        // day branch 申 hides 庚 壬 戊; 庚 is 七杀 for 甲
        let c = chart("丙子 丙子 甲申 丙寅");
        let p = ShiShenProfile::of(&c);
        assert!(!p.has(&[SevenKillings]));
        assert_eq!(p.count(&[SevenKillings]), 0);
        assert_eq!(p.weighted(&[SevenKillings]), 0.5);
    }

    #[test]
    fn building_lu_detected() {
        let c = chart("甲子 丙寅 甲午 甲子");
        let found = detect_candidates(&c);
        assert!(found.iter().any(|p| p.name == PatternName::BuildingLu && p.strength == 80.0));
    }

    #[test]
    fn favoured_strength_is_capped() {
        assert_eq!(single_god_strength(5.0, true), 80.0);
        assert_eq!(single_god_strength(2.0, true), 70.0);
        assert_eq!(single_god_strength(2.0, false), 50.0);
        assert_eq!(single_god_strength(6.0, false), 60.0);
    }
}
