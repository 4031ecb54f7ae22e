//! Contributing factors behind a main pattern.

use serde::Serialize;

use super::config::PatternName;
use super::detect::{Pattern, ShiShenProfile};
use crate::branch::Branch;
use crate::chart::AnnotatedChart;
use crate::combination::{BranchGroupKind, branch_groups};
use crate::pillar::PillarKind;
use crate::shishen::ShiShen::{self, *};
use crate::strength::StrengthLevel;
use crate::wuxing::{Element, ElementRelation, relation};

/// One weighted reason the pattern formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Factor {
    pub factor: String,
    pub description: String,
    pub contribution: u32,
}

impl Factor {
    fn new(factor: impl Into<String>, description: impl Into<String>, contribution: u32) -> Self {
        Self {
            factor: factor.into(),
            description: description.into(),
            contribution,
        }
    }
}

/// One-line reading of a strength level.
pub const fn strength_summary(level: StrengthLevel) -> &'static str {
    match level {
        StrengthLevel::ExtremelyStrong => "日主力量极其旺盛，需要泄秀之物来平衡。",
        StrengthLevel::Strong => "日主力量旺盛，需要泄秀之物来平衡。",
        StrengthLevel::SomewhatStrong => "日主力量较为旺盛，需要适当泄秀。",
        StrengthLevel::Balanced => "日主力量适中，八字较为平衡。",
        StrengthLevel::SomewhatWeak => "日主力量较为衰弱，需要适当扶助。",
        StrengthLevel::Weak => "日主力量衰弱，需要扶助之物来增强。",
        StrengthLevel::ExtremelyWeak => "日主力量极其衰弱，需要大量扶助之物来增强。",
    }
}

/// Season of a month branch.
pub const fn season(branch: Branch) -> &'static str {
    match branch {
        Branch::Yin | Branch::Mao | Branch::Chen => "春季",
        Branch::Si | Branch::Wu | Branch::Wei => "夏季",
        Branch::Shen | Branch::You | Branch::Xu => "秋季",
        Branch::Hai | Branch::Zi | Branch::Chou => "冬季",
    }
}

/// How the month branch bears on the Day Master's element.
pub fn month_summary(month_branch: Branch, day: Element) -> String {
    let m = month_branch.element();
    let (mn, dn) = (m.name(), day.name());
    let influence = match relation(m, day) {
        ElementRelation::Generates => format!("{mn}生{dn}，对日主有生助作用。"),
        ElementRelation::Restrains => format!("{mn}克{dn}，对日主有克制作用。"),
        ElementRelation::GeneratedBy => format!("{dn}生{mn}，日主泄气。"),
        ElementRelation::RestrainedBy => format!("{dn}克{mn}，日主耗气。"),
        ElementRelation::Same => "与日主同气，对日主有帮扶作用。".to_owned(),
    };
    format!("属于{}，五行属{mn}，{influence}", season(month_branch))
}

/// Ten-god families that explain each pattern.
const fn pattern_gods(pattern: PatternName) -> &'static [&'static [ShiShen]] {
    use PatternName as P;
    const RES: &[ShiShen] = &[DirectResource, IndirectResource];
    const OFF: &[ShiShen] = &[DirectOfficer, SevenKillings];
    const WEA: &[ShiShen] = &[DirectWealth, IndirectWealth];
    const OUT: &[ShiShen] = &[EatingGod, HurtingOfficer];
    const COM: &[ShiShen] = &[Companion, RobWealth];
    match pattern {
        P::DirectResource | P::IndirectResource | P::Resources => &[RES],
        P::DirectOfficer | P::SevenKillings | P::FollowingWeakness => &[OFF],
        P::DirectWealth | P::IndirectWealth => &[WEA],
        P::EatingGod | P::HurtingOfficer => &[OUT],
        P::Companion | P::RobWealth | P::FollowingStrength | P::Dominant => &[COM],
        P::WealthAndOfficer => &[WEA, OFF],
        P::HurtingOfficerWithSeal => &[&[HurtingOfficer], RES],
        P::BuildingLu | P::BuildingYuan | P::Mixed => &[],
    }
}

fn push_god_factors(
    out: &mut Vec<Factor>,
    chart: &AnnotatedChart,
    profile: &ShiShenProfile,
    targets: &[ShiShen],
) {
    for (kind, contribution, note) in [
        (PillarKind::Year, 10, "对格局形成有贡献。"),
        (PillarKind::Month, 20, "月令当令，对格局形成贡献较大。"),
        (PillarKind::Hour, 10, "对格局形成有贡献。"),
    ] {
        if let Some(god) = chart.pillar(kind).stem_shishen {
            if targets.contains(&god) {
                let k = kind.short_name();
                out.push(Factor::new(
                    format!("{k}干{god}"),
                    format!("{k}干为{god}，{note}"),
                    contribution,
                ));
            }
        }
    }
    for kind in crate::pillar::ALL_PILLAR_KINDS {
        let hits = profile.hidden_matches(kind, targets);
        if hits.is_empty() {
            continue;
        }
        let names: Vec<&str> = hits.iter().map(|g| g.name()).collect();
        let label = format!("{}支", kind.short_name());
        let contribution = if kind == PillarKind::Month { 15 } else { 8 };
        out.push(Factor::new(
            format!("{label}藏干"),
            format!("{label}藏干中有{}，对格局形成有辅助作用。", names.join("、")),
            contribution,
        ));
    }
}

fn group_factor(chart: &AnnotatedChart, kind: BranchGroupKind) -> Option<Factor> {
    let branches = chart.raw().as_array().map(|gz| gz.branch());
    let group = branch_groups(&branches, 2)
        .into_iter()
        .find(|g| g.kind == kind)?;
    let present: Vec<&str> = group.present.iter().map(|b| b.name()).collect();
    let completeness = if group.is_complete() { "完整" } else { "部分" };
    Some(Factor::new(
        kind.name(),
        format!(
            "八字中有{}，形成{completeness}{}，增强{}的力量。",
            present.join("、"),
            group.label(),
            group.element.name()
        ),
        15,
    ))
}

/// Factors behind `main`, strongest structural reasons first.
pub fn explain_factors(main: &Pattern, chart: &AnnotatedChart) -> Vec<Factor> {
    let level = chart.strength().level;
    let month_branch = chart.raw().month.branch();
    let mut out = vec![
        Factor::new(
            "日主旺衰",
            format!("日主{level}，{}", strength_summary(level)),
            25,
        ),
        Factor::new(
            "月令",
            format!(
                "月支为{month_branch}，{}",
                month_summary(month_branch, chart.day_element())
            ),
            20,
        ),
    ];

    let profile = ShiShenProfile::of(chart);
    for targets in pattern_gods(main.name) {
        push_god_factors(&mut out, chart, &profile, targets);
    }

    let day = chart.day_master();
    match main.name {
        PatternName::BuildingLu => out.push(Factor::new(
            "建禄",
            format!("日主{day}在月支{month_branch}建禄，日主根基稳固，得令有力。"),
            30,
        )),
        PatternName::BuildingYuan => out.push(Factor::new(
            "建元",
            format!("日主{day}在月支{month_branch}建元，日主根基稳固，得令有力。"),
            30,
        )),
        _ => {}
    }

    out.push(Factor::new(
        "纳音五行",
        format!(
            "日柱纳音为{}，对格局形成有一定影响。",
            chart.pillar(PillarKind::Day).nayin
        ),
        10,
    ));
    out.extend(group_factor(chart, BranchGroupKind::SanHe));
    out.extend(group_factor(chart, BranchGroupKind::SanHui));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Gender;
    use crate::parse::parse_four_pillars;

    #[test]
    fn month_texts() {
        assert_eq!(
            month_summary(Branch::Zi, Element::Wood),
            "属于冬季，五行属水，水生木，对日主有生助作用。"
        );
        assert_eq!(
            month_summary(Branch::Shen, Element::Wood),
            "属于秋季，五行属金，金克木，对日主有克制作用。"
        );
        assert_eq!(
            month_summary(Branch::Wu, Element::Wood),
            "属于夏季，五行属火，木生火，日主泄气。"
        );
    }

    #[test]
    fn building_lu_factors() {
        let raw = parse_four_pillars("甲子 丙寅 甲午 甲子").unwrap();
        let chart = AnnotatedChart::annotate(raw, Gender::Male);
        let main = Pattern {
            name: PatternName::BuildingLu,
            strength: 80.0,
            priority: 10,
            detail: "",
        };
        let f = explain_factors(&main, &chart);
        assert_eq!(f[0].factor, "日主旺衰");
        assert_eq!(f[0].contribution, 25);
        assert_eq!(f[1].factor, "月令");
        let lu = f.iter().find(|x| x.factor == "建禄").unwrap();
        assert_eq!(lu.description, "日主甲在月支寅建禄，日主根基稳固，得令有力。");
        assert!(f.iter().any(|x| x.factor == "纳音五行"));
        // 寅 and 午 form a partial fire frame
        let sanhe = f.iter().find(|x| x.factor == "三合局").unwrap();
        assert_eq!(sanhe.description, "八字中有寅、午，形成部分寅午戌三合火局，增强火的力量。");
    }

    #[test]
    fn officer_factors_list_stems_and_hidden() {
        let raw = parse_four_pillars("甲子 辛酉 甲寅 庚午").unwrap();
        let chart = AnnotatedChart::annotate(raw, Gender::Male);
        let main = Pattern {
            name: PatternName::DirectOfficer,
            strength: 70.0,
            priority: 6,
            detail: "",
        };
        let f = explain_factors(&main, &chart);
        let month = f.iter().find(|x| x.factor == "月干正官").unwrap();
        assert_eq!(month.contribution, 20);
        assert!(f.iter().any(|x| x.factor == "时干七杀" && x.contribution == 10));
        let hidden = f.iter().find(|x| x.factor == "月支藏干").unwrap();
        assert_eq!(hidden.contribution, 15);
    }
}
