//! Pattern identities and the static priority table.

use crate::branch::Branch;
use crate::strength::StrengthLevel::{self, *};

/// A named chart pattern (GeJu).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternName {
    /// 财官双美格
    WealthAndOfficer,
    /// 伤官佩印格
    HurtingOfficerWithSeal,
    /// 日元建禄格
    BuildingLu,
    /// 日元建元格
    BuildingYuan,
    /// 从旺格
    FollowingStrength,
    /// 从弱格
    FollowingWeakness,
    /// 七杀格
    SevenKillings,
    /// 正官格
    DirectOfficer,
    /// 偏财格
    IndirectWealth,
    /// 正财格
    DirectWealth,
    /// 食神格
    EatingGod,
    /// 伤官格
    HurtingOfficer,
    /// 正印格
    DirectResource,
    /// 偏印格
    IndirectResource,
    /// 印绶格: both resource gods together.
    Resources,
    /// 比肩格
    Companion,
    /// 劫财格
    RobWealth,
    /// 专旺格
    Dominant,
    /// 杂气格: the fallback when nothing else qualifies.
    Mixed,
}

pub const ALL_PATTERNS: [PatternName; 19] = [
    PatternName::WealthAndOfficer,
    PatternName::HurtingOfficerWithSeal,
    PatternName::BuildingLu,
    PatternName::BuildingYuan,
    PatternName::FollowingStrength,
    PatternName::FollowingWeakness,
    PatternName::SevenKillings,
    PatternName::DirectOfficer,
    PatternName::IndirectWealth,
    PatternName::DirectWealth,
    PatternName::EatingGod,
    PatternName::HurtingOfficer,
    PatternName::DirectResource,
    PatternName::IndirectResource,
    PatternName::Resources,
    PatternName::Companion,
    PatternName::RobWealth,
    PatternName::Dominant,
    PatternName::Mixed,
];

impl PatternName {
    pub const fn name(self) -> &'static str {
        match self {
            Self::WealthAndOfficer => "财官双美格",
            Self::HurtingOfficerWithSeal => "伤官佩印格",
            Self::BuildingLu => "日元建禄格",
            Self::BuildingYuan => "日元建元格",
            Self::FollowingStrength => "从旺格",
            Self::FollowingWeakness => "从弱格",
            Self::SevenKillings => "七杀格",
            Self::DirectOfficer => "正官格",
            Self::IndirectWealth => "偏财格",
            Self::DirectWealth => "正财格",
            Self::EatingGod => "食神格",
            Self::HurtingOfficer => "伤官格",
            Self::DirectResource => "正印格",
            Self::IndirectResource => "偏印格",
            Self::Resources => "印绶格",
            Self::Companion => "比肩格",
            Self::RobWealth => "劫财格",
            Self::Dominant => "专旺格",
            Self::Mixed => "杂气格",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        ALL_PATTERNS.iter().copied().find(|p| p.name() == s)
    }
}

impl std::fmt::Display for PatternName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Base priority plus optional bonuses on Day-Master strength and month branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityRule {
    pub base: i32,
    pub strength_bonus: Option<(&'static [StrengthLevel], i32)>,
    pub month_bonus: Option<(&'static [Branch], i32)>,
}

const STRONG: &[StrengthLevel] = &[Strong, ExtremelyStrong, SomewhatStrong];
const WEAK: &[StrengthLevel] = &[Weak, ExtremelyWeak, SomewhatWeak];

const fn rule(base: i32, strength: &'static [StrengthLevel], bonus: i32) -> PriorityRule {
    PriorityRule {
        base,
        strength_bonus: Some((strength, bonus)),
        month_bonus: None,
    }
}

const fn month_rule(base: i32, branches: &'static [Branch], bonus: i32) -> PriorityRule {
    PriorityRule {
        base,
        strength_bonus: None,
        month_bonus: Some((branches, bonus)),
    }
}

/// Priority rule of a pattern.
pub const fn priority_rule(pattern: PatternName) -> PriorityRule {
    use PatternName as P;
    match pattern {
        P::WealthAndOfficer => rule(10, &[Balanced, SomewhatStrong], 2),
        P::HurtingOfficerWithSeal => rule(9, &[Balanced], 2),
        P::BuildingLu => month_rule(8, &[Branch::Yin, Branch::Si, Branch::Shen, Branch::Hai], 2),
        P::BuildingYuan => month_rule(8, &[Branch::Zi, Branch::Mao, Branch::Wu, Branch::You], 2),
        P::FollowingStrength => rule(7, &[ExtremelyStrong, Strong], 3),
        P::FollowingWeakness => rule(7, &[ExtremelyWeak, Weak], 3),
        P::SevenKillings | P::DirectOfficer => rule(6, STRONG, 2),
        P::IndirectWealth | P::DirectWealth | P::EatingGod | P::HurtingOfficer => {
            rule(5, STRONG, 2)
        }
        P::DirectResource | P::IndirectResource | P::Resources => rule(4, WEAK, 2),
        P::Companion | P::RobWealth => rule(3, WEAK, 2),
        P::Dominant => rule(3, &[ExtremelyStrong], 3),
        P::Mixed => PriorityRule {
            base: 1,
            strength_bonus: None,
            month_bonus: None,
        },
    }
}

/// Effective priority of a pattern for a chart.
pub fn priority(pattern: PatternName, level: StrengthLevel, month_branch: Branch) -> i32 {
    let rule = priority_rule(pattern);
    let mut p = rule.base;
    if let Some((levels, bonus)) = rule.strength_bonus {
        if levels.contains(&level) {
            p += bonus;
        }
    }
    if let Some((branches, bonus)) = rule.month_bonus {
        if branches.contains(&month_branch) {
            p += bonus;
        }
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for p in ALL_PATTERNS {
            assert_eq!(PatternName::from_name(p.name()), Some(p));
        }
    }

    #[test]
    fn bonuses_apply() {
        assert_eq!(priority(PatternName::WealthAndOfficer, Balanced, Branch::Zi), 12);
        assert_eq!(priority(PatternName::WealthAndOfficer, Weak, Branch::Zi), 10);
        assert_eq!(priority(PatternName::BuildingLu, Weak, Branch::Yin), 10);
        assert_eq!(priority(PatternName::BuildingLu, Weak, Branch::Mao), 8);
        assert_eq!(priority(PatternName::FollowingWeakness, ExtremelyWeak, Branch::Zi), 10);
        assert_eq!(priority(PatternName::DirectResource, SomewhatWeak, Branch::Zi), 6);
        assert_eq!(priority(PatternName::Mixed, Balanced, Branch::Zi), 1);
    }
}
