//! Useful-god (YongShen) selection for a resolved main pattern.

use serde::Serialize;

use super::config::PatternName;
use crate::branch::Branch;
use crate::strength::StrengthLevel;
use crate::wuxing::Element;

/// Category of the recommended balancing influence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsefulGod {
    /// 印星
    Resource,
    /// 官杀
    Officer,
    /// 财星
    Wealth,
    /// 食伤
    Output,
    /// 比劫
    Companion,
    /// 财官
    WealthOfficer,
    /// 伤官印
    OutputResource,
    /// 日元
    DayMaster,
    /// 财官食伤: drain a strong Day Master.
    Draining,
    /// 印比劫: support a weak Day Master.
    Supporting,
    /// 月令当令
    Seasonal,
}

impl UsefulGod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Resource => "印星",
            Self::Officer => "官杀",
            Self::Wealth => "财星",
            Self::Output => "食伤",
            Self::Companion => "比劫",
            Self::WealthOfficer => "财官",
            Self::OutputResource => "伤官印",
            Self::DayMaster => "日元",
            Self::Draining => "财官食伤",
            Self::Supporting => "印比劫",
            Self::Seasonal => "月令当令",
        }
    }

    /// Elements this category stands for, given the Day Master's element
    /// and the month branch.
    pub fn elements(self, day: Element, month_branch: Branch) -> Vec<Element> {
        match self {
            Self::Resource => vec![day.generated_by()],
            Self::Officer => vec![day.restrained_by()],
            Self::Wealth => vec![day.restrains()],
            Self::Output => vec![day.generates()],
            Self::Companion | Self::DayMaster => vec![day],
            Self::WealthOfficer => vec![day.restrains(), day.restrained_by()],
            Self::OutputResource => vec![day.generates(), day.generated_by()],
            Self::Draining => vec![day.restrains(), day.restrained_by(), day.generates()],
            Self::Supporting => vec![day.generated_by(), day],
            Self::Seasonal => vec![month_branch.element()],
        }
    }
}

impl std::fmt::Display for UsefulGod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Selected useful god with its rationale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YongShen {
    pub god: UsefulGod,
    pub rationale: &'static str,
}

/// Useful god for `pattern`; 杂气格 depends on the Day-Master strength.
pub const fn select_useful_god(pattern: PatternName, level: StrengthLevel) -> YongShen {
    use PatternName as P;
    let (god, rationale) = match pattern {
        P::DirectResource | P::IndirectResource | P::Resources => (
            UsefulGod::Resource,
            "八字中印星当令或有力，且日主偏弱，取印星为用神，印星生助日主，增强日主力量。",
        ),
        P::DirectOfficer | P::SevenKillings => (
            UsefulGod::Officer,
            "八字中官杀当令或有力，且日主旺盛，取官杀为用神，官杀克制日主，泄秀日主之气。",
        ),
        P::DirectWealth | P::IndirectWealth => (
            UsefulGod::Wealth,
            "八字中财星当令或有力，且日主旺盛，取财星为用神，财星为日主所生，泄秀日主之气。",
        ),
        P::EatingGod | P::HurtingOfficer => (
            UsefulGod::Output,
            "八字中食伤当令或有力，且日主旺盛，取食伤为用神，食伤为日主所生，泄秀日主之气。",
        ),
        P::Companion | P::RobWealth => (
            UsefulGod::Companion,
            "八字中比劫当令或有力，且日主偏弱，取比劫为用神，比劫与日主同气相助，增强日主力量。",
        ),
        P::WealthAndOfficer => (
            UsefulGod::WealthOfficer,
            "八字中财星和官星都旺盛有力，且日主适中，能够承受财官之力，取财官为用神，财官相生相助，形成良好格局。",
        ),
        P::HurtingOfficerWithSeal => (
            UsefulGod::OutputResource,
            "八字中同时有伤官和印星，且两者力量均衡，相互制约，取伤官印为用神，伤官代表才华创新，印星代表学问文凭，两者相互制约，形成良好平衡。",
        ),
        P::FollowingStrength | P::Dominant => (
            UsefulGod::Companion,
            "日主极旺，且有多个比劫帮扶，顺从日主之旺，取比劫为用神，比劫与日主同气相助，增强日主力量。",
        ),
        P::FollowingWeakness => (
            UsefulGod::Officer,
            "日主极弱，且有多个官杀克制，顺从日主之弱，取官杀为用神，官杀克制日主，使日主更加衰弱。",
        ),
        P::BuildingLu | P::BuildingYuan => (
            UsefulGod::DayMaster,
            "日主与月令地支构成特殊关系，日主得令，根基稳固，取日元为用神，充分发挥日主的优势。",
        ),
        P::Mixed => {
            if level.is_strong() {
                (
                    UsefulGod::Draining,
                    "八字中无明显格局特征，日主偏旺，取财官食伤为用神，泄秀日主之气，使八字趋于平衡。",
                )
            } else if level.is_weak() {
                (
                    UsefulGod::Supporting,
                    "八字中无明显格局特征，日主偏弱，取印比劫为用神，生助日主之气，使八字趋于平衡。",
                )
            } else {
                (
                    UsefulGod::Seasonal,
                    "八字中无明显格局特征，日主平衡，取月令当令五行为用神，顺应自然之势。",
                )
            }
        }
    };
    YongShen { god, rationale }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_pattern_follows_strength() {
        let pick = |l| select_useful_god(PatternName::Mixed, l).god;
        assert_eq!(pick(StrengthLevel::Strong), UsefulGod::Draining);
        assert_eq!(pick(StrengthLevel::SomewhatWeak), UsefulGod::Supporting);
        assert_eq!(pick(StrengthLevel::Balanced), UsefulGod::Seasonal);
    }

    #[test]
    fn fixed_gods() {
        let god = |p| select_useful_god(p, StrengthLevel::Balanced).god;
        assert_eq!(god(PatternName::Resources), UsefulGod::Resource);
        assert_eq!(god(PatternName::FollowingWeakness), UsefulGod::Officer);
        assert_eq!(god(PatternName::BuildingYuan), UsefulGod::DayMaster);
        assert_eq!(god(PatternName::HurtingOfficerWithSeal).name(), "伤官印");
    }

    #[test]
    fn element_mapping() {
        assert_eq!(UsefulGod::Resource.elements(Element::Wood, Branch::Zi), vec![Element::Water]);
        assert_eq!(UsefulGod::Officer.elements(Element::Wood, Branch::Zi), vec![Element::Metal]);
        assert_eq!(UsefulGod::Seasonal.elements(Element::Wood, Branch::Wu), vec![Element::Fire]);
    }
}
