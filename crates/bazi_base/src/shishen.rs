//! Ten Gods (ShiShen): a stem's role relative to the Day Master.

use crate::stem::Stem;
use crate::wuxing::{ElementRelation, relation};

/// The ten relational roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShiShen {
    /// 比肩: same element, same polarity.
    Companion,
    /// 劫财: same element, opposite polarity.
    RobWealth,
    /// 食神: produced by the Day Master, same polarity.
    EatingGod,
    /// 伤官: produced by the Day Master, opposite polarity.
    HurtingOfficer,
    /// 偏财: restrained by the Day Master, same polarity.
    IndirectWealth,
    /// 正财: restrained by the Day Master, opposite polarity.
    DirectWealth,
    /// 七杀: restrains the Day Master, same polarity.
    SevenKillings,
    /// 正官: restrains the Day Master, opposite polarity.
    DirectOfficer,
    /// 偏印: produces the Day Master, same polarity.
    IndirectResource,
    /// 正印: produces the Day Master, opposite polarity.
    DirectResource,
}

pub const ALL_SHISHEN: [ShiShen; 10] = [
    ShiShen::Companion,
    ShiShen::RobWealth,
    ShiShen::EatingGod,
    ShiShen::HurtingOfficer,
    ShiShen::IndirectWealth,
    ShiShen::DirectWealth,
    ShiShen::SevenKillings,
    ShiShen::DirectOfficer,
    ShiShen::IndirectResource,
    ShiShen::DirectResource,
];

/// The five families the ten gods pair into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiShenGroup {
    /// 比劫
    Companions,
    /// 食伤
    Output,
    /// 财
    Wealth,
    /// 官杀
    Officers,
    /// 印
    Resources,
}

impl ShiShenGroup {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Companions => "比劫",
            Self::Output => "食伤",
            Self::Wealth => "财",
            Self::Officers => "官杀",
            Self::Resources => "印",
        }
    }
}

/// Traditional favourability of a ten god.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiShenNature {
    Good,
    Bad,
    Neutral,
}

impl ShiShenNature {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Good => "吉",
            Self::Bad => "凶",
            Self::Neutral => "中性",
        }
    }
}

impl ShiShen {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Companion => "比肩",
            Self::RobWealth => "劫财",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "伤官",
            Self::IndirectWealth => "偏财",
            Self::DirectWealth => "正财",
            Self::SevenKillings => "七杀",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        ALL_SHISHEN.iter().copied().find(|g| g.name() == s)
    }

    pub const fn group(self) -> ShiShenGroup {
        match self {
            Self::Companion | Self::RobWealth => ShiShenGroup::Companions,
            Self::EatingGod | Self::HurtingOfficer => ShiShenGroup::Output,
            Self::IndirectWealth | Self::DirectWealth => ShiShenGroup::Wealth,
            Self::SevenKillings | Self::DirectOfficer => ShiShenGroup::Officers,
            Self::IndirectResource | Self::DirectResource => ShiShenGroup::Resources,
        }
    }

    pub const fn nature(self) -> ShiShenNature {
        match self {
            Self::DirectOfficer | Self::DirectResource | Self::DirectWealth | Self::EatingGod => {
                ShiShenNature::Good
            }
            Self::SevenKillings | Self::HurtingOfficer | Self::RobWealth => ShiShenNature::Bad,
            Self::Companion | Self::IndirectResource | Self::IndirectWealth => {
                ShiShenNature::Neutral
            }
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Companion => "同我者，主兄弟朋友、自立与竞争",
            Self::RobWealth => "同我异性，主争夺、破耗与冲动",
            Self::EatingGod => "我生同性，主才艺、口福与温和的表达",
            Self::HurtingOfficer => "我生异性，主聪明外露、叛逆与不拘",
            Self::IndirectWealth => "我克同性，主偏门之财、机遇与慷慨",
            Self::DirectWealth => "我克异性，主正当收入、勤俭与务实",
            Self::SevenKillings => "克我同性，主压力、魄力与权威",
            Self::DirectOfficer => "克我异性，主名誉、约束与责任",
            Self::IndirectResource => "生我同性，主偏学、孤僻与灵感",
            Self::DirectResource => "生我异性，主学业、庇护与仁慈",
        }
    }
}

impl std::fmt::Display for ShiShen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ten god of `other` as seen from the Day Master `day`.
pub fn shishen(day: Stem, other: Stem) -> ShiShen {
    let same_polarity = day.is_yang() == other.is_yang();
    let pick = |same: ShiShen, diff: ShiShen| if same_polarity { same } else { diff };
    match relation(day.element(), other.element()) {
        ElementRelation::Same => pick(ShiShen::Companion, ShiShen::RobWealth),
        ElementRelation::Generates => pick(ShiShen::EatingGod, ShiShen::HurtingOfficer),
        ElementRelation::Restrains => pick(ShiShen::IndirectWealth, ShiShen::DirectWealth),
        ElementRelation::RestrainedBy => pick(ShiShen::SevenKillings, ShiShen::DirectOfficer),
        ElementRelation::GeneratedBy => {
            pick(ShiShen::IndirectResource, ShiShen::DirectResource)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jia_day_master() {
        assert_eq!(shishen(Stem::Jia, Stem::Jia), ShiShen::Companion);
        assert_eq!(shishen(Stem::Jia, Stem::Yi), ShiShen::RobWealth);
        assert_eq!(shishen(Stem::Jia, Stem::Bing), ShiShen::EatingGod);
        assert_eq!(shishen(Stem::Jia, Stem::Ding), ShiShen::HurtingOfficer);
        assert_eq!(shishen(Stem::Jia, Stem::Wu), ShiShen::IndirectWealth);
        assert_eq!(shishen(Stem::Jia, Stem::Ji), ShiShen::DirectWealth);
        assert_eq!(shishen(Stem::Jia, Stem::Geng), ShiShen::SevenKillings);
        assert_eq!(shishen(Stem::Jia, Stem::Xin), ShiShen::DirectOfficer);
        assert_eq!(shishen(Stem::Jia, Stem::Ren), ShiShen::IndirectResource);
        assert_eq!(shishen(Stem::Jia, Stem::Gui), ShiShen::DirectResource);
    }

    #[test]
    fn yin_day_master() {
        assert_eq!(shishen(Stem::Ding, Stem::Ren), ShiShen::DirectOfficer);
        assert_eq!(shishen(Stem::Ding, Stem::Gui), ShiShen::SevenKillings);
        assert_eq!(shishen(Stem::Gui, Stem::Bing), ShiShen::DirectWealth);
    }

    #[test]
    fn natures() {
        assert_eq!(ShiShen::DirectOfficer.nature(), ShiShenNature::Good);
        assert_eq!(ShiShen::SevenKillings.nature(), ShiShenNature::Bad);
        assert_eq!(ShiShen::IndirectWealth.nature(), ShiShenNature::Neutral);
        assert_eq!(ShiShen::from_name("伤官"), Some(ShiShen::HurtingOfficer));
    }
}
