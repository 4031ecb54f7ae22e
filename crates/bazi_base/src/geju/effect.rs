//! How a pattern reads on its own and under a fortune period.

use serde::Serialize;

use super::config::PatternName;
use crate::ganzhi::GanZhi;
use crate::strength::StrengthLevel;
use crate::wuxing::{Element, ElementRelation, relation};

/// Favourability of a pattern reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectLevel {
    Good,
    Bad,
    Neutral,
    Mixed,
}

impl EffectLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Good => "吉",
            Self::Bad => "凶",
            Self::Neutral => "平",
            Self::Mixed => "吉凶参半",
        }
    }
}

/// Which kind of period is being read; only changes the wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodScope {
    DaYun,
    LiuNian,
}

impl PeriodScope {
    pub const fn name(self) -> &'static str {
        match self {
            Self::DaYun => "大运",
            Self::LiuNian => "流年",
        }
    }
}

/// Intrinsic quality of each pattern before strength is considered.
pub const fn base_level(pattern: PatternName) -> EffectLevel {
    use PatternName as P;
    match pattern {
        P::DirectResource
        | P::DirectOfficer
        | P::DirectWealth
        | P::EatingGod
        | P::Resources
        | P::HurtingOfficerWithSeal
        | P::WealthAndOfficer
        | P::BuildingLu
        | P::BuildingYuan => EffectLevel::Good,
        P::SevenKillings
        | P::IndirectWealth
        | P::HurtingOfficer
        | P::RobWealth
        | P::Dominant
        | P::FollowingStrength => EffectLevel::Mixed,
        P::IndirectResource | P::Companion | P::FollowingWeakness | P::Mixed => {
            EffectLevel::Neutral
        }
    }
}

/// Reading of a pattern against the Day-Master strength.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternReading {
    pub analysis: String,
    pub suggestion: &'static str,
    pub level: EffectLevel,
}

const SUPPORT_DM: &str = "建议适当扶助日主之气，发展印比等事业。";
const DRAIN_DM: &str = "建议适当泄秀日主之气，发展财官等事业。";

/// Static reading of `pattern` for a chart of the given strength.
pub fn pattern_analysis(pattern: PatternName, level: StrengthLevel) -> PatternReading {
    use PatternName as P;
    let p = pattern.name();
    // (favoured?, good analysis, bad analysis, good suggestion, bad suggestion)
    let two_way = |favoured: bool, good: String, bad: String, s_good, s_bad| {
        if favoured {
            (good, s_good, EffectLevel::Good)
        } else {
            (bad, s_bad, EffectLevel::Neutral)
        }
    };
    let (analysis, suggestion, level) = match pattern {
        P::DirectResource | P::IndirectResource | P::Resources => two_way(
            level.is_weak(),
            format!("{p}配合日主偏弱，印星生助日主，格局良好。"),
            format!("{p}但日主并不弱，印星可能过多，导致日主更旺，不利于平衡。"),
            "建议发展教育、文化、行政等印星有利的事业。",
            DRAIN_DM,
        ),
        P::DirectOfficer | P::SevenKillings => two_way(
            level.is_strong(),
            format!("{p}配合日主偏旺，官杀泄秀日主，格局良好。"),
            format!("{p}但日主并不旺，官杀可能过多，导致日主更弱，不利于平衡。"),
            "建议发展行政、管理、军警等官杀有利的事业。",
            SUPPORT_DM,
        ),
        P::DirectWealth | P::IndirectWealth => two_way(
            level.is_strong(),
            format!("{p}配合日主偏旺，财星耗泄日主，格局良好。"),
            format!("{p}但日主并不旺，财星可能过多，导致日主更弱，不利于平衡。"),
            "建议发展商业、金融、投资等财星有利的事业。",
            SUPPORT_DM,
        ),
        P::EatingGod | P::HurtingOfficer => two_way(
            level.is_strong(),
            format!("{p}配合日主偏旺，食伤泄秀日主，格局良好。"),
            format!("{p}但日主并不旺，食伤可能过多，导致日主更弱，不利于平衡。"),
            "建议发展艺术、教育、餐饮、创作等食伤有利的事业。",
            SUPPORT_DM,
        ),
        P::Companion | P::RobWealth => two_way(
            level.is_weak(),
            format!("{p}配合日主偏弱，比劫帮扶日主，格局良好。"),
            format!("{p}但日主并不弱，比劫可能过多，导致日主更旺，不利于平衡。"),
            "建议发展团队合作、管理、销售等比劫有利的事业。",
            DRAIN_DM,
        ),
        P::Dominant | P::FollowingStrength => (
            format!("{p}日主极旺，且有多个比劫帮扶，格局特殊。需要注意大运流年是否有财官食伤来制约日主的过旺。"),
            "建议发展领导、管理、创业等需要强势和决断的工作，但需注意调和人际关系。",
            EffectLevel::Mixed,
        ),
        P::FollowingWeakness => (
            format!("{p}日主极弱，且有多个官杀克制，格局特殊。需要注意大运流年是否有印比来扶助日主的过弱。"),
            "建议发展辅助、服务、行政等需要服从和配合的工作，避免过于强势的环境。",
            EffectLevel::Mixed,
        ),
        P::HurtingOfficerWithSeal => (
            format!("{p}伤官和印星同时存在，且力量均衡，格局特殊。伤官代表才华创新，印星代表学问文凭，两者相互制约，形成良好平衡。"),
            "建议发展教育、文化、艺术、设计、研究等需要创造力和学术背景的工作。",
            EffectLevel::Good,
        ),
        P::WealthAndOfficer => {
            if matches!(level, StrengthLevel::Balanced | StrengthLevel::SomewhatStrong) {
                (
                    format!("{p}财星和官星都旺盛有力，且日主适中，能够承受财官之力，格局极佳。"),
                    "建议发展政商两界的工作，如企业管理、金融投资、政府机关等。",
                    EffectLevel::Good,
                )
            } else {
                (
                    format!("{p}财星和官星都旺盛有力，但日主过弱或过旺，不能很好地平衡财官之力，需要注意调整。"),
                    "建议根据日主旺衰情况，适当调整事业方向，避免财官过旺或不及。",
                    EffectLevel::Mixed,
                )
            }
        }
        P::BuildingLu | P::BuildingYuan => (
            format!("{p}日主与月令地支构成特殊关系，格局良好。日主得令，根基稳固，有利于事业发展。"),
            "建议发展与日主五行相关的事业，充分发挥日主的优势。",
            EffectLevel::Good,
        ),
        P::Mixed => (
            format!("{p}需要结合具体八字进行详细分析。"),
            "建议咨询专业命理师进行详细分析。",
            base_level(pattern),
        ),
    };
    PatternReading {
        analysis,
        suggestion,
        level,
    }
}

/// Effect of one period on a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodEffect {
    pub effect: String,
    pub suggestion: String,
    pub level: EffectLevel,
}

/// Read `period` against `pattern` through the relation of the period
/// stem's element to the Day Master's element.
///
/// One matrix serves every scope; `scope` only labels the text.
pub fn period_effect(
    pattern: PatternName,
    period: GanZhi,
    day: Element,
    scope: PeriodScope,
) -> PeriodEffect {
    use ElementRelation as R;
    use PatternName as P;

    let pe = period.stem().element();
    let (s, p) = (scope.name(), pattern.name());
    let rel = relation(pe, day);
    let complex = || {
        (
            format!("{s}五行{pe}与日主五行{day}关系较为复杂，需要具体分析。"),
            "需要根据具体情况调整事业方向。",
            EffectLevel::Neutral,
        )
    };
    let (effect, advice, level) = match pattern {
        P::DirectResource | P::IndirectResource | P::Resources => match rel {
            R::Generates => (
                format!("{s}五行{pe}生日主五行{day}，增强印星生助日主的力量，对{p}有利。"),
                "可以重点发展教育、文化、行政等印星有利的事业。",
                EffectLevel::Good,
            ),
            R::Restrains => (
                format!("{s}五行{pe}克日主五行{day}，削弱印星生助日主的力量，对{p}不利。"),
                "需要注意保护自己，避免过度劳累，适当调整事业方向。",
                EffectLevel::Bad,
            ),
            R::GeneratedBy => (
                format!("{s}五行{pe}被日主五行{day}所生，日主泄气过多，对{p}不利。"),
                "需要注意保存实力，避免过度付出，适当调整事业方向。",
                EffectLevel::Bad,
            ),
            R::RestrainedBy => (
                format!("{s}五行{pe}被日主五行{day}所克，日主得以发挥，对{p}中性影响。"),
                "可以适度发展事业，但需要注意平衡各方面的关系。",
                EffectLevel::Neutral,
            ),
            R::Same => (
                format!("{s}五行{pe}与日主五行{day}相同，增强日主力量，对{p}中性影响。"),
                "需要注意避免日主过旺，适当发展泄秀之事业。",
                EffectLevel::Neutral,
            ),
        },
        P::DirectOfficer | P::SevenKillings => match rel {
            R::RestrainedBy => (
                format!("{s}五行{pe}被日主五行{day}所克，增强日主对官杀的克制，对{p}有利。"),
                "可以重点发展行政、管理、军警等官杀有利的事业。",
                EffectLevel::Good,
            ),
            R::Restrains => (
                format!("{s}五行{pe}克日主五行{day}，增强官杀对日主的克制，对{p}不利。"),
                "需要注意保护自己，避免过度劳累，适当调整事业方向。",
                EffectLevel::Bad,
            ),
            R::Generates => (
                format!("{s}五行{pe}生日主五行{day}，增强日主力量，对{p}中性影响。"),
                "可以适度发展事业，但需要注意平衡各方面的关系。",
                EffectLevel::Neutral,
            ),
            R::Same | R::GeneratedBy => complex(),
        },
        P::WealthAndOfficer => match rel {
            R::RestrainedBy | R::GeneratedBy => (
                format!("{s}五行{pe}被日主五行{day}所克或所生，增强日主对财官的控制，对{p}有利。"),
                "可以重点发展政商两界的工作，如企业管理、金融投资、政府机关等。",
                EffectLevel::Good,
            ),
            R::Restrains => (
                format!("{s}五行{pe}克日主五行{day}，削弱日主对财官的控制，对{p}不利。"),
                "需要注意保护自己，避免过度劳累，适当调整事业方向。",
                EffectLevel::Bad,
            ),
            R::Same | R::Generates => complex(),
        },
        _ => {
            return PeriodEffect {
                effect: format!("需要结合具体八字和{s}干支进行详细分析。"),
                suggestion: "建议咨询专业命理师进行详细分析。".to_owned(),
                level: EffectLevel::Neutral,
            };
        }
    };
    PeriodEffect {
        effect,
        suggestion: format!("此{s}期间，{advice}"),
        level,
    }
}
