//! Aggregate star scoring.
//!
//! Each star has an impact level (1-10). Good stars add their level to the
//! good score, bad stars add it to the bad score, mixed stars split it
//! 60/40 (rounded down) between both. The signed total falls in one of
//! five tiers.

use super::Star;
use super::category::{StarCategory, category_of, strip_prefix};
use serde::Serialize;

/// Impact level of a known star or traditional name; 5 when unlisted.
pub fn star_level(name: &str) -> i32 {
    let bare = strip_prefix(name);
    if let Some(star) = Star::from_name(bare) {
        return level_of(star);
    }
    match bare {
        "文曲" => 7,
        "天罗地网" => 8,
        _ => 5,
    }
}

const fn level_of(star: Star) -> i32 {
    match star {
        Star::TianYiGuiRen => 10,
        Star::LuShen | Star::TianDe => 9,
        Star::YangRen
        | Star::WenChang
        | Star::YueDe
        | Star::ZaiSha
        | Star::TianXing => 8,
        Star::HuaGai
        | Star::JiangXing
        | Star::TianYi
        | Star::JieSha
        | Star::KuiGang
        | Star::YinChaYangCuo
        | Star::TianDeHe
        | Star::JinShen
        | Star::WangShen => 7,
        Star::TaoHua
        | Star::YiMa
        | Star::GuChen
        | Star::GuaSu
        | Star::TianXi
        | Star::TianKong
        | Star::DiJie
        | Star::XianChi => 6,
        Star::HongYan | Star::TianKu | Star::TianXu => 5,
        Star::TianLuo | Star::DiWang | Star::TaiSui => 5,
    }
}

/// Positive and negative contribution of one star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StarImpact {
    pub positive: i32,
    pub negative: i32,
}

/// Contribution of a star name to the chart score.
pub fn star_impact(name: &str) -> StarImpact {
    let level = star_level(name);
    match category_of(name) {
        StarCategory::Good => StarImpact {
            positive: level,
            negative: 0,
        },
        StarCategory::Bad => StarImpact {
            positive: 0,
            negative: level,
        },
        StarCategory::Mixed => StarImpact {
            positive: level * 6 / 10,
            negative: level * 4 / 10,
        },
        StarCategory::Unknown => StarImpact::default(),
    }
}

/// Five-tier verdict on the signed score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScoreTier {
    Poor,
    Weak,
    Fair,
    Good,
    Excellent,
}

impl ScoreTier {
    pub const fn from_total(total: i32) -> Self {
        if total >= 20 {
            Self::Excellent
        } else if total >= 10 {
            Self::Good
        } else if total >= 0 {
            Self::Fair
        } else if total >= -10 {
            Self::Weak
        } else {
            Self::Poor
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "优秀",
            Self::Good => "良好",
            Self::Fair => "一般",
            Self::Weak => "偏弱",
            Self::Poor => "较差",
        }
    }

    pub const fn evaluation(self) -> &'static str {
        match self {
            Self::Excellent => "神煞配置极佳，多贵人助力，前程似锦",
            Self::Good => "神煞配置良好，整体偏吉，发展顺利",
            Self::Fair => "神煞配置平衡，吉凶参半，需努力进取",
            Self::Weak => "神煞配置偏弱，需注意化解，谨慎行事",
            Self::Poor => "神煞配置不佳，多有阻碍，需积极化解",
        }
    }
}

/// Aggregated score of a set of stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarScore {
    pub good_score: i32,
    pub bad_score: i32,
    pub total: i32,
    pub tier: ScoreTier,
}

/// Score a collection of star names (prefixed or bare).
pub fn score_chart<I, S>(stars: I) -> StarScore
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (good_score, bad_score) = stars.into_iter().fold((0, 0), |(g, b), s| {
        let impact = star_impact(s.as_ref());
        (g + impact.positive, b + impact.negative)
    });
    let total = good_score - bad_score;
    StarScore {
        good_score,
        bad_score,
        total,
        tier: ScoreTier::from_total(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impacts_by_category() {
        assert_eq!(star_impact("天乙贵人"), StarImpact { positive: 10, negative: 0 });
        assert_eq!(star_impact("羊刃"), StarImpact { positive: 0, negative: 8 });
        // mixed 桃花 level 6: 3 and 2
        assert_eq!(star_impact("桃花"), StarImpact { positive: 3, negative: 2 });
        assert_eq!(star_impact("未知星"), StarImpact::default());
    }

    #[test]
    fn di_jie_scores_nothing() {
        assert_eq!(star_level("地劫"), 6);
        assert_eq!(star_impact("日柱:地劫"), StarImpact::default());
        let s = score_chart(["年柱:地劫", "月柱:天乙贵人"]);
        assert_eq!((s.good_score, s.bad_score), (10, 0));
    }

    #[test]
    fn tiers() {
        assert_eq!(ScoreTier::from_total(20), ScoreTier::Excellent);
        assert_eq!(ScoreTier::from_total(10), ScoreTier::Good);
        assert_eq!(ScoreTier::from_total(0), ScoreTier::Fair);
        assert_eq!(ScoreTier::from_total(-10), ScoreTier::Weak);
        assert_eq!(ScoreTier::from_total(-11), ScoreTier::Poor);
    }

    #[test]
    fn score_mixed_list() {
        let s = score_chart(["年柱:天乙贵人", "月柱:文昌", "日柱:羊刃", "时柱:桃花"]);
        assert_eq!(s.good_score, 10 + 8 + 3);
        assert_eq!(s.bad_score, 8 + 2);
        assert_eq!(s.total, 11);
        assert_eq!(s.tier, ScoreTier::Good);
    }

    #[test]
    fn empty_is_fair() {
        let s = score_chart(Vec::<String>::new());
        assert_eq!(s.total, 0);
        assert_eq!(s.tier.name(), "一般");
    }
}
