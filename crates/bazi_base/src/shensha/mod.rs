//! Star classifier (ShenSha).
//!
//! Stars are derived facts: `classify_pillar_stars` recomputes them from
//! the Day Master and a target stem/branch every time. The same function
//! serves natal pillars and fortune periods.

pub mod category;
pub mod info;
pub mod rules;
pub mod score;

use crate::branch::Branch;
use crate::stem::Stem;

pub use category::{StarCategory, category_of, strip_prefix};
pub use info::{StarCombination, StarInfo, combination_analysis, star_info};
pub use score::{ScoreTier, StarImpact, StarScore, score_chart, star_impact, star_level};

/// A named star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Star {
    TianYiGuiRen,
    YangRen,
    TaoHua,
    HuaGai,
    WenChang,
    LuShen,
    GuChen,
    GuaSu,
    JiangXing,
    JinShen,
    TianDe,
    TianDeHe,
    YueDe,
    TianYi,
    HongYan,
    TianLuo,
    DiWang,
    TianKong,
    DiJie,
    TianXing,
    TianKu,
    TianXu,
    XianChi,
    WangShen,
    JieSha,
    ZaiSha,
    KuiGang,
    YinChaYangCuo,
    YiMa,
    TianXi,
    /// Attached to every annual period.
    TaiSui,
}

/// All stars, in classification order.
pub const ALL_STARS: [Star; 31] = [
    Star::TianYiGuiRen,
    Star::YangRen,
    Star::TaoHua,
    Star::HuaGai,
    Star::WenChang,
    Star::LuShen,
    Star::GuChen,
    Star::GuaSu,
    Star::JiangXing,
    Star::JinShen,
    Star::TianDe,
    Star::TianDeHe,
    Star::YueDe,
    Star::TianYi,
    Star::HongYan,
    Star::TianLuo,
    Star::DiWang,
    Star::TianKong,
    Star::DiJie,
    Star::TianXing,
    Star::TianKu,
    Star::TianXu,
    Star::XianChi,
    Star::WangShen,
    Star::JieSha,
    Star::ZaiSha,
    Star::KuiGang,
    Star::YinChaYangCuo,
    Star::YiMa,
    Star::TianXi,
    Star::TaiSui,
];

impl Star {
    pub const fn name(self) -> &'static str {
        match self {
            Self::TianYiGuiRen => "天乙贵人",
            Self::YangRen => "羊刃",
            Self::TaoHua => "桃花",
            Self::HuaGai => "华盖",
            Self::WenChang => "文昌",
            Self::LuShen => "禄神",
            Self::GuChen => "孤辰",
            Self::GuaSu => "寡宿",
            Self::JiangXing => "将星",
            Self::JinShen => "金神",
            Self::TianDe => "天德",
            Self::TianDeHe => "天德合",
            Self::YueDe => "月德",
            Self::TianYi => "天医",
            Self::HongYan => "红艳",
            Self::TianLuo => "天罗",
            Self::DiWang => "地网",
            Self::TianKong => "天空",
            Self::DiJie => "地劫",
            Self::TianXing => "天刑",
            Self::TianKu => "天哭",
            Self::TianXu => "天虚",
            Self::XianChi => "咸池",
            Self::WangShen => "亡神",
            Self::JieSha => "劫煞",
            Self::ZaiSha => "灾煞",
            Self::KuiGang => "魁罡",
            Self::YinChaYangCuo => "阴差阳错",
            Self::YiMa => "驿马",
            Self::TianXi => "天喜",
            Self::TaiSui => "太岁",
        }
    }

    /// Look up a bare star name (no pillar prefix).
    pub fn from_name(s: &str) -> Option<Self> {
        ALL_STARS.iter().copied().find(|star| star.name() == s)
    }

    pub const fn category(self) -> StarCategory {
        match self {
            Self::TianYiGuiRen
            | Self::WenChang
            | Self::LuShen
            | Self::YiMa
            | Self::TianDe
            | Self::TianDeHe
            | Self::YueDe
            | Self::TianYi
            | Self::TianXi => StarCategory::Good,
            Self::YangRen
            | Self::GuChen
            | Self::GuaSu
            | Self::JinShen
            | Self::TianLuo
            | Self::DiWang
            | Self::TianXing
            | Self::TianKu
            | Self::TianXu
            | Self::XianChi
            | Self::WangShen
            | Self::JieSha
            | Self::ZaiSha
            | Self::KuiGang
            | Self::YinChaYangCuo => StarCategory::Bad,
            Self::TaoHua | Self::HuaGai | Self::JiangXing | Self::HongYan | Self::TianKong
            | Self::TaiSui => StarCategory::Mixed,
            // 地劫 carries no category and scores nothing
            Self::DiJie => StarCategory::Unknown,
        }
    }
}

impl std::fmt::Display for Star {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Stars present on one pillar or period.
///
/// `day` is the Day Master; `stem`/`branch` the target. 禄神 is keyed on
/// the target's own stem, the other stem-keyed stars on the Day Master.
/// 驿马 and 天喜 are
/// evaluated only when `year_branch` is given: natal charts pass the
/// year pillar's own branch when classifying the year pillar, periods
/// pass `None`. Output order is the fixed order of [`ALL_STARS`].
pub fn classify_pillar_stars(
    day: Stem,
    stem: Stem,
    branch: Branch,
    year_branch: Option<Branch>,
) -> Vec<Star> {
    use rules::*;

    let checks: [(Star, bool); 28] = [
        (Star::TianYiGuiRen, is_tian_yi_gui_ren(day, branch)),
        (Star::YangRen, is_yang_ren(day, branch)),
        (Star::TaoHua, is_tao_hua(branch)),
        (Star::HuaGai, is_hua_gai(branch)),
        (Star::WenChang, is_wen_chang(branch)),
        (Star::LuShen, is_lu_shen(stem, branch)),
        (Star::GuChen, is_gu_chen(branch)),
        (Star::GuaSu, is_gua_su(branch)),
        (Star::JiangXing, is_jiang_xing(day, branch)),
        (Star::JinShen, is_jin_shen(branch)),
        (Star::TianDe, is_tian_de(stem, branch)),
        (Star::TianDeHe, is_tian_de_he(stem, branch)),
        (Star::YueDe, is_yue_de(stem)),
        (Star::TianYi, is_tian_yi(branch)),
        (Star::HongYan, is_hong_yan(branch)),
        (Star::TianLuo, is_tian_luo(branch)),
        (Star::DiWang, is_di_wang(branch)),
        (Star::TianKong, is_tian_kong(branch)),
        (Star::DiJie, is_di_jie(branch)),
        (Star::TianXing, is_tian_xing(branch)),
        (Star::TianKu, is_tian_ku(branch)),
        (Star::TianXu, is_tian_xu(branch)),
        (Star::XianChi, is_xian_chi(branch)),
        (Star::WangShen, is_wang_shen(branch)),
        (Star::JieSha, is_jie_sha(branch)),
        (Star::ZaiSha, is_zai_sha(branch)),
        (Star::KuiGang, is_kui_gang(stem, branch)),
        (Star::YinChaYangCuo, is_yin_cha_yang_cuo(stem, branch)),
    ];

    let mut stars: Vec<Star> = checks
        .into_iter()
        .filter_map(|(star, hit)| hit.then_some(star))
        .collect();

    if let Some(yb) = year_branch {
        if is_yi_ma(branch, yb) {
            stars.push(Star::YiMa);
        }
        if is_tian_xi(branch, yb) {
            stars.push(Star::TianXi);
        }
    }
    stars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for s in ALL_STARS {
            assert_eq!(Star::from_name(s.name()), Some(s));
        }
        assert_eq!(Star::from_name("不存在"), None);
    }

    #[test]
    fn classify_is_deterministic() {
        let a = classify_pillar_stars(Stem::Jia, Stem::Bing, Branch::Yin, None);
        let b = classify_pillar_stars(Stem::Jia, Stem::Bing, Branch::Yin, None);
        assert_eq!(a, b);
        assert!(!a.contains(&Star::LuShen));
        assert!(a.contains(&Star::WenChang));
        assert!(a.contains(&Star::TianYi));
    }

    #[test]
    fn year_branch_gates_yima_and_tianxi() {
        // 申 under a 寅 year is the horse
        let with = classify_pillar_stars(Stem::Jia, Stem::Geng, Branch::Shen, Some(Branch::Yin));
        let without = classify_pillar_stars(Stem::Jia, Stem::Geng, Branch::Shen, None);
        assert!(with.contains(&Star::YiMa));
        assert!(!without.contains(&Star::YiMa));
    }

    #[test]
    fn lu_shen_follows_pillar_stem() {
        // 庚 takes its lu at 申 whatever the Day Master
        let own = classify_pillar_stars(Stem::Jia, Stem::Geng, Branch::Shen, None);
        assert!(own.contains(&Star::LuShen));
        // 寅 is the lu of 甲, not of 丙
        let other = classify_pillar_stars(Stem::Jia, Stem::Bing, Branch::Yin, None);
        assert!(!other.contains(&Star::LuShen));
    }

    #[test]
    fn di_jie_is_uncategorised() {
        assert_eq!(Star::DiJie.category(), StarCategory::Unknown);
        let unknown: Vec<Star> = ALL_STARS
            .into_iter()
            .filter(|s| s.category() == StarCategory::Unknown)
            .collect();
        assert_eq!(unknown, vec![Star::DiJie]);
    }

    #[test]
    fn output_follows_fixed_order() {
        let stars = classify_pillar_stars(Stem::Jia, Stem::Wu, Branch::Xu, None);
        let positions: Vec<usize> = stars
            .iter()
            .map(|s| ALL_STARS.iter().position(|x| x == s).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(stars.contains(&Star::KuiGang));
    }
}
