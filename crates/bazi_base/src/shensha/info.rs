//! Descriptive texts for stars and recognised star pairings.

use super::{Star, StarCategory};
use serde::Serialize;

/// Name, category and reading of one star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarInfo {
    pub name: &'static str,
    pub category: StarCategory,
    pub description: &'static str,
    pub effect: &'static str,
}

/// Descriptive record of a star.
pub const fn star_info(star: Star) -> StarInfo {
    let (description, effect) = texts(star);
    StarInfo {
        name: star.name(),
        category: star.category(),
        description,
        effect,
    }
}

const fn texts(star: Star) -> (&'static str, &'static str) {
    match star {
        Star::TianYiGuiRen => ("命中第一吉神，主逢凶化吉", "遇难有人相助，贵人提携"),
        Star::YangRen => ("禄前一位，刚猛之星", "性情刚烈，易有血光是非"),
        Star::TaoHua => ("主人缘与异性缘", "人缘佳，感情丰富，亦防桃色纠纷"),
        Star::HuaGai => ("艺术宗教之星", "聪慧孤高，喜玄学艺术"),
        Star::WenChang => ("主文采聪明", "利学业考试，才思敏捷"),
        Star::LuShen => ("天干之禄，主衣食俸禄", "财禄丰足，生活安稳"),
        Star::GuChen => ("孤独之星", "性格孤僻，六亲缘薄"),
        Star::GuaSu => ("寡居之星", "婚姻不顺，易感孤单"),
        Star::JiangXing => ("权柄之星", "有领导才能，掌权得势"),
        Star::JinShen => ("刚烈之煞", "性情刚毅，宜火制"),
        Star::TianDe => ("上天之德", "化解灾厄，一生少凶险"),
        Star::TianDeHe => ("天德之合", "福泽绵长，逢凶化吉"),
        Star::YueDe => ("太阴之德", "心性仁慈，多得庇佑"),
        Star::TianYi => ("医药之星", "宜从医学、养生之业"),
        Star::HongYan => ("多情之星", "风流多情，异性缘重"),
        Star::TianLuo => ("天罗之煞", "易有牵绊束缚，行事多阻"),
        Star::DiWang => ("地网之煞", "易陷困局，宜守不宜进"),
        Star::TianKong => ("虚空之星", "思想超脱，亦主落空"),
        Star::DiJie => ("劫夺之星", "防破财损耗"),
        Star::TianXing => ("刑罚之星", "防官非刑伤"),
        Star::TianKu => ("悲泣之星", "多忧愁，防丧服之事"),
        Star::TianXu => ("虚耗之星", "事多虚浮，防耗散"),
        Star::XianChi => ("沐浴之地，色欲之星", "防酒色破败"),
        Star::WangShen => ("亡失之煞", "防失物失位，心神不宁"),
        Star::JieSha => ("劫夺之煞", "防意外破财与争斗"),
        Star::ZaiSha => ("灾祸之煞", "防血光横祸"),
        Star::KuiGang => ("魁罡之日，刚强之极", "性格刚烈，聪明果断"),
        Star::YinChaYangCuo => ("阴阳差错之日", "婚姻多波折，亲缘不顺"),
        Star::YiMa => ("奔波走动之星", "主迁移变动、远行出差"),
        Star::TianXi => ("喜庆之星", "主婚嫁添丁等喜事"),
        Star::TaiSui => ("值年之神", "流年逢之，诸事宜谨慎"),
    }
}

/// A recognised pairing of two stars in the same chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarCombination {
    pub stars: [Star; 2],
    pub category: StarCategory,
    pub effect: &'static str,
}

const COMBINATIONS: [StarCombination; 6] = [
    StarCombination {
        stars: [Star::TianYiGuiRen, Star::WenChang],
        category: StarCategory::Good,
        effect: "贵人文昌同见，学业仕途皆得提携",
    },
    StarCombination {
        stars: [Star::TianYiGuiRen, Star::LuShen],
        category: StarCategory::Good,
        effect: "贵人禄神同见，名利双收",
    },
    StarCombination {
        stars: [Star::TianLuo, Star::DiWang],
        category: StarCategory::Bad,
        effect: "天罗地网俱全，处处受制，宜守不宜攻",
    },
    StarCombination {
        stars: [Star::YangRen, Star::JieSha],
        category: StarCategory::Bad,
        effect: "羊刃劫煞相逢，防争斗伤灾",
    },
    StarCombination {
        stars: [Star::GuChen, Star::GuaSu],
        category: StarCategory::Bad,
        effect: "孤寡并见，六亲缘薄，婚姻迟滞",
    },
    StarCombination {
        stars: [Star::TaoHua, Star::HongYan],
        category: StarCategory::Mixed,
        effect: "桃花红艳同见，魅力出众，感情多变",
    },
];

/// Pairings whose two members both occur in `stars`, in table order.
pub fn combination_analysis(stars: &[Star]) -> Vec<StarCombination> {
    COMBINATIONS
        .iter()
        .filter(|c| c.stars.iter().all(|s| stars.contains(s)))
        .copied()
        .collect()
}
