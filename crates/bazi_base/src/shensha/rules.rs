//! Star predicates.
//!
//! Each function decides one star from stems and branches alone. Several
//! stars depend only on the branch; the stem-keyed ones take the Day
//! Master or the pillar's own stem as documented per function.

use crate::branch::Branch::{self, *};
use crate::stem::Stem;

const fn in_set(branch: Branch, set: &[Branch]) -> bool {
    let mut i = 0;
    while i < set.len() {
        if set[i] as u8 == branch as u8 {
            return true;
        }
        i += 1;
    }
    false
}

const fn same_stem(a: Stem, b: Stem) -> bool {
    a as u8 == b as u8
}

// ── Day-stem keyed ──

/// 天乙贵人: 甲戊庚 丑未, 乙己 子申, 丙丁 亥酉, 壬癸 巳卯, 辛 午寅.
pub const fn is_tian_yi_gui_ren(day: Stem, branch: Branch) -> bool {
    let set: [Branch; 2] = match day {
        Stem::Jia | Stem::Wu | Stem::Geng => [Chou, Wei],
        Stem::Yi | Stem::Ji => [Zi, Shen],
        Stem::Bing | Stem::Ding => [Hai, You],
        Stem::Ren | Stem::Gui => [Si, Mao],
        Stem::Xin => [Wu, Yin],
    };
    in_set(branch, &set)
}

/// Branch of 禄 for each stem.
pub const fn lu_branch(stem: Stem) -> Branch {
    match stem {
        Stem::Jia => Yin,
        Stem::Yi => Mao,
        Stem::Bing | Stem::Wu => Si,
        Stem::Ding | Stem::Ji => Wu,
        Stem::Geng => Shen,
        Stem::Xin => You,
        Stem::Ren => Hai,
        Stem::Gui => Zi,
    }
}

/// 禄神: the branch is the 禄 of the stem.
pub const fn is_lu_shen(stem: Stem, branch: Branch) -> bool {
    lu_branch(stem) as u8 == branch as u8
}

/// 羊刃.
pub const fn is_yang_ren(day: Stem, branch: Branch) -> bool {
    let target = match day {
        Stem::Jia => Mao,
        Stem::Yi => Yin,
        Stem::Bing | Stem::Wu => Wu,
        Stem::Ding | Stem::Ji => Si,
        Stem::Geng => You,
        Stem::Xin => Shen,
        Stem::Ren => Hai,
        Stem::Gui => Zi,
    };
    target as u8 == branch as u8
}

/// 将星: 甲戊壬 子辰申, 乙己癸 丑巳酉, 丙庚 寅午戌, 丁辛 卯未亥.
pub const fn is_jiang_xing(day: Stem, branch: Branch) -> bool {
    let set: [Branch; 3] = match day {
        Stem::Jia | Stem::Wu | Stem::Ren => [Zi, Chen, Shen],
        Stem::Yi | Stem::Ji | Stem::Gui => [Chou, Si, You],
        Stem::Bing | Stem::Geng => [Yin, Wu, Xu],
        Stem::Ding | Stem::Xin => [Mao, Wei, Hai],
    };
    in_set(branch, &set)
}

// ── Pillar-stem keyed ──

/// 天德: the stem's 天德 branch (乙申, 戊亥) or the branch's 天德 stem.
pub const fn is_tian_de(stem: Stem, branch: Branch) -> bool {
    let by_stem = match stem {
        Stem::Yi => Some(Shen),
        Stem::Wu => Some(Hai),
        _ => None,
    };
    if let Some(b) = by_stem {
        if b as u8 == branch as u8 {
            return true;
        }
    }
    let by_branch = match branch {
        Zi => Some(Stem::Ding),
        Yin => Some(Stem::Ren),
        Mao => Some(Stem::Xin),
        Si => Some(Stem::Jia),
        Wu => Some(Stem::Yi),
        Wei => Some(Stem::Wu),
        Shen => Some(Stem::Bing),
        You => Some(Stem::Ji),
        Xu => Some(Stem::Geng),
        Hai => Some(Stem::Gui),
        Chou | Chen => None,
    };
    match by_branch {
        Some(s) => same_stem(s, stem),
        None => false,
    }
}

/// 天德合: the branch's 天德合 stem.
pub const fn is_tian_de_he(stem: Stem, branch: Branch) -> bool {
    let target = match branch {
        Zi => Stem::Ren,
        Chou => Stem::Gui,
        Yin => Stem::Ding,
        Mao => Stem::Wu,
        Chen => Stem::Ji,
        Si => Stem::Geng,
        Wu => Stem::Xin,
        Wei => Stem::Ren,
        Shen => Stem::Gui,
        You => Stem::Jia,
        Xu => Stem::Yi,
        Hai => Stem::Bing,
    };
    same_stem(target, stem)
}

/// 月德: any of the month-virtue stems 丙甲庚丁乙.
pub const fn is_yue_de(stem: Stem) -> bool {
    matches!(
        stem,
        Stem::Bing | Stem::Jia | Stem::Geng | Stem::Ding | Stem::Yi
    )
}

/// 魁罡: 庚戌 庚辰 戊戌 壬辰.
pub const fn is_kui_gang(stem: Stem, branch: Branch) -> bool {
    matches!(
        (stem, branch),
        (Stem::Geng, Xu) | (Stem::Geng, Chen) | (Stem::Wu, Xu) | (Stem::Ren, Chen)
    )
}

/// 阴差阳错.
pub const fn is_yin_cha_yang_cuo(stem: Stem, branch: Branch) -> bool {
    matches!(
        (stem, branch),
        (Stem::Bing, Zi)
            | (Stem::Ding, Chou)
            | (Stem::Wu, Yin)
            | (Stem::Xin, Mao)
            | (Stem::Ren, Chen)
            | (Stem::Gui, Si)
            | (Stem::Bing, Wu)
            | (Stem::Ding, Wei)
            | (Stem::Wu, Shen)
            | (Stem::Xin, You)
            | (Stem::Ren, Xu)
            | (Stem::Gui, Hai)
    )
}

// ── Year-branch keyed ──

/// 驿马: 寅午戌 申, 申子辰 寅, 巳酉丑 亥, 亥卯未 巳 (by year branch).
pub const fn is_yi_ma(branch: Branch, year_branch: Branch) -> bool {
    let horse = match year_branch {
        Yin | Wu | Xu => Shen,
        Shen | Zi | Chen => Yin,
        Si | You | Chou => Hai,
        Hai | Mao | Wei => Si,
    };
    horse as u8 == branch as u8
}

/// 天喜 (by year branch).
pub const fn is_tian_xi(branch: Branch, year_branch: Branch) -> bool {
    let target = match year_branch {
        Zi => You,
        Chou => Shen,
        Yin => Wei,
        Mao => Wu,
        Chen => Si,
        Si => Chen,
        Wu => Mao,
        Wei => Yin,
        Shen => Chou,
        You => Zi,
        Xu => Hai,
        Hai => Xu,
    };
    target as u8 == branch as u8
}

// ── Branch only ──

pub const fn is_wen_chang(branch: Branch) -> bool {
    in_set(branch, &[Si, Shen, Hai, Yin])
}

pub const fn is_hua_gai(branch: Branch) -> bool {
    in_set(branch, &[Xu, Chen, Wei, Chou])
}

pub const fn is_tao_hua(branch: Branch) -> bool {
    in_set(branch, &[Mao, You, Zi, Wu])
}

pub const fn is_gu_chen(branch: Branch) -> bool {
    in_set(branch, &[Chen, Xu, Chou, Wei])
}

pub const fn is_gua_su(branch: Branch) -> bool {
    in_set(branch, &[Yin, Shen, Si, Hai])
}

pub const fn is_jin_shen(branch: Branch) -> bool {
    in_set(branch, &[Shen, You, Xu])
}

/// 天医 is carried by every branch.
pub const fn is_tian_yi(_branch: Branch) -> bool {
    true
}

pub const fn is_hong_yan(branch: Branch) -> bool {
    in_set(branch, &[Mao, Si, Shen, Xu])
}

pub const fn is_tian_luo(branch: Branch) -> bool {
    matches!(branch, Xu)
}

pub const fn is_di_wang(branch: Branch) -> bool {
    matches!(branch, Wei)
}

pub const fn is_tian_kong(branch: Branch) -> bool {
    matches!(branch, Xu)
}

pub const fn is_di_jie(branch: Branch) -> bool {
    matches!(branch, Chen)
}

pub const fn is_tian_xing(branch: Branch) -> bool {
    matches!(branch, Si)
}

pub const fn is_tian_ku(branch: Branch) -> bool {
    matches!(branch, Wei)
}

pub const fn is_tian_xu(branch: Branch) -> bool {
    matches!(branch, Chou)
}

pub const fn is_xian_chi(branch: Branch) -> bool {
    in_set(branch, &[Chou, Wei, Chen, Xu])
}

pub const fn is_wang_shen(branch: Branch) -> bool {
    in_set(branch, &[Yin, Shen])
}

pub const fn is_jie_sha(branch: Branch) -> bool {
    in_set(branch, &[Zi, Wu])
}

pub const fn is_zai_sha(branch: Branch) -> bool {
    in_set(branch, &[Mao, You])
}
