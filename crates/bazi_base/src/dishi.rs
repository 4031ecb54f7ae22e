//! The twelve life-cycle stages (DiShi / 十二长生) of a stem at a branch.

use crate::branch::Branch;
use crate::stem::Stem;

/// Life-cycle stage, 长生 through 养.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiShi {
    ChangSheng,
    MuYu,
    GuanDai,
    LinGuan,
    DiWang,
    Shuai,
    Bing,
    Si,
    Mu,
    Jue,
    Tai,
    Yang,
}

pub const ALL_DISHI: [DiShi; 12] = [
    DiShi::ChangSheng,
    DiShi::MuYu,
    DiShi::GuanDai,
    DiShi::LinGuan,
    DiShi::DiWang,
    DiShi::Shuai,
    DiShi::Bing,
    DiShi::Si,
    DiShi::Mu,
    DiShi::Jue,
    DiShi::Tai,
    DiShi::Yang,
];

impl DiShi {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::ChangSheng => "长生",
            Self::MuYu => "沐浴",
            Self::GuanDai => "冠带",
            Self::LinGuan => "临官",
            Self::DiWang => "帝旺",
            Self::Shuai => "衰",
            Self::Bing => "病",
            Self::Si => "死",
            Self::Mu => "墓",
            Self::Jue => "绝",
            Self::Tai => "胎",
            Self::Yang => "养",
        }
    }
}

/// Branch where each stem is born (长生).
const fn birth_branch(stem: Stem) -> Branch {
    match stem {
        Stem::Jia => Branch::Hai,
        Stem::Yi => Branch::Wu,
        Stem::Bing | Stem::Wu => Branch::Yin,
        Stem::Ding | Stem::Ji => Branch::You,
        Stem::Geng => Branch::Si,
        Stem::Xin => Branch::Zi,
        Stem::Ren => Branch::Shen,
        Stem::Gui => Branch::Mao,
    }
}

/// Stage of `stem` at `branch`: yang stems count forward from their
/// birth branch, yin stems backward.
pub const fn dishi(stem: Stem, branch: Branch) -> DiShi {
    let start = birth_branch(stem).index();
    let b = branch.index();
    let steps = if stem.is_yang() {
        (b + 12 - start) % 12
    } else {
        (start + 12 - b) % 12
    };
    ALL_DISHI[steps as usize]
}
