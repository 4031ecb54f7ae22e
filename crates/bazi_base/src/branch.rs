//! The twelve Earthly Branches (DiZhi).

use crate::error::BaziError;
use crate::wuxing::{Element, Polarity};

/// Earthly branch, 子 (index 0) through 亥 (index 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All twelve branches in cycle order.
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_CHARS: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];
const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const ZODIAC_NAMES: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

impl Branch {
    /// 0-based index (子 = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_u8(i: u8) -> Option<Self> {
        if i < 12 {
            Some(ALL_BRANCHES[i as usize])
        } else {
            None
        }
    }

    /// Branch at any integer position, wrapping modulo 12.
    pub const fn wrapping(i: i64) -> Self {
        ALL_BRANCHES[i.rem_euclid(12) as usize]
    }

    /// Step `n` places along the cycle (negative steps go back).
    pub const fn offset(self, n: i64) -> Self {
        Self::wrapping(self.index() as i64 + n)
    }

    pub const fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    pub const fn as_char(self) -> char {
        BRANCH_CHARS[self.index() as usize]
    }

    pub fn from_char(c: char) -> Option<Self> {
        BRANCH_CHARS.iter().position(|&x| x == c).map(|i| ALL_BRANCHES[i])
    }

    /// Principal element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Element::Earth,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Zodiac animal (ShengXiao).
    pub const fn zodiac(self) -> &'static str {
        ZODIAC_NAMES[self.index() as usize]
    }

    /// Opposite branch in the six clashes (子午, 丑未, ...).
    pub const fn clash(self) -> Self {
        self.offset(6)
    }

    /// Partner in the six harmonies (子丑, 寅亥, 卯戌, 辰酉, 巳申, 午未).
    pub const fn harmony(self) -> Self {
        Self::wrapping(1 - self.index() as i64)
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Branch {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_char(c).ok_or_else(|| BaziError::InvalidBranch(s.into()))
            }
            _ => Err(BaziError::InvalidBranch(s.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_elements() {
        assert_eq!(Branch::Zi.element(), Element::Water);
        assert_eq!(Branch::Mao.element(), Element::Wood);
        assert_eq!(Branch::Wu.element(), Element::Fire);
        assert_eq!(Branch::You.element(), Element::Metal);
        assert_eq!(Branch::Wei.element(), Element::Earth);
    }

    #[test]
    fn clash_and_harmony() {
        assert_eq!(Branch::Zi.clash(), Branch::Wu);
        assert_eq!(Branch::Si.clash(), Branch::Hai);
        assert_eq!(Branch::Zi.harmony(), Branch::Chou);
        assert_eq!(Branch::Yin.harmony(), Branch::Hai);
        assert_eq!(Branch::Wu.harmony(), Branch::Wei);
        assert_eq!(Branch::Shen.harmony(), Branch::Si);
    }

    #[test]
    fn zodiac() {
        assert_eq!(Branch::Zi.zodiac(), "鼠");
        assert_eq!(Branch::Hai.zodiac(), "猪");
    }

    #[test]
    fn parse() {
        assert_eq!("酉".parse::<Branch>(), Ok(Branch::You));
        assert!("甲".parse::<Branch>().is_err());
        assert_eq!(Branch::Hai.offset(1), Branch::Zi);
    }
}
