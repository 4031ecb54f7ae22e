//! The ten Heavenly Stems (TianGan).

use crate::error::BaziError;
use crate::wuxing::{Element, Polarity};

/// Heavenly stem, 甲 (index 0) through 癸 (index 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All ten stems in cycle order.
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_CHARS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];
const STEM_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl Stem {
    /// 0-based index (甲 = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_u8(i: u8) -> Option<Self> {
        if i < 10 {
            Some(ALL_STEMS[i as usize])
        } else {
            None
        }
    }

    /// Stem at any integer position, wrapping modulo 10.
    pub const fn wrapping(i: i64) -> Self {
        ALL_STEMS[i.rem_euclid(10) as usize]
    }

    /// Step `n` places along the cycle (negative steps go back).
    pub const fn offset(self, n: i64) -> Self {
        Self::wrapping(self.index() as i64 + n)
    }

    pub const fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    pub const fn as_char(self) -> char {
        STEM_CHARS[self.index() as usize]
    }

    pub fn from_char(c: char) -> Option<Self> {
        STEM_CHARS.iter().position(|&x| x == c).map(|i| ALL_STEMS[i])
    }

    /// 甲乙 木, 丙丁 火, 戊己 土, 庚辛 金, 壬癸 水.
    pub const fn element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Stem {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or_else(|| BaziError::InvalidStem(s.into())),
            _ => Err(BaziError::InvalidStem(s.into())),
        }
    }
}
