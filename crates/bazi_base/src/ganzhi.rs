//! Stem+branch pairs and the 60-term sexagenary cycle.
//!
//! Only pairs whose stem and branch indices share parity occur in the
//! cycle. `GanZhi` can only be built through the checked constructors,
//! so every value in the crate is a valid cycle member.

use crate::branch::Branch;
use crate::error::BaziError;
use crate::stem::Stem;

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: u8 = 60;

/// A valid sexagenary stem+branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GanZhi {
    stem: Stem,
    branch: Branch,
}

/// True when the pair occurs in the 60-term cycle.
pub const fn is_valid_pair(stem: Stem, branch: Branch) -> bool {
    stem.index() % 2 == branch.index() % 2
}

impl GanZhi {
    /// Build a pair, rejecting the 40 parity-violating combinations.
    pub const fn new(stem: Stem, branch: Branch) -> Result<Self, BaziError> {
        if is_valid_pair(stem, branch) {
            Ok(Self { stem, branch })
        } else {
            Err(BaziError::InvalidPair { stem, branch })
        }
    }

    /// Pair at cycle position `i` (甲子 = 0), wrapping modulo 60.
    pub const fn from_cycle_index(i: i64) -> Self {
        let i = i.rem_euclid(CYCLE_LEN as i64);
        Self {
            stem: Stem::wrapping(i),
            branch: Branch::wrapping(i),
        }
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Position in the cycle, 0..60.
    pub const fn cycle_index(self) -> u8 {
        // unique i with i = s (mod 10) and i = b (mod 12)
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        (6 * s - 5 * b).rem_euclid(CYCLE_LEN as i64) as u8
    }

    /// Step `n` places along the cycle.
    pub const fn step(self, n: i64) -> Self {
        Self::from_cycle_index(self.cycle_index() as i64 + n)
    }

    /// Year pillar of a sexagenary year (year boundary at 立春).
    pub const fn of_year(year: i32) -> Self {
        Self::from_cycle_index(year as i64 - 4)
    }

    /// Day pillar of a Julian Day Number.
    pub const fn of_day_number(jdn: i64) -> Self {
        Self::from_cycle_index(jdn + 49)
    }

    /// Two-character name such as "甲子".
    pub fn name(self) -> String {
        let mut s = String::with_capacity(6);
        s.push(self.stem.as_char());
        s.push(self.branch.as_char());
        s
    }

    /// All 60 pairs in cycle order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CYCLE_LEN as i64).map(Self::from_cycle_index)
    }
}

impl std::fmt::Display for GanZhi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl std::str::FromStr for GanZhi {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        let (Some(sc), Some(bc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(BaziError::InvalidGanZhiString(s.into()));
        };
        let stem = Stem::from_char(sc).ok_or_else(|| BaziError::InvalidStem(sc.to_string()))?;
        let branch =
            Branch::from_char(bc).ok_or_else(|| BaziError::InvalidBranch(bc.to_string()))?;
        Self::new(stem, branch)
    }
}
