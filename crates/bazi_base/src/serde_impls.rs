//! Serialization of the symbolic types as their Chinese names.
//!
//! Reports carry `"甲子"` and `"正官"` rather than variant identifiers, so
//! every enum here serializes through its `name()`.

use serde::{Serialize, Serializer};

use crate::branch::Branch;
use crate::chart::Gender;
use crate::combination::BranchGroupKind;
use crate::dishi::DiShi;
use crate::fortune::{Direction, YunSchool};
use crate::ganzhi::GanZhi;
use crate::geju::{EffectLevel, PatternName, PeriodScope, UsefulGod};
use crate::pillar::PillarKind;
use crate::shensha::{ScoreTier, Star, StarCategory};
use crate::shishen::{ShiShen, ShiShenGroup, ShiShenNature};
use crate::stem::Stem;
use crate::strength::StrengthLevel;
use crate::wuxing::{Element, ElementRelation, Polarity};

macro_rules! serialize_by_name {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(&self.name())
                }
            }
        )+
    };
}

serialize_by_name!(
    Stem,
    Branch,
    GanZhi,
    Element,
    Polarity,
    ElementRelation,
    ShiShen,
    ShiShenGroup,
    ShiShenNature,
    DiShi,
    StrengthLevel,
    Star,
    StarCategory,
    ScoreTier,
    PillarKind,
    Gender,
    BranchGroupKind,
    PatternName,
    UsefulGod,
    EffectLevel,
    PeriodScope,
    YunSchool,
    Direction,
);
