//! Error types for sexagenary construction and parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::branch::Branch;
use crate::stem::Stem;

/// Errors from building or parsing stems, branches and pillars.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BaziError {
    /// Text is not one of the ten stems.
    InvalidStem(String),
    /// Text is not one of the twelve branches.
    InvalidBranch(String),
    /// Stem and branch differ in parity and never pair in the cycle.
    InvalidPair { stem: Stem, branch: Branch },
    /// A four-pillar string could not be parsed.
    InvalidGanZhiString(String),
    /// Out-of-domain numeric input.
    InvalidInput(&'static str),
}

impl Display for BaziError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStem(s) => write!(f, "invalid heavenly stem: {s:?}"),
            Self::InvalidBranch(s) => write!(f, "invalid earthly branch: {s:?}"),
            Self::InvalidPair { stem, branch } => {
                write!(f, "{stem}{branch} is not a sexagenary pair")
            }
            Self::InvalidGanZhiString(s) => write!(f, "invalid four-pillar string: {s}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for BaziError {}
