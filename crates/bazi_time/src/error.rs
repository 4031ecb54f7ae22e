//! Error types for calendar and solar-term computations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar conversion or astronomical search.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar fields do not form a valid date or time.
    InvalidDate(String),
    /// Year lies outside the range the low-precision theories support.
    OutOfRange(i32),
    /// Iterative search did not converge.
    NoConvergence(&'static str),
    /// Lunar date does not exist (e.g. leap month absent in that year).
    NoSuchLunarDate(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::OutOfRange(year) => write!(f, "year {year} outside supported range"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
            Self::NoSuchLunarDate(msg) => write!(f, "no such lunar date: {msg}"),
        }
    }
}

impl Error for TimeError {}
