//! Arithmetic year matching over the 60-year cycle.
//!
//! `year_to_ganzhi` is many-to-one with period 60; the functions here
//! enumerate its fibres. Only the year pillar is checked: matching the
//! month, day and hour pillars needs a calendar and lives in the search
//! layer, which falls back to [`scan_matching_years`] when that fails.

use std::ops::RangeInclusive;

use crate::branch::Branch;
use crate::error::BaziError;
use crate::ganzhi::{CYCLE_LEN, GanZhi};
use crate::parse::{parse_ganzhi, split_pillar_tokens};
use crate::stem::Stem;

/// Year pillar of a sexagenary year.
pub const fn year_to_ganzhi(year: i32) -> GanZhi {
    GanZhi::of_year(year)
}

/// True when `year` carries the given stem and branch.
pub const fn validate_year_match(year: i32, stem: Stem, branch: Branch) -> bool {
    let gz = year_to_ganzhi(year);
    gz.stem().index() == stem.index() && gz.branch().index() == branch.index()
}

/// First year after `from_year` carrying `gz` (exactly one cycle later
/// when `from_year` itself carries it).
pub fn next_year_for_ganzhi(from_year: i32, gz: GanZhi) -> i32 {
    (1..=CYCLE_LEN as i32)
        .map(|k| from_year + k)
        .find(|&y| year_to_ganzhi(y) == gz)
        .unwrap_or(from_year + CYCLE_LEN as i32)
}

/// `(year, pillar)` for every year in `start..=end`.
pub fn year_ganzhi_range(start: i32, end: i32) -> Vec<(i32, GanZhi)> {
    (start..=end).map(|y| (y, year_to_ganzhi(y))).collect()
}

/// Years in `range` whose year pillar is `gz`, ascending.
///
/// Ignores month, day and hour entirely.
pub fn scan_matching_years(gz: GanZhi, range: RangeInclusive<i32>) -> Vec<i32> {
    range
        .filter(|&y| validate_year_match(y, gz.stem(), gz.branch()))
        .collect()
}

/// Candidate closest to `target`; on equal distance the earlier entry
/// in `candidates` wins.
pub fn most_likely_year(candidates: &[i32], target: i32) -> Option<i32> {
    let mut best: Option<(i32, i64)> = None;
    for &year in candidates {
        let distance = (year as i64 - target as i64).abs();
        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((year, distance)),
        }
    }
    best.map(|(year, _)| year)
}

/// A partially known chart: the year pillar and any of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PillarSpec {
    pub year: GanZhi,
    pub month: Option<GanZhi>,
    pub day: Option<GanZhi>,
    pub hour: Option<GanZhi>,
}

impl PillarSpec {
    pub const fn year_only(year: GanZhi) -> Self {
        Self {
            year,
            month: None,
            day: None,
            hour: None,
        }
    }

    /// True when month, day and hour are all given.
    pub const fn is_complete(&self) -> bool {
        self.month.is_some() && self.day.is_some() && self.hour.is_some()
    }

    /// Parse one to four tokens, year first. A "?", "-" or "*" token
    /// leaves that pillar unknown; the year must be given.
    pub fn parse(s: &str) -> Result<Self, BaziError> {
        let tokens = split_pillar_tokens(s);
        if tokens.is_empty() || tokens.len() > 4 {
            return Err(BaziError::InvalidGanZhiString(s.trim().to_owned()));
        }
        let mut parsed = [None; 4];
        for (slot, token) in parsed.iter_mut().zip(&tokens) {
            if !matches!(token.as_str(), "?" | "-" | "*" | "？") {
                *slot = Some(parse_ganzhi(token)?);
            }
        }
        let [year, month, day, hour] = parsed;
        let year = year.ok_or(BaziError::InvalidInput("year pillar is required"))?;
        Ok(Self {
            year,
            month,
            day,
            hour,
        })
    }
}

impl std::str::FromStr for PillarSpec {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
