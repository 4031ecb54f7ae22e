//! Two-tier year resolution.
//!
//! The calendar tier matches every given pillar and reports the civil
//! year of the earliest matching moment in each cycle. When the calendar
//! fails or finds nothing, the scan tier lists years by year pillar only.
//! The scan ignores month, day and hour, so its answer is tagged
//! [`MatchTier::YearPillarOnly`] and may contain years the full chart
//! never occurs in.

use bazi_base::{PillarSpec, most_likely_year, scan_matching_years};
use bazi_config::EngineConfig;
use bazi_time::CivilTime;
use chrono::Datelike;
use serde::Serialize;
use tracing::{debug, warn};

use crate::calendar::CalendarBackend;
use crate::error::{CalendarError, SearchError};
use crate::pillars::Sect;

/// Which tier produced a year list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchTier {
    /// Every given pillar was checked against the calendar.
    Calendar,
    /// Only the year pillar was checked.
    YearPillarOnly,
}

impl MatchTier {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Calendar => "历法反推",
            Self::YearPillarOnly => "仅按年柱推算",
        }
    }
}

impl Serialize for MatchTier {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Candidate years and the tier that found them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearMatches {
    /// Ascending.
    pub years: Vec<i32>,
    pub tier: MatchTier,
}

/// Current civil year from the system clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Calendar-first year resolver with an arithmetic fallback.
#[derive(Debug)]
pub struct YearResolver<'a, C: CalendarBackend + ?Sized> {
    calendar: &'a C,
    sect: Sect,
    base_year: i32,
    scan_min: i32,
    scan_ahead: i32,
    current_year: i32,
}

impl<'a, C: CalendarBackend + ?Sized> YearResolver<'a, C> {
    /// Resolver with the windows and sect of `config`, anchored on the
    /// current year.
    pub fn new(calendar: &'a C, config: &EngineConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            calendar,
            sect: Sect::from_code(config.sect)?,
            base_year: config.search_base_year,
            scan_min: config.year_scan_min,
            scan_ahead: config.year_scan_ahead,
            current_year: current_year(),
        })
    }

    pub fn with_sect(mut self, sect: Sect) -> Self {
        self.sect = sect;
        self
    }

    /// Anchor both windows on `year` instead of the clock.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    pub fn sect(&self) -> Sect {
        self.sect
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    fn last_year(&self) -> i32 {
        self.current_year + self.scan_ahead
    }

    /// Calendar tier only: matching moments, earliest per cycle.
    pub fn calendar_moments(&self, spec: &PillarSpec) -> Result<Vec<CivilTime>, CalendarError> {
        let last = self.last_year();
        self.calendar.resolve(spec, self.sect, self.base_year..=last)
    }

    /// Scan tier only: years in the fallback window carrying the year pillar.
    pub fn scan_years(&self, spec: &PillarSpec) -> Vec<i32> {
        scan_matching_years(spec.year, self.scan_min..=self.last_year())
    }

    /// Years consistent with `spec`, calendar tier first.
    pub fn matching_years(&self, spec: &PillarSpec) -> YearMatches {
        match self.calendar_moments(spec) {
            Ok(moments) if !moments.is_empty() => {
                let years: Vec<i32> = moments.iter().map(|t| t.year).collect();
                debug!(?spec, ?years, "calendar matched years");
                return YearMatches {
                    years,
                    tier: MatchTier::Calendar,
                };
            }
            Ok(_) => warn!(
                ?spec,
                "calendar found no matching moment, scanning by year pillar only"
            ),
            Err(e) => warn!(
                ?spec,
                error = %e,
                "calendar failed, scanning by year pillar only"
            ),
        }
        YearMatches {
            years: self.scan_years(spec),
            tier: MatchTier::YearPillarOnly,
        }
    }

    /// Matching year closest to `hint`, or to the current year without
    /// one. Equal distances keep the earlier candidate in list order.
    pub fn find_most_likely_year(&self, spec: &PillarSpec, hint: Option<i32>) -> Option<i32> {
        let matches = self.matching_years(spec);
        most_likely_year(&matches.years, hint.unwrap_or(self.current_year))
    }

    /// Calendar moment whose year is closest to `hint` (or the current
    /// year). `None` when the calendar fails or finds nothing.
    pub fn most_likely_moment(&self, spec: &PillarSpec, hint: Option<i32>) -> Option<CivilTime> {
        let moments = match self.calendar_moments(spec) {
            Ok(m) => m,
            Err(e) => {
                warn!(?spec, error = %e, "calendar failed, birth moment unknown");
                return None;
            }
        };
        let years: Vec<i32> = moments.iter().map(|t| t.year).collect();
        let year = most_likely_year(&years, hint.unwrap_or(self.current_year))?;
        moments.into_iter().find(|t| t.year == year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::AstronomicalCalendar;

    #[test]
    fn tier_names_serialize() {
        assert_eq!(MatchTier::Calendar.name(), "历法反推");
        let json = serde_json::to_string(&MatchTier::YearPillarOnly).unwrap();
        assert_eq!(json, "\"仅按年柱推算\"");
    }

    #[test]
    fn windows_follow_config() {
        let cal = AstronomicalCalendar::default();
        let config = EngineConfig {
            year_scan_min: 1900,
            year_scan_ahead: 0,
            ..EngineConfig::default()
        };
        let r = YearResolver::new(&cal, &config).unwrap().with_current_year(2000);
        let spec: PillarSpec = "甲子".parse().unwrap();
        assert_eq!(r.scan_years(&spec), [1924, 1984]);
        assert_eq!(r.current_year(), 2000);
    }

    #[test]
    fn rejects_invalid_config() {
        let cal = AstronomicalCalendar::default();
        let config = EngineConfig {
            sect: 7,
            ..EngineConfig::default()
        };
        assert!(matches!(
            YearResolver::new(&cal, &config),
            Err(SearchError::Config(_))
        ));
    }
}
