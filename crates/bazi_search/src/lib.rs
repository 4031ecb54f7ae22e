//! Calendar-backed orchestration for the bazi engine.
//!
//! This crate provides:
//! - The [`CalendarBackend`] seam and its built-in [`AstronomicalCalendar`]
//! - Four pillars of a civil moment under either late-night-hour school
//! - Commencement (QiYun) from the birth-to-jie distance, with an estimate
//!   when the calendar cannot supply one
//! - Chart builders for solar, lunar and literal stem/branch input
//! - Fortune periods dated from the birth moment, down to days and
//!   double hours
//! - Two-tier year resolution: calendar search, then a year-pillar scan
//!
//! Every fallback to a weaker answer is reported with `tracing::warn!`.

pub mod calendar;
pub mod chart;
pub mod error;
pub mod fortune;
pub mod pillars;
pub mod qiyun;
pub mod year_match;

pub use calendar::{AstronomicalCalendar, CalendarBackend};
pub use chart::{BirthChart, chart_from_ganzhi, chart_from_lunar, chart_from_solar};
pub use error::{CalendarError, SearchError};
pub use fortune::{fortune_for_birth, fortune_options, liu_ri_for_month, liu_shi_for_date};
pub use pillars::{Sect, day_pillar, hour_pillar, hour_pillar_at, month_pillar, pillars_at};
pub use qiyun::{commencement_or_estimate, resolve_commencement};
pub use year_match::{MatchTier, YearMatches, YearResolver, current_year};
