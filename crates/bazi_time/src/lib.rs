//! Calendar arithmetic for the bazi engine.
//!
//! This crate provides:
//! - Julian Date ↔ proleptic Gregorian conversions and ΔT
//! - `CivilTime`, a wall-clock moment at a fixed UTC offset
//! - Low-precision apparent solar longitude and new-moon instants
//! - The 24 solar terms, jie-term navigation and the 立春 year boundary
//! - Chinese lunisolar calendar conversion with leap months

pub mod civil_time;
pub mod error;
pub mod julian;
pub mod lunar;
pub mod moon_phase;
pub mod solar_term;
pub mod sun;

pub use civil_time::CivilTime;
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, date_from_day_number, day_number, days_in_month,
    is_leap_year, jd_to_calendar,
};
pub use lunar::{LunarDate, LunarMonth, lunar_to_solar, solar_to_lunar};
pub use moon_phase::{next_new_moon, prev_new_moon};
pub use solar_term::{
    ALL_SOLAR_TERMS, MAX_YEAR, MIN_YEAR, SolarTerm, month_branch_index_at, next_jie, prev_jie,
    solar_term_jd, solar_terms_of_year, solar_year_at,
};
pub use sun::sun_apparent_longitude;
