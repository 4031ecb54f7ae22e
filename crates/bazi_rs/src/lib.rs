//! Convenience facade for the bazi engine.
//!
//! Wraps chart construction, pattern analysis, stars and fortune periods
//! behind one call per input kind. Free functions use a process-wide
//! [`Engine`] that [`init`] configures; without `init` the defaults apply.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use bazi_rs::*;
//!
//! let date: BirthDate = "1990-06-15 08:45".parse()?;
//! let full = analyze_solar(&date, Gender::Female)?;
//! println!("{} {}", full.chart.raw(), full.geju.main.name);
//! ```

pub mod convenience;
pub mod date;
pub mod engine;
pub mod global;

pub use convenience::{
    analyze_ganzhi, analyze_lunar, analyze_solar, find_most_likely_year, matching_years,
};
pub use date::BirthDate;
pub use engine::{Engine, FullChart};
pub use global::{init, is_initialized};

// Re-export the types callers need so they do not depend on the
// underlying crates directly.
pub use bazi_base::{
    ALL_STARS, AnnotatedChart, Branch, Fortune, GanZhi, GeJuAnalysis, Gender, LiuRi, LiuShi,
    PatternName, PillarSpec, SolarDate, Star, StarCategory, Stem, next_year_for_ganzhi,
    parse_four_pillars, star_info, year_to_ganzhi,
};
pub use bazi_base::shensha::{StarInfo, category_of, strip_prefix};
pub use bazi_base::year_match::year_ganzhi_range;
pub use bazi_config::EngineConfig;
pub use bazi_search::{MatchTier, SearchError, Sect, YearMatches};
pub use bazi_time::LunarDate;
