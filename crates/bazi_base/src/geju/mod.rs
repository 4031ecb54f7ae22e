//! Pattern (GeJu) resolution.
//!
//! Detection collects every qualifying pattern with a strength and a
//! table-driven priority; resolution ranks them and always yields a main
//! pattern; the useful god, factors and period readings are keyed on the
//! main pattern's name.

pub mod config;
pub mod detect;
pub mod effect;
pub mod factors;
pub mod resolve;
pub mod trend;
pub mod yongshen;

pub use config::{ALL_PATTERNS, PatternName, PriorityRule, priority, priority_rule};
pub use detect::{Pattern, ShiShenProfile, builds_lu, builds_yuan, detect_candidates};
pub use effect::{
    EffectLevel, PatternReading, PeriodEffect, PeriodScope, base_level, pattern_analysis,
    period_effect,
};
pub use factors::{Factor, explain_factors};
pub use resolve::{PatternResolution, resolve};
pub use trend::{KeyYear, PatternTrend, TrendPoint, pattern_trend};
pub use yongshen::{UsefulGod, YongShen, select_useful_god};

use serde::Serialize;

use crate::chart::AnnotatedChart;

/// Everything the pattern layer says about a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeJuAnalysis {
    pub main: Pattern,
    pub assistants: Vec<Pattern>,
    pub yong_shen: YongShen,
    pub factors: Vec<Factor>,
    pub reading: PatternReading,
}

/// Detect, resolve and explain the chart's pattern.
pub fn analyze_patterns(chart: &AnnotatedChart) -> GeJuAnalysis {
    let level = chart.strength().level;
    let month_branch = chart.raw().month.branch();
    let PatternResolution { main, assistants } =
        resolve(detect_candidates(chart), level, month_branch);
    GeJuAnalysis {
        yong_shen: select_useful_god(main.name, level),
        factors: explain_factors(&main, chart),
        reading: pattern_analysis(main.name, level),
        main,
        assistants,
    }
}
