//! Pure BaZi (Four Pillars) analysis, free of any calendar dependency
//! beyond jie-term dates for monthly periods.
//!
//! This crate provides:
//! - The sexagenary model: stems, branches, elements, pairs, hidden stems,
//!   NaYin, twelve growth stages, void branches and the Ten Gods
//! - Day-Master strength and the annotated four-pillar chart
//! - The ShenSha star classifier with categories, scores and combinations
//! - GeJu pattern detection, resolution, useful god and period readings
//! - Fortune periods: DaYun, XiaoYun, LiuNian, LiuYue, LiuRi and LiuShi
//! - Reverse matching of a year pillar to Gregorian years

pub mod branch;
pub mod chart;
pub mod combination;
pub mod dishi;
pub mod error;
pub mod fortune;
pub mod ganzhi;
pub mod geju;
pub mod hidden_stem;
pub mod nayin;
pub mod parse;
pub mod pillar;
mod serde_impls;
pub mod shensha;
pub mod shishen;
pub mod stem;
pub mod strength;
pub mod wuxing;
pub mod xunkong;
pub mod year_match;

pub use branch::{ALL_BRANCHES, Branch};
pub use chart::{AnnotatedChart, ExtraPillars, Gender, RawPillars};
pub use combination::{BranchGroup, BranchGroupKind, branch_groups, stem_combination};
pub use dishi::{DiShi, dishi};
pub use error::BaziError;
pub use fortune::{
    Commencement, DaYun, Direction, Fortune, FortuneOptions, LiuNian, LiuRi, LiuShi, LiuYue,
    MonthSpan, PeriodFacts, SolarDate, XiaoYun, YunSchool, build_fortune, generate_da_yun,
    generate_liu_nian, generate_liu_ri, generate_liu_shi, generate_liu_yue, generate_xiao_yun,
};
pub use ganzhi::{CYCLE_LEN, GanZhi, is_valid_pair};
pub use geju::{GeJuAnalysis, Pattern, PatternName, analyze_patterns};
pub use hidden_stem::{hidden_stems, main_qi};
pub use nayin::{nayin, nayin_element};
pub use parse::{parse_four_pillars, parse_ganzhi};
pub use pillar::{ALL_PILLAR_KINDS, Pillar, PillarKind};
pub use shensha::{ALL_STARS, Star, StarCategory, classify_pillar_stars, star_info};
pub use shishen::{ALL_SHISHEN, ShiShen, shishen};
pub use stem::{ALL_STEMS, Stem};
pub use strength::{StrengthAnalysis, StrengthLevel, day_master_strength};
pub use wuxing::{ALL_ELEMENTS, Element, ElementRelation, Polarity, relation};
pub use xunkong::xunkong;
pub use year_match::{
    PillarSpec, most_likely_year, next_year_for_ganzhi, scan_matching_years,
    validate_year_match, year_to_ganzhi,
};
