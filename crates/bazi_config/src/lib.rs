//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields a usable configuration. `load` parses and validates in one step.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors from reading or validating a configuration.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    Io(String),
    /// The file is not valid JSON for [`EngineConfig`].
    Parse(String),
    /// A field is outside its domain.
    Invalid(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "config I/O error: {msg}"),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for ConfigError {}

/// Engine-wide settings shared by the search layer, facade and CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Late-night hour rule: 1 moves the day at 23:00, 2 at midnight.
    pub sect: u8,
    /// Commencement school: 1 days and double-hours, 2 minutes.
    pub yun_sect: u8,
    /// UTC offset of civil times supplied by callers, in hours.
    pub utc_offset_hours: f64,
    pub da_yun_count: usize,
    pub xiao_yun_count: usize,
    /// Annual periods listed from the commencement year.
    pub liu_nian_span: usize,
    /// First year of the arithmetic fallback scan.
    pub year_scan_min: i32,
    /// Years past the current year covered by both matcher tiers.
    pub year_scan_ahead: i32,
    /// First year searched by the calendar-backed matcher.
    pub search_base_year: i32,
    /// Commencement estimate when the jie distance cannot be resolved.
    pub default_commencement_years: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sect: 2,
            yun_sect: 1,
            utc_offset_hours: 8.0,
            da_yun_count: 10,
            xiao_yun_count: 10,
            liu_nian_span: 10,
            year_scan_min: 1700,
            year_scan_ahead: 120,
            search_base_year: 1,
            default_commencement_years: 5,
        }
    }
}

impl EngineConfig {
    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// `load` when a path is given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.sect, 1 | 2) {
            return Err(ConfigError::Invalid("sect must be 1 or 2"));
        }
        if !matches!(self.yun_sect, 1 | 2) {
            return Err(ConfigError::Invalid("yun_sect must be 1 or 2"));
        }
        if !self.utc_offset_hours.is_finite() || self.utc_offset_hours.abs() > 14.0 {
            return Err(ConfigError::Invalid("utc_offset_hours must be within ±14"));
        }
        if self.da_yun_count == 0 || self.da_yun_count > 20 {
            return Err(ConfigError::Invalid("da_yun_count must be in 1..=20"));
        }
        if self.xiao_yun_count > 20 {
            return Err(ConfigError::Invalid("xiao_yun_count must be at most 20"));
        }
        if self.liu_nian_span == 0 || self.liu_nian_span > 200 {
            return Err(ConfigError::Invalid("liu_nian_span must be in 1..=200"));
        }
        if !(1..=3000).contains(&self.year_scan_min) {
            return Err(ConfigError::Invalid("year_scan_min must be in 1..=3000"));
        }
        if !(0..=1000).contains(&self.year_scan_ahead) {
            return Err(ConfigError::Invalid("year_scan_ahead must be in 0..=1000"));
        }
        if !(1..=3000).contains(&self.search_base_year) {
            return Err(ConfigError::Invalid("search_base_year must be in 1..=3000"));
        }
        if self.default_commencement_years > 12 {
            return Err(ConfigError::Invalid(
                "default_commencement_years must be at most 12",
            ));
        }
        Ok(())
    }
}
