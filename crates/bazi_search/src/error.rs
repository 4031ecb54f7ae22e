//! Error types for the orchestration layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bazi_base::BaziError;
use bazi_config::ConfigError;
use bazi_time::TimeError;

/// Failure reported by a calendar backend.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// The backend could not complete the computation.
    Time(TimeError),
    /// The request lies outside what the backend covers.
    Unsupported(String),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "calendar error: {e}"),
            Self::Unsupported(msg) => write!(f, "calendar cannot resolve: {msg}"),
        }
    }
}

impl Error for CalendarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Unsupported(_) => None,
        }
    }
}

impl From<TimeError> for CalendarError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

/// Errors from chart construction, fortune generation and year resolution.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Malformed pillar or chart input.
    Bazi(BaziError),
    /// Malformed or out-of-range date.
    Time(TimeError),
    /// The calendar backend failed and no fallback applies.
    Calendar(CalendarError),
    /// Configuration rejected.
    Config(ConfigError),
    /// Request is well-formed but cannot be served.
    InvalidRequest(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bazi(e) => write!(f, "{e}"),
            Self::Time(e) => write!(f, "{e}"),
            Self::Calendar(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::InvalidRequest(msg) => write!(f, "invalid request: {msg}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Bazi(e) => Some(e),
            Self::Time(e) => Some(e),
            Self::Calendar(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::InvalidRequest(_) => None,
        }
    }
}

impl From<BaziError> for SearchError {
    fn from(e: BaziError) -> Self {
        Self::Bazi(e)
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<CalendarError> for SearchError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}

impl From<ConfigError> for SearchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_lower_layers() {
        let e: SearchError = TimeError::OutOfRange(5000).into();
        assert!(e.to_string().contains("5000"));
        let e: SearchError = CalendarError::from(TimeError::NoConvergence("x")).into();
        assert!(matches!(e, SearchError::Calendar(CalendarError::Time(_))));
        assert!(e.source().is_some());
    }
}
