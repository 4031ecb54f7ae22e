//! Process-wide engine used by the free functions.

use std::sync::OnceLock;

use bazi_config::EngineConfig;
use bazi_search::SearchError;

use crate::engine::Engine;

static ENGINE: OnceLock<Engine> = OnceLock::new();

/// Install the global engine. Fails on an invalid config or when an
/// engine is already installed.
pub fn init(config: EngineConfig) -> Result<(), SearchError> {
    let engine = Engine::new(config)?;
    ENGINE
        .set(engine)
        .map_err(|_| SearchError::InvalidRequest("engine already initialized"))
}

pub fn is_initialized() -> bool {
    ENGINE.get().is_some()
}

/// The installed engine, or one with default settings on first use.
pub(crate) fn engine() -> &'static Engine {
    ENGINE.get_or_init(Engine::default)
}
