//! File-based configuration loading.

use std::io::Write;

use bazi_config::{ConfigError, EngineConfig};

/// A written config round-trips through `load`.
#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"sect": 1, "yun_sect": 2, "liu_nian_span": 30}}"#).unwrap();
    let c = EngineConfig::load(file.path()).unwrap();
    assert_eq!(c.sect, 1);
    assert_eq!(c.yun_sect, 2);
    assert_eq!(c.liu_nian_span, 30);
    assert_eq!(c.year_scan_min, 1700);
}

/// Pretty JSON written by the engine loads back unchanged.
#[test]
fn pretty_json_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.json");
    let original = EngineConfig {
        da_yun_count: 12,
        utc_offset_hours: 9.0,
        ..EngineConfig::default()
    };
    std::fs::write(&path, original.to_json_pretty().unwrap()).unwrap();
    assert_eq!(EngineConfig::load(&path), Ok(original));
}

/// A missing file is an I/O error, not a panic or a default.
#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    assert!(err.to_string().contains("absent.json"));
}

/// No path means defaults.
#[test]
fn no_path_means_defaults() {
    assert_eq!(EngineConfig::load_or_default(None), Ok(EngineConfig::default()));
}

/// Validation runs on load.
#[test]
fn invalid_file_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"da_yun_count": 0}}"#).unwrap();
    assert!(matches!(
        EngineConfig::load(file.path()),
        Err(ConfigError::Invalid(_))
    ));
}
