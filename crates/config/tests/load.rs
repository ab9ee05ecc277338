use std::fs;

use lander_config::{ConfigError, GameConfig, load_config};

#[test]
fn defaults_match_lunar_settings() {
    let config = GameConfig::default();
    assert_eq!(config.gravity_m_s2, 1.6);
    assert_eq!(config.engine_force_m_s2, 3.0);
    assert_eq!(config.initial_fuel, 50);
    assert!(!config.display_delta_v);
    assert_eq!(config.display_mode_label(), "m/s");
}

#[test]
fn partial_toml_keeps_remaining_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("lander.toml");
    fs::write(&path, "gravity_m_s2 = 3.7\ndisplay_delta_v = true\n").unwrap();

    let config = load_config(&path).expect("toml config");
    assert_eq!(config.gravity_m_s2, 3.7);
    assert_eq!(config.engine_force_m_s2, 3.0);
    assert_eq!(config.initial_fuel, 50);
    assert_eq!(config.display_mode_label(), "Delta V");
}

#[test]
fn yaml_files_are_accepted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("lander.yaml");
    fs::write(&path, "engine_force_m_s2: 5.5\ninitial_fuel: 20\n").unwrap();

    let config = load_config(&path).expect("yaml config");
    assert_eq!(config.engine_force_m_s2, 5.5);
    assert_eq!(config.initial_fuel, 20);
    assert_eq!(config.gravity_m_s2, 1.6);
}

#[test]
fn malformed_files_report_parser() {
    let dir = tempfile::tempdir().expect("tempdir");
    let toml_path = dir.path().join("bad.toml");
    fs::write(&toml_path, "initial_fuel = \"lots\"\n").unwrap();
    assert!(matches!(load_config(&toml_path), Err(ConfigError::Toml(_))));

    let yaml_path = dir.path().join("bad.yaml");
    fs::write(&yaml_path, "initial_fuel: [1, 2]\n").unwrap();
    assert!(matches!(load_config(&yaml_path), Err(ConfigError::Parse(_))));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_config(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
