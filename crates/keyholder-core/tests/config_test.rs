//! Tests for the Keyholder configuration system.

use std::sync::Mutex;

use keyholder_core::config::{CliOverrides, KeyholderConfig};
use keyholder_core::errors::ConfigError;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all KEYHOLDER_ env vars to prevent cross-test contamination.
fn clear_keyholder_env_vars() {
    for key in [
        "KEYHOLDER_LAYOUT_CENTER_X",
        "KEYHOLDER_LAYOUT_CENTER_Y",
        "KEYHOLDER_LAYOUT_PERSON_RADIUS",
        "KEYHOLDER_LAYOUT_MODULE_RADIUS",
        "KEYHOLDER_SIMULATION_CRITICAL_WEEKS",
        "KEYHOLDER_SIMULATION_HIGH_WEEKS",
        "KEYHOLDER_SIMULATION_BASELINE_WEEKS",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_keyholder_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("keyholder.toml"),
        r#"
[layout]
person_radius = 250.0
module_radius = 120.0

[simulation]
critical_recovery_weeks = 10
baseline_recovery_weeks = 3
"#,
    )
    .unwrap();

    std::env::set_var("KEYHOLDER_LAYOUT_PERSON_RADIUS", "260");
    std::env::set_var("KEYHOLDER_SIMULATION_BASELINE_WEEKS", "4");

    let cli = CliOverrides {
        baseline_recovery_weeks: Some(1),
        ..Default::default()
    };

    let config = KeyholderConfig::load(dir.path(), Some(&cli)).unwrap();

    // Env beats project
    assert_eq!(config.layout.person_radius, Some(260.0));
    // Project beats defaults
    assert_eq!(config.layout.module_radius, Some(120.0));
    assert_eq!(config.simulation.effective_critical_recovery_weeks(), 10);
    // CLI beats env
    assert_eq!(config.simulation.effective_baseline_recovery_weeks(), 1);
    // Untouched values fall back to defaults
    assert_eq!(config.simulation.effective_high_recovery_weeks(), 4);

    clear_keyholder_env_vars();
}

#[test]
fn test_load_without_files_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_keyholder_env_vars();

    let dir = tempdir();
    let config = KeyholderConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.layout.effective_center(), (400.0, 300.0));
    assert_eq!(config.layout.effective_person_radius(), 180.0);
    assert_eq!(config.layout.effective_module_radius(), 100.0);
    assert_eq!(config.layout.effective_edge_high_strength(), 80);
    assert_eq!(config.layout.effective_edge_medium_strength(), 50);
    assert_eq!(config.simulation.effective_critical_recovery_weeks(), 8);
    assert_eq!(config.simulation.effective_high_recovery_weeks(), 4);
    assert_eq!(config.simulation.effective_baseline_recovery_weeks(), 2);
}

#[test]
fn test_unparseable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_keyholder_env_vars();

    let dir = tempdir();
    std::env::set_var("KEYHOLDER_SIMULATION_HIGH_WEEKS", "lots");

    let config = KeyholderConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.simulation.high_recovery_weeks, None);

    clear_keyholder_env_vars();
}

#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_keyholder_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("keyholder.toml"), "not valid toml {{{{").unwrap();

    match KeyholderConfig::load(dir.path(), None) {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_inverted_radii_rejected() {
    let result = KeyholderConfig::from_toml(
        r#"
[layout]
person_radius = 90.0
module_radius = 100.0
"#,
    );
    match result {
        Err(ConfigError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "layout.person_radius");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn test_non_positive_radius_rejected() {
    assert!(KeyholderConfig::from_toml("[layout]\nmodule_radius = 0.0\n").is_err());
    assert!(KeyholderConfig::from_toml("[layout]\nedge_stroke_divisor = -1.0\n").is_err());
}

#[test]
fn test_edge_thresholds_must_be_ordered() {
    let result = KeyholderConfig::from_toml(
        r#"
[layout]
edge_high_strength = 40
edge_medium_strength = 60
"#,
    );
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_unknown_keys_ignored() {
    let config = KeyholderConfig::from_toml(
        r#"
[layout]
person_radius = 200.0
zoom = 1.5

[presentation]
theme = "dark"
"#,
    )
    .unwrap();
    assert_eq!(config.layout.person_radius, Some(200.0));
}

#[test]
fn test_toml_round_trip_preserves_values() {
    let config = KeyholderConfig::from_toml(
        r#"
[layout]
center_x = 500.0
center_y = 350.0

[simulation]
high_recovery_weeks = 6
"#,
    )
    .unwrap();

    let reparsed = KeyholderConfig::from_toml(&config.to_toml().unwrap()).unwrap();
    assert_eq!(reparsed, config);
}
