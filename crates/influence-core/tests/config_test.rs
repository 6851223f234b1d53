//! Tests for the layered configuration.

use std::sync::Mutex;

use influence_core::config::{ConfigOverrides, HistoryShape, InfluenceConfig};
use influence_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all INFLUENCE_ env vars to prevent cross-test contamination.
fn clear_influence_env_vars() {
    for key in [
        "INFLUENCE_DEFAULT_PROBABILITY",
        "INFLUENCE_RNG_SEED",
        "INFLUENCE_HISTORY_SHAPE",
        "INFLUENCE_ESTIMATE_TRIALS",
        "INFLUENCE_LOG_LEVEL",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = InfluenceConfig::default();
    assert_eq!(config.cascade.effective_default_probability(), 0.3);
    assert_eq!(config.cascade.effective_history_shape(), HistoryShape::TwoPerRound);
    assert_eq!(config.cascade.effective_estimate_trials(), 100);
    assert_eq!(config.cascade.rng_seed, None);
    assert_eq!(config.observability.effective_log_level(), "info");
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let config = InfluenceConfig::from_toml(
        r#"
[cascade]
rng_seed = 1234
"#,
    )
    .unwrap();
    assert_eq!(config.cascade.rng_seed, Some(1234));
    assert_eq!(config.cascade.effective_default_probability(), 0.3);
    assert_eq!(config.observability.effective_log_level(), "info");
}

#[test]
fn history_shape_parses_from_toml() {
    let config = InfluenceConfig::from_toml(
        r#"
[cascade]
history_shape = "collapse_terminal"

[observability]
log_level = "debug"
"#,
    )
    .unwrap();
    assert_eq!(
        config.cascade.effective_history_shape(),
        HistoryShape::CollapseTerminal
    );
    assert_eq!(config.observability.effective_log_level(), "debug");
}

#[test]
fn out_of_range_probability_rejected() {
    let err = InfluenceConfig::from_toml("[cascade]\ndefault_probability = 1.5\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "cascade.default_probability");
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn zero_trials_rejected() {
    let err = InfluenceConfig::from_toml("[cascade]\nestimate_trials = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "cascade.estimate_trials"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = InfluenceConfig::from_toml("[cascade\nrng_seed = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));

    let err = InfluenceConfig::from_toml("[cascade]\nhistory_shape = \"sideways\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn history_shape_string_forms() {
    assert_eq!("two_per_round".parse::<HistoryShape>(), Ok(HistoryShape::TwoPerRound));
    assert_eq!(
        "collapse_terminal".parse::<HistoryShape>(),
        Ok(HistoryShape::CollapseTerminal)
    );
    assert!("both".parse::<HistoryShape>().is_err());
    assert_eq!(HistoryShape::CollapseTerminal.to_string(), "collapse_terminal");
}

#[test]
fn toml_round_trip() {
    let mut config = InfluenceConfig::default();
    config.cascade.default_probability = Some(0.6);
    config.cascade.history_shape = Some(HistoryShape::CollapseTerminal);
    config.observability.log_level = Some("warn".to_string());

    let text = config.to_toml().unwrap();
    let back = InfluenceConfig::from_toml(&text).unwrap();
    assert_eq!(back.cascade.default_probability, Some(0.6));
    assert_eq!(back.cascade.history_shape, Some(HistoryShape::CollapseTerminal));
    assert_eq!(back.observability.log_level.as_deref(), Some("warn"));
}

#[test]
fn load_without_project_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_influence_env_vars();

    let dir = tempdir();
    let config = InfluenceConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.cascade.default_probability, None);
    assert_eq!(config.cascade.effective_estimate_trials(), 100);
}

#[test]
fn layered_resolution_overrides_beat_env_beat_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_influence_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("influence.toml"),
        r#"
[cascade]
default_probability = 0.2
rng_seed = 5
estimate_trials = 40

[observability]
log_level = "warn"
"#,
    )
    .unwrap();

    std::env::set_var("INFLUENCE_RNG_SEED", "77");
    std::env::set_var("INFLUENCE_LOG_LEVEL", "debug");

    let overrides = ConfigOverrides {
        log_level: Some("trace".to_string()),
        ..Default::default()
    };
    let config = InfluenceConfig::load(dir.path(), Some(&overrides)).unwrap();

    // File only.
    assert_eq!(config.cascade.default_probability, Some(0.2));
    assert_eq!(config.cascade.estimate_trials, Some(40));
    // Env beats file.
    assert_eq!(config.cascade.rng_seed, Some(77));
    // Overrides beat env.
    assert_eq!(config.observability.effective_log_level(), "trace");

    clear_influence_env_vars();
}

#[test]
fn overrides_cover_every_cascade_key() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_influence_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("influence.toml"),
        "[cascade]\nestimate_trials = 40\nhistory_shape = \"two_per_round\"\n",
    )
    .unwrap();
    std::env::set_var("INFLUENCE_ESTIMATE_TRIALS", "60");

    let overrides = ConfigOverrides {
        default_probability: Some(0.9),
        rng_seed: Some(3),
        history_shape: Some(HistoryShape::CollapseTerminal),
        estimate_trials: Some(250),
        log_level: None,
    };
    let config = InfluenceConfig::load(dir.path(), Some(&overrides)).unwrap();

    assert_eq!(config.cascade.default_probability, Some(0.9));
    assert_eq!(config.cascade.rng_seed, Some(3));
    assert_eq!(config.cascade.history_shape, Some(HistoryShape::CollapseTerminal));
    assert_eq!(config.cascade.effective_estimate_trials(), 250);

    clear_influence_env_vars();
}

#[test]
fn zero_trial_override_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_influence_env_vars();

    let dir = tempdir();
    let overrides = ConfigOverrides {
        estimate_trials: Some(0),
        ..Default::default()
    };
    assert!(matches!(
        InfluenceConfig::load(dir.path(), Some(&overrides)),
        Err(ConfigError::ValidationFailed { ref field, .. }) if field == "cascade.estimate_trials"
    ));
}

#[test]
fn unparseable_env_values_are_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_influence_env_vars();

    std::env::set_var("INFLUENCE_RNG_SEED", "not-a-number");
    std::env::set_var("INFLUENCE_HISTORY_SHAPE", "collapse_terminal");

    let dir = tempdir();
    let config = InfluenceConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.cascade.rng_seed, None);
    assert_eq!(config.cascade.history_shape, Some(HistoryShape::CollapseTerminal));

    clear_influence_env_vars();
}

#[test]
fn env_value_out_of_range_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_influence_env_vars();

    std::env::set_var("INFLUENCE_DEFAULT_PROBABILITY", "-0.5");
    let dir = tempdir();
    let result = InfluenceConfig::load(dir.path(), None);
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));

    clear_influence_env_vars();
}

#[test]
fn malformed_project_file_reports_its_path() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_influence_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("influence.toml"), "[cascade\n").unwrap();
    match InfluenceConfig::load(dir.path(), None) {
        Err(ConfigError::ParseError { path, .. }) => assert!(path.ends_with("influence.toml")),
        other => panic!("expected ParseError, got {other:?}"),
    }
}
