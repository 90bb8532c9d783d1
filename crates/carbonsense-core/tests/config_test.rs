//! Tests for the CarbonSense configuration system.

use std::collections::HashMap;

use carbonsense_core::config::{BasicCredentials, CarbonConfig, ProviderCredentials};
use carbonsense_core::errors::ConfigError;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_documented_values() {
    let config = CarbonConfig::default();
    assert_eq!(config.providers.grid_timeout_secs, 5);
    assert_eq!(config.providers.routing_timeout_secs, 10);
    assert_eq!(config.context.training_grid_intensity, 400.0);
    assert!((config.context.training_transport_factor - 0.150).abs() < 1e-12);
    assert_eq!(config.observability.log_level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let config = CarbonConfig::from_toml(
        r#"
[providers]
grid_timeout_secs = 3
uk_grid_url = "http://localhost:9000"

[observability]
json = false
"#,
    )
    .unwrap();
    assert_eq!(config.providers.grid_timeout_secs, 3);
    assert_eq!(config.providers.uk_grid_url, "http://localhost:9000");
    assert_eq!(config.providers.routing_timeout_secs, 10);
    assert!(!config.observability.json);
    assert_eq!(config.context.training_grid_intensity, 400.0);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = CarbonConfig::from_toml("[providers\ngrid_timeout_secs = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_timeout_fails_validation() {
    let config = CarbonConfig::from_toml("[providers]\nrouting_timeout_secs = 0\n").unwrap();
    let err = config.validate().unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "providers.routing_timeout_secs")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn non_positive_training_intensity_fails_validation() {
    let config = CarbonConfig::from_toml("[context]\ntraining_grid_intensity = 0.0\n").unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn env_overrides_take_priority_over_file_values() {
    let mut config = CarbonConfig::from_toml("[providers]\ngrid_timeout_secs = 3\n").unwrap();
    config.apply_env_overrides(lookup(&[
        ("CARBONSENSE_GRID_TIMEOUT_SECS", "7"),
        ("CARBONSENSE_LOG_LEVEL", "debug"),
        ("CARBONSENSE_LOG_JSON", "false"),
    ]));
    assert_eq!(config.providers.grid_timeout_secs, 7);
    assert_eq!(config.observability.log_level, "debug");
    assert!(!config.observability.json);
}

#[test]
fn env_overrides_both_training_constants() {
    let mut config = CarbonConfig::default();
    config.apply_env_overrides(lookup(&[
        ("CARBONSENSE_TRAINING_GRID_INTENSITY", "350"),
        ("CARBONSENSE_TRAINING_TRANSPORT_FACTOR", "0.17"),
    ]));
    assert_eq!(config.context.training_grid_intensity, 350.0);
    assert_eq!(config.context.training_transport_factor, 0.17);
    assert!(config.validate().is_ok());

    config.apply_env_overrides(lookup(&[("CARBONSENSE_TRAINING_TRANSPORT_FACTOR", "-1")]));
    assert!(config.validate().is_err());
}

#[test]
fn unparseable_env_override_is_ignored() {
    let mut config = CarbonConfig::default();
    config.apply_env_overrides(lookup(&[("CARBONSENSE_ROUTING_TIMEOUT_SECS", "soon")]));
    assert_eq!(config.providers.routing_timeout_secs, 10);
}

#[test]
fn load_reads_project_file() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("carbonsense.toml"),
        "[providers]\nweather_timeout_secs = 2\n",
    )
    .unwrap();
    let config = CarbonConfig::load(dir.path()).unwrap();
    assert_eq!(config.providers.weather_timeout_secs, 2);
}

#[test]
fn load_without_file_uses_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = CarbonConfig::load(dir.path()).unwrap();
    assert_eq!(config.providers.uk_grid_url, "https://api.carbonintensity.org.uk");
}

#[test]
fn watttime_credentials_split_at_first_colon() {
    let creds = BasicCredentials::parse("alice:pa:ss").unwrap();
    assert_eq!(creds.username, "alice");
    assert_eq!(creds.password, "pa:ss");
    assert!(BasicCredentials::parse("no-colon-here").is_none());
}

#[test]
fn credentials_from_lookup_treat_empty_as_absent() {
    let creds = ProviderCredentials::from_lookup(lookup(&[
        ("WATTTIME_API_KEY", "user:secret"),
        ("ELECTRICITYMAPS_API_KEY", ""),
        ("TOMTOM_API_KEY", "tt-key"),
    ]));
    assert_eq!(creds.watttime.as_ref().unwrap().username, "user");
    assert!(creds.electricitymaps_key.is_none());
    assert!(creds.has_california_grid());
    assert!(creds.has_routing());
    assert!(creds.openweather_key.is_none());
}

#[test]
fn credentials_debug_output_is_redacted() {
    let creds = ProviderCredentials::from_lookup(lookup(&[
        ("WATTTIME_API_KEY", "user:topsecret"),
        ("GOOGLE_MAPS_API_KEY", "gm-secret"),
    ]));
    let rendered = format!("{creds:?}");
    assert!(!rendered.contains("topsecret"));
    assert!(!rendered.contains("gm-secret"));
    assert!(rendered.contains("<set>"));
}
