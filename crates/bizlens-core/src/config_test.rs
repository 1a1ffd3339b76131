use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("BIZLENS_AUTH_SALT", "test-salt");
    m
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(parse_environment("development"), Environment::Development);
    assert_eq!(parse_environment("test"), Environment::Test);
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_fails_without_auth_salt() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "BIZLENS_AUTH_SALT"),
        "expected MissingEnvVar(BIZLENS_AUTH_SALT), got: {result:?}"
    );
}

#[test]
fn build_app_config_applies_defaults() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).expect("config");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(
        cfg.verticals_path,
        std::path::PathBuf::from("./config/verticals.yaml")
    );
    assert!(cfg.persist_snapshots);
    assert!(cfg.mock_seed.is_none());
    assert_eq!(cfg.demo_tick_ms, 150);
    assert_eq!(cfg.demo_ticks_per_step, 5);
    assert_eq!(cfg.demo_summary_delay_ms, 4000);
    assert_eq!(cfg.sources.timeout_secs, 10);
    assert_eq!(cfg.sources.user_agent, "bizlens/0.1 (demo-intelligence)");
    assert!(cfg.sources.places_api_key.is_none());
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = full_env();
    map.insert("BIZLENS_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BIZLENS_BIND_ADDR"),
        "expected InvalidEnvVar(BIZLENS_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn mock_seed_override_is_parsed() {
    let mut map = full_env();
    map.insert("BIZLENS_MOCK_SEED", "42");
    let cfg = build_app_config(lookup_from_map(&map)).expect("config");
    assert_eq!(cfg.mock_seed, Some(42));
}

#[test]
fn mock_seed_invalid_is_rejected() {
    let mut map = full_env();
    map.insert("BIZLENS_MOCK_SEED", "forty-two");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BIZLENS_MOCK_SEED"),
        "expected InvalidEnvVar(BIZLENS_MOCK_SEED), got: {result:?}"
    );
}

#[test]
fn persist_snapshots_accepts_boolean_spellings() {
    for (raw, expected) in [("false", false), ("0", false), ("YES", true), ("1", true)] {
        let mut map = full_env();
        map.insert("BIZLENS_PERSIST_SNAPSHOTS", raw);
        let cfg = build_app_config(lookup_from_map(&map)).expect("config");
        assert_eq!(cfg.persist_snapshots, expected, "raw value {raw}");
    }
}

#[test]
fn persist_snapshots_rejects_garbage() {
    let mut map = full_env();
    map.insert("BIZLENS_PERSIST_SNAPSHOTS", "sometimes");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BIZLENS_PERSIST_SNAPSHOTS"),
        "expected InvalidEnvVar(BIZLENS_PERSIST_SNAPSHOTS), got: {result:?}"
    );
}

#[test]
fn zero_ticks_per_step_is_rejected() {
    let mut map = full_env();
    map.insert("BIZLENS_DEMO_TICKS_PER_STEP", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BIZLENS_DEMO_TICKS_PER_STEP"),
        "expected InvalidEnvVar(BIZLENS_DEMO_TICKS_PER_STEP), got: {result:?}"
    );
}

#[test]
fn blank_api_keys_are_treated_as_missing() {
    let mut map = full_env();
    map.insert("BIZLENS_REVIEWS_API_KEY", "   ");
    map.insert("BIZLENS_PLACES_API_KEY", "places-secret");
    let cfg = build_app_config(lookup_from_map(&map)).expect("config");
    assert!(cfg.sources.reviews_api_key.is_none());
    assert_eq!(cfg.sources.places_api_key.as_deref(), Some("places-secret"));
}

#[test]
fn debug_output_redacts_secrets() {
    let mut map = full_env();
    map.insert("BIZLENS_SOCIAL_API_KEY", "social-secret");
    let cfg = build_app_config(lookup_from_map(&map)).expect("config");
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("test-salt"));
    assert!(!rendered.contains("social-secret"));
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn source_settings_do_not_need_auth_salt() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("BIZLENS_REVIEWS_API_KEY", " rk-123 ");
    map.insert("BIZLENS_SOURCE_TIMEOUT_SECS", "3");
    let sources = build_source_settings(&lookup_from_map(&map)).expect("sources");
    assert_eq!(sources.timeout_secs, 3);
    assert_eq!(sources.reviews_api_key.as_deref(), Some("rk-123"));
    assert!(sources.places_api_key.is_none());
}

#[test]
fn source_settings_reject_bad_timeout() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("BIZLENS_SOURCE_TIMEOUT_SECS", "soon");
    let result = build_source_settings(&lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BIZLENS_SOURCE_TIMEOUT_SECS")
    );
}
