use crate::app_config::{AppConfig, Environment, SourceSettings};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Load only the outbound source settings (`.env` included). Tools that
/// never serve pages or hash passwords use this instead of
/// [`load_app_config`], so `BIZLENS_AUTH_SALT` is not required.
///
/// # Errors
///
/// Returns `ConfigError` if a source variable holds an invalid value.
pub fn load_source_settings() -> Result<SourceSettings, ConfigError> {
    dotenvy::dotenv().ok();
    build_source_settings(&|key: &str| std::env::var(key))
}

fn build_source_settings<F>(lookup: &F) -> Result<SourceSettings, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    let timeout_secs = or_default("BIZLENS_SOURCE_TIMEOUT_SECS", "10")
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "BIZLENS_SOURCE_TIMEOUT_SECS".to_string(),
            reason: e.to_string(),
        })?;

    Ok(SourceSettings {
        timeout_secs,
        user_agent: or_default("BIZLENS_USER_AGENT", "bizlens/0.1 (demo-intelligence)"),
        news_base_url: or_default("BIZLENS_NEWS_BASE_URL", "https://news.google.com"),
        places_base_url: or_default("BIZLENS_PLACES_BASE_URL", "https://api.placesgrid.io"),
        reviews_base_url: or_default("BIZLENS_REVIEWS_BASE_URL", "https://api.reviewpulse.io"),
        social_base_url: or_default("BIZLENS_SOCIAL_BASE_URL", "https://api.socialscope.io"),
        enrichment_base_url: or_default(
            "BIZLENS_ENRICHMENT_BASE_URL",
            "https://api.firmographics.io",
        ),
        places_api_key: optional("BIZLENS_PLACES_API_KEY"),
        reviews_api_key: optional("BIZLENS_REVIEWS_API_KEY"),
        social_api_key: optional("BIZLENS_SOCIAL_API_KEY"),
        enrichment_api_key: optional("BIZLENS_ENRICHMENT_API_KEY"),
    })
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing and validation live here, decoupled from the real environment so
/// tests can drive it with a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u8 = |var: &str, default: &str| -> Result<u8, ConfigError> {
        or_default(var, default)
            .parse::<u8>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        match or_default(var, default).to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            other => Err(invalid(var, format!("expected a boolean, got '{other}'"))),
        }
    };

    let auth_salt = require("BIZLENS_AUTH_SALT")?;

    let env = parse_environment(&or_default("BIZLENS_ENV", "development"));
    let bind_addr = parse_addr("BIZLENS_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("BIZLENS_LOG_LEVEL", "info");
    let verticals_path = PathBuf::from(or_default(
        "BIZLENS_VERTICALS_PATH",
        "./config/verticals.yaml",
    ));
    let data_dir = PathBuf::from(or_default("BIZLENS_DATA_DIR", "./data"));
    let persist_snapshots = parse_bool("BIZLENS_PERSIST_SNAPSHOTS", "true")?;

    let mock_seed = match optional("BIZLENS_MOCK_SEED") {
        Some(raw) => Some(
            raw.parse::<u64>()
                .map_err(|e| invalid("BIZLENS_MOCK_SEED", e.to_string()))?,
        ),
        None => None,
    };

    let demo_tick_ms = parse_u64("BIZLENS_DEMO_TICK_MS", "150")?;
    let demo_ticks_per_step = parse_u8("BIZLENS_DEMO_TICKS_PER_STEP", "5")?;
    if demo_ticks_per_step == 0 {
        return Err(invalid(
            "BIZLENS_DEMO_TICKS_PER_STEP",
            "must be at least 1".to_string(),
        ));
    }
    let demo_summary_delay_ms = parse_u64("BIZLENS_DEMO_SUMMARY_DELAY_MS", "4000")?;

    let sources = build_source_settings(&lookup)?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        verticals_path,
        data_dir,
        persist_snapshots,
        auth_salt,
        mock_seed,
        demo_tick_ms,
        demo_ticks_per_step,
        demo_summary_delay_ms,
        sources,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
