use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Base URLs, credentials and transport settings for the third-party data sources.
#[derive(Clone)]
pub struct SourceSettings {
    pub timeout_secs: u64,
    pub user_agent: String,
    pub news_base_url: String,
    pub places_base_url: String,
    pub reviews_base_url: String,
    pub social_base_url: String,
    pub enrichment_base_url: String,
    pub places_api_key: Option<String>,
    pub reviews_api_key: Option<String>,
    pub social_api_key: Option<String>,
    pub enrichment_api_key: Option<String>,
}

impl std::fmt::Debug for SourceSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |key: &Option<String>| key.as_ref().map(|_| "[redacted]");
        f.debug_struct("SourceSettings")
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("news_base_url", &self.news_base_url)
            .field("places_base_url", &self.places_base_url)
            .field("reviews_base_url", &self.reviews_base_url)
            .field("social_base_url", &self.social_base_url)
            .field("enrichment_base_url", &self.enrichment_base_url)
            .field("places_api_key", &redact(&self.places_api_key))
            .field("reviews_api_key", &redact(&self.reviews_api_key))
            .field("social_api_key", &redact(&self.social_api_key))
            .field("enrichment_api_key", &redact(&self.enrichment_api_key))
            .finish()
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub verticals_path: PathBuf,
    pub data_dir: PathBuf,
    pub persist_snapshots: bool,
    pub auth_salt: String,
    pub mock_seed: Option<u64>,
    pub demo_tick_ms: u64,
    pub demo_ticks_per_step: u8,
    pub demo_summary_delay_ms: u64,
    pub sources: SourceSettings,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("verticals_path", &self.verticals_path)
            .field("data_dir", &self.data_dir)
            .field("persist_snapshots", &self.persist_snapshots)
            .field("auth_salt", &"[redacted]")
            .field("mock_seed", &self.mock_seed)
            .field("demo_tick_ms", &self.demo_tick_ms)
            .field("demo_ticks_per_step", &self.demo_ticks_per_step)
            .field("demo_summary_delay_ms", &self.demo_summary_delay_ms)
            .field("sources", &self.sources)
            .finish()
    }
}
