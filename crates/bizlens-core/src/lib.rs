//! Shared domain model, configuration and landing-page content for bizlens.

pub mod app_config;
pub mod competitive;
pub mod config;
pub mod entities;
pub mod profile;
pub mod taxonomy;
pub mod verticals;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, SourceSettings};
pub use competitive::{
    Competitor, CompetitorComplaint, Effort, Impact, Insight, Opportunity, Threat,
};
pub use config::{load_app_config, load_app_config_from_env, load_source_settings};
pub use entities::{BusinessSettings, Complaint, Customer, Interaction, Review};
pub use profile::{BusinessProfile, Industry};
pub use taxonomy::{
    Channel, ComplaintCategory, ComplaintStatus, InsightCategory, InteractionCategory, Priority,
    ReviewPlatform, Sentiment, Severity, Tone,
};
pub use verticals::{load_verticals, VerticalPage, VerticalsFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read verticals file {path}: {source}")]
    VerticalsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse verticals file: {0}")]
    VerticalsFileParse(#[source] serde_yaml::Error),

    #[error("verticals validation failed: {0}")]
    Validation(String),
}
