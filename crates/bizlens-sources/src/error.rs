use thiserror::Error;

/// Failure talking to one intelligence vendor. Callers never surface these
/// to users; [`crate::fetched::FallbackReason`] classifies them instead.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport failure, timeout or a non-2xx vendor status.
    #[error("vendor request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed feed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("unexpected {context} payload: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("vendor base URL '{url}' is unusable: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
