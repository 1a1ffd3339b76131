use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SourceError;

/// Why a source served canned data instead of a live response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "status")]
pub enum FallbackReason {
    /// No key configured, or the placeholder demo key.
    MissingCredentials,
    Network,
    Status(u16),
    Decode,
}

impl FallbackReason {
    #[must_use]
    pub fn from_error(error: &SourceError) -> Self {
        match error {
            SourceError::Http(e) => match e.status() {
                Some(status) => FallbackReason::Status(status.as_u16()),
                None if e.is_decode() => FallbackReason::Decode,
                None => FallbackReason::Network,
            },
            SourceError::Xml(_) | SourceError::Deserialize { .. } => FallbackReason::Decode,
            SourceError::InvalidBaseUrl { .. } => FallbackReason::Network,
        }
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::MissingCredentials => write!(f, "missing credentials"),
            FallbackReason::Network => write!(f, "network error"),
            FallbackReason::Status(code) => write!(f, "HTTP status {code}"),
            FallbackReason::Decode => write!(f, "undecodable response"),
        }
    }
}

/// Result of a best-effort source call: live data, or same-shaped canned
/// data tagged with the reason the live call was not used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "origin")]
pub enum Fetched<T> {
    Live { data: T },
    Fallback { data: T, reason: FallbackReason },
}

impl<T> Fetched<T> {
    /// Turn a source result into `Fetched`, logging and substituting
    /// `fallback()` on error.
    pub(crate) fn settle(
        source: &'static str,
        result: Result<T, SourceError>,
        fallback: impl FnOnce() -> T,
    ) -> Self {
        match result {
            Ok(data) => {
                tracing::debug!(source, "live data fetched");
                Fetched::Live { data }
            }
            Err(e) => {
                let reason = FallbackReason::from_error(&e);
                tracing::warn!(source, error = %e, %reason, "source failed; serving fallback data");
                Fetched::Fallback {
                    data: fallback(),
                    reason,
                }
            }
        }
    }

    pub(crate) fn without_credentials(source: &'static str, data: T) -> Self {
        tracing::warn!(source, "no credentials configured; serving fallback data");
        Fetched::Fallback {
            data,
            reason: FallbackReason::MissingCredentials,
        }
    }

    #[must_use]
    pub fn data(&self) -> &T {
        match self {
            Fetched::Live { data } | Fetched::Fallback { data, .. } => data,
        }
    }

    pub fn into_data(self) -> T {
        match self {
            Fetched::Live { data } | Fetched::Fallback { data, .. } => data,
        }
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        matches!(self, Fetched::Live { .. })
    }

    #[must_use]
    pub fn reason(&self) -> Option<FallbackReason> {
        match self {
            Fetched::Live { .. } => None,
            Fetched::Fallback { reason, .. } => Some(*reason),
        }
    }

    /// `"live"` or `"fallback"`, as recorded in insight metadata.
    #[must_use]
    pub fn origin_label(&self) -> &'static str {
        if self.is_live() {
            "live"
        } else {
            "fallback"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_keeps_live_data() {
        let fetched = Fetched::settle("test", Ok(vec![1, 2]), Vec::new);
        assert!(fetched.is_live());
        assert_eq!(fetched.data(), &vec![1, 2]);
        assert_eq!(fetched.origin_label(), "live");
    }

    #[test]
    fn settle_substitutes_fallback_on_decode_error() {
        let err = SourceError::Deserialize {
            context: "test".to_string(),
            source: serde_json::from_str::<u8>("nope").unwrap_err(),
        };
        let fetched = Fetched::settle("test", Err(err), || vec![9]);
        assert_eq!(fetched.reason(), Some(FallbackReason::Decode));
        assert_eq!(fetched.into_data(), vec![9]);
    }

    #[test]
    fn reason_serializes_with_status_code() {
        let json = serde_json::to_value(FallbackReason::Status(503)).expect("serialize");
        assert_eq!(json, serde_json::json!({"kind": "status", "status": 503}));
    }
}
