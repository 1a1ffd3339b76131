//! Shared HTTP plumbing for the third-party sources.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::SourceError;

/// Key value shipped in sample `.env` files; treated as no key at all.
pub const PLACEHOLDER_KEY: &str = "demo-key";

/// HTTP client bound to one vendor's base URL and optional API key.
#[derive(Debug, Clone)]
pub struct SourceClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl SourceClient {
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`SourceError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn new(
        base_url: &str,
        api_key: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| SourceError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.map(str::to_string),
        })
    }

    /// True when a usable key is configured.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty() && k != PLACEHOLDER_KEY)
    }

    pub(crate) fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub(crate) fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!(
            "{}{}",
            self.base_url.path(),
            path.trim_start_matches('/')
        ));
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// GET `url`, require a 2xx status and return the body text.
    pub(crate) async fn get_text(&self, url: Url, bearer: bool) -> Result<String, SourceError> {
        let mut request = self.client.get(url);
        if bearer {
            if let Some(key) = self.api_key() {
                request = request.bearer_auth(key);
            }
        }
        let response = request.send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    /// GET `url` and decode the JSON body into `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        bearer: bool,
    ) -> Result<T, SourceError> {
        let context = url.path().to_string();
        let body = self.get_text(url, bearer).await?;
        serde_json::from_str(&body).map_err(|e| SourceError::Deserialize { context, source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str, key: Option<&str>) -> SourceClient {
        SourceClient::new(base, key, 5, "bizlens-test").expect("client")
    }

    #[test]
    fn build_url_joins_path_and_encodes_query() {
        let c = client("https://api.example.com/", None);
        let url = c.build_url("/v1/places/nearby", &[("zip", "10014"), ("category", "a & b")]);
        assert!(url.as_str().starts_with("https://api.example.com/v1/places/nearby?zip=10014"));
        assert!(url.as_str().contains("category=a+%26+b"));
    }

    #[test]
    fn build_url_keeps_base_path_prefix() {
        let c = client("http://127.0.0.1:9000/mock", None);
        let url = c.build_url("v1/mentions", &[]);
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/mock/v1/mentions");
    }

    #[test]
    fn placeholder_and_blank_keys_are_not_credentials() {
        assert!(!client("https://x.test", None).has_credentials());
        assert!(!client("https://x.test", Some("demo-key")).has_credentials());
        assert!(!client("https://x.test", Some("  ")).has_credentials());
        assert!(client("https://x.test", Some("live-123")).has_credentials());
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = SourceClient::new("not a url", None, 5, "ua").unwrap_err();
        assert!(matches!(err, SourceError::InvalidBaseUrl { .. }));
    }
}
