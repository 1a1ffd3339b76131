//! Social media mentions of a business.

use bizlens_core::BusinessProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::SourceClient;
use crate::error::SourceError;
use crate::fetched::Fetched;
use crate::scorer::lexicon_score;

const SOURCE: &str = "social";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialMention {
    pub network: String,
    pub author: String,
    pub text: String,
    pub url: String,
    pub likes: u32,
    pub posted_at: Option<DateTime<Utc>>,
    pub sentiment_score: f32,
}

#[derive(Debug, Deserialize)]
struct MentionsResponse {
    #[serde(default)]
    data: Vec<MentionRecord>,
}

#[derive(Debug, Deserialize)]
struct MentionRecord {
    network: String,
    #[serde(default)]
    handle: String,
    text: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    likes: u32,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct SocialSource {
    client: SourceClient,
}

impl SocialSource {
    #[must_use]
    pub fn new(client: SourceClient) -> Self {
        Self { client }
    }

    /// True when a usable API key is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.client.has_credentials()
    }

    pub async fn mentions(&self, profile: &BusinessProfile) -> Fetched<Vec<SocialMention>> {
        if !self.client.has_credentials() {
            return Fetched::without_credentials(SOURCE, canned(profile));
        }
        let result = self.fetch(profile).await;
        Fetched::settle(SOURCE, result, || canned(profile))
    }

    async fn fetch(&self, profile: &BusinessProfile) -> Result<Vec<SocialMention>, SourceError> {
        let url = self
            .client
            .build_url("v1/mentions", &[("q", profile.name.as_str())]);
        let response: MentionsResponse = self.client.get_json(url, true).await?;

        // Drop URL-less and duplicate mentions.
        let mut seen = std::collections::HashSet::new();
        Ok(response
            .data
            .into_iter()
            .filter(|m| !m.url.is_empty() && seen.insert(m.url.clone()))
            .map(|m| SocialMention {
                sentiment_score: lexicon_score(&m.text),
                network: m.network,
                author: m.handle,
                text: m.text,
                url: m.url,
                likes: m.likes,
                posted_at: m.created_at,
            })
            .collect())
    }
}

fn canned(profile: &BusinessProfile) -> Vec<SocialMention> {
    [
        ("instagram", "@localfoodie", format!("Great visit to {} today!", profile.name), 48),
        ("x", "@nbhd_news", format!("Anyone tried {}? Heard the wait is slow.", profile.name), 5),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (network, author, text, likes))| SocialMention {
        sentiment_score: lexicon_score(&text),
        network: network.to_string(),
        author: author.to_string(),
        url: format!("https://social.example.com/post/{}", i + 1),
        text,
        likes,
        posted_at: None,
    })
    .collect()
}
