//! Public reviews of a business aggregated across platforms.

use bizlens_core::{BusinessProfile, ReviewPlatform, Sentiment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::SourceClient;
use crate::error::SourceError;
use crate::fetched::Fetched;
use crate::scorer::lexicon_score;

const SOURCE: &str = "reviews";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalReview {
    pub author: String,
    pub platform: ReviewPlatform,
    pub rating: u8,
    pub text: String,
    pub published_at: Option<DateTime<Utc>>,
    pub sentiment_score: f32,
}

impl ExternalReview {
    /// Sentiment from the text, falling back to the star rating when the
    /// text carries no lexicon words.
    #[must_use]
    pub fn sentiment(&self) -> Sentiment {
        if self.sentiment_score.abs() < f32::EPSILON {
            Sentiment::from_rating(self.rating)
        } else {
            Sentiment::from_score(self.sentiment_score)
        }
    }
}

#[derive(Debug, Deserialize)]
struct ReviewsResponse {
    #[serde(default)]
    reviews: Vec<ReviewRecord>,
}

#[derive(Debug, Deserialize)]
struct ReviewRecord {
    #[serde(default)]
    author: String,
    source: String,
    rating: u8,
    #[serde(default)]
    text: String,
    #[serde(default)]
    time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct ReviewsSource {
    client: SourceClient,
}

impl ReviewsSource {
    #[must_use]
    pub fn new(client: SourceClient) -> Self {
        Self { client }
    }

    /// True when a usable API key is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.client.has_credentials()
    }

    pub async fn for_business(&self, profile: &BusinessProfile) -> Fetched<Vec<ExternalReview>> {
        if !self.client.has_credentials() {
            return Fetched::without_credentials(SOURCE, canned());
        }
        let result = self.fetch(profile).await;
        Fetched::settle(SOURCE, result, canned)
    }

    async fn fetch(&self, profile: &BusinessProfile) -> Result<Vec<ExternalReview>, SourceError> {
        let url = self.client.build_url(
            "v1/reviews",
            &[
                ("business", profile.name.as_str()),
                ("zip", profile.zip_code.as_str()),
            ],
        );
        let response: ReviewsResponse = self.client.get_json(url, true).await?;
        Ok(response
            .reviews
            .into_iter()
            .map(|r| ExternalReview {
                sentiment_score: lexicon_score(&r.text),
                author: r.author,
                platform: ReviewPlatform::from_external(&r.source),
                rating: r.rating.clamp(1, 5),
                text: r.text,
                published_at: r.time,
            })
            .collect())
    }
}

fn canned() -> Vec<ExternalReview> {
    [
        ("Marisol P.", ReviewPlatform::Google, 5, "Friendly team and fast service, would recommend."),
        ("Dev K.", ReviewPlatform::Yelp, 2, "Waited almost an hour and the staff was rude."),
        ("Sam T.", ReviewPlatform::Facebook, 4, "Good value, the place was clean."),
        ("Lena W.", ReviewPlatform::Google, 3, "Fine overall but a bit expensive."),
    ]
    .into_iter()
    .map(|(author, platform, rating, text)| ExternalReview {
        author: author.to_string(),
        platform,
        rating,
        text: text.to_string(),
        published_at: None,
        sentiment_score: lexicon_score(text),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_uses_rating_when_text_is_neutral() {
        let review = ExternalReview {
            author: "a".to_string(),
            platform: ReviewPlatform::Google,
            rating: 1,
            text: "Visited on Tuesday.".to_string(),
            published_at: None,
            sentiment_score: 0.0,
        };
        assert_eq!(review.sentiment(), Sentiment::Negative);
    }

    #[test]
    fn canned_reviews_are_scored() {
        let reviews = canned();
        assert!(reviews[0].sentiment_score > 0.0);
        assert!(reviews[1].sentiment_score < 0.0);
    }
}
