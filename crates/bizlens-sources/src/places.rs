//! Nearby competitors from a places directory.

use bizlens_core::{BusinessProfile, Competitor};
use serde::Deserialize;
use uuid::Uuid;

use crate::client::SourceClient;
use crate::error::SourceError;
use crate::fetched::Fetched;

const SOURCE: &str = "places";

#[derive(Debug, Deserialize)]
struct NearbyResponse {
    #[serde(default)]
    results: Vec<PlaceRecord>,
}

#[derive(Debug, Deserialize)]
struct PlaceRecord {
    name: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    distance_miles: f32,
    #[serde(default)]
    rating: Option<f32>,
    #[serde(default)]
    user_ratings_total: u32,
    #[serde(default)]
    price_level: Option<u8>,
}

#[derive(Debug, Clone)]
pub struct PlacesSource {
    client: SourceClient,
}

impl PlacesSource {
    #[must_use]
    pub fn new(client: SourceClient) -> Self {
        Self { client }
    }

    /// True when a usable API key is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.client.has_credentials()
    }

    /// Competitors near the profile's zip in its industry's category.
    pub async fn nearby(&self, profile: &BusinessProfile) -> Fetched<Vec<Competitor>> {
        if !self.client.has_credentials() {
            return Fetched::without_credentials(SOURCE, canned(profile));
        }
        let result = self.fetch(profile).await;
        Fetched::settle(SOURCE, result, || canned(profile))
    }

    async fn fetch(&self, profile: &BusinessProfile) -> Result<Vec<Competitor>, SourceError> {
        let key = self.client.api_key().unwrap_or_default();
        let url = self.client.build_url(
            "v1/places/nearby",
            &[
                ("zip", profile.zip_code.as_str()),
                ("category", profile.industry.competitor_category()),
                ("key", key),
            ],
        );
        let response: NearbyResponse = self.client.get_json(url, false).await?;
        Ok(to_competitors(response.results, profile))
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_competitors(records: Vec<PlaceRecord>, profile: &BusinessProfile) -> Vec<Competitor> {
    let total_reviews: u32 = records.iter().map(|r| r.user_ratings_total).sum();
    records
        .into_iter()
        .map(|r| {
            let share = if total_reviews == 0 {
                0.0
            } else {
                r.user_ratings_total as f32 / total_reviews as f32 * 100.0
            };
            Competitor {
                id: Uuid::new_v4(),
                name: r.name,
                category: profile.industry.competitor_category().to_string(),
                address: r.address,
                distance_miles: r.distance_miles,
                rating: r.rating.unwrap_or(0.0).clamp(0.0, 5.0),
                review_count: r.user_ratings_total,
                price_level: r.price_level.unwrap_or(2).clamp(1, 4),
                market_share_pct: (share * 10.0).round() / 10.0,
                strengths: Vec::new(),
                weaknesses: Vec::new(),
            }
        })
        .collect()
}

fn canned(profile: &BusinessProfile) -> Vec<Competitor> {
    let category = profile.industry.competitor_category();
    let label = profile.industry.label();
    [
        ("Summit", 0.6, 4.4, 412, 3, 21.5),
        ("Main Street", 1.2, 3.9, 188, 2, 12.0),
        ("Riverside", 2.3, 4.1, 260, 2, 9.5),
        ("Hometown", 3.8, 3.5, 96, 1, 6.0),
    ]
    .into_iter()
    .enumerate()
    .map(
        |(i, (prefix, distance_miles, rating, review_count, price_level, market_share_pct))| {
            Competitor {
                id: Uuid::from_u128(0xb12_0000 + i as u128),
                name: format!("{prefix} {label}"),
                category: category.to_string(),
                address: format!("Near {}", profile.zip_code),
                distance_miles,
                rating,
                review_count,
                price_level,
                market_share_pct,
                strengths: vec!["Established local reputation".to_string()],
                weaknesses: vec!["Slow to answer reviews".to_string()],
            }
        },
    )
    .collect()
}

#[cfg(test)]
mod tests {
    use bizlens_core::Industry;

    use super::*;

    #[test]
    fn market_share_follows_review_volume() {
        let profile = BusinessProfile::new("Shine", "11211", Industry::CarWashes);
        let records = vec![
            PlaceRecord {
                name: "A".to_string(),
                address: String::new(),
                distance_miles: 1.0,
                rating: Some(4.0),
                user_ratings_total: 300,
                price_level: Some(2),
            },
            PlaceRecord {
                name: "B".to_string(),
                address: String::new(),
                distance_miles: 2.0,
                rating: None,
                user_ratings_total: 100,
                price_level: Some(9),
            },
        ];
        let competitors = to_competitors(records, &profile);
        assert!((competitors[0].market_share_pct - 75.0).abs() < 0.01);
        assert_eq!(competitors[1].price_level, 4);
        assert_eq!(competitors[0].category, "car_wash");
    }
}
