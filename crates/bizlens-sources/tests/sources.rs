//! Integration tests for the sources using wiremock HTTP mocks.

use bizlens_core::{BusinessProfile, Industry, ReviewPlatform};
use bizlens_sources::{
    EnrichmentSource, FallbackReason, NewsSource, PlacesSource, ReviewsSource, SocialSource,
    SourceClient,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn profile() -> BusinessProfile {
    BusinessProfile::new("Bellini's Trattoria", "10014", Industry::Restaurants)
}

fn client(base_url: &str, key: Option<&str>) -> SourceClient {
    SourceClient::new(base_url, key, 5, "bizlens-test").expect("client construction")
}

#[tokio::test]
async fn places_live_response_maps_competitors() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "results": [
            {"place_id": "p1", "name": "Nonna's Table", "address": "12 Bleecker St",
             "distance_miles": 0.3, "rating": 4.6, "user_ratings_total": 300, "price_level": 2},
            {"place_id": "p2", "name": "Golden Lotus", "address": "88 Hudson St",
             "distance_miles": 0.9, "rating": 4.1, "user_ratings_total": 100}
        ]
    });
    Mock::given(method("GET"))
        .and(path("/v1/places/nearby"))
        .and(query_param("zip", "10014"))
        .and(query_param("category", "restaurant"))
        .and(query_param("key", "live-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let source = PlacesSource::new(client(&server.uri(), Some("live-key")));
    let fetched = source.nearby(&profile()).await;

    assert!(fetched.is_live());
    let competitors = fetched.data();
    assert_eq!(competitors.len(), 2);
    assert_eq!(competitors[0].name, "Nonna's Table");
    assert!((competitors[0].market_share_pct - 75.0).abs() < 0.01);
    assert_eq!(competitors[1].price_level, 2);
}

#[tokio::test]
async fn places_server_error_falls_back_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/places/nearby"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let source = PlacesSource::new(client(&server.uri(), Some("live-key")));
    let fetched = source.nearby(&profile()).await;

    assert_eq!(fetched.reason(), Some(FallbackReason::Status(503)));
    assert!(!fetched.data().is_empty());
}

#[tokio::test]
async fn missing_or_placeholder_key_skips_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let places = PlacesSource::new(client(&server.uri(), None));
    let reviews = ReviewsSource::new(client(&server.uri(), Some("demo-key")));
    let social = SocialSource::new(client(&server.uri(), Some("")));
    let enrichment = EnrichmentSource::new(client(&server.uri(), None));

    assert_eq!(
        places.nearby(&profile()).await.reason(),
        Some(FallbackReason::MissingCredentials)
    );
    assert_eq!(
        reviews.for_business(&profile()).await.reason(),
        Some(FallbackReason::MissingCredentials)
    );
    assert_eq!(
        social.mentions(&profile()).await.reason(),
        Some(FallbackReason::MissingCredentials)
    );
    assert_eq!(
        enrichment.lookup(&profile()).await.reason(),
        Some(FallbackReason::MissingCredentials)
    );
}

#[tokio::test]
async fn reviews_send_bearer_key_and_score_text() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "reviews": [
            {"author": "Jo", "source": "yelp", "rating": 5,
             "text": "Amazing pasta and friendly staff", "time": "2025-05-20T18:00:00Z"},
            {"author": "Al", "source": "tripadvisor", "rating": 1,
             "text": "Rude and slow"}
        ]
    });
    Mock::given(method("GET"))
        .and(path("/v1/reviews"))
        .and(query_param("business", "Bellini's Trattoria"))
        .and(header("authorization", "Bearer rv-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let source = ReviewsSource::new(client(&server.uri(), Some("rv-key")));
    let fetched = source.for_business(&profile()).await;

    assert!(fetched.is_live());
    let reviews = fetched.into_data();
    assert_eq!(reviews[0].platform, ReviewPlatform::Yelp);
    assert!(reviews[0].sentiment_score > 0.0);
    assert!(reviews[0].published_at.is_some());
    assert_eq!(reviews[1].platform, ReviewPlatform::TripAdvisor);
    assert!(reviews[1].sentiment_score < 0.0);
}

#[tokio::test]
async fn reviews_malformed_body_falls_back_with_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let source = ReviewsSource::new(client(&server.uri(), Some("rv-key")));
    let fetched = source.for_business(&profile()).await;

    assert_eq!(fetched.reason(), Some(FallbackReason::Decode));
    assert!(!fetched.data().is_empty());
}

#[tokio::test]
async fn social_mentions_are_deduplicated_by_url() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "data": [
            {"network": "instagram", "handle": "@a", "text": "Best brunch", "url": "https://ig/1", "likes": 10},
            {"network": "instagram", "handle": "@a", "text": "Best brunch", "url": "https://ig/1", "likes": 10},
            {"network": "x", "handle": "@b", "text": "no link here", "url": ""}
        ]
    });
    Mock::given(method("GET"))
        .and(path("/v1/mentions"))
        .and(query_param("q", "Bellini's Trattoria"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let source = SocialSource::new(client(&server.uri(), Some("so-key")));
    let fetched = source.mentions(&profile()).await;

    assert!(fetched.is_live());
    assert_eq!(fetched.data().len(), 1);
    assert_eq!(fetched.data()[0].author, "@a");
}

#[tokio::test]
async fn enrichment_live_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/companies/lookup"))
        .and(query_param("zip", "10014"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Bellini's Trattoria LLC",
            "founded_year": 2009,
            "employee_range": "11-50",
            "tags": ["italian", "family-owned"]
        })))
        .mount(&server)
        .await;

    let source = EnrichmentSource::new(client(&server.uri(), Some("en-key")));
    let fetched = source.lookup(&profile()).await;

    assert!(fetched.is_live());
    assert_eq!(fetched.data().founded_year, Some(2009));
    assert_eq!(fetched.data().tags.len(), 2);
}

#[tokio::test]
async fn news_parses_rss_response() {
    let server = MockServer::start().await;
    let rss = r#"<?xml version="1.0"?>
<rss version="2.0"><channel>
  <item><title>Bellini's expands patio seating</title><link>https://n/1</link>
  <description>Great news for regulars.</description></item>
</channel></rss>"#;
    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .and(query_param("q", "Bellini's Trattoria 10014"))
        .respond_with(ResponseTemplate::new(200).set_body_string(rss))
        .mount(&server)
        .await;

    let source = NewsSource::new(client(&server.uri(), None));
    let fetched = source.search(&profile()).await;

    assert!(fetched.is_live());
    assert_eq!(fetched.data().len(), 1);
    assert_eq!(fetched.data()[0].title, "Bellini's expands patio seating");
}

#[tokio::test]
async fn unreachable_host_falls_back_with_network_reason() {
    let source = NewsSource::new(client("http://127.0.0.1:9", None));
    let fetched = source.search(&profile()).await;
    assert_eq!(fetched.reason(), Some(FallbackReason::Network));
    assert_eq!(fetched.origin_label(), "fallback");
}
