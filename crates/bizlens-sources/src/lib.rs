//! Best-effort clients for third-party business intelligence data.
//!
//! Every call returns [`Fetched`]: live data when the vendor answered with a
//! decodable 2xx response, otherwise canned data of the same shape tagged
//! with a [`FallbackReason`]. Callers never see a fetch error.

pub mod client;
pub mod enrichment;
pub mod error;
pub mod fetched;
pub mod news;
pub mod places;
pub mod reviews;
pub mod scorer;
pub mod social;

use bizlens_core::SourceSettings;

pub use client::SourceClient;
pub use enrichment::{CompanyProfile, EnrichmentSource};
pub use error::SourceError;
pub use fetched::{FallbackReason, Fetched};
pub use news::{NewsArticle, NewsSource};
pub use places::PlacesSource;
pub use reviews::{ExternalReview, ReviewsSource};
pub use scorer::lexicon_score;
pub use social::{SocialMention, SocialSource};

/// All five sources, built from one settings block.
#[derive(Debug, Clone)]
pub struct IntelligenceSources {
    pub news: NewsSource,
    pub places: PlacesSource,
    pub reviews: ReviewsSource,
    pub social: SocialSource,
    pub enrichment: EnrichmentSource,
}

impl IntelligenceSources {
    /// # Errors
    ///
    /// Returns [`SourceError`] if an HTTP client cannot be built or a base
    /// URL is invalid.
    pub fn from_settings(settings: &SourceSettings) -> Result<Self, SourceError> {
        let build = |base: &str, key: Option<&String>| {
            SourceClient::new(
                base,
                key.map(String::as_str),
                settings.timeout_secs,
                &settings.user_agent,
            )
        };

        Ok(Self {
            news: NewsSource::new(build(&settings.news_base_url, None)?),
            places: PlacesSource::new(build(
                &settings.places_base_url,
                settings.places_api_key.as_ref(),
            )?),
            reviews: ReviewsSource::new(build(
                &settings.reviews_base_url,
                settings.reviews_api_key.as_ref(),
            )?),
            social: SocialSource::new(build(
                &settings.social_base_url,
                settings.social_api_key.as_ref(),
            )?),
            enrichment: EnrichmentSource::new(build(
                &settings.enrichment_base_url,
                settings.enrichment_api_key.as_ref(),
            )?),
        })
    }

    /// True when at least one keyed source can reach its vendor.
    #[must_use]
    pub fn any_configured(&self) -> bool {
        self.places.is_configured()
            || self.reviews.is_configured()
            || self.social.is_configured()
            || self.enrichment.is_configured()
    }
}
