use serde::{Deserialize, Serialize};

/// Industry verticals the product is marketed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Contractors,
    Restaurants,
    CarWashes,
    Hospitality,
    Other,
}

impl Industry {
    /// Verticals with a dedicated landing page.
    pub const VERTICALS: [Industry; 4] = [
        Industry::Contractors,
        Industry::Restaurants,
        Industry::CarWashes,
        Industry::Hospitality,
    ];

    /// URL path segment of the vertical's landing page.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Industry::Contractors => "contractors",
            Industry::Restaurants => "restaurants",
            Industry::CarWashes => "car-washes",
            Industry::Hospitality => "hospitality",
            Industry::Other => "other",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Industry::Contractors => "Contractors",
            Industry::Restaurants => "Restaurants",
            Industry::CarWashes => "Car washes",
            Industry::Hospitality => "Hospitality",
            Industry::Other => "Local business",
        }
    }

    /// Search category used when looking up nearby competitors.
    #[must_use]
    pub fn competitor_category(self) -> &'static str {
        match self {
            Industry::Contractors => "general_contractor",
            Industry::Restaurants => "restaurant",
            Industry::CarWashes => "car_wash",
            Industry::Hospitality => "lodging",
            Industry::Other => "establishment",
        }
    }

    /// Lenient mapping from free-form wizard input.
    ///
    /// The demo wizard only checks the field for presence, so anything not
    /// recognised lands on [`Industry::Other`].
    #[must_use]
    pub fn from_input(raw: &str) -> Self {
        let normalized: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();
        match normalized.as_str() {
            "contractor" | "contractors" | "construction" | "homeservices" => {
                Industry::Contractors
            }
            "restaurant" | "restaurants" | "food" | "foodservice" | "cafe" => {
                Industry::Restaurants
            }
            "carwash" | "carwashes" | "autodetailing" => Industry::CarWashes,
            "hospitality" | "hotel" | "hotels" | "lodging" => Industry::Hospitality,
            _ => Industry::Other,
        }
    }

    /// Look up a vertical by its landing page slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::VERTICALS.into_iter().find(|i| i.slug() == slug)
    }
}

/// The business a demo analysis is run for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub name: String,
    pub zip_code: String,
    pub industry: Industry,
}

impl BusinessProfile {
    #[must_use]
    pub fn new(name: impl Into<String>, zip_code: impl Into<String>, industry: Industry) -> Self {
        Self {
            name: name.into(),
            zip_code: zip_code.into(),
            industry,
        }
    }
}
