use bizlens_core::{
    BusinessProfile, Competitor, CompetitorComplaint, ComplaintCategory, Industry, Insight,
};
use serde::{Deserialize, Serialize};

use crate::generator::MockGenerator;

/// Zip prefixes mapped to neighborhoods; the longest matching prefix wins.
const NEIGHBORHOODS: &[(&str, &str)] = &[
    ("10003", "East Village"),
    ("10009", "East Village"),
    ("10012", "SoHo"),
    ("10013", "Tribeca"),
    ("10014", "West Village"),
    ("10011", "Chelsea"),
    ("10019", "Hell's Kitchen"),
    ("10023", "Upper West Side"),
    ("10024", "Upper West Side"),
    ("10028", "Upper East Side"),
    ("10027", "Harlem"),
    ("10002", "Lower East Side"),
    ("100", "Manhattan"),
    ("101", "Manhattan"),
    ("102", "Manhattan"),
    ("103", "Staten Island"),
    ("104", "The Bronx"),
    ("11201", "Brooklyn Heights"),
    ("11211", "Williamsburg"),
    ("11215", "Park Slope"),
    ("11222", "Greenpoint"),
    ("112", "Brooklyn"),
    ("11101", "Long Island City"),
    ("11354", "Flushing"),
    ("11372", "Jackson Heights"),
    ("111", "Queens"),
    ("113", "Queens"),
    ("114", "Queens"),
];

const DEFAULT_NEIGHBORHOOD: &str = "Manhattan";

const RESTAURANTS: &[(&str, &str)] = &[
    ("Nonna's Table", "Italian"),
    ("Golden Lotus", "Chinese"),
    ("Taqueria El Sol", "Mexican"),
    ("The Copper Pot", "American"),
    ("Sakura Omakase", "Japanese"),
    ("Slice & Co.", "Pizza"),
    ("Le Petit Bistro", "French"),
    ("Spice Route", "Indian"),
    ("Green Fork", "Vegan"),
    ("Harbor Oyster Bar", "Seafood"),
];

const DEMO_COMPETITORS: usize = 6;
const DEMO_COMPLAINTS: usize = 24;
const DEMO_INSIGHTS: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStats {
    pub average_rating: f32,
    pub average_price_level: f32,
    pub total_reviews: u32,
    pub top_complaint_category: Option<ComplaintCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantDemo {
    pub zip_code: String,
    pub neighborhood: String,
    pub competitors: Vec<Competitor>,
    pub complaints: Vec<CompetitorComplaint>,
    pub insights: Vec<Insight>,
    pub stats: MarketStats,
}

/// Neighborhood for a NYC zip, defaulting to Manhattan.
#[must_use]
pub fn neighborhood_for_zip(zip: &str) -> &'static str {
    let zip = zip.trim();
    NEIGHBORHOODS
        .iter()
        .filter(|(prefix, _)| zip.starts_with(prefix))
        .max_by_key(|(prefix, _)| prefix.len())
        .map_or(DEFAULT_NEIGHBORHOOD, |(_, name)| *name)
}

impl MockGenerator {
    pub fn nyc_restaurant_demo(&mut self, zip: &str) -> RestaurantDemo {
        let neighborhood = neighborhood_for_zip(zip);
        let names: Vec<&str> = RESTAURANTS.iter().map(|(name, _)| *name).collect();
        let start = self.pick_index(names.len());
        let rotated: Vec<&str> = names[start..].iter().chain(&names[..start]).copied().collect();

        let mut competitors = self.competitors_in("restaurant", DEMO_COMPETITORS, &rotated);
        for competitor in &mut competitors {
            if let Some((_, cuisine)) = RESTAURANTS.iter().find(|(n, _)| *n == competitor.name) {
                competitor.category = (*cuisine).to_string();
            }
            competitor.address = format!("{}, {neighborhood}", competitor.address);
        }

        let complaints = self.competitor_complaints(&competitors, DEMO_COMPLAINTS);
        let profile = BusinessProfile::new(
            format!("Your {neighborhood} restaurant"),
            zip.trim(),
            Industry::Restaurants,
        );
        let insights = self.insights(&profile, DEMO_INSIGHTS);
        let stats = market_stats(&competitors, &complaints);

        RestaurantDemo {
            zip_code: zip.trim().to_string(),
            neighborhood: neighborhood.to_string(),
            competitors,
            complaints,
            insights,
            stats,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn market_stats(competitors: &[Competitor], complaints: &[CompetitorComplaint]) -> MarketStats {
    let count = competitors.len().max(1) as f32;
    let average_rating = competitors.iter().map(|c| c.rating).sum::<f32>() / count;
    let average_price_level =
        competitors.iter().map(|c| f32::from(c.price_level)).sum::<f32>() / count;
    let total_reviews = competitors.iter().map(|c| c.review_count).sum();

    let top_complaint_category = ComplaintCategory::ALL
        .into_iter()
        .map(|category| {
            let hits = complaints.iter().filter(|c| c.category == category).count();
            (category, hits)
        })
        .filter(|(_, hits)| *hits > 0)
        .max_by_key(|(_, hits)| *hits)
        .map(|(category, _)| category);

    MarketStats {
        average_rating: (average_rating * 10.0).round() / 10.0,
        average_price_level: (average_price_level * 10.0).round() / 10.0,
        total_reviews,
        top_complaint_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_zip_maps_to_specific_neighborhood() {
        assert_eq!(neighborhood_for_zip("11211"), "Williamsburg");
        assert_eq!(neighborhood_for_zip("10014"), "West Village");
    }

    #[test]
    fn borough_prefix_used_when_no_exact_match() {
        assert_eq!(neighborhood_for_zip("11230"), "Brooklyn");
        assert_eq!(neighborhood_for_zip("10451"), "The Bronx");
    }

    #[test]
    fn unknown_zip_defaults_to_manhattan() {
        assert_eq!(neighborhood_for_zip("94107"), "Manhattan");
        assert_eq!(neighborhood_for_zip(""), "Manhattan");
    }

    #[test]
    fn market_stats_without_complaints_has_no_top_category() {
        let stats = market_stats(&[], &[]);
        assert_eq!(stats.total_reviews, 0);
        assert!(stats.top_complaint_category.is_none());
    }
}
