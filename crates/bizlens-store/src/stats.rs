use bizlens_core::{ComplaintStatus, Sentiment};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::app_store::AppStore;

/// Headline numbers for the customer dashboard, computed from the canonical
/// (unfiltered) collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub customer_count: usize,
    /// Mean satisfaction on the 1-10 scale; 0 with no customers.
    pub average_satisfaction: f32,
    pub total_lifetime_value: Decimal,
    /// Complaints not yet resolved.
    pub open_complaints: usize,
    /// Mean star rating; 0 with no reviews.
    pub average_rating: f32,
    /// Share of interactions with negative sentiment, 0-100.
    pub negative_interaction_pct: f32,
    pub insight_count: usize,
}

#[allow(clippy::cast_precision_loss)]
fn mean(total: f32, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let value = total / count as f32;
    (value * 10.0).round() / 10.0
}

impl AppStore {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn dashboard_stats(&self) -> DashboardStats {
        let customers = self.customers();
        let reviews = self.reviews();
        let interactions = self.interactions();

        let satisfaction: f32 = customers.iter().map(|c| f32::from(c.satisfaction)).sum();
        let rating: f32 = reviews.iter().map(|r| f32::from(r.rating)).sum();
        let negative = interactions
            .iter()
            .filter(|i| i.sentiment == Sentiment::Negative)
            .count();

        DashboardStats {
            customer_count: customers.len(),
            average_satisfaction: mean(satisfaction, customers.len()),
            total_lifetime_value: customers.iter().map(|c| c.lifetime_value).sum(),
            open_complaints: self
                .complaints()
                .iter()
                .filter(|c| c.status != ComplaintStatus::Resolved)
                .count(),
            average_rating: mean(rating, reviews.len()),
            negative_interaction_pct: mean(negative as f32 * 100.0, interactions.len()),
            insight_count: self.insights().len(),
        }
    }
}
