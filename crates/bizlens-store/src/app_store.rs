use bizlens_core::{
    BusinessSettings, Competitor, CompetitorComplaint, Complaint, Customer, Insight, Interaction,
    Opportunity, Review, Threat,
};
use serde::{Deserialize, Serialize};

use crate::filters::{
    apply, ComplaintFilter, CustomerFilter, Filter, Filters, InsightFilter, InteractionFilter,
    ReviewFilter,
};

/// Canonical collections, their current filter criteria and the business
/// settings. Filtered views are computed on demand and never cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppStore {
    customers: Vec<Customer>,
    interactions: Vec<Interaction>,
    complaints: Vec<Complaint>,
    reviews: Vec<Review>,
    insights: Vec<Insight>,
    competitors: Vec<Competitor>,
    competitor_complaints: Vec<CompetitorComplaint>,
    opportunities: Vec<Opportunity>,
    threats: Vec<Threat>,
    filters: Filters,
    settings: BusinessSettings,
}

macro_rules! filterable {
    (
        $items:ident: $item:ty, $filter:ty,
        $set_list:ident, $set_filter:ident, $filtered:ident, $clear:ident
    ) => {
        #[must_use]
        pub fn $items(&self) -> &[$item] {
            &self.$items
        }

        pub fn $set_list(&mut self, items: Vec<$item>) {
            self.$items = items;
        }

        pub fn $set_filter(&mut self, patch: $filter) {
            self.filters.$items.merge(patch);
        }

        #[must_use]
        pub fn $filtered(&self) -> Vec<$item> {
            apply(&self.$items, &self.filters.$items)
        }

        pub fn $clear(&mut self) {
            self.filters.$items = <$filter>::default();
        }
    };
}

macro_rules! plain {
    ($items:ident: $item:ty, $set_list:ident) => {
        #[must_use]
        pub fn $items(&self) -> &[$item] {
            &self.$items
        }

        pub fn $set_list(&mut self, items: Vec<$item>) {
            self.$items = items;
        }
    };
}

impl AppStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    filterable!(
        customers: Customer, CustomerFilter,
        set_customer_list, set_customer_filter, filtered_customers, clear_customer_filter
    );
    filterable!(
        interactions: Interaction, InteractionFilter,
        set_interaction_list, set_interaction_filter, filtered_interactions,
        clear_interaction_filter
    );
    filterable!(
        complaints: Complaint, ComplaintFilter,
        set_complaint_list, set_complaint_filter, filtered_complaints, clear_complaint_filter
    );
    filterable!(
        reviews: Review, ReviewFilter,
        set_review_list, set_review_filter, filtered_reviews, clear_review_filter
    );
    filterable!(
        insights: Insight, InsightFilter,
        set_insight_list, set_insight_filter, filtered_insights, clear_insight_filter
    );

    plain!(competitors: Competitor, set_competitor_list);
    plain!(competitor_complaints: CompetitorComplaint, set_competitor_complaint_list);
    plain!(opportunities: Opportunity, set_opportunity_list);
    plain!(threats: Threat, set_threat_list);

    #[must_use]
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn clear_filters(&mut self) {
        self.filters = Filters::default();
    }

    #[must_use]
    pub fn settings(&self) -> &BusinessSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: BusinessSettings) {
        self.settings = settings;
    }
}
