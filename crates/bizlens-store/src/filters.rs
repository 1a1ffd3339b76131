//! Filter criteria for each filterable collection.
//!
//! A criteria object doubles as its own patch type: every field is optional,
//! and [`Filter::merge`] copies over only the fields a patch sets.

use bizlens_core::{
    Channel, Complaint, ComplaintCategory, ComplaintStatus, Customer, Impact, Insight,
    InsightCategory, Interaction, InteractionCategory, Priority, Review, ReviewPlatform, Sentiment,
    Severity,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub trait Filter: Default {
    type Item: Clone;

    fn matches(&self, item: &Self::Item) -> bool;

    /// Overwrite every field that `patch` sets; leave the rest.
    fn merge(&mut self, patch: Self);

    /// Sort key for filtered views, newest first.
    fn timestamp(item: &Self::Item) -> DateTime<Utc>;
}

/// Items of `items` matching `filter`, newest first. `items` is untouched.
pub fn apply<F: Filter>(items: &[F::Item], filter: &F) -> Vec<F::Item> {
    let mut out: Vec<F::Item> = items.iter().filter(|i| filter.matches(i)).cloned().collect();
    out.sort_by_key(|item| std::cmp::Reverse(F::timestamp(item)));
    out
}

macro_rules! overwrite {
    ($target:ident, $patch:ident, $($field:ident),+ $(,)?) => {
        $(
            if $patch.$field.is_some() {
                $target.$field = $patch.$field;
            }
        )+
    };
}

fn in_range(at: DateTime<Utc>, from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> bool {
    from.is_none_or(|from| at >= from) && to.is_none_or(|to| at <= to)
}

fn equals<T: PartialEq>(wanted: Option<&T>, actual: &T) -> bool {
    wanted.is_none_or(|w| w == actual)
}

/// An item passes when it shares at least one tag; no tags is no constraint.
fn shares_tag(wanted: Option<&Vec<String>>, tags: &[String]) -> bool {
    match wanted {
        Some(wanted) if !wanted.is_empty() => wanted.iter().any(|w| tags.contains(w)),
        _ => true,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CustomerFilter {
    pub search: Option<String>,
    pub channel: Option<Channel>,
    pub min_satisfaction: Option<u8>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub tags: Option<Vec<String>>,
}

impl Filter for CustomerFilter {
    type Item = Customer;

    fn matches(&self, c: &Customer) -> bool {
        let name_hit = self.search.as_deref().map(str::trim).is_none_or(|needle| {
            needle.is_empty() || c.name.to_lowercase().contains(&needle.to_lowercase())
        });
        name_hit
            && equals(self.channel.as_ref(), &c.preferred_channel)
            && self.min_satisfaction.is_none_or(|min| c.satisfaction >= min)
            && in_range(c.last_interaction_at, self.from, self.to)
            && shares_tag(self.tags.as_ref(), &c.tags)
    }

    fn merge(&mut self, patch: Self) {
        overwrite!(self, patch, search, channel, min_satisfaction, from, to, tags);
    }

    fn timestamp(c: &Customer) -> DateTime<Utc> {
        c.last_interaction_at
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InteractionFilter {
    pub customer_id: Option<Uuid>,
    pub channel: Option<Channel>,
    pub category: Option<InteractionCategory>,
    pub priority: Option<Priority>,
    pub sentiment: Option<Sentiment>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub tags: Option<Vec<String>>,
}

impl Filter for InteractionFilter {
    type Item = Interaction;

    fn matches(&self, i: &Interaction) -> bool {
        equals(self.customer_id.as_ref(), &i.customer_id)
            && equals(self.channel.as_ref(), &i.channel)
            && equals(self.category.as_ref(), &i.category)
            && equals(self.priority.as_ref(), &i.priority)
            && equals(self.sentiment.as_ref(), &i.sentiment)
            && in_range(i.occurred_at, self.from, self.to)
            && shares_tag(self.tags.as_ref(), &i.tags)
    }

    fn merge(&mut self, patch: Self) {
        overwrite!(
            self, patch, customer_id, channel, category, priority, sentiment, from, to, tags
        );
    }

    fn timestamp(i: &Interaction) -> DateTime<Utc> {
        i.occurred_at
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComplaintFilter {
    pub customer_id: Option<Uuid>,
    pub category: Option<ComplaintCategory>,
    pub severity: Option<Severity>,
    pub status: Option<ComplaintStatus>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub tags: Option<Vec<String>>,
}

impl Filter for ComplaintFilter {
    type Item = Complaint;

    fn matches(&self, c: &Complaint) -> bool {
        equals(self.customer_id.as_ref(), &c.customer_id)
            && equals(self.category.as_ref(), &c.category)
            && equals(self.severity.as_ref(), &c.severity)
            && equals(self.status.as_ref(), &c.status)
            && in_range(c.created_at, self.from, self.to)
            && shares_tag(self.tags.as_ref(), &c.tags)
    }

    fn merge(&mut self, patch: Self) {
        overwrite!(self, patch, customer_id, category, severity, status, from, to, tags);
    }

    fn timestamp(c: &Complaint) -> DateTime<Utc> {
        c.created_at
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReviewFilter {
    pub customer_id: Option<Uuid>,
    pub platform: Option<ReviewPlatform>,
    pub sentiment: Option<Sentiment>,
    pub min_rating: Option<u8>,
    pub verified: Option<bool>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub tags: Option<Vec<String>>,
}

impl Filter for ReviewFilter {
    type Item = Review;

    fn matches(&self, r: &Review) -> bool {
        equals(self.customer_id.as_ref(), &r.customer_id)
            && equals(self.platform.as_ref(), &r.platform)
            && equals(self.sentiment.as_ref(), &r.sentiment)
            && self.min_rating.is_none_or(|min| r.rating >= min)
            && equals(self.verified.as_ref(), &r.verified)
            && in_range(r.published_at, self.from, self.to)
            && shares_tag(self.tags.as_ref(), &r.tags)
    }

    fn merge(&mut self, patch: Self) {
        overwrite!(
            self, patch, customer_id, platform, sentiment, min_rating, verified, from, to, tags
        );
    }

    fn timestamp(r: &Review) -> DateTime<Utc> {
        r.published_at
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InsightFilter {
    pub category: Option<InsightCategory>,
    pub impact: Option<Impact>,
    pub min_confidence: Option<u8>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl Filter for InsightFilter {
    type Item = Insight;

    fn matches(&self, i: &Insight) -> bool {
        equals(self.category.as_ref(), &i.category)
            && equals(self.impact.as_ref(), &i.impact)
            && self.min_confidence.is_none_or(|min| i.confidence >= min)
            && in_range(i.created_at, self.from, self.to)
    }

    fn merge(&mut self, patch: Self) {
        overwrite!(self, patch, category, impact, min_confidence, from, to);
    }

    fn timestamp(i: &Insight) -> DateTime<Utc> {
        i.created_at
    }
}

/// Current criteria for every filterable collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filters {
    pub customers: CustomerFilter,
    pub interactions: InteractionFilter,
    pub complaints: ComplaintFilter,
    pub reviews: ReviewFilter,
    pub insights: InsightFilter,
}

#[cfg(test)]
#[path = "filters_test.rs"]
mod tests;
