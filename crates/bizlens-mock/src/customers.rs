use bizlens_core::{
    Channel, Complaint, ComplaintCategory, ComplaintStatus, Customer, Interaction,
    InteractionCategory, Priority, Review, ReviewPlatform, Sentiment, Severity,
};
use serde::{Deserialize, Serialize};

use crate::generator::MockGenerator;
use crate::pools;

/// How many records of each kind [`MockGenerator::customer_dataset`] builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCounts {
    pub customers: usize,
    pub interactions: usize,
    pub complaints: usize,
    pub reviews: usize,
}

impl Default for CustomerCounts {
    fn default() -> Self {
        Self {
            customers: 25,
            interactions: 60,
            complaints: 15,
            reviews: 40,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDataset {
    pub customers: Vec<Customer>,
    pub interactions: Vec<Interaction>,
    pub complaints: Vec<Complaint>,
    pub reviews: Vec<Review>,
}

impl MockGenerator {
    pub fn customers(&mut self, n: usize) -> Vec<Customer> {
        (0..n).map(|_| self.customer()).collect()
    }

    fn customer(&mut self) -> Customer {
        let first = self.pick(pools::FIRST_NAMES);
        let last = self.pick(pools::LAST_NAMES);
        let domain = self.pick(pools::EMAIL_DOMAINS);
        let acquired_at = self.within_days(730);
        let phone = self.chance(0.8).then(|| {
            format!(
                "({}) {}-{:04}",
                self.int(201, 989),
                self.int(200, 999),
                self.int(0, 9999)
            )
        });

        Customer {
            id: self.id(),
            name: format!("{first} {last}"),
            email: format!(
                "{}.{}@{domain}",
                first.to_lowercase(),
                last.to_lowercase()
            ),
            phone,
            preferred_channel: self.pick(&Channel::ALL),
            satisfaction: u8::try_from(self.int(1, 10)).unwrap_or(5),
            lifetime_value: self.money(50, 12_000),
            tags: self.pick_some(pools::CUSTOMER_TAGS, 3),
            acquired_at,
            last_interaction_at: self.between(acquired_at),
        }
    }

    /// `n` interactions, each owned by one of `customers`.
    pub fn interactions(&mut self, customers: &[Customer], n: usize) -> Vec<Interaction> {
        if customers.is_empty() {
            return Vec::new();
        }
        (0..n)
            .map(|_| {
                let owner = &customers[self.pick_index(customers.len())];
                Interaction {
                    id: self.id(),
                    customer_id: owner.id,
                    channel: self.pick(&Channel::ALL),
                    category: self.pick(&InteractionCategory::ALL),
                    priority: self.pick(&Priority::ALL),
                    sentiment: self.pick(&Sentiment::ALL),
                    summary: self.pick(pools::INTERACTION_SUMMARIES).to_string(),
                    occurred_at: self.between(owner.acquired_at),
                    tags: self.pick_some(pools::CUSTOMER_TAGS, 2),
                }
            })
            .collect()
    }

    /// `n` complaints. Resolved complaints carry a resolution time no
    /// earlier than creation; open and in-progress ones never do.
    pub fn complaints(&mut self, customers: &[Customer], n: usize) -> Vec<Complaint> {
        if customers.is_empty() {
            return Vec::new();
        }
        (0..n)
            .map(|_| {
                let owner = &customers[self.pick_index(customers.len())];
                let created_at = self.between(owner.acquired_at);
                let status = self.pick(&ComplaintStatus::ALL);
                let resolved_at =
                    (status == ComplaintStatus::Resolved).then(|| self.between(created_at));
                Complaint {
                    id: self.id(),
                    customer_id: owner.id,
                    category: self.pick(&ComplaintCategory::ALL),
                    severity: self.pick(&Severity::ALL),
                    status,
                    description: self.pick(pools::COMPLAINT_DESCRIPTIONS).to_string(),
                    created_at,
                    resolved_at,
                    tags: self.pick_some(pools::CUSTOMER_TAGS, 2),
                }
            })
            .collect()
    }

    /// `n` reviews whose sentiment and text agree with the star rating.
    pub fn reviews(&mut self, customers: &[Customer], n: usize) -> Vec<Review> {
        if customers.is_empty() {
            return Vec::new();
        }
        (0..n)
            .map(|_| {
                let owner = &customers[self.pick_index(customers.len())];
                let rating = u8::try_from(self.int(1, 5)).unwrap_or(3);
                let sentiment = Sentiment::from_rating(rating);
                let text = match sentiment {
                    Sentiment::Positive => self.pick(pools::POSITIVE_REVIEWS),
                    Sentiment::Neutral => self.pick(pools::NEUTRAL_REVIEWS),
                    Sentiment::Negative => self.pick(pools::NEGATIVE_REVIEWS),
                };
                Review {
                    id: self.id(),
                    customer_id: owner.id,
                    platform: self.pick(&ReviewPlatform::ALL),
                    rating,
                    sentiment,
                    text: text.to_string(),
                    published_at: self.between(owner.acquired_at),
                    verified: self.chance(0.7),
                    tags: self.pick_some(pools::CUSTOMER_TAGS, 2),
                }
            })
            .collect()
    }

    /// Customers plus interactions, complaints and reviews bound to them.
    pub fn customer_dataset(&mut self, counts: CustomerCounts) -> CustomerDataset {
        let customers = self.customers(counts.customers);
        let interactions = self.interactions(&customers, counts.interactions);
        let complaints = self.complaints(&customers, counts.complaints);
        let reviews = self.reviews(&customers, counts.reviews);
        tracing::debug!(
            seed = self.seed(),
            customers = customers.len(),
            interactions = interactions.len(),
            complaints = complaints.len(),
            reviews = reviews.len(),
            "generated customer dataset"
        );
        CustomerDataset {
            customers,
            interactions,
            complaints,
            reviews,
        }
    }
}
