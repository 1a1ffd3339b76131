//! Customer-side records shown on the customer intelligence dashboard.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::taxonomy::{
    Channel, ComplaintCategory, ComplaintStatus, InteractionCategory, Priority, ReviewPlatform,
    Sentiment, Severity,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub preferred_channel: Channel,
    /// Satisfaction on a 1-10 scale.
    pub satisfaction: u8,
    /// Lifetime value in USD.
    pub lifetime_value: Decimal,
    pub tags: Vec<String>,
    pub acquired_at: DateTime<Utc>,
    pub last_interaction_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub channel: Channel,
    pub category: InteractionCategory,
    pub priority: Priority,
    pub sentiment: Sentiment,
    pub summary: String,
    pub occurred_at: DateTime<Utc>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub category: ComplaintCategory,
    pub severity: Severity,
    pub status: ComplaintStatus,
    pub description: String,
    pub created_at: DateTime<Utc>,
    /// Set only when `status` is [`ComplaintStatus::Resolved`].
    pub resolved_at: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub platform: ReviewPlatform,
    /// Star rating, 1-5.
    pub rating: u8,
    pub sentiment: Sentiment,
    pub text: String,
    pub published_at: DateTime<Utc>,
    pub verified: bool,
    pub tags: Vec<String>,
}

/// Business profile edited on the settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessSettings {
    pub business_name: String,
    pub contact_email: String,
    pub phone: String,
    pub zip_code: String,
    pub weekly_report: bool,
    /// Rating below which a new review raises an alert.
    pub alert_threshold: u8,
}

impl Default for BusinessSettings {
    fn default() -> Self {
        Self {
            business_name: String::new(),
            contact_email: String::new(),
            phone: String::new(),
            zip_code: String::new(),
            weekly_report: true,
            alert_threshold: 3,
        }
    }
}
