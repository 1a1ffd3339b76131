//! Closed enumerations used across entities and their presentation tones.
//!
//! Every enum carries an `ALL` list (uniform random choice in the mock
//! generator, option lists in filter forms), a human label, and a [`Tone`].
//! Presentation classes hang off [`Tone`], so adding a variant forces the
//! match arms below to be updated.

use serde::{Deserialize, Serialize};

/// Visual tone of a badge, pill or alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Neutral,
    Info,
    Caution,
    Critical,
}

impl Tone {
    /// Utility classes for a badge rendered in this tone.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Tone::Positive => "bg-emerald-100 text-emerald-800",
            Tone::Neutral => "bg-slate-100 text-slate-700",
            Tone::Info => "bg-sky-100 text-sky-800",
            Tone::Caution => "bg-amber-100 text-amber-800",
            Tone::Critical => "bg-rose-100 text-rose-800",
        }
    }

    /// Accent colour used for progress bars and card borders.
    #[must_use]
    pub fn accent_class(self) -> &'static str {
        match self {
            Tone::Positive => "border-emerald-500",
            Tone::Neutral => "border-slate-300",
            Tone::Info => "border-sky-500",
            Tone::Caution => "border-amber-500",
            Tone::Critical => "border-rose-600",
        }
    }
}

/// Contact channel a customer prefers, or an interaction arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Email,
    Phone,
    WebForm,
    Chat,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::Email,
        Channel::Phone,
        Channel::WebForm,
        Channel::Chat,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Email => "email",
            Channel::Phone => "phone",
            Channel::WebForm => "web_form",
            Channel::Chat => "chat",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Channel::Email => "Email",
            Channel::Phone => "Phone",
            Channel::WebForm => "Web form",
            Channel::Chat => "Live chat",
        }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Channel::Email | Channel::WebForm => Tone::Neutral,
            Channel::Phone | Channel::Chat => Tone::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionCategory {
    Support,
    Sales,
    Billing,
    Scheduling,
    Feedback,
}

impl InteractionCategory {
    pub const ALL: [InteractionCategory; 5] = [
        InteractionCategory::Support,
        InteractionCategory::Sales,
        InteractionCategory::Billing,
        InteractionCategory::Scheduling,
        InteractionCategory::Feedback,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            InteractionCategory::Support => "support",
            InteractionCategory::Sales => "sales",
            InteractionCategory::Billing => "billing",
            InteractionCategory::Scheduling => "scheduling",
            InteractionCategory::Feedback => "feedback",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            InteractionCategory::Support => "Support",
            InteractionCategory::Sales => "Sales",
            InteractionCategory::Billing => "Billing",
            InteractionCategory::Scheduling => "Scheduling",
            InteractionCategory::Feedback => "Feedback",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Priority::Low => Tone::Neutral,
            Priority::Medium => Tone::Info,
            Priority::High => Tone::Caution,
            Priority::Urgent => Tone::Critical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Bucket a lexicon score in `[-1.0, 1.0]` into a sentiment label.
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        if score > 0.15 {
            Sentiment::Positive
        } else if score < -0.15 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Sentiment implied by a 1-5 star rating.
    #[must_use]
    pub fn from_rating(rating: u8) -> Self {
        match rating {
            4..=5 => Sentiment::Positive,
            3 => Sentiment::Neutral,
            _ => Sentiment::Negative,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Sentiment::Positive => Tone::Positive,
            Sentiment::Neutral => Tone::Neutral,
            Sentiment::Negative => Tone::Critical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Severity::Low => Tone::Neutral,
            Severity::Medium => Tone::Info,
            Severity::High => Tone::Caution,
            Severity::Critical => Tone::Critical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Open,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 3] = [
        ComplaintStatus::Open,
        ComplaintStatus::InProgress,
        ComplaintStatus::Resolved,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ComplaintStatus::Open => "open",
            ComplaintStatus::InProgress => "in_progress",
            ComplaintStatus::Resolved => "resolved",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ComplaintStatus::Open => "Open",
            ComplaintStatus::InProgress => "In progress",
            ComplaintStatus::Resolved => "Resolved",
        }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            ComplaintStatus::Open => Tone::Critical,
            ComplaintStatus::InProgress => Tone::Caution,
            ComplaintStatus::Resolved => Tone::Positive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintCategory {
    Service,
    Quality,
    Pricing,
    WaitTime,
    Cleanliness,
    Staff,
}

impl ComplaintCategory {
    pub const ALL: [ComplaintCategory; 6] = [
        ComplaintCategory::Service,
        ComplaintCategory::Quality,
        ComplaintCategory::Pricing,
        ComplaintCategory::WaitTime,
        ComplaintCategory::Cleanliness,
        ComplaintCategory::Staff,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ComplaintCategory::Service => "service",
            ComplaintCategory::Quality => "quality",
            ComplaintCategory::Pricing => "pricing",
            ComplaintCategory::WaitTime => "wait_time",
            ComplaintCategory::Cleanliness => "cleanliness",
            ComplaintCategory::Staff => "staff",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ComplaintCategory::Service => "Service",
            ComplaintCategory::Quality => "Quality",
            ComplaintCategory::Pricing => "Pricing",
            ComplaintCategory::WaitTime => "Wait time",
            ComplaintCategory::Cleanliness => "Cleanliness",
            ComplaintCategory::Staff => "Staff",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewPlatform {
    Google,
    Yelp,
    Facebook,
    TripAdvisor,
    Angi,
}

impl ReviewPlatform {
    pub const ALL: [ReviewPlatform; 5] = [
        ReviewPlatform::Google,
        ReviewPlatform::Yelp,
        ReviewPlatform::Facebook,
        ReviewPlatform::TripAdvisor,
        ReviewPlatform::Angi,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewPlatform::Google => "google",
            ReviewPlatform::Yelp => "yelp",
            ReviewPlatform::Facebook => "facebook",
            ReviewPlatform::TripAdvisor => "trip_advisor",
            ReviewPlatform::Angi => "angi",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ReviewPlatform::Google => "Google",
            ReviewPlatform::Yelp => "Yelp",
            ReviewPlatform::Facebook => "Facebook",
            ReviewPlatform::TripAdvisor => "Tripadvisor",
            ReviewPlatform::Angi => "Angi",
        }
    }

    /// Lenient parse used for third-party payloads; unknown platforms map to Google.
    #[must_use]
    pub fn from_external(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "yelp" => ReviewPlatform::Yelp,
            "facebook" | "fb" => ReviewPlatform::Facebook,
            "tripadvisor" | "trip_advisor" => ReviewPlatform::TripAdvisor,
            "angi" | "angies_list" => ReviewPlatform::Angi,
            _ => ReviewPlatform::Google,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    Pricing,
    Marketing,
    Operations,
    CustomerExperience,
    Competition,
    Reputation,
}

impl InsightCategory {
    pub const ALL: [InsightCategory; 6] = [
        InsightCategory::Pricing,
        InsightCategory::Marketing,
        InsightCategory::Operations,
        InsightCategory::CustomerExperience,
        InsightCategory::Competition,
        InsightCategory::Reputation,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            InsightCategory::Pricing => "pricing",
            InsightCategory::Marketing => "marketing",
            InsightCategory::Operations => "operations",
            InsightCategory::CustomerExperience => "customer_experience",
            InsightCategory::Competition => "competition",
            InsightCategory::Reputation => "reputation",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            InsightCategory::Pricing => "Pricing",
            InsightCategory::Marketing => "Marketing",
            InsightCategory::Operations => "Operations",
            InsightCategory::CustomerExperience => "Customer experience",
            InsightCategory::Competition => "Competition",
            InsightCategory::Reputation => "Reputation",
        }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            InsightCategory::Pricing | InsightCategory::Operations => Tone::Info,
            InsightCategory::Marketing | InsightCategory::CustomerExperience => Tone::Positive,
            InsightCategory::Competition => Tone::Caution,
            InsightCategory::Reputation => Tone::Critical,
        }
    }
}
