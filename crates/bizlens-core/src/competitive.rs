//! Competitive intelligence records: rivals, what customers say about them,
//! and the insights, opportunities and threats derived from that.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::taxonomy::{ComplaintCategory, InsightCategory, ReviewPlatform, Severity, Tone};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub address: String,
    pub distance_miles: f32,
    /// Average public rating, 1.0-5.0.
    pub rating: f32,
    pub review_count: u32,
    /// Price level, 1 (`$`) to 4 (`$$$$`).
    pub price_level: u8,
    pub market_share_pct: f32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

impl Competitor {
    /// `$`-string for the price level.
    #[must_use]
    pub fn price_symbol(&self) -> String {
        "$".repeat(usize::from(self.price_level.clamp(1, 4)))
    }
}

/// A public complaint about a competitor, mined from review platforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorComplaint {
    pub id: Uuid,
    pub competitor_id: Uuid,
    pub platform: ReviewPlatform,
    pub category: ComplaintCategory,
    pub severity: Severity,
    pub text: String,
    pub reported_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    pub const ALL: [Impact; 3] = [Impact::Low, Impact::Medium, Impact::High];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Impact::Low => "low",
            Impact::Medium => "medium",
            Impact::High => "high",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Impact::Low => "Low impact",
            Impact::Medium => "Medium impact",
            Impact::High => "High impact",
        }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Impact::Low => Tone::Neutral,
            Impact::Medium => Tone::Info,
            Impact::High => Tone::Positive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effort {
    QuickWin,
    Project,
    Initiative,
}

impl Effort {
    pub const ALL: [Effort; 3] = [Effort::QuickWin, Effort::Project, Effort::Initiative];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Effort::QuickWin => "Quick win",
            Effort::Project => "Project",
            Effort::Initiative => "Initiative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: InsightCategory,
    /// Confidence, 0-100.
    pub confidence: u8,
    pub impact: Impact,
    pub created_at: DateTime<Utc>,
    /// Free-form supporting figures; shape varies by insight source.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Estimated yearly revenue potential in USD.
    pub revenue_potential: Decimal,
    /// Priority, 1 (low) to 10 (act now).
    pub priority: u8,
    pub effort: Effort,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Threat {
    pub id: Uuid,
    pub competitor_id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub likelihood_pct: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competitor(price_level: u8) -> Competitor {
        Competitor {
            id: Uuid::nil(),
            name: "Joe's".to_string(),
            category: "pizza".to_string(),
            address: "1 Main St".to_string(),
            distance_miles: 0.4,
            rating: 4.2,
            review_count: 120,
            price_level,
            market_share_pct: 12.5,
            strengths: vec![],
            weaknesses: vec![],
        }
    }

    #[test]
    fn price_symbol_repeats_dollar_signs() {
        assert_eq!(competitor(2).price_symbol(), "$$");
        assert_eq!(competitor(4).price_symbol(), "$$$$");
    }

    #[test]
    fn price_symbol_clamps_out_of_range_levels() {
        assert_eq!(competitor(0).price_symbol(), "$");
        assert_eq!(competitor(9).price_symbol(), "$$$$");
    }

    #[test]
    fn insight_metadata_defaults_to_null() {
        let json = serde_json::json!({
            "id": Uuid::nil(),
            "title": "t",
            "description": "d",
            "category": "pricing",
            "confidence": 80,
            "impact": "high",
            "created_at": "2025-01-01T00:00:00Z"
        });
        let insight: Insight = serde_json::from_value(json).expect("deserialize");
        assert!(insight.metadata.is_null());
        assert_eq!(insight.impact, Impact::High);
    }
}
