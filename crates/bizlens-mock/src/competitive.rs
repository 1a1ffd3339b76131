use bizlens_core::{
    BusinessProfile, Competitor, CompetitorComplaint, ComplaintCategory, Effort, Impact, Insight,
    InsightCategory, Opportunity, ReviewPlatform, Severity, Threat,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::generator::{fill, MockGenerator};
use crate::pools;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitiveCounts {
    pub competitors: usize,
    pub complaints: usize,
    pub insights: usize,
    pub opportunities: usize,
    pub threats: usize,
}

impl Default for CompetitiveCounts {
    fn default() -> Self {
        Self {
            competitors: 8,
            complaints: 50,
            insights: 6,
            opportunities: 4,
            threats: 3,
        }
    }
}

/// Everything the competitive intelligence dashboard shows for one business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitiveReport {
    pub profile: BusinessProfile,
    pub competitors: Vec<Competitor>,
    pub complaints: Vec<CompetitorComplaint>,
    pub insights: Vec<Insight>,
    pub opportunities: Vec<Opportunity>,
    pub threats: Vec<Threat>,
}

impl MockGenerator {
    /// `n` competitors. Names cycle through `seed_names` when any are given,
    /// otherwise they are composed from a prefix pool.
    pub fn competitors(&mut self, n: usize, seed_names: &[&str]) -> Vec<Competitor> {
        self.competitors_in("establishment", n, seed_names)
    }

    pub(crate) fn competitors_in(
        &mut self,
        category: &str,
        n: usize,
        seed_names: &[&str],
    ) -> Vec<Competitor> {
        (0..n)
            .map(|i| {
                let name = if seed_names.is_empty() {
                    format!("{} {}", self.pick(pools::COMPETITOR_PREFIXES), title_case(category))
                } else {
                    seed_names[i % seed_names.len()].to_string()
                };
                let address = format!(
                    "{} {}",
                    self.int(10, 2400),
                    self.pick(pools::STREETS)
                );
                Competitor {
                    id: self.id(),
                    name,
                    category: category.to_string(),
                    address,
                    distance_miles: self.float(0.1, 5.0),
                    rating: self.float(2.8, 4.9),
                    review_count: self.int(12, 1_800),
                    price_level: u8::try_from(self.int(1, 4)).unwrap_or(2),
                    market_share_pct: self.float(2.0, 22.0),
                    strengths: self.pick_some(pools::STRENGTHS, 3),
                    weaknesses: self.pick_some(pools::WEAKNESSES, 3),
                }
            })
            .collect()
    }

    /// `n` complaints, each about one of `competitors`.
    pub fn competitor_complaints(
        &mut self,
        competitors: &[Competitor],
        n: usize,
    ) -> Vec<CompetitorComplaint> {
        if competitors.is_empty() {
            return Vec::new();
        }
        (0..n)
            .map(|_| {
                let target = competitors[self.pick_index(competitors.len())].id;
                CompetitorComplaint {
                    id: self.id(),
                    competitor_id: target,
                    platform: self.pick(&ReviewPlatform::ALL),
                    category: self.pick(&ComplaintCategory::ALL),
                    severity: self.pick(&Severity::ALL),
                    text: self.pick(pools::COMPETITOR_COMPLAINTS).to_string(),
                    reported_at: self.within_days(180),
                }
            })
            .collect()
    }

    pub fn insights(&mut self, profile: &BusinessProfile, n: usize) -> Vec<Insight> {
        (0..n)
            .map(|_| {
                let (title, description) = self.pick(pools::INSIGHT_TEMPLATES);
                let pct = self.int(12, 68);
                let count = self.int(2, 9);
                let values = template_values(profile, pct, count);
                Insight {
                    id: self.id(),
                    title: fill(title, &values),
                    description: fill(description, &values),
                    category: self.pick(&InsightCategory::ALL),
                    confidence: u8::try_from(self.int(55, 97)).unwrap_or(75),
                    impact: self.pick(&Impact::ALL),
                    created_at: self.within_days(14),
                    metadata: json!({ "pct": pct, "sample_size": count * 40 }),
                }
            })
            .collect()
    }

    pub fn opportunities(&mut self, profile: &BusinessProfile, n: usize) -> Vec<Opportunity> {
        (0..n)
            .map(|_| {
                let (title, description) = self.pick(pools::OPPORTUNITY_TEMPLATES);
                let values = template_values(profile, self.int(15, 60), self.int(3, 25));
                Opportunity {
                    id: self.id(),
                    title: fill(title, &values),
                    description: fill(description, &values),
                    revenue_potential: self.money(2_000, 85_000),
                    priority: u8::try_from(self.int(1, 10)).unwrap_or(5),
                    effort: self.pick(&Effort::ALL),
                }
            })
            .collect()
    }

    /// `n` threats, each attributed to one of `competitors`.
    pub fn threats(&mut self, competitors: &[Competitor], n: usize) -> Vec<Threat> {
        if competitors.is_empty() {
            return Vec::new();
        }
        (0..n)
            .map(|_| {
                let source = &competitors[self.pick_index(competitors.len())];
                let (title, description) = self.pick(pools::THREAT_TEMPLATES);
                let values = [
                    ("competitor", source.name.clone()),
                    ("zip", "your area".to_string()),
                    ("pct", self.int(10, 35).to_string()),
                    ("count", self.int(4, 30).to_string()),
                ];
                Threat {
                    id: self.id(),
                    competitor_id: Some(source.id),
                    title: fill(title, &values),
                    description: fill(description, &values),
                    severity: self.pick(&Severity::ALL),
                    likelihood_pct: u8::try_from(self.int(15, 90)).unwrap_or(50),
                }
            })
            .collect()
    }

    pub fn competitive_report(
        &mut self,
        profile: &BusinessProfile,
        counts: CompetitiveCounts,
    ) -> CompetitiveReport {
        let competitors =
            self.competitors_in(profile.industry.competitor_category(), counts.competitors, &[]);
        let complaints = self.competitor_complaints(&competitors, counts.complaints);
        let insights = self.insights(profile, counts.insights);
        let opportunities = self.opportunities(profile, counts.opportunities);
        let threats = self.threats(&competitors, counts.threats);
        tracing::debug!(
            seed = self.seed(),
            business = %profile.name,
            competitors = competitors.len(),
            complaints = complaints.len(),
            "generated competitive report"
        );
        CompetitiveReport {
            profile: profile.clone(),
            competitors,
            complaints,
            insights,
            opportunities,
            threats,
        }
    }

    /// Stand-in insight shown when an analysis could not produce real ones.
    pub fn fallback_insight(&mut self, profile: &BusinessProfile, reason: &str) -> Insight {
        Insight {
            id: self.id(),
            title: format!("Preliminary market snapshot for {}", profile.name),
            description: format!(
                "We could not finish the full analysis for {} near {}. \
                 Local {} businesses typically win on review response time and \
                 transparent pricing; a full report is available after sign-up.",
                profile.name,
                profile.zip_code,
                profile.industry.label().to_lowercase()
            ),
            category: InsightCategory::Competition,
            confidence: 40,
            impact: Impact::Medium,
            created_at: self.anchor,
            metadata: json!({ "fallback": true, "reason": reason }),
        }
    }
}

fn template_values(profile: &BusinessProfile, pct: u32, count: u32) -> [(&'static str, String); 5] {
    [
        ("name", profile.name.clone()),
        ("zip", profile.zip_code.clone()),
        ("industry", profile.industry.label().to_lowercase()),
        ("pct", pct.to_string()),
        ("count", count.to_string()),
    ]
}

fn title_case(category: &str) -> String {
    category
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
