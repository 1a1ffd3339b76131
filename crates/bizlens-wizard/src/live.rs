//! Analyzer that pulls from the third-party sources.

use bizlens_core::{BusinessProfile, Impact, Insight, InsightCategory, Sentiment};
use bizlens_mock::MockGenerator;
use bizlens_sources::{Fetched, IntelligenceSources};
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::analyzer::Analyzer;
use crate::state::AnalysisStep;
use crate::AnalysisError;

/// Runs each step against the live sources. Sources fall back to canned
/// data on their own, so every insight records under `data_origin` whether
/// it was built from live or fallback data.
#[derive(Debug, Clone)]
pub struct LiveAnalyzer {
    sources: IntelligenceSources,
    generator: MockGenerator,
}

impl LiveAnalyzer {
    #[must_use]
    pub fn new(sources: IntelligenceSources, generator: MockGenerator) -> Self {
        Self { sources, generator }
    }

    async fn locate(&self, profile: &BusinessProfile) -> Vec<Insight> {
        let fetched = self.sources.enrichment.lookup(profile).await;
        let company = fetched.data();
        let size = company.employee_range.as_deref().unwrap_or("unknown");
        vec![insight(
            format!("{} profile located", company.name),
            format!(
                "Matched {} near {} ({size} employees). Tags: {}.",
                profile.name,
                profile.zip_code,
                if company.tags.is_empty() {
                    "none".to_string()
                } else {
                    company.tags.join(", ")
                }
            ),
            InsightCategory::Operations,
            Impact::Low,
            70,
            origin_metadata(&fetched, json!({ "founded_year": company.founded_year })),
        )]
    }

    #[allow(clippy::cast_precision_loss)]
    async fn scan_competitors(&self, profile: &BusinessProfile) -> Vec<Insight> {
        let fetched = self.sources.places.nearby(profile).await;
        let competitors = fetched.data();
        if competitors.is_empty() {
            return Vec::new();
        }
        let average = competitors.iter().map(|c| c.rating).sum::<f32>() / competitors.len() as f32;
        let leader = competitors
            .iter()
            .max_by(|a, b| a.rating.total_cmp(&b.rating))
            .map_or("a nearby rival", |c| c.name.as_str());
        vec![insight(
            format!("{} competitors found near {}", competitors.len(), profile.zip_code),
            format!(
                "Nearby {} average {average:.1} stars. {leader} leads on rating.",
                profile.industry.label().to_lowercase()
            ),
            InsightCategory::Competition,
            Impact::High,
            82,
            origin_metadata(
                &fetched,
                json!({ "competitor_count": competitors.len(), "average_rating": average }),
            ),
        )]
    }

    #[allow(clippy::cast_precision_loss)]
    async fn analyze_reviews(&self, profile: &BusinessProfile) -> Vec<Insight> {
        let fetched = self.sources.reviews.for_business(profile).await;
        let reviews = fetched.data();
        if reviews.is_empty() {
            return Vec::new();
        }
        let negative = reviews
            .iter()
            .filter(|r| r.sentiment() == Sentiment::Negative)
            .count();
        let negative_pct = negative as f32 / reviews.len() as f32 * 100.0;
        let average =
            reviews.iter().map(|r| f32::from(r.rating)).sum::<f32>() / reviews.len() as f32;
        let impact = if negative_pct >= 30.0 {
            Impact::High
        } else {
            Impact::Medium
        };
        vec![insight(
            format!("Customers rate {} {average:.1} stars", profile.name),
            format!(
                "{negative_pct:.0}% of {} recent reviews are negative. Replying to them quickly protects your rating.",
                reviews.len()
            ),
            InsightCategory::Reputation,
            impact,
            78,
            origin_metadata(
                &fetched,
                json!({ "review_count": reviews.len(), "negative_pct": negative_pct }),
            ),
        )]
    }

    #[allow(clippy::cast_precision_loss)]
    async fn monitor_social(&self, profile: &BusinessProfile) -> Vec<Insight> {
        let mentions = self.sources.social.mentions(profile).await;
        let news = self.sources.news.search(profile).await;

        let scores: Vec<f32> = mentions
            .data()
            .iter()
            .map(|m| m.sentiment_score)
            .chain(news.data().iter().map(|a| a.sentiment_score))
            .collect();
        let mood = if scores.is_empty() {
            Sentiment::Neutral
        } else {
            Sentiment::from_score(scores.iter().sum::<f32>() / scores.len() as f32)
        };

        let mut metadata = origin_metadata(
            &mentions,
            json!({
                "mention_count": mentions.data().len(),
                "article_count": news.data().len(),
            }),
        );
        metadata["news_origin"] = Value::from(news.origin_label());

        vec![insight(
            format!("Online buzz about {} is {}", profile.name, mood.label().to_lowercase()),
            format!(
                "{} social mentions and {} news stories mention your business this month.",
                mentions.data().len(),
                news.data().len()
            ),
            InsightCategory::Marketing,
            Impact::Medium,
            65,
            metadata,
        )]
    }

    fn generate(&mut self, profile: &BusinessProfile) -> Vec<Insight> {
        let mut insights = self.generator.insights(profile, 2);
        for insight in &mut insights {
            insight.metadata["data_origin"] = Value::from("generated");
        }
        insights
    }
}

impl Analyzer for LiveAnalyzer {
    async fn analyze(
        &mut self,
        step: AnalysisStep,
        profile: &BusinessProfile,
    ) -> Result<Vec<Insight>, AnalysisError> {
        let insights = match step {
            AnalysisStep::LocatingBusiness => self.locate(profile).await,
            AnalysisStep::ScanningCompetitors => self.scan_competitors(profile).await,
            AnalysisStep::AnalyzingReviews => self.analyze_reviews(profile).await,
            AnalysisStep::MonitoringSocial => self.monitor_social(profile).await,
            AnalysisStep::GeneratingInsights => self.generate(profile),
        };
        tracing::debug!(step = ?step, count = insights.len(), "live analysis step finished");
        Ok(insights)
    }
}

fn insight(
    title: String,
    description: String,
    category: InsightCategory,
    impact: Impact,
    confidence: u8,
    metadata: Value,
) -> Insight {
    Insight {
        id: Uuid::new_v4(),
        title,
        description,
        category,
        confidence,
        impact,
        created_at: Utc::now(),
        metadata,
    }
}

fn origin_metadata<T>(fetched: &Fetched<T>, mut extra: Value) -> Value {
    extra["data_origin"] = Value::from(fetched.origin_label());
    if let Some(reason) = fetched.reason() {
        extra["fallback_reason"] = Value::from(reason.to_string());
    }
    extra
}
