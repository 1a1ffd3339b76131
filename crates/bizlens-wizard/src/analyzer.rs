use std::future::Future;

use bizlens_core::{BusinessProfile, Insight, InsightCategory};
use bizlens_mock::MockGenerator;

use crate::live::LiveAnalyzer;
use crate::state::AnalysisStep;
use crate::AnalysisError;

/// Produces the insights for one analysis step.
pub trait Analyzer: Send {
    fn analyze(
        &mut self,
        step: AnalysisStep,
        profile: &BusinessProfile,
    ) -> impl Future<Output = Result<Vec<Insight>, AnalysisError>> + Send;
}

/// Analyzer backed by the seeded mock generator.
#[derive(Debug, Clone)]
pub struct MockAnalyzer {
    generator: MockGenerator,
    fail_at: Option<AnalysisStep>,
}

impl MockAnalyzer {
    #[must_use]
    pub fn new(generator: MockGenerator) -> Self {
        Self {
            generator,
            fail_at: None,
        }
    }

    /// Make `step` fail, to exercise the fallback path.
    #[must_use]
    pub fn failing_at(mut self, step: AnalysisStep) -> Self {
        self.fail_at = Some(step);
        self
    }
}

impl Analyzer for MockAnalyzer {
    async fn analyze(
        &mut self,
        step: AnalysisStep,
        profile: &BusinessProfile,
    ) -> Result<Vec<Insight>, AnalysisError> {
        if self.fail_at == Some(step) {
            return Err(AnalysisError::StepFailed {
                step,
                message: "simulated analyzer failure".to_string(),
            });
        }

        let (count, category) = match step {
            AnalysisStep::LocatingBusiness => (0, None),
            AnalysisStep::ScanningCompetitors => (1, Some(InsightCategory::Competition)),
            AnalysisStep::AnalyzingReviews => (1, Some(InsightCategory::Reputation)),
            AnalysisStep::MonitoringSocial => (1, Some(InsightCategory::Marketing)),
            AnalysisStep::GeneratingInsights => (3, None),
        };
        let mut insights = self.generator.insights(profile, count);
        if let Some(category) = category {
            for insight in &mut insights {
                insight.category = category;
            }
        }
        tracing::debug!(step = ?step, count = insights.len(), "mock analysis step finished");
        Ok(insights)
    }
}

/// The analyzer a demo session runs with, chosen at startup.
#[derive(Debug, Clone)]
pub enum DemoAnalyzer {
    Mock(MockAnalyzer),
    Live(LiveAnalyzer),
}

impl Analyzer for DemoAnalyzer {
    async fn analyze(
        &mut self,
        step: AnalysisStep,
        profile: &BusinessProfile,
    ) -> Result<Vec<Insight>, AnalysisError> {
        match self {
            DemoAnalyzer::Mock(inner) => inner.analyze(step, profile).await,
            DemoAnalyzer::Live(inner) => inner.analyze(step, profile).await,
        }
    }
}
