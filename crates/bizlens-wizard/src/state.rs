use std::fmt;

use bizlens_core::{BusinessProfile, Industry, Insight};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The ordered steps of a demo analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStep {
    LocatingBusiness,
    ScanningCompetitors,
    AnalyzingReviews,
    MonitoringSocial,
    GeneratingInsights,
}

impl AnalysisStep {
    pub const ALL: [AnalysisStep; 5] = [
        AnalysisStep::LocatingBusiness,
        AnalysisStep::ScanningCompetitors,
        AnalysisStep::AnalyzingReviews,
        AnalysisStep::MonitoringSocial,
        AnalysisStep::GeneratingInsights,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AnalysisStep::LocatingBusiness => "Locating your business",
            AnalysisStep::ScanningCompetitors => "Scanning nearby competitors",
            AnalysisStep::AnalyzingReviews => "Analyzing customer reviews",
            AnalysisStep::MonitoringSocial => "Monitoring social mentions",
            AnalysisStep::GeneratingInsights => "Generating insights",
        }
    }

    /// Progress percentage reached when this step finishes.
    #[must_use]
    pub fn completes_at(self) -> u8 {
        let position = Self::ALL.iter().position(|s| *s == self).unwrap_or(0) + 1;
        u8::try_from(position * 100 / Self::ALL.len()).unwrap_or(100)
    }
}

impl fmt::Display for AnalysisStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardField {
    BusinessName,
    ZipCode,
    Industry,
}

impl WizardField {
    pub const ALL: [WizardField; 3] = [
        WizardField::BusinessName,
        WizardField::ZipCode,
        WizardField::Industry,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            WizardField::BusinessName => "Business name",
            WizardField::ZipCode => "Zip code",
            WizardField::Industry => "Industry",
        }
    }
}

/// Raw text typed into the wizard form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardInput {
    pub business_name: String,
    pub zip_code: String,
    pub industry: String,
}

impl WizardInput {
    #[must_use]
    pub fn get(&self, field: WizardField) -> &str {
        match field {
            WizardField::BusinessName => &self.business_name,
            WizardField::ZipCode => &self.zip_code,
            WizardField::Industry => &self.industry,
        }
    }

    pub fn set(&mut self, field: WizardField, value: impl Into<String>) {
        let value = value.into();
        match field {
            WizardField::BusinessName => self.business_name = value,
            WizardField::ZipCode => self.zip_code = value,
            WizardField::Industry => self.industry = value,
        }
    }

    /// Fields that are empty after trimming. Presence is the only check.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<WizardField> {
        WizardField::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    #[must_use]
    pub fn to_profile(&self) -> BusinessProfile {
        BusinessProfile::new(
            self.business_name.trim(),
            self.zip_code.trim(),
            Industry::from_input(&self.industry),
        )
    }
}

/// Where the insights of a finished analysis came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum InsightOrigin {
    Generated,
    /// The analysis failed part-way and a single stand-in insight was used.
    Fallback { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub profile: BusinessProfile,
    pub insights: Vec<Insight>,
    pub origin: InsightOrigin,
    pub completed_at: DateTime<Utc>,
}

impl AnalysisOutcome {
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, InsightOrigin::Fallback { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum WizardState {
    Idle,
    CollectingInput {
        input: WizardInput,
    },
    Analyzing {
        /// Index into [`AnalysisStep::ALL`].
        step: usize,
        /// Overall progress, 0-100.
        progress: u8,
    },
    Complete {
        outcome: AnalysisOutcome,
    },
    Summary {
        outcome: AnalysisOutcome,
    },
}

impl WizardState {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            WizardState::Idle => "idle",
            WizardState::CollectingInput { .. } => "collecting_input",
            WizardState::Analyzing { .. } => "analyzing",
            WizardState::Complete { .. } => "complete",
            WizardState::Summary { .. } => "summary",
        }
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&AnalysisOutcome> {
        match self {
            WizardState::Complete { outcome } | WizardState::Summary { outcome } => Some(outcome),
            _ => None,
        }
    }

    #[must_use]
    pub fn current_step(&self) -> Option<AnalysisStep> {
        match self {
            WizardState::Analyzing { step, .. } => AnalysisStep::ALL.get(*step).copied(),
            _ => None,
        }
    }
}
