//! The staged demo analysis: wizard state machine, analyzers and runner.

pub mod analyzer;
pub mod live;
pub mod runner;
pub mod state;

use thiserror::Error;

pub use analyzer::{Analyzer, DemoAnalyzer, MockAnalyzer};
pub use live::LiveAnalyzer;
pub use runner::{DemoWizard, WizardTiming};
pub use state::{
    AnalysisOutcome, AnalysisStep, InsightOrigin, WizardField, WizardInput, WizardState,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("missing required fields: {}", join_labels(.0))]
    MissingFields(Vec<WizardField>),
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{step} failed: {message}")]
    StepFailed { step: AnalysisStep, message: String },
}

fn join_labels(fields: &[WizardField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}
