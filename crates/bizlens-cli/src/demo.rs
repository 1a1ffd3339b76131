//! `demo`: the wizard in a terminal, one line per published state.

use std::fmt::Write as _;
use std::time::Duration;

use bizlens_mock::MockGenerator;
use bizlens_sources::IntelligenceSources;
use bizlens_wizard::{
    DemoAnalyzer, DemoWizard, InsightOrigin, LiveAnalyzer, MockAnalyzer, WizardField, WizardState,
    WizardTiming,
};
use chrono::Utc;

#[derive(Debug, Clone)]
pub(crate) struct DemoInput {
    pub(crate) business_name: String,
    pub(crate) zip_code: String,
    pub(crate) industry: String,
}

fn generator(seed: Option<u64>) -> MockGenerator {
    match seed {
        Some(seed) => MockGenerator::seeded(seed, Utc::now()),
        None => MockGenerator::from_entropy(Utc::now()),
    }
}

pub(crate) fn analyzer(seed: Option<u64>, live: bool) -> anyhow::Result<DemoAnalyzer> {
    if !live {
        return Ok(DemoAnalyzer::Mock(MockAnalyzer::new(generator(seed))));
    }
    let settings = bizlens_core::load_source_settings()?;
    let sources = IntelligenceSources::from_settings(&settings)?;
    if !sources.any_configured() {
        tracing::warn!("no source API keys configured; live steps will fall back");
    }
    Ok(DemoAnalyzer::Live(LiveAnalyzer::new(sources, generator(seed))))
}

/// One terminal line for a state, or `None` when it adds nothing new.
pub(crate) fn describe(state: &WizardState) -> Option<String> {
    match state {
        WizardState::Idle | WizardState::CollectingInput { .. } => None,
        WizardState::Analyzing { step, progress } => {
            let label = bizlens_wizard::AnalysisStep::ALL
                .get(*step)
                .map_or("Finishing up", |s| s.label());
            Some(format!("[{progress:>3}%] {label}"))
        }
        WizardState::Complete { outcome } => {
            let mut out = format!(
                "analysis complete for {} ({} insights)",
                outcome.profile.name,
                outcome.insights.len()
            );
            if let InsightOrigin::Fallback { reason } = &outcome.origin {
                let _ = write!(out, "\n  partial results: {reason}");
            }
            for insight in &outcome.insights {
                let _ = write!(
                    out,
                    "\n  - [{}] {} ({}% confidence)",
                    insight.category.label(),
                    insight.title,
                    insight.confidence
                );
            }
            Some(out)
        }
        WizardState::Summary { .. } => Some("summary ready".to_string()),
    }
}

/// # Errors
///
/// Returns an error for a blank input, or when `--live` is given and the
/// source configuration cannot be loaded.
pub(crate) async fn run_demo(input: &DemoInput, seed: Option<u64>, live: bool) -> anyhow::Result<()> {
    let timing = WizardTiming {
        summary_delay: Duration::ZERO,
        ..WizardTiming::default()
    };
    let mut wizard = DemoWizard::new(analyzer(seed, live)?, timing, generator(seed));
    wizard.start()?;
    wizard.set_field(WizardField::BusinessName, input.business_name.as_str())?;
    wizard.set_field(WizardField::ZipCode, input.zip_code.as_str())?;
    wizard.set_field(WizardField::Industry, input.industry.as_str())?;
    wizard.submit()?;

    let mut states = wizard.subscribe();
    let printer = tokio::spawn(async move {
        let mut last = None;
        while states.changed().await.is_ok() {
            let line = describe(&states.borrow_and_update());
            if line.is_some() && line != last {
                if let Some(text) = &line {
                    println!("{text}");
                }
                last = line;
            }
        }
    });

    wizard.run_to_summary().await?;
    drop(wizard);
    printer.await?;
    Ok(())
}
