use std::time::Duration;

use bizlens_core::{AppConfig, BusinessProfile, Insight};
use bizlens_mock::MockGenerator;
use chrono::Utc;
use tokio::sync::watch;

use crate::analyzer::Analyzer;
use crate::state::{
    AnalysisOutcome, AnalysisStep, InsightOrigin, WizardField, WizardInput, WizardState,
};
use crate::WizardError;

/// Pacing of the progress animation and the summary hand-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardTiming {
    pub tick: Duration,
    pub ticks_per_step: u8,
    pub summary_delay: Duration,
}

impl Default for WizardTiming {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(150),
            ticks_per_step: 5,
            summary_delay: Duration::from_millis(4000),
        }
    }
}

impl WizardTiming {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            tick: Duration::from_millis(config.demo_tick_ms),
            ticks_per_step: config.demo_ticks_per_step.max(1),
            summary_delay: Duration::from_millis(config.demo_summary_delay_ms),
        }
    }
}

/// Drives one visitor through the demo: input, staged analysis, results.
///
/// Every state change is published on a watch channel so observers (the
/// HTTP session, the CLI) can follow progress without holding the wizard.
pub struct DemoWizard<A> {
    analyzer: A,
    timing: WizardTiming,
    fallback: MockGenerator,
    profile: Option<BusinessProfile>,
    state: watch::Sender<WizardState>,
}

impl<A: Analyzer> DemoWizard<A> {
    /// `fallback` builds the stand-in insight when the analyzer fails.
    #[must_use]
    pub fn new(analyzer: A, timing: WizardTiming, fallback: MockGenerator) -> Self {
        Self {
            analyzer,
            timing,
            fallback,
            profile: None,
            state: watch::Sender::new(WizardState::Idle),
        }
    }

    #[must_use]
    pub fn state(&self) -> WizardState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<WizardState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn profile(&self) -> Option<&BusinessProfile> {
        self.profile.as_ref()
    }

    /// # Errors
    ///
    /// [`WizardError::InvalidTransition`] unless the wizard is idle.
    pub fn start(&mut self) -> Result<(), WizardError> {
        self.require_state("start", |s| matches!(s, WizardState::Idle))?;
        self.publish(WizardState::CollectingInput {
            input: WizardInput::default(),
        });
        Ok(())
    }

    /// # Errors
    ///
    /// [`WizardError::InvalidTransition`] unless input is being collected.
    pub fn set_field(
        &mut self,
        field: WizardField,
        value: impl Into<String>,
    ) -> Result<(), WizardError> {
        self.require_state("set_field", |s| {
            matches!(s, WizardState::CollectingInput { .. })
        })?;
        let value = value.into();
        self.state.send_modify(|state| {
            if let WizardState::CollectingInput { input } = state {
                input.set(field, value);
            }
        });
        Ok(())
    }

    /// Validate the collected input and queue the analysis.
    ///
    /// # Errors
    ///
    /// [`WizardError::MissingFields`] when any field is blank; the wizard
    /// keeps collecting input. [`WizardError::InvalidTransition`] when not
    /// collecting input.
    pub fn submit(&mut self) -> Result<BusinessProfile, WizardError> {
        let input = match &*self.state.borrow() {
            WizardState::CollectingInput { input } => input.clone(),
            other => {
                return Err(WizardError::InvalidTransition {
                    action: "submit",
                    state: other.name(),
                })
            }
        };

        let missing = input.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(?missing, "demo input incomplete");
            return Err(WizardError::MissingFields(missing));
        }

        let profile = input.to_profile();
        self.profile = Some(profile.clone());
        self.publish(WizardState::Analyzing {
            step: 0,
            progress: 0,
        });
        Ok(profile)
    }

    /// Walk every analysis step and settle on `Complete`.
    ///
    /// An analyzer error stops the walk and completes with a single
    /// fallback insight instead; it is never surfaced as an error.
    ///
    /// # Errors
    ///
    /// [`WizardError::InvalidTransition`] unless a submitted analysis is
    /// pending.
    pub async fn run_analysis(&mut self) -> Result<AnalysisOutcome, WizardError> {
        self.require_state("run_analysis", |s| {
            matches!(s, WizardState::Analyzing { step: 0, progress: 0 })
        })?;
        let Some(profile) = self.profile.clone() else {
            return Err(WizardError::InvalidTransition {
                action: "run_analysis",
                state: "analyzing",
            });
        };

        tracing::info!(business = %profile.name, zip = %profile.zip_code, "demo analysis started");

        let mut insights: Vec<Insight> = Vec::new();
        let mut origin = InsightOrigin::Generated;
        let mut floor = 0u8;

        for (index, step) in AnalysisStep::ALL.into_iter().enumerate() {
            let ceiling = step.completes_at();
            self.advance(index, floor, ceiling).await;
            floor = ceiling;

            match self.analyzer.analyze(step, &profile).await {
                Ok(found) => insights.extend(found),
                Err(e) => {
                    tracing::warn!(step = %step, error = %e, "analysis step failed, using fallback insight");
                    let reason = e.to_string();
                    insights = vec![self.fallback.fallback_insight(&profile, &reason)];
                    origin = InsightOrigin::Fallback { reason };
                    break;
                }
            }
        }

        let outcome = AnalysisOutcome {
            profile,
            insights,
            origin,
            completed_at: Utc::now(),
        };
        tracing::info!(
            insights = outcome.insights.len(),
            fallback = outcome.is_fallback(),
            "demo analysis complete"
        );
        self.publish(WizardState::Complete {
            outcome: outcome.clone(),
        });
        Ok(outcome)
    }

    /// # Errors
    ///
    /// [`WizardError::InvalidTransition`] unless the analysis is complete.
    pub fn show_summary(&mut self) -> Result<(), WizardError> {
        let outcome = match &*self.state.borrow() {
            WizardState::Complete { outcome } => outcome.clone(),
            other => {
                return Err(WizardError::InvalidTransition {
                    action: "show_summary",
                    state: other.name(),
                })
            }
        };
        self.publish(WizardState::Summary { outcome });
        Ok(())
    }

    /// Run the analysis, hold the results on screen for the summary delay,
    /// then move to the summary.
    ///
    /// # Errors
    ///
    /// Same as [`DemoWizard::run_analysis`].
    pub async fn run_to_summary(&mut self) -> Result<AnalysisOutcome, WizardError> {
        let outcome = self.run_analysis().await?;
        tokio::time::sleep(self.timing.summary_delay).await;
        self.show_summary()?;
        Ok(outcome)
    }

    /// Back to `Idle`, dropping any input and results.
    pub fn reset(&mut self) {
        self.profile = None;
        self.publish(WizardState::Idle);
    }

    async fn advance(&self, index: usize, floor: u8, ceiling: u8) {
        let ticks = self.timing.ticks_per_step.max(1);
        let span = u16::from(ceiling.saturating_sub(floor));
        for tick in 1..=ticks {
            tokio::time::sleep(self.timing.tick).await;
            let gained = span * u16::from(tick) / u16::from(ticks);
            let progress = floor.saturating_add(u8::try_from(gained).unwrap_or(u8::MAX));
            self.publish(WizardState::Analyzing {
                step: index,
                progress: progress.min(100),
            });
        }
    }

    fn require_state(
        &self,
        action: &'static str,
        allowed: impl FnOnce(&WizardState) -> bool,
    ) -> Result<(), WizardError> {
        let state = self.state.borrow();
        if allowed(&state) {
            Ok(())
        } else {
            Err(WizardError::InvalidTransition {
                action,
                state: state.name(),
            })
        }
    }

    fn publish(&self, next: WizardState) {
        tracing::debug!(state = next.name(), "wizard state changed");
        self.state.send_replace(next);
    }
}
