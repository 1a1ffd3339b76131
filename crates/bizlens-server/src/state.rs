use std::sync::Arc;

use bizlens_core::{AppConfig, BusinessProfile, Industry, VerticalsFile};
use bizlens_mock::{CompetitiveCounts, CustomerCounts, MockGenerator};
use bizlens_sources::IntelligenceSources;
use bizlens_store::{AppStore, SnapshotStore};
use bizlens_wizard::{DemoAnalyzer, LiveAnalyzer, MockAnalyzer, WizardTiming};
use chrono::Utc;
use tokio::sync::RwLock;

use crate::auth::AccountStore;
use crate::demo::SessionRegistry;

/// Shared handles every handler can reach.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<RwLock<AppStore>>,
    pub snapshots: Option<SnapshotStore>,
    pub verticals: Arc<VerticalsFile>,
    pub sources: IntelligenceSources,
    pub sessions: SessionRegistry,
    pub accounts: AccountStore,
    pub timing: WizardTiming,
}

impl AppState {
    /// Wire up state for `config`, restoring the store from its snapshot
    /// when one is usable and generating a fresh dataset otherwise.
    pub fn bootstrap(config: AppConfig) -> anyhow::Result<Self> {
        let verticals = bizlens_core::load_verticals(&config.verticals_path)?;
        let sources = IntelligenceSources::from_settings(&config.sources)?;
        let snapshots = config
            .persist_snapshots
            .then(|| SnapshotStore::new(config.data_dir.clone()));

        let restored = snapshots.as_ref().and_then(|s| match s.load() {
            Ok(Some(snapshot)) => {
                tracing::info!(
                    path = %s.path().display(),
                    saved_at = %snapshot.saved_at,
                    "restored store from snapshot"
                );
                Some(snapshot.state)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "snapshot unusable, starting with a fresh dataset");
                None
            }
        });

        let store = match restored {
            Some(store) => store,
            None => {
                let mut generator = generator_for(config.mock_seed);
                tracing::info!(seed = generator.seed(), "generating demo dataset");
                seeded_store(&mut generator, CustomerCounts::default())
            }
        };

        if sources.any_configured() {
            tracing::info!("source API keys configured; demo analysis uses live data");
        }

        Ok(Self {
            timing: WizardTiming::from_config(&config),
            config: Arc::new(config),
            store: Arc::new(RwLock::new(store)),
            snapshots,
            verticals: Arc::new(verticals),
            sources,
            sessions: SessionRegistry::default(),
            accounts: AccountStore::default(),
        })
    }

    /// Generator for one request or session; fixed when a seed is configured.
    #[must_use]
    pub fn generator(&self) -> MockGenerator {
        generator_for(self.config.mock_seed)
    }

    /// Live analyzer when any source key is configured, mock otherwise.
    #[must_use]
    pub fn analyzer(&self) -> DemoAnalyzer {
        if self.sources.any_configured() {
            DemoAnalyzer::Live(LiveAnalyzer::new(self.sources.clone(), self.generator()))
        } else {
            DemoAnalyzer::Mock(MockAnalyzer::new(self.generator()))
        }
    }

    /// Write the store snapshot if persistence is on. Failures are logged,
    /// never surfaced to the caller.
    pub async fn persist(&self) {
        let Some(snapshots) = &self.snapshots else {
            return;
        };
        let store = self.store.read().await;
        match snapshots.save(&store) {
            Ok(()) => tracing::debug!(path = %snapshots.path().display(), "snapshot saved"),
            Err(e) => tracing::error!(error = %e, "failed to save store snapshot"),
        }
    }
}

pub fn generator_for(seed: Option<u64>) -> MockGenerator {
    match seed {
        Some(seed) => MockGenerator::seeded(seed, Utc::now()),
        None => MockGenerator::from_entropy(Utc::now()),
    }
}

/// A store populated with a customer dataset and a competitive report for
/// the demo business.
pub fn seeded_store(generator: &mut MockGenerator, counts: CustomerCounts) -> AppStore {
    let dataset = generator.customer_dataset(counts);
    let profile = demo_profile(None);
    let report = generator.competitive_report(&profile, CompetitiveCounts::default());

    let mut store = AppStore::new();
    store.set_customer_list(dataset.customers);
    store.set_interaction_list(dataset.interactions);
    store.set_complaint_list(dataset.complaints);
    store.set_review_list(dataset.reviews);
    store.set_insight_list(report.insights);
    store.set_competitor_list(report.competitors);
    store.set_competitor_complaint_list(report.complaints);
    store.set_opportunity_list(report.opportunities);
    store.set_threat_list(report.threats);
    store
}

/// The business the dashboards describe: the saved settings when filled in,
/// otherwise a sample restaurant.
pub fn demo_profile(settings: Option<&bizlens_core::BusinessSettings>) -> BusinessProfile {
    match settings {
        Some(s) if !s.business_name.trim().is_empty() && !s.zip_code.trim().is_empty() => {
            BusinessProfile::new(
                s.business_name.trim(),
                s.zip_code.trim(),
                Industry::Restaurants,
            )
        }
        _ => BusinessProfile::new("Bellini's Trattoria", "10014", Industry::Restaurants),
    }
}
