//! Demo wizard sessions shared by the HTML flow and the JSON API.

use std::collections::HashMap;
use std::sync::Arc;

use bizlens_wizard::{DemoAnalyzer, DemoWizard, WizardError, WizardField, WizardState};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{watch, Mutex};
use uuid::Uuid;

use crate::state::AppState;

/// How long a session stays reachable after it is created.
const SESSION_TTL_MINUTES: i64 = 30;
/// Upper bound on live sessions; the oldest are dropped first.
const MAX_SESSIONS: usize = 1_000;

/// The three wizard inputs, as posted by the form or the API.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DemoRequest {
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub industry: String,
}

/// One visitor's wizard. The wizard itself moves into the analysis task
/// when the run starts; the receiver keeps the latest published state.
struct DemoSession {
    wizard: Option<DemoWizard<DemoAnalyzer>>,
    state: watch::Receiver<WizardState>,
    created_at: DateTime<Utc>,
}

impl DemoSession {
    fn state(&self) -> WizardState {
        self.state.borrow().clone()
    }

    /// True once the analysis has been handed to a background task.
    fn started(&self) -> bool {
        self.wizard.is_none()
    }
}

/// Why an analysis could not be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartError {
    NotFound,
    AlreadyStarted,
}

/// Point-in-time copy of a session, safe to hold across awaits.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub state: WizardState,
    pub started: bool,
    pub created_at: DateTime<Utc>,
}

/// Wizard sessions by id. Sessions expire `ttl` after creation, and the map
/// never holds more than `capacity` of them.
#[derive(Clone)]
pub struct SessionRegistry {
    inner: Arc<Mutex<HashMap<Uuid, DemoSession>>>,
    ttl: TimeDelta,
    capacity: usize,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_limits(TimeDelta::minutes(SESSION_TTL_MINUTES), MAX_SESSIONS)
    }
}

impl SessionRegistry {
    #[must_use]
    pub fn with_limits(ttl: TimeDelta, capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            ttl,
            capacity: capacity.max(1),
        }
    }

    fn expired(&self, session: &DemoSession, now: DateTime<Utc>) -> bool {
        now - session.created_at >= self.ttl
    }

    /// Drop expired sessions, then the oldest ones until there is room for
    /// one more. A running analysis keeps going; nobody can observe it.
    fn make_room(&self, sessions: &mut HashMap<Uuid, DemoSession>, now: DateTime<Utc>) {
        let before = sessions.len();
        sessions.retain(|_, s| !self.expired(s, now));

        if sessions.len() >= self.capacity {
            let mut by_age: Vec<(DateTime<Utc>, Uuid)> =
                sessions.iter().map(|(id, s)| (s.created_at, *id)).collect();
            by_age.sort_unstable();
            let excess = sessions.len() + 1 - self.capacity;
            for (_, id) in by_age.into_iter().take(excess) {
                sessions.remove(&id);
            }
        }

        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = sessions.len(), "demo sessions evicted");
        }
    }

    /// Run the input steps of a new wizard and register it, queued for analysis.
    ///
    /// # Errors
    ///
    /// Returns the wizard's [`WizardError::MissingFields`] when the request
    /// leaves a field blank; nothing is registered then.
    pub async fn create(&self, app: &AppState, request: &DemoRequest) -> Result<Uuid, WizardError> {
        let mut wizard = DemoWizard::new(app.analyzer(), app.timing, app.generator());
        wizard.start()?;
        wizard.set_field(WizardField::BusinessName, request.business_name.as_str())?;
        wizard.set_field(WizardField::ZipCode, request.zip_code.as_str())?;
        wizard.set_field(WizardField::Industry, request.industry.as_str())?;
        let profile = wizard.submit()?;

        let id = Uuid::new_v4();
        let now = Utc::now();
        let session = DemoSession {
            state: wizard.subscribe(),
            wizard: Some(wizard),
            created_at: now,
        };
        let mut sessions = self.inner.lock().await;
        self.make_room(&mut sessions, now);
        sessions.insert(id, session);
        drop(sessions);
        tracing::info!(session = %id, business = %profile.name, "demo session created");
        Ok(id)
    }

    /// Move the session's wizard into a background task that runs the
    /// analysis through to the summary.
    ///
    /// # Errors
    ///
    /// [`StartError::NotFound`] for an unknown id and
    /// [`StartError::AlreadyStarted`] when the analysis is already running
    /// or finished.
    pub async fn start(&self, id: Uuid) -> Result<SessionView, StartError> {
        let mut sessions = self.inner.lock().await;
        let session = sessions
            .get_mut(&id)
            .filter(|s| !self.expired(s, Utc::now()))
            .ok_or(StartError::NotFound)?;
        let mut wizard = session.wizard.take().ok_or(StartError::AlreadyStarted)?;
        let view = SessionView {
            id,
            state: session.state(),
            started: true,
            created_at: session.created_at,
        };
        drop(sessions);

        tokio::spawn(async move {
            if let Err(e) = wizard.run_to_summary().await {
                tracing::warn!(session = %id, error = %e, "demo analysis did not run");
            }
        });
        Ok(view)
    }

    /// Latest state of a session and whether its analysis has started.
    /// Expired sessions read as unknown.
    pub async fn get(&self, id: Uuid) -> Option<SessionView> {
        let sessions = self.inner.lock().await;
        let now = Utc::now();
        sessions.get(&id).filter(|s| !self.expired(s, now)).map(|s| SessionView {
            id,
            state: s.state(),
            started: s.started(),
            created_at: s.created_at,
        })
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }
}
