use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{Request, State},
    http::{
        header::{AUTHORIZATION, CACHE_CONTROL, RETRY_AFTER},
        HeaderValue,
    },
    middleware::Next,
    response::{IntoResponse, Response},
    Extension,
};
use subtle::ConstantTimeEq;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::api::ApiError;

const REQUEST_ID_HEADER: &str = "x-request-id";
const MAX_REQUEST_ID_LEN: usize = 128;

/// Correlation id for one request, available to handlers as an extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Who a protected request is billed to, set by [`require_bearer_auth`]:
/// the accepted token, or one shared bucket when auth is off.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ApiClient(String);

impl ApiClient {
    fn anonymous() -> Self {
        Self("anonymous".to_string())
    }
}

/// Bearer tokens accepted by the protected `/api/v1` routes.
#[derive(Debug, Clone)]
pub struct AuthState {
    tokens: Arc<HashSet<String>>,
    pub enabled: bool,
}

impl AuthState {
    /// Tokens from `BIZLENS_API_KEYS`. See [`AuthState::from_keys`].
    ///
    /// # Errors
    ///
    /// Fails outside development when no token is configured.
    pub fn from_env(is_development: bool) -> anyhow::Result<Self> {
        let raw = std::env::var("BIZLENS_API_KEYS").unwrap_or_default();
        Self::from_keys(&raw, is_development)
    }

    /// Parse a comma-separated token list. An empty list turns auth off in
    /// development and is a startup error anywhere else.
    ///
    /// # Errors
    ///
    /// Fails outside development when `raw` holds no token.
    pub fn from_keys(raw: &str, is_development: bool) -> anyhow::Result<Self> {
        let tokens: HashSet<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
            .collect();

        match (tokens.is_empty(), is_development) {
            (false, _) => Ok(Self {
                tokens: Arc::new(tokens),
                enabled: true,
            }),
            (true, true) => {
                tracing::warn!("BIZLENS_API_KEYS is empty; JSON API is open in development");
                Ok(Self::disabled())
            }
            (true, false) => anyhow::bail!(
                "BIZLENS_API_KEYS must list at least one bearer token outside development"
            ),
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            tokens: Arc::new(HashSet::new()),
            enabled: false,
        }
    }

    fn accepts(&self, candidate: &str) -> bool {
        self.tokens
            .iter()
            .any(|t| bool::from(t.as_bytes().ct_eq(candidate.as_bytes())))
    }
}

#[derive(Debug, Clone, Copy)]
struct Window {
    opened_at: Instant,
    used: usize,
}

/// Fixed-window request budget, tracked separately per [`ApiClient`].
#[derive(Debug, Clone)]
pub struct RateLimitState {
    budget: usize,
    window: Duration,
    clients: Arc<Mutex<HashMap<String, Window>>>,
}

impl RateLimitState {
    #[must_use]
    pub fn new(budget: usize, window: Duration) -> Self {
        Self {
            budget,
            window,
            clients: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Count one request for `client`. `Err` carries the time until its
    /// window reopens.
    async fn take(&self, client: &str) -> Result<(), Duration> {
        let now = Instant::now();
        let mut clients = self.clients.lock().await;
        clients.retain(|_, w| now.duration_since(w.opened_at) < self.window);

        let entry = clients.entry(client.to_string()).or_insert(Window {
            opened_at: now,
            used: 0,
        });
        if entry.used >= self.budget {
            return Err(self.window.saturating_sub(now.duration_since(entry.opened_at)));
        }
        entry.used += 1;
        Ok(())
    }
}

pub fn default_rate_limit_state() -> RateLimitState {
    RateLimitState::new(120, Duration::from_secs(60))
}

/// Reuse the caller's `x-request-id` when it is short printable ASCII,
/// otherwise mint a `UUIDv4`. The id goes into request extensions and back
/// out on the response.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;
    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, val);
    }
    res
}

pub async fn require_bearer_auth(
    State(auth): State<AuthState>,
    Extension(req_id): Extension<RequestId>,
    mut req: Request,
    next: Next,
) -> Response {
    if !auth.enabled {
        req.extensions_mut().insert(ApiClient::anonymous());
        return next.run(req).await;
    }

    let accepted = bearer_token(req.headers().get(AUTHORIZATION))
        .filter(|token| auth.accepts(token))
        .map(|token| ApiClient(token.to_string()));
    match accepted {
        Some(client) => {
            req.extensions_mut().insert(client);
            next.run(req).await
        }
        None => {
            tracing::debug!(request_id = %req_id.0, "rejected API call without valid token");
            ApiError::new(req_id.0, "unauthorized", "missing or invalid bearer token")
                .into_response()
        }
    }
}

/// Runs inside [`require_bearer_auth`]; requests it did not tag share the
/// anonymous bucket.
pub async fn enforce_rate_limit(
    State(limits): State<RateLimitState>,
    Extension(req_id): Extension<RequestId>,
    req: Request,
    next: Next,
) -> Response {
    let client = req
        .extensions()
        .get::<ApiClient>()
        .cloned()
        .unwrap_or_else(ApiClient::anonymous);

    match limits.take(&client.0).await {
        Ok(()) => next.run(req).await,
        Err(retry_in) => {
            tracing::warn!(request_id = %req_id.0, "rate limit exceeded");
            let mut res = ApiError::new(
                req_id.0,
                "rate_limited",
                "too many requests; slow down and retry shortly",
            )
            .into_response();
            let secs = retry_in.as_secs().max(1);
            if let Ok(val) = HeaderValue::from_str(&secs.to_string()) {
                res.headers_mut().insert(RETRY_AFTER, val);
            }
            res
        }
    }
}

/// Rendered pages reflect live store state; keep them out of caches.
pub async fn no_store(req: Request, next: Next) -> Response {
    let mut res = next.run(req).await;
    res.headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    res
}

fn bearer_token(value: Option<&HeaderValue>) -> Option<&str> {
    value
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
