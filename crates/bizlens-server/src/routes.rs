//! Assembles the full application: HTML pages, the JSON API and the
//! cross-cutting layers both share.

use axum::{
    http::{header, HeaderName, Method},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{no_store, request_id, AuthState, RateLimitState};
use crate::state::AppState;
use crate::{api, pages};

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState, auth: AuthState, rate_limit: RateLimitState) -> Router {
    let pages = pages::router()
        .fallback(pages::not_found)
        .layer(axum::middleware::from_fn(no_store));

    Router::new()
        .merge(api::router(auth, rate_limit))
        .merge(pages)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}
