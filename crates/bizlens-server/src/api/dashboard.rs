use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Extension, Json,
};
use bizlens_core::{BusinessProfile, Competitor, CompetitorComplaint, Insight, Opportunity, Threat};
use bizlens_mock::{CustomerCounts, RestaurantDemo};
use bizlens_store::DashboardStats;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;
use crate::state::{demo_profile, generator_for, seeded_store, AppState};

use super::{rejected, ApiError, ApiResponse};

/// Upper bound on any one regenerated collection.
const MAX_GENERATED: usize = 5_000;

pub(super) async fn stats(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<DashboardStats>> {
    let stats = state.store.read().await.dashboard_stats();
    ApiResponse::new(&req_id, stats)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct RegenerateRequest {
    seed: Option<u64>,
    customers: Option<usize>,
    interactions: Option<usize>,
    complaints: Option<usize>,
    reviews: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(super) struct RegenerateResult {
    seed: u64,
    stats: DashboardStats,
}

/// POST /api/v1/store/regenerate: replace every generated collection with a
/// fresh dataset. Filters and business settings are kept.
pub(super) async fn regenerate(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Option<Json<RegenerateRequest>>, JsonRejection>,
) -> Result<Json<ApiResponse<RegenerateResult>>, ApiError> {
    let request = match body {
        Ok(Some(Json(request))) => request,
        Ok(None) => RegenerateRequest::default(),
        Err(rejection) => return Err(rejected(&req_id, &rejection)),
    };

    let defaults = CustomerCounts::default();
    let counts = CustomerCounts {
        customers: request.customers.unwrap_or(defaults.customers),
        interactions: request.interactions.unwrap_or(defaults.interactions),
        complaints: request.complaints.unwrap_or(defaults.complaints),
        reviews: request.reviews.unwrap_or(defaults.reviews),
    };
    let largest = [
        counts.customers,
        counts.interactions,
        counts.complaints,
        counts.reviews,
    ]
    .into_iter()
    .max()
    .unwrap_or(0);
    if largest > MAX_GENERATED {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            format!("collection sizes must be at most {MAX_GENERATED}"),
        ));
    }

    let mut generator = generator_for(request.seed.or(state.config.mock_seed));
    let seed = generator.seed();
    let fresh = seeded_store(&mut generator, counts);

    let stats = {
        let mut store = state.store.write().await;
        store.set_customer_list(fresh.customers().to_vec());
        store.set_interaction_list(fresh.interactions().to_vec());
        store.set_complaint_list(fresh.complaints().to_vec());
        store.set_review_list(fresh.reviews().to_vec());
        store.set_insight_list(fresh.insights().to_vec());
        store.set_competitor_list(fresh.competitors().to_vec());
        store.set_competitor_complaint_list(fresh.competitor_complaints().to_vec());
        store.set_opportunity_list(fresh.opportunities().to_vec());
        store.set_threat_list(fresh.threats().to_vec());
        store.dashboard_stats()
    };
    tracing::info!(seed, customers = counts.customers, "store regenerated");
    state.persist().await;

    Ok(ApiResponse::new(&req_id, RegenerateResult { seed, stats }))
}

#[derive(Debug, Serialize)]
pub(super) struct CompetitiveView {
    profile: BusinessProfile,
    competitors: Vec<Competitor>,
    complaints: Vec<CompetitorComplaint>,
    insights: Vec<Insight>,
    opportunities: Vec<Opportunity>,
    threats: Vec<Threat>,
}

pub(super) async fn competitive(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<CompetitiveView>> {
    let store = state.store.read().await;
    let view = CompetitiveView {
        profile: demo_profile(Some(store.settings())),
        competitors: store.competitors().to_vec(),
        complaints: store.competitor_complaints().to_vec(),
        insights: store.filtered_insights(),
        opportunities: store.opportunities().to_vec(),
        threats: store.threats().to_vec(),
    };
    drop(store);
    ApiResponse::new(&req_id, view)
}

#[derive(Debug, Deserialize)]
pub(super) struct NycQuery {
    zip: Option<String>,
}

pub(super) async fn nyc_restaurant(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<NycQuery>,
) -> Json<ApiResponse<RestaurantDemo>> {
    let zip = query
        .zip
        .map(|z| z.trim().to_string())
        .filter(|z| !z.is_empty())
        .unwrap_or_else(|| "10014".to_string());
    let demo = state.generator().nyc_restaurant_demo(&zip);
    ApiResponse::new(&req_id, demo)
}
