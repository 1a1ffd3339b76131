//! Filtered reads and wholesale replacement of the customer-side collections.

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use bizlens_core::{Complaint, Customer, Insight, Interaction, Review};
use serde::Serialize;

use crate::middleware::RequestId;
use crate::state::AppState;

use super::{json_body, ApiError, ApiResponse};

#[derive(Debug, Serialize)]
pub(super) struct ReplaceResult {
    replaced: usize,
}

/// `GET` returns the filtered view; `PUT` swaps the whole collection and
/// snapshots the store.
macro_rules! collection_handlers {
    ($list:ident, $replace:ident, $item:ty, $filtered:ident, $set_list:ident, $label:literal) => {
        pub(super) async fn $list(
            State(state): State<AppState>,
            Extension(req_id): Extension<RequestId>,
        ) -> Json<ApiResponse<Vec<$item>>> {
            let items = state.store.read().await.$filtered();
            ApiResponse::new(&req_id, items)
        }

        pub(super) async fn $replace(
            State(state): State<AppState>,
            Extension(req_id): Extension<RequestId>,
            body: Result<Json<Vec<$item>>, JsonRejection>,
        ) -> Result<Json<ApiResponse<ReplaceResult>>, ApiError> {
            let items = json_body(&req_id, body)?;
            let replaced = items.len();
            state.store.write().await.$set_list(items);
            tracing::info!(collection = $label, count = replaced, "collection replaced");
            state.persist().await;
            Ok(ApiResponse::new(&req_id, ReplaceResult { replaced }))
        }
    };
}

collection_handlers!(
    list_customers, replace_customers, Customer,
    filtered_customers, set_customer_list, "customers"
);
collection_handlers!(
    list_interactions, replace_interactions, Interaction,
    filtered_interactions, set_interaction_list, "interactions"
);
collection_handlers!(
    list_complaints, replace_complaints, Complaint,
    filtered_complaints, set_complaint_list, "complaints"
);
collection_handlers!(
    list_reviews, replace_reviews, Review,
    filtered_reviews, set_review_list, "reviews"
);
collection_handlers!(
    list_insights, replace_insights, Insight,
    filtered_insights, set_insight_list, "insights"
);
