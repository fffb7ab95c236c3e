use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use pmch_core::models::{ApiResponse, Faq};
use serde::Deserialize;

use crate::http::state::AppState;

pub(super) fn routes() -> Router<AppState> {
    Router::new().route("/faqs", get(faqs))
}

#[derive(Debug, Deserialize)]
struct FaqQuery {
    category: Option<String>,
}

async fn faqs(
    Query(query): Query<FaqQuery>,
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<Faq>>> {
    // an empty value means no filter
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    Json(ApiResponse::list(state.catalog().faqs(category)))
}
