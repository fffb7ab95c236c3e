use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use pmch_core::models::{ApiResponse, OpdTiming};

use crate::http::state::AppState;

pub(super) fn routes() -> Router<AppState> {
    Router::new().route("/opd-timings", get(opd_timings))
}

async fn opd_timings(State(state): State<AppState>) -> Json<ApiResponse<Vec<OpdTiming>>> {
    Json(ApiResponse::list(state.catalog().opd_timings()))
}
