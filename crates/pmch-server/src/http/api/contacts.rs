use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use pmch_core::models::{ApiResponse, ContactType, EmergencyContact};
use serde::Deserialize;
use tracing::debug;

use crate::http::state::AppState;

pub(super) fn routes() -> Router<AppState> {
    Router::new().route("/contacts", get(contacts))
}

#[derive(Debug, Deserialize)]
struct ContactQuery {
    #[serde(rename = "type")]
    contact_type: Option<String>,
}

async fn contacts(
    Query(query): Query<ContactQuery>,
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<EmergencyContact>>> {
    // unknown types are ignored and the full list is returned
    let contact_type = query
        .contact_type
        .as_deref()
        .filter(|t| !t.is_empty())
        .and_then(|t| match t.parse::<ContactType>() {
            Ok(t) => Some(t),
            Err(e) => {
                debug!(error = %e, "Ignoring contact type filter");
                None
            }
        });

    Json(ApiResponse::list(state.catalog().contacts(contact_type)))
}
