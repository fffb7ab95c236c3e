use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use pmch_core::models::{ApiResponse, Department, PaginationInfo};

use crate::http::error::{HttpError, HttpResult};
use crate::http::state::AppState;
use crate::http::Pagination;

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/departments", get(departments))
        .route("/departments/:id", get(get_department))
}

async fn departments(
    Query(pagination): Query<Pagination>,
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<Department>>> {
    let (page, page_size) = pagination.to_inner_values();
    let (rows, total) = state.catalog().departments_page(page, page_size);

    Json(ApiResponse::ok(rows).with_pagination(PaginationInfo {
        page,
        page_size,
        total: total as u64,
    }))
}

async fn get_department(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> HttpResult<Json<ApiResponse<Department>>> {
    // Whole-string parse: "3abc" is a 400, not department 3.
    let id: i64 = id
        .trim()
        .parse()
        .map_err(|_| HttpError::invalid_input("Invalid department ID"))?;

    state
        .catalog()
        .department(id)
        .cloned()
        .map(|department| Json(ApiResponse::ok(department)))
        .ok_or_else(|| HttpError::not_found("Department not found"))
}
