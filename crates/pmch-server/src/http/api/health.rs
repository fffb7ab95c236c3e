use axum::Json;
use chrono::Utc;
use pmch_core::models::HealthStatus;

pub(super) async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        success: true,
        message: "PMCH API is running".to_string(),
        timestamp: Utc::now(),
    })
}
