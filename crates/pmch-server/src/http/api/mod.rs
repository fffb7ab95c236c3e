use axum::routing::get;
use axum::Router;

use crate::http::state::AppState;

mod contacts;
mod departments;
mod faqs;
mod health;
mod opd;

pub(crate) fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .merge(departments::routes())
        .merge(faqs::routes())
        .merge(contacts::routes())
        .merge(opd::routes())
}
