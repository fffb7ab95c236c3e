//! HTTP surface: `/api/*` routes plus the shared middleware stack.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use axum::Router;
use serde::Deserialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{error, Level};

use crate::config::Environment;

pub(crate) mod api;
pub mod error;
pub mod state;

pub use error::{HttpError, HttpResult};
pub use state::AppState;

/// Full application router.
pub fn router(state: AppState) -> Router {
    let environment = state.environment();
    let router = Router::new()
        .nest("/api", api::routes())
        .fallback(route_not_found)
        .with_state(state);
    with_common_layers(router, environment)
}

/// Panic capture, permissive CORS and request tracing.
pub fn with_common_layers(router: Router, environment: Environment) -> Router {
    let expose = environment.expose_error_details();
    router
        .layer(CatchPanicLayer::custom(
            move |err: Box<dyn Any + Send + 'static>| panic_response(err, expose),
        ))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

async fn route_not_found() -> HttpError {
    HttpError::not_found("Route not found")
}

fn panic_response(err: Box<dyn Any + Send + 'static>, expose: bool) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };
    error!(detail = %detail, "Request handler panicked");
    HttpError::internal(detail, expose).into_response()
}

/// Raw `page`/`pageSize` query values. Anything unparseable falls back to
/// the defaults rather than failing the request.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Pagination {
    page: Option<String>,
    #[serde(rename = "pageSize")]
    page_size: Option<String>,
}

impl Pagination {
    pub const DEFAULT_PAGE_SIZE: u32 = 20;
    pub const MAX_PAGE_SIZE: u32 = 50;

    pub fn new(page: Option<&str>, page_size: Option<&str>) -> Self {
        Self {
            page: page.map(str::to_string),
            page_size: page_size.map(str::to_string),
        }
    }

    /// `(page, page_size)` with page >= 1 and page_size in 1..=50.
    /// Zero counts as absent.
    pub fn to_inner_values(&self) -> (u32, u32) {
        fn parse(value: Option<&String>) -> Option<i64> {
            value
                .and_then(|v| v.trim().parse::<i64>().ok())
                .filter(|n| *n != 0)
        }

        let page = parse(self.page.as_ref())
            .unwrap_or(1)
            .clamp(1, u32::MAX as i64) as u32;
        let page_size = parse(self.page_size.as_ref())
            .unwrap_or(Self::DEFAULT_PAGE_SIZE as i64)
            .clamp(1, Self::MAX_PAGE_SIZE as i64) as u32;
        (page, page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        assert_eq!(Pagination::default().to_inner_values(), (1, 20));
    }

    #[test]
    fn test_pagination_clamps() {
        assert_eq!(Pagination::new(Some("3"), Some("1000")).to_inner_values(), (3, 50));
        assert_eq!(Pagination::new(Some("-4"), Some("-2")).to_inner_values(), (1, 1));
        assert_eq!(Pagination::new(Some("0"), Some("0")).to_inner_values(), (1, 20));
    }

    #[test]
    fn test_pagination_garbage_falls_back() {
        assert_eq!(Pagination::new(Some("abc"), Some("ten")).to_inner_values(), (1, 20));
        assert_eq!(Pagination::new(Some(" 2 "), Some("5")).to_inner_values(), (2, 5));
    }
}
