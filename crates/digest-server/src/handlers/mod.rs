//! HTTP request handlers.

pub(crate) mod index;
pub(crate) mod posts;

use axum::http::StatusCode;

/// Fallback for any path outside the known routes.
pub(crate) async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
