//! Post page endpoint.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Html;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /post/{id}.
///
/// Resolves the identifier against a fresh listing; unknown identifiers
/// (and digests that vanished between listing and read) return 404.
pub(crate) async fn get_post(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ServerError> {
    let html = state.site.post_page(&id)?;
    Ok(Html(html))
}
