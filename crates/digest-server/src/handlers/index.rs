//! Index page endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;

use crate::state::AppState;

/// Handle GET /.
///
/// Re-lists digests on every request; an unreadable digest directory
/// degrades to the empty-listing placeholder, never an error.
pub(crate) async fn get_index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.site.index_page())
}
