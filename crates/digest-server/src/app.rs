//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// Three routes: the index, per-digest pages, and a plain-text 404
/// fallback for everything else.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index::get_index))
        .route("/post/{id}", get(handlers::posts::get_post))
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use digest_site::{Site, SiteConfig};
    use digest_store::MockStore;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    fn router_for(store: MockStore) -> Router {
        let site = Site::new(Arc::new(store), SiteConfig::default());
        create_router(Arc::new(AppState { site }))
    }

    async fn send(router: Router, path: &str) -> Response {
        router
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn content_type(response: &Response) -> &str {
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_index_lists_all_digests() {
        let router = router_for(
            MockStore::new()
                .with_digest("2024-03-18", "# Mon")
                .with_digest("2024-03-20", "# Wed"),
        );

        let response = send(router, "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(content_type(&response).starts_with("text/html"));
        let body = body_string(response).await;
        let newest = body.find("/post/2024-03-20").unwrap();
        let oldest = body.find("/post/2024-03-18").unwrap();
        assert!(newest < oldest);
    }

    #[tokio::test]
    async fn test_index_empty_store_is_200_with_placeholder() {
        let response = send(router_for(MockStore::new()), "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("No digests yet"));
    }

    #[tokio::test]
    async fn test_post_renders_digest_content() {
        let router = router_for(MockStore::new().with_digest("2024-03-18", "# Hello"));

        let response = send(router, "/post/2024-03-18").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(content_type(&response).starts_with("text/html"));
        assert!(body_string(response).await.contains("<h1>Hello</h1>"));
    }

    #[tokio::test]
    async fn test_post_unknown_id_is_404_html() {
        let router = router_for(MockStore::new().with_digest("2024-03-18", "# Hello"));

        let response = send(router, "/post/2024-01-01").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(content_type(&response).starts_with("text/html"));
        assert!(body_string(response).await.contains("Not found"));
    }

    #[tokio::test]
    async fn test_post_vanished_between_scan_and_read_is_404() {
        let router = router_for(MockStore::new().with_entry("2024-03-18"));

        let response = send(router, "/post/2024-03-18").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_path_is_404_plain_text() {
        let response = send(router_for(MockStore::new()), "/admin").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(content_type(&response).starts_with("text/plain"));
        assert_eq!(body_string(response).await, "Not found");
    }

    #[tokio::test]
    async fn test_post_includes_supplement_before_main_content() {
        let router = router_for(
            MockStore::new()
                .with_digest("2024-03-18", "# Digest")
                .with_supplement("2024-03-18", "## Extra"),
        );

        let response = send(router, "/post/2024-03-18").await;

        let body = body_string(response).await;
        let supplement = body.find("<h2>Extra</h2>").unwrap();
        let divider = body.find("Today's digest").unwrap();
        let content = body.find("<h1>Digest</h1>").unwrap();
        assert!(supplement < divider);
        assert!(divider < content);
    }

    #[tokio::test]
    async fn test_security_headers_present() {
        let response = send(router_for(MockStore::new()), "/").await;

        assert_eq!(
            response
                .headers()
                .get("x-content-type-options")
                .and_then(|v| v.to_str().ok()),
            Some("nosniff")
        );
        assert_eq!(
            response
                .headers()
                .get("x-frame-options")
                .and_then(|v| v.to_str().ok()),
            Some("DENY")
        );
        assert!(response.headers().contains_key("content-security-policy"));
    }

    #[tokio::test]
    async fn test_repeated_requests_are_byte_identical() {
        let router = router_for(MockStore::new().with_digest("2024-03-18", "# Hello"));

        let first = body_string(send(router.clone(), "/post/2024-03-18").await).await;
        let second = body_string(send(router, "/post/2024-03-18").await).await;

        assert_eq!(first, second);
    }
}
