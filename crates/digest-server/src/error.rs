//! Server error types.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use digest_site::{SiteError, not_found_document};

/// Error type for request handlers.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// No digest with the requested identifier.
    #[error("Digest not found: {0}")]
    DigestNotFound(String),
}

impl From<SiteError> for ServerError {
    fn from(err: SiteError) -> Self {
        match err {
            SiteError::NotFound(id) => Self::DigestNotFound(id),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            Self::DigestNotFound(_) => {
                (StatusCode::NOT_FOUND, Html(not_found_document())).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_not_found_maps_to_404() {
        let response = ServerError::DigestNotFound("2024-01-01".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_from_site_error() {
        let err = ServerError::from(SiteError::NotFound("2024-01-01".to_owned()));

        assert_eq!(err.to_string(), "Digest not found: 2024-01-01");
    }
}
