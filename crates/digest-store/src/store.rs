//! Store trait and error types.
//!
//! Provides the core [`DigestStore`] trait for abstracting digest listing and
//! retrieval, along with [`StoreError`] for unified error handling across backends.
//!
//! # Identifier Convention
//!
//! All identifier parameters in store methods are filename-derived tokens with
//! the `.md` extension stripped:
//! - `"2024-03-18"` - a dated digest (the common case)
//! - `"welcome"` - any other lexicographically sortable name
//!
//! Store implementations handle the mapping from identifiers to their internal
//! storage format.

use std::path::PathBuf;

/// A single digest as returned by a store scan.
///
/// Entries are a read-only projection of the storage state at scan time; they
/// are recomputed on every listing and never cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigestEntry {
    /// Filename-derived identifier (extension stripped), e.g. `"2024-03-18"`.
    pub id: String,
    /// Backend path the content can be read from.
    pub source_path: PathBuf,
}

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorKind {
    /// Digest does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Identifier contains path separators or parent-directory components.
    InvalidId,
    /// Other/unknown error category.
    Other,
}

/// Store error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StoreError {
    /// Semantic error category.
    pub kind: StoreErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StoreError {
    /// Create a new store error.
    #[must_use]
    pub fn new(kind: StoreErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(StoreErrorKind::NotFound).with_path(path)
    }

    /// Create a store error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StoreErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StoreErrorKind::PermissionDenied,
            _ => StoreErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StoreErrorKind::NotFound => "Not found",
            StoreErrorKind::PermissionDenied => "Permission denied",
            StoreErrorKind::InvalidId => "Invalid identifier",
            StoreErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Storage abstraction for digest listing and retrieval.
///
/// Provides a unified interface for accessing digests regardless of backend.
/// Implementations handle backend-specific details like extension filtering
/// and identifier resolution.
pub trait DigestStore: Send + Sync {
    /// List all digests, newest identifier first.
    ///
    /// Re-reads the backend on every call so newly added digests appear
    /// without a restart. Access failures (missing directory, permission
    /// denied) degrade to an empty listing rather than an error.
    fn scan(&self) -> Vec<DigestEntry>;

    /// Read the full markdown content of one digest.
    ///
    /// # Arguments
    ///
    /// * `id` - Filename-derived identifier (e.g., "2024-03-18")
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the digest doesn't exist, the identifier is
    /// invalid, or the content can't be read.
    fn read(&self, id: &str) -> Result<String, StoreError>;

    /// Read supplementary content associated with an identifier.
    ///
    /// Returns `None` when no supplementary content exists for the
    /// identifier, or when it cannot be read. Absence is never an error.
    fn supplement(&self, id: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_digest_entry_fields() {
        let entry = DigestEntry {
            id: "2024-03-18".to_owned(),
            source_path: PathBuf::from("digests/2024-03-18.md"),
        };

        assert_eq!(entry.id, "2024-03-18");
        assert_eq!(entry.source_path, Path::new("digests/2024-03-18.md"));
    }

    #[test]
    fn test_store_error_kind_variants() {
        // Ensure all variants exist and can be compared
        assert_ne!(StoreErrorKind::NotFound, StoreErrorKind::PermissionDenied);
        assert_ne!(StoreErrorKind::InvalidId, StoreErrorKind::Other);
    }

    #[test]
    fn test_store_error_new() {
        let err = StoreError::new(StoreErrorKind::NotFound);

        assert_eq!(err.kind, StoreErrorKind::NotFound);
        assert!(err.path.as_deref().is_none());
        assert!(err.backend.is_none());
    }

    #[test]
    fn test_store_error_with_path() {
        let err = StoreError::new(StoreErrorKind::NotFound).with_path("/foo/bar");

        assert_eq!(err.path.as_deref(), Some(Path::new("/foo/bar")));
    }

    #[test]
    fn test_store_error_with_backend() {
        let err = StoreError::new(StoreErrorKind::NotFound).with_backend("Fs");

        assert_eq!(err.backend, Some("Fs"));
    }

    #[test]
    fn test_store_error_not_found() {
        let err = StoreError::not_found("/foo/bar");

        assert_eq!(err.kind, StoreErrorKind::NotFound);
        assert_eq!(err.path.as_deref(), Some(Path::new("/foo/bar")));
    }

    #[test]
    fn test_store_error_io_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = StoreError::io(io_err, Some(PathBuf::from("/foo/bar")));

        assert_eq!(err.kind, StoreErrorKind::NotFound);
        assert_eq!(err.path.as_deref(), Some(Path::new("/foo/bar")));
    }

    #[test]
    fn test_store_error_io_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = StoreError::io(io_err, None);

        assert_eq!(err.kind, StoreErrorKind::PermissionDenied);
    }

    #[test]
    fn test_store_error_display_simple() {
        let err = StoreError::new(StoreErrorKind::NotFound);

        assert_eq!(err.to_string(), "Not found");
    }

    #[test]
    fn test_store_error_display_with_backend() {
        let err = StoreError::new(StoreErrorKind::InvalidId).with_backend("Fs");

        assert_eq!(err.to_string(), "[Fs] Invalid identifier");
    }

    #[test]
    fn test_store_error_display_full() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = StoreError::new(StoreErrorKind::NotFound)
            .with_backend("Fs")
            .with_path("/foo/bar")
            .with_source(io_err);

        assert_eq!(
            err.to_string(),
            "[Fs] Not found: file not found (path: /foo/bar)"
        );
    }

    #[test]
    fn test_store_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StoreError>();
    }
}
