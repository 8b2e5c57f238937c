//! Mock store implementation for testing.
//!
//! Provides [`MockStore`] for unit testing without filesystem access.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::store::{DigestEntry, DigestStore, StoreError, StoreErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock store for testing.
///
/// Stores entries, contents, and supplements in memory. Use the builder
/// methods to configure the mock with test data.
///
/// Listing an identifier without content (via [`with_entry`](Self::with_entry))
/// reproduces the window where a digest disappears between the listing and
/// the content read.
///
/// # Example
///
/// ```ignore
/// use digest_store::{DigestStore, MockStore};
///
/// let store = MockStore::new()
///     .with_digest("2024-03-18", "# Monday\n\nContent.")
///     .with_supplement("2024-03-18", "One more thing.");
///
/// let entries = store.scan();
/// let content = store.read("2024-03-18").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockStore {
    entries: Vec<DigestEntry>,
    contents: HashMap<String, String>,
    supplements: HashMap<String, String>,
}

impl MockStore {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// List an identifier without providing content.
    ///
    /// Reads for such an identifier fail with a not-found error.
    #[must_use]
    pub fn with_entry(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        let source_path = PathBuf::from(format!("{id}.md"));
        self.entries.push(DigestEntry { id, source_path });
        self
    }

    /// Add a digest with the given identifier and markdown content.
    #[must_use]
    pub fn with_digest(mut self, id: impl Into<String>, content: impl Into<String>) -> Self {
        let id = id.into();
        self.contents.insert(id.clone(), content.into());
        self.with_entry(id)
    }

    /// Add supplementary content for an identifier.
    #[must_use]
    pub fn with_supplement(mut self, id: impl Into<String>, content: impl Into<String>) -> Self {
        self.supplements.insert(id.into(), content.into());
        self
    }
}

impl DigestStore for MockStore {
    fn scan(&self) -> Vec<DigestEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.id.cmp(&a.id));
        entries
    }

    fn read(&self, id: &str) -> Result<String, StoreError> {
        self.contents.get(id).cloned().ok_or_else(|| {
            StoreError::new(StoreErrorKind::NotFound)
                .with_path(format!("{id}.md"))
                .with_backend(BACKEND)
        })
    }

    fn supplement(&self, id: &str) -> Option<String> {
        self.supplements.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_scan_sorts_descending() {
        let store = MockStore::new()
            .with_digest("2024-03-18", "# Mon")
            .with_digest("2024-03-20", "# Wed")
            .with_digest("2024-03-19", "# Tue");

        let ids: Vec<String> = store.scan().into_iter().map(|e| e.id).collect();

        assert_eq!(ids, vec!["2024-03-20", "2024-03-19", "2024-03-18"]);
    }

    #[test]
    fn test_read_round_trips_content() {
        let store = MockStore::new().with_digest("2024-03-18", "# Monday");

        assert_eq!(store.read("2024-03-18").unwrap(), "# Monday");
    }

    #[test]
    fn test_read_unknown_id_is_not_found() {
        let store = MockStore::new();

        let err = store.read("2024-01-01").unwrap_err();

        assert_eq!(err.kind, StoreErrorKind::NotFound);
        assert_eq!(err.backend, Some("Mock"));
    }

    #[test]
    fn test_entry_without_content_fails_read() {
        let store = MockStore::new().with_entry("2024-03-18");

        assert_eq!(store.scan().len(), 1);
        assert_eq!(
            store.read("2024-03-18").unwrap_err().kind,
            StoreErrorKind::NotFound
        );
    }

    #[test]
    fn test_supplement_lookup() {
        let store = MockStore::new()
            .with_digest("2024-03-18", "# Mon")
            .with_supplement("2024-03-18", "Extra.");

        assert_eq!(store.supplement("2024-03-18").as_deref(), Some("Extra."));
        assert!(store.supplement("2024-03-19").is_none());
    }
}
