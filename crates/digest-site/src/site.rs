//! Site orchestration.
//!
//! Provides [`Site`] for composing full pages from a [`DigestStore`]
//! backend. Every page request performs a fresh scan, so concurrent
//! requests each do independent, idempotent reads and no coordination is
//! needed.

use std::sync::Arc;

use digest_render::render_markdown;
use digest_store::{DigestEntry, DigestStore};

use crate::page::{index_document, post_document};

/// Configuration for [`Site`].
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Site title shown on the index header and in page titles.
    pub title: String,
    /// Tagline shown under the index header.
    pub tagline: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Dev Digest".to_owned(),
            tagline: "Daily software development news.".to_owned(),
        }
    }
}

/// Error returned when page composition fails.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// No digest with the requested identifier.
    #[error("Digest not found: {0}")]
    NotFound(String),
}

/// Composes full pages from digests in a store.
///
/// Holds no mutable state: the store is scanned anew for every page, so
/// newly added digests appear without a restart and identical requests
/// against unchanged storage yield byte-identical pages.
pub struct Site {
    store: Arc<dyn DigestStore>,
    title: String,
    tagline: String,
}

impl Site {
    /// Create a new site over a store.
    #[must_use]
    pub fn new(store: Arc<dyn DigestStore>, config: SiteConfig) -> Self {
        Self {
            store,
            title: config.title,
            tagline: config.tagline,
        }
    }

    /// List digests, newest first.
    #[must_use]
    pub fn entries(&self) -> Vec<DigestEntry> {
        self.store.scan()
    }

    /// Compose the index page from a fresh listing.
    #[must_use]
    pub fn index_page(&self) -> String {
        index_document(&self.title, &self.tagline, &self.entries())
    }

    /// Compose the post page for an identifier.
    ///
    /// Re-lists digests and resolves the identifier against the listing
    /// before reading. A read failure after a successful listing (the file
    /// disappeared in between) is reported as [`SiteError::NotFound`] as
    /// well, so the handler degrades to a 404 instead of crashing.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::NotFound`] if no digest matches `id`.
    pub fn post_page(&self, id: &str) -> Result<String, SiteError> {
        let entries = self.entries();
        let entry = entries
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| SiteError::NotFound(id.to_owned()))?;

        let raw = self.store.read(&entry.id).map_err(|err| {
            tracing::debug!(id = %entry.id, error = %err, "Listed digest vanished before read");
            SiteError::NotFound(id.to_owned())
        })?;

        let content = render_markdown(&raw);
        let supplement = self.store.supplement(&entry.id).map(|s| render_markdown(&s));

        Ok(post_document(
            &self.title,
            id,
            supplement.as_deref(),
            &content,
        ))
    }
}
