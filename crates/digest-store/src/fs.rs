//! Filesystem store implementation.
//!
//! Provides [`FsStore`] for reading digests from a local directory, with an
//! optional second directory for supplementary content.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::store::{DigestEntry, DigestStore, StoreError, StoreErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Digest file extension recognized by the scanner.
const DIGEST_EXTENSION: &str = "md";

/// Filesystem store implementation.
///
/// Scans a flat digest directory for markdown files and derives identifiers
/// from filenames with the extension stripped. Every scan re-reads the
/// directory, so newly added digests appear without a restart.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use digest_store::{DigestStore, FsStore};
///
/// let store = FsStore::new(PathBuf::from("digests"))
///     .with_news_dir(PathBuf::from("news"));
/// let entries = store.scan();
/// ```
pub struct FsStore {
    /// Directory containing digest markdown files.
    digest_dir: PathBuf,
    /// Directory containing supplementary content, mirroring digest filenames.
    news_dir: Option<PathBuf>,
}

impl FsStore {
    /// Create a new filesystem store over a digest directory.
    #[must_use]
    pub fn new(digest_dir: PathBuf) -> Self {
        Self {
            digest_dir,
            news_dir: None,
        }
    }

    /// Attach a supplementary content directory.
    ///
    /// Files in this directory mirror digest filenames; a matching file is
    /// merged into the post rendering when present.
    #[must_use]
    pub fn with_news_dir(mut self, news_dir: PathBuf) -> Self {
        self.news_dir = Some(news_dir);
        self
    }

    /// Validate that an identifier can't escape the store directories.
    ///
    /// Rejects empty identifiers and identifiers containing path separators
    /// or parent-directory components (e.g., `../../etc/passwd`).
    fn validate_id(id: &str) -> Result<(), StoreError> {
        let escapes = id.is_empty()
            || id.contains(['/', '\\'])
            || Path::new(id)
                .components()
                .any(|c| !matches!(c, Component::Normal(_)));

        if escapes {
            return Err(StoreError::new(StoreErrorKind::InvalidId)
                .with_path(id)
                .with_backend(BACKEND));
        }
        Ok(())
    }

    /// Resolve an identifier to its file path inside a directory.
    fn file_path(dir: &Path, id: &str) -> PathBuf {
        dir.join(format!("{id}.{DIGEST_EXTENSION}"))
    }
}

impl DigestStore for FsStore {
    fn scan(&self) -> Vec<DigestEntry> {
        let dir_entries = match fs::read_dir(&self.digest_dir) {
            Ok(entries) => entries,
            Err(err) => {
                // Degrade to "no digests" so the index never errors
                tracing::debug!(
                    dir = %self.digest_dir.display(),
                    error = %err,
                    "Digest directory unreadable, listing as empty"
                );
                return Vec::new();
            }
        };

        let mut entries: Vec<DigestEntry> = dir_entries
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_ok_and(|t| t.is_file()))
            .filter_map(|e| {
                let path = e.path();
                if !path.extension().is_some_and(|ext| ext == DIGEST_EXTENSION) {
                    return None;
                }
                let id = path.file_stem()?.to_str()?.to_owned();
                Some(DigestEntry {
                    id,
                    source_path: path,
                })
            })
            .collect();

        // Descending identifier order: date-named files list newest first
        entries.sort_by(|a, b| b.id.cmp(&a.id));
        entries
    }

    fn read(&self, id: &str) -> Result<String, StoreError> {
        Self::validate_id(id)?;
        let path = Self::file_path(&self.digest_dir, id);
        fs::read_to_string(&path).map_err(|e| StoreError::io(e, Some(path)).with_backend(BACKEND))
    }

    fn supplement(&self, id: &str) -> Option<String> {
        if Self::validate_id(id).is_err() {
            return None;
        }
        let news_dir = self.news_dir.as_ref()?;
        fs::read_to_string(Self::file_path(news_dir, id)).ok()
    }
}
