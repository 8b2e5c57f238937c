//! Application state.
//!
//! Shared state for all request handlers.

use digest_site::Site;

/// Application state shared across all handlers.
///
/// The site holds no caches, so sharing it between concurrent requests
/// requires no locking.
pub(crate) struct AppState {
    /// Site composer backed by the digest store.
    pub(crate) site: Site,
}
