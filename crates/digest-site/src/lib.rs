//! Page composition and site orchestration for the Dev Digest server.
//!
//! This crate turns digests from a [`digest_store::DigestStore`] into full
//! HTML documents:
//!
//! - [`Site`] performs the per-request scan/read/render/compose sequence
//! - [`index_document`], [`post_document`], and [`not_found_document`] are
//!   the document templates
//! - all documents inline one fixed stylesheet
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use digest_site::{Site, SiteConfig};
//! use digest_store::FsStore;
//!
//! let store = Arc::new(FsStore::new(PathBuf::from("digests")));
//! let site = Site::new(store, SiteConfig::default());
//!
//! let index_html = site.index_page();
//! let post_html = site.post_page("2024-03-18")?;
//! ```

mod page;
mod site;
mod styles;

pub use page::{index_document, not_found_document, post_document};
pub use site::{Site, SiteConfig, SiteError};
