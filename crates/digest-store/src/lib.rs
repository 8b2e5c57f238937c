//! Storage abstraction for the Dev Digest server.
//!
//! This crate provides a [`DigestStore`] trait for abstracting digest listing and
//! content retrieval from the underlying storage backend. This enables:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Clean separation** between page composition logic and I/O operations
//!
//! # Architecture
//!
//! The crate provides:
//! - [`DigestStore`] trait with `scan()`, `read()`, and `supplement()` methods
//! - [`FsStore`] implementation for filesystem backends
//! - [`MockStore`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use digest_store::{DigestStore, FsStore};
//!
//! let store = FsStore::new(PathBuf::from("digests"));
//! for entry in store.scan() {
//!     println!("{}: {}", entry.id, entry.source_path.display());
//! }
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod store;

pub use fs::FsStore;
#[cfg(feature = "mock")]
pub use mock::MockStore;
pub use store::{DigestEntry, DigestStore, StoreError, StoreErrorKind};
