//! HTTP server for the Dev Digest site.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - the index page listing all digests
//! - one page per digest under `/post/{identifier}`
//!
//! Every request re-lists the digest directory, so newly added files appear
//! without a restart and no cache sits between the filesystem and the
//! response. Concurrent requests each perform independent, idempotent
//! reads; the server introduces no shared mutable state.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use digest_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "0.0.0.0".to_string(),
//!         port: 3000,
//!         digest_dir: PathBuf::from("digests"),
//!         news_dir: PathBuf::from("news"),
//!         site_title: "Dev Digest".to_string(),
//!         tagline: "Daily software development news.".to_string(),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use digest_site::{Site, SiteConfig};
use digest_store::{DigestStore, FsStore};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Digest source directory.
    pub digest_dir: PathBuf,
    /// Supplementary content directory.
    pub news_dir: PathBuf,
    /// Site title.
    pub site_title: String,
    /// Site tagline.
    pub tagline: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 3000,
            digest_dir: PathBuf::from("digests"),
            news_dir: PathBuf::from("news"),
            site_title: "Dev Digest".to_owned(),
            tagline: "Daily software development news.".to_owned(),
        }
    }
}

/// Run the server.
///
/// Binds `host:port`, logs one startup confirmation line, and serves until
/// Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or the port can't be bound.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store: Arc<dyn DigestStore> =
        Arc::new(FsStore::new(config.digest_dir.clone()).with_news_dir(config.news_dir.clone()));

    let site = Site::new(
        store,
        SiteConfig {
            title: config.site_title.clone(),
            tagline: config.tagline.clone(),
        },
    );

    let state = Arc::new(AppState { site });
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(address = %addr, "Dev Digest server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from the application config.
#[must_use]
pub fn server_config_from_config(config: &digest_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        digest_dir: config.content_resolved.digest_dir.clone(),
        news_dir: config.content_resolved.news_dir.clone(),
        site_title: config.site.title.clone(),
        tagline: config.site.tagline.clone(),
    }
}
