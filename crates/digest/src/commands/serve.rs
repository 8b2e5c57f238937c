//! `digest serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use digest_config::{CliSettings, Config};
use digest_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
///
/// The `PORT`, `DIGEST_DIR`, and `NEWS_DIR` environment variables feed the
/// matching flags, so `PORT=8080 digest serve` works the same as
/// `digest serve --port 8080`.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover digest.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config).
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Digest source directory (overrides config).
    #[arg(short, long, env = "DIGEST_DIR")]
    digest_dir: Option<PathBuf>,

    /// Supplementary content directory (overrides config).
    #[arg(long, env = "NEWS_DIR")]
    news_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            digest_dir: self.digest_dir,
            news_dir: self.news_dir,
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        // Print startup info
        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Digest directory: {}",
            config.content_resolved.digest_dir.display()
        ));
        output.info(&format!(
            "News directory: {}",
            config.content_resolved.news_dir.display()
        ));

        // Build server config and run
        let server_config = server_config_from_config(&config);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
