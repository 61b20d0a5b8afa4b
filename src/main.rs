//! Daily leaderboard refresh job.
//!
//! Drives the remote admin service through one ordered run: resolve
//! the current season and period, fetch per-region leaderboard
//! snapshots, then trigger import, output clear, season cleanup, full
//! vacuum, and materialized-view refresh. Emits one structured report
//! and exits 0 on success, 1 on any unrecovered failure.

use anyhow::{Context, Result};
use tracing::info;

use admin_client::{AdminClient, ApiConfig};
use pipeline::{PipelineRunner, ResultReporter};
use telemetry::init_tracing_from_env;

/// Job configuration.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct Config {
    #[serde(default)]
    api: ApiConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing_from_env();

    info!("Starting keystone-sync v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;
    info!(base_url = %config.api.base_url, "Loaded admin API config");

    let client = AdminClient::new(&config.api).context("Failed to create admin API client")?;
    let reporter = ResultReporter::new(PipelineRunner::new(client));

    let report = reporter.run().await;

    // The report is the run's observable artifact; print it for the
    // scheduler that invoked us.
    println!("{}", serde_json::to_string_pretty(&report)?);

    std::process::exit(report.exit_code());
}

/// Load configuration from files and environment.
fn load_config() -> Result<Config> {
    let config = config::Config::builder()
        // Start with defaults
        .add_source(config::Config::try_from(&Config::default())?)
        // Load from config file if exists
        .add_source(
            config::File::with_name("config/default")
                .required(false)
                .format(config::FileFormat::Toml),
        )
        // Override with environment variables
        .add_source(
            config::Environment::default()
                .separator("__")
                .prefix("SYNC")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    let mut config: Config = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    // Manual overrides for nested API config from environment
    // The config crate's nested parsing doesn't work reliably with underscored field names
    if let Ok(url) = std::env::var("SYNC_API_BASE_URL") {
        config.api.base_url = url;
    }
    if let Ok(attempts) = std::env::var("SYNC_API_MAX_ATTEMPTS") {
        config.api.max_attempts = attempts
            .parse()
            .context("SYNC_API_MAX_ATTEMPTS must be an integer")?;
    }
    if let Ok(timeout) = std::env::var("SYNC_API_ATTEMPT_TIMEOUT_SECS") {
        config.api.attempt_timeout_secs = timeout
            .parse()
            .context("SYNC_API_ATTEMPT_TIMEOUT_SECS must be an integer")?;
    }

    Ok(config)
}
