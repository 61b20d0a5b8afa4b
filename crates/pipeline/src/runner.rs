//! Ordered execution of the refresh pipeline.

use std::future::Future;

use serde_json::Value;
use tracing::info;

use admin_client::AdminClient;
use sync_core::{Error, PipelineStep, Result, StepResults};

use crate::fetcher::RegionFetcher;
use crate::resolver::SeasonResolver;

/// Runs the six pipeline steps strictly in order.
///
/// Steps after the fetch act on one shared remote store; skipping one
/// would leave that store inconsistent, so any failure there aborts
/// the remaining steps. The fetch step itself only fails on
/// season/period resolution, never on individual regions.
pub struct PipelineRunner {
    client: AdminClient,
}

impl PipelineRunner {
    pub fn new(client: AdminClient) -> Self {
        Self { client }
    }

    /// Executes one full run and collects every step's output.
    pub async fn run(&self) -> Result<StepResults> {
        info!(step = %PipelineStep::Fetch, "Starting step");
        let target = SeasonResolver::new(&self.client).resolve().await?;
        let fetch = RegionFetcher::new(&self.client).fetch_all(target).await;
        info!(
            step = %PipelineStep::Fetch,
            failed_regions = fetch.failed_regions().len(),
            "Step complete"
        );

        let import = self
            .step(PipelineStep::Import, self.client.import_all_leaderboards())
            .await?;
        let clear = self
            .step(PipelineStep::Clear, self.client.clear_output())
            .await?;
        let cleanup = self
            .step(
                PipelineStep::Cleanup,
                self.client.cleanup_leaderboard(target.season_id),
            )
            .await?;
        let vacuum = self
            .step(PipelineStep::Vacuum, self.client.vacuum_full())
            .await?;
        let refresh = self
            .step(PipelineStep::Refresh, self.client.refresh_views())
            .await?;

        Ok(StepResults {
            fetch,
            import,
            clear,
            cleanup,
            vacuum,
            refresh,
        })
    }

    /// Runs one fatal step: the triggering error is tagged with the
    /// step and aborts the pipeline via `?` in [`Self::run`].
    async fn step<F>(&self, step: PipelineStep, action: F) -> Result<Value>
    where
        F: Future<Output = Result<Value>>,
    {
        info!(step = %step, "Starting step");
        let value = action
            .await
            .map_err(|e| Error::step(step, e.to_string()))?;
        info!(step = %step, "Step complete");
        Ok(value)
    }
}
