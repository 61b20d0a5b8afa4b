//! Run timing and final report assembly.

use std::time::Instant;

use tracing::{error, info};

use sync_core::RunReport;

use crate::runner::PipelineRunner;

/// Wraps one pipeline run with timing and produces the final
/// [`RunReport`].
pub struct ResultReporter {
    runner: PipelineRunner,
}

impl ResultReporter {
    pub fn new(runner: PipelineRunner) -> Self {
        Self { runner }
    }

    /// Runs the pipeline once and reports the outcome.
    ///
    /// A failed run keeps only the terminating error message in the
    /// report; per-step detail of a failed run is in the logs.
    pub async fn run(&self) -> RunReport {
        info!("=== Leaderboard refresh starting ===");
        let started = Instant::now();

        let report = match self.runner.run().await {
            Ok(results) => RunReport::Success {
                duration: started.elapsed().as_secs_f64(),
                results,
            },
            Err(e) => RunReport::Error {
                duration: started.elapsed().as_secs_f64(),
                error: e.to_string(),
            },
        };

        match &report {
            RunReport::Success { duration, results } => info!(
                duration_secs = *duration,
                failed_regions = results.fetch.failed_regions().len(),
                "=== Leaderboard refresh complete ==="
            ),
            RunReport::Error { duration, error } => error!(
                duration_secs = *duration,
                error = %error,
                "=== Leaderboard refresh failed ==="
            ),
        }

        report
    }
}
