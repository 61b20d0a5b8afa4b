//! Run reports: per-region outcomes, per-step results, and the final
//! run summary.
//!
//! Outcomes are explicit tagged values rather than control flow: a
//! failed region is a `RegionOutcome::Error` inside a successful run,
//! while a failed step surfaces as `RunReport::Error`. The report is
//! the run's sole observable artifact besides log output.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::region::Region;

/// One ordered stage of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStep {
    Fetch,
    Import,
    Clear,
    Cleanup,
    Vacuum,
    Refresh,
}

impl PipelineStep {
    /// Fixed execution order. Steps never run out of order; a fatal
    /// error skips the remainder entirely.
    pub const ALL: [PipelineStep; 6] = [
        PipelineStep::Fetch,
        PipelineStep::Import,
        PipelineStep::Clear,
        PipelineStep::Cleanup,
        PipelineStep::Vacuum,
        PipelineStep::Refresh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Import => "import",
            Self::Clear => "clear",
            Self::Cleanup => "cleanup",
            Self::Vacuum => "vacuum",
            Self::Refresh => "refresh",
        }
    }
}

impl fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one region's fetch. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RegionOutcome {
    Success { region: Region, data: Value },
    Error { region: Region, error: String },
}

impl RegionOutcome {
    pub fn region(&self) -> Region {
        match self {
            Self::Success { region, .. } | Self::Error { region, .. } => *region,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Aggregated fetch step output. Always covers every region, in the
/// fixed [`Region::ALL`] order, regardless of individual outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchResult {
    pub season_id: i64,
    pub period_id: i64,
    pub results: Vec<RegionOutcome>,
}

impl FetchResult {
    /// Regions whose fetch failed after retries.
    pub fn failed_regions(&self) -> Vec<Region> {
        self.results
            .iter()
            .filter(|o| !o.is_success())
            .map(|o| o.region())
            .collect()
    }
}

/// Outputs of the six pipeline steps on a fully successful run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResults {
    pub fetch: FetchResult,
    pub import: Value,
    pub clear: Value,
    pub cleanup: Value,
    pub vacuum: Value,
    pub refresh: Value,
}

/// Final structured result of one run, created exactly once per
/// invocation. A failed run keeps only the terminating error message;
/// per-step detail of a failed run lives in the logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RunReport {
    Success {
        /// Elapsed wall-clock time in seconds.
        duration: f64,
        results: StepResults,
    },
    Error {
        duration: f64,
        error: String,
    },
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn duration(&self) -> f64 {
        match self {
            Self::Success { duration, .. } | Self::Error { duration, .. } => *duration,
        }
    }

    /// Process exit code for this report: 0 on success, 1 on any
    /// unrecovered failure.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}
