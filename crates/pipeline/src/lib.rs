//! Ordered refresh pipeline for the leaderboard sync job.
//!
//! One run sequences: season/period resolution, per-region fetch,
//! import, output clear, season cleanup, full vacuum, and view
//! refresh. Region fetch tolerates partial failure; every later step
//! is fatal to the run.

pub mod fetcher;
pub mod reporter;
pub mod resolver;
pub mod runner;

pub use fetcher::RegionFetcher;
pub use reporter::ResultReporter;
pub use resolver::{ResolvedTarget, SeasonResolver};
pub use runner::PipelineRunner;
