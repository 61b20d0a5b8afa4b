//! Structured logging for the leaderboard sync job.

pub mod tracing_setup;

pub use tracing_setup::*;
