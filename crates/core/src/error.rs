//! Unified error types for the sync job.
//!
//! Region-level fetch failures are deliberately absent here: they are
//! recorded as `RegionOutcome::Error` values by the fetcher and never
//! travel through this type. Everything that does reach `Error` is
//! fatal to the run once retries are exhausted.

use thiserror::Error;

use crate::report::PipelineStep;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the sync job.
#[derive(Debug, Error)]
pub enum Error {
    /// A single remote call failed (network error, timeout, or
    /// non-success status). Absorbed by the retry loop until attempts
    /// run out, then propagated unmodified.
    #[error("remote call failed: {method} {endpoint}: {message}")]
    Remote {
        method: String,
        endpoint: String,
        message: String,
    },

    /// Season or period resolution found no usable data.
    #[error("resolution failed: {0}")]
    Resolution(String),

    /// A pipeline step failed after retries were exhausted.
    #[error("{step} step failed: {message}")]
    Step {
        step: PipelineStep,
        message: String,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a remote call error.
    pub fn remote(
        method: impl Into<String>,
        endpoint: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self::Remote {
            method: method.into(),
            endpoint: endpoint.into(),
            message: msg.into(),
        }
    }

    /// Create a resolution error.
    pub fn resolution(msg: impl Into<String>) -> Self {
        Self::Resolution(msg.into())
    }

    /// Create a fatal step error.
    pub fn step(step: PipelineStep, msg: impl Into<String>) -> Self {
        Self::Step {
            step,
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error came out of season/period resolution.
    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution(_))
    }
}
