//! Core types and errors for the leaderboard sync job.

pub mod error;
pub mod region;
pub mod report;
pub mod season;

pub use error::{Error, Result};
pub use region::Region;
pub use report::*;
pub use season::*;
