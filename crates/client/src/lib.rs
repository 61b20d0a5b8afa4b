//! HTTP client for the leaderboard admin service.
//!
//! Every remote call goes through one bounded-retry primitive with
//! exponential backoff; the rest of this crate is the typed endpoint
//! surface built on top of it.

pub mod client;
pub mod config;
pub mod retry;

pub use client::AdminClient;
pub use config::ApiConfig;
pub use retry::RetryPolicy;
