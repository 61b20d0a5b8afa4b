//! Admin service client with per-call bounded retry.

use std::time::Duration;

use reqwest::{Client, Method};
use serde_json::{json, Value};
use tracing::{info, warn};

use sync_core::{Error, Region, Result, Season, SeasonInfo};

use crate::config::ApiConfig;
use crate::retry::RetryPolicy;

/// Client for the remote leaderboard admin API.
///
/// All calls are JSON and go through [`Self::request_with_retry`];
/// callers never see an error from a non-final attempt.
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl AdminClient {
    /// Creates a new client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.attempt_timeout_secs))
            .build()
            .map_err(|e| Error::config(format!("failed to build http client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::new(
                config.max_attempts,
                Duration::from_millis(config.backoff_base_ms),
            ),
        })
    }

    /// GET /seasons
    pub async fn seasons(&self) -> Result<Vec<Season>> {
        let value = self.request_with_retry(Method::GET, "/seasons", None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// GET /season-info/{seasonId}
    pub async fn season_info(&self, season_id: i64) -> Result<SeasonInfo> {
        let value = self
            .request_with_retry(Method::GET, &format!("/season-info/{season_id}"), None)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// GET /mythic-leaderboard/{seasonId}/{periodId}?region={region}
    ///
    /// The payload is opaque to the orchestrator and passed through
    /// unparsed.
    pub async fn mythic_leaderboard(
        &self,
        season_id: i64,
        period_id: i64,
        region: Region,
    ) -> Result<Value> {
        self.request_with_retry(
            Method::GET,
            &format!("/mythic-leaderboard/{season_id}/{period_id}?region={region}"),
            None,
        )
        .await
    }

    /// POST /admin/import-all-leaderboard-json
    pub async fn import_all_leaderboards(&self) -> Result<Value> {
        self.request_with_retry(Method::POST, "/admin/import-all-leaderboard-json", None)
            .await
    }

    /// POST /admin/clear-output
    pub async fn clear_output(&self) -> Result<Value> {
        self.request_with_retry(Method::POST, "/admin/clear-output", None)
            .await
    }

    /// POST /admin/cleanup-leaderboard
    pub async fn cleanup_leaderboard(&self, season_id: i64) -> Result<Value> {
        let body = json!({ "season_id": season_id });
        self.request_with_retry(Method::POST, "/admin/cleanup-leaderboard", Some(&body))
            .await
    }

    /// POST /admin/vacuum-full
    pub async fn vacuum_full(&self) -> Result<Value> {
        self.request_with_retry(Method::POST, "/admin/vacuum-full", None)
            .await
    }

    /// POST /admin/refresh-views
    pub async fn refresh_views(&self) -> Result<Value> {
        self.request_with_retry(Method::POST, "/admin/refresh-views", None)
            .await
    }

    /// Sends one call, retrying failed attempts with exponential
    /// backoff until the policy's attempt cap.
    ///
    /// A failed attempt is any network error, per-attempt timeout,
    /// non-success status, or undecodable success body. The error from
    /// the final attempt is propagated unmodified.
    async fn request_with_retry(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut attempt = 0u32;

        loop {
            attempt += 1;

            let mut request = self
                .http
                .request(method.clone(), &url)
                .header(reqwest::header::CONTENT_TYPE, "application/json");
            if let Some(json_body) = body {
                request = request.json(json_body);
            }

            match self.execute(request, method.as_str(), endpoint).await {
                Ok(value) => {
                    info!(
                        method = %method,
                        endpoint,
                        attempt,
                        outcome = "success",
                        "Remote call attempt"
                    );
                    return Ok(value);
                }
                Err(e) => {
                    info!(
                        method = %method,
                        endpoint,
                        attempt,
                        outcome = "error",
                        "Remote call attempt"
                    );

                    if !self.retry.has_next(attempt) {
                        warn!(
                            method = %method,
                            endpoint,
                            attempts = attempt,
                            error = %e,
                            "Remote call failed, attempts exhausted"
                        );
                        return Err(e);
                    }

                    let backoff = self.retry.backoff(attempt);
                    warn!(
                        method = %method,
                        endpoint,
                        attempt,
                        wait_ms = backoff.as_millis() as u64,
                        error = %e,
                        "Remote call failed, retrying with backoff"
                    );
                    tokio::time::sleep(backoff).await;
                }
            }
        }
    }

    /// Performs a single attempt and decodes the response body.
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        method: &str,
        endpoint: &str,
    ) -> Result<Value> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::remote(method, endpoint, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::remote(
                method,
                endpoint,
                format!("status {status}: {body}"),
            ));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| Error::remote(method, endpoint, format!("invalid response body: {e}")))
    }
}
