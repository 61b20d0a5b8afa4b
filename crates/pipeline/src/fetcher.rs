//! Per-region leaderboard fetch with partial-failure tolerance.

use tracing::{info, warn};

use admin_client::AdminClient;
use sync_core::{FetchResult, Region, RegionOutcome};

use crate::resolver::ResolvedTarget;

/// Fetches the leaderboard snapshot for every region, sequentially and
/// in the fixed [`Region::ALL`] order.
///
/// Regions are independent data partitions, so a region that still
/// fails after retries is recorded as an error outcome and the
/// remaining regions are processed. This is the only place in the
/// system where a remote failure is downgraded to a recoverable
/// outcome.
pub struct RegionFetcher<'a> {
    client: &'a AdminClient,
}

impl<'a> RegionFetcher<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// Always returns an outcome for all four regions; never fails as
    /// a whole.
    pub async fn fetch_all(&self, target: ResolvedTarget) -> FetchResult {
        let mut results = Vec::with_capacity(Region::ALL.len());

        for region in Region::ALL {
            let outcome = self
                .client
                .mythic_leaderboard(target.season_id, target.period_id, region)
                .await;

            match outcome {
                Ok(data) => {
                    info!(region = %region, "Region fetch succeeded");
                    results.push(RegionOutcome::Success { region, data });
                }
                Err(e) => {
                    warn!(
                        region = %region,
                        error = %e,
                        "Region fetch failed, continuing with remaining regions"
                    );
                    results.push(RegionOutcome::Error {
                        region,
                        error: e.to_string(),
                    });
                }
            }
        }

        FetchResult {
            season_id: target.season_id,
            period_id: target.period_id,
            results,
        }
    }
}
