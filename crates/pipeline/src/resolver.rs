//! Resolves which season and period a run targets.

use tracing::info;

use admin_client::AdminClient;
use sync_core::{latest_period, latest_season, Result};

/// Season/period pair a run operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub season_id: i64,
    pub period_id: i64,
}

/// Discovers the most recent season and the most recent period within
/// it.
pub struct SeasonResolver<'a> {
    client: &'a AdminClient,
}

impl<'a> SeasonResolver<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// Resolution failure is fatal to the run; there is no fallback
    /// season or period, and no region fetch happens after a failure
    /// here.
    pub async fn resolve(&self) -> Result<ResolvedTarget> {
        let seasons = self.client.seasons().await?;
        let season = latest_season(&seasons)?;

        let info = self.client.season_info(season.season_id).await?;
        let period = latest_period(&info)?;

        info!(
            season_id = season.season_id,
            season_name = %season.season_name,
            period_id = period.period_id,
            "Resolved current season and period"
        );

        Ok(ResolvedTarget {
            season_id: season.season_id,
            period_id: period.period_id,
        })
    }
}
