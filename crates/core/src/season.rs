//! Season and period listings returned by the leaderboard API.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One leaderboard season as listed by `GET /seasons`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub season_id: i64,
    pub season_name: String,
}

/// One period within a season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Period {
    pub period_id: i64,
}

/// Response of `GET /season-info/{seasonId}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonInfo {
    pub periods: Vec<Period>,
}

/// Pick the season with the highest id.
///
/// Strict greater-than fold: on duplicate ids the first-encountered
/// element wins. Upstream ids are expected to be unique, so ties are
/// implementation-defined rather than contractual.
pub fn latest_season(seasons: &[Season]) -> Result<&Season> {
    seasons
        .iter()
        .reduce(|max, s| if s.season_id > max.season_id { s } else { max })
        .ok_or_else(|| Error::resolution("no seasons returned"))
}

/// Pick the period with the highest id, under the same tie rule as
/// [`latest_season`].
pub fn latest_period(info: &SeasonInfo) -> Result<&Period> {
    info.periods
        .iter()
        .reduce(|max, p| if p.period_id > max.period_id { p } else { max })
        .ok_or_else(|| Error::resolution("no periods returned for season"))
}
