//! Aggregate usage statistics published by the classification service.

use crate::error::GatewayError;
use crate::traits::Gateway;
use crate::types::StatsSummary;
use tracing::{debug, warn};

/// Statistics endpoint, relative to the configured base URL
pub const STATS_PATH: &str = "/api/stats";

/// Fetch how many texts were analysed and how they spread across levels
pub async fn fetch_stats<G: Gateway>(gateway: &G) -> Result<StatsSummary, GatewayError> {
    match gateway.get_json::<StatsSummary>(STATS_PATH).await {
        Ok(summary) => {
            debug!(
                total = summary.total_count,
                levels = summary.levels.len(),
                "statistics received"
            );
            Ok(summary)
        }
        Err(e) => {
            warn!(error = %e, "failed to fetch statistics");
            Err(e)
        }
    }
}
