//! CLI command implementations

pub mod analyse;
pub mod fetch;

use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::source::rows::{parse_daily_rows, parse_volume_rows};
use crate::source::{daily_activity_query, volume_snapshot_query, CubeClient};
use crate::types::{DailyActivityRecord, UserVolumeRecord};
use tracing::{error, info};

/// Load configuration, applying an optional API key override
pub(crate) fn load_config(api_key: &Option<String>) -> AppResult<AppConfig> {
    let mut config = AppConfig::get_defaults()?;
    if let Some(key) = api_key {
        config.api.api_key = key.clone();
    }
    Ok(config)
}

/// Fetch both inputs concurrently
///
/// A failed volume query is fatal. A failed daily query is logged and treated
/// as an empty feed, which only skips activity analysis.
pub(crate) async fn fetch_inputs(
    client: &CubeClient,
) -> AppResult<(Vec<UserVolumeRecord>, Vec<DailyActivityRecord>)> {
    let volume_query = volume_snapshot_query(client.config());
    let daily_query = daily_activity_query(client.config());

    println!("Fetching user volume and daily activity data...");
    let (volume, daily) = futures::join!(client.load(&volume_query), client.load(&daily_query));

    let snapshot = parse_volume_rows(&volume?);
    println!("  Retrieved {} users", snapshot.len());

    let daily = match daily {
        Ok(response) => {
            let rows = parse_daily_rows(&response);
            println!("  Retrieved {} daily records", rows.len());
            rows
        }
        Err(e) => {
            error!("Error fetching daily data: {}", e);
            println!("  Error fetching daily data: {}", e);
            Vec::new()
        }
    };

    info!(
        "Fetched {} snapshot rows and {} daily rows",
        snapshot.len(),
        daily.len()
    );
    Ok((snapshot, daily))
}
