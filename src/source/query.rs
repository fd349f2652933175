//! Cube query definitions

use crate::config::ApiConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MEASURE_VOLUME: &str = "user_axiom_volume.total_usd_volume";
pub const MEASURE_SWAPS: &str = "user_axiom_volume.swap_count";
pub const DIMENSION_USER: &str = "user_axiom_volume.fee_payer";
pub const TIME_DIMENSION: &str = "user_axiom_volume.aggregation_date";

/// Cube `/load` query body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CubeQuery {
    pub measures: Vec<String>,
    pub dimensions: Vec<String>,
    pub time_dimensions: Vec<TimeDimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeDimension {
    pub dimension: String,
    pub date_range: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<String>,
}

fn base_query(config: &ApiConfig, granularity: Option<&str>, limit: usize) -> CubeQuery {
    CubeQuery {
        measures: vec![MEASURE_VOLUME.to_string(), MEASURE_SWAPS.to_string()],
        dimensions: vec![DIMENSION_USER.to_string()],
        time_dimensions: vec![TimeDimension {
            dimension: TIME_DIMENSION.to_string(),
            date_range: config.date_range.clone(),
            granularity: granularity.map(str::to_string),
        }],
        order: None,
        limit: Some(limit),
    }
}

/// Per-user totals over the window, largest volume first
///
/// Only pre-aggregated measures are requested so the query hits the rollup.
pub fn volume_snapshot_query(config: &ApiConfig) -> CubeQuery {
    let mut query = base_query(config, None, config.volume_limit);
    query.order = Some(BTreeMap::from([(
        MEASURE_VOLUME.to_string(),
        "desc".to_string(),
    )]));
    query
}

/// Per-user, per-day rows over the window
pub fn daily_activity_query(config: &ApiConfig) -> CubeQuery {
    base_query(config, Some("day"), config.daily_limit)
}
