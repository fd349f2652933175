//! Cube response rows to typed records
//!
//! Cube returns measures as JSON numbers or as numeric strings depending on
//! the measure type. Absent, null and unparseable numeric fields are read as 0.

use super::query::{DIMENSION_USER, MEASURE_SWAPS, MEASURE_VOLUME, TIME_DIMENSION};
use crate::types::{DailyActivityRecord, UserVolumeRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

pub type CubeRow = Map<String, Value>;

/// Body of a Cube `/load` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CubeResponse {
    #[serde(default)]
    pub data: Vec<CubeRow>,
}

/// Numeric field of a row, 0.0 when absent, null or unparseable
pub fn numeric_field(row: &CubeRow, key: &str) -> f64 {
    match row.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn user_field(row: &CubeRow) -> Option<&str> {
    row.get(DIMENSION_USER)
        .and_then(Value::as_str)
        .filter(|u| !u.is_empty())
}

/// Parse the leading `YYYY-MM-DD` of a Cube timestamp
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let date = raw.get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

fn day_field(row: &CubeRow) -> Option<NaiveDate> {
    let day_key = format!("{}.day", TIME_DIMENSION);
    row.get(&day_key)
        .or_else(|| row.get(TIME_DIMENSION))
        .and_then(Value::as_str)
        .and_then(parse_day)
}

/// Volume snapshot rows; rows without a user are skipped
pub fn parse_volume_rows(response: &CubeResponse) -> Vec<UserVolumeRecord> {
    let mut skipped = 0usize;
    let records: Vec<UserVolumeRecord> = response
        .data
        .iter()
        .filter_map(|row| {
            let Some(user) = user_field(row) else {
                skipped += 1;
                return None;
            };
            Some(UserVolumeRecord::new(
                user,
                numeric_field(row, MEASURE_VOLUME),
                numeric_field(row, MEASURE_SWAPS),
            ))
        })
        .collect();

    if skipped > 0 {
        warn!("Skipped {} volume rows without a user", skipped);
    }
    records
}

/// Daily feed rows; rows without a user or a parseable day are skipped
pub fn parse_daily_rows(response: &CubeResponse) -> Vec<DailyActivityRecord> {
    let mut skipped = 0usize;
    let records: Vec<DailyActivityRecord> = response
        .data
        .iter()
        .filter_map(|row| {
            let (Some(user), Some(day)) = (user_field(row), day_field(row)) else {
                skipped += 1;
                return None;
            };
            Some(DailyActivityRecord::new(
                user,
                day,
                numeric_field(row, MEASURE_VOLUME),
                numeric_field(row, MEASURE_SWAPS),
            ))
        })
        .collect();

    if skipped > 0 {
        warn!("Skipped {} daily rows without a user or day", skipped);
    }
    records
}
