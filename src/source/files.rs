//! Offline inputs and result persistence
//!
//! Inputs can be a saved Cube response (`{"data": [...]}`, any extension other
//! than `.csv`) or a CSV file:
//! - volume snapshot: `user,total_volume,swap_count`
//! - daily feed: `user,day,volume,swap_count` (`day` as `YYYY-MM-DD`)
//!
//! Empty numeric CSV fields are read as 0.

use super::rows::{parse_daily_rows, parse_day, parse_volume_rows, CubeResponse};
use crate::errors::{AppError, AppResult};
use crate::types::{DailyActivityRecord, UserVolumeRecord};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
struct VolumeCsvRow {
    user: String,
    total_volume: Option<f64>,
    swap_count: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DailyCsvRow {
    user: String,
    day: String,
    volume: Option<f64>,
    swap_count: Option<f64>,
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Read a saved Cube response
pub fn load_cube_response(path: &Path) -> AppResult<CubeResponse> {
    let content = fs::read_to_string(path)?;
    let response: CubeResponse = serde_json::from_str(&content)?;
    Ok(response)
}

/// Write a Cube response for later offline analysis
pub fn save_cube_response(path: &Path, response: &CubeResponse) -> AppResult<()> {
    write_json(path, response)
}

/// Write any serialisable value as pretty JSON, creating parent directories
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Volume snapshot from CSV or a saved Cube response
pub fn load_volume_records(path: &Path) -> AppResult<Vec<UserVolumeRecord>> {
    let records = if is_csv(path) {
        load_volume_csv(path)?
    } else {
        parse_volume_rows(&load_cube_response(path)?)
    };
    info!("Loaded {} volume rows from {}", records.len(), path.display());
    Ok(records)
}

/// Daily feed from CSV or a saved Cube response
pub fn load_daily_records(path: &Path) -> AppResult<Vec<DailyActivityRecord>> {
    let records = if is_csv(path) {
        load_daily_csv(path)?
    } else {
        parse_daily_rows(&load_cube_response(path)?)
    };
    info!("Loaded {} daily rows from {}", records.len(), path.display());
    Ok(records)
}

fn load_volume_csv(path: &Path) -> AppResult<Vec<UserVolumeRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for result in reader.deserialize() {
        let row: VolumeCsvRow = result?;
        records.push(UserVolumeRecord::new(
            row.user,
            row.total_volume.unwrap_or(0.0),
            row.swap_count.unwrap_or(0.0),
        ));
    }
    Ok(records)
}

fn load_daily_csv(path: &Path) -> AppResult<Vec<DailyActivityRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);
        let row: DailyCsvRow = record.deserialize(Some(&headers))?;

        let day = parse_day(row.day.trim()).ok_or_else(|| AppError::InvalidRecord {
            line,
            reason: format!("invalid day '{}'", row.day),
        })?;

        records.push(DailyActivityRecord::new(
            row.user,
            day,
            row.volume.unwrap_or(0.0),
            row.swap_count.unwrap_or(0.0),
        ));
    }
    Ok(records)
}
