//! Input records and per-user activity aggregates

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One user's totals over the analysis window (the volume snapshot)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserVolumeRecord {
    pub user: String,
    /// Total USD volume over the window
    pub total_volume: f64,
    pub swap_count: f64,
}

impl UserVolumeRecord {
    pub fn new(user: impl Into<String>, total_volume: f64, swap_count: f64) -> Self {
        Self {
            user: user.into(),
            total_volume,
            swap_count,
        }
    }

    /// Average swap size, `None` when the user made no swaps
    pub fn avg_swap_size(&self) -> Option<f64> {
        if self.swap_count > 0.0 {
            Some(self.total_volume / self.swap_count)
        } else {
            None
        }
    }
}

/// One user's activity on one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyActivityRecord {
    pub user: String,
    pub day: NaiveDate,
    pub volume: f64,
    pub swap_count: f64,
}

impl DailyActivityRecord {
    pub fn new(user: impl Into<String>, day: NaiveDate, volume: f64, swap_count: f64) -> Self {
        Self {
            user: user.into(),
            day,
            volume,
            swap_count,
        }
    }

    /// A day counts as active when there was any volume or any swap
    pub fn is_active(&self) -> bool {
        self.volume > 0.0 || self.swap_count > 0.0
    }
}

/// Per-user aggregate over the active days of the daily feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserActivityRecord {
    pub user: String,
    /// Number of distinct active days
    pub active_days: usize,
    /// Volume of each active day, in day order
    pub daily_volumes: Vec<f64>,
}

impl UserActivityRecord {
    /// Mean volume over the user's active days (0.0 when there are none)
    pub fn avg_daily_volume(&self) -> f64 {
        if self.daily_volumes.is_empty() {
            0.0
        } else {
            self.daily_volumes.iter().sum::<f64>() / self.daily_volumes.len() as f64
        }
    }
}
