//! Threshold recommendation types

use serde::{Deserialize, Serialize};

/// Recommended cut points for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub metric: String,
    pub casual_max: f64,
    pub power_user_min: f64,
    /// Only the volume metric carries a whale cut point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whale_min: Option<f64>,
    pub reasoning: String,
}

/// Combined "power user" definition
///
/// A user qualifies when EITHER total volume exceeds `volume_min`, OR the user
/// was active on at least `min_active_days` days with a mean daily volume above
/// `min_avg_daily_volume`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUserRule {
    pub volume_min: f64,
    pub min_active_days: usize,
    pub min_avg_daily_volume: f64,
}

impl PowerUserRule {
    pub fn is_power_user(&self, total_volume: f64, active_days: usize, avg_daily_volume: f64) -> bool {
        total_volume > self.volume_min
            || (active_days >= self.min_active_days && avg_daily_volume > self.min_avg_daily_volume)
    }
}
