//! Activity pattern analysis types

use super::{DensitySegmentation, DistributionStats};
use serde::{Deserialize, Serialize};

/// Distributions derived from the per-day feed
///
/// Every field is `None` when the feed contains no active user-days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityPatternReport {
    /// Number of users with at least one active day
    pub active_users: usize,
    pub active_days_distribution: Option<DistributionStats>,
    pub avg_daily_volume_distribution: Option<DistributionStats>,
    pub active_days_thresholds: Option<DensitySegmentation>,
    pub daily_volume_thresholds: Option<DensitySegmentation>,
}
