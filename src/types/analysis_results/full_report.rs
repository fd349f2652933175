//! Full power user analysis report

use super::{
    ActivityPatternReport, DistributionStats, ElbowPoint, PowerUserRule, Recommendation,
    TierBreakdown, TierThresholds,
};
use serde::{Deserialize, Serialize};

/// Volume cut points as plain numbers, for downstream segment definitions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuggestedThresholds {
    pub casual_max_volume: f64,
    pub regular_max_volume: f64,
    pub power_min_volume: f64,
    pub whale_min_volume: f64,
}

impl From<TierThresholds> for SuggestedThresholds {
    fn from(t: TierThresholds) -> Self {
        Self {
            casual_max_volume: t.p75,
            regular_max_volume: t.p90,
            power_min_volume: t.p90,
            whale_min_volume: t.p95,
        }
    }
}

/// Everything a single segmentation run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUserReport {
    /// Users in the volume snapshot (zero-volume rows included)
    pub total_users: usize,
    pub volume_distribution: Option<DistributionStats>,
    pub swap_distribution: Option<DistributionStats>,
    pub avg_size_distribution: Option<DistributionStats>,
    /// `None` when no daily feed was available
    pub activity_patterns: Option<ActivityPatternReport>,
    pub volume_elbows: Vec<ElbowPoint>,
    pub swap_elbows: Vec<ElbowPoint>,
    pub recommendations: Vec<Recommendation>,
    pub tier_breakdown: TierBreakdown,
    pub power_user_rule: PowerUserRule,
    /// Snapshot users satisfying the combined rule
    pub power_user_count: usize,
    pub suggested_thresholds: SuggestedThresholds,
    pub generated_at: String,
}
