//! Threshold recommendation
//!
//! Packages the p75/p90/p95 cut points of each metric into one
//! recommendation per metric, and builds the combined power-user rule.
//! Missing distributions contribute zero thresholds, which must be read as
//! "no data" rather than a real boundary.

use crate::types::analysis_results::{DistributionStats, PowerUserRule, Recommendation, TierThresholds};

pub const VOLUME_METRIC: &str = "Total Volume (30d)";
pub const SWAP_METRIC: &str = "Swap Count (30d)";
pub const ACTIVE_DAYS_METRIC: &str = "Active Days (30d)";

/// Default minimum active days for the frequent-trader branch of the rule
pub const MIN_ACTIVE_DAYS: usize = 7;

/// Divisor turning the 30-day casual volume cap into a daily volume floor
const DAYS_PER_WEEK: f64 = 7.0;

pub struct ThresholdRecommender;

impl ThresholdRecommender {
    /// One recommendation per metric: volume, swap count, active days
    ///
    /// Only the volume entry carries a whale cut point.
    pub fn recommend(
        volume_stats: Option<&DistributionStats>,
        active_days_stats: Option<&DistributionStats>,
        swap_stats: Option<&DistributionStats>,
    ) -> Vec<Recommendation> {
        let volume = TierThresholds::from_stats(volume_stats);
        let swaps = TierThresholds::from_stats(swap_stats);
        let days = TierThresholds::from_stats(active_days_stats);

        vec![
            Recommendation {
                metric: VOLUME_METRIC.to_string(),
                casual_max: volume.p75,
                power_user_min: volume.p90,
                whale_min: Some(volume.p95),
                reasoning: "Based on volume distribution percentiles".to_string(),
            },
            Recommendation {
                metric: SWAP_METRIC.to_string(),
                casual_max: swaps.p75,
                power_user_min: swaps.p90,
                whale_min: None,
                reasoning: "Based on activity frequency percentiles".to_string(),
            },
            Recommendation {
                metric: ACTIVE_DAYS_METRIC.to_string(),
                casual_max: days.p75,
                power_user_min: days.p90,
                whale_min: None,
                reasoning: "Based on consistency of engagement".to_string(),
            },
        ]
    }

    /// Combined rule: volume above p90, OR `min_active_days`+ active days with
    /// mean daily volume above p75 / 7
    pub fn power_user_rule(
        volume_stats: Option<&DistributionStats>,
        min_active_days: usize,
    ) -> PowerUserRule {
        let volume = TierThresholds::from_stats(volume_stats);
        PowerUserRule {
            volume_min: volume.p90,
            min_active_days,
            min_avg_daily_volume: volume.p75 / DAYS_PER_WEEK,
        }
    }
}
