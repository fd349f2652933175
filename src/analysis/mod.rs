//! User-activity segmentation engine
//!
//! Turns raw per-user samples into engagement tiers and threshold
//! recommendations.
//!
//! ## Overview
//!
//! The module is organised around the `SegmentationEngine`, which runs the
//! full pipeline over one in-memory snapshot:
//!
//! - **Distribution Analysis** - Summary and percentile statistics per metric
//! - **Elbow Detection** - Curvature sign changes in the descending-sorted curve
//! - **Tier Classification** - casual/regular/power/whale partitions and log-scale density valleys
//! - **Activity Patterns** - Active-day counts and mean daily volume from the per-day feed
//! - **Threshold Recommendation** - Per-metric cut points and the combined power-user rule
//! - **Report Generation** - Console and JSON output
//!
//! ## Usage
//!
//! ```rust
//! use activity_segmentation::analysis::SegmentationEngine;
//! use activity_segmentation::config::AnalysisConfig;
//! use activity_segmentation::errors::AppResult;
//! use activity_segmentation::types::UserVolumeRecord;
//!
//! fn example() -> AppResult<()> {
//!     let engine = SegmentationEngine::new(AnalysisConfig::default());
//!     let snapshot = vec![
//!         UserVolumeRecord::new("alice", 1_500.0, 12.0),
//!         UserVolumeRecord::new("bob", 90.0, 2.0),
//!     ];
//!     let report = engine.run(&snapshot, &[])?;
//!     assert_eq!(report.total_users, 2);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod activity_patterns;
pub mod distribution;
pub mod elbow_detector;
pub mod reports;
pub mod threshold_recommender;
pub mod tier_classifier;

pub use activity_patterns::ActivityPatternAggregator;
pub use distribution::{percentile, DistributionAnalyser};
pub use elbow_detector::ElbowDetector;
pub use reports::{OutputFormat, ReportFormatter};
pub use threshold_recommender::ThresholdRecommender;
pub use tier_classifier::TierClassifier;

use crate::config::AnalysisConfig;
use crate::errors::{AppError, AppResult};
use crate::types::analysis_results::{PowerUserReport, SuggestedThresholds, TierThresholds};
use crate::types::{DailyActivityRecord, UserVolumeRecord};
use tracing::{info, warn};

pub const VOLUME_DISTRIBUTION_NAME: &str = "Total USD Volume (30d)";
pub const SWAP_DISTRIBUTION_NAME: &str = "Swap Count (30d)";
pub const AVG_SIZE_DISTRIBUTION_NAME: &str = "Avg Swap Size";

/// Runs the segmentation pipeline over one snapshot and daily feed
pub struct SegmentationEngine {
    config: AnalysisConfig,
    elbows: ElbowDetector,
    classifier: TierClassifier,
}

impl SegmentationEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        let elbows = ElbowDetector::from(&config);
        let classifier = TierClassifier::from(&config);
        Self {
            config,
            elbows,
            classifier,
        }
    }

    /// Run every analysis and assemble the full report
    ///
    /// # Arguments
    /// * `snapshot` - One row per user over the analysis window
    /// * `daily` - Per-user per-day feed; may be empty, which skips activity analysis
    ///
    /// # Returns
    /// * `AppResult<PowerUserReport>` - Fails only when the snapshot has no rows
    pub fn run(
        &self,
        snapshot: &[UserVolumeRecord],
        daily: &[DailyActivityRecord],
    ) -> AppResult<PowerUserReport> {
        if snapshot.is_empty() {
            return Err(AppError::NoData("volume snapshot is empty".to_string()));
        }

        info!(
            "Segmenting {} users ({} daily rows)",
            snapshot.len(),
            daily.len()
        );

        let volumes: Vec<f64> = snapshot.iter().map(|r| r.total_volume).collect();
        let swaps: Vec<f64> = snapshot.iter().map(|r| r.swap_count).collect();
        let avg_sizes: Vec<f64> = snapshot.iter().filter_map(|r| r.avg_swap_size()).collect();

        let volume_distribution = DistributionAnalyser::analyse(&volumes, VOLUME_DISTRIBUTION_NAME);
        let swap_distribution = DistributionAnalyser::analyse(&swaps, SWAP_DISTRIBUTION_NAME);
        let avg_size_distribution =
            DistributionAnalyser::analyse(&avg_sizes, AVG_SIZE_DISTRIBUTION_NAME);

        if volume_distribution.is_none() {
            warn!("No user has positive volume; volume thresholds will be zero");
        }

        let volume_elbows = self
            .elbows
            .find_elbows(&volumes, self.config.max_elbow_points);
        let swap_elbows = self.elbows.find_elbows(&swaps, self.config.max_elbow_points);

        let activity = ActivityPatternAggregator::aggregate(daily);
        let activity_patterns = if daily.is_empty() {
            warn!("No daily activity data, skipping activity pattern analysis");
            None
        } else {
            Some(ActivityPatternAggregator::analyse_patterns(
                &activity,
                &self.classifier,
            ))
        };

        let active_days_stats = activity_patterns
            .as_ref()
            .and_then(|a| a.active_days_distribution.as_ref());

        let recommendations = ThresholdRecommender::recommend(
            volume_distribution.as_ref(),
            active_days_stats,
            swap_distribution.as_ref(),
        );

        let thresholds = TierThresholds::from_stats(volume_distribution.as_ref());
        let tier_breakdown = TierClassifier::breakdown(&volumes, &thresholds);

        let power_user_rule = ThresholdRecommender::power_user_rule(
            volume_distribution.as_ref(),
            self.config.min_active_days,
        );
        let power_user_count = snapshot
            .iter()
            .filter(|r| {
                let (days, avg) = activity
                    .get(&r.user)
                    .map(|a| (a.active_days, a.avg_daily_volume()))
                    .unwrap_or((0, 0.0));
                power_user_rule.is_power_user(r.total_volume, days, avg)
            })
            .count();

        info!(
            "Segmentation complete: {} volume elbows, {} power users",
            volume_elbows.len(),
            power_user_count
        );

        Ok(PowerUserReport {
            total_users: snapshot.len(),
            volume_distribution,
            swap_distribution,
            avg_size_distribution,
            activity_patterns,
            volume_elbows,
            swap_elbows,
            recommendations,
            tier_breakdown,
            power_user_rule,
            power_user_count,
            suggested_thresholds: SuggestedThresholds::from(thresholds),
            generated_at: chrono::Utc::now().to_rfc3339(),
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }
}
