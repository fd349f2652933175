//! Activity pattern aggregation
//!
//! Reshapes the per-day, per-user feed into one [`UserActivityRecord`] per
//! user. Rows for the same user and day are merged before the activity check,
//! so a day is only ever counted once.

use super::distribution::DistributionAnalyser;
use super::tier_classifier::TierClassifier;
use crate::types::analysis_results::ActivityPatternReport;
use crate::types::{DailyActivityRecord, UserActivityRecord};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

pub const ACTIVE_DAYS_NAME: &str = "Active Days (30d)";
pub const AVG_DAILY_VOLUME_NAME: &str = "Avg Daily Volume";

pub struct ActivityPatternAggregator;

impl ActivityPatternAggregator {
    /// Aggregate daily rows into per-user activity records
    ///
    /// Users without a single active day are absent from the result.
    pub fn aggregate(daily: &[DailyActivityRecord]) -> BTreeMap<String, UserActivityRecord> {
        // user -> day -> (volume, swaps)
        let mut per_user: BTreeMap<&str, BTreeMap<NaiveDate, (f64, f64)>> = BTreeMap::new();
        for row in daily {
            if row.user.is_empty() {
                continue;
            }
            let day = per_user
                .entry(row.user.as_str())
                .or_default()
                .entry(row.day)
                .or_insert((0.0, 0.0));
            day.0 += row.volume;
            day.1 += row.swap_count;
        }

        per_user
            .into_iter()
            .filter_map(|(user, days)| {
                let daily_volumes: Vec<f64> = days
                    .values()
                    .filter(|(volume, swaps)| *volume > 0.0 || *swaps > 0.0)
                    .map(|(volume, _)| *volume)
                    .collect();
                if daily_volumes.is_empty() {
                    return None;
                }
                Some((
                    user.to_string(),
                    UserActivityRecord {
                        user: user.to_string(),
                        active_days: daily_volumes.len(),
                        daily_volumes,
                    },
                ))
            })
            .collect()
    }

    /// Distributions and density segmentations of active days and mean daily volume
    pub fn analyse_patterns(
        activity: &BTreeMap<String, UserActivityRecord>,
        classifier: &TierClassifier,
    ) -> ActivityPatternReport {
        let active_days: Vec<f64> = activity.values().map(|r| r.active_days as f64).collect();
        let avg_daily_volumes: Vec<f64> = activity.values().map(|r| r.avg_daily_volume()).collect();

        debug!("Activity patterns: {} active users", activity.len());

        ActivityPatternReport {
            active_users: activity.len(),
            active_days_distribution: DistributionAnalyser::analyse(&active_days, ACTIVE_DAYS_NAME),
            avg_daily_volume_distribution: DistributionAnalyser::analyse(
                &avg_daily_volumes,
                AVG_DAILY_VOLUME_NAME,
            ),
            active_days_thresholds: classifier.segment_by_density(&active_days),
            daily_volume_thresholds: classifier.segment_by_density(&avg_daily_volumes),
        }
    }
}
