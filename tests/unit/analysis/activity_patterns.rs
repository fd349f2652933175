//! Unit tests for daily feed aggregation and activity pattern analysis

use crate::common::{assert_close, day};
use activity_segmentation::analysis::{ActivityPatternAggregator, TierClassifier};
use activity_segmentation::types::DailyActivityRecord;

#[test]
fn test_inactive_day_not_counted() {
    let rows = vec![
        DailyActivityRecord::new("U1", day(1), 5.0, 1.0),
        DailyActivityRecord::new("U1", day(2), 0.0, 0.0),
        DailyActivityRecord::new("U1", day(3), 2.0, 1.0),
    ];
    let activity = ActivityPatternAggregator::aggregate(&rows);

    let u1 = &activity["U1"];
    assert_eq!(u1.active_days, 2);
    assert_eq!(u1.daily_volumes, vec![5.0, 2.0]);
    assert_close(u1.avg_daily_volume(), 3.5, 1e-12);
}

#[test]
fn test_users_without_active_days_absent() {
    let rows = vec![
        DailyActivityRecord::new("idle", day(1), 0.0, 0.0),
        DailyActivityRecord::new("idle", day(2), 0.0, 0.0),
        DailyActivityRecord::new("busy", day(2), 1.0, 1.0),
    ];
    let activity = ActivityPatternAggregator::aggregate(&rows);
    assert_eq!(activity.len(), 1);
    assert!(!activity.contains_key("idle"));
}

#[test]
fn test_duplicate_day_rows_merged() {
    let rows = vec![
        DailyActivityRecord::new("U1", day(1), 5.0, 1.0),
        DailyActivityRecord::new("U1", day(1), 3.0, 2.0),
        DailyActivityRecord::new("U1", day(2), 1.0, 1.0),
    ];
    let u1 = &ActivityPatternAggregator::aggregate(&rows)["U1"];
    assert_eq!(u1.active_days, 2);
    assert_eq!(u1.daily_volumes, vec![8.0, 1.0]);
}

#[test]
fn test_row_order_does_not_matter() {
    let rows = vec![
        DailyActivityRecord::new("B", day(3), 4.0, 1.0),
        DailyActivityRecord::new("A", day(2), 1.0, 1.0),
        DailyActivityRecord::new("A", day(1), 2.0, 0.0),
    ];
    let mut reversed = rows.clone();
    reversed.reverse();
    assert_eq!(
        ActivityPatternAggregator::aggregate(&rows),
        ActivityPatternAggregator::aggregate(&reversed)
    );
    // Daily volumes follow calendar order
    assert_eq!(
        ActivityPatternAggregator::aggregate(&reversed)["A"].daily_volumes,
        vec![2.0, 1.0]
    );
}

#[test]
fn test_empty_feed() {
    let activity = ActivityPatternAggregator::aggregate(&[]);
    assert!(activity.is_empty());

    let report = ActivityPatternAggregator::analyse_patterns(&activity, &TierClassifier::default());
    assert_eq!(report.active_users, 0);
    assert!(report.active_days_distribution.is_none());
    assert!(report.avg_daily_volume_distribution.is_none());
    assert!(report.active_days_thresholds.is_none());
    assert!(report.daily_volume_thresholds.is_none());
}

#[test]
fn test_analyse_patterns_distributions() {
    let mut rows = Vec::new();
    for d in 1..=10 {
        rows.push(DailyActivityRecord::new("steady", day(d), 100.0, 1.0));
    }
    rows.push(DailyActivityRecord::new("once", day(5), 40.0, 1.0));
    // Swap-only day: active, but contributes zero volume to the mean
    rows.push(DailyActivityRecord::new("dust", day(6), 0.0, 2.0));

    let activity = ActivityPatternAggregator::aggregate(&rows);
    let report = ActivityPatternAggregator::analyse_patterns(&activity, &TierClassifier::default());

    assert_eq!(report.active_users, 3);
    let days = report.active_days_distribution.unwrap();
    assert_eq!(days.count, 3);
    assert_eq!(days.max, 10.0);

    // "dust" has a zero mean daily volume and is filtered from the volume sample
    let daily = report.avg_daily_volume_distribution.unwrap();
    assert_eq!(daily.count, 2);
    assert_eq!(daily.min, 40.0);
    assert_eq!(daily.max, 100.0);
    assert!(report.daily_volume_thresholds.is_some());
}
