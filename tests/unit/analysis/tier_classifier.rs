//! Unit tests for tier classification and density segmentation

use crate::common::{assert_close, power_law_volumes};
use activity_segmentation::analysis::{DistributionAnalyser, TierClassifier};
use activity_segmentation::config::AnalysisConfig;
use activity_segmentation::types::analysis_results::{Tier, TierThresholds};

fn thresholds() -> TierThresholds {
    TierThresholds::new(50.0, 80.0, 95.0)
}

#[test]
fn test_boundary_values_fall_into_lower_tier() {
    let t = thresholds();
    assert_eq!(TierClassifier::classify_value(50.0, &t), Some(Tier::Casual));
    assert_eq!(TierClassifier::classify_value(80.0, &t), Some(Tier::Regular));
    assert_eq!(TierClassifier::classify_value(95.0, &t), Some(Tier::Power));
    assert_eq!(TierClassifier::classify_value(95.01, &t), Some(Tier::Whale));
    assert_eq!(TierClassifier::classify_value(0.01, &t), Some(Tier::Casual));
}

#[test]
fn test_inactive_values_have_no_tier() {
    let t = thresholds();
    assert_eq!(TierClassifier::classify_value(0.0, &t), None);
    assert_eq!(TierClassifier::classify_value(-5.0, &t), None);
    assert_eq!(TierClassifier::classify_value(f64::NAN, &t), None);
}

#[test]
fn test_classify_partition_matches_positive_values() {
    let raw = power_law_volumes(2_000, 500_000.0);
    let stats = DistributionAnalyser::analyse(&raw, "volume").unwrap();
    let t = TierThresholds::from_percentiles(&stats.percentiles);

    let tiers = TierClassifier::classify(&raw, &t);
    let count: usize = tiers.values().map(|s| s.count).sum();
    let total: f64 = tiers.values().map(|s| s.total_value).sum();

    assert_eq!(count, stats.count);
    assert_close(total, raw.iter().sum::<f64>(), 1e-3);
    // Whales are the top 5%, holding the largest share of volume
    assert_eq!(tiers[&Tier::Whale].count, 100);
    assert!(tiers[&Tier::Whale].total_value > tiers[&Tier::Casual].total_value);
}

#[test]
fn test_breakdown_entries_ordered_by_tier() {
    let breakdown = TierClassifier::breakdown(&[0.0, 10.0, 60.0, 90.0, 100.0], &thresholds());
    let order: Vec<Tier> = breakdown.entries.iter().map(|e| e.tier).collect();
    assert_eq!(order, Tier::ALL.to_vec());
    assert_eq!(breakdown.total_users, 5);

    let pct_users: f64 = breakdown.entries.iter().map(|e| e.pct_users).sum();
    // The zero row belongs to no tier
    assert_close(pct_users, 80.0, 1e-9);
    let pct_volume: f64 = breakdown.entries.iter().map(|e| e.pct_volume).sum();
    assert_close(pct_volume, 100.0, 1e-9);
}

#[test]
fn test_breakdown_of_empty_sample() {
    let breakdown = TierClassifier::breakdown(&[], &TierThresholds::default());
    assert_eq!(breakdown.total_users, 0);
    assert!(breakdown.entries.iter().all(|e| e.count == 0 && e.pct_users == 0.0));
}

#[test]
fn test_density_valley_between_clusters() {
    // log10 values span [0, 5]; with 50 bins each bin is 0.1 wide.
    // Bins 10 and 12 hold five values each, bin 11 holds one.
    let mut raw = vec![1.0, 100_000.0];
    raw.extend(std::iter::repeat(10f64.powf(1.05)).take(5));
    raw.push(10f64.powf(1.15));
    raw.extend(std::iter::repeat(10f64.powf(1.25)).take(5));

    let seg = TierClassifier::default().segment_by_density(&raw).unwrap();
    assert_eq!(seg.natural_boundaries.len(), 1);
    assert_close(seg.natural_boundaries[0], 10f64.powf(1.1), 1e-6);
    assert_eq!(seg.percentile_thresholds.p50, 10f64.powf(1.15));
}

#[test]
fn test_density_boundaries_capped_and_ascending() {
    // One value in every even bin leaves a valley in every odd bin
    let mut raw = vec![1.0, 100_000.0];
    raw.extend((1..24).map(|k| 10f64.powf(0.2 * k as f64 + 0.05)));

    let seg = TierClassifier::default().segment_by_density(&raw).unwrap();
    assert_eq!(seg.natural_boundaries.len(), 5);
    assert!(seg.natural_boundaries.windows(2).all(|w| w[0] < w[1]));
    for (boundary, exponent) in seg.natural_boundaries.iter().zip([0.1, 0.3, 0.5, 0.7, 0.9]) {
        assert_close(*boundary, 10f64.powf(exponent), 1e-6);
    }

    let config = AnalysisConfig {
        max_natural_boundaries: 2,
        ..AnalysisConfig::default()
    };
    let seg = TierClassifier::from(&config).segment_by_density(&raw).unwrap();
    assert_eq!(seg.natural_boundaries.len(), 2);
}

#[test]
fn test_density_single_value() {
    let seg = TierClassifier::default().segment_by_density(&[42.0, 0.0]).unwrap();
    assert!(seg.natural_boundaries.is_empty());
    assert_eq!(seg.percentile_thresholds.p99, 42.0);
}
