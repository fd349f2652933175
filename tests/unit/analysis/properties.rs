//! Invariants that hold for any sample
//!
//! Samples come from a small deterministic generator so failures reproduce.

use crate::common::{day, power_law_volumes};
use activity_segmentation::analysis::{
    ActivityPatternAggregator, DistributionAnalyser, ElbowDetector, TierClassifier,
};
use activity_segmentation::types::analysis_results::{Tier, TierThresholds};
use activity_segmentation::types::DailyActivityRecord;

/// Linear congruential generator yielding values in [0, 1)
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn samples() -> Vec<Vec<f64>> {
    let mut rng = Lcg(42);
    let uniform: Vec<f64> = (0..750).map(|_| rng.next_f64() * 1_000.0).collect();
    // Exponential tail with a block of inactive users
    let mut skewed: Vec<f64> = (0..1_200).map(|_| (-rng.next_f64().max(1e-12).ln()) * 250.0).collect();
    skewed.extend(std::iter::repeat(0.0).take(300));
    let repeated = vec![5.0; 150];

    vec![
        uniform,
        skewed,
        repeated,
        vec![0.1; 150],
        vec![1.1; 33],
        power_law_volumes(3_000, 1e7),
        vec![0.5, 2.0],
    ]
}

#[test]
fn test_percentiles_monotone_and_bounded() {
    for sample in samples() {
        let stats = DistributionAnalyser::analyse(&sample, "p").unwrap();
        let p = stats.percentiles;
        assert!(stats.min <= p.p50);
        assert!(p.p50 <= p.p75 && p.p75 <= p.p90 && p.p90 <= p.p95 && p.p95 <= p.p99);
        assert!(p.p99 <= stats.max);
        assert!(stats.std >= 0.0);
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
        if stats.min == stats.max {
            assert_eq!(stats.std, 0.0);
            assert_eq!(stats.mean, stats.min);
        }
    }
}

#[test]
fn test_tiers_exhaustive_and_disjoint() {
    for sample in samples() {
        let stats = DistributionAnalyser::analyse(&sample, "p").unwrap();
        let thresholds = TierThresholds::from_percentiles(&stats.percentiles);
        let tiers = TierClassifier::classify(&sample, &thresholds);

        assert_eq!(tiers.len(), Tier::ALL.len());
        let assigned: usize = tiers.values().map(|s| s.count).sum();
        assert_eq!(assigned, stats.count);
    }
}

#[test]
fn test_analysis_is_idempotent() {
    let detector = ElbowDetector::default();
    let classifier = TierClassifier::default();
    for sample in samples() {
        assert_eq!(
            DistributionAnalyser::analyse(&sample, "p"),
            DistributionAnalyser::analyse(&sample, "p")
        );
        assert_eq!(detector.find_elbows(&sample, 5), detector.find_elbows(&sample, 5));
        assert_eq!(
            classifier.segment_by_density(&sample),
            classifier.segment_by_density(&sample)
        );
    }
}

#[test]
fn test_elbows_within_sample() {
    let detector = ElbowDetector::default();
    for sample in samples() {
        let positives = sample.iter().filter(|v| **v > 0.0).count();
        for elbow in detector.find_elbows(&sample, 5) {
            assert!(elbow.rank < positives);
            assert!(elbow.value > 0.0);
            assert!(elbow.percentile > 0.0 && elbow.percentile <= 100.0);
        }
    }
}

#[test]
fn test_density_boundaries_within_range() {
    let classifier = TierClassifier::default();
    for sample in samples() {
        let stats = DistributionAnalyser::analyse(&sample, "p").unwrap();
        let seg = classifier.segment_by_density(&sample).unwrap();
        assert!(seg.natural_boundaries.len() <= 5);
        assert!(seg.natural_boundaries.windows(2).all(|w| w[0] < w[1]));
        for b in &seg.natural_boundaries {
            assert!(*b >= stats.min * 0.999 && *b <= stats.max * 1.001);
        }
    }
}

#[test]
fn test_active_days_bounded_by_distinct_days() {
    let mut rng = Lcg(7);
    let rows: Vec<DailyActivityRecord> = (0..2_000)
        .map(|i| {
            let d = 1 + (rng.next_f64() * 30.0) as u32;
            let volume = if rng.next_f64() < 0.3 { 0.0 } else { rng.next_f64() * 100.0 };
            DailyActivityRecord::new(format!("u{}", i % 40), day(d), volume, 0.0)
        })
        .collect();

    let activity = ActivityPatternAggregator::aggregate(&rows);
    for record in activity.values() {
        assert!(record.active_days >= 1 && record.active_days <= 30);
        assert_eq!(record.active_days, record.daily_volumes.len());
        assert!(record.daily_volumes.iter().all(|v| *v > 0.0));
    }
}
