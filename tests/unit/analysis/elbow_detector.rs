//! Unit tests for elbow detection on descending-sorted curves

use crate::common::power_law_volumes;
use activity_segmentation::analysis::ElbowDetector;
use activity_segmentation::config::AnalysisConfig;

/// Piecewise-linear curve: steep for the first `knee` ranks, then shallow
fn kinked_curve(len: usize, knee: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            if i < knee {
                10_000.0 - 40.0 * i as f64
            } else {
                10_000.0 - 40.0 * knee as f64 - (i - knee) as f64
            }
        })
        .collect()
}

#[test]
fn test_below_minimum_sample_returns_nothing() {
    let values: Vec<f64> = (1..=99).map(|i| i as f64).collect();
    assert!(ElbowDetector::default().find_elbows(&values, 5).is_empty());
}

#[test]
fn test_empty_and_all_zero_samples() {
    let detector = ElbowDetector::default();
    assert!(detector.find_elbows(&[], 5).is_empty());
    assert!(detector.find_elbows(&[0.0; 500], 5).is_empty());
}

#[test]
fn test_straight_line_has_no_elbow() {
    let values: Vec<f64> = (1..=400).map(|i| i as f64 * 2.0).collect();
    assert!(ElbowDetector::default().find_elbows(&values, 5).is_empty());
}

#[test]
fn test_kink_found_at_knee() {
    let values = kinked_curve(300, 120);
    let elbows = ElbowDetector::default().find_elbows(&values, 5);

    assert!(!elbows.is_empty());
    assert!(elbows.iter().all(|e| e.rank == 119 || e.rank == 120));
    assert_eq!(elbows[0].rank, 119);
    assert_eq!(elbows[0].value, values[119]);
}

#[test]
fn test_input_order_does_not_matter() {
    let mut values = kinked_curve(300, 120);
    let expected = ElbowDetector::default().find_elbows(&values, 5);
    values.reverse();
    assert_eq!(ElbowDetector::default().find_elbows(&values, 5), expected);
}

#[test]
fn test_max_points_caps_output() {
    // Alternating curvature produces a sign change at nearly every step
    let values: Vec<f64> = (0..200)
        .map(|i| 10_000.0 - 10.0 * i as f64 - if i % 2 == 0 { 0.0 } else { 3.0 })
        .collect();
    let detector = ElbowDetector::default();

    let capped = detector.find_elbows(&values, 3);
    assert_eq!(capped.len(), 3);
    assert!(capped.windows(2).all(|w| w[0].rank < w[1].rank));
    assert!(detector.find_elbows(&values, 0).is_empty());
}

#[test]
fn test_elbow_fields_consistent_with_rank() {
    let values = power_law_volumes(5_000, 1_000_000.0);
    let elbows = ElbowDetector::default().find_elbows(&values, 5);

    assert!(elbows.len() <= 5);
    for elbow in &elbows {
        assert!(elbow.rank < values.len());
        assert_eq!(elbow.value, values[elbow.rank]);
        let expected = 100.0 * (1.0 - elbow.rank as f64 / values.len() as f64);
        assert!((elbow.percentile - expected).abs() < 1e-9);
        assert!(elbow.percentile > 0.0 && elbow.percentile <= 100.0);
    }
}

#[test]
fn test_configured_minimum_sample() {
    let config = AnalysisConfig {
        min_elbow_sample: 500,
        ..AnalysisConfig::default()
    };
    let detector = ElbowDetector::from(&config);
    assert!(detector.find_elbows(&kinked_curve(300, 120), 5).is_empty());
}
