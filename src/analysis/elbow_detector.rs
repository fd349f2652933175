//! Elbow detection on descending-sorted samples
//!
//! The sorted curve is resampled to at most `resample_points` evenly spaced
//! indices, then differenced twice. An elbow is reported wherever the sign of
//! the second difference changes between neighbouring positions, i.e. where
//! the decay curve switches between concave and convex.
//!
//! No smoothing is applied beyond the resampling, so noisy curves can report
//! several elbows and smooth ones none at all. Both are valid results.

use crate::config::AnalysisConfig;
use crate::types::analysis_results::ElbowPoint;
use crate::types::Sample;
use tracing::debug;

/// Default minimum number of positive values for a curvature estimate
pub const MIN_ELBOW_SAMPLE: usize = 100;

/// Default cap on resampled curve positions
pub const ELBOW_RESAMPLE_POINTS: usize = 1000;

/// Default cap on reported elbows
pub const DEFAULT_MAX_ELBOWS: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct ElbowDetector {
    min_sample: usize,
    resample_points: usize,
}

impl Default for ElbowDetector {
    fn default() -> Self {
        Self {
            min_sample: MIN_ELBOW_SAMPLE,
            resample_points: ELBOW_RESAMPLE_POINTS,
        }
    }
}

impl From<&AnalysisConfig> for ElbowDetector {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            min_sample: config.min_elbow_sample,
            resample_points: config.elbow_resample_points.max(2),
        }
    }
}

impl ElbowDetector {
    /// Find up to `max_points` elbows, ordered from the high-value end
    ///
    /// Returns an empty vector when fewer than `min_sample` positive values
    /// are available or when the curvature never changes sign.
    pub fn find_elbows(&self, raw: &[f64], max_points: usize) -> Vec<ElbowPoint> {
        let sorted = Sample::from_raw(raw).sorted_descending();
        let n = sorted.len();

        if n < self.min_sample || n < 3 {
            debug!(
                "Elbow detection skipped: {} positive values (minimum {})",
                n, self.min_sample
            );
            return Vec::new();
        }

        let indices = resample_indices(n, self.resample_points.min(n));
        let sampled: Vec<f64> = indices.iter().map(|&i| sorted[i]).collect();

        let first = diff(&sampled);
        let second = diff(&first);
        let signs: Vec<i8> = second.iter().map(|&v| sign(v)).collect();

        let elbows: Vec<ElbowPoint> = signs
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| pair[0] != pair[1])
            .take(max_points)
            .map(|(j, _)| {
                let rank = indices[j + 1];
                ElbowPoint {
                    rank,
                    value: sorted[rank],
                    percentile: 100.0 * (1.0 - rank as f64 / n as f64),
                }
            })
            .collect();

        debug!(
            "Elbow detection: n={} resampled={} elbows={}",
            n,
            indices.len(),
            elbows.len()
        );

        elbows
    }
}

/// `count` evenly spaced indices over `0..=n-1`, truncated towards zero
///
/// The last index is always `n - 1`.
fn resample_indices(n: usize, count: usize) -> Vec<usize> {
    if count <= 1 || n <= 1 {
        return vec![0];
    }
    let step = (n - 1) as f64 / (count - 1) as f64;
    (0..count)
        .map(|i| {
            if i == count - 1 {
                n - 1
            } else {
                ((i as f64 * step) as usize).min(n - 1)
            }
        })
        .collect()
}

fn diff(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}
