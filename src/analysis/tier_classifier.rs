//! Tier classification and log-scale density segmentation
//!
//! [`TierClassifier::classify`] partitions the positive values of a sample into
//! casual/regular/power/whale using percentile cut points. The partition is
//! exhaustive and disjoint over positive values.
//!
//! [`TierClassifier::segment_by_density`] is an independent cross-check: it
//! histograms `log10` of the sample into fixed-width bins and reports bin
//! edges sitting in valleys between denser neighbours.

use super::distribution::percentiles;
use crate::config::AnalysisConfig;
use crate::types::analysis_results::{
    DensitySegmentation, Tier, TierBreakdown, TierBreakdownEntry, TierSummary, TierThresholds,
};
use crate::types::Sample;
use std::collections::BTreeMap;
use tracing::debug;

/// Default number of log-scale histogram bins
pub const DENSITY_BINS: usize = 50;

/// Default cap on reported natural boundaries
pub const MAX_NATURAL_BOUNDARIES: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct TierClassifier {
    bins: usize,
    max_boundaries: usize,
}

impl Default for TierClassifier {
    fn default() -> Self {
        Self {
            bins: DENSITY_BINS,
            max_boundaries: MAX_NATURAL_BOUNDARIES,
        }
    }
}

impl From<&AnalysisConfig> for TierClassifier {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            bins: config.density_bins.max(1),
            max_boundaries: config.max_natural_boundaries,
        }
    }
}

impl TierClassifier {
    /// Count and sum the positive values of `raw` per tier
    ///
    /// Every tier is present in the result, empty tiers with a zero summary.
    pub fn classify(raw: &[f64], thresholds: &TierThresholds) -> BTreeMap<Tier, TierSummary> {
        let mut tiers: BTreeMap<Tier, TierSummary> =
            Tier::ALL.iter().map(|t| (*t, TierSummary::default())).collect();

        for &value in raw {
            if let Some(tier) = thresholds.tier_for(value) {
                let summary = tiers.entry(tier).or_default();
                summary.count += 1;
                summary.total_value += value;
            }
        }

        tiers
    }

    /// Tier of a single value, `None` when the value shows no activity
    pub fn classify_value(value: f64, thresholds: &TierThresholds) -> Option<Tier> {
        thresholds.tier_for(value)
    }

    /// Tier table with user and value shares
    ///
    /// User shares are relative to every row in `raw`, zero rows included.
    pub fn breakdown(raw: &[f64], thresholds: &TierThresholds) -> TierBreakdown {
        let tiers = Self::classify(raw, thresholds);
        let total_users = raw.len();
        let total_value: f64 = raw.iter().filter(|v| v.is_finite()).sum();

        let entries = tiers
            .into_iter()
            .map(|(tier, summary)| TierBreakdownEntry::new(tier, summary, total_users, total_value))
            .collect();

        TierBreakdown {
            thresholds: *thresholds,
            total_users,
            total_value,
            entries,
        }
    }

    /// Log-scale histogram valleys plus the standard percentile thresholds
    ///
    /// Returns `None` when the sample has no positive values.
    pub fn segment_by_density(&self, raw: &[f64]) -> Option<DensitySegmentation> {
        let sample = Sample::from_raw(raw);
        if sample.is_empty() {
            return None;
        }

        let logs: Vec<f64> = sample.values().iter().map(|v| v.log10()).collect();
        let (counts, edges) = histogram(&logs, self.bins);

        let natural_boundaries: Vec<f64> = (1..counts.len().saturating_sub(1))
            .filter(|&i| counts[i] < counts[i - 1] && counts[i] < counts[i + 1])
            .take(self.max_boundaries)
            .map(|i| 10f64.powf(edges[i]))
            .collect();

        debug!(
            "Density segmentation: n={} bins={} valleys={}",
            sample.len(),
            self.bins,
            natural_boundaries.len()
        );

        Some(DensitySegmentation {
            natural_boundaries,
            percentile_thresholds: percentiles(&sample.sorted_ascending()),
        })
    }
}

/// Fixed-width histogram over `[min, max]`
///
/// Bins are half-open `[edge_i, edge_i+1)` except the last, which also holds
/// `max`. A zero-width range is widened to `[v - 0.5, v + 0.5]`.
fn histogram(values: &[f64], bins: usize) -> (Vec<usize>, Vec<f64>) {
    let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    // Evenly spaced edges as `i * step + lo`, the last pinned to `hi`
    let step = (hi - lo) / bins as f64;
    let mut edges: Vec<f64> = (0..=bins).map(|i| i as f64 * step + lo).collect();
    edges[bins] = hi;

    let norm = bins as f64 / (hi - lo);
    let mut counts = vec![0usize; bins];
    for &v in values {
        let mut idx = ((v - lo) * norm) as usize;
        idx = idx.min(bins - 1);
        // Correct float rounding against the actual edges
        if idx > 0 && v < edges[idx] {
            idx -= 1;
        } else if idx < bins - 1 && v >= edges[idx + 1] {
            idx += 1;
        }
        counts[idx] += 1;
    }

    (counts, edges)
}
