//! Distribution analysis
//!
//! Summary and percentile statistics over a single metric sample. Zero and
//! non-positive values are filtered out first; an empty sample yields `None`
//! rather than an error so callers can skip dependent computations.

use crate::types::analysis_results::{DistributionStats, Percentiles};
use crate::types::Sample;
use crate::utils::math::{population_std, sorted_mean};
use tracing::debug;

/// Percentile of an ascending-sorted slice using linear interpolation
///
/// `rank = p/100 * (n - 1)`, interpolating between the order statistics at
/// `floor(rank)` and `ceil(rank)`. Returns 0.0 for an empty slice.
///
/// # Examples
/// ```
/// use activity_segmentation::analysis::distribution::percentile;
///
/// let sorted = [10.0, 20.0, 30.0, 40.0, 100.0];
/// assert_eq!(percentile(&sorted, 50.0), 30.0);
/// assert_eq!(percentile(&sorted, 75.0), 40.0);
/// assert!((percentile(&sorted, 90.0) - 76.0).abs() < 1e-9);
/// ```
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return sorted[0];
    }

    let rank = (p / 100.0).clamp(0.0, 1.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }

    // Interpolate from whichever neighbour is closer, as numpy's linear method does
    let frac = rank - lower as f64;
    let (a, b) = (sorted[lower], sorted[upper]);
    if frac >= 0.5 {
        b - (b - a) * (1.0 - frac)
    } else {
        a + (b - a) * frac
    }
}

/// Standard percentile set of an ascending-sorted slice
pub fn percentiles(sorted: &[f64]) -> Percentiles {
    Percentiles {
        p50: percentile(sorted, 50.0),
        p75: percentile(sorted, 75.0),
        p90: percentile(sorted, 90.0),
        p95: percentile(sorted, 95.0),
        p99: percentile(sorted, 99.0),
    }
}

/// Distribution analyser for raw metric series
pub struct DistributionAnalyser;

impl DistributionAnalyser {
    /// Analyse a raw metric series
    ///
    /// # Arguments
    /// * `raw` - Raw values; zero, negative and non-finite entries are ignored
    /// * `name` - Human-readable metric name carried into the result
    ///
    /// # Returns
    /// * `Option<DistributionStats>` - `None` when no positive value remains
    pub fn analyse(raw: &[f64], name: &str) -> Option<DistributionStats> {
        Self::analyse_sample(&Sample::from_raw(raw), name)
    }

    /// Analyse an already filtered sample
    pub fn analyse_sample(sample: &Sample, name: &str) -> Option<DistributionStats> {
        if sample.is_empty() {
            debug!("{}: no positive values, skipping distribution", name);
            return None;
        }

        let sorted = sample.sorted_ascending();
        let n = sorted.len();
        let percentiles = percentiles(&sorted);

        let stats = DistributionStats {
            name: name.to_string(),
            count: n,
            min: sorted[0],
            max: sorted[n - 1],
            mean: sorted_mean(&sorted),
            median: percentiles.p50,
            std: population_std(&sorted),
            percentiles,
        };

        debug!(
            "{}: n={} min={} median={} p90={} max={}",
            name, stats.count, stats.min, stats.median, stats.percentiles.p90, stats.max
        );

        Some(stats)
    }
}
