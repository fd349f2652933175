//! Distribution statistics types

use serde::{Deserialize, Serialize};

/// Percentile cut points of a sample
///
/// Linear interpolation between order statistics: `rank = p/100 * (n - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Percentiles {
    /// 50th percentile IS the median
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

impl Percentiles {
    /// `(label, value)` pairs in ascending rank order
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("p50", self.p50),
            ("p75", self.p75),
            ("p90", self.p90),
            ("p95", self.p95),
            ("p99", self.p99),
        ]
    }
}

/// Summary snapshot of one metric sample
///
/// Only ever built from a non-empty sample; an empty sample has no stats at
/// all (`Option::None` at the call site).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionStats {
    pub name: String,
    /// Number of positive values analysed
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation
    pub std: f64,
    pub percentiles: Percentiles,
}
