//! Engagement tier types
//!
//! Four ordered tiers cut at p75/p90/p95 of a metric. Intervals are closed on
//! the upper end: a value exactly equal to a cut point belongs to the lower tier.
//!
//! | Tier    | Range          |
//! |---------|----------------|
//! | casual  | `(0, p75]`     |
//! | regular | `(p75, p90]`   |
//! | power   | `(p90, p95]`   |
//! | whale   | `(p95, ∞)`     |

use super::{DistributionStats, Percentiles};
use crate::utils::math::{safe_percentage, safe_percentage_f64};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Casual,
    Regular,
    Power,
    Whale,
}

impl Tier {
    /// All tiers, lowest first
    pub const ALL: [Tier; 4] = [Tier::Casual, Tier::Regular, Tier::Power, Tier::Whale];

    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::Casual => "Casual",
            Tier::Regular => "Regular",
            Tier::Power => "Power User",
            Tier::Whale => "Whale",
        }
    }

    /// Range label used in console reports
    pub fn range_label(&self) -> &'static str {
        match self {
            Tier::Casual => "≤p75",
            Tier::Regular => "p75-p90",
            Tier::Power => "p90-p95",
            Tier::Whale => ">p95",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Cut points {p75, p90, p95}; monotonically non-decreasing
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TierThresholds {
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
}

impl TierThresholds {
    pub fn new(p75: f64, p90: f64, p95: f64) -> Self {
        Self { p75, p90, p95 }
    }

    pub fn from_percentiles(percentiles: &Percentiles) -> Self {
        Self::new(percentiles.p75, percentiles.p90, percentiles.p95)
    }

    /// Thresholds of a distribution; all zero when there is no distribution
    ///
    /// Zero thresholds mean "no data", not a genuine boundary.
    pub fn from_stats(stats: Option<&DistributionStats>) -> Self {
        stats
            .map(|s| Self::from_percentiles(&s.percentiles))
            .unwrap_or_default()
    }

    /// Tier of a single value, `None` for non-positive or non-finite values (no activity)
    pub fn tier_for(&self, value: f64) -> Option<Tier> {
        if !value.is_finite() || value <= 0.0 {
            return None;
        }
        let tier = if value <= self.p75 {
            Tier::Casual
        } else if value <= self.p90 {
            Tier::Regular
        } else if value <= self.p95 {
            Tier::Power
        } else {
            Tier::Whale
        };
        Some(tier)
    }
}

/// Users and summed metric value inside one tier
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TierSummary {
    pub count: usize,
    pub total_value: f64,
}

/// One row of the tier breakdown table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierBreakdownEntry {
    pub tier: Tier,
    pub count: usize,
    pub total_value: f64,
    /// Percentage of all snapshot rows (zero rows included)
    pub pct_users: f64,
    /// Percentage of the total metric value
    pub pct_volume: f64,
}

impl TierBreakdownEntry {
    pub fn new(tier: Tier, summary: TierSummary, total_users: usize, total_value: f64) -> Self {
        Self {
            tier,
            count: summary.count,
            total_value: summary.total_value,
            pct_users: safe_percentage(summary.count, total_users),
            pct_volume: safe_percentage_f64(summary.total_value, total_value),
        }
    }
}

/// Volume tier breakdown of a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierBreakdown {
    pub thresholds: TierThresholds,
    pub total_users: usize,
    pub total_value: f64,
    /// Rows in tier order, lowest first
    pub entries: Vec<TierBreakdownEntry>,
}

/// Log-scale histogram segmentation of a sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensitySegmentation {
    /// Values (`10^edge`) at histogram valleys, ascending
    pub natural_boundaries: Vec<f64>,
    pub percentile_thresholds: Percentiles,
}
