//! Analysis result types and data structures
//!
//! Immutable value objects produced by the segmentation pipeline. All of them
//! serialise with serde so a run can be persisted or rendered as JSON.

mod activity;
mod distribution;
mod elbow;
mod full_report;
mod recommendation;
mod tiers;

pub use activity::ActivityPatternReport;
pub use distribution::{DistributionStats, Percentiles};
pub use elbow::ElbowPoint;
pub use full_report::{PowerUserReport, SuggestedThresholds};
pub use recommendation::{PowerUserRule, Recommendation};
pub use tiers::{DensitySegmentation, Tier, TierBreakdown, TierBreakdownEntry, TierSummary, TierThresholds};
