//! Activity Segmentation - Type System
//!
//! - `sample`: Filtered positive-valued metric samples
//! - `activity`: Raw per-user and per-day input records, per-user activity aggregates
//! - `analysis_results`: Distribution statistics, elbows, tiers, recommendations and the full report

pub mod activity;
pub mod analysis_results;
pub mod sample;

pub use activity::{DailyActivityRecord, UserActivityRecord, UserVolumeRecord};
pub use sample::Sample;
