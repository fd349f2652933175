//! Trading User-Activity Segmentation
//!
//! Distribution statistics, elbow detection, engagement tiers and power-user
//! threshold recommendations over per-user trading volume and activity.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod errors;
pub mod source;
pub mod types;
pub mod utils;
