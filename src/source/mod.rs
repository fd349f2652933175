//! Cube analytics API integration and offline inputs
//!
//! This module supplies the raw samples the segmentation engine consumes:
//! - **Query** - Cube query definitions for the volume snapshot and daily feed
//! - **Client** - Async HTTP client with timeout and exponential-backoff retries
//! - **Retry** - Backoff helpers
//! - **Rows** - Cube response rows to typed records
//! - **Files** - Saved Cube responses and CSV inputs for offline runs
//!
//! Configuration is always passed in explicitly via [`crate::config::ApiConfig`].

pub mod client;
pub mod files;
pub mod query;
pub mod retry;
pub mod rows;

// Re-export main types
pub use client::CubeClient;
pub use query::{daily_activity_query, volume_snapshot_query, CubeQuery, TimeDimension};
pub use retry::calculate_next_backoff;
pub use rows::{parse_daily_rows, parse_volume_rows, CubeResponse};
