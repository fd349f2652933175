//! Analysis module unit tests

pub mod activity_patterns;
pub mod elbow_detector;
pub mod properties;
pub mod tier_classifier;
