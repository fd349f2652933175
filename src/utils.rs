//! Shared numeric and formatting helpers

pub mod currency;
pub mod math;
