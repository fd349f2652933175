//! Utility functions for report formatting
//!
//! Provides shared formatting helpers used across all report formatters.

use crate::errors::AppResult;
use crate::utils::currency::{format_grouped, format_usd};
use serde::Serialize;

/// Section separator used between console report blocks
pub const SEPARATOR: &str = "============================================================";

/// How a metric's values should be rendered on the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueUnit {
    /// USD amounts, two decimals
    Usd,
    /// Whole counts (swaps)
    Count,
    /// Whole days
    Days,
}

impl ValueUnit {
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueUnit::Usd => format_usd(value),
            ValueUnit::Count => format_grouped(value, 0),
            ValueUnit::Days => format!("{} days", format_grouped(value, 0)),
        }
    }
}

/// Format number with thousand separators for console output
///
/// # Examples
///
/// ```
/// # use activity_segmentation::analysis::reports::utils::format_number;
/// assert_eq!(format_number(1234), "1,234");
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(904233), "904,233");
/// ```
pub fn format_number(n: usize) -> String {
    format_grouped(n as f64, 0)
}

/// Section header block
pub fn section_header(title: &str) -> String {
    format!("\n{}\n{}\n{}\n", SEPARATOR, title, SEPARATOR)
}

/// Export data as JSON for programmatic use
pub fn export_json<T: Serialize>(data: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}
