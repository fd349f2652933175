//! Report formatting and output generation
//!
//! Provides formatting for segmentation results via the [`ReportFormatter`] facade.
//! Supports Console and JSON output formats.

pub mod distributions;
pub mod full_report;
pub mod segmentation;
pub mod utils;

use crate::errors::AppResult;
use crate::types::analysis_results::{
    ActivityPatternReport, DistributionStats, ElbowPoint, PowerUserReport, Recommendation,
    TierBreakdown,
};

/// Output format options for analysis reports
#[derive(Debug, Clone, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}

impl OutputFormat {
    /// Parse a CLI format string, falling back to console output
    pub fn parse(format_str: &str) -> Self {
        match format_str.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Console,
        }
    }
}

/// Facade for all report formatting operations
pub struct ReportFormatter;

impl ReportFormatter {
    // Utilities
    pub fn format_number(n: usize) -> String {
        utils::format_number(n)
    }

    // Distributions
    pub fn format_distribution(
        stats: &DistributionStats,
        unit: utils::ValueUnit,
        f: &OutputFormat,
    ) -> AppResult<String> {
        distributions::format_distribution(stats, unit, f)
    }
    pub fn format_elbows(
        title: &str,
        elbows: &[ElbowPoint],
        unit: utils::ValueUnit,
        f: &OutputFormat,
    ) -> AppResult<String> {
        distributions::format_elbows(title, elbows, unit, f)
    }
    pub fn format_activity_patterns(
        r: &ActivityPatternReport,
        f: &OutputFormat,
    ) -> AppResult<String> {
        distributions::format_activity_patterns(r, f)
    }

    // Segmentation
    pub fn format_recommendations(r: &[Recommendation], f: &OutputFormat) -> AppResult<String> {
        segmentation::format_recommendations(r, f)
    }
    pub fn format_tier_breakdown(r: &TierBreakdown, f: &OutputFormat) -> AppResult<String> {
        segmentation::format_tier_breakdown(r, f)
    }

    // Full Report
    pub fn format_report(r: &PowerUserReport, f: &OutputFormat) -> AppResult<String> {
        full_report::format_report(r, f)
    }
}
