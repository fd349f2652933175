//! Distribution report formatters
//!
//! Summary statistics, elbow points and activity pattern distributions.

use super::utils::{export_json, format_number, ValueUnit};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::types::analysis_results::{ActivityPatternReport, DistributionStats, ElbowPoint};

/// Format one metric distribution
pub fn format_distribution(
    stats: &DistributionStats,
    unit: ValueUnit,
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(stats),
        OutputFormat::Console => {
            let mut output = String::new();
            output.push_str(&format!("\n{}:\n", stats.name));
            output.push_str(&format!("  Users: {}\n", format_number(stats.count)));
            output.push_str(&format!(
                "  Range: {} - {}\n",
                unit.format(stats.min),
                unit.format(stats.max)
            ));
            output.push_str(&format!("  Mean: {}\n", unit.format(stats.mean)));
            output.push_str(&format!("  Median: {}\n", unit.format(stats.median)));
            output.push_str(&format!("  Std Dev: {}\n", unit.format(stats.std)));
            output.push_str("  Percentiles:\n");
            for (label, value) in stats.percentiles.entries() {
                output.push_str(&format!("    {}: {}\n", label, unit.format(value)));
            }
            Ok(output)
        }
    }
}

/// Format detected elbow points of one metric
pub fn format_elbows(
    title: &str,
    elbows: &[ElbowPoint],
    unit: ValueUnit,
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(&elbows),
        OutputFormat::Console => {
            let mut output = format!("\n{}:\n", title);
            if elbows.is_empty() {
                output.push_str("  (none detected)\n");
            }
            for elbow in elbows {
                output.push_str(&format!(
                    "  Rank #{} ({:.1}%ile): {}\n",
                    format_number(elbow.rank),
                    elbow.percentile,
                    unit.format(elbow.value)
                ));
            }
            Ok(output)
        }
    }
}

/// Format activity pattern distributions and density boundaries
pub fn format_activity_patterns(
    report: &ActivityPatternReport,
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(report),
        OutputFormat::Console => {
            let mut output = String::new();
            output.push_str(&format!(
                "\nActive users: {}\n",
                format_number(report.active_users)
            ));

            if let Some(days) = &report.active_days_distribution {
                output.push_str(&format_distribution(days, ValueUnit::Days, format)?);
            }
            if let Some(daily) = &report.avg_daily_volume_distribution {
                output.push_str(&format_distribution(daily, ValueUnit::Usd, format)?);
            }

            if let Some(seg) = &report.daily_volume_thresholds {
                output.push_str("\nNatural daily-volume boundaries (log-scale valleys):\n");
                if seg.natural_boundaries.is_empty() {
                    output.push_str("  (none detected)\n");
                }
                for boundary in &seg.natural_boundaries {
                    output.push_str(&format!("  {}\n", ValueUnit::Usd.format(*boundary)));
                }
            }
            Ok(output)
        }
    }
}
