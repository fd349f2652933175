//! Full power user report formatter

use super::distributions::{format_activity_patterns, format_distribution, format_elbows};
use super::segmentation::{format_recommendations, format_tier_breakdown};
use super::utils::{export_json, format_number, section_header, ValueUnit};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::types::analysis_results::PowerUserReport;
use crate::utils::currency::format_usd_whole;

/// Format the complete segmentation report
pub fn format_report(report: &PowerUserReport, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(report),
        OutputFormat::Console => {
            let mut output = String::new();

            output.push_str(&section_header("DISTRIBUTION ANALYSIS"));
            output.push_str(&format!(
                "Snapshot users: {}\n",
                format_number(report.total_users)
            ));
            let distributions = [
                (&report.volume_distribution, ValueUnit::Usd),
                (&report.swap_distribution, ValueUnit::Count),
                (&report.avg_size_distribution, ValueUnit::Usd),
            ];
            for (stats, unit) in distributions {
                if let Some(stats) = stats {
                    output.push_str(&format_distribution(stats, unit, format)?);
                }
            }

            output.push_str(&section_header("ELBOW POINT ANALYSIS (Natural Breakpoints)"));
            output.push_str(&format_elbows(
                "Volume Elbow Points",
                &report.volume_elbows,
                ValueUnit::Usd,
                format,
            )?);
            output.push_str(&format_elbows(
                "Swap Count Elbow Points",
                &report.swap_elbows,
                ValueUnit::Count,
                format,
            )?);

            output.push_str(&section_header("ACTIVITY PATTERN ANALYSIS"));
            match &report.activity_patterns {
                Some(activity) => output.push_str(&format_activity_patterns(activity, format)?),
                None => output.push_str("\nNo daily activity data available.\n"),
            }

            output.push_str(&section_header("POWER USER THRESHOLD RECOMMENDATIONS"));
            output.push_str(&format_recommendations(&report.recommendations, format)?);

            output.push_str(&section_header("USER TIER BREAKDOWN"));
            output.push_str(&format_tier_breakdown(&report.tier_breakdown, format)?);

            output.push_str(&section_header("SUGGESTED SEGMENT THRESHOLDS"));
            let t = &report.suggested_thresholds;
            let rule = &report.power_user_rule;
            output.push_str("\nVOLUME-BASED TIERS (30-day):\n");
            output.push_str(&format!(
                "  • Casual:      ≤ {}\n",
                format_usd_whole(t.casual_max_volume)
            ));
            output.push_str(&format!(
                "  • Regular:     {} - {}\n",
                format_usd_whole(t.casual_max_volume),
                format_usd_whole(t.regular_max_volume)
            ));
            output.push_str(&format!(
                "  • Power User:  {} - {}\n",
                format_usd_whole(t.power_min_volume),
                format_usd_whole(t.whale_min_volume)
            ));
            output.push_str(&format!(
                "  • Whale:       > {}\n",
                format_usd_whole(t.whale_min_volume)
            ));

            let days_p90 = report
                .activity_patterns
                .as_ref()
                .and_then(|a| a.active_days_distribution.as_ref())
                .map(|d| format!("{:.0}", d.percentiles.p90))
                .unwrap_or_else(|| "N/A".to_string());
            output.push_str("\nACTIVITY-BASED:\n");
            output.push_str(&format!(
                "  • Power users typically have {} or more active days per month\n",
                days_p90
            ));

            output.push_str("\nCOMBINED DEFINITION for \"Power User\":\n");
            output.push_str("  A power user should meet EITHER:\n");
            output.push_str(&format!(
                "  1. Volume > {} (top 10% by volume), OR\n",
                format_usd_whole(rule.volume_min)
            ));
            output.push_str(&format!(
                "  2. Active {}+ days AND avg daily volume > {}\n",
                rule.min_active_days,
                format_usd_whole(rule.min_avg_daily_volume)
            ));
            output.push_str(&format!(
                "\nUsers matching the combined definition: {}\n",
                format_number(report.power_user_count)
            ));

            Ok(output)
        }
    }
}
