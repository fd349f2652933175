//! Tier and recommendation formatters

use super::utils::{export_json, format_number};
use super::OutputFormat;
use crate::analysis::threshold_recommender::VOLUME_METRIC;
use crate::errors::AppResult;
use crate::types::analysis_results::{Recommendation, TierBreakdown};
use crate::utils::currency::{format_grouped, format_usd, format_usd_whole};

/// Format the per-metric threshold recommendations
pub fn format_recommendations(
    recommendations: &[Recommendation],
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(&recommendations),
        OutputFormat::Console => {
            let mut output = String::new();
            for rec in recommendations {
                let render = |v: f64| {
                    if rec.metric == VOLUME_METRIC {
                        format_usd(v)
                    } else {
                        format_grouped(v, 0)
                    }
                };
                output.push_str(&format!("\n{}:\n", rec.metric));
                output.push_str(&format!("  Casual User Max: {}\n", render(rec.casual_max)));
                output.push_str(&format!("  Power User Min: {}\n", render(rec.power_user_min)));
                if let Some(whale) = rec.whale_min {
                    output.push_str(&format!("  Whale Min: {}\n", render(whale)));
                }
            }
            Ok(output)
        }
    }
}

/// Format the volume tier table
pub fn format_tier_breakdown(breakdown: &TierBreakdown, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(breakdown),
        OutputFormat::Console => {
            let mut output = String::from("\nBy Volume Tier:\n");
            output.push_str(&format!(
                "  {:<22} │ {:>8} │ {:>6} │ {:>18} │ {:>6} │\n",
                "Tier", "Users", "%", "Volume", "%"
            ));
            output.push_str(
                "  ───────────────────────┼──────────┼────────┼────────────────────┼────────┤\n",
            );
            for entry in &breakdown.entries {
                let label = format!(
                    "{} ({})",
                    entry.tier.display_name(),
                    entry.tier.range_label()
                );
                output.push_str(&format!(
                    "  {:<22} │ {:>8} │ {:>5.1}% │ {:>18} │ {:>5.1}% │\n",
                    label,
                    format_number(entry.count),
                    entry.pct_users,
                    format_usd_whole(entry.total_value),
                    entry.pct_volume
                ));
            }
            Ok(output)
        }
    }
}
