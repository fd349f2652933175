//! Mathematical utility functions for statistical analysis
//!
//! Percentage helpers with proper zero-division handling plus the basic
//! moments used by the distribution analyser.

/// Calculate percentage safely for usize values, returning 0.0 if total is zero.
///
/// # Examples
/// ```
/// use activity_segmentation::utils::math::safe_percentage;
///
/// assert_eq!(safe_percentage(50, 100), 50.0);
/// assert_eq!(safe_percentage(1, 4), 25.0);
/// assert_eq!(safe_percentage(0, 100), 0.0);
/// assert_eq!(safe_percentage(50, 0), 0.0);  // Zero-division guard
/// ```
#[inline]
pub fn safe_percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

/// Calculate percentage safely for f64 amounts, returning 0.0 if total is not positive.
///
/// # Examples
/// ```
/// use activity_segmentation::utils::math::safe_percentage_f64;
///
/// assert_eq!(safe_percentage_f64(250.0, 1000.0), 25.0);
/// assert_eq!(safe_percentage_f64(5.0, 0.0), 0.0);
/// ```
#[inline]
pub fn safe_percentage_f64(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        (part / total) * 100.0
    } else {
        0.0
    }
}

/// Arithmetic mean, 0.0 for an empty slice
///
/// Sums offsets from the first value, so a constant slice yields that value
/// exactly.
pub fn mean(values: &[f64]) -> f64 {
    let Some(&base) = values.first() else {
        return 0.0;
    };
    let offset = values.iter().map(|v| v - base).sum::<f64>() / values.len() as f64;
    base + offset
}

/// Mean of an ascending-sorted slice, never outside `[min, max]`
pub fn sorted_mean(sorted: &[f64]) -> f64 {
    match (sorted.first(), sorted.last()) {
        (Some(&min), Some(&max)) => mean(sorted).clamp(min, max),
        _ => 0.0,
    }
}

/// Population standard deviation (divisor `n`), 0.0 for an empty slice
pub fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
