//! Currency and count formatting for console reports

/// Format a number with thousand separators and a fixed number of decimals
///
/// # Examples
/// ```
/// use activity_segmentation::utils::currency::format_grouped;
///
/// assert_eq!(format_grouped(1234567.891, 2), "1,234,567.89");
/// assert_eq!(format_grouped(999.0, 0), "999");
/// assert_eq!(format_grouped(-1500.5, 1), "-1,500.5");
/// ```
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format a USD amount as `$1,234.56`
///
/// # Examples
/// ```
/// use activity_segmentation::utils::currency::format_usd;
///
/// assert_eq!(format_usd(1234.5), "$1,234.50");
/// assert_eq!(format_usd(0.0), "$0.00");
/// ```
pub fn format_usd(value: f64) -> String {
    format!("${}", format_grouped(value, 2))
}

/// Format a USD amount rounded to whole dollars, as `$1,235`
pub fn format_usd_whole(value: f64) -> String {
    format!("${}", format_grouped(value, 0))
}
