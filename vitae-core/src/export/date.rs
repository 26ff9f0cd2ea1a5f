//! Date range formatting for entry headers.

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Renders a stored `"YYYY-MM"` date as `"Mon YYYY"`.
///
/// An empty string stays empty; anything else unparsable is passed through
/// unchanged rather than dropped.
pub fn format_year_month(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    let Some((year, month)) = date.split_once('-') else {
        return date.to_string();
    };
    match month.parse::<usize>() {
        Ok(m @ 1..=12) => format!("{} {}", MONTHS[m - 1], year),
        _ => date.to_string(),
    }
}

/// Renders `"<start> - <end>"`, substituting `"Present"` for the end date
/// while the position is current.
pub fn date_range(start: &str, end: &str, current: bool) -> String {
    let end = if current {
        "Present".to_string()
    } else {
        format_year_month(end)
    };
    format!("{} - {}", format_year_month(start), end)
}
