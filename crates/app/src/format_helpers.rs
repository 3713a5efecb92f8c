//! Display formatting for dates and counts.

use chrono::{DateTime, Local, TimeZone, Utc};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an ISO date string as "Jan 20, 2026".
///
/// Anything that does not start with `YYYY-MM-DD` is returned unchanged, so
/// free-form order dates from the backend still show up.
pub fn format_date_human(date_str: &str) -> String {
    match split_date(date_str) {
        Some((year, month, day)) => format!("{} {}, {}", MONTH_NAMES[month - 1], day, year),
        None => date_str.to_string(),
    }
}

/// Short axis label for a trend date: "Mar 14".
pub fn format_day_short(date_str: &str) -> String {
    match split_date(date_str) {
        Some((_, month, day)) => format!("{} {}", MONTH_NAMES[month - 1], day),
        None => date_str.to_string(),
    }
}

fn split_date(date_str: &str) -> Option<(&str, usize, u32)> {
    let year = date_str.get(..4)?;
    let month = parse_month(date_str.get(5..7)?)?;
    let day: u32 = date_str.get(8..10)?.parse().ok()?;
    if date_str.get(4..5) != Some("-") || !year.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some((year, month, day))
}

/// "Mar 14, 2025 9:30 AM" in the viewer's local time zone.
pub fn format_refresh_time(at: DateTime<Utc>) -> String {
    format_timestamp(&at.with_timezone(&Local))
}

fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Thousands separators: 12345 -> "12,345".
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
