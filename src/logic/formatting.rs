//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::{DateTime, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a counter compactly ("950", "1.2k", "3.4M")
///
/// # Examples
/// ```
/// use ceka::logic::formatting::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(999), "999");
/// assert_eq!(format_count(1_250), "1.2k");
/// assert_eq!(format_count(3_400_000), "3.4M");
/// ```
pub fn format_count(n: u64) -> String {
    const K: u64 = 1_000;
    const M: u64 = K * 1_000;

    if n >= M {
        format!("{:.1}M", (n / (M / 10)) as f64 / 10.0)
    } else if n >= K {
        format!("{:.1}k", (n / (K / 10)) as f64 / 10.0)
    } else {
        n.to_string()
    }
}

/// Format how long ago a timestamp was, relative to `now`
///
/// Shows the single most significant unit. Future timestamps read "just now".
///
/// # Examples
/// ```
/// use chrono::{Duration, Utc};
/// use ceka::logic::formatting::format_relative;
///
/// let now = Utc::now();
/// assert_eq!(format_relative(now - Duration::seconds(30), now), "just now");
/// assert_eq!(format_relative(now - Duration::minutes(5), now), "5m ago");
/// assert_eq!(format_relative(now - Duration::hours(3), now), "3h ago");
/// assert_eq!(format_relative(now - Duration::days(12), now), "12d ago");
/// ```
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days >= 365 {
        format!("{}y ago", days / 365)
    } else if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else {
        format!("{}m ago", minutes)
    }
}

/// Truncate text to a display width, appending "…" when cut
///
/// Width is measured in terminal columns, so wide characters count double.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_count_boundaries() {
        assert_eq!(format_count(1_000), "1.0k");
        assert_eq!(format_count(1_999), "1.9k");
        assert_eq!(format_count(1_000_000), "1.0M");
    }

    #[test]
    fn test_format_relative_future_is_just_now() {
        let now = Utc::now();
        assert_eq!(format_relative(now + Duration::hours(2), now), "just now");
    }

    #[test]
    fn test_format_relative_years() {
        let now = Utc::now();
        assert_eq!(format_relative(now - Duration::days(800), now), "2y ago");
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("Bills", 10), "Bills");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Finance Bill 2024", 8), "Finance…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
