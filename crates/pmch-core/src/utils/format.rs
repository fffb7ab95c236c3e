use crate::i18n::Language;

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Human-readable "last updated" text for a cache timestamp.
/// Timestamps in the future (clock skew) read as "just now".
pub fn format_last_updated(timestamp: i64, now: i64, lang: Language) -> String {
    let diff = (now - timestamp).max(0);
    let minutes = diff / MINUTE_MS;
    let hours = diff / HOUR_MS;
    let days = diff / DAY_MS;

    match lang {
        Language::Hindi => {
            if minutes < 1 {
                "अभी अपडेट हुआ".to_string()
            } else if minutes < 60 {
                format!("{} मिनट पहले अपडेट हुआ", minutes)
            } else if hours < 24 {
                format!("{} घंटे पहले अपडेट हुआ", hours)
            } else {
                format!("{} दिन पहले अपडेट हुआ", days)
            }
        }
        Language::English => {
            if minutes < 1 {
                "Updated just now".to_string()
            } else if minutes < 60 {
                format!("Updated {} min ago", minutes)
            } else if hours < 24 {
                format!("Updated {} hr ago", hours)
            } else {
                format!("Updated {} day(s) ago", days)
            }
        }
    }
}

/// Truncate a string to a maximum number of characters, adding ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_format_last_updated_english() {
        let en = Language::English;
        assert_eq!(format_last_updated(NOW - 30_000, NOW, en), "Updated just now");
        assert_eq!(format_last_updated(NOW - 5 * MINUTE_MS, NOW, en), "Updated 5 min ago");
        assert_eq!(format_last_updated(NOW - 2 * HOUR_MS - 1, NOW, en), "Updated 2 hr ago");
        assert_eq!(format_last_updated(NOW - 3 * DAY_MS, NOW, en), "Updated 3 day(s) ago");
    }

    #[test]
    fn test_format_last_updated_hindi() {
        let hi = Language::Hindi;
        assert_eq!(format_last_updated(NOW, NOW, hi), "अभी अपडेट हुआ");
        assert_eq!(format_last_updated(NOW - 59 * MINUTE_MS, NOW, hi), "59 मिनट पहले अपडेट हुआ");
        assert_eq!(format_last_updated(NOW - HOUR_MS, NOW, hi), "1 घंटे पहले अपडेट हुआ");
        assert_eq!(format_last_updated(NOW - DAY_MS, NOW, hi), "1 दिन पहले अपडेट हुआ");
    }

    #[test]
    fn test_format_last_updated_clock_skew() {
        assert_eq!(
            format_last_updated(NOW + HOUR_MS, NOW, Language::English),
            "Updated just now"
        );
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello World", 8), "Hello...");
        assert_eq!(truncate_string("Hi", 2), "Hi");
        // Counts characters, not bytes
        assert_eq!(truncate_string("हड्डी रोग", 9), "हड्डी रोग");
    }
}
