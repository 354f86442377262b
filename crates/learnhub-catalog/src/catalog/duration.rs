//! Human duration strings ("1h 30m") to minutes and back.

use once_cell::sync::Lazy;
use regex::Regex;

static HOURS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([0-9]+)h").expect("valid hours pattern"));
static MINUTES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([0-9]+)m").expect("valid minutes pattern"));

/// Parse a human duration into total minutes.
///
/// Takes the first `<digits>h` and the first `<digits>m` found anywhere in
/// the text and sums them. Anything else is ignored, so `"garbage"` is 0.
/// Oversized numbers saturate instead of wrapping.
///
/// Units match case-insensitively: `"1H 30M"` is 90, where a lowercase-only
/// match would give 0.
pub fn parse_duration(text: &str) -> u32 {
    let hours = first_number(&HOURS, text);
    let minutes = first_number(&MINUTES, text);
    hours.saturating_mul(60).saturating_add(minutes)
}

fn first_number(pattern: &Regex, text: &str) -> u32 {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX))
        .unwrap_or(0)
}

/// Format minutes for display: `45m`, `2h`, `1h 30m`.
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{}m", minutes);
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}h", hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_forms() {
        assert_eq!(parse_duration("1h 30m"), 90);
        assert_eq!(parse_duration("45m"), 45);
        assert_eq!(parse_duration("2h"), 120);
        assert_eq!(parse_duration("garbage"), 0);
        assert_eq!(parse_duration(""), 0);
    }

    #[test]
    fn test_parse_formatting_variance() {
        assert_eq!(parse_duration("1h30m"), 90);
        assert_eq!(parse_duration("1h, 30m"), 90);
        assert_eq!(parse_duration("30m 1h"), 90);
        assert_eq!(parse_duration("  1H 30M  "), 90);
        assert_eq!(parse_duration("about 3h of video, 15min of quizzes"), 195);
    }

    #[test]
    fn test_parse_saturates() {
        assert_eq!(parse_duration("99999999999h"), u32::MAX);
        assert_eq!(parse_duration("4294967295m 1h"), u32::MAX);
    }

    #[test]
    fn test_format() {
        assert_eq!(format_duration(0), "0m");
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(60), "1h");
        assert_eq!(format_duration(90), "1h 30m");
        assert_eq!(format_duration(125), "2h 5m");
    }

    #[test]
    fn test_format_then_parse() {
        for minutes in [5, 59, 60, 61, 185, 600] {
            assert_eq!(parse_duration(&format_duration(minutes)), minutes);
        }
    }
}
