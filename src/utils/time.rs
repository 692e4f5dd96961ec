//! Time input utilities: 12-hour to 24-hour conversion for user input.

use crate::models::TimeFormat;
use regex::Regex;
use std::sync::LazyLock;

static TWELVE_HOUR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d{1,2}):(\d{2})\s?(AM|PM)$").expect("valid 12h time regex")
});

/// Convert user input to the stored `HH:MM` form.
///
/// With `24h` the input is returned as-is. With `12h`, `h:MM AM|PM`
/// (case-insensitive, optional space) is converted; anything that does not
/// match is returned unchanged.
pub fn parse_time_input(input: &str, fmt: TimeFormat) -> String {
    if fmt == TimeFormat::H24 {
        return input.to_string();
    }

    let Some(caps) = TWELVE_HOUR.captures(input.trim()) else {
        return input.to_string();
    };

    let mut hours: u32 = caps[1].parse().unwrap_or(0);
    let minutes: u32 = caps[2].parse().unwrap_or(0);
    let period = caps[3].to_ascii_uppercase();

    if period == "PM" && hours != 12 {
        hours += 12;
    } else if period == "AM" && hours == 12 {
        hours = 0;
    }

    format!("{hours:02}:{minutes:02}")
}

/// CLI input accepts both notations regardless of the display preference.
pub fn normalize_cli_time(input: &str) -> String {
    parse_time_input(input, TimeFormat::H12)
}
