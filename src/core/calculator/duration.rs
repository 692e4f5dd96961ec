//! Worked-hours duration between two times of day.

use crate::models::TimeOfDay;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Round to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Hours between `start` and `end`, rounded to 2 decimals.
///
/// An `end` that is clock-earlier than `start` falls on the next day
/// (overnight shift). Equal times give 0, never 24. Only one day is ever
/// added, so an out-of-range start such as `"30:00"` can yield a negative
/// duration.
pub fn duration_hours(start: TimeOfDay, end: TimeOfDay) -> f64 {
    let start_minutes = start.minutes_since_midnight();
    let mut end_minutes = end.minutes_since_midnight();

    if end_minutes < start_minutes {
        end_minutes += MINUTES_PER_DAY;
    }

    let total_minutes = end_minutes - start_minutes;
    round2(total_minutes as f64 / 60.0)
}

/// Same as [`duration_hours`] on raw `HH:MM` strings, parsed leniently.
pub fn duration_hours_str(start: &str, end: &str) -> f64 {
    duration_hours(TimeOfDay::parse_lenient(start), TimeOfDay::parse_lenient(end))
}
