//! Time-of-day value with minute resolution, as stored in entries (`HH:MM`).

use super::settings::TimeFormat;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Permissive `HH:MM` parser.
    ///
    /// Splits on `:` and reads the first two components; a component that is
    /// missing or not a non-negative integer is taken as 0. No range check is
    /// applied, so `"25:00"` is kept as 25 hours. This never fails: a garbage
    /// string simply becomes midnight.
    pub fn parse_lenient(s: &str) -> Self {
        let mut parts = s.split(':');
        let hour = lenient_component(parts.next());
        let minute = lenient_component(parts.next());
        Self { hour, minute }
    }

    pub fn minutes_since_midnight(&self) -> i64 {
        i64::from(self.hour) * 60 + i64::from(self.minute)
    }

    /// Render for display according to the user's time format preference.
    pub fn format(&self, fmt: TimeFormat) -> String {
        match fmt {
            TimeFormat::H24 => self.to_string(),
            TimeFormat::H12 => {
                let period = if self.hour >= 12 { "PM" } else { "AM" };
                let display_hour = match self.hour {
                    0 => 12,
                    h if h > 12 => h - 12,
                    h => h,
                };
                format!("{:02}:{:02} {}", display_hour, self.minute, period)
            }
        }
    }
}

fn lenient_component(part: Option<&str>) -> u32 {
    part.and_then(|p| p.trim().parse::<u32>().ok()).unwrap_or(0)
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
