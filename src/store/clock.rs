use chrono::{Local, NaiveDate};

/// Source of "today" and of record timestamps.
pub trait Clock {
    fn today(&self) -> NaiveDate;
    fn timestamp(&self) -> String;
}

/// Local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn timestamp(&self) -> String {
        Local::now().to_rfc3339()
    }
}

/// Frozen clock, noon UTC on a given day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub date: NaiveDate,
}

impl FixedClock {
    pub fn on(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }

    fn timestamp(&self) -> String {
        format!("{}T12:00:00+00:00", self.date.format("%Y-%m-%d"))
    }
}
