use chrono::{NaiveDate, Utc};

/// Source of "today" for result dates. Injected so calculations are
/// deterministic under test and the date cannot vary mid-calculation.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Production clock backed by the system time in UTC.
#[derive(Debug, Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}
