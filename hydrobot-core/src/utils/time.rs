use chrono::{Local, NaiveDate};

/// Today's date in the server's local timezone. History buckets are keyed
/// by this value.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole days from `start` to `day` (negative if `day` is earlier).
pub fn days_between(start: NaiveDate, day: NaiveDate) -> i64 {
    day.signed_duration_since(start).num_days()
}
