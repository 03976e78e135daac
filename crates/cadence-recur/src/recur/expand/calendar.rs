//! Calendar arithmetic on `NaiveDate`. Every helper returns a new value and
//! yields `None` when the result falls outside chrono's representable range.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Weekday index with Sunday as 0.
#[must_use]
pub fn weekday_index(date: NaiveDate) -> u8 {
    match date.weekday() {
        Weekday::Sun => 0,
        Weekday::Mon => 1,
        Weekday::Tue => 2,
        Weekday::Wed => 3,
        Weekday::Thu => 4,
        Weekday::Fri => 5,
        Weekday::Sat => 6,
    }
}

/// Number of days in `month` of `year`, leap years included.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|day| NaiveDate::from_ymd_opt(year, month, *day).is_some())
        .unwrap_or(28)
}

#[must_use]
pub fn add_days(date: NaiveDate, days: u64) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(days))
}

/// Adds calendar months, clamping the day to the end of the target month.
#[must_use]
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// ## Summary
/// Moves `date` to `day` within its month, clamped into `1..=days_in_month`.
///
/// Never rolls over into the following month.
#[must_use]
pub fn with_clamped_day(date: NaiveDate, day: u32) -> Option<NaiveDate> {
    let last = days_in_month(date.year(), date.month());
    date.with_day(day.clamp(1, last))
}

/// ## Summary
/// Moves `date` to `month` (clamped into `1..=12`) of the same year.
///
/// The day is clamped to the target month's length, so January 31 moved to
/// February lands on the 28th or 29th.
#[must_use]
pub fn with_clamped_month(date: NaiveDate, month: u32) -> Option<NaiveDate> {
    let month = month.clamp(1, 12);
    let day = date.day().min(days_in_month(date.year(), month));
    NaiveDate::from_ymd_opt(date.year(), month, day)
}
