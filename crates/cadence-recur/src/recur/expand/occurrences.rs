use std::iter::FusedIterator;

use chrono::{Days, NaiveDate};

use super::calendar::{add_days, add_months, weekday_index, with_clamped_day, with_clamped_month};
use crate::error::RecurResult;
use crate::recur::model::{RecurrenceEnd, RecurrencePattern, RecurrenceType};

/// Candidate dates of a recurrence pattern, in ascending order.
///
/// The first candidate is always the start date, even when it does not match
/// the pattern's weekday or day-of-month selectors. Every yielded date counts
/// towards an `after` end condition. Iteration stops once the end condition
/// is met or date arithmetic leaves chrono's range; a `never` pattern is
/// otherwise unbounded.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    pattern: &'a RecurrencePattern,
    weekdays: Vec<u8>,
    next: Option<NaiveDate>,
    yielded: u32,
}

impl<'a> Occurrences<'a> {
    /// ## Summary
    /// Starts iterating `pattern` from `start`.
    ///
    /// ## Errors
    /// Returns an error if the pattern fails [`RecurrencePattern::validate`].
    pub fn new(pattern: &'a RecurrencePattern, start: NaiveDate) -> RecurResult<Self> {
        pattern.validate()?;

        Ok(Self {
            pattern,
            weekdays: pattern.selected_weekdays(),
            next: Some(start),
            yielded: 0,
        })
    }

    fn has_reached_end(&self, current: NaiveDate) -> bool {
        match self.pattern.end {
            RecurrenceEnd::Never => false,
            RecurrenceEnd::After { occurrences } => self.yielded >= occurrences,
            RecurrenceEnd::On { date } => current > date,
        }
    }

    fn advance(&self, current: NaiveDate) -> Option<NaiveDate> {
        let interval = self.pattern.interval;

        match self.pattern.kind {
            RecurrenceType::Daily => add_days(current, u64::from(interval)),
            RecurrenceType::Weekly => advance_weekly(current, &self.weekdays, interval),
            RecurrenceType::Biweekly => {
                advance_weekly(current, &self.weekdays, interval.checked_mul(2)?)
            }
            RecurrenceType::Monthly => {
                let next = add_months(current, interval)?;
                match self.pattern.day_of_month {
                    Some(day) => with_clamped_day(next, day),
                    None => Some(next),
                }
            }
            RecurrenceType::Yearly => {
                let mut next = add_months(current, interval.checked_mul(12)?)?;
                if let Some(month) = self.pattern.month_of_year {
                    next = with_clamped_month(next, month)?;
                }
                if let Some(day) = self.pattern.day_of_month {
                    next = with_clamped_day(next, day)?;
                }
                Some(next)
            }
        }
    }
}

/// Next weekly candidate after `current`.
///
/// Weeks start on Sunday. Without a weekday selection this is a plain jump of
/// `week_skip` weeks. Otherwise the next selected weekday later in the same
/// week is used, falling back to the first selected weekday `week_skip` weeks
/// ahead.
fn advance_weekly(current: NaiveDate, weekdays: &[u8], week_skip: u32) -> Option<NaiveDate> {
    let skip_days = u64::from(week_skip).checked_mul(7)?;

    let Some(first) = weekdays.first() else {
        return add_days(current, skip_days);
    };

    let today = weekday_index(current);
    if let Some(later) = weekdays.iter().find(|day| **day > today) {
        return add_days(current, u64::from(later - today));
    }

    let week_start = current.checked_sub_days(Days::new(u64::from(today)))?;
    add_days(week_start, skip_days.checked_add(u64::from(*first))?)
}

impl Iterator for Occurrences<'_> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        if self.has_reached_end(current) {
            self.next = None;
            return None;
        }

        self.yielded = self.yielded.saturating_add(1);
        self.next = self.advance(current);
        tracing::trace!(date = %current, yielded = self.yielded, "Recurrence candidate");

        Some(current)
    }
}

impl FusedIterator for Occurrences<'_> {}
