use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{RecurError, RecurResult};
use crate::recur::expand::calendar::weekday_index;

/// Repetition unit of a recurring meeting.
///
/// Unknown values are rejected when deserializing; there is no fallback unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceType {
    Daily,
    Weekly,
    /// Weekly cadence with every step doubled.
    Biweekly,
    Monthly,
    Yearly,
}

impl RecurrenceType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for RecurrenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal condition of a series.
///
/// Serialized flat into the pattern as `endType` plus `endAfterOccurrences`
/// or `endDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "endType", rename_all = "lowercase")]
pub enum RecurrenceEnd {
    /// Bounded only by the requested window.
    Never,
    /// Stops after this many candidate dates, the start date included.
    After {
        #[serde(rename = "endAfterOccurrences")]
        occurrences: u32,
    },
    /// Stops after this date (inclusive).
    On {
        #[serde(rename = "endDate")]
        date: NaiveDate,
    },
}

/// The rule governing how a meeting repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrencePattern {
    #[serde(rename = "type")]
    pub kind: RecurrenceType,
    pub interval: u32,
    /// Weekday indices, 0 = Sunday through 6 = Saturday. Weekly/biweekly only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<u8>>,
    /// Clamped to the length of the target month. Monthly/yearly only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u32>,
    /// 1 = January. Yearly only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_of_year: Option<u32>,
    #[serde(flatten)]
    pub end: RecurrenceEnd,
}

impl RecurrencePattern {
    /// ## Summary
    /// Creates a pattern with no day selectors that never ends.
    #[must_use]
    pub const fn new(kind: RecurrenceType, interval: u32) -> Self {
        Self {
            kind,
            interval,
            days_of_week: None,
            day_of_month: None,
            month_of_year: None,
            end: RecurrenceEnd::Never,
        }
    }

    /// ## Summary
    /// Builds the default pattern for `kind` anchored on `start`.
    ///
    /// Weekly and biweekly select the start weekday, monthly picks the start
    /// day of month, and yearly picks both the start day and month.
    #[must_use]
    pub fn for_start_date(kind: RecurrenceType, start: NaiveDate) -> Self {
        let mut pattern = Self::new(kind, 1);

        match kind {
            RecurrenceType::Daily => {}
            RecurrenceType::Weekly | RecurrenceType::Biweekly => {
                pattern.days_of_week = Some(vec![weekday_index(start)]);
            }
            RecurrenceType::Monthly => {
                pattern.day_of_month = Some(start.day());
            }
            RecurrenceType::Yearly => {
                pattern.day_of_month = Some(start.day());
                pattern.month_of_year = Some(start.month());
            }
        }

        pattern
    }

    #[must_use]
    pub fn with_days_of_week(mut self, days: &[u8]) -> Self {
        self.days_of_week = Some(days.to_vec());
        self
    }

    #[must_use]
    pub fn with_day_of_month(mut self, day: u32) -> Self {
        self.day_of_month = Some(day);
        self
    }

    #[must_use]
    pub fn with_month_of_year(mut self, month: u32) -> Self {
        self.month_of_year = Some(month);
        self
    }

    #[must_use]
    pub fn with_end(mut self, end: RecurrenceEnd) -> Self {
        self.end = end;
        self
    }

    /// ## Summary
    /// Returns the selected weekdays sorted ascending without duplicates.
    ///
    /// An absent or empty selection yields an empty list, meaning "no
    /// weekday restriction".
    #[must_use]
    pub fn selected_weekdays(&self) -> Vec<u8> {
        let mut days = self.days_of_week.clone().unwrap_or_default();
        days.sort_unstable();
        days.dedup();
        days
    }

    /// ## Summary
    /// Checks the pattern before it is used for expansion.
    ///
    /// Out-of-range `day_of_month`/`month_of_year` values are not errors;
    /// they are clamped during expansion.
    ///
    /// ## Errors
    /// - `RecurError::InvalidInterval` if `interval` is zero.
    /// - `RecurError::InvalidDayOfWeek` if a weekday index is above 6.
    /// - `RecurError::InvalidOccurrenceCount` for `after` with zero occurrences.
    pub fn validate(&self) -> RecurResult<()> {
        if self.interval == 0 {
            return Err(RecurError::InvalidInterval);
        }

        if let Some(day) = self
            .days_of_week
            .iter()
            .flatten()
            .copied()
            .find(|day| *day > 6)
        {
            return Err(RecurError::InvalidDayOfWeek(day));
        }

        if self.end == (RecurrenceEnd::After { occurrences: 0 }) {
            return Err(RecurError::InvalidOccurrenceCount);
        }

        Ok(())
    }
}
