use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::pattern::RecurrencePattern;

/// Template of a recurring meeting, owned by the caller.
///
/// `start_time`, `end_time` and `timezone` are opaque labels that are copied
/// onto every generated instance as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringMeetingDefinition {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub start_time: String,
    pub end_time: String,
    pub timezone: String,
    /// First possible occurrence date.
    pub start_date: NaiveDate,
    pub recurrence_pattern: RecurrencePattern,
    #[serde(default)]
    pub attendees: Vec<String>,
    pub organizer: String,
    pub created_at: DateTime<Utc>,
}
