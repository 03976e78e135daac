use cadence_core::constants::INSTANCE_NAMESPACE;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::exception::ExceptionEntry;
use super::meeting::RecurringMeetingDefinition;

/// A concrete occurrence of a recurring meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingInstance {
    pub id: Uuid,
    pub recurring_meeting_id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_time: String,
    pub end_time: String,
    pub timezone: String,
    pub date: NaiveDate,
    pub attendees: Vec<String>,
    pub organizer: String,
    pub is_exception: bool,
    pub is_cancelled: bool,
}

/// ## Summary
/// Derives the stable id of the instance of `meeting_id` on `date`.
///
/// UUID v5 over `"{meeting_id}/{date}"`, so regenerating a window always
/// yields the same ids.
#[must_use]
pub fn instance_id(meeting_id: &str, date: NaiveDate) -> Uuid {
    let name = format!("{meeting_id}/{}", date.format("%Y-%m-%d"));
    Uuid::new_v5(&INSTANCE_NAMESPACE, name.as_bytes())
}

impl MeetingInstance {
    /// ## Summary
    /// Builds the regular instance of `definition` on `date`.
    #[must_use]
    pub fn from_definition(definition: &RecurringMeetingDefinition, date: NaiveDate) -> Self {
        Self {
            id: instance_id(&definition.id, date),
            recurring_meeting_id: definition.id.clone(),
            title: definition.title.clone(),
            description: definition.description.clone(),
            location: definition.location.clone(),
            start_time: definition.start_time.clone(),
            end_time: definition.end_time.clone(),
            timezone: definition.timezone.clone(),
            date,
            attendees: definition.attendees.clone(),
            organizer: definition.organizer.clone(),
            is_exception: false,
            is_cancelled: false,
        }
    }

    /// ## Summary
    /// Builds the instance for a modified (not cancelled) exception.
    ///
    /// Fields present in `exception.changes` replace the definition's values.
    #[must_use]
    pub fn from_exception(
        definition: &RecurringMeetingDefinition,
        exception: &ExceptionEntry,
    ) -> Self {
        let mut instance = Self::from_definition(definition, exception.date);
        instance.is_exception = true;

        let Some(changes) = &exception.changes else {
            return instance;
        };

        if let Some(title) = &changes.title {
            instance.title.clone_from(title);
        }
        if let Some(description) = &changes.description {
            instance.description.clone_from(description);
        }
        if let Some(location) = &changes.location {
            instance.location.clone_from(location);
        }
        if let Some(start_time) = &changes.start_time {
            instance.start_time.clone_from(start_time);
        }
        if let Some(end_time) = &changes.end_time {
            instance.end_time.clone_from(end_time);
        }
        if let Some(timezone) = &changes.timezone {
            instance.timezone.clone_from(timezone);
        }
        if let Some(attendees) = &changes.attendees {
            instance.attendees.clone_from(attendees);
        }

        instance
    }
}
