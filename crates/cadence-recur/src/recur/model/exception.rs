use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-occurrence overrides. Every `None` field falls back to the definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<String>>,
}

/// Caller-supplied cancellation or modification of a single occurrence date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub is_cancelled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<InstanceChanges>,
}

impl ExceptionEntry {
    #[must_use]
    pub const fn cancelled(date: NaiveDate) -> Self {
        Self {
            date,
            is_cancelled: true,
            changes: None,
        }
    }

    #[must_use]
    pub const fn modified(date: NaiveDate, changes: InstanceChanges) -> Self {
        Self {
            date,
            is_cancelled: false,
            changes: Some(changes),
        }
    }
}

/// Date-keyed lookup over a list of exceptions.
///
/// When several entries share a date, the first one in input order wins and
/// the rest are ignored.
#[derive(Debug, Default)]
pub struct ExceptionIndex<'a> {
    by_date: HashMap<NaiveDate, &'a ExceptionEntry>,
}

impl<'a> ExceptionIndex<'a> {
    #[must_use]
    pub fn new(entries: &'a [ExceptionEntry]) -> Self {
        let mut by_date = HashMap::with_capacity(entries.len());

        for entry in entries {
            match by_date.entry(entry.date) {
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
                Entry::Occupied(_) => {
                    tracing::debug!(date = %entry.date, "Ignoring duplicate exception for date");
                }
            }
        }

        Self { by_date }
    }

    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&'a ExceptionEntry> {
        self.by_date.get(&date).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
