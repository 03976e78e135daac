//! JSON request/response shapes of the `cadence` binary.

use cadence_recur::recur::{
    ExceptionEntry, ExpansionLimits, MeetingInstance, RecurringMeetingDefinition,
    expand_with_limits, next_occurrences,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

/// A definition plus the window the caller wants to display.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandRequest {
    pub definition: RecurringMeetingDefinition,
    pub start_range: NaiveDate,
    /// Exclusive.
    pub end_range: NaiveDate,
    #[serde(default)]
    pub exceptions: Vec<ExceptionEntry>,
    /// Also list this many upcoming dates of the series.
    #[serde(default)]
    pub upcoming: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandResponse {
    pub recurring_meeting_id: String,
    pub summary: String,
    pub instances: Vec<MeetingInstance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcoming: Option<Vec<NaiveDate>>,
}

impl ExpandRequest {
    /// ## Summary
    /// Parses a request from its JSON text.
    ///
    /// ## Errors
    /// Returns `AppError::InvalidRequest` if the JSON does not describe a valid request,
    /// including unknown recurrence types.
    pub fn from_json(text: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// ## Summary
    /// Expands the request's window and, if asked, the upcoming dates.
    ///
    /// ## Errors
    /// Returns an error if the recurrence pattern is invalid or the expansion
    /// exceeds `limits`.
    pub fn run(&self, limits: ExpansionLimits) -> AppResult<ExpandResponse> {
        let instances = expand_with_limits(
            &self.definition,
            self.start_range,
            self.end_range,
            &self.exceptions,
            limits,
        )?;

        let upcoming = self
            .upcoming
            .map(|count| next_occurrences(&self.definition, count.min(limits.max_instances)))
            .transpose()?;

        Ok(ExpandResponse {
            recurring_meeting_id: self.definition.id.clone(),
            summary: self.definition.recurrence_pattern.to_string(),
            instances,
            upcoming,
        })
    }
}
