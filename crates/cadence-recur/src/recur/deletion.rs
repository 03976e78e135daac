//! Deleting one, all future, or all occurrences of a series.
//!
//! Nothing is persisted here: each scope is translated into the change the
//! caller has to store (a cancellation, a shortened definition, or removal).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RecurResult;
use crate::recur::expand::Occurrences;
use crate::recur::model::{ExceptionEntry, RecurrenceEnd, RecurringMeetingDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteScope {
    /// Only the occurrence on the given date.
    Single,
    /// The occurrence on the given date and every later one.
    Future,
    /// The whole series.
    All,
}

/// Change the caller has to apply to carry out a deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deletion {
    /// Store this cancellation exception.
    Cancel(ExceptionEntry),
    /// Replace the stored definition with this shortened one.
    Truncate(RecurringMeetingDefinition),
    /// Remove the definition and its exceptions.
    RemoveSeries,
}

/// ## Summary
/// Translates deleting `scope` occurrences of `definition` starting at `date`
/// into a [`Deletion`].
///
/// For [`DeleteScope::Future`] the end condition is tightened so that the
/// last remaining occurrence falls before `date`: an `after` count is reduced
/// to the number of candidates before `date`, any other end becomes `on` the
/// day before `date` (an earlier existing end date is kept). When no
/// occurrence would remain the whole series is removed.
///
/// ## Errors
/// Returns an error if the definition's pattern fails validation.
pub fn delete_occurrences(
    definition: &RecurringMeetingDefinition,
    date: NaiveDate,
    scope: DeleteScope,
) -> RecurResult<Deletion> {
    let pattern = &definition.recurrence_pattern;
    pattern.validate()?;

    let deletion = match scope {
        DeleteScope::Single => Deletion::Cancel(ExceptionEntry::cancelled(date)),
        DeleteScope::All => Deletion::RemoveSeries,
        DeleteScope::Future => {
            let Some(day_before) = date.pred_opt().filter(|_| date > definition.start_date) else {
                return Ok(Deletion::RemoveSeries);
            };

            let end = match pattern.end {
                RecurrenceEnd::After { occurrences } => {
                    let kept = Occurrences::new(pattern, definition.start_date)?
                        .take_while(|candidate| *candidate < date)
                        .count();
                    let kept = u32::try_from(kept).unwrap_or(occurrences).min(occurrences);
                    if kept == 0 {
                        return Ok(Deletion::RemoveSeries);
                    }
                    RecurrenceEnd::After { occurrences: kept }
                }
                RecurrenceEnd::On { date: end } => RecurrenceEnd::On {
                    date: end.min(day_before),
                },
                RecurrenceEnd::Never => RecurrenceEnd::On { date: day_before },
            };

            let mut truncated = definition.clone();
            truncated.recurrence_pattern.end = end;
            Deletion::Truncate(truncated)
        }
    };

    tracing::debug!(meeting_id = %definition.id, %date, ?scope, "Resolved occurrence deletion");

    Ok(deletion)
}
