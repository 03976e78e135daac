use cadence_core::config::ExpansionConfig;
use cadence_core::constants::{DEFAULT_MAX_INSTANCES, DEFAULT_MAX_ITERATIONS};
use chrono::NaiveDate;

use super::occurrences::Occurrences;
use crate::error::{RecurError, RecurResult};
use crate::recur::model::{
    ExceptionEntry, ExceptionIndex, MeetingInstance, RecurringMeetingDefinition,
};

/// Safety caps for a single expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionLimits {
    /// Candidate dates walked (including those before the window) before
    /// expansion fails with `RecurError::IterationLimitExceeded`.
    pub max_iterations: usize,
    /// Instances returned; the output is truncated at this length.
    pub max_instances: usize,
}

impl Default for ExpansionLimits {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_instances: DEFAULT_MAX_INSTANCES,
        }
    }
}

impl From<&ExpansionConfig> for ExpansionLimits {
    fn from(config: &ExpansionConfig) -> Self {
        Self {
            max_iterations: config.max_iterations,
            max_instances: config.max_instances,
        }
    }
}

/// ## Summary
/// Expands `definition` into the instances dated within `[start_range, end_range)`,
/// using the default [`ExpansionLimits`].
///
/// ## Errors
/// See [`expand_with_limits`].
pub fn expand(
    definition: &RecurringMeetingDefinition,
    start_range: NaiveDate,
    end_range: NaiveDate,
    exceptions: &[ExceptionEntry],
) -> RecurResult<Vec<MeetingInstance>> {
    expand_with_limits(
        definition,
        start_range,
        end_range,
        exceptions,
        ExpansionLimits::default(),
    )
}

/// ## Summary
/// Expands `definition` into the instances dated within `[start_range, end_range)`.
///
/// Candidates are walked from the definition's start date so that `after`
/// end conditions count occurrences before the window too. Cancelled
/// exceptions drop their date entirely; modified exceptions replace fields
/// and mark the instance with `is_exception`. When several exceptions share
/// a date, the first one wins. The result is ascending by date.
///
/// ## Errors
/// - Pattern validation errors (zero interval, bad weekday, zero count).
/// - `RecurError::IterationLimitExceeded` when more than
///   `limits.max_iterations` candidates would be walked.
///
/// ## Side Effects
/// None. Output is truncated (with a warning) at `limits.max_instances`.
pub fn expand_with_limits(
    definition: &RecurringMeetingDefinition,
    start_range: NaiveDate,
    end_range: NaiveDate,
    exceptions: &[ExceptionEntry],
    limits: ExpansionLimits,
) -> RecurResult<Vec<MeetingInstance>> {
    let occurrences = Occurrences::new(&definition.recurrence_pattern, definition.start_date)?;

    if definition.start_date >= end_range || start_range >= end_range {
        tracing::trace!(
            meeting_id = %definition.id,
            %start_range,
            %end_range,
            "Window ends before the series starts"
        );
        return Ok(Vec::new());
    }

    let exceptions = ExceptionIndex::new(exceptions);
    let mut instances = Vec::new();
    let mut walked = 0_usize;

    for date in occurrences.take_while(|date| *date < end_range) {
        walked += 1;
        if walked > limits.max_iterations {
            tracing::warn!(
                meeting_id = %definition.id,
                max_iterations = limits.max_iterations,
                "Recurrence expansion hit the iteration limit"
            );
            return Err(RecurError::IterationLimitExceeded(limits.max_iterations));
        }

        if date < start_range {
            continue;
        }

        match exceptions.get(date) {
            None => instances.push(MeetingInstance::from_definition(definition, date)),
            Some(exception) if exception.is_cancelled => {
                tracing::trace!(%date, "Skipping cancelled occurrence");
            }
            Some(exception) => {
                instances.push(MeetingInstance::from_exception(definition, exception));
            }
        }

        if instances.len() >= limits.max_instances {
            tracing::warn!(
                meeting_id = %definition.id,
                max_instances = limits.max_instances,
                "Truncating recurrence expansion at the instance limit"
            );
            break;
        }
    }

    tracing::debug!(
        meeting_id = %definition.id,
        pattern = %definition.recurrence_pattern.kind,
        %start_range,
        %end_range,
        exceptions = exceptions.len(),
        candidates = walked,
        instances = instances.len(),
        "Expanded recurring meeting"
    );

    Ok(instances)
}

/// ## Summary
/// Returns the first `count` dates of the series, ignoring windows and
/// exceptions but honoring the pattern's end condition.
///
/// ## Errors
/// Returns an error if the pattern fails validation.
pub fn next_occurrences(
    definition: &RecurringMeetingDefinition,
    count: usize,
) -> RecurResult<Vec<NaiveDate>> {
    Ok(
        Occurrences::new(&definition.recurrence_pattern, definition.start_date)?
            .take(count)
            .collect(),
    )
}


#[cfg(test)]
mod expansion_cases {
    include!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/expansion_cases_data/mod.rs"
    ));

    #[test]
    fn expansion_cases_unit() {
        for case in expansion_cases() {
            let definition: crate::recur::model::RecurringMeetingDefinition =
                serde_json::from_str(case.definition).expect(case.name);
            let exceptions: Vec<crate::recur::model::ExceptionEntry> =
                serde_json::from_str(case.exceptions).expect(case.name);

            let instances = super::expand(&definition, case.start(), case.end(), &exceptions)
                .expect(case.name);

            let actual: Vec<String> = instances.iter().map(|i| i.date.to_string()).collect();
            assert_eq!(actual, case.expected, "case {}", case.name);
        }
    }
}
