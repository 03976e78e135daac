//! Export of recurring meetings as RFC 5545 recurrence rules.
//!
//! Day-of-month clamping is expressed as `BYMONTHDAY=28,...,d;BYSETPOS=-1`,
//! which selects the last existing day up to `d`. The exported rule
//! reproduces the expansion exactly as long as the start date itself matches
//! the pattern's weekday and day-of-month selectors; a monthly pattern
//! without `dayOfMonth` keeps the start day instead of drifting after a
//! short month.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use rrule::RRuleSet;

use crate::error::{RecurError, RecurResult};
use crate::recur::model::{
    RecurrenceEnd, RecurrencePattern, RecurrenceType, RecurringMeetingDefinition,
};

const WEEKDAY_CODES: [&str; 7] = ["SU", "MO", "TU", "WE", "TH", "FR", "SA"];

fn month_day_rule(day: u32) -> String {
    let day = day.clamp(1, 31);
    if day <= 28 {
        return format!("BYMONTHDAY={day}");
    }

    let candidates: Vec<String> = (28..=day).map(|candidate| candidate.to_string()).collect();
    format!("BYMONTHDAY={};BYSETPOS=-1", candidates.join(","))
}

fn end_of_day_utc(date: NaiveDate) -> Option<DateTime<Utc>> {
    Some(date.and_hms_opt(23, 59, 59)?.and_utc())
}

fn render(
    pattern: &RecurrencePattern,
    start_date: NaiveDate,
    until: Option<DateTime<Utc>>,
) -> RecurResult<String> {
    pattern.validate()?;

    let interval = u64::from(pattern.interval);
    let (freq, interval) = match pattern.kind {
        RecurrenceType::Daily => ("DAILY", interval),
        RecurrenceType::Weekly => ("WEEKLY", interval),
        RecurrenceType::Biweekly => ("WEEKLY", interval * 2),
        RecurrenceType::Monthly => ("MONTHLY", interval),
        RecurrenceType::Yearly => ("YEARLY", interval),
    };

    let mut parts = vec![format!("FREQ={freq}"), format!("INTERVAL={interval}")];

    match pattern.kind {
        RecurrenceType::Daily => {}
        RecurrenceType::Weekly | RecurrenceType::Biweekly => {
            parts.push("WKST=SU".to_string());
            let codes: Vec<&str> = pattern
                .selected_weekdays()
                .iter()
                .filter_map(|day| WEEKDAY_CODES.get(usize::from(*day)).copied())
                .collect();
            if !codes.is_empty() {
                parts.push(format!("BYDAY={}", codes.join(",")));
            }
        }
        RecurrenceType::Monthly => {
            if let Some(day) = pattern.day_of_month {
                parts.push(month_day_rule(day));
            }
        }
        RecurrenceType::Yearly => {
            let month = pattern
                .month_of_year
                .unwrap_or_else(|| start_date.month())
                .clamp(1, 12);
            parts.push(format!("BYMONTH={month}"));
            parts.push(month_day_rule(
                pattern.day_of_month.unwrap_or_else(|| start_date.day()),
            ));
        }
    }

    match pattern.end {
        RecurrenceEnd::Never => {}
        RecurrenceEnd::After { occurrences } => parts.push(format!("COUNT={occurrences}")),
        RecurrenceEnd::On { date } => {
            let until = until
                .or_else(|| end_of_day_utc(date))
                .ok_or_else(|| RecurError::InvalidTime(format!("end of day {date}")))?;
            parts.push(format!("UNTIL={}", until.format("%Y%m%dT%H%M%SZ")));
        }
    }

    Ok(parts.join(";"))
}

/// ## Summary
/// Renders `pattern` anchored at `start_date` as RRULE text, e.g.
/// `FREQ=WEEKLY;INTERVAL=1;WKST=SU;BYDAY=MO,WE`.
///
/// An `on` end date becomes `UNTIL` at 23:59:59 UTC of that date.
///
/// ## Errors
/// Returns an error if the pattern fails validation.
pub fn rrule_text(pattern: &RecurrencePattern, start_date: NaiveDate) -> RecurResult<String> {
    render(pattern, start_date, None)
}

fn parse_wall_clock(value: &str) -> RecurResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_err| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|err| RecurError::InvalidTime(format!("{value}: {err}")))
}

/// ## Summary
/// Builds an `rrule::RRuleSet` for `definition`, with `DTSTART` at the
/// definition's start date and start time in its timezone.
///
/// `UNTIL` is the end of the `on` end date in that timezone, converted to UTC.
///
/// ## Errors
/// - `RecurError::UnknownTimezone` if the timezone label is not an IANA name.
/// - `RecurError::InvalidTime` if the start time is not `HH:MM[:SS]` or does
///   not exist on the start date (DST gap).
/// - `RecurError::RRuleError` if the `rrule` crate rejects the rule.
pub fn to_rrule_set(definition: &RecurringMeetingDefinition) -> RecurResult<RRuleSet> {
    let tz: Tz = definition
        .timezone
        .parse()
        .map_err(|_err| RecurError::UnknownTimezone(definition.timezone.clone()))?;

    let start_time = parse_wall_clock(&definition.start_time)?;
    let local_start = definition.start_date.and_time(start_time);
    if tz.from_local_datetime(&local_start).earliest().is_none() {
        return Err(RecurError::InvalidTime(format!(
            "{local_start} does not exist in {tz}"
        )));
    }

    let until = match definition.recurrence_pattern.end {
        RecurrenceEnd::On { date } => date
            .and_hms_opt(23, 59, 59)
            .and_then(|local| tz.from_local_datetime(&local).latest())
            .map(|end| end.with_timezone(&Utc)),
        RecurrenceEnd::Never | RecurrenceEnd::After { .. } => None,
    };

    let rule = render(&definition.recurrence_pattern, definition.start_date, until)?;
    let text = format!(
        "DTSTART;TZID={}:{}\nRRULE:{rule}",
        tz.name(),
        local_start.format("%Y%m%dT%H%M%S")
    );
    tracing::trace!(meeting_id = %definition.id, rrule = %text, "Exporting recurrence rule");

    text.parse::<RRuleSet>()
        .map_err(|err| RecurError::RRuleError(err.to_string()))
}
