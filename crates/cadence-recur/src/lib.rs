//! Recurring meeting expansion.
//!
//! Turns a [`RecurringMeetingDefinition`](recur::model::RecurringMeetingDefinition)
//! and a half-open date window into concrete meeting instances, applying
//! per-date exceptions along the way.

pub mod error;
pub mod recur;
