//! Plain data types shared between callers and the expander.
//!
//! Field names serialize in camelCase so calendar clients can send their
//! JSON payloads unchanged.

mod exception;
mod instance;
mod meeting;
mod pattern;

pub use exception::{ExceptionEntry, ExceptionIndex, InstanceChanges};
pub use instance::{MeetingInstance, instance_id};
pub use meeting::RecurringMeetingDefinition;
pub use pattern::{RecurrenceEnd, RecurrencePattern, RecurrenceType};
