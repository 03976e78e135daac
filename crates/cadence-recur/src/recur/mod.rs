pub mod deletion;
pub mod expand;
pub mod model;
pub mod export;
pub mod summary;

pub use deletion::{DeleteScope, Deletion, delete_occurrences};
pub use expand::{ExpansionLimits, Occurrences, expand, expand_with_limits, next_occurrences};
pub use model::{
    ExceptionEntry, InstanceChanges, MeetingInstance, RecurrenceEnd, RecurrencePattern,
    RecurrenceType, RecurringMeetingDefinition,
};
