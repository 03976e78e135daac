//! Expansion of recurrence patterns into concrete dates and instances.

pub mod calendar;
mod expander;
mod occurrences;

pub use expander::{ExpansionLimits, expand, expand_with_limits, next_occurrences};
pub use occurrences::Occurrences;
