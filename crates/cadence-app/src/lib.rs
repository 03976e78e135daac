//! Command-line front end for recurring meeting expansion.

pub mod error;
pub mod request;
pub mod telemetry;
