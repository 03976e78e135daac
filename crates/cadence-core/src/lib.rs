//! Shared building blocks for the Cadence workspace: errors, settings and constants.

pub mod config;
pub mod constants;
pub mod error;
