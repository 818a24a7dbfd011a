//! Cadence recurrence rules - integration test support.
//!
//! Re-exports the workspace crates and provides the date helpers shared by
//! the integration tests.

pub use cadence_core;
pub use cadence_rfc;

use chrono::{NaiveDate, NaiveDateTime};

/// ## Summary
/// Parses an ISO `yyyy-mm-dd` date.
///
/// ## Errors
/// Returns an error if `text` is not a valid date.
pub fn date(text: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(text, "%Y-%m-%d")?)
}

/// ## Summary
/// Parses an ISO `yyyy-mm-ddTHH:MM:SS` local date-time.
///
/// ## Errors
/// Returns an error if `text` is not a valid date-time.
pub fn at(text: &str) -> anyhow::Result<NaiveDateTime> {
    Ok(NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")?)
}
