//! RRULE content-line parser.

use std::str::FromStr;

use super::values::parse_recur;
use crate::error::{RRuleError, RRuleResult};
use crate::rrule::core::RRule;

/// Property name every rule string must start with.
pub const RRULE_PREFIX: &str = "RRULE";

/// Parses an `RRULE:` content line into a recurrence rule.
///
/// ## Errors
///
/// Returns `MalformedRule` if the `RRULE:` prefix is missing, and the value
/// errors of [`parse_recur`] otherwise.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn parse_rrule(text: &str) -> RRuleResult<RRule> {
    tracing::debug!("Parsing RRULE");

    let Some((name, value)) = text.split_once(':') else {
        tracing::warn!("RRULE text has no property separator");
        return Err(RRuleError::MalformedRule(text.to_string()));
    };

    if name != RRULE_PREFIX {
        tracing::warn!(name, "Expected RRULE property");
        return Err(RRuleError::MalformedRule(format!(
            "expected {RRULE_PREFIX}, got {name}"
        )));
    }

    let rrule = parse_recur(value)?;
    tracing::debug!(freq = %rrule.freq, "RRULE parsed successfully");
    Ok(rrule)
}

impl RRule {
    /// Parses an `RRULE:` content line.
    ///
    /// ## Errors
    ///
    /// See [`parse_rrule`].
    pub fn parse(text: &str) -> RRuleResult<Self> {
        parse_rrule(text)
    }
}

impl FromStr for RRule {
    type Err = RRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rrule(s)
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
