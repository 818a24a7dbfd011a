//! Next-occurrence calculation for parsed recurrence rules.
//!
//! WEEKLY, MONTHLY and YEARLY rules are resolved; sub-daily and DAILY
//! frequencies, and the BY* combinations each path does not handle, are
//! reported as [`RRuleError::Unsupported`].

mod calendar;
mod context;
mod monthly;
mod periods;
mod weekly;
mod yearly;

pub use context::{EvaluationContext, ScheduledRule};

use chrono::NaiveDate;

use cadence_core::config::EvaluationSettings;

use crate::error::{RRuleError, RRuleResult};
use crate::rrule::core::{Frequency, RRule};

/// ## Summary
/// Next occurrence of `rule` on or after the context's anchor, using default
/// evaluation settings.
///
/// ## Errors
/// Returns `Unsupported` for frequencies and BY* combinations that are not resolved.
pub fn next_occurrence(rule: &RRule, ctx: &EvaluationContext) -> RRuleResult<Option<NaiveDate>> {
    next_occurrence_with(rule, ctx, &EvaluationSettings::default())
}

/// ## Summary
/// Next occurrence of `rule` on or after the context's anchor.
///
/// `Ok(None)` means the rule has no further occurrences: UNTIL lies before
/// now, COUNT is spent, or nothing matched within `settings.max_periods`
/// periods.
///
/// ## Errors
/// Returns `Unsupported` for frequencies and BY* combinations that are not resolved.
#[tracing::instrument(skip(rule, settings), fields(rule = %rule))]
pub fn next_occurrence_with(
    rule: &RRule,
    ctx: &EvaluationContext,
    settings: &EvaluationSettings,
) -> RRuleResult<Option<NaiveDate>> {
    match rule.freq {
        Frequency::Weekly => weekly::check_weekly(rule)?,
        Frequency::Monthly => monthly::check_monthly(rule)?,
        Frequency::Yearly => yearly::check_yearly(rule)?,
        Frequency::Secondly | Frequency::Minutely | Frequency::Hourly | Frequency::Daily => {
            return Err(RRuleError::Unsupported(rule.freq.as_str().to_string()));
        }
    }

    if let Some(until) = rule.until
        && until.is_before(ctx.now)
    {
        tracing::debug!(%until, now = %ctx.now, "UNTIL already passed");
        return Ok(None);
    }

    let next = match rule.freq {
        Frequency::Weekly => weekly::next_weekly(rule, ctx, settings),
        Frequency::Monthly => monthly::next_monthly(rule, ctx, settings),
        Frequency::Yearly => yearly::next_yearly(rule, ctx, settings),
        Frequency::Secondly | Frequency::Minutely | Frequency::Hourly | Frequency::Daily => None,
    };

    let next = match (next, rule.until) {
        (Some(date), Some(until)) if settings.clamp_to_until && date > until.date() => {
            tracing::debug!(%date, %until, "Occurrence past UNTIL suppressed");
            None
        }
        (next, _) => next,
    };

    tracing::debug!(?next, "Next occurrence resolved");
    Ok(next)
}

#[cfg(test)]
#[path = "expand_tests.rs"]
mod tests;
