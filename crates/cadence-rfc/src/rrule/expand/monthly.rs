//! MONTHLY recurrence, plus the per-month candidate expansion YEARLY reuses.

use chrono::{Datelike, NaiveDate};

use cadence_core::config::EvaluationSettings;

use super::calendar::{
    add_months, days_in_month, matches_by_day, resolve_monthday, select_positions,
};
use super::context::EvaluationContext;
use super::periods::{Periods, first_on_or_after};
use crate::error::{RRuleError, RRuleResult};
use crate::rrule::core::RRule;

/// ## Summary
/// Candidate dates of `rule` inside one month, before BYSETPOS.
///
/// BYMONTHDAY picks days (negative from the month end); without it, BYDAY
/// considers every day of the month, and with neither the event start's
/// day-of-month is used. BYDAY then filters, ordinals counting within the
/// month.
pub(crate) fn month_days(rule: &RRule, year: i32, month: u32, start_day: u32) -> Vec<NaiveDate> {
    let mut days: Vec<NaiveDate> = if !rule.by_monthday.is_empty() {
        rule.by_monthday
            .iter()
            .filter_map(|&day| resolve_monthday(year, month, day))
            .collect()
    } else if !rule.by_day.is_empty() {
        (1..=days_in_month(year, month))
            .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
            .collect()
    } else {
        NaiveDate::from_ymd_opt(year, month, start_day)
            .into_iter()
            .collect()
    };

    if !rule.by_day.is_empty() {
        let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, month, 1),
            NaiveDate::from_ymd_opt(year, month, days_in_month(year, month)),
        ) else {
            return Vec::new();
        };
        days.retain(|date| matches_by_day(*date, &rule.by_day, first, last));
    }

    days.sort_unstable();
    days.dedup();
    days
}

/// [`month_days`] with BYSETPOS applied to the month's set.
pub(crate) fn month_candidates(rule: &RRule, year: i32, month: u32, start_day: u32) -> Vec<NaiveDate> {
    select_positions(&month_days(rule, year, month, start_day), &rule.by_setpos)
}

/// Months indexed from the month holding the event start.
struct Months<'a> {
    rule: &'a RRule,
    origin_year: i32,
    origin_month: u32,
    start_day: u32,
}

impl Periods for Months<'_> {
    fn index_of(&self, date: NaiveDate) -> i64 {
        (i64::from(date.year()) - i64::from(self.origin_year)) * 12 + i64::from(date.month())
            - i64::from(self.origin_month)
    }

    fn candidates(&self, index: i64) -> Vec<NaiveDate> {
        let Some((year, month)) = add_months(self.origin_year, self.origin_month, index) else {
            return Vec::new();
        };
        if !self.rule.by_month.is_empty()
            && !self.rule.by_month.iter().any(|&m| u32::from(m) == month)
        {
            return Vec::new();
        }
        month_candidates(self.rule, year, month, self.start_day)
    }
}

/// Rejects BY* parts the monthly path does not resolve.
pub(super) fn check_monthly(rule: &RRule) -> RRuleResult<()> {
    if !rule.by_yearday.is_empty() || !rule.by_weekno.is_empty() {
        return Err(RRuleError::Unsupported(
            "MONTHLY with BYYEARDAY or BYWEEKNO".to_string(),
        ));
    }
    Ok(())
}

pub(super) fn next_monthly(
    rule: &RRule,
    ctx: &EvaluationContext,
    settings: &EvaluationSettings,
) -> Option<NaiveDate> {
    let start = ctx.event_start.date();
    let months = Months {
        rule,
        origin_year: start.year(),
        origin_month: start.month(),
        start_day: start.day(),
    };
    first_on_or_after(&months, rule, ctx, settings)
}
