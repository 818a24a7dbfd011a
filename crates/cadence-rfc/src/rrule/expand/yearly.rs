//! YEARLY recurrence.
//!
//! Resolved combinations: a bare rule (anniversary of the event start),
//! BYMONTH with BYMONTHDAY, and BYMONTH with BYDAY (ordinals counted within
//! each month, e.g. "fourth Thursday of November"). BYSETPOS selects from
//! the year's combined set. Anything else is reported as unsupported.

use chrono::{Datelike, NaiveDate};

use cadence_core::config::EvaluationSettings;

use super::calendar::select_positions;
use super::context::EvaluationContext;
use super::monthly::month_days;
use super::periods::{Periods, first_on_or_after};
use crate::error::{RRuleError, RRuleResult};
use crate::rrule::core::RRule;

struct Years<'a> {
    rule: &'a RRule,
    origin_year: i32,
    start: NaiveDate,
    months: Vec<u32>,
}

impl Periods for Years<'_> {
    fn index_of(&self, date: NaiveDate) -> i64 {
        i64::from(date.year()) - i64::from(self.origin_year)
    }

    fn candidates(&self, index: i64) -> Vec<NaiveDate> {
        let Some(year) = i64::from(self.origin_year)
            .checked_add(index)
            .and_then(|y| i32::try_from(y).ok())
        else {
            return Vec::new();
        };

        if self.months.is_empty() {
            // Feb 29 anniversaries only land in leap years.
            return NaiveDate::from_ymd_opt(year, self.start.month(), self.start.day())
                .into_iter()
                .collect();
        }

        let days: Vec<NaiveDate> = self
            .months
            .iter()
            .flat_map(|&month| month_days(self.rule, year, month, self.start.day()))
            .collect();
        select_positions(&days, &self.rule.by_setpos)
    }
}

/// Rejects BY* combinations the yearly path does not resolve.
pub(super) fn check_yearly(rule: &RRule) -> RRuleResult<()> {
    if !rule.by_yearday.is_empty() {
        return Err(RRuleError::Unsupported("YEARLY with BYYEARDAY".to_string()));
    }
    if !rule.by_weekno.is_empty() {
        return Err(RRuleError::Unsupported("YEARLY with BYWEEKNO".to_string()));
    }
    let narrows_days =
        !rule.by_day.is_empty() || !rule.by_monthday.is_empty() || !rule.by_setpos.is_empty();
    if rule.by_month.is_empty() && narrows_days {
        return Err(RRuleError::Unsupported(
            "YEARLY with BYDAY, BYMONTHDAY or BYSETPOS but no BYMONTH".to_string(),
        ));
    }
    Ok(())
}

pub(super) fn next_yearly(
    rule: &RRule,
    ctx: &EvaluationContext,
    settings: &EvaluationSettings,
) -> Option<NaiveDate> {
    let start = ctx.event_start.date();
    let mut months: Vec<u32> = rule.by_month.iter().map(|&m| u32::from(m)).collect();
    months.sort_unstable();
    months.dedup();

    let years = Years {
        rule,
        origin_year: start.year(),
        start,
        months,
    };
    first_on_or_after(&years, rule, ctx, settings)
}
