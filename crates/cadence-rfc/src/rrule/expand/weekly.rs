//! WEEKLY recurrence.
//!
//! BYDAY picks the weekdays and BYMONTH filters the resulting dates. The
//! remaining day-level BY* parts are reported as unsupported.

use chrono::{Datelike, NaiveDate};

use cadence_core::config::EvaluationSettings;

use super::calendar::{shift_days, week_start, weekday_of};
use super::context::EvaluationContext;
use super::periods::{Periods, first_on_or_after};
use crate::error::{RRuleError, RRuleResult};
use crate::rrule::core::{RRule, Weekday};

/// Weeks bounded by WKST, indexed from the week holding the event start.
struct Weeks {
    origin: NaiveDate,
    wkst: Weekday,
    days: Vec<Weekday>,
    months: Vec<u8>,
}

impl Periods for Weeks {
    fn index_of(&self, date: NaiveDate) -> i64 {
        week_start(date, self.wkst)
            .map_or(0, |start| (start - self.origin).num_days().div_euclid(7))
    }

    fn candidates(&self, index: i64) -> Vec<NaiveDate> {
        let Some(first) = index
            .checked_mul(7)
            .and_then(|days| shift_days(self.origin, days))
        else {
            return Vec::new();
        };
        let mut dates: Vec<NaiveDate> = self
            .days
            .iter()
            .filter_map(|day| shift_days(first, i64::from(self.wkst.days_until(*day))))
            .filter(|date| {
                self.months.is_empty()
                    || self.months.iter().any(|&m| u32::from(m) == date.month())
            })
            .collect();
        dates.sort_unstable();
        dates
    }
}

/// BYDAY weekdays sorted by ordinal, defaulting to the event start's weekday.
///
/// Ordinals (`1MO`) have no meaning in a weekly rule and are ignored.
fn weekdays(rule: &RRule, start: NaiveDate) -> Vec<Weekday> {
    let mut days: Vec<Weekday> = rule.by_day.iter().map(|entry| entry.weekday).collect();
    if days.is_empty() {
        days.push(weekday_of(start));
    }
    days.sort_unstable();
    days.dedup();
    days
}

/// Smallest forward offset from `from` to any of `days`; 0 when `from` is one of them.
pub(crate) fn nearest_offset(from: Weekday, days: &[Weekday]) -> Option<u8> {
    days.iter().map(|day| from.days_until(*day)).min()
}

/// Rejects BY* parts the weekly path does not resolve.
pub(super) fn check_weekly(rule: &RRule) -> RRuleResult<()> {
    let unsupported = [
        ("BYMONTHDAY", rule.by_monthday.is_empty()),
        ("BYYEARDAY", rule.by_yearday.is_empty()),
        ("BYWEEKNO", rule.by_weekno.is_empty()),
        ("BYSETPOS", rule.by_setpos.is_empty()),
    ];
    match unsupported.iter().find(|(_, empty)| !empty) {
        Some((part, _)) => Err(RRuleError::Unsupported(format!("WEEKLY with {part}"))),
        None => Ok(()),
    }
}

pub(super) fn next_weekly(
    rule: &RRule,
    ctx: &EvaluationContext,
    settings: &EvaluationSettings,
) -> Option<NaiveDate> {
    let start = ctx.event_start.date();
    let days = weekdays(rule, start);

    if rule.interval() == 1 && rule.count.is_none() && rule.by_month.is_empty() {
        let anchor = ctx.anchor_date();
        let offset = nearest_offset(weekday_of(anchor), &days)?;
        tracing::trace!(%anchor, offset, "Weekly offset from anchor");
        return shift_days(anchor, i64::from(offset));
    }

    let wkst = rule.week_start();
    let weeks = Weeks {
        origin: week_start(start, wkst)?,
        wkst,
        days,
        months: rule.by_month.clone(),
    };
    first_on_or_after(&weeks, rule, ctx, settings)
}
