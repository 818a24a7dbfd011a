//! Period-by-period search shared by the WEEKLY, MONTHLY and YEARLY paths.

use chrono::NaiveDate;

use cadence_core::config::EvaluationSettings;

use super::context::EvaluationContext;
use crate::rrule::core::RRule;

/// A frequency's sequence of periods (weeks, months or years), indexed from
/// the period containing the event start.
pub(crate) trait Periods {
    /// Index of the period containing `date`.
    fn index_of(&self, date: NaiveDate) -> i64;

    /// Candidate dates inside period `index`, ascending and de-duplicated.
    fn candidates(&self, index: i64) -> Vec<NaiveDate>;
}

/// Finds the first occurrence on or after the anchor date.
///
/// Only periods whose index is a multiple of the rule's interval qualify, and
/// candidates before the event start never count. With COUNT, occurrences are
/// numbered from the event start and the search stops once COUNT is spent.
pub(crate) fn first_on_or_after(
    periods: &impl Periods,
    rule: &RRule,
    ctx: &EvaluationContext,
    settings: &EvaluationSettings,
) -> Option<NaiveDate> {
    let start = ctx.event_start.date();
    let anchor = ctx.anchor_date();
    let interval = i64::from(rule.interval());
    let limit = i64::from(settings.max_periods);

    match rule.count {
        Some(count) => counted(periods, start, anchor, interval, limit, count),
        None => {
            let current = periods.index_of(anchor).max(0);
            let first = current + (interval - current % interval) % interval;
            (0..limit).find_map(|step| {
                periods
                    .candidates(first.saturating_add(step.saturating_mul(interval)))
                    .into_iter()
                    .find(|date| *date >= anchor && *date >= start)
            })
        }
    }
}

fn counted(
    periods: &impl Periods,
    start: NaiveDate,
    anchor: NaiveDate,
    interval: i64,
    limit: i64,
    count: u32,
) -> Option<NaiveDate> {
    let last = periods
        .index_of(anchor)
        .max(0)
        .saturating_add(limit.saturating_mul(interval));
    let mut seen = 0_u32;
    let mut index = 0;

    while index <= last {
        for date in periods.candidates(index) {
            if date < start {
                continue;
            }
            if seen >= count {
                tracing::trace!(count, "COUNT exhausted");
                return None;
            }
            if date >= anchor {
                return Some(date);
            }
            seen += 1;
        }
        index = index.saturating_add(interval);
        if index == i64::MAX {
            break;
        }
    }
    None
}
