//! Calendar arithmetic shared by the frequency paths.

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::rrule::core::{Weekday, WeekdayNum};

/// Number of days in the given month, leap years included.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}

/// Resolves a BYMONTHDAY value; negative values count back from the month end.
///
/// Returns `None` for days the month does not have (e.g. 31 in April).
pub(crate) fn resolve_monthday(year: i32, month: u32, day: i8) -> Option<NaiveDate> {
    let len = i32::try_from(days_in_month(year, month)).ok()?;
    let day = i32::from(day);
    let resolved = if day < 0 { len + day + 1 } else { day };
    if resolved < 1 || resolved > len {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, u32::try_from(resolved).ok()?)
}

/// Moves `(year, month)` forward by `months`.
pub(crate) fn add_months(year: i32, month: u32, months: i64) -> Option<(i32, u32)> {
    let total = i64::from(year) * 12 + i64::from(month) - 1 + months;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = u32::try_from(total.rem_euclid(12) + 1).ok()?;
    Some((year, month))
}

/// Shifts `date` by a signed number of days.
pub(crate) fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(TimeDelta::try_days(days)?)
}

pub(crate) fn weekday_of(date: NaiveDate) -> Weekday {
    Weekday::from(date.weekday())
}

/// First day of the week containing `date`, for weeks starting on `wkst`.
pub(crate) fn week_start(date: NaiveDate, wkst: Weekday) -> Option<NaiveDate> {
    let back = wkst.days_until(weekday_of(date));
    shift_days(date, -i64::from(back))
}

/// Whether `date` satisfies one of the BYDAY entries within `[first, last]`.
///
/// An entry with ordinal `n > 0` matches only the nth such weekday counted
/// from `first`; `n < 0` counts back from `last`.
pub(crate) fn matches_by_day(
    date: NaiveDate,
    entries: &[WeekdayNum],
    first: NaiveDate,
    last: NaiveDate,
) -> bool {
    let weekday = weekday_of(date);
    entries
        .iter()
        .filter(|entry| entry.weekday == weekday)
        .any(|entry| match entry.ordinal {
            None => true,
            Some(n) if n > 0 => (date - first).num_days() / 7 + 1 == i64::from(n),
            Some(n) => -((last - date).num_days() / 7 + 1) == i64::from(n),
        })
}

/// Applies BYSETPOS to an ascending, de-duplicated candidate set.
///
/// Positions are 1-based; negative positions count from the end. Positions
/// outside the set are ignored.
pub(crate) fn select_positions(candidates: &[NaiveDate], positions: &[i16]) -> Vec<NaiveDate> {
    if positions.is_empty() {
        return candidates.to_vec();
    }
    let Ok(len) = i64::try_from(candidates.len()) else {
        return Vec::new();
    };

    let mut selected: Vec<NaiveDate> = positions
        .iter()
        .filter_map(|&pos| {
            let pos = i64::from(pos);
            let index = if pos > 0 { pos - 1 } else { len + pos };
            usize::try_from(index)
                .ok()
                .and_then(|i| candidates.get(i).copied())
        })
        .collect();
    selected.sort_unstable();
    selected.dedup();
    selected
}
