//! Value parsers for the RECUR value type (RFC 5545 §3.3.10).
//!
//! Integer and date errors carry the offending token instead of the source error.
#![expect(
    clippy::map_err_ignore,
    reason = "The offending token is more useful to callers than the std parse error"
)]

use std::ops::RangeInclusive;

use chrono::NaiveDate;

use crate::error::{RRuleError, RRuleResult};
use crate::rrule::core::{Frequency, RRule, RRuleUntil, Weekday, WeekdayNum};

/// Parses the value part of an RRULE (everything after `RRULE:`).
///
/// ## Errors
/// Returns an error if a part is malformed, a key is unknown, a value does not
/// match its grammar, or FREQ is missing.
pub fn parse_recur(s: &str) -> RRuleResult<RRule> {
    let mut freq = None;
    // FREQ is mandatory but may appear anywhere; the placeholder is replaced below.
    let mut rrule = RRule::weekly();

    for part in s.split(';').filter(|p| !p.is_empty()) {
        let (key, value) = part
            .split_once('=')
            .ok_or_else(|| RRuleError::MalformedRule(part.to_string()))?;
        if key.is_empty() {
            return Err(RRuleError::MalformedRule(part.to_string()));
        }

        tracing::trace!(key, value, "RRULE part");
        parse_rrule_part(&mut rrule, &mut freq, key, value)?;
    }

    rrule.freq = freq.ok_or_else(|| RRuleError::MalformedRule("missing FREQ".to_string()))?;
    Ok(rrule)
}

/// Parses a single RRULE key-value pair. Later keys overwrite earlier ones.
fn parse_rrule_part(
    rrule: &mut RRule,
    freq: &mut Option<Frequency>,
    key: &str,
    value: &str,
) -> RRuleResult<()> {
    match key {
        "FREQ" => {
            *freq = Some(
                Frequency::parse(value)
                    .ok_or_else(|| RRuleError::InvalidEnumValue("FREQ", value.to_string()))?,
            );
        }
        "UNTIL" => rrule.until = Some(parse_until(value)?),
        "COUNT" => {
            rrule.count = Some(
                parse_digits(value).ok_or_else(|| RRuleError::InvalidInteger(value.to_string()))?,
            );
        }
        "INTERVAL" => rrule.interval = Some(parse_interval(value)?),
        "WKST" => {
            rrule.wkst = Some(
                Weekday::parse(value)
                    .ok_or_else(|| RRuleError::InvalidEnumValue("WKST", value.to_string()))?,
            );
        }
        "BYSECOND" => rrule.by_second = parse_int_list(value, 0..=59, true)?,
        "BYMINUTE" => rrule.by_minute = parse_int_list(value, 0..=59, true)?,
        "BYHOUR" => rrule.by_hour = parse_int_list(value, 0..=23, true)?,
        "BYDAY" => rrule.by_day = parse_byday(value)?,
        "BYMONTHDAY" => rrule.by_monthday = parse_int_list(value, -31..=31, false)?,
        "BYYEARDAY" => rrule.by_yearday = parse_int_list(value, -366..=366, false)?,
        "BYWEEKNO" => rrule.by_weekno = parse_int_list(value, -53..=53, false)?,
        "BYMONTH" => rrule.by_month = parse_int_list(value, 1..=12, false)?,
        "BYSETPOS" => rrule.by_setpos = parse_int_list(value, -366..=366, false)?,
        _ => {
            tracing::warn!(key, "Unknown RRULE parameter");
            return Err(RRuleError::UnknownParameter(key.to_string()));
        }
    }
    Ok(())
}

/// Parses INTERVAL, which must be a positive integer.
fn parse_interval(value: &str) -> RRuleResult<u32> {
    match parse_digits(value) {
        Some(n) if n > 0 => Ok(n),
        _ => Err(RRuleError::InvalidInteger(value.to_string())),
    }
}

/// Parses an unsigned run of ASCII digits (`1*DIGIT`); signs and whitespace are rejected.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parses an UNTIL value.
///
/// Format: `YYYYMMDD"T"HHMMSS"Z"` (e.g. "20180317T065959Z"). The floating
/// form without `Z` and the date-only form `YYYYMMDD` are accepted too.
///
/// ## Errors
/// Returns `InvalidUntilFormat` if the value matches none of the forms or
/// names a non-existent date or time.
pub fn parse_until(s: &str) -> RRuleResult<RRuleUntil> {
    let invalid = || RRuleError::InvalidUntilFormat(s.to_string());

    let Some((date_str, time_str)) = s.split_once('T') else {
        return parse_basic_date(s).map(RRuleUntil::Date).ok_or_else(invalid);
    };

    let date = parse_basic_date(date_str).ok_or_else(invalid)?;
    let (time_str, utc) = match time_str.strip_suffix('Z') {
        Some(stripped) => (stripped, true),
        None => (time_str, false),
    };

    let [hour, minute, second] = split_digits::<3>(time_str).ok_or_else(invalid)?;
    let value = date.and_hms_opt(hour, minute, second).ok_or_else(invalid)?;

    Ok(RRuleUntil::DateTime { value, utc })
}

/// Parses a basic-format DATE (`YYYYMMDD`).
fn parse_basic_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = s[0..4].parse().ok()?;
    let month = s[4..6].parse().ok()?;
    let day = s[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Splits a run of `2 * N` ASCII digits into `N` two-digit numbers.
fn split_digits<const N: usize>(s: &str) -> Option<[u32; N]> {
    if s.len() != 2 * N || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut out = [0; N];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = s[2 * i..2 * i + 2].parse().ok()?;
    }
    Some(out)
}

/// Parses a comma-separated list of integers inside `range`.
///
/// Each element is 1–3 digits, with a `+`/`-` sign only when `range` admits
/// negative values. `allow_zero` is false for the signed lists, where 0 has
/// no meaning.
fn parse_int_list<T>(s: &str, range: RangeInclusive<i32>, allow_zero: bool) -> RRuleResult<Vec<T>>
where
    T: TryFrom<i32>,
{
    let signed = *range.start() < 0;
    s.split(',')
        .map(|token| {
            let invalid = || RRuleError::InvalidInteger(token.to_string());
            let (negative, digits) = match token.strip_prefix(['+', '-']) {
                Some(rest) if signed => (token.starts_with('-'), rest),
                Some(_) => return Err(invalid()),
                None => (false, token),
            };
            if digits.len() > 3 {
                return Err(invalid());
            }
            let magnitude = parse_digits(digits).ok_or_else(invalid)?;
            let magnitude = i32::try_from(magnitude).map_err(|_| invalid())?;
            let n = if negative { -magnitude } else { magnitude };
            if !range.contains(&n) || (n == 0 && !allow_zero) {
                return Err(invalid());
            }
            T::try_from(n).map_err(|_| invalid())
        })
        .collect()
}

/// Parses a BYDAY value (weekdays with optional ordinals).
fn parse_byday(s: &str) -> RRuleResult<Vec<WeekdayNum>> {
    s.split(',').map(parse_weekday_num).collect()
}

/// Parses a single weekday with optional ordinal (e.g., "MO", "+1MO", "-1FR").
fn parse_weekday_num(token: &str) -> RRuleResult<WeekdayNum> {
    let s = token.trim();
    let code_start = s
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(s.len());
    let (ordinal_str, code) = s.split_at(code_start);

    let weekday =
        Weekday::parse(code).ok_or_else(|| RRuleError::InvalidWeekday(token.to_string()))?;

    if ordinal_str.is_empty() {
        return Ok(WeekdayNum::every(weekday));
    }

    let invalid = || RRuleError::InvalidInteger(token.to_string());
    let digits = ordinal_str
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(ordinal_str);
    if digits.is_empty() || digits.len() > 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let ordinal = ordinal_str.parse::<i16>().map_err(|_| invalid())?;
    if ordinal == 0 || !(-53..=53).contains(&ordinal) {
        return Err(invalid());
    }
    let ordinal = i8::try_from(ordinal).map_err(|_| invalid())?;

    Ok(WeekdayNum {
        ordinal: Some(ordinal),
        weekday,
    })
}
