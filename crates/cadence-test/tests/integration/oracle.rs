//! Cross-checks against the `rrule` crate's full expansion: the next
//! occurrence must be the first expanded date on or after "now".

use cadence_rfc::rrule::{EvaluationContext, next_occurrence, parse_rrule};
use cadence_test::at;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rrule::RRuleSet;

/// Rules whose event start is itself an occurrence, so that both sides
/// agree on whether the start counts.
const ORACLE_RULES: &[(&str, &str)] = &[
    ("RRULE:FREQ=WEEKLY;BYDAY=MO,WE,FR", "2018-01-01T09:00:00"),
    ("RRULE:FREQ=WEEKLY;INTERVAL=2;BYDAY=TU,TH", "2018-01-02T09:00:00"),
    ("RRULE:FREQ=WEEKLY;INTERVAL=2;BYDAY=TU,SU;WKST=SU", "1997-08-05T09:00:00"),
    ("RRULE:FREQ=WEEKLY;INTERVAL=3", "2018-03-07T09:00:00"),
    ("RRULE:FREQ=WEEKLY;COUNT=5;BYDAY=MO,FR", "2018-01-01T09:00:00"),
    ("RRULE:FREQ=WEEKLY;BYDAY=MO;BYMONTH=3", "2018-03-05T09:00:00"),
    ("RRULE:FREQ=MONTHLY;BYDAY=-1FR", "2018-01-26T09:00:00"),
    ("RRULE:FREQ=MONTHLY;BYDAY=FR;BYMONTHDAY=13", "2018-04-13T09:00:00"),
    ("RRULE:FREQ=MONTHLY;BYMONTHDAY=31", "2018-01-31T09:00:00"),
    ("RRULE:FREQ=MONTHLY;INTERVAL=3;BYMONTHDAY=-1", "2018-01-31T09:00:00"),
    ("RRULE:FREQ=MONTHLY;BYDAY=MO,TU,WE,TH,FR;BYSETPOS=-1", "2018-01-31T09:00:00"),
    ("RRULE:FREQ=MONTHLY;COUNT=4;BYDAY=2TU", "2018-01-09T09:00:00"),
    ("RRULE:FREQ=MONTHLY;BYMONTH=6,7;BYMONTHDAY=1,15", "2018-06-01T09:00:00"),
    ("RRULE:FREQ=YEARLY;BYMONTH=1;BYDAY=SU;BYSETPOS=2", "2017-01-08T09:00:00"),
    ("RRULE:FREQ=YEARLY;BYMONTH=1,2;BYDAY=SU;BYSETPOS=-1", "2017-02-26T09:00:00"),
    ("RRULE:FREQ=YEARLY;BYMONTH=11;BYDAY=4TH", "2017-11-23T09:00:00"),
    ("RRULE:FREQ=YEARLY;BYMONTH=11;BYMONTHDAY=5", "2017-11-05T09:00:00"),
    ("RRULE:FREQ=YEARLY;BYMONTH=3,9", "2017-03-21T09:00:00"),
    ("RRULE:FREQ=YEARLY", "2016-02-29T09:00:00"),
];

fn oracle_dates(rule: &str, start: NaiveDateTime) -> Vec<NaiveDate> {
    let text = format!("DTSTART:{}Z\n{rule}", start.format("%Y%m%dT%H%M%S"));
    let set: RRuleSet = text
        .parse()
        .unwrap_or_else(|err| panic!("Oracle failed to parse {rule}: {err}"));
    set.all(400).dates.iter().map(chrono::DateTime::date_naive).collect()
}

/// ## Summary
/// Walks "now" across two years for each rule and compares against the
/// first expanded date on or after it.
#[test_log::test]
fn next_occurrence_matches_full_expansion() {
    for &(text, start) in ORACLE_RULES {
        let start = at(start).expect("valid start");
        let rule = parse_rrule(text).expect("rule should parse");
        let expanded = oracle_dates(text, start);

        for step in 0..40 {
            let now = start + TimeDelta::days(step * 17 + i64::from(step % 3 == 0) * 5);
            let expected = expanded.iter().find(|date| **date >= now.date()).copied();
            let actual = next_occurrence(&rule, &EvaluationContext::new(start, now))
                .expect("rule should be supported");
            assert_eq!(actual, expected, "{text} from {start} at {now}");
        }
    }
}

#[test_log::test]
fn next_occurrence_before_start_is_the_first_expanded_date() {
    for &(text, start) in ORACLE_RULES {
        let start = at(start).expect("valid start");
        let rule = parse_rrule(text).expect("rule should parse");
        let first = oracle_dates(text, start).first().copied();

        let now = start - TimeDelta::days(45);
        let actual = next_occurrence(&rule, &EvaluationContext::new(start, now))
            .expect("rule should be supported");
        assert_eq!(actual, first, "{text} from {start} before it begins");
    }
}
