//! Properties that hold for every supported rule.

use cadence_core::config::{EvaluationSettings, Settings};
use cadence_rfc::rrule::{
    EvaluationContext, RRule, Weekday, next_occurrence, next_occurrence_with, parse_rrule,
};
use cadence_test::at;
use chrono::{Datelike, NaiveDateTime, TimeDelta};

const ROUND_TRIP_RULES: &[&str] = &[
    "RRULE:FREQ=WEEKLY;BYDAY=WE,TH,FR;INTERVAL=1;UNTIL=20221223T000000Z",
    "RRULE:FREQ=YEARLY;BYMONTH=11;BYMONTHDAY=5;UNTIL=20181223T080000Z",
    "RRULE:WKST=SU;BYDAY=TU,SU;INTERVAL=2;FREQ=WEEKLY",
    "RRULE:FREQ=MONTHLY;BYDAY=+1MO,-1FR;BYSETPOS=1,-1;COUNT=10",
    "RRULE:FREQ=DAILY;BYHOUR=0,12;BYMINUTE=30;BYSECOND=0",
    "RRULE:FREQ=YEARLY;BYYEARDAY=1,-1;BYWEEKNO=-53,20;UNTIL=20300101",
    "RRULE:FREQ=HOURLY;UNTIL=20300101T120000",
];

fn start() -> NaiveDateTime {
    at("2018-01-01T09:00:00").expect("valid start")
}

#[test_log::test]
fn describe_round_trips() {
    for text in ROUND_TRIP_RULES {
        let rule = parse_rrule(text).expect("rule should parse");
        let described = rule.describe();
        let reparsed = parse_rrule(&described).expect("described rule should parse");
        assert_eq!(reparsed, rule, "{text} described as {described}");
        assert_eq!(reparsed.describe(), described);
    }
}

#[test_log::test]
fn weekly_byday_always_has_a_next_date_on_a_listed_weekday() {
    let day_sets: &[&[Weekday]] = &[
        &[Weekday::Monday],
        &[Weekday::Sunday, Weekday::Saturday],
        &[Weekday::Wednesday, Weekday::Thursday, Weekday::Friday],
        &Weekday::all(),
    ];

    for days in day_sets {
        let codes: Vec<&str> = days.iter().map(|day| day.as_str()).collect();
        let rule = parse_rrule(&format!("RRULE:FREQ=WEEKLY;BYDAY={}", codes.join(",")))
            .expect("rule should parse");

        for offset in 0..21 {
            let now = start() + TimeDelta::days(offset) + TimeDelta::hours(offset % 5);
            let next = next_occurrence(&rule, &EvaluationContext::new(start(), now))
                .expect("weekly is supported")
                .expect("weekly without UNTIL or COUNT always has a next date");
            assert!(next >= now.date());
            assert!(days.contains(&Weekday::from(next.weekday())));
        }
    }
}

#[test]
fn evaluation_is_idempotent() {
    let rules = [
        "RRULE:FREQ=WEEKLY;INTERVAL=2;BYDAY=TU",
        "RRULE:FREQ=MONTHLY;BYDAY=2WE",
        "RRULE:FREQ=YEARLY;BYMONTH=7;BYMONTHDAY=4",
    ];
    let ctx = EvaluationContext::new(start(), start() + TimeDelta::days(100));
    for text in rules {
        let rule = parse_rrule(text).expect("rule should parse");
        assert_eq!(next_occurrence(&rule, &ctx), next_occurrence(&rule, &ctx));
    }
}

#[test]
fn until_boundary_is_inclusive() {
    let rule = parse_rrule("RRULE:FREQ=WEEKLY;BYDAY=MO;UNTIL=20180115T090000Z")
        .expect("rule should parse");
    let until = at("2018-01-15T09:00:00").expect("valid date-time");

    let on_boundary = next_occurrence(&rule, &EvaluationContext::new(start(), until));
    assert_eq!(on_boundary, Ok(Some(until.date())));

    let after = until + TimeDelta::seconds(1);
    assert_eq!(
        next_occurrence(&rule, &EvaluationContext::new(start(), after)),
        Ok(None)
    );
}

#[test]
fn loaded_settings_drive_evaluation() {
    let settings = Settings::load().expect("defaults should load");
    let rule = RRule::parse("RRULE:FREQ=YEARLY;BYMONTH=4;BYMONTHDAY=31").expect("rule should parse");
    let ctx = EvaluationContext::new(start(), start());

    assert_eq!(
        next_occurrence_with(&rule, &ctx, &settings.evaluation),
        Ok(None)
    );

    let narrow = EvaluationSettings {
        max_periods: 1,
        ..settings.evaluation
    };
    let monthly = RRule::parse("RRULE:FREQ=MONTHLY;BYMONTHDAY=15").expect("rule should parse");
    assert_eq!(
        next_occurrence_with(&monthly, &EvaluationContext::new(start(), start()), &narrow),
        Ok(Some(start().date() + TimeDelta::days(14)))
    );
}
