use cadence_rfc::rrule::ScheduledRule;
use cadence_test::{at, date};

pub struct NextCase {
    pub name: &'static str,
    pub rule: &'static str,
    pub start: &'static str,
    pub now: &'static str,
    pub expected: Option<&'static str>,
}

#[expect(clippy::too_many_lines)]
pub fn rrule_cases() -> Vec<NextCase> {
    vec![
        NextCase {
            name: "weekly_today_matches",
            rule: "RRULE:FREQ=WEEKLY;BYDAY=WE,TH,FR;INTERVAL=1;UNTIL=20221223T000000Z",
            start: "2017-12-20T00:00:00",
            now: "2017-12-20T00:00:00",
            expected: Some("2017-12-20"),
        },
        NextCase {
            name: "weekly_sunday_rolls_forward",
            rule: "RRULE:FREQ=WEEKLY;BYDAY=WE,TH,FR;INTERVAL=1;UNTIL=20221223T000000Z",
            start: "2017-12-20T00:00:00",
            now: "2017-12-24T00:00:00",
            expected: Some("2017-12-27"),
        },
        NextCase {
            name: "weekly_until_passed",
            rule: "RRULE:FREQ=WEEKLY;BYDAY=SU,MO,TH;INTERVAL=1;UNTIL=20171222T000000Z",
            start: "2017-12-01T00:00:00",
            now: "2017-12-23T00:00:00",
            expected: None,
        },
        NextCase {
            name: "weekly_future_start",
            rule: "RRULE:FREQ=WEEKLY;BYDAY=MO",
            start: "2018-01-10T09:00:00",
            now: "2018-01-01T09:00:00",
            expected: Some("2018-01-15"),
        },
        NextCase {
            name: "weekly_count_exhausted",
            rule: "RRULE:FREQ=WEEKLY;COUNT=2;INTERVAL=2;BYDAY=MO",
            start: "2018-01-02T09:00:00",
            now: "2018-01-31T09:00:00",
            expected: None,
        },
        NextCase {
            name: "weekly_wkst_sunday",
            rule: "RRULE:FREQ=WEEKLY;INTERVAL=2;BYDAY=TU,SU;WKST=SU",
            start: "1997-08-05T09:00:00",
            now: "1997-08-06T09:00:00",
            expected: Some("1997-08-17"),
        },
        NextCase {
            name: "monthly_last_friday",
            rule: "RRULE:FREQ=MONTHLY;BYDAY=-1FR",
            start: "2018-01-26T18:00:00",
            now: "2018-01-27T08:00:00",
            expected: Some("2018-02-23"),
        },
        NextCase {
            name: "monthly_friday_the_13th",
            rule: "RRULE:FREQ=MONTHLY;BYDAY=FR;BYMONTHDAY=13",
            start: "2018-04-13T00:00:00",
            now: "2018-04-14T00:00:00",
            expected: Some("2018-07-13"),
        },
        NextCase {
            name: "monthly_quarterly_last_day",
            rule: "RRULE:FREQ=MONTHLY;INTERVAL=3;BYMONTHDAY=-1",
            start: "2018-01-31T00:00:00",
            now: "2018-02-01T00:00:00",
            expected: Some("2018-04-30"),
        },
        NextCase {
            name: "yearly_future_month",
            rule: "RRULE:FREQ=YEARLY;BYMONTH=11;BYMONTHDAY=5;UNTIL=20181223T080000Z",
            start: "2017-11-05T08:00:00",
            now: "2018-03-01T08:00:00",
            expected: Some("2018-11-05"),
        },
        NextCase {
            name: "yearly_rollover",
            rule: "RRULE:FREQ=YEARLY;BYMONTH=11;BYMONTHDAY=5",
            start: "2017-11-05T08:00:00",
            now: "2018-11-06T08:00:00",
            expected: Some("2019-11-05"),
        },
        NextCase {
            name: "yearly_second_sunday_of_january",
            rule: "RRULE:FREQ=YEARLY;BYMONTH=1;BYDAY=SU;BYSETPOS=2",
            start: "2017-01-08T10:00:00",
            now: "2018-01-15T10:00:00",
            expected: Some("2019-01-13"),
        },
        NextCase {
            name: "yearly_fourth_thursday_of_november",
            rule: "RRULE:FREQ=YEARLY;BYMONTH=11;BYDAY=4TH",
            start: "2017-11-23T12:00:00",
            now: "2018-11-23T12:00:00",
            expected: Some("2019-11-28"),
        },
        NextCase {
            name: "yearly_leap_day",
            rule: "RRULE:FREQ=YEARLY",
            start: "2016-02-29T00:00:00",
            now: "2017-01-01T00:00:00",
            expected: Some("2020-02-29"),
        },
        NextCase {
            name: "yearly_impossible_date",
            rule: "RRULE:FREQ=YEARLY;BYMONTH=2;BYMONTHDAY=30",
            start: "2018-01-01T00:00:00",
            now: "2018-01-01T00:00:00",
            expected: None,
        },
    ]
}

pub fn assert_case(case: &NextCase) {
    let start = at(case.start).unwrap_or_else(|err| panic!("Bad start in {}: {err}", case.name));
    let now = at(case.now).unwrap_or_else(|err| panic!("Bad now in {}: {err}", case.name));
    let scheduled = ScheduledRule::parse(case.rule, Some(start))
        .unwrap_or_else(|err| panic!("Failed to parse {}: {err}", case.name));

    let actual = scheduled
        .next_occurrence(now)
        .unwrap_or_else(|err| panic!("Failed to evaluate {}: {err}", case.name));
    let expected = case.expected.map(|value| {
        date(value).unwrap_or_else(|err| panic!("Bad expectation in {}: {err}", case.name))
    });

    assert_eq!(actual, expected, "Case {} did not match", case.name);
}
