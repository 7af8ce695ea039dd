//! Integration tests for the public parse / apply / render surface.

use interval_core::calendars::{
    nth_weekday_of_month, nth_weekday_of_month_reverse, Calendar, USFederalCalendar,
};
use interval_core::config::{CalendarKind, EngineConfig};
use interval_core::prelude::*;

fn ymd(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn test_date_grammars_agree() {
    let dates: Vec<Date> = [
        "10/21/1984",
        "1984-10-21",
        "October 21, 1984",
        "October 21 1984",
        "OCT 21, 1984",
    ]
    .iter()
    .map(|s| parse_date(s).unwrap())
    .collect();

    assert!(dates.iter().all(|d| *d == ymd(1984, 10, 21)));
    assert_eq!(dates[0].to_string(), "1984-10-21");
}

#[test]
fn test_interval_fixtures() {
    assert_eq!(parse_interval("1 day").unwrap(), Interval::days(1));
    assert_eq!(parse_interval("1 month").unwrap(), Interval::months(1));
    assert_eq!(parse_interval("1 second").unwrap(), Interval::seconds(1));
    assert_eq!(parse_interval("666 businessdays").unwrap(), Interval::work_days(666));
}

#[test]
fn test_apply_fixtures() {
    let cases = [
        (ymd(1984, 10, 31), Interval::months(1), ymd(1984, 11, 30)),
        (ymd(1984, 1, 31), Interval::months(1), ymd(1984, 2, 29)),
        (ymd(1985, 1, 31), Interval::months(1), ymd(1985, 2, 28)),
        (ymd(2021, 12, 30), Interval::work_days(1), ymd(2022, 1, 3)),
        (ymd(2023, 2, 17), Interval::work_days(1), ymd(2023, 2, 21)),
    ];
    for (date, interval, expected) in cases {
        assert_eq!(apply_interval(date, interval).unwrap(), expected);
    }
}

#[test]
fn test_holiday_weekday_of_month() {
    assert_eq!(
        nth_weekday_of_month(2023, 2, Weekday::Mon, 0).unwrap(),
        ymd(2023, 2, 6)
    );
    assert_eq!(
        nth_weekday_of_month_reverse(2023, 2, Weekday::Mon, 0).unwrap(),
        ymd(2023, 2, 27)
    );
}

#[test]
fn test_end_to_end_from_text() {
    let date: Date = "Dec 22, 2023".parse().unwrap();
    let interval: Interval = "1 workday 1 week -2 days 25 hours".parse().unwrap();
    // Tue Dec 26 (Christmas skipped) + 7 - 2 days = Sun Dec 31, + 25h = Jan 1
    assert_eq!(apply_interval(date, interval).unwrap(), ymd(2024, 1, 1));
    assert_eq!(interval.to_string(), "1 workday 5 days 25:00:00");
}

#[test]
fn test_errors_carry_input() {
    let err = parse_date("sometime soon").unwrap_err();
    assert!(err.is_parse_error());
    assert!(err.to_string().contains("sometime soon"));

    let err = parse_interval("3 lightyears").unwrap_err();
    assert_eq!(
        err,
        IntervalError::UnknownUnit {
            unit: "lightyears".to_string(),
            input: "3 lightyears".to_string(),
        }
    );
}

#[test]
fn test_configured_applier() {
    let config = EngineConfig::from_json(r#"{"calendar": "weekend_only", "max_work_days": 100}"#)
        .unwrap();
    assert_eq!(config.calendar, CalendarKind::WeekendOnly);

    let applier = IntervalApplier::from_config(&config).unwrap();
    // Independence Day is an ordinary Tuesday on a weekend-only calendar
    assert_eq!(
        applier.apply(ymd(2023, 7, 3), Interval::work_days(1)).unwrap(),
        ymd(2023, 7, 4)
    );
    assert!(matches!(
        applier.apply(ymd(2023, 7, 3), Interval::work_days(101)),
        Err(IntervalError::WorkDayLimit { .. })
    ));
}

#[test]
fn test_business_day_rules_for_2024() {
    let cal = USFederalCalendar;
    let holidays = [
        ymd(2024, 1, 1),
        ymd(2024, 1, 15),
        ymd(2024, 2, 19),
        ymd(2024, 5, 27),
        ymd(2024, 6, 19),
        ymd(2024, 7, 4),
        ymd(2024, 9, 2),
        ymd(2024, 10, 14),
        ymd(2024, 11, 11),
        ymd(2024, 11, 28),
        ymd(2024, 12, 25),
    ];
    for date in holidays {
        assert!(!is_business_day(date), "{date}");
        assert!(cal.holiday_name(date).is_some(), "{date}");
    }
    assert_eq!(cal.business_days_between(ymd(2023, 12, 31), ymd(2024, 12, 31)), 251);
}
