//! Business day calendars.
//!
//! This module provides:
//! - The [`Calendar`] trait and business-day stepping
//! - The US federal holiday calendar
//! - Holiday rules (observed fixed dates, nth weekday of month)

mod rules;
mod us_federal;

pub use rules::{nth_weekday_of_month, nth_weekday_of_month_reverse, observed_date, HolidayRule};
pub use us_federal::{FederalHoliday, USFederalCalendar, US_FEDERAL_HOLIDAYS};

use crate::error::IntervalResult;
use crate::types::Date;

/// Trait for business day calendars.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is not a business day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Moves `days` business days from `date`.
    ///
    /// Each step moves one calendar day in the direction of `days`, then keeps
    /// moving while the landed-on day is not a business day. The cost is linear
    /// in `|days|` plus the weekends and holidays crossed.
    fn add_business_days(&self, date: Date, days: i64) -> IntervalResult<Date> {
        let direction = days.signum();
        let mut result = date;

        for _ in 0..days.unsigned_abs() {
            result = result.add_days(direction)?;
            while !self.is_business_day(result) {
                result = result.add_days(direction)?;
            }
        }

        Ok(result)
    }

    /// Returns the next business day on or after the given date.
    fn next_business_day(&self, date: Date) -> IntervalResult<Date> {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(1)?;
        }
        Ok(result)
    }

    /// Returns the previous business day on or before the given date.
    fn previous_business_day(&self, date: Date) -> IntervalResult<Date> {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(-1)?;
        }
        Ok(result)
    }

    /// Counts business days after `start` up to and including `end`.
    ///
    /// Negative when `end` is before `start`.
    fn business_days_between(&self, start: Date, end: Date) -> i64 {
        let (from, to, sign) = if start <= end {
            (start, end, 1)
        } else {
            (end, start, -1)
        };

        let count = from
            .as_naive_date()
            .iter_days()
            .skip(1)
            .take_while(|d| *d <= to.as_naive_date())
            .filter(|d| self.is_business_day(Date::from(*d)))
            .count();

        count as i64 * sign
    }
}

/// A weekend-only calendar (no holidays).
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}

/// Returns true if `date` is neither a weekend nor an observed US federal holiday.
#[must_use]
pub fn is_business_day(date: Date) -> bool {
    USFederalCalendar.is_business_day(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_weekend_calendar() {
        let cal = WeekendCalendar;

        assert!(cal.is_business_day(ymd(2025, 1, 6)));
        assert!(!cal.is_business_day(ymd(2025, 1, 4)));
        assert!(cal.is_holiday(ymd(2025, 1, 5)));
        // New Year's Day is an ordinary weekday here
        assert!(cal.is_business_day(ymd(2025, 1, 1)));
    }

    #[test]
    fn test_add_business_days() {
        let cal = WeekendCalendar;

        let friday = ymd(2025, 1, 3);
        assert_eq!(cal.add_business_days(friday, 1).unwrap(), ymd(2025, 1, 6));
        assert_eq!(cal.add_business_days(friday, -5).unwrap(), ymd(2024, 12, 27));
        assert_eq!(cal.add_business_days(friday, 0).unwrap(), friday);

        // Starting on a weekend still counts the first business day as one step
        let saturday = ymd(2025, 1, 4);
        assert_eq!(cal.add_business_days(saturday, 1).unwrap(), ymd(2025, 1, 6));
    }

    #[test]
    fn test_federal_add_business_days() {
        let cal = USFederalCalendar;

        // Presidents' Day 2023-02-20
        let friday = ymd(2023, 2, 17);
        assert_eq!(cal.add_business_days(friday, 1).unwrap(), ymd(2023, 2, 21));
        assert_eq!(cal.add_business_days(ymd(2023, 2, 21), -1).unwrap(), friday);
    }

    #[test]
    fn test_next_previous_business_day() {
        let cal = USFederalCalendar;

        // Saturday 2023-12-23, Christmas on Monday
        let saturday = ymd(2023, 12, 23);
        assert_eq!(cal.next_business_day(saturday).unwrap(), ymd(2023, 12, 26));
        assert_eq!(cal.previous_business_day(saturday).unwrap(), ymd(2023, 12, 22));

        let tuesday = ymd(2023, 12, 26);
        assert_eq!(cal.next_business_day(tuesday).unwrap(), tuesday);
    }

    #[test]
    fn test_business_days_between() {
        let cal = WeekendCalendar;

        let monday = ymd(2025, 1, 6);
        let friday = ymd(2025, 1, 10);
        assert_eq!(cal.business_days_between(monday, friday), 4);
        assert_eq!(cal.business_days_between(friday, monday), -4);
        assert_eq!(cal.business_days_between(monday, monday), 0);

        // Thanksgiving week 2023: Thu 23 is a holiday
        let fed = USFederalCalendar;
        assert_eq!(fed.business_days_between(ymd(2023, 11, 20), ymd(2023, 11, 24)), 3);
    }

    #[test]
    fn test_free_function() {
        assert!(!is_business_day(ymd(2023, 7, 4)));
        assert!(is_business_day(ymd(2023, 7, 5)));
    }

    #[test]
    fn test_calendar_names() {
        assert_eq!(WeekendCalendar.name(), "Weekend Only");
        assert_eq!(USFederalCalendar.name(), "US Federal");
    }
}
