//! Calendar date type with overflow normalization.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

use crate::error::{IntervalError, IntervalResult};

/// A proleptic Gregorian calendar date with no time of day and no timezone.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. A `Date` is always a
/// valid calendar date; out-of-range month and day values are rolled over by
/// [`Date::normalize`] rather than rejected.
///
/// # Example
///
/// ```rust
/// use interval_core::types::Date;
///
/// let date = Date::normalize(1984, 10, 32).unwrap();
/// assert_eq!(date, Date::from_ymd(1984, 11, 1).unwrap());
/// assert_eq!(date.to_string(), "1984-11-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `IntervalError::DateOutOfRange` if the fields do not name a real date.
    /// Use [`Date::normalize`] to roll over out-of-range fields instead.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> IntervalResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| IntervalError::out_of_range(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Builds a date from possibly out-of-range fields by sequential calendar
    /// advancement.
    ///
    /// Month 13 is January of the following year, month 0 is December of the
    /// previous year, day 32 of October is November 1 and day 0 is the last
    /// day of the previous month.
    ///
    /// # Errors
    ///
    /// Returns `IntervalError::DateOutOfRange` only when the result falls
    /// outside the range `chrono` can represent.
    pub fn normalize(year: i64, month: i64, day: i64) -> IntervalResult<Self> {
        let overflow = || IntervalError::out_of_range(format!("normalize({year}, {month}, {day})"));

        let total_months = year
            .checked_mul(12)
            .and_then(|m| m.checked_add(month.checked_sub(1)?))
            .ok_or_else(overflow)?;
        let new_year = i32::try_from(total_months.div_euclid(12)).map_err(|_| overflow())?;
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let first = NaiveDate::from_ymd_opt(new_year, new_month, 1).ok_or_else(overflow)?;
        let offset = day.checked_sub(1).ok_or_else(overflow)?;
        Date(first).add_days(offset).map_err(|_| overflow())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Returns the last day of the date's month.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        self.0
            .with_day(self.days_in_month())
            .map_or(*self, Date)
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the date is a weekend (Saturday or Sunday).
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Adds a signed number of calendar days.
    ///
    /// # Errors
    ///
    /// Returns `IntervalError::DateOutOfRange` if the result is not representable.
    pub fn add_days(&self, days: i64) -> IntervalResult<Self> {
        chrono::Duration::try_days(days)
            .and_then(|d| self.0.checked_add_signed(d))
            .map(Date)
            .ok_or_else(|| IntervalError::out_of_range(format!("{self} + {days} days")))
    }

    /// Signed number of days from `other` to `self` (`self - other`).
    ///
    /// Computed from each date's absolute day number, so it is exact across
    /// leap years and century boundaries.
    #[must_use]
    pub fn days_since(&self, other: &Date) -> i64 {
        (self.0 - other.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

/// `YYYY-MM-DD`. Only years 0 through 9999 render in a form `parse_date`
/// accepts; earlier years carry a leading `-` before four digits
/// (`-0001-12-31`) and later years use as many digits as needed.
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year();
        let sign = if year < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{:04}-{:02}-{:02}",
            year.unsigned_abs(),
            self.month(),
            self.day()
        )
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        self.days_since(&other)
    }
}

/// Number of days in `month` of `year`.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Divisible by 4, except centuries unless divisible by 400.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
