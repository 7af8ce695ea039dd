//! Holiday date rules: observed fixed dates and nth weekday of month.

use chrono::Weekday;

use crate::error::IntervalResult;
use crate::types::Date;

/// How a holiday's date is derived for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// A fixed month and day, moved to Friday when it falls on Saturday and
    /// to Monday when it falls on Sunday.
    Observed {
        /// Month (1-12).
        month: u32,
        /// Day of month.
        day: u32,
    },

    /// The `nth` (0-indexed) occurrence of `weekday`, counting from the 1st.
    NthWeekday {
        /// Month (1-12).
        month: u32,
        /// Weekday to count.
        weekday: Weekday,
        /// Zero-based occurrence.
        nth: u32,
    },

    /// The `nth` (0-indexed) occurrence of `weekday`, counting back from the
    /// last day of the month. `nth == 0` is the last occurrence.
    LastWeekday {
        /// Month (1-12).
        month: u32,
        /// Weekday to count.
        weekday: Weekday,
        /// Zero-based occurrence from the end.
        nth: u32,
    },
}

impl HolidayRule {
    /// Month the rule is anchored to.
    #[must_use]
    pub fn month(&self) -> u32 {
        match *self {
            HolidayRule::Observed { month, .. }
            | HolidayRule::NthWeekday { month, .. }
            | HolidayRule::LastWeekday { month, .. } => month,
        }
    }

    /// Returns the date this rule produces in `year`.
    pub fn date_in(&self, year: i32) -> IntervalResult<Date> {
        match *self {
            HolidayRule::Observed { month, day } => observed_date(year, month, day),
            HolidayRule::NthWeekday {
                month,
                weekday,
                nth,
            } => nth_weekday_of_month(year, month, weekday, nth),
            HolidayRule::LastWeekday {
                month,
                weekday,
                nth,
            } => nth_weekday_of_month_reverse(year, month, weekday, nth),
        }
    }
}

/// Shifts a fixed-date holiday off the weekend: Saturday to the preceding
/// Friday, Sunday to the following Monday.
pub fn observed_date(year: i32, month: u32, day: u32) -> IntervalResult<Date> {
    let date = Date::from_ymd(year, month, day)?;
    match date.weekday() {
        Weekday::Sat => date.add_days(-1),
        Weekday::Sun => date.add_days(1),
        _ => Ok(date),
    }
}

/// The `nth` (0-indexed) `weekday` of the month.
///
/// Finds the first `weekday` on or after the 1st, then advances `nth` weeks.
pub fn nth_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    nth: u32,
) -> IntervalResult<Date> {
    let first = Date::from_ymd(year, month, 1)?;
    let offset = (weekday.num_days_from_monday() + 7 - first.weekday().num_days_from_monday()) % 7;
    first.add_days(i64::from(offset) + 7 * i64::from(nth))
}

/// The `nth` (0-indexed) `weekday` of the month counting from the end.
///
/// Finds the last `weekday` on or before the last day, then retreats `nth` weeks.
pub fn nth_weekday_of_month_reverse(
    year: i32,
    month: u32,
    weekday: Weekday,
    nth: u32,
) -> IntervalResult<Date> {
    let last = Date::from_ymd(year, month, 1)?.end_of_month();
    let offset = (last.weekday().num_days_from_monday() + 7 - weekday.num_days_from_monday()) % 7;
    last.add_days(-(i64::from(offset) + 7 * i64::from(nth)))
}
