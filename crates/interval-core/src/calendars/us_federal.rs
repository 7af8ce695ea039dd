//! US federal holiday calendar.
//!
//! Holidays per 5 U.S.C. 6103 with in-lieu-of observance: a fixed-date
//! holiday on Saturday is observed the Friday before, on Sunday the Monday
//! after.

use chrono::Weekday;

use super::rules::HolidayRule;
use super::Calendar;
use crate::types::Date;

/// A named federal holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FederalHoliday {
    /// Holiday name.
    pub name: &'static str,
    /// Month whose dates are checked against this holiday.
    pub checked_in: u32,
    /// Added to the checked date's year before evaluating the rule.
    pub year_offset: i32,
    /// Date rule.
    pub rule: HolidayRule,
}

/// The fixed US federal holiday table.
///
/// December also checks the following year's New Year's Day, which is
/// observed on December 31 when January 1 is a Saturday.
pub const US_FEDERAL_HOLIDAYS: &[FederalHoliday] = &[
    FederalHoliday {
        name: "New Year's Day",
        checked_in: 1,
        year_offset: 0,
        rule: HolidayRule::Observed { month: 1, day: 1 },
    },
    FederalHoliday {
        name: "Martin Luther King Jr. Day",
        checked_in: 1,
        year_offset: 0,
        rule: HolidayRule::NthWeekday {
            month: 1,
            weekday: Weekday::Mon,
            nth: 2,
        },
    },
    FederalHoliday {
        name: "Presidents' Day",
        checked_in: 2,
        year_offset: 0,
        rule: HolidayRule::NthWeekday {
            month: 2,
            weekday: Weekday::Mon,
            nth: 2,
        },
    },
    FederalHoliday {
        name: "Memorial Day",
        checked_in: 5,
        year_offset: 0,
        rule: HolidayRule::LastWeekday {
            month: 5,
            weekday: Weekday::Mon,
            nth: 0,
        },
    },
    FederalHoliday {
        name: "Juneteenth",
        checked_in: 6,
        year_offset: 0,
        rule: HolidayRule::Observed { month: 6, day: 19 },
    },
    FederalHoliday {
        name: "Independence Day",
        checked_in: 7,
        year_offset: 0,
        rule: HolidayRule::Observed { month: 7, day: 4 },
    },
    FederalHoliday {
        name: "Labor Day",
        checked_in: 9,
        year_offset: 0,
        rule: HolidayRule::NthWeekday {
            month: 9,
            weekday: Weekday::Mon,
            nth: 0,
        },
    },
    FederalHoliday {
        name: "Columbus Day",
        checked_in: 10,
        year_offset: 0,
        rule: HolidayRule::NthWeekday {
            month: 10,
            weekday: Weekday::Mon,
            nth: 1,
        },
    },
    FederalHoliday {
        name: "Veterans Day",
        checked_in: 11,
        year_offset: 0,
        rule: HolidayRule::Observed { month: 11, day: 11 },
    },
    FederalHoliday {
        name: "Thanksgiving Day",
        checked_in: 11,
        year_offset: 0,
        rule: HolidayRule::NthWeekday {
            month: 11,
            weekday: Weekday::Thu,
            nth: 3,
        },
    },
    FederalHoliday {
        name: "Christmas Day",
        checked_in: 12,
        year_offset: 0,
        rule: HolidayRule::Observed { month: 12, day: 25 },
    },
    FederalHoliday {
        name: "New Year's Day",
        checked_in: 12,
        year_offset: 1,
        rule: HolidayRule::Observed { month: 1, day: 1 },
    },
];

impl FederalHoliday {
    /// Returns true if `date` is this holiday's observed date.
    fn observed_on(&self, date: Date) -> bool {
        date.month() == self.checked_in
            && self
                .rule
                .date_in(date.year() + self.year_offset)
                .is_ok_and(|d| d == date)
    }
}

/// US federal government calendar.
///
/// Weekends and the observed dates of the eleven federal holidays are not
/// business days.
#[derive(Debug, Clone, Copy, Default)]
pub struct USFederalCalendar;

impl USFederalCalendar {
    /// Returns the name of the federal holiday observed on `date`, if any.
    #[must_use]
    pub fn holiday_name(&self, date: Date) -> Option<&'static str> {
        US_FEDERAL_HOLIDAYS
            .iter()
            .find(|h| h.observed_on(date))
            .map(|h| h.name)
    }

    /// Observed holiday dates falling in `year`, in date order.
    #[must_use]
    pub fn holidays_in_year(&self, year: i32) -> Vec<(Date, &'static str)> {
        let mut holidays: Vec<_> = US_FEDERAL_HOLIDAYS
            .iter()
            .filter_map(|h| {
                let date = h.rule.date_in(year + h.year_offset).ok()?;
                (date.year() == year && h.observed_on(date)).then_some((date, h.name))
            })
            .collect();
        holidays.sort_by_key(|(date, _)| *date);
        holidays
    }
}

impl Calendar for USFederalCalendar {
    fn name(&self) -> &'static str {
        "US Federal"
    }

    fn is_business_day(&self, date: Date) -> bool {
        if date.is_weekend() {
            return false;
        }
        self.holiday_name(date).is_none()
    }
}
