//! Applying an [`Interval`] to a [`Date`].
//!
//! The components are applied one at a time, each stage working on the
//! previous stage's output:
//!
//! 1. months, clamped to the end of a shorter target month
//! 2. work days, stepping over weekends and holidays
//! 3. calendar days
//! 4. seconds, rolling across midnight
//!
//! Folding everything into a single normalization gives different answers
//! around month ends, so the order is fixed.

use std::fmt;

use crate::calendars::{Calendar, USFederalCalendar};
use crate::config::EngineConfig;
use crate::error::{IntervalError, IntervalResult};
use crate::types::{Date, Interval};

/// Seconds in one calendar day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Every Gregorian month has at least 28 days. A month addition that starts
/// above this day-of-month and lands at or below it has rolled into the
/// following month.
pub const MONTH_ROLLOVER_THRESHOLD: u32 = 27;

/// Log a debug line when a work-day scan is at least this long.
const LONG_SCAN_WORK_DAYS: u64 = 10_000;

impl Date {
    /// Adds calendar months, clamping to the last day of a shorter target month.
    ///
    /// Jan 31 + 1 month is Feb 28 (or 29), not Mar 3.
    pub fn add_months_clamped(&self, months: i64) -> IntervalResult<Date> {
        let month = i64::from(self.month())
            .checked_add(months)
            .ok_or_else(|| IntervalError::out_of_range(format!("{self} + {months} months")))?;
        let mut moved = Date::normalize(i64::from(self.year()), month, i64::from(self.day()))?;

        if moved.day() < self.day() && self.day() > MONTH_ROLLOVER_THRESHOLD {
            while moved.day() <= MONTH_ROLLOVER_THRESHOLD {
                moved = moved.add_days(-1)?;
            }
        }
        Ok(moved)
    }

    /// Adds wall-clock seconds to midnight of this date and returns the
    /// resulting date. Negative values roll back across midnight.
    pub fn add_seconds(&self, seconds: i64) -> IntervalResult<Date> {
        self.add_days(seconds.div_euclid(SECONDS_PER_DAY))
    }

    /// Applies `interval` using the US federal calendar.
    pub fn add_interval(&self, interval: Interval) -> IntervalResult<Date> {
        apply_interval(*self, interval)
    }

    /// Applies the negation of `interval` using the US federal calendar.
    pub fn sub_interval(&self, interval: Interval) -> IntervalResult<Date> {
        let negated = interval
            .checked_mul(-1)
            .ok_or_else(|| IntervalError::out_of_range(format!("-({interval})")))?;
        apply_interval(*self, negated)
    }
}

/// Applies intervals to dates against a business-day calendar.
///
/// # Example
///
/// ```rust
/// use interval_core::combine::IntervalApplier;
/// use interval_core::parse::{parse_date, parse_interval};
///
/// let applier = IntervalApplier::default();
/// let date = parse_date("12/30/2021").unwrap();
/// let next = applier.apply(date, parse_interval("1 workday").unwrap()).unwrap();
/// assert_eq!(next.to_string(), "2022-01-03");
/// ```
pub struct IntervalApplier {
    calendar: Box<dyn Calendar>,
    max_work_days: Option<u64>,
}

impl fmt::Debug for IntervalApplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalApplier")
            .field("calendar", &self.calendar.name())
            .field("max_work_days", &self.max_work_days)
            .finish()
    }
}

impl Default for IntervalApplier {
    fn default() -> Self {
        Self::new(USFederalCalendar)
    }
}

impl IntervalApplier {
    /// Creates an applier over the given calendar with no work-day limit.
    pub fn new<C: Calendar + 'static>(calendar: C) -> Self {
        Self {
            calendar: Box::new(calendar),
            max_work_days: None,
        }
    }

    /// Creates an applier from a validated configuration.
    pub fn from_config(config: &EngineConfig) -> IntervalResult<Self> {
        config.validate()?;
        Ok(Self {
            calendar: config.calendar.calendar(),
            max_work_days: config.max_work_days,
        })
    }

    /// Limits the absolute work-day count a single interval may request.
    #[must_use]
    pub fn with_max_work_days(mut self, limit: u64) -> Self {
        self.max_work_days = Some(limit);
        self
    }

    /// The business-day calendar in use.
    pub fn calendar(&self) -> &dyn Calendar {
        self.calendar.as_ref()
    }

    /// Applies `interval` to `date`: months, then work days, then days, then seconds.
    ///
    /// # Errors
    ///
    /// - `IntervalError::WorkDayLimit` if the work-day count exceeds the configured limit
    /// - `IntervalError::DateOutOfRange` if any stage leaves the representable range
    pub fn apply(&self, date: Date, interval: Interval) -> IntervalResult<Date> {
        let mut result = date;

        let months = interval.months_part();
        if months != 0 {
            result = result.add_months_clamped(months)?;
            log::trace!("{date} + {months} months -> {result}");
        }

        let work_days = interval.work_days_part();
        if work_days != 0 {
            let requested = work_days.unsigned_abs();
            if let Some(limit) = self.max_work_days {
                if requested > limit {
                    return Err(IntervalError::WorkDayLimit { requested, limit });
                }
            }
            if requested >= LONG_SCAN_WORK_DAYS {
                log::debug!(
                    "scanning {requested} work days on {} calendar from {result}",
                    self.calendar.name()
                );
            }
            let before = result;
            result = self.calendar.add_business_days(result, work_days)?;
            log::trace!("{before} + {work_days} work days -> {result}");
        }

        let days = interval.days_part();
        if days != 0 {
            let before = result;
            result = result.add_days(days)?;
            log::trace!("{before} + {days} days -> {result}");
        }

        let seconds = interval.seconds_part();
        if seconds != 0 {
            let before = result;
            result = result.add_seconds(seconds)?;
            log::trace!("{before} + {seconds} seconds -> {result}");
        }

        Ok(result)
    }
}

/// Applies `interval` to `date` using the US federal calendar and no work-day limit.
pub fn apply_interval(date: Date, interval: Interval) -> IntervalResult<Date> {
    IntervalApplier::default().apply(date, interval)
}
