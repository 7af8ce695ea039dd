//! Interval value type and its algebra.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg};
use std::str::FromStr;

use crate::error::IntervalError;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Seconds in one minute.
pub const SECONDS_PER_MINUTE: i64 = 60;

/// A duration made of four independent signed components.
///
/// No carrying happens between fields: a month is not a fixed number of days
/// and a work day depends on the calendar, so the components are kept apart
/// until the interval is applied to a concrete [`Date`](crate::types::Date).
///
/// # Example
///
/// ```rust
/// use interval_core::types::Interval;
///
/// let i = Interval::months(14) + Interval::work_days(3) + Interval::seconds(3661);
/// assert_eq!(i.to_string(), "1 year 2 mons 3 workdays 01:01:01");
/// assert_eq!(Interval::ZERO.to_string(), "00:00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Interval {
    seconds: i64,
    days: i64,
    months: i64,
    work_days: i64,
}

impl Interval {
    /// The zero interval.
    pub const ZERO: Interval = Interval::new(0, 0, 0, 0);

    /// Creates an interval from all four components.
    #[must_use]
    pub const fn new(seconds: i64, days: i64, months: i64, work_days: i64) -> Self {
        Self {
            seconds,
            days,
            months,
            work_days,
        }
    }

    /// An interval of `n` wall-clock seconds.
    #[must_use]
    pub const fn seconds(n: i64) -> Self {
        Self::new(n, 0, 0, 0)
    }

    /// An interval of `n` calendar days.
    #[must_use]
    pub const fn days(n: i64) -> Self {
        Self::new(0, n, 0, 0)
    }

    /// An interval of `n` weeks, stored as `7 * n` days (wrapping).
    #[must_use]
    pub const fn weeks(n: i64) -> Self {
        Self::new(0, n.wrapping_mul(7), 0, 0)
    }

    /// An interval of `n` calendar months.
    #[must_use]
    pub const fn months(n: i64) -> Self {
        Self::new(0, 0, n, 0)
    }

    /// An interval of `n` years, stored as `12 * n` months (wrapping).
    #[must_use]
    pub const fn years(n: i64) -> Self {
        Self::new(0, 0, n.wrapping_mul(12), 0)
    }

    /// An interval of `n` business days.
    #[must_use]
    pub const fn work_days(n: i64) -> Self {
        Self::new(0, 0, 0, n)
    }

    /// Seconds component.
    #[must_use]
    pub const fn seconds_part(&self) -> i64 {
        self.seconds
    }

    /// Days component.
    #[must_use]
    pub const fn days_part(&self) -> i64 {
        self.days
    }

    /// Months component.
    #[must_use]
    pub const fn months_part(&self) -> i64 {
        self.months
    }

    /// Work-days component.
    #[must_use]
    pub const fn work_days_part(&self) -> i64 {
        self.work_days
    }

    /// Returns true if every component is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Multiplies every component by `scalar`, returning `None` on overflow.
    #[must_use]
    pub fn checked_mul(self, scalar: i64) -> Option<Self> {
        Some(Self {
            seconds: self.seconds.checked_mul(scalar)?,
            days: self.days.checked_mul(scalar)?,
            months: self.months.checked_mul(scalar)?,
            work_days: self.work_days.checked_mul(scalar)?,
        })
    }

    /// Adds two intervals component-wise, returning `None` on overflow.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self {
            seconds: self.seconds.checked_add(other.seconds)?,
            days: self.days.checked_add(other.days)?,
            months: self.months.checked_add(other.months)?,
            work_days: self.work_days.checked_add(other.work_days)?,
        })
    }
}

/// Component-wise addition. Overflow wraps in two's complement in every
/// build profile; use [`Interval::checked_add`] to detect it.
impl Add for Interval {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            seconds: self.seconds.wrapping_add(other.seconds),
            days: self.days.wrapping_add(other.days),
            months: self.months.wrapping_add(other.months),
            work_days: self.work_days.wrapping_add(other.work_days),
        }
    }
}

/// Component-wise scaling. Overflow wraps in two's complement in every
/// build profile; use [`Interval::checked_mul`] to detect it.
impl Mul<i64> for Interval {
    type Output = Self;

    fn mul(self, scalar: i64) -> Self::Output {
        Self {
            seconds: self.seconds.wrapping_mul(scalar),
            days: self.days.wrapping_mul(scalar),
            months: self.months.wrapping_mul(scalar),
            work_days: self.work_days.wrapping_mul(scalar),
        }
    }
}

/// Negation wraps: a component of `i64::MIN` stays `i64::MIN`.
impl Neg for Interval {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self * -1
    }
}

impl Sum for Interval {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Renders `value` with the singular unit when it is exactly 1 or -1.
fn write_count(
    f: &mut fmt::Formatter<'_>,
    first: &mut bool,
    value: i64,
    singular: &str,
    plural: &str,
) -> fmt::Result {
    if !*first {
        f.write_str(" ")?;
    }
    *first = false;
    let unit = if value.unsigned_abs() == 1 { singular } else { plural };
    write!(f, "{value} {unit}")
}

impl fmt::Display for Interval {
    /// Canonical form: years, months, work days, days, then `HH:MM:SS`,
    /// omitting zero components. The zero interval renders as `00:00:00`.
    ///
    /// Negative seconds render as a leading `-` followed by the magnitude.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("00:00:00");
        }

        let mut first = true;
        let mut months = self.months;
        if months.unsigned_abs() > 11 {
            write_count(f, &mut first, months / 12, "year", "years")?;
            months %= 12;
        }
        if months != 0 {
            write_count(f, &mut first, months, "mon", "mons")?;
        }
        if self.work_days != 0 {
            write_count(f, &mut first, self.work_days, "workday", "workdays")?;
        }
        if self.days != 0 {
            write_count(f, &mut first, self.days, "day", "days")?;
        }
        if self.seconds != 0 {
            if !first {
                f.write_str(" ")?;
            }
            let sign = if self.seconds < 0 { "-" } else { "" };
            let total = self.seconds.unsigned_abs();
            let hours = total / SECONDS_PER_HOUR as u64;
            let minutes = total / SECONDS_PER_MINUTE as u64 % 60;
            let seconds = total % 60;
            write!(f, "{sign}{hours:02}:{minutes:02}:{seconds:02}")?;
        }
        Ok(())
    }
}

impl FromStr for Interval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_interval(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let a = Interval::new(1, 2, 3, 4);
        let b = Interval::new(10, -20, 30, -40);
        assert_eq!(a + b, Interval::new(11, -18, 33, -36));
        assert_eq!(a + Interval::ZERO, a);
    }

    #[test]
    fn test_mul() {
        let a = Interval::new(1, -2, 3, 4);
        assert_eq!(a * 3, Interval::new(3, -6, 9, 12));
        assert_eq!(a * 1, a);
        assert_eq!(a * 0, Interval::ZERO);
        assert_eq!(-a, Interval::new(-1, 2, -3, -4));
    }

    #[test]
    fn test_checked_ops() {
        assert_eq!(Interval::days(i64::MAX).checked_mul(2), None);
        assert_eq!(Interval::days(2).checked_mul(3), Some(Interval::days(6)));
        assert_eq!(Interval::months(i64::MAX).checked_add(Interval::months(1)), None);
    }

    #[test]
    fn test_arithmetic_wraps_at_limits() {
        let max = "9223372036854775807 s".parse::<Interval>().unwrap();
        let one = "1 s".parse::<Interval>().unwrap();
        assert_eq!(max + one, Interval::seconds(i64::MIN));

        let half = "4611686018427387904 s".parse::<Interval>().unwrap();
        assert_eq!(half * 2, Interval::seconds(i64::MIN));
        assert_eq!(half.checked_mul(2), None);

        let min = Interval::new(i64::MIN, i64::MIN, i64::MIN, i64::MIN);
        assert_eq!(-min, min);
        assert_eq!(-Interval::days(i64::MAX), Interval::days(-i64::MAX));

        assert_eq!(Interval::weeks(i64::MAX), Interval::days(i64::MAX.wrapping_mul(7)));
        assert_eq!(Interval::years(i64::MIN), Interval::months(0));
        assert_eq!(Interval::years(i64::MAX), Interval::months(-12));
    }

    #[test]
    fn test_sum() {
        let total: Interval = [Interval::days(1), Interval::weeks(1), Interval::years(1)]
            .into_iter()
            .sum();
        assert_eq!(total, Interval::new(0, 8, 12, 0));
    }

    #[test]
    fn test_display_zero() {
        assert_eq!(Interval::ZERO.to_string(), "00:00:00");
    }

    #[test]
    fn test_display_singular_plural() {
        assert_eq!(Interval::days(1).to_string(), "1 day");
        assert_eq!(Interval::days(-1).to_string(), "-1 day");
        assert_eq!(Interval::days(2).to_string(), "2 days");
        assert_eq!(Interval::months(1).to_string(), "1 mon");
        assert_eq!(Interval::months(-3).to_string(), "-3 mons");
        assert_eq!(Interval::work_days(1).to_string(), "1 workday");
        assert_eq!(Interval::work_days(666).to_string(), "666 workdays");
    }

    #[test]
    fn test_display_year_folding() {
        assert_eq!(Interval::months(11).to_string(), "11 mons");
        assert_eq!(Interval::months(12).to_string(), "1 year");
        assert_eq!(Interval::months(13).to_string(), "1 year 1 mon");
        assert_eq!(Interval::months(26).to_string(), "2 years 2 mons");
        assert_eq!(Interval::months(-12).to_string(), "-1 year");
        assert_eq!(Interval::months(-14).to_string(), "-1 year -2 mons");
    }

    #[test]
    fn test_display_time() {
        assert_eq!(Interval::seconds(1).to_string(), "00:00:01");
        assert_eq!(Interval::seconds(3661).to_string(), "01:01:01");
        assert_eq!(Interval::seconds(-5400).to_string(), "-01:30:00");
        assert_eq!(Interval::seconds(100 * 3600).to_string(), "100:00:00");
    }

    #[test]
    fn test_display_order() {
        let i = Interval::new(90, 2, 25, -1);
        assert_eq!(i.to_string(), "2 years 1 mon -1 workday 2 days 00:01:30");
    }

    #[test]
    fn test_serde_missing_fields_default_to_zero() {
        let i: Interval = serde_json::from_str(r#"{"days": 3, "work_days": -2}"#).unwrap();
        assert_eq!(i, Interval::new(0, 3, 0, -2));

        let json = serde_json::to_string(&i).unwrap();
        let back: Interval = serde_json::from_str(&json).unwrap();
        assert_eq!(back, i);
    }
}
