//! Interval grammar.
//!
//! ```text
//! interval := term*
//! term     := sign? digits unit
//! sign     := '-' | '+'
//! digits   := [0-9]+            (at most i64::MAX)
//! unit     := [A-Za-z]+         (exact, case-sensitive synonym)
//! ```
//!
//! Spaces may appear between terms and between the parts of a term. Each
//! term is scaled into its base unit and summed into the result.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{IntervalError, IntervalResult};
use crate::types::{Interval, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Unit synonyms and the base interval each one stands for.
const UNIT_SYNONYMS: &[(&str, Interval)] = &[
    ("s", Interval::seconds(1)),
    ("sec", Interval::seconds(1)),
    ("secs", Interval::seconds(1)),
    ("second", Interval::seconds(1)),
    ("seconds", Interval::seconds(1)),
    ("m", Interval::seconds(SECONDS_PER_MINUTE)),
    ("min", Interval::seconds(SECONDS_PER_MINUTE)),
    ("mins", Interval::seconds(SECONDS_PER_MINUTE)),
    ("minute", Interval::seconds(SECONDS_PER_MINUTE)),
    ("minutes", Interval::seconds(SECONDS_PER_MINUTE)),
    ("h", Interval::seconds(SECONDS_PER_HOUR)),
    ("hr", Interval::seconds(SECONDS_PER_HOUR)),
    ("hrs", Interval::seconds(SECONDS_PER_HOUR)),
    ("hour", Interval::seconds(SECONDS_PER_HOUR)),
    ("hours", Interval::seconds(SECONDS_PER_HOUR)),
    ("d", Interval::days(1)),
    ("day", Interval::days(1)),
    ("days", Interval::days(1)),
    ("businessday", Interval::work_days(1)),
    ("businessdays", Interval::work_days(1)),
    ("workday", Interval::work_days(1)),
    ("workdays", Interval::work_days(1)),
    ("w", Interval::weeks(1)),
    ("wk", Interval::weeks(1)),
    ("wks", Interval::weeks(1)),
    ("week", Interval::weeks(1)),
    ("weeks", Interval::weeks(1)),
    ("mon", Interval::months(1)),
    ("mons", Interval::months(1)),
    ("month", Interval::months(1)),
    ("months", Interval::months(1)),
    ("year", Interval::years(1)),
    ("years", Interval::years(1)),
];

/// The unit synonym table, built on first use and never mutated.
pub fn unit_table() -> &'static HashMap<&'static str, Interval> {
    static UNITS: OnceLock<HashMap<&'static str, Interval>> = OnceLock::new();
    UNITS.get_or_init(|| UNIT_SYNONYMS.iter().copied().collect())
}

/// Looks up the base interval for a unit synonym.
#[must_use]
pub fn lookup_unit(unit: &str) -> Option<Interval> {
    unit_table().get(unit).copied()
}

/// Parses a free-form interval such as `"-1 month 5 workdays"`.
///
/// The empty string parses as [`Interval::ZERO`].
///
/// # Errors
///
/// - `IntervalError::IntervalParse` when a magnitude is missing or exceeds `i64::MAX`
/// - `IntervalError::MissingUnit` when a magnitude has no unit
/// - `IntervalError::UnknownUnit` when the unit is not a known synonym
///
/// # Example
///
/// ```rust
/// use interval_core::parse::parse_interval;
/// use interval_core::types::Interval;
///
/// let i = parse_interval("1 year 2 mons -3 days").unwrap();
/// assert_eq!(i, Interval::new(0, -3, 14, 0));
/// ```
pub fn parse_interval(input: &str) -> IntervalResult<Interval> {
    let mut cursor = Cursor::new(input);
    let mut out = Interval::ZERO;

    loop {
        cursor.skip_spaces();
        if cursor.is_done() {
            break;
        }

        let sign = cursor.sign();
        cursor.skip_spaces();
        let magnitude = cursor.digits()?;
        cursor.skip_spaces();
        let unit = cursor.unit()?;

        let base = lookup_unit(unit).ok_or_else(|| {
            log::debug!("unknown unit {unit:?} in interval {input:?}");
            IntervalError::unknown_unit(unit, input)
        })?;

        out = base
            .checked_mul(sign * magnitude)
            .and_then(|term| out.checked_add(term))
            .ok_or_else(|| IntervalError::interval_parse(input))?;
    }

    Ok(out)
}

/// Byte cursor over the interval text.
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn is_done(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn skip_spaces(&mut self) {
        while self.peek() == Some(b' ') {
            self.pos += 1;
        }
    }

    /// Consumes an optional sign, returning -1 or 1.
    fn sign(&mut self) -> i64 {
        match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                -1
            }
            Some(b'+') => {
                self.pos += 1;
                1
            }
            _ => 1,
        }
    }

    /// Consumes `[0-9]+` as a non-negative `i64`.
    fn digits(&mut self) -> IntervalResult<i64> {
        let start = self.pos;
        let mut value: u64 = 0;
        while let Some(c) = self.peek().filter(u8::is_ascii_digit) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(c - b'0')))
                .filter(|v| *v <= i64::MAX as u64)
                .ok_or_else(|| IntervalError::interval_parse(self.input))?;
            self.pos += 1;
        }
        if self.pos == start {
            return Err(IntervalError::interval_parse(self.input));
        }
        Ok(value as i64)
    }

    /// Consumes `[A-Za-z]+`.
    fn unit(&mut self) -> IntervalResult<&'a str> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(IntervalError::missing_unit(self.input));
        }
        Ok(&self.input[start..self.pos])
    }
}
