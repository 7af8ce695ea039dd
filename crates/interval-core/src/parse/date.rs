//! Free-form date parsing.
//!
//! Three grammars are tried in order against the trimmed input, first match
//! wins:
//!
//! 1. `M/D/YYYY` (month/day/year)
//! 2. `YYYY-M-D` (year/month/day)
//! 3. `<MonthName> D[,] YYYY`
//!
//! Whitespace is allowed around the separators. The extracted fields are
//! normalized, so `October 32, 1984` is November 1, 1984.

use regex::{Captures, Regex};
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{IntervalError, IntervalResult};
use crate::types::Date;

/// Lowercase three-letter month abbreviations, January first.
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

struct DatePatterns {
    slash: Regex,
    dash: Regex,
    textual: Regex,
}

fn patterns() -> &'static DatePatterns {
    static PATTERNS: OnceLock<DatePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| DatePatterns {
        slash: Regex::new(r"^([0-9]{1,2})\s*/\s*([0-9]{1,2})\s*/\s*([0-9]{4})$")
            .expect("slash date pattern is valid"),
        dash: Regex::new(r"^([0-9]{4})\s*-\s*([0-9]{1,2})\s*-\s*([0-9]{1,2})$")
            .expect("dash date pattern is valid"),
        textual: Regex::new(r"^([A-Za-z]+)\s+([0-9]{1,2})(?:\s*,\s*|\s+)([0-9]{4})$")
            .expect("textual date pattern is valid"),
    })
}

/// Parses a date in any of the recognized grammars.
///
/// # Errors
///
/// Returns `IntervalError::DateParse` if no grammar matches and
/// `IntervalError::UnknownMonth` if the month name is not recognized.
///
/// # Example
///
/// ```rust
/// use interval_core::parse::parse_date;
///
/// let a = parse_date("10/21/1984").unwrap();
/// let b = parse_date("1984-10-21").unwrap();
/// let c = parse_date("OCT 21, 1984").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(b, c);
/// ```
pub fn parse_date(input: &str) -> IntervalResult<Date> {
    let s = input.trim();
    let p = patterns();

    let (year, month, day) = if let Some(caps) = p.slash.captures(s) {
        (
            field(&caps, 3, input)?,
            field(&caps, 1, input)?,
            field(&caps, 2, input)?,
        )
    } else if let Some(caps) = p.dash.captures(s) {
        (
            field(&caps, 1, input)?,
            field(&caps, 2, input)?,
            field(&caps, 3, input)?,
        )
    } else if let Some(caps) = p.textual.captures(s) {
        let name = &caps[1];
        let month = month_from_name(name).ok_or_else(|| {
            log::debug!("unknown month {name:?} in date {input:?}");
            IntervalError::unknown_month(name, input)
        })?;
        (field(&caps, 3, input)?, i64::from(month), field(&caps, 2, input)?)
    } else {
        log::debug!("no date grammar matched {input:?}");
        return Err(IntervalError::date_parse(input));
    };

    Date::normalize(year, month, day)
}

/// Matches a month name on its first three letters, case-insensitively.
///
/// Returns the month number (1-12).
#[must_use]
pub fn month_from_name(name: &str) -> Option<u32> {
    let prefix = name.get(..3)?.to_ascii_lowercase();
    MONTH_ABBREVIATIONS
        .iter()
        .position(|abbr| *abbr == prefix)
        .map(|i| i as u32 + 1)
}

fn field(caps: &Captures<'_>, index: usize, input: &str) -> IntervalResult<i64> {
    caps[index]
        .parse()
        .map_err(|_| IntervalError::date_parse(input))
}

impl FromStr for Date {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date(s)
    }
}
