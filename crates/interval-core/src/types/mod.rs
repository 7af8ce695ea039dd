//! Value types for date and interval arithmetic.
//!
//! - [`Date`]: Proleptic Gregorian calendar date, always valid
//! - [`Interval`]: Seconds, days, months and work days kept as separate components

mod date;
mod interval;

pub use chrono::Weekday;
pub use date::Date;
pub use interval::{Interval, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
