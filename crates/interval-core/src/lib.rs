//! # Interval Core
//!
//! Parsing of human-written dates and durations, and calendar-correct
//! arithmetic between them, including US federal business days.
//!
//! - **Types**: [`Date`] (always-valid calendar date) and [`Interval`]
//!   (seconds, days, months and work days kept apart)
//! - **Parsing**: `10/21/1984`, `1984-10-21`, `October 21, 1984`;
//!   `-1 month 5 workdays`
//! - **Calendars**: weekends plus observed US federal holidays
//! - **Combination**: months, then work days, then days, then seconds
//!
//! ## Example
//!
//! ```rust
//! use interval_core::prelude::*;
//!
//! let date = parse_date("1/31/1984").unwrap();
//! let interval = parse_interval("1 month").unwrap();
//! let result = apply_interval(date, interval).unwrap();
//!
//! assert_eq!(result.to_string(), "1984-02-29");
//! assert_eq!(interval.to_string(), "1 mon");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod calendars;
pub mod combine;
pub mod config;
pub mod error;
pub mod parse;
pub mod types;


/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{is_business_day, Calendar, USFederalCalendar, WeekendCalendar};
    pub use crate::combine::{apply_interval, IntervalApplier};
    pub use crate::config::{CalendarKind, EngineConfig};
    pub use crate::error::{IntervalError, IntervalResult};
    pub use crate::parse::{parse_date, parse_interval};
    pub use crate::types::{Date, Interval, Weekday};
}

// Re-export commonly used types at crate root
pub use combine::apply_interval;
pub use error::{IntervalError, IntervalResult};
pub use parse::{parse_date, parse_interval};
pub use types::{Date, Interval};
