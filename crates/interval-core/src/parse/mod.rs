//! Parsers for free-form date and interval text.

mod date;
mod interval;

pub use date::{month_from_name, parse_date};
pub use interval::{lookup_unit, parse_interval, unit_table};
