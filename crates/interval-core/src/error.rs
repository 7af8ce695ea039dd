//! Error types for interval-core.
//!
//! Every failure is detected locally and synchronously. Parse errors mean the
//! caller supplied invalid input; they are never transient.

use thiserror::Error;

/// A specialized Result type for interval-core operations.
pub type IntervalResult<T> = Result<T, IntervalError>;

/// The main error type for date and interval operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    /// The input matched none of the recognized date grammars.
    #[error("Cannot parse date {input:?}")]
    DateParse {
        /// The original input text.
        input: String,
    },

    /// The textual date grammar matched but the month name is not recognized.
    #[error("Unknown month {month:?} in date {input:?}")]
    UnknownMonth {
        /// The month word as written.
        month: String,
        /// The original input text.
        input: String,
    },

    /// A magnitude was missing, malformed, or overflowed.
    #[error("Cannot parse interval {input:?}")]
    IntervalParse {
        /// The original input text.
        input: String,
    },

    /// A magnitude was not followed by a unit.
    #[error("Missing unit in interval {input:?}")]
    MissingUnit {
        /// The original input text.
        input: String,
    },

    /// The unit text is not one of the known synonyms.
    #[error("Unknown unit {unit:?} in interval {input:?}")]
    UnknownUnit {
        /// The offending unit text.
        unit: String,
        /// The original input text.
        input: String,
    },

    /// Arithmetic left the representable date range.
    #[error("Date out of range: {message}")]
    DateOutOfRange {
        /// Description of the computation that overflowed.
        message: String,
    },

    /// A work-day interval exceeded the configured scan limit.
    #[error("Work-day count {requested} exceeds configured limit of {limit}")]
    WorkDayLimit {
        /// Absolute number of work days requested.
        requested: u64,
        /// Configured maximum.
        limit: u64,
    },

    /// Configuration error.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the configuration error.
        reason: String,
    },
}

impl IntervalError {
    /// Creates a date parse error.
    #[must_use]
    pub fn date_parse(input: impl Into<String>) -> Self {
        Self::DateParse {
            input: input.into(),
        }
    }

    /// Creates an unknown month error.
    #[must_use]
    pub fn unknown_month(month: impl Into<String>, input: impl Into<String>) -> Self {
        Self::UnknownMonth {
            month: month.into(),
            input: input.into(),
        }
    }

    /// Creates an interval parse error.
    #[must_use]
    pub fn interval_parse(input: impl Into<String>) -> Self {
        Self::IntervalParse {
            input: input.into(),
        }
    }

    /// Creates a missing unit error.
    #[must_use]
    pub fn missing_unit(input: impl Into<String>) -> Self {
        Self::MissingUnit {
            input: input.into(),
        }
    }

    /// Creates an unknown unit error.
    #[must_use]
    pub fn unknown_unit(unit: impl Into<String>, input: impl Into<String>) -> Self {
        Self::UnknownUnit {
            unit: unit.into(),
            input: input.into(),
        }
    }

    /// Creates a date out of range error.
    #[must_use]
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::DateOutOfRange {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Returns true if the error was caused by malformed date or interval text.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::DateParse { .. }
                | Self::UnknownMonth { .. }
                | Self::IntervalParse { .. }
                | Self::MissingUnit { .. }
                | Self::UnknownUnit { .. }
        )
    }
}
