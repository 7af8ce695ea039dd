//! Engine configuration.
//!
//! Selects the business-day calendar used for work-day stepping and an
//! optional guard on how many work days a single interval may request.

use serde::{Deserialize, Serialize};

use crate::calendars::{Calendar, USFederalCalendar, WeekendCalendar};
use crate::error::{IntervalError, IntervalResult};

/// Business-day calendar selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarKind {
    /// Weekends plus observed US federal holidays.
    #[default]
    UsFederal,

    /// Weekends only.
    WeekendOnly,
}

impl CalendarKind {
    /// Builds the calendar this kind names.
    #[must_use]
    pub fn calendar(&self) -> Box<dyn Calendar> {
        match self {
            CalendarKind::UsFederal => Box::new(USFederalCalendar),
            CalendarKind::WeekendOnly => Box::new(WeekendCalendar),
        }
    }
}

impl std::fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CalendarKind::UsFederal => "US Federal",
            CalendarKind::WeekendOnly => "Weekend Only",
        };
        write!(f, "{name}")
    }
}

/// Configuration for [`IntervalApplier`](crate::combine::IntervalApplier).
///
/// # Example
///
/// ```rust
/// use interval_core::config::{CalendarKind, EngineConfig};
///
/// let config = EngineConfig::from_json(r#"{"max_work_days": 5000}"#).unwrap();
/// assert_eq!(config.calendar, CalendarKind::UsFederal);
/// assert_eq!(config.max_work_days, Some(5000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Calendar used for work-day stepping.
    #[serde(default)]
    pub calendar: CalendarKind,

    /// Largest absolute work-day count a single interval may request.
    /// `None` means unlimited.
    #[serde(default)]
    pub max_work_days: Option<u64>,
}

impl EngineConfig {
    /// Creates the default configuration: US federal calendar, no work-day limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the business-day calendar.
    #[must_use]
    pub fn with_calendar(mut self, calendar: CalendarKind) -> Self {
        self.calendar = calendar;
        self
    }

    /// Sets the work-day limit.
    #[must_use]
    pub fn with_max_work_days(mut self, limit: u64) -> Self {
        self.max_work_days = Some(limit);
        self
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> IntervalResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| IntervalError::config(format!("invalid JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to pretty JSON.
    pub fn to_json(&self) -> IntervalResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| IntervalError::config(e.to_string()))
    }

    /// Checks the configuration for values that can never be satisfied.
    pub fn validate(&self) -> IntervalResult<()> {
        if self.max_work_days == Some(0) {
            return Err(IntervalError::config(
                "max_work_days must be positive; omit it for no limit",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::new();
        assert_eq!(config.calendar, CalendarKind::UsFederal);
        assert_eq!(config.max_work_days, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .with_calendar(CalendarKind::WeekendOnly)
            .with_max_work_days(10);
        assert_eq!(config.calendar, CalendarKind::WeekendOnly);
        assert_eq!(config.max_work_days, Some(10));
    }

    #[test]
    fn test_json_round_trip() {
        let config = EngineConfig::new()
            .with_calendar(CalendarKind::WeekendOnly)
            .with_max_work_days(250);
        let json = config.to_json().unwrap();
        assert!(json.contains("\"weekend_only\""));
        assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(EngineConfig::from_json("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        let err = EngineConfig::from_json(r#"{"calendar": "lunar"}"#).unwrap_err();
        assert!(matches!(err, IntervalError::Config { .. }));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = EngineConfig::from_json(r#"{"max_work_days": 0}"#).unwrap_err();
        assert!(err.to_string().contains("max_work_days"));
    }

    #[test]
    fn test_calendar_kind() {
        assert_eq!(CalendarKind::UsFederal.calendar().name(), "US Federal");
        assert_eq!(CalendarKind::WeekendOnly.calendar().name(), "Weekend Only");
        assert_eq!(CalendarKind::WeekendOnly.to_string(), "Weekend Only");
    }
}
