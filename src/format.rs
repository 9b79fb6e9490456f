use std::fmt::Write;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::consts::{DATE_SEPARATOR, DEFAULT_TIME_FORMAT};
use crate::{ConvertError, to_jalali};

/// How a Gregorian instant is rendered as a Jalali string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Placed between year, month and day
    pub separator: char,
    /// `strftime` pattern for a time-of-day suffix; no suffix when `None`
    pub time_format: Option<String>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            separator: DATE_SEPARATOR,
            time_format: None,
        }
    }
}

impl FormatOptions {
    /// Uses `separator` between date components
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Appends the time of day, rendered with `format`
    #[must_use]
    pub fn with_time(mut self, format: impl Into<String>) -> Self {
        self.time_format = Some(format.into());
        self
    }

    /// Appends the time of day as `HH:MM`
    #[must_use]
    pub fn with_default_time(self) -> Self {
        self.with_time(DEFAULT_TIME_FORMAT)
    }
}

/// Renders `datetime` as `YYYY{sep}MM{sep}DD`, followed by ` {time}` when
/// `options.time_format` is set.
///
/// # Errors
/// Returns `ConvertError::OutOfRange` if the date has no Jalali equivalent and
/// `ConvertError::InvalidTimeFormat` if the time pattern cannot be rendered.
pub fn format_jalali(
    datetime: &NaiveDateTime,
    options: &FormatOptions,
) -> Result<String, ConvertError> {
    let mut out = to_jalali(datetime.date())?.format(options.separator);
    if let Some(pattern) = &options.time_format {
        write!(out, " {}", datetime.format(pattern))
            .map_err(|_| ConvertError::InvalidTimeFormat(pattern.clone()))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn datetime(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 11, 6)
            .unwrap()
            .and_hms_opt(hour, minute, 5)
            .unwrap()
    }

    #[test]
    fn test_default_options() {
        let options = FormatOptions::default();
        assert_eq!(options.separator, '/');
        assert_eq!(options.time_format, None);
        assert_eq!(
            format_jalali(&datetime(9, 5), &options).unwrap(),
            "1402/08/15"
        );
    }

    #[test]
    fn test_custom_separator() {
        let options = FormatOptions::default().with_separator('-');
        assert_eq!(
            format_jalali(&datetime(9, 5), &options).unwrap(),
            "1402-08-15"
        );
    }

    #[test]
    fn test_time_suffix() {
        let options = FormatOptions::default().with_default_time();
        assert_eq!(
            format_jalali(&datetime(9, 5), &options).unwrap(),
            "1402/08/15 09:05"
        );

        let options = FormatOptions::default().with_time("%H:%M:%S");
        assert_eq!(
            format_jalali(&datetime(23, 59), &options).unwrap(),
            "1402/08/15 23:59:05"
        );
    }

    #[test]
    fn test_invalid_time_format() {
        let options = FormatOptions::default().with_time("%Q");
        assert!(matches!(
            format_jalali(&datetime(9, 5), &options),
            Err(ConvertError::InvalidTimeFormat(_))
        ));
    }

    #[test]
    fn test_options_from_json() {
        let options: FormatOptions =
            serde_json::from_str(r#"{"separator": "-", "time_format": "%H:%M"}"#).unwrap();
        assert_eq!(options, FormatOptions::default().with_separator('-').with_default_time());

        let options: FormatOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, FormatOptions::default());
    }
}
