mod calendar;
mod consts;
mod convert;
mod format;
mod humanize;
mod prelude;
mod serializer;
mod types;

pub use calendar::{
    first_day_of_month, first_day_of_week, last_day_of_month, last_day_of_week, next_month,
    next_n_months, weekday,
};
pub use consts::*;
pub use convert::{ConvertError, gregorian_to_jalali, jalali_to_gregorian, to_gregorian, to_jalali};
pub use format::{FormatOptions, format_jalali};
pub use humanize::{describe_elapsed, relative_time, relative_time_to_now};
pub use serializer::JalaliRepresentation;
pub use types::{Day, Month, Weekday, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use chrono::NaiveDate;
use std::str::FromStr;

/// A date in the Jalali (Persian solar Hijri) calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}/{:02}/{:02}", "year.get()", "month.get()", "day.get()")]
pub struct JalaliDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}/{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl JalaliDate {
    /// Creates a new date, validating each component
    ///
    /// # Errors
    /// Returns the matching `ParseError` variant for the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(day, year, month)?,
        })
    }

    /// Creates a date from the wide integers produced by the conversion arithmetic.
    pub(crate) fn from_raw(year: i32, month: u32, day: u32) -> Result<Self, ConvertError> {
        let out_of_range = || ConvertError::OutOfRange {
            year: i64::from(year),
            month,
            day,
        };
        let year = u16::try_from(year).map_err(|_| out_of_range())?;
        let month = u8::try_from(month).map_err(|_| out_of_range())?;
        let day = u8::try_from(day).map_err(|_| out_of_range())?;
        Self::new(year, month, day).map_err(|_| out_of_range())
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Persian name of the month
    pub const fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// Whether the year has a 30-day Esfand under [`is_leap_year`]
    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Length of this date's month under [`days_in_month`]
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year.get(), self.month.get())
    }

    /// Converts to `(year, month, day)`
    pub const fn to_tuple(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    /// Converts to the equivalent Gregorian date
    ///
    /// # Errors
    /// Returns `ConvertError::OutOfRange` if the result is not representable by `chrono`.
    pub fn to_gregorian(&self) -> Result<NaiveDate, ConvertError> {
        to_gregorian(self)
    }

    /// Renders as zero-padded `YYYY{sep}MM{sep}DD`
    pub fn format(&self, separator: char) -> String {
        format!(
            "{:04}{sep}{:02}{sep}{:02}",
            self.year.get(),
            self.month.get(),
            self.day.get(),
            sep = separator
        )
    }

    /// Parses `Y{sep}M{sep}D`, surrounding whitespace allowed
    ///
    /// # Errors
    /// Returns `ParseError::EmptyInput` for blank input, `ParseError::InvalidFormat`
    /// for a wrong component count or non-numeric component, and the range
    /// variants for out-of-range components.
    pub fn parse_with_separator(s: &str, separator: char) -> Result<Self, ParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected 2 {separator} separators, found {}",
                parts.len() - 1
            )));
        }

        let year = Self::parse_u16(parts[0])?;
        let month = Self::parse_u8(parts[1])?;
        let day = Self::parse_u8(parts[2])?;
        Self::new(year, month, day)
    }

    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for JalaliDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_separator(s, DATE_SEPARATOR)
    }
}

impl TryFrom<(u16, u8, u8)> for JalaliDate {
    type Error = ParseError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl TryFrom<NaiveDate> for JalaliDate {
    type Error = ConvertError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        to_jalali(value)
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_accessors() {
        let date = JalaliDate::new(1402, 8, 15).unwrap();
        assert_eq!(date.year(), 1402);
        assert_eq!(date.month(), 8);
        assert_eq!(date.day(), 15);
        assert_eq!(date.to_tuple(), (1402, 8, 15));
        assert_eq!(date.month_name(), "آبان");
        assert_eq!(date.days_in_month(), 30);
        assert!(!date.is_leap_year());
    }

    #[test]
    fn test_new_invalid_components() {
        assert!(matches!(
            JalaliDate::new(0, 1, 1),
            Err(ParseError::InvalidYear(0))
        ));
        assert!(matches!(
            JalaliDate::new(1402, 13, 1),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            JalaliDate::new(1402, 7, 31),
            Err(ParseError::InvalidDay {
                year: 1402,
                month: 7,
                day: 31
            })
        ));
    }

    #[test]
    fn test_parse_default_separator() {
        let date = "1400/1/1".parse::<JalaliDate>().unwrap();
        assert_eq!(date.to_tuple(), (1400, 1, 1));

        let date = " 1402 / 08 / 15 ".parse::<JalaliDate>().unwrap();
        assert_eq!(date.to_tuple(), (1402, 8, 15));
    }

    #[test]
    fn test_parse_custom_separator() {
        let date = JalaliDate::parse_with_separator("1402-08-15", '-').unwrap();
        assert_eq!(date.to_tuple(), (1402, 8, 15));

        // Default separator is not accepted when another one is requested
        let result = JalaliDate::parse_with_separator("1402/08/15", '-');
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "".parse::<JalaliDate>(),
            Err(ParseError::EmptyInput)
        ));
        assert!(matches!(
            "1402/08".parse::<JalaliDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1402/08/15/01".parse::<JalaliDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1402/XX/15".parse::<JalaliDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1402/13/15".parse::<JalaliDate>(),
            Err(ParseError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_parse_error_message() {
        let err = "1402/08".parse::<JalaliDate>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date format: Expected 2 / separators, found 1"
        );
    }

    #[test]
    fn test_display_and_format() {
        let date = JalaliDate::new(1400, 1, 1).unwrap();
        assert_eq!(date.to_string(), "1400/01/01");
        assert_eq!(date.format('-'), "1400-01-01");

        let early = JalaliDate::new(98, 7, 9).unwrap();
        assert_eq!(early.to_string(), "0098/07/09");
    }

    #[test]
    fn test_ordering() {
        let a = JalaliDate::new(1400, 12, 29).unwrap();
        let b = JalaliDate::new(1401, 1, 1).unwrap();
        let c = JalaliDate::new(1401, 1, 2).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_try_from() {
        let date: JalaliDate = (1400, 1, 1).try_into().unwrap();
        let gregorian = NaiveDate::from_ymd_opt(2021, 3, 21).unwrap();
        assert_eq!(JalaliDate::try_from(gregorian).unwrap(), date);
        assert_eq!(date.to_gregorian().unwrap(), gregorian);
    }

    #[test]
    fn test_serde_string_format() {
        let date = JalaliDate::new(1402, 8, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""1402/08/15""#);
        let parsed: JalaliDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        let result: Result<JalaliDate, _> = serde_json::from_str(r#""1402/13/01""#);
        assert!(result.is_err());
    }
}
