use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{ConvertError, FormatOptions, format_jalali, weekday};

/// Flat, string-only view of a date for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JalaliRepresentation {
    /// ISO Gregorian date, `YYYY-MM-DD`
    pub date: String,
    /// Jalali date rendered with the given [`FormatOptions`]
    pub jalali_date: String,
    /// Persian weekday name
    pub jalali_day: String,
}

impl JalaliRepresentation {
    /// Builds the representation of `datetime`.
    ///
    /// # Errors
    /// Returns `ConvertError` if the date has no Jalali equivalent or the
    /// time format is invalid.
    pub fn from_datetime(
        datetime: &NaiveDateTime,
        options: &FormatOptions,
    ) -> Result<Self, ConvertError> {
        let date = datetime.date();
        Ok(Self {
            date: date.format("%Y-%m-%d").to_string(),
            jalali_date: format_jalali(datetime, options)?,
            jalali_day: weekday(date).name().to_owned(),
        })
    }

    /// Builds the representation of `date` at midnight.
    ///
    /// # Errors
    /// Returns `ConvertError` if the date has no Jalali equivalent or the
    /// time format is invalid.
    pub fn from_date(date: NaiveDate, options: &FormatOptions) -> Result<Self, ConvertError> {
        Self::from_datetime(&date.and_time(NaiveTime::MIN), options)
    }
}
