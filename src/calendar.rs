//! Month and week boundaries, month stepping and weekday lookup.

use chrono::{Datelike, Days, NaiveDate};
use tracing::{debug, trace};

use crate::consts::{ESFAND, ESFAND_DAYS_LEAP, MEHR, MIN_DAY};
use crate::types::{Month, Weekday, days_in_month, is_leap_year};
use crate::{ConvertError, JalaliDate, to_jalali};

/// Days in a Persian week after its first day
const DAYS_AFTER_WEEK_START: u64 = 6;

impl JalaliDate {
    /// Day of the Persian week this date falls on
    ///
    /// # Errors
    /// Returns `ConvertError::OutOfRange` if the Gregorian equivalent is not representable.
    pub fn weekday(&self) -> Result<Weekday, ConvertError> {
        Ok(weekday(self.to_gregorian()?))
    }

    /// Saturday starting the week that contains this date
    ///
    /// # Errors
    /// Returns `ConvertError::OutOfRange` if the result is not representable.
    pub fn first_day_of_week(&self) -> Result<NaiveDate, ConvertError> {
        let date = self.to_gregorian()?;
        let offset = u64::from(weekday(date).days_from_saturday());
        date.checked_sub_days(Days::new(offset))
            .ok_or_else(|| out_of_range(date))
    }

    /// Friday ending the week that contains this date
    ///
    /// # Errors
    /// Returns `ConvertError::OutOfRange` if the result is not representable.
    pub fn last_day_of_week(&self) -> Result<NaiveDate, ConvertError> {
        let start = self.first_day_of_week()?;
        start
            .checked_add_days(Days::new(DAYS_AFTER_WEEK_START))
            .ok_or_else(|| out_of_range(start))
    }
}

fn out_of_range(date: NaiveDate) -> ConvertError {
    ConvertError::OutOfRange {
        year: i64::from(date.year()),
        month: date.month(),
        day: date.day(),
    }
}

/// Gregorian date of the first day of a Jalali month.
///
/// # Errors
/// Returns `ConvertError::Parse` for an invalid year or month.
pub fn first_day_of_month(year: u16, month: u8) -> Result<NaiveDate, ConvertError> {
    JalaliDate::new(year, month, MIN_DAY)?.to_gregorian()
}

/// Gregorian date of the last day of a Jalali month, as given by [`days_in_month`].
///
/// # Errors
/// Returns `ConvertError::Parse` for an invalid year or month.
pub fn last_day_of_month(year: u16, month: u8) -> Result<NaiveDate, ConvertError> {
    let month = Month::new(month)?.get();
    JalaliDate::new(year, month, days_in_month(year, month))?.to_gregorian()
}

/// Saturday starting the Persian week that contains the given Jalali date.
///
/// # Errors
/// Returns `ConvertError::Parse` for an invalid date.
pub fn first_day_of_week(year: u16, month: u8, day: u8) -> Result<NaiveDate, ConvertError> {
    JalaliDate::new(year, month, day)?.first_day_of_week()
}

/// Friday ending the Persian week that contains the given Jalali date.
///
/// # Errors
/// Returns `ConvertError::Parse` for an invalid date.
pub fn last_day_of_week(year: u16, month: u8, day: u8) -> Result<NaiveDate, ConvertError> {
    JalaliDate::new(year, month, day)?.last_day_of_week()
}

/// Persian weekday of a Gregorian date.
pub fn weekday(date: NaiveDate) -> Weekday {
    Weekday::from(date.weekday())
}

/// Advances `current` by the length of the Jalali month it falls in.
///
/// The step is a fixed day count taken from the current month (31, 30, or
/// 29/30 for Esfand by [`is_leap_year`]), so a date late in a 31-day month
/// can skip over the following month entirely.
///
/// # Errors
/// Returns `ConvertError::OutOfRange` if `current` or the result has no Jalali equivalent.
pub fn next_month(current: NaiveDate) -> Result<NaiveDate, ConvertError> {
    let jalali = to_jalali(current)?;
    let step = match jalali.month() {
        m if m < MEHR => 31,
        ESFAND if is_leap_year(jalali.year()) => ESFAND_DAYS_LEAP,
        ESFAND => ESFAND_DAYS_LEAP - 1,
        _ => 30,
    };
    trace!(%jalali, step, "stepping one jalali month");
    current
        .checked_add_days(Days::new(u64::from(step)))
        .ok_or_else(|| out_of_range(current))
}

/// Applies [`next_month`] `n` times, recomputing each step from the new date.
///
/// # Errors
/// Returns `ConvertError::OutOfRange` if any intermediate date has no Jalali equivalent.
pub fn next_n_months(current: NaiveDate, n: u32) -> Result<NaiveDate, ConvertError> {
    let result = (0..n).try_fold(current, |date, _| next_month(date))?;
    debug!(%current, n, %result, "advanced jalali months");
    Ok(result)
}
