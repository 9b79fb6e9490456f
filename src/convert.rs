//! Gregorian <-> Jalali conversion.
//!
//! The raw functions work on plain integer triples and never fail: fields
//! outside their calendar range roll over arithmetically into a consistent
//! (if meaningless) date. The typed functions wrap them with range checks.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::consts::{
    CENTURY_DAYS, FIRST_HALF_DAYS, FOUR_YEAR_DAYS, GREGORIAN_CYCLE_DAYS,
    GREGORIAN_DAYS_BEFORE_MONTH, GREGORIAN_DAYS_IN_MONTH, GREGORIAN_EPOCH_DAYS,
    JALALI_CYCLE_DAYS, JALALI_CYCLE_LEAP_DAYS, JALALI_CYCLE_YEARS, JALALI_EPOCH_DAYS,
    JALALI_YEAR_SHIFT, MEHR, YEAR_DAYS,
};
use crate::{JalaliDate, ParseError};

/// Error type for conversions and calendar arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The resulting date cannot be represented.
    #[error("Date out of range: {year}-{month:02}-{day:02}")]
    OutOfRange { year: i64, month: u32, day: u32 },

    /// The `strftime` pattern for the time of day could not be rendered.
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    /// Error parsing or validating a Jalali date.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Converts a Gregorian `(year, month, day)` into a Jalali `(year, month, day)`.
///
/// Exact for every Gregorian year >= 1. Months outside `1..=12` are clamped
/// into the cumulative-days table.
pub fn gregorian_to_jalali(year: i32, month: u32, day: u32) -> (i32, u32, u32) {
    let gy = i64::from(year);
    let gy2 = if month > 2 { gy + 1 } else { gy };
    let month_index = (month.clamp(1, 12) - 1) as usize;

    let mut days = GREGORIAN_EPOCH_DAYS
        + YEAR_DAYS * gy
        + (gy2 + 3).div_euclid(4)
        - (gy2 + 99).div_euclid(100)
        + (gy2 + 399).div_euclid(400)
        + i64::from(day)
        + GREGORIAN_DAYS_BEFORE_MONTH[month_index];

    let mut jy = -JALALI_YEAR_SHIFT + JALALI_CYCLE_YEARS * days.div_euclid(JALALI_CYCLE_DAYS);
    days = days.rem_euclid(JALALI_CYCLE_DAYS);
    jy += 4 * days.div_euclid(FOUR_YEAR_DAYS);
    days = days.rem_euclid(FOUR_YEAR_DAYS);
    if days > YEAR_DAYS {
        jy += (days - 1) / YEAR_DAYS;
        days = (days - 1) % YEAR_DAYS;
    }

    let (jm, jd) = if days < FIRST_HALF_DAYS {
        (1 + days / 31, 1 + days % 31)
    } else {
        (
            i64::from(MEHR) + (days - FIRST_HALF_DAYS) / 30,
            1 + (days - FIRST_HALF_DAYS) % 30,
        )
    };

    (jy as i32, jm as u32, jd as u32)
}

/// Converts a Jalali `(year, month, day)` into a Gregorian `(year, month, day)`.
///
/// Inverse of [`gregorian_to_jalali`] for every valid date.
pub fn jalali_to_gregorian(year: i32, month: u32, day: u32) -> (i32, u32, u32) {
    let jy = i64::from(year) + JALALI_YEAR_SHIFT;
    let jm = i64::from(month);
    let month_offset = if jm < i64::from(MEHR) {
        (jm - 1) * 31
    } else {
        (jm - i64::from(MEHR)) * 30 + FIRST_HALF_DAYS
    };

    let mut days = JALALI_EPOCH_DAYS
        + YEAR_DAYS * jy
        + jy.div_euclid(JALALI_CYCLE_YEARS) * JALALI_CYCLE_LEAP_DAYS
        + (jy.rem_euclid(JALALI_CYCLE_YEARS) + 3) / 4
        + i64::from(day)
        + month_offset;

    let mut gy = 400 * days.div_euclid(GREGORIAN_CYCLE_DAYS);
    days = days.rem_euclid(GREGORIAN_CYCLE_DAYS);
    if days > CENTURY_DAYS {
        // The first century of the cycle is one day longer (its year 0 is leap)
        days -= 1;
        gy += 100 * (days / CENTURY_DAYS);
        days %= CENTURY_DAYS;
        if days >= YEAR_DAYS {
            days += 1;
        }
    }
    gy += 4 * (days / FOUR_YEAR_DAYS);
    days %= FOUR_YEAR_DAYS;
    if days > YEAR_DAYS {
        gy += (days - 1) / YEAR_DAYS;
        days = (days - 1) % YEAR_DAYS;
    }

    let mut gd = days + 1;
    let mut gm = 1;
    while gm < 12 {
        let length = if gm == 2 && is_gregorian_leap_year(gy) {
            GREGORIAN_DAYS_IN_MONTH[2] + 1
        } else {
            GREGORIAN_DAYS_IN_MONTH[gm]
        };
        if gd <= length {
            break;
        }
        gd -= length;
        gm += 1;
    }

    (gy as i32, gm as u32, gd as u32)
}

const fn is_gregorian_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Converts a Gregorian date into a [`JalaliDate`].
///
/// # Errors
/// Returns `ConvertError::OutOfRange` if the Jalali year falls outside `1..=MAX_YEAR`
/// (any Gregorian date before 622-03-21).
pub fn to_jalali(date: NaiveDate) -> Result<JalaliDate, ConvertError> {
    let (jy, jm, jd) = gregorian_to_jalali(date.year(), date.month(), date.day());
    debug!(gregorian = %date, jy, jm, jd, "converted to jalali");
    JalaliDate::from_raw(jy, jm, jd)
}

/// Converts a [`JalaliDate`] into a Gregorian date.
///
/// # Errors
/// Returns `ConvertError::OutOfRange` if the result is not representable by `chrono`.
pub fn to_gregorian(date: &JalaliDate) -> Result<NaiveDate, ConvertError> {
    let (gy, gm, gd) = jalali_to_gregorian(
        i32::from(date.year()),
        u32::from(date.month()),
        u32::from(date.day()),
    );
    debug!(jalali = %date, gy, gm, gd, "converted to gregorian");
    NaiveDate::from_ymd_opt(gy, gm, gd).ok_or(ConvertError::OutOfRange {
        year: i64::from(gy),
        month: gm,
        day: gd,
    })
}
