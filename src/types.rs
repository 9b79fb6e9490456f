use crate::consts::{
    DAYS_IN_MONTH, ESFAND, ESFAND_DAYS_LEAP, JALALI_YEAR_OFFSET, LEAP_YEAR_CYCLE, MAX_MONTH,
    MAX_YEAR, MEHR, MONTH_NAMES, WEEKDAY_NAMES,
};
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A Jalali year guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this year has a 30-day Esfand under the `(year + 621) % 4` rule
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Jalali month guaranteed to be in the range `1..=MAX_MONTH` (Farvardin..=Esfand)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Persian label of the month
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[(self.0.get() - 1) as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day of a Jalali month.
///
/// Bounded by the longest length the month can take (31 for the first six
/// months, 30 for the rest). Esfand 30 is accepted in every year because the
/// conversion arithmetic places its leap days on a 33-year cycle that does not
/// always agree with [`is_leap_year`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or too large for the month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            year,
            month,
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if month == 0 || month > MAX_MONTH || value > max_days_in_month(month) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // No month context here, so only the absolute bounds apply
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= DAYS_IN_MONTH[1] => Ok(Self(non_zero)),
            _ => Err(ParseError::InvalidDay {
                year: 0,
                month: 0,
                day: value,
            }),
        }
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the Persian week, which runs Saturday to Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    /// Saturday
    Shanbe,
    /// Sunday
    Yekshanbe,
    /// Monday
    Doshanbe,
    /// Tuesday
    Seshanbe,
    /// Wednesday
    Chaharshanbe,
    /// Thursday
    Panjshanbe,
    /// Friday
    Jome,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Shanbe,
        Self::Yekshanbe,
        Self::Doshanbe,
        Self::Seshanbe,
        Self::Chaharshanbe,
        Self::Panjshanbe,
        Self::Jome,
    ];

    /// Days since the start of the week (Saturday = 0)
    #[inline]
    pub const fn days_from_saturday(self) -> u8 {
        self as u8
    }

    /// Persian label of the weekday
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        // Monday is 0 in chrono, Saturday is 0 here
        let index = (weekday.num_days_from_monday() + 2) % 7;
        Self::ALL[index as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Weekday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

// Helper functions

/// Jalali leap year rule: `(year + 621) % 4 == 0`.
pub const fn is_leap_year(year: u16) -> bool {
    (year as u32 + JALALI_YEAR_OFFSET as u32) % LEAP_YEAR_CYCLE as u32 == 0
}

/// Number of days in a Jalali month, with Esfand decided by [`is_leap_year`].
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == ESFAND && is_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Longest length a month can take in any year
const fn max_days_in_month(month: u8) -> u8 {
    if month < MEHR {
        DAYS_IN_MONTH[month as usize]
    } else {
        ESFAND_DAYS_LEAP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(1400).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(
            Year::new(10000),
            Err(ParseError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(1402).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "1402");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        assert!(serde_json::from_str::<Year>("0").is_err());
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(Month::new(1).unwrap().name(), "فروردین");
        assert_eq!(Month::new(7).unwrap().name(), "مهر");
        assert_eq!(Month::new(12).unwrap().name(), "اسفند");
    }

    #[test]
    fn test_day_new_bounds() {
        // First half - 31 days
        assert!(Day::new(31, 1402, 1).is_ok());
        assert!(Day::new(31, 1402, 6).is_ok());
        assert!(Day::new(32, 1402, 6).is_err());

        // Second half - 30 days
        assert!(Day::new(30, 1402, 7).is_ok());
        assert!(Day::new(31, 1402, 7).is_err());

        // Esfand accepts 30 regardless of the leap rule
        assert!(Day::new(30, 1403, 12).is_ok());
        assert!(Day::new(30, 1408, 12).is_ok());
        assert!(Day::new(31, 1403, 12).is_err());
    }

    #[test]
    fn test_day_new_invalid_zero() {
        assert!(matches!(
            Day::new(0, 1402, 1),
            Err(ParseError::InvalidDay {
                year: 1402,
                month: 1,
                day: 0
            })
        ));
    }

    #[test]
    fn test_day_try_from_u8() {
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);

        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());

        let result: Result<Day, _> = 32.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        for year in [1399, 1403, 1407, 3, 7] {
            assert!(is_leap_year(year), "{year} should be leap");
        }
        for year in [1400, 1401, 1402, 1404, 1408, 1] {
            assert!(!is_leap_year(year), "{year} should not be leap");
        }
    }

    #[test]
    fn test_days_in_month() {
        for month in 1..=6 {
            assert_eq!(days_in_month(1402, month), 31, "Month {month}");
        }
        for month in 7..=11 {
            assert_eq!(days_in_month(1402, month), 30, "Month {month}");
        }
        assert_eq!(days_in_month(1402, 12), 29);
        assert_eq!(days_in_month(1403, 12), 30);
    }

    #[test]
    fn test_esfand_length_follows_leap_rule() {
        for year in 1..=1500 {
            let expected = if is_leap_year(year) { 30 } else { 29 };
            assert_eq!(days_in_month(year, 12), expected, "Year {year}");
        }
    }

    #[test]
    fn test_weekday_from_chrono() {
        assert_eq!(Weekday::from(chrono::Weekday::Sat), Weekday::Shanbe);
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Yekshanbe);
        assert_eq!(Weekday::from(chrono::Weekday::Mon), Weekday::Doshanbe);
        assert_eq!(Weekday::from(chrono::Weekday::Fri), Weekday::Jome);
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(Weekday::Shanbe.to_string(), "شنبه");
        assert_eq!(Weekday::Jome.name(), "جمعه");
        assert_eq!(Weekday::Jome.days_from_saturday(), 6);
        assert_eq!(
            serde_json::to_string(&Weekday::Yekshanbe).unwrap(),
            r#""یکشنبه""#
        );
    }
}
