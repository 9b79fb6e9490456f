/// Maximum valid Jalali year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Mehr, the first 30-day month
pub const MEHR: u8 = 7;
/// Month number for Esfand
pub const ESFAND: u8 = 12;

/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Days in each Jalali month (index 0 is unused, months are 1-indexed)
/// Esfand shows 29 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (non-leap, adjusted by is_leap_year check)
];

/// Days elapsed in a Gregorian year before the first of each month (non-leap)
pub(crate) const GREGORIAN_DAYS_BEFORE_MONTH: [i64; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Days in each Gregorian month (index 0 unused); February adjusted for leap years
pub(crate) const GREGORIAN_DAYS_IN_MONTH: [i64; 13] =
    [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Offset between the Jalali year number and the Gregorian year it starts in
pub(crate) const JALALI_YEAR_OFFSET: u16 = 621;

/// Jalali leap year occurs every 4 years (offset by `JALALI_YEAR_OFFSET`)
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;

/// Gregorian day count of the arithmetic epoch for the forward conversion
pub(crate) const GREGORIAN_EPOCH_DAYS: i64 = 355_666;
/// Jalali day count of the arithmetic epoch for the inverse conversion
pub(crate) const JALALI_EPOCH_DAYS: i64 = -355_668;
/// Jalali year shift applied so every year in range is positive
pub(crate) const JALALI_YEAR_SHIFT: i64 = 1595;

/// 33 Jalali years
pub(crate) const JALALI_CYCLE_DAYS: i64 = 12_053;
/// Years per Jalali macro-cycle
pub(crate) const JALALI_CYCLE_YEARS: i64 = 33;
/// Leap days per Jalali macro-cycle
pub(crate) const JALALI_CYCLE_LEAP_DAYS: i64 = 8;
/// 4 years, one of them leap
pub(crate) const FOUR_YEAR_DAYS: i64 = 1461;
/// 400 Gregorian years
pub(crate) const GREGORIAN_CYCLE_DAYS: i64 = 146_097;
/// 100 Gregorian years, the last one not leap
pub(crate) const CENTURY_DAYS: i64 = 36_524;
/// Days in a common year
pub(crate) const YEAR_DAYS: i64 = 365;
/// Days covered by the six 31-day months
pub(crate) const FIRST_HALF_DAYS: i64 = 186;

/// Default separator between Jalali date components
pub const DATE_SEPARATOR: char = '/';
/// Default `strftime` format for the time-of-day suffix
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Persian weekday labels, Saturday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنجشنبه",
    "جمعه",
];

/// Persian month labels, Farvardin first
pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Whole days that make up the "years ago" unit
pub(crate) const DAYS_PER_YEAR: i64 = 365;
/// Whole days that make up the "months ago" unit
pub(crate) const DAYS_PER_MONTH: i64 = 30;
