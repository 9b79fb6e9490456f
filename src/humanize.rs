//! Persian "time ago" phrases.

use chrono::{DateTime, Local, TimeDelta, TimeZone};

use crate::consts::{DAYS_PER_MONTH, DAYS_PER_YEAR};

const MOMENTS_AGO: &str = "لحظاتی قبل";
const HOURS_AGO: &str = "ساعت قبل";
const DAYS_AGO: &str = "روز قبل";
const MONTHS_AGO: &str = "ماه قبل";
const YEARS_AGO: &str = "سال قبل";

/// Describes how long ago something happened, given the elapsed time.
///
/// Under a day reports whole hours (or "moments" below one hour); otherwise
/// whole years of 365 days, whole months of 30 days, or whole days, checked in
/// that order. A negative duration counts as "moments ago".
pub fn describe_elapsed(elapsed: TimeDelta) -> String {
    if elapsed < TimeDelta::zero() {
        return MOMENTS_AGO.to_owned();
    }

    let days = elapsed.num_days();
    if days == 0 {
        let hours = elapsed.num_hours();
        if hours >= 1 {
            format!("{hours} {HOURS_AGO}")
        } else {
            MOMENTS_AGO.to_owned()
        }
    } else if days >= DAYS_PER_YEAR {
        format!("{} {YEARS_AGO}", days / DAYS_PER_YEAR)
    } else if days >= DAYS_PER_MONTH {
        format!("{} {MONTHS_AGO}", days / DAYS_PER_MONTH)
    } else {
        format!("{days} {DAYS_AGO}")
    }
}

/// Describes `date` relative to `now`.
pub fn relative_time<Tz: TimeZone>(date: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    describe_elapsed(now.clone().signed_duration_since(date.clone()))
}

/// Describes `date` relative to the local clock, read once.
pub fn relative_time_to_now(date: &DateTime<Local>) -> String {
    relative_time(date, &Local::now())
}
