//! Julian Day ↔ Gregorian calendar conversions.
//!
//! The forward conversion is the Meeus algorithm with January and February
//! counted as months 13 and 14 of the previous year. Dates are always read
//! as proleptic Gregorian, so the inverse skips the 1582 Julian-calendar
//! branch to stay symmetric with the forward direction.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7.

use crate::error::TimeError;

/// Julian Day of the J2000.0 epoch (2000-Jan-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `None` for a month outside 1..=12.
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            if is_leap_year(year) {
                Some(29)
            } else {
                Some(28)
            }
        }
        _ => None,
    }
}

/// Check that calendar fields describe a real instant on or after 0001-01-01.
pub fn validate_calendar(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> Result<(), TimeError> {
    if year < 1 {
        return Err(TimeError::InvalidBirthMoment(format!(
            "year {year} is before 0001"
        )));
    }
    let Some(max_day) = days_in_month(year, month) else {
        return Err(TimeError::InvalidBirthMoment(format!(
            "month {month} outside 1-12"
        )));
    };
    if day == 0 || day > max_day {
        return Err(TimeError::InvalidBirthMoment(format!(
            "day {day} outside 1-{max_day} for {year:04}-{month:02}"
        )));
    }
    if hour > 23 {
        return Err(TimeError::InvalidBirthMoment(format!(
            "hour {hour} outside 0-23"
        )));
    }
    if minute > 59 {
        return Err(TimeError::InvalidBirthMoment(format!(
            "minute {minute} outside 0-59"
        )));
    }
    if !second.is_finite() || !(0.0..60.0).contains(&second) {
        return Err(TimeError::InvalidBirthMoment(format!(
            "second {second} outside [0, 60)"
        )));
    }
    Ok(())
}

/// Julian Day Number at noon of the given calendar day.
///
/// `JDN = floor(365.25·(Y+4716)) + floor(30.6001·(M+1)) + D + B − 1524`
/// with `B = 2 − A + floor(A/4)`, `A = floor(Y/100)`.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day as f64 + b
        - 1524.0
}

/// Julian Day from a calendar date with fractional day (day 1.0 = 0h on the 1st).
///
/// Performs no validation; see [`validate_calendar`].
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let day = day_frac.floor();
    julian_day_number(year, month, 0) + day + (day_frac - day) - 0.5
}

/// Inverse of [`calendar_to_jd`]: returns `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day_frac)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
