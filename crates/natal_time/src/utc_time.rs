//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the timezone-resolved instant a chart is computed for.
//! Local civil times are folded into UTC with [`UtcTime::from_local`].

use crate::error::TimeError;
use crate::julian::{jd_to_calendar, julian_day_number, validate_calendar};

/// Largest accepted UTC offset in minutes (UTC±18:00).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

const MINUTES_PER_DAY: i64 = 1440;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Resolve a local civil time into UTC.
    ///
    /// `utc_offset_minutes` is the zone offset east of Greenwich
    /// (CEST = +120, EST = −300). Day, month and year roll over as needed.
    pub fn from_local(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_minutes: i32,
    ) -> Result<Self, TimeError> {
        validate_calendar(year, month, day, hour, minute, second)?;
        if utc_offset_minutes.unsigned_abs() > MAX_UTC_OFFSET_MINUTES.unsigned_abs() {
            return Err(TimeError::InvalidBirthMoment(format!(
                "UTC offset {utc_offset_minutes} min outside ±{MAX_UTC_OFFSET_MINUTES}"
            )));
        }

        let local_minutes = i64::from(hour) * 60 + i64::from(minute);
        let utc_minutes = local_minutes - i64::from(utc_offset_minutes);
        let day_shift = utc_minutes.div_euclid(MINUTES_PER_DAY);
        let minute_of_day = utc_minutes.rem_euclid(MINUTES_PER_DAY);

        let (year, month, day) = if day_shift == 0 {
            (year, month, day)
        } else {
            // JDN is noon-based, so the inverse lands on day + 0.5.
            let jdn = julian_day_number(year, month, day) + day_shift as f64;
            let (y, m, d) = jd_to_calendar(jdn);
            (y, m, d.floor() as u32)
        };

        let resolved = Self {
            year,
            month,
            day,
            hour: (minute_of_day / 60) as u32,
            minute: (minute_of_day % 60) as u32,
            second,
        };
        resolved.validate()?;
        Ok(resolved)
    }

    /// Check the calendar fields.
    pub fn validate(&self) -> Result<(), TimeError> {
        validate_calendar(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// Julian Day (UT) of this instant.
    ///
    /// Day number from the Meeus algorithm plus the time-of-day fraction
    /// `(hour − 12)/24 + minute/1440 + second/86400`; Julian Days begin at noon.
    pub fn to_jd_ut(&self) -> Result<f64, TimeError> {
        self.validate()?;
        let jdn = julian_day_number(self.year, self.month, self.day);
        let fraction = (self.hour as f64 - 12.0) / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        Ok(jdn + fraction)
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn new_constructor() {
        let t = UtcTime::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn j2000_noon_is_j2000() {
        let jd = UtcTime::new(2000, 1, 1, 12, 0, 0.0).to_jd_ut().unwrap();
        assert_eq!(jd, J2000_JD);
    }

    #[test]
    fn midnight_is_half_day_before_noon() {
        let jd = UtcTime::new(2000, 1, 1, 0, 0, 0.0).to_jd_ut().unwrap();
        assert!((jd - (J2000_JD - 0.5)).abs() < 1e-12);
    }

    #[test]
    fn month_13_rejected() {
        let err = UtcTime::new(2000, 13, 1, 0, 0, 0.0).to_jd_ut().unwrap_err();
        assert!(matches!(err, TimeError::InvalidBirthMoment(_)));
    }

    #[test]
    fn from_local_cest_same_day() {
        let t = UtcTime::from_local(1982, 8, 18, 18, 54, 0.0, 120).unwrap();
        assert_eq!(t, UtcTime::new(1982, 8, 18, 16, 54, 0.0));
    }

    #[test]
    fn from_local_rolls_back_over_new_year() {
        let t = UtcTime::from_local(2000, 1, 1, 1, 30, 0.0, 120).unwrap();
        assert_eq!(t, UtcTime::new(1999, 12, 31, 23, 30, 0.0));
    }

    #[test]
    fn from_local_rolls_forward_into_leap_day() {
        // 2024-02-28 21:00 EST (UTC−5) -> 2024-02-29 02:00 UTC
        let t = UtcTime::from_local(2024, 2, 28, 21, 0, 0.0, -300).unwrap();
        assert_eq!(t, UtcTime::new(2024, 2, 29, 2, 0, 0.0));
    }

    #[test]
    fn from_local_rejects_wild_offset() {
        assert!(UtcTime::from_local(2024, 1, 1, 0, 0, 0.0, 19 * 60).is_err());
    }

    #[test]
    fn from_local_rejects_extreme_offsets() {
        for offset in [i32::MIN, i32::MIN + 1, i32::MAX] {
            let err = UtcTime::from_local(2024, 1, 1, 0, 0, 0.0, offset).unwrap_err();
            assert!(matches!(err, TimeError::InvalidBirthMoment(_)), "{offset}");
        }
        assert!(UtcTime::from_local(2024, 1, 1, 0, 0, 0.0, -MAX_UTC_OFFSET_MINUTES).is_ok());
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn display_fractional_seconds() {
        let t = UtcTime::new(2024, 1, 15, 12, 30, 45.123);
        let s = t.to_string();
        assert!(s.contains("12:30:"), "got: {s}");
    }
}
