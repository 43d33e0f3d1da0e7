//! Calendar normalization and sidereal time for chart computation.
//!
//! This crate provides:
//! - Gregorian calendar validation and Julian Day conversion (Meeus)
//! - `UtcTime`, including local-time-with-offset resolution
//! - Greenwich and Local Sidereal Time in degrees

pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, calendar_to_jd, days_in_month, is_leap_year, jd_to_calendar,
    jd_to_centuries, julian_day_number, validate_calendar,
};
pub use sidereal::{equation_of_equinoxes_deg, gmst_deg, local_sidereal_time_deg};
pub use utc_time::{MAX_UTC_OFFSET_MINUTES, UtcTime};

/// Julian Day (UT) for a UTC instant.
///
/// Shorthand for [`UtcTime::to_jd_ut`].
pub fn to_julian_day(utc: &UtcTime) -> Result<f64, TimeError> {
    utc.to_jd_ut()
}
