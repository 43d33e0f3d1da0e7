//! Greenwich and Local Sidereal Time.
//!
//! All functions take UT Julian Days and return degrees in [0, 360).
//!
//! Sources:
//! - GMST polynomial: IAU 1982 expression as given by Meeus, Eq. 12.4.
//! - Equation of the equinoxes: Meeus Ch. 22 low-accuracy nutation
//!   (two leading terms in Δψ), scaled by cos ε.

use crate::error::TimeError;
use crate::julian::{J2000_JD, jd_to_centuries};

/// Mean obliquity used to project the nutation in longitude onto the equator.
const NUTATION_OBLIQUITY_DEG: f64 = 23.4393;

/// Equation of the equinoxes in degrees for `t` Julian centuries since J2000.
///
/// Δψ·cos ε with Δψ ≈ −17.20″·sin Ω − 1.32″·sin 2L, where Ω is the mean
/// longitude of the Moon's ascending node and L the Sun's mean longitude.
pub fn equation_of_equinoxes_deg(t: f64) -> f64 {
    let omega = (125.044_52 - 1_934.136_261 * t).to_radians();
    let sun_mean = (280.466_5 + 36_000.769_8 * t).to_radians();
    let dpsi_arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * sun_mean).sin();
    dpsi_arcsec * NUTATION_OBLIQUITY_DEG.to_radians().cos() / 3600.0
}

/// Greenwich Mean Sidereal Time at a UT Julian Day, including the
/// equation-of-the-equinoxes correction.
///
/// GMST = 280.46061837 + 360.98564736629·(JD − 2451545)
///        + 0.000387933·T² − T³/38710000
///
/// Returns degrees in [0, 360).
pub fn gmst_deg(jd_ut: f64) -> Result<f64, TimeError> {
    if !jd_ut.is_finite() {
        return Err(TimeError::InvalidEphemerisInput("Julian Day is not finite"));
    }
    let t = jd_to_centuries(jd_ut);
    let t2 = t * t;
    let t3 = t2 * t;

    let mean = 280.460_618_37 + 360.985_647_366_29 * (jd_ut - J2000_JD) + 0.000_387_933 * t2
        - t3 / 38_710_000.0;
    Ok(wrap_360(mean + equation_of_equinoxes_deg(t)))
}

/// Local Sidereal Time from a UT Julian Day and observer east longitude.
///
/// LST = (GMST + longitude) mod 360.
pub fn local_sidereal_time_deg(jd_ut: f64, longitude_east_deg: f64) -> Result<f64, TimeError> {
    if !longitude_east_deg.is_finite() {
        return Err(TimeError::InvalidEphemerisInput("longitude is not finite"));
    }
    let gmst = gmst_deg(jd_ut)?;
    Ok(wrap_360(gmst + longitude_east_deg))
}

/// `rem_euclid` can round a tiny negative up to exactly 360.0.
fn wrap_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}
