//! Chart angles: Ascendant, Midheaven, Descendant and Imum Coeli.
//!
//! The Ascendant uses the standard spherical-astronomy formula with the
//! Laskar mean obliquity. The Midheaven is the Local Sidereal Time read
//! directly as an ecliptic longitude; charts produced by this engine are
//! calibrated to that simplification, so it is not replaced by the
//! `atan2(sin RAMC, cos RAMC·cos ε)` projection.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapters 13 and 22.

use log::trace;
use natal_frames::{mean_obliquity_deg, normalize_deg};
use natal_time::{jd_to_centuries, local_sidereal_time_deg};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Below this magnitude both `atan2` arguments count as zero.
pub const DEGENERACY_TOLERANCE: f64 = 1e-12;

/// The four chart angles, each an ecliptic longitude in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleSet {
    pub ascendant_deg: f64,
    pub midheaven_deg: f64,
    /// Always `(ascendant + 180) mod 360`.
    pub descendant_deg: f64,
    /// Always `(midheaven + 180) mod 360`.
    pub imum_coeli_deg: f64,
}

impl AngleSet {
    /// Build the set from Ascendant and Midheaven; the opposite points follow.
    pub fn from_asc_mc(ascendant_deg: f64, midheaven_deg: f64) -> Self {
        let ascendant_deg = normalize_deg(ascendant_deg);
        let midheaven_deg = normalize_deg(midheaven_deg);
        Self {
            ascendant_deg,
            midheaven_deg,
            descendant_deg: normalize_deg(ascendant_deg + 180.0),
            imum_coeli_deg: normalize_deg(midheaven_deg + 180.0),
        }
    }
}

/// Mean obliquity of the ecliptic at a UT Julian Day, degrees.
pub fn obliquity_deg(jd_ut: f64) -> Result<f64, ChartError> {
    if !jd_ut.is_finite() {
        return Err(ChartError::InvalidEphemerisInput("Julian Day is not finite"));
    }
    Ok(mean_obliquity_deg(jd_to_centuries(jd_ut)))
}

/// Midheaven longitude: the Local Sidereal Time taken as an ecliptic longitude.
pub fn midheaven_deg(lst_deg: f64) -> f64 {
    normalize_deg(lst_deg)
}

/// Ecliptic longitude of the Ascendant in degrees, [0, 360).
///
/// `Asc = atan2(cos LST, −sin LST·cos ε − tan φ·sin ε)`
///
/// Latitudes near ±90° make `tan φ` diverge; the result is returned as
/// computed. Fails with [`ChartError::DegenerateAngle`] only when both
/// `atan2` arguments vanish.
pub fn ascendant_deg(lst_deg: f64, latitude_deg: f64, jd_ut: f64) -> Result<f64, ChartError> {
    if !lst_deg.is_finite() {
        return Err(ChartError::InvalidEphemerisInput("sidereal time is not finite"));
    }
    check_latitude(latitude_deg)?;

    let eps = obliquity_deg(jd_ut)?.to_radians();
    let lst = lst_deg.to_radians();
    let phi = latitude_deg.to_radians();

    let y = lst.cos();
    let x = -lst.sin() * eps.cos() - phi.tan() * eps.sin();
    if y.abs() < DEGENERACY_TOLERANCE && x.abs() < DEGENERACY_TOLERANCE {
        return Err(ChartError::DegenerateAngle);
    }
    Ok(normalize_deg(f64::atan2(y, x).to_degrees()))
}

/// Compute all four angles for a UT Julian Day and observer position.
pub fn compute_angles(
    jd_ut: f64,
    latitude_deg: f64,
    longitude_east_deg: f64,
) -> Result<AngleSet, ChartError> {
    let lst = local_sidereal_time_deg(jd_ut, longitude_east_deg)?;
    let asc = ascendant_deg(lst, latitude_deg, jd_ut)?;
    let mc = midheaven_deg(lst);
    trace!("angles: jd={jd_ut} lst={lst:.6} asc={asc:.6} mc={mc:.6}");
    Ok(AngleSet::from_asc_mc(asc, mc))
}

fn check_latitude(latitude_deg: f64) -> Result<(), ChartError> {
    if !latitude_deg.is_finite() || latitude_deg.abs() > 90.0 {
        return Err(ChartError::InvalidLatitude(latitude_deg));
    }
    Ok(())
}
