//! Placidus house cusps by latitude-corrected quadrant interpolation.
//!
//! True Placidus trisects the diurnal and nocturnal semi-arcs in time and
//! has to be solved iteratively. This engine instead interpolates each
//! quadrant arc at 1/3 and 2/3 and adds a latitude-dependent correction:
//!
//! `correction = |sin φ| · 8° · sin(fraction · π)`, negated for φ < 0.
//!
//! The result is closed-form and always terminates. The 8° amplitude is a
//! fixed calibration constant; charts rendered downstream depend on it.
//! At very high latitudes a short quadrant can be overrun by the
//! correction, in which case cusps leave cyclic order.

use std::f64::consts::PI;

use log::trace;
use natal_frames::{arc_forward, normalize_deg};

use crate::error::ChartError;
use crate::house_types::{ALL_QUADRANTS, HouseCusp};

/// Amplitude of the latitude correction at the poles, degrees.
pub const PLACIDUS_CORRECTION_AMPLITUDE_DEG: f64 = 8.0;

/// Fractions of the quadrant arc at which the two intermediate cusps sit.
const QUADRANT_FRACTIONS: [f64; 2] = [1.0 / 3.0, 2.0 / 3.0];

/// Compute the 12 house cusps from the Ascendant, Midheaven and latitude.
///
/// Cusp 1 = Asc, 4 = IC, 7 = Desc, 10 = MC exactly. Intermediate cusps
/// come from the forward quadrant arcs Asc→IC, IC→Desc, Desc→MC and
/// MC→Asc, each wrapping through 0° when needed.
///
/// Fails with [`ChartError::InvalidLatitude`] unless `|latitude| < 90`.
pub fn placidus_houses(
    ascendant_deg: f64,
    midheaven_deg: f64,
    latitude_deg: f64,
) -> Result<[HouseCusp; 12], ChartError> {
    check_latitude(latitude_deg)?;
    if !ascendant_deg.is_finite() || !midheaven_deg.is_finite() {
        return Err(ChartError::InvalidEphemerisInput("chart angle is not finite"));
    }

    let cusps = placidus_cusp_longitudes(
        normalize_deg(ascendant_deg),
        normalize_deg(midheaven_deg),
        latitude_deg,
    );
    trace!("placidus cusps at lat {latitude_deg}: {cusps:?}");
    Ok(build_cusps(&cusps))
}

/// Latitude correction for a cusp at `fraction` of its quadrant, degrees.
pub fn latitude_correction_deg(latitude_deg: f64, fraction: f64) -> f64 {
    let magnitude = latitude_deg.to_radians().sin().abs()
        * PLACIDUS_CORRECTION_AMPLITUDE_DEG
        * (fraction * PI).sin();
    if latitude_deg < 0.0 { -magnitude } else { magnitude }
}

/// Raw cusp longitudes; inputs must already be normalized.
fn placidus_cusp_longitudes(asc_deg: f64, mc_deg: f64, latitude_deg: f64) -> [f64; 12] {
    let desc_deg = normalize_deg(asc_deg + 180.0);
    let ic_deg = normalize_deg(mc_deg + 180.0);

    let mut cusps = [0.0; 12];
    cusps[0] = asc_deg;
    cusps[3] = ic_deg;
    cusps[6] = desc_deg;
    cusps[9] = mc_deg;

    for quadrant in ALL_QUADRANTS {
        let open = quadrant.angular_index();
        let close = (open + 3) % 12;
        let start = cusps[open];
        let arc = arc_forward(start, cusps[close]);
        for (k, &fraction) in QUADRANT_FRACTIONS.iter().enumerate() {
            cusps[open + 1 + k] =
                normalize_deg(start + arc * fraction + latitude_correction_deg(latitude_deg, fraction));
        }
    }
    cusps
}

/// Attach house numbers and sign decomposition.
fn build_cusps(cusps: &[f64; 12]) -> [HouseCusp; 12] {
    std::array::from_fn(|i| HouseCusp::new(i as u8 + 1, cusps[i]))
}

fn check_latitude(latitude_deg: f64) -> Result<(), ChartError> {
    if !latitude_deg.is_finite() || latitude_deg.abs() >= 90.0 {
        return Err(ChartError::InvalidLatitude(latitude_deg));
    }
    Ok(())
}
