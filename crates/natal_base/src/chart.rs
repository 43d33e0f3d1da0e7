//! Chart assembly: sign decomposition, house assignment and the final `Chart`.

use std::collections::BTreeMap;

use log::{debug, warn};
use natal_frames::normalize_deg;
use natal_time::jd_to_centuries;
use serde::{Deserialize, Serialize};

use crate::angles::{AngleSet, compute_angles};
use crate::error::ChartError;
use crate::house_types::{HouseCusp, cusp_longitudes};
use crate::houses::placidus_houses;
use crate::moment::BirthMoment;
use crate::planet::Planet;
use crate::planet_model::{all_planet_longitudes, is_retrograde};
use crate::zodiac::{Sign, sign_from_longitude};

/// House used when no cusp interval contains a longitude.
pub const FALLBACK_HOUSE: u8 = 12;

/// A body placed in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub planet: Planet,
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    pub sign: Sign,
    /// Degrees within the sign, [0, 30).
    pub degrees_in_sign: f64,
    pub retrograde: bool,
    /// House number, 1-12.
    pub house: u8,
}

/// A computed natal chart. Treat as an immutable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Julian Day (UT) the chart was cast for.
    pub jd_ut: f64,
    pub angles: AngleSet,
    /// Cusps 1-12, `houses[0]` = house 1.
    pub houses: [HouseCusp; 12],
    pub planets: BTreeMap<Planet, PlanetPosition>,
}

impl Chart {
    /// Position of a single body.
    pub fn planet(&self, planet: Planet) -> Option<&PlanetPosition> {
        self.planets.get(&planet)
    }

    /// Bodies in the given house, in planet order.
    pub fn planets_in_house(&self, house: u8) -> Vec<&PlanetPosition> {
        self.planets.values().filter(|p| p.house == house).collect()
    }

    /// Sign on the Ascendant.
    pub fn ascendant_sign(&self) -> Sign {
        self.houses[0].sign
    }

    /// Bodies flagged retrograde.
    pub fn retrograde_planets(&self) -> Vec<Planet> {
        self.planets
            .values()
            .filter(|p| p.retrograde)
            .map(|p| p.planet)
            .collect()
    }
}

/// Whether `longitude` lies in the half-open cusp interval `[start, end)`,
/// reading the interval forward and through 0° when `start > end`.
pub fn house_contains(start_deg: f64, end_deg: f64, longitude_deg: f64) -> bool {
    if start_deg <= end_deg {
        start_deg <= longitude_deg && longitude_deg < end_deg
    } else {
        longitude_deg >= start_deg || longitude_deg < end_deg
    }
}

/// House number (1-12) containing an ecliptic longitude.
///
/// Scans the cusps in cyclic order. A well-formed cusp set always matches;
/// otherwise [`FALLBACK_HOUSE`] is returned.
pub fn house_of(longitude_deg: f64, cusps: &[f64; 12]) -> u8 {
    let lon = normalize_deg(longitude_deg);
    for i in 0..12 {
        if house_contains(cusps[i], cusps[(i + 1) % 12], lon) {
            return i as u8 + 1;
        }
    }
    warn!("longitude {lon} matched no house interval; assigning house {FALLBACK_HOUSE}");
    FALLBACK_HOUSE
}

/// Combine angles, cusps and raw planetary longitudes into a [`Chart`].
pub fn assemble_chart(
    jd_ut: f64,
    angles: AngleSet,
    houses: [HouseCusp; 12],
    planet_longitudes: &BTreeMap<Planet, f64>,
) -> Chart {
    let cusps = cusp_longitudes(&houses);
    let t = jd_to_centuries(jd_ut);

    let planets = planet_longitudes
        .iter()
        .map(|(&planet, &raw)| {
            let longitude_deg = normalize_deg(raw);
            let info = sign_from_longitude(longitude_deg);
            let position = PlanetPosition {
                planet,
                longitude_deg,
                sign: info.sign,
                degrees_in_sign: info.degrees_in_sign,
                retrograde: is_retrograde(planet, t),
                house: house_of(longitude_deg, &cusps),
            };
            (planet, position)
        })
        .collect();

    Chart {
        jd_ut,
        angles,
        houses,
        planets,
    }
}

/// Compute the full natal chart for a birth moment.
pub fn compute_chart(moment: &BirthMoment) -> Result<Chart, ChartError> {
    let jd_ut = moment.utc().to_jd_ut()?;
    let angles = compute_angles(jd_ut, moment.latitude_deg(), moment.longitude_deg())?;
    let houses = placidus_houses(
        angles.ascendant_deg,
        angles.midheaven_deg,
        moment.latitude_deg(),
    )?;
    let longitudes = all_planet_longitudes(jd_ut)?;

    debug!(
        "chart for {} at ({}, {}): jd={jd_ut} asc={:.4} mc={:.4}",
        moment.utc(),
        moment.latitude_deg(),
        moment.longitude_deg(),
        angles.ascendant_deg,
        angles.midheaven_deg
    );
    Ok(assemble_chart(jd_ut, angles, houses, &longitudes))
}
