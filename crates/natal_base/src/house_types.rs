//! Types for house cusp computation.

use serde::{Deserialize, Serialize};

use crate::zodiac::{Sign, sign_from_longitude};

/// The four quadrants of the chart, each bounded by two angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Ascendant to Imum Coeli: houses 1-3.
    AscToIc,
    /// Imum Coeli to Descendant: houses 4-6.
    IcToDesc,
    /// Descendant to Midheaven: houses 7-9.
    DescToMc,
    /// Midheaven to Ascendant: houses 10-12.
    McToAsc,
}

/// All four quadrants in house order.
pub const ALL_QUADRANTS: [Quadrant; 4] = [
    Quadrant::AscToIc,
    Quadrant::IcToDesc,
    Quadrant::DescToMc,
    Quadrant::McToAsc,
];

impl Quadrant {
    /// 0-based index of the angular cusp that opens the quadrant.
    pub const fn angular_index(self) -> usize {
        match self {
            Self::AscToIc => 0,
            Self::IcToDesc => 3,
            Self::DescToMc => 6,
            Self::McToAsc => 9,
        }
    }
}

/// A single house cusp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// House number, 1-12.
    pub number: u8,
    /// Ecliptic longitude of the cusp in degrees, [0, 360).
    pub cusp_deg: f64,
    /// Zodiac sign containing the cusp.
    pub sign: Sign,
    /// Degrees within the sign, [0, 30).
    pub degrees_in_sign: f64,
}

impl HouseCusp {
    /// Build a cusp from its number and an already normalized longitude.
    pub fn new(number: u8, cusp_deg: f64) -> Self {
        let info = sign_from_longitude(cusp_deg);
        Self {
            number,
            cusp_deg,
            sign: info.sign,
            degrees_in_sign: info.degrees_in_sign,
        }
    }
}

/// Extract the raw longitudes from a cusp array.
pub fn cusp_longitudes(houses: &[HouseCusp; 12]) -> [f64; 12] {
    let mut out = [0.0; 12];
    for (slot, house) in out.iter_mut().zip(houses.iter()) {
        *slot = house.cusp_deg;
    }
    out
}
