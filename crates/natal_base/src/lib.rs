//! Natal chart computation on top of the time and frame crates.
//!
//! This crate provides:
//! - Chart angles (Ascendant, Midheaven, Descendant, Imum Coeli)
//! - Placidus house cusps by latitude-corrected quadrant interpolation
//! - Mean-longitude positions and a retrograde proxy for ten bodies
//! - Zodiac sign / DMS decomposition
//! - Chart assembly with planet-to-house assignment
//!
//! Everything is a pure function of a [`BirthMoment`]; no state is kept
//! between calls.

pub mod angles;
pub mod chart;
pub mod error;
pub mod house_types;
pub mod houses;
pub mod moment;
pub mod planet;
pub mod planet_model;
pub mod zodiac;

pub use angles::{
    AngleSet, DEGENERACY_TOLERANCE, ascendant_deg, compute_angles, midheaven_deg, obliquity_deg,
};
pub use chart::{
    Chart, FALLBACK_HOUSE, PlanetPosition, assemble_chart, compute_chart, house_contains, house_of,
};
pub use error::ChartError;
pub use house_types::{ALL_QUADRANTS, HouseCusp, Quadrant, cusp_longitudes};
pub use houses::{PLACIDUS_CORRECTION_AMPLITUDE_DEG, latitude_correction_deg, placidus_houses};
pub use moment::BirthMoment;
pub use planet::{ALL_PLANETS, Planet};
pub use planet_model::{
    MeanLongitude, RETROGRADE_PHASE_END, RETROGRADE_PHASE_START, RetrogradeCycle,
    all_planet_longitudes, is_retrograde, mean_longitude_terms, planetary_longitude_by_name,
    planetary_longitude_deg, retrograde_cycle,
};
pub use zodiac::{
    ALL_SIGNS, Dms, Element, Modality, Sign, SignInfo, deg_to_dms, dms_to_deg, sign_from_longitude,
};
