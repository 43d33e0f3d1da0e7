//! Convenience wrapper for the natal chart engine.
//!
//! High-level functions that take a [`UtcDate`] and a birthplace directly,
//! so callers never handle Julian Days or birth-moment validation.
//!
//! # Quick start
//!
//! ```rust
//! use natal_rs::*;
//!
//! let date: UtcDate = "2000-02-14T22:11:00Z".parse().unwrap();
//! let chart = compute_chart(date, 51.2254, 6.7763).unwrap();
//! println!("Ascendant in {}", chart.ascendant_sign());
//! ```

pub mod convenience;
pub mod date;
pub mod error;

pub use convenience::{
    angles, compute_chart, compute_chart_local, houses, julian_day, local_to_utc,
    planet_longitude, planet_longitudes, retrograde, sidereal_time, sign,
};
pub use date::UtcDate;
pub use error::NatalError;

// Re-export chart types so callers don't need natal_base directly.
pub use natal_base::{
    ALL_PLANETS, ALL_SIGNS, AngleSet, Chart, ChartError, Dms, Element, HouseCusp, Modality,
    Planet, PlanetPosition, Sign, SignInfo, deg_to_dms, dms_to_deg,
};
pub use natal_time::TimeError;
