//! Error types for chart computation.

use natal_time::TimeError;
use thiserror::Error;

/// Errors from angle, house, planet or chart computation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from calendar normalization or sidereal time.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Latitude outside the range accepted by the operation.
    #[error("invalid latitude: {0} deg")]
    InvalidLatitude(f64),
    /// Longitude outside [-180, 180] or not finite.
    #[error("invalid longitude: {0} deg")]
    InvalidLongitude(f64),
    /// The Ascendant direction vector vanished; the rising point is undefined.
    #[error("degenerate angle: ascendant undefined for these inputs")]
    DegenerateAngle,
    /// Body name outside the ten supported planets.
    #[error("unknown body: {0}")]
    UnknownBody(String),
    /// A Julian Day or angle passed in was not finite.
    #[error("invalid ephemeris input: {0}")]
    InvalidEphemerisInput(&'static str),
}
