//! Error types for calendar and sidereal-time conversions.

use thiserror::Error;

/// Errors from calendar validation or sidereal time evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar fields do not describe a real Gregorian date/time.
    #[error("invalid birth moment: {0}")]
    InvalidBirthMoment(String),
    /// A Julian Day or longitude passed to an ephemeris routine was not finite.
    #[error("invalid ephemeris input: {0}")]
    InvalidEphemerisInput(&'static str),
}
