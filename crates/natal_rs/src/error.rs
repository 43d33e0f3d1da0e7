//! Error type for the convenience API.

use natal_base::ChartError;
use natal_time::TimeError;
use thiserror::Error;

/// Errors from the convenience wrapper.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum NatalError {
    /// A date string could not be parsed.
    #[error("date parse error: {0}")]
    DateParse(String),
    /// Calendar or sidereal-time failure.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Angle, house, planet or chart failure.
    #[error(transparent)]
    Chart(#[from] ChartError),
}
