//! The timezone-resolved birth moment a chart is computed for.

use natal_time::UtcTime;

use crate::error::ChartError;

/// Birth instant in UTC plus the geographic coordinate of the birthplace.
///
/// Constructed once per chart request through [`BirthMoment::new`], which
/// enforces the calendar and coordinate ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthMoment {
    utc: UtcTime,
    latitude_deg: f64,
    longitude_deg: f64,
}

impl BirthMoment {
    /// Validate and build a birth moment.
    ///
    /// * `latitude_deg`: geodetic latitude, north positive, [-90, 90]
    /// * `longitude_deg`: east positive, [-180, 180]
    pub fn new(utc: UtcTime, latitude_deg: f64, longitude_deg: f64) -> Result<Self, ChartError> {
        utc.validate()?;
        if !latitude_deg.is_finite() || latitude_deg.abs() > 90.0 {
            return Err(ChartError::InvalidLatitude(latitude_deg));
        }
        if !longitude_deg.is_finite() || longitude_deg.abs() > 180.0 {
            return Err(ChartError::InvalidLongitude(longitude_deg));
        }
        Ok(Self {
            utc,
            latitude_deg,
            longitude_deg,
        })
    }

    /// Resolve a local civil time with a fixed UTC offset, then validate.
    pub fn from_local(
        local: UtcTime,
        utc_offset_minutes: i32,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Self, ChartError> {
        let utc = UtcTime::from_local(
            local.year,
            local.month,
            local.day,
            local.hour,
            local.minute,
            local.second,
            utc_offset_minutes,
        )?;
        Self::new(utc, latitude_deg, longitude_deg)
    }

    pub fn utc(&self) -> &UtcTime {
        &self.utc
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }
}
