use std::collections::BTreeMap;

use natal_base::{AngleSet, BirthMoment, Chart, HouseCusp, Planet, SignInfo};
use natal_time::UtcTime;

use crate::date::UtcDate;
use crate::error::NatalError;

fn moment(date: UtcDate, latitude_deg: f64, longitude_deg: f64) -> Result<BirthMoment, NatalError> {
    Ok(BirthMoment::new(date.into(), latitude_deg, longitude_deg)?)
}

/// Julian Day (UT) of a UTC date.
pub fn julian_day(date: UtcDate) -> Result<f64, NatalError> {
    Ok(UtcTime::from(date).to_jd_ut()?)
}

/// Greenwich and local sidereal time in degrees, `(gmst, lst)`.
pub fn sidereal_time(date: UtcDate, longitude_deg: f64) -> Result<(f64, f64), NatalError> {
    let jd = julian_day(date)?;
    let gmst = natal_time::gmst_deg(jd)?;
    let lst = natal_time::local_sidereal_time_deg(jd, longitude_deg)?;
    Ok((gmst, lst))
}

/// Ascendant, Midheaven, Descendant and Imum Coeli for a UTC date and place.
pub fn angles(date: UtcDate, latitude_deg: f64, longitude_deg: f64) -> Result<AngleSet, NatalError> {
    let m = moment(date, latitude_deg, longitude_deg)?;
    let jd = m.utc().to_jd_ut()?;
    Ok(natal_base::compute_angles(jd, m.latitude_deg(), m.longitude_deg())?)
}

/// The twelve Placidus cusps for a UTC date and place.
pub fn houses(
    date: UtcDate,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<[HouseCusp; 12], NatalError> {
    let a = angles(date, latitude_deg, longitude_deg)?;
    Ok(natal_base::placidus_houses(
        a.ascendant_deg,
        a.midheaven_deg,
        latitude_deg,
    )?)
}

/// Ecliptic longitude of one body in degrees.
pub fn planet_longitude(planet: Planet, date: UtcDate) -> Result<f64, NatalError> {
    Ok(natal_base::planetary_longitude_deg(planet, julian_day(date)?)?)
}

/// Ecliptic longitudes of all ten bodies.
pub fn planet_longitudes(date: UtcDate) -> Result<BTreeMap<Planet, f64>, NatalError> {
    Ok(natal_base::all_planet_longitudes(julian_day(date)?)?)
}

/// Whether a body is flagged retrograde at a date.
pub fn retrograde(planet: Planet, date: UtcDate) -> Result<bool, NatalError> {
    let t = natal_time::jd_to_centuries(julian_day(date)?);
    Ok(natal_base::is_retrograde(planet, t))
}

/// Zodiac sign of a tropical longitude.
pub fn sign(longitude_deg: f64) -> SignInfo {
    natal_base::sign_from_longitude(longitude_deg)
}

/// Natal chart for a UTC birth date and place.
pub fn compute_chart(
    date: UtcDate,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<Chart, NatalError> {
    Ok(natal_base::compute_chart(&moment(
        date,
        latitude_deg,
        longitude_deg,
    )?)?)
}

/// Natal chart for a local birth time with a fixed UTC offset.
///
/// `utc_offset_minutes` is east positive: CEST is `120`.
pub fn compute_chart_local(
    local: UtcDate,
    utc_offset_minutes: i32,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<Chart, NatalError> {
    let m = BirthMoment::from_local(
        local.into(),
        utc_offset_minutes,
        latitude_deg,
        longitude_deg,
    )?;
    Ok(natal_base::compute_chart(&m)?)
}

/// Convert a local time with a fixed UTC offset to UTC.
pub fn local_to_utc(local: UtcDate, utc_offset_minutes: i32) -> Result<UtcDate, NatalError> {
    let utc = UtcTime::from_local(
        local.year,
        local.month,
        local.day,
        local.hour,
        local.min,
        local.sec,
        utc_offset_minutes,
    )?;
    Ok(utc.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn julian_day_j2000() {
        let jd = julian_day(UtcDate::new(2000, 1, 1, 12, 0, 0.0)).unwrap();
        assert!((jd - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn julian_day_rejects_feb_30() {
        assert!(matches!(
            julian_day(UtcDate::new(2001, 2, 30, 0, 0, 0.0)),
            Err(NatalError::Time(_))
        ));
    }

    #[test]
    fn houses_reject_pole() {
        let err = houses(UtcDate::new(2000, 1, 1, 0, 0, 0.0), 90.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            NatalError::Chart(natal_base::ChartError::InvalidLatitude(_))
        ));
    }

    #[test]
    fn local_to_utc_crosses_midnight() {
        let utc = local_to_utc(UtcDate::new(2000, 1, 1, 1, 30, 0.0), 180).unwrap();
        assert_eq!(utc, UtcDate::new(1999, 12, 31, 22, 30, 0.0));
    }

    #[test]
    fn sign_lookup() {
        assert_eq!(sign(285.5).sign, natal_base::Sign::Capricorn);
    }
}
