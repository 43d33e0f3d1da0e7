//! Low-precision planetary longitudes and the retrograde-phase proxy.
//!
//! Each body's longitude is its mean longitude, a cubic polynomial in
//! Julian centuries from J2000.0. No periodic perturbations are applied, so
//! the error against a full ephemeris reaches several degrees for the inner
//! planets and the Moon. Charts computed here are calibrated to exactly
//! this truncation.
//!
//! Sources:
//! - Sun: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 25.2.
//! - Moon: Meeus Eq. 47.1 (cubic part).
//! - Mercury..Neptune: Meeus Table 31.A, mean equinox of date.
//! - Pluto: Standish, "Keplerian Elements for Approximate Positions of the
//!   Major Planets" (JPL), Table 1.
//!
//! Pluto is the one linear row: the Standish elements carry only a constant
//! rate, so `L2 = L3 = 0` and the polynomial is valid 1800-2050.

use std::collections::BTreeMap;

use natal_frames::normalize_deg;
use natal_time::{DAYS_PER_CENTURY, jd_to_centuries};

use crate::error::ChartError;
use crate::planet::{ALL_PLANETS, Planet};

/// Lower (exclusive) edge of the retrograde window in cycle phase.
pub const RETROGRADE_PHASE_START: f64 = 0.4;
/// Upper (exclusive) edge of the retrograde window in cycle phase.
pub const RETROGRADE_PHASE_END: f64 = 0.6;

/// Mean-longitude polynomial `L0 + L1·T + L2·T² + L3·T³`, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanLongitude {
    pub l0: f64,
    pub l1: f64,
    pub l2: f64,
    pub l3: f64,
}

impl MeanLongitude {
    /// Evaluate at `t` Julian centuries, unnormalized.
    pub fn evaluate(&self, t: f64) -> f64 {
        self.l0 + t * (self.l1 + t * (self.l2 + t * self.l3))
    }
}

/// Empirical retrograde cycle of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetrogradeCycle {
    /// Phase constant in days; the heuristic repeats with this period.
    pub period_days: f64,
}

impl RetrogradeCycle {
    /// Cycle phase `(T·36525 / period) mod 1`, in [0, 1).
    pub fn phase(&self, t: f64) -> f64 {
        let p = (t * DAYS_PER_CENTURY / self.period_days).rem_euclid(1.0);
        if p >= 1.0 { 0.0 } else { p }
    }
}

#[rustfmt::skip]
const MEAN_LONGITUDES: [MeanLongitude; 10] = [
    //                     L0               L1                  L2              L3
    MeanLongitude { l0: 280.466_46,    l1: 36_000.769_83,    l2:  0.000_303_2,  l3: 0.0 },
    MeanLongitude { l0: 218.316_447_7, l1: 481_267.881_234_21, l2: -0.001_578_6, l3: 1.0 / 538_841.0 },
    MeanLongitude { l0: 252.250_906,   l1: 149_474.072_249_1, l2:  0.000_303_5,  l3:  0.000_000_018 },
    MeanLongitude { l0: 181.979_801,   l1: 58_519.213_030_2,  l2:  0.000_310_14, l3:  0.000_000_015 },
    MeanLongitude { l0: 355.433_000,   l1: 19_141.696_447_1,  l2:  0.000_310_52, l3:  0.000_000_016 },
    MeanLongitude { l0: 34.351_519,    l1: 3_036.302_774_8,   l2:  0.000_223_30, l3:  0.000_000_037 },
    MeanLongitude { l0: 50.077_444,    l1: 1_223.511_068_6,   l2:  0.000_519_08, l3: -0.000_000_030 },
    MeanLongitude { l0: 314.055_005,   l1: 429.864_056_1,     l2:  0.000_303_90, l3:  0.000_000_026 },
    MeanLongitude { l0: 304.348_665,   l1: 219.883_309_2,     l2:  0.000_308_82, l3:  0.000_000_018 },
    MeanLongitude { l0: 238.929_038_33, l1: 145.207_805_15,   l2:  0.0,          l3:  0.0 },
];

/// Mean-longitude coefficients for a body.
pub fn mean_longitude_terms(planet: Planet) -> &'static MeanLongitude {
    &MEAN_LONGITUDES[planet.index() as usize]
}

/// Retrograde cycle for a body.
///
/// Planets use their mean synodic periods. The Sun carries the tropical
/// year and the Moon the synodic month, so both cycle like any other body.
pub const fn retrograde_cycle(planet: Planet) -> RetrogradeCycle {
    let period_days = match planet {
        Planet::Sun => 365.25,
        Planet::Moon => 29.530_589,
        Planet::Mercury => 115.88,
        Planet::Venus => 583.92,
        Planet::Mars => 779.94,
        Planet::Jupiter => 398.88,
        Planet::Saturn => 378.09,
        Planet::Uranus => 369.66,
        Planet::Neptune => 367.49,
        Planet::Pluto => 366.73,
    };
    RetrogradeCycle { period_days }
}

/// Ecliptic longitude of a body in degrees, [0, 360).
pub fn planetary_longitude_deg(planet: Planet, jd_ut: f64) -> Result<f64, ChartError> {
    if !jd_ut.is_finite() {
        return Err(ChartError::InvalidEphemerisInput("Julian Day is not finite"));
    }
    let t = jd_to_centuries(jd_ut);
    Ok(normalize_deg(mean_longitude_terms(planet).evaluate(t)))
}

/// Ecliptic longitude of a body looked up by English name.
pub fn planetary_longitude_by_name(name: &str, jd_ut: f64) -> Result<f64, ChartError> {
    planetary_longitude_deg(name.parse()?, jd_ut)
}

/// Periodic retrograde proxy.
///
/// `phase = (T·36525 / period) mod 1`; the body is flagged retrograde when
/// the phase lies strictly inside (0.4, 0.6). This is not a velocity-sign
/// test: it disagrees with the sky for most dates and flags the Sun and
/// Moon a fifth of the time. Charts are calibrated to it as is.
pub fn is_retrograde(planet: Planet, t: f64) -> bool {
    let phase = retrograde_cycle(planet).phase(t);
    phase > RETROGRADE_PHASE_START && phase < RETROGRADE_PHASE_END
}

/// Longitudes of all ten bodies at a Julian Day.
pub fn all_planet_longitudes(jd_ut: f64) -> Result<BTreeMap<Planet, f64>, ChartError> {
    ALL_PLANETS
        .iter()
        .map(|&p| planetary_longitude_deg(p, jd_ut).map(|lon| (p, lon)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use natal_time::J2000_JD;

    #[test]
    fn j2000_values_are_constant_terms() {
        for p in ALL_PLANETS {
            let lon = planetary_longitude_deg(p, J2000_JD).unwrap();
            assert!(
                (lon - mean_longitude_terms(p).l0).abs() < 1e-9,
                "{p}: {lon}"
            );
        }
    }

    #[test]
    fn sun_advances_about_one_degree_per_day() {
        let a = planetary_longitude_deg(Planet::Sun, J2000_JD).unwrap();
        let b = planetary_longitude_deg(Planet::Sun, J2000_JD + 1.0).unwrap();
        assert!(((b - a).rem_euclid(360.0) - 0.9856).abs() < 1e-3);
    }

    #[test]
    fn moon_advances_about_thirteen_degrees_per_day() {
        let a = planetary_longitude_deg(Planet::Moon, J2000_JD).unwrap();
        let b = planetary_longitude_deg(Planet::Moon, J2000_JD + 1.0).unwrap();
        assert!(((b - a).rem_euclid(360.0) - 13.176).abs() < 0.01);
    }

    #[test]
    fn longitudes_normalized_over_wide_range() {
        for k in -40..=40 {
            let jd = J2000_JD + k as f64 * 911.3;
            for p in ALL_PLANETS {
                let lon = planetary_longitude_deg(p, jd).unwrap();
                assert!((0.0..360.0).contains(&lon), "{p} at {jd}: {lon}");
            }
        }
    }

    #[test]
    fn nan_jd_rejected() {
        assert!(matches!(
            planetary_longitude_deg(Planet::Mars, f64::NAN),
            Err(ChartError::InvalidEphemerisInput(_))
        ));
    }

    #[test]
    fn by_name_lookup() {
        let a = planetary_longitude_by_name("venus", J2000_JD).unwrap();
        let b = planetary_longitude_deg(Planet::Venus, J2000_JD).unwrap();
        assert_eq!(a, b);
        assert!(matches!(
            planetary_longitude_by_name("Chiron", J2000_JD),
            Err(ChartError::UnknownBody(_))
        ));
    }

    #[test]
    fn every_body_starts_its_cycle_at_j2000() {
        for p in ALL_PLANETS {
            assert_eq!(retrograde_cycle(p).phase(0.0), 0.0);
            assert!(!is_retrograde(p, 0.0), "{p}");
        }
    }

    #[test]
    fn phase_is_elapsed_days_over_period() {
        // 2000-03-03: 61.5 days after J2000
        let t = jd_to_centuries(2_451_606.5);
        let phase = retrograde_cycle(Planet::Mercury).phase(t);
        assert!((phase - (61.5 / 115.88)).abs() < 1e-12, "phase = {phase}");
        assert!(is_retrograde(Planet::Mercury, t));
    }

    #[test]
    fn luminaries_follow_the_same_proxy() {
        // half a year after J2000 the Sun sits at phase 0.5
        let t = jd_to_centuries(J2000_JD + 182.625);
        assert!(is_retrograde(Planet::Sun, t));
        // 2000-02-14 22:11 UT: Moon phase 0.504
        let t = jd_to_centuries(2_451_589.424_305_555);
        assert!(is_retrograde(Planet::Moon, t));
        assert!(!is_retrograde(Planet::Sun, t));
    }

    #[test]
    fn negative_centuries_wrap_into_unit_phase() {
        // 1982-08-18 16:54 UT
        let t = jd_to_centuries(2_445_200.204_166_7);
        let phase = retrograde_cycle(Planet::Sun).phase(t);
        assert!((phase - 0.6289).abs() < 1e-3, "phase = {phase}");
        assert!(!is_retrograde(Planet::Sun, t));
    }

    #[test]
    fn retrograde_window_is_a_fifth_of_the_cycle() {
        let cycle = retrograde_cycle(Planet::Mars);
        let n = 10_000;
        let step = cycle.period_days / DAYS_PER_CENTURY / n as f64;
        let count = (0..n)
            .filter(|&i| is_retrograde(Planet::Mars, i as f64 * step))
            .count();
        let share = count as f64 / n as f64;
        assert!((share - 0.2).abs() < 0.002, "share = {share}");
    }

    #[test]
    fn phase_in_unit_interval() {
        let cycle = retrograde_cycle(Planet::Pluto);
        for &t in &[-3.0, -0.5, 0.0, 0.123, 2.0] {
            let p = cycle.phase(t);
            assert!((0.0..1.0).contains(&p), "phase {p}");
        }
    }

    #[test]
    fn all_longitudes_has_ten_entries() {
        let map = all_planet_longitudes(J2000_JD).unwrap();
        assert_eq!(map.len(), 10);
        assert_eq!(map.keys().next(), Some(&Planet::Sun));
    }

    #[test]
    fn pluto_advances_linearly() {
        let terms = mean_longitude_terms(Planet::Pluto);
        let per_century = terms.evaluate(1.0) - terms.evaluate(0.0);
        let back = terms.evaluate(0.0) - terms.evaluate(-1.0);
        assert!((per_century - back).abs() < 1e-9);
        assert!((per_century - 145.207_805_15).abs() < 1e-9);
    }
}
