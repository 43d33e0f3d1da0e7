//! Mean obliquity of the ecliptic.
//!
//! Source: Laskar 1986, _Astronomy & Astrophysics_ 157, 59-70, as given by
//! Meeus, "Astronomical Algorithms" (2nd ed), Eq. 22.3. Valid to ~0.01″
//! within 1000 years of J2000 and a few arcseconds over ±10000 years.

/// Mean obliquity at J2000.0 in arcseconds (23° 26′ 21.448″).
pub const OBLIQUITY_J2000_ARCSEC: f64 = 84_381.448;

/// Mean obliquity at J2000.0 in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = OBLIQUITY_J2000_ARCSEC / 3600.0;

/// Laskar polynomial coefficients in arcseconds for U¹ … U¹⁰.
#[rustfmt::skip]
const LASKAR_COEFFS: [f64; 10] = [
    -4680.93, -1.55, 1999.25, -51.38, -249.67,
    -39.05, 7.12, 27.87, 5.79, 2.45,
];

/// Mean obliquity of the ecliptic in arcseconds.
///
/// # Arguments
/// * `t`: Julian centuries since J2000.0. The polynomial runs in
///   `U = t / 100` (units of 10000 Julian years).
pub fn mean_obliquity_arcsec(t: f64) -> f64 {
    let u = t / 100.0;
    // Horner from the highest power down.
    let series = LASKAR_COEFFS
        .iter()
        .rev()
        .fold(0.0, |acc, &c| acc * u + c);
    OBLIQUITY_J2000_ARCSEC + series * u
}

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_arcsec(t) / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        assert!((mean_obliquity_deg(0.0) - 23.439_291_1).abs() < 1e-6);
    }

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10 0h TD: T = -0.127296372348, ε0 = 23°26′27.407″
        let eps = mean_obliquity_arcsec(-0.127_296_372_348);
        let expected = 23.0 * 3600.0 + 26.0 * 60.0 + 27.407;
        assert!((eps - expected).abs() < 0.01, "ε0 = {eps}″");
    }

    #[test]
    fn obliquity_decreasing_now() {
        assert!(mean_obliquity_deg(0.25) < mean_obliquity_deg(0.0));
        assert!(mean_obliquity_deg(-0.25) > mean_obliquity_deg(0.0));
    }
}
