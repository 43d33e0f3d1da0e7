//! Julian Day and sidereal time checks against published values.

use natal_time::{J2000_JD, TimeError, UtcTime, gmst_deg, local_sidereal_time_deg, to_julian_day};

fn jd(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> f64 {
    to_julian_day(&UtcTime::new(year, month, day, hour, minute, 0.0)).expect("valid date")
}

#[test]
fn meeus_table_values() {
    // Meeus, Astronomical Algorithms, Ch. 7 examples
    let cases = [
        ((2000, 1, 1, 12, 0), 2_451_545.0),
        ((1999, 1, 1, 0, 0), 2_451_179.5),
        ((1987, 1, 27, 0, 0), 2_446_822.5),
        ((1987, 6, 19, 12, 0), 2_446_966.0),
        ((1988, 1, 27, 0, 0), 2_447_187.5),
        ((1988, 6, 19, 12, 0), 2_447_332.0),
        ((1900, 1, 1, 0, 0), 2_415_020.5),
        ((1600, 1, 1, 0, 0), 2_305_447.5),
    ];
    for ((y, m, d, h, mi), expected) in cases {
        let got = jd(y, m, d, h, mi);
        assert!(
            (got - expected).abs() < 1e-9,
            "{y:04}-{m:02}-{d:02} {h:02}:{mi:02}: got {got}, expected {expected}"
        );
    }
}

#[test]
fn proleptic_gregorian_year_one() {
    // 0001-01-01 0h (proleptic Gregorian) = JD 1721425.5
    let got = jd(1, 1, 1, 0, 0);
    assert!((got - 1_721_425.5).abs() < 1e-9, "got {got}");
}

#[test]
fn scenario_b_julian_day() {
    let got = jd(2000, 2, 14, 22, 11);
    assert!((got - 2_451_589.424_305_555).abs() < 1e-6, "got {got}");
}

#[test]
fn month_thirteen_is_invalid_birth_moment() {
    let err = to_julian_day(&UtcTime::new(2000, 13, 1, 0, 0, 0.0)).unwrap_err();
    assert!(matches!(err, TimeError::InvalidBirthMoment(_)), "got {err:?}");
    assert!(err.to_string().starts_with("invalid birth moment"));
}

#[test]
fn day_out_of_range_is_invalid_birth_moment() {
    for (y, m, d) in [(2023, 2, 29), (2024, 4, 31), (2024, 1, 0), (1900, 2, 29)] {
        let err = to_julian_day(&UtcTime::new(y, m, d, 0, 0, 0.0));
        assert!(err.is_err(), "{y}-{m}-{d} should be rejected");
    }
}

#[test]
fn sidereal_time_bonn_1982() {
    // 1982-08-18 16:54 UT at Bonn (7.0982 E): LST ≈ 227.3°
    let jd = jd(1982, 8, 18, 16, 54);
    let lst = local_sidereal_time_deg(jd, 7.0982).unwrap();
    assert!((lst - 227.32).abs() < 0.05, "LST = {lst}");
}

#[test]
fn gmst_one_sidereal_day_later_repeats() {
    let g0 = gmst_deg(J2000_JD).unwrap();
    let g1 = gmst_deg(J2000_JD + 0.997_269_566_3).unwrap();
    let diff = (g1 - g0).rem_euclid(360.0);
    let diff = diff.min(360.0 - diff);
    assert!(diff < 0.01, "diff = {diff}");
}
