//! Angle normalization on the ecliptic circle.

/// Normalize an angle to [0, 360) degrees.
///
/// `rem_euclid` alone can return exactly 360.0 for tiny negative inputs;
/// that case folds back to 0.
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Forward (counter-clockwise) arc from `from_deg` to `to_deg`, in [0, 360).
pub fn arc_forward(from_deg: f64, to_deg: f64) -> f64 {
    normalize_deg(to_deg - from_deg)
}
