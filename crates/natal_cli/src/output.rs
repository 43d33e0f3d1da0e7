//! Text rendering of chart stages.

use std::fmt::Write as _;

use natal_config::OutputConfig;
use natal_rs::{AngleSet, Chart, HouseCusp, Planet, Sign, deg_to_dms, sign};

/// Angle formatting per the `[output]` config.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    precision: usize,
    dms: bool,
}

impl Style {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            precision: config.precision,
            dms: config.dms,
        }
    }

    /// Absolute angle in degrees.
    pub fn angle(&self, deg: f64) -> String {
        if self.dms {
            deg_to_dms(deg).to_string()
        } else {
            format!("{:.*}°", self.precision, deg)
        }
    }

    /// Position within a sign, e.g. `Capricorn 15.4880°`.
    pub fn in_sign(&self, sign: Sign, degrees_in_sign: f64) -> String {
        format!("{:<11} {}", sign.name(), self.angle(degrees_in_sign))
    }

    fn longitude(&self, deg: f64) -> String {
        let info = sign(deg);
        format!(
            "{:>10}  {}",
            self.angle(deg),
            self.in_sign(info.sign, info.degrees_in_sign)
        )
    }
}

pub fn render_angles(style: &Style, angles: &AngleSet) -> String {
    let mut out = String::new();
    for (name, deg) in [
        ("Ascendant", angles.ascendant_deg),
        ("Midheaven", angles.midheaven_deg),
        ("Descendant", angles.descendant_deg),
        ("Imum Coeli", angles.imum_coeli_deg),
    ] {
        let _ = writeln!(out, "{name:<11} {}", style.longitude(deg));
    }
    out
}

pub fn render_houses(style: &Style, houses: &[HouseCusp; 12]) -> String {
    let mut out = String::new();
    for h in houses {
        let _ = writeln!(
            out,
            "House {:>2}    {:>10}  {}",
            h.number,
            style.angle(h.cusp_deg),
            style.in_sign(h.sign, h.degrees_in_sign)
        );
    }
    out
}

/// Longitudes only, for when no chart (and so no houses) is computed.
pub fn render_longitudes(style: &Style, longitudes: &[(Planet, f64, bool)]) -> String {
    let mut out = String::new();
    for &(planet, lon, retrograde) in longitudes {
        let _ = writeln!(
            out,
            "{:<11} {}{}",
            planet.name(),
            style.longitude(lon),
            if retrograde { "  R" } else { "" }
        );
    }
    out
}

pub fn render_chart(style: &Style, chart: &Chart) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Julian Day  {:.6}", chart.jd_ut);
    out.push('\n');
    out.push_str(&render_angles(style, &chart.angles));
    out.push('\n');
    out.push_str(&render_houses(style, &chart.houses));
    out.push('\n');
    for p in chart.planets.values() {
        let _ = writeln!(
            out,
            "{:<11} {:>10}  {}  house {:>2}{}",
            p.planet.name(),
            style.angle(p.longitude_deg),
            style.in_sign(p.sign, p.degrees_in_sign),
            p.house,
            if p.retrograde { "  R" } else { "" }
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use natal_config::OutputConfig;

    fn decimal(precision: usize) -> Style {
        Style::new(&OutputConfig {
            precision,
            ..OutputConfig::default()
        })
    }

    #[test]
    fn decimal_precision() {
        assert_eq!(decimal(2).angle(285.48812), "285.49°");
        assert_eq!(decimal(0).angle(12.6), "13°");
    }

    #[test]
    fn dms_style() {
        let style = Style::new(&OutputConfig {
            dms: true,
            ..OutputConfig::default()
        });
        assert_eq!(style.angle(23.5), "23°30′00.0″");
    }

    #[test]
    fn angles_table_has_four_rows() {
        let text = render_angles(&decimal(1), &AngleSet::from_asc_mc(285.5, 227.3));
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("Capricorn"));
        assert!(text.contains("Cancer"));
    }

    #[test]
    fn retrograde_marker() {
        let text = render_longitudes(&decimal(1), &[(Planet::Mercury, 74.0, true)]);
        assert!(text.trim_end().ends_with('R'));
        assert!(text.contains("Gemini"));
    }
}
