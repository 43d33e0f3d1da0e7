//! The ten chart bodies.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Classical and modern bodies placed in a natal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All 10 planets in traditional order.
pub const ALL_PLANETS: [Planet; 10] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Uranus,
    Planet::Neptune,
    Planet::Pluto,
];

impl Planet {
    /// English name of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// 0-based index into [`ALL_PLANETS`].
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = ChartError;

    /// Case-insensitive English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_PLANETS
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ChartError::UnknownBody(needle.to_string()))
    }
}
