//! Zodiac sign and DMS (degrees-minutes-seconds) decomposition.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 degrees. Given a tropical longitude we identify
//! the sign the point falls in and express the position within that sign.

use natal_frames::normalize_deg;
use serde::{Deserialize, Serialize};

/// The 12 tropical zodiac signs, Aries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Classical modality (quadruplicity) of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Sign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Fire, Earth, Air, Water repeating from Aries.
    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Cardinal, Fixed, Mutable repeating from Aries.
    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [Sign; 12] {
        &ALL_SIGNS
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    /// Whole degrees (0..29 within a sign, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}′{:04.1}″", self.degrees, self.minutes, self.seconds)
    }
}

/// Full sign position of an ecliptic longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignInfo {
    /// The zodiac sign.
    pub sign: Sign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Decimal degrees within the sign, [0.0, 30.0).
    pub degrees_in_sign: f64,
    /// Position within the sign as DMS.
    pub dms: Dms,
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Determine the sign from a tropical ecliptic longitude in degrees.
///
/// Each sign spans exactly 30 degrees: Aries = [0, 30), Taurus = [30, 60), etc.
pub fn sign_from_longitude(longitude_deg: f64) -> SignInfo {
    let lon = normalize_deg(longitude_deg);
    // Clamp in case of floating point edge just under 360.0
    let sign_idx = ((lon / 30.0).floor() as u8).min(11);
    let degrees_in_sign = lon - (sign_idx as f64) * 30.0;

    SignInfo {
        sign: ALL_SIGNS[sign_idx as usize],
        sign_index: sign_idx,
        degrees_in_sign,
        dms: deg_to_dms(degrees_in_sign),
    }
}
