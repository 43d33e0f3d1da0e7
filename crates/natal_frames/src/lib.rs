//! Ecliptic geometry helpers for chart computation.
//!
//! Provides the mean obliquity of the ecliptic (Laskar 1986) and
//! longitude normalization on the 360° circle.

pub mod angle;
pub mod obliquity;

pub use angle::{arc_forward, normalize_deg};
pub use obliquity::{
    OBLIQUITY_J2000_ARCSEC, OBLIQUITY_J2000_DEG, mean_obliquity_arcsec, mean_obliquity_deg,
};
