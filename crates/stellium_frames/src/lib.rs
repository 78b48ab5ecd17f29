//! Reference frames and coordinate math.
//!
//! This crate provides:
//! - Cartesian ↔ polar conversion with velocity propagation
//! - Rotation about the x-axis (ecliptic ↔ equatorial)
//! - Mean obliquity of the ecliptic (IAU 1976 / Lieske)
//! - Precession of equatorial vectors (IAU 1976)
//! - Nutation in longitude and obliquity (IAU 1980 + Herring 1987)

pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod vectors;

pub use nutation::nutation_rad;
pub use obliquity::mean_obliquity_rad;
pub use precession::{PrecessDirection, precess};
pub use vectors::{
    cart_to_polar, cart_to_polar_state, cross, dot, norm, normalize_deg, polar_to_cart,
    polar_to_cart_state, rotate_x, rotate_x_state,
};

/// One astronomical unit in kilometers.
pub const AU_KM: f64 = 149_597_870.7;
