//! Time handling for the ephemeris engine.
//!
//! This crate provides:
//! - Julian Day ↔ calendar conversions (proleptic Gregorian)
//! - Greenwich Mean Sidereal Time with equation of equinoxes
//! - The `DeltaT` seam for the UT → TT correction, which is supplied by
//!   the surrounding system rather than computed here

pub mod delta_t;
pub mod julian;
pub mod sidereal;

pub use delta_t::{DeltaT, FixedDeltaT};
pub use julian::{CalendarDate, J2000_JD, from_julian_day, julian_day};
pub use sidereal::gmst_hours;
