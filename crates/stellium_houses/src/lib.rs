//! House cusp computation for 10 house division systems.
//!
//! Implements Placidus, Koch, Porphyry, Regiomontanus, Campanus, Equal,
//! Whole Sign, Alcabitius, Morinus, and Topocentric (Polich-Page).
//! All systems share one apparent frame: the ARMC from apparent sidereal
//! time, the true obliquity of date, and the Ascendant/MC derived from
//! them. ΔT is supplied by the caller through `stellium_time`'s
//! `DeltaT` trait.

mod cusps;
mod types;

pub use cusps::{houses, houses_armc};
pub use types::{ALL_HOUSE_SYSTEMS, HouseSystem, Houses};
