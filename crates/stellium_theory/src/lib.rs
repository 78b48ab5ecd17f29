//! Natural-frame body positions: planetary theory, lunar theory, the mean
//! lunar node, and the Chiron interpolation table.
//!
//! Everything here produces positions in each body's "natural" output
//! frame (heliocentric/geocentric equatorial J2000 cartesian states, or
//! ecliptic-of-date angles for node and Chiron). The apparent-position
//! pipeline that turns these into ecliptic-of-date results lives in
//! `stellium_core`.

pub mod chiron;
pub mod moon;
pub mod node;
pub mod planets;

pub use chiron::{ChironOutOfRange, chiron_lon_speed};
pub use moon::moon_state;
pub use node::{mean_node_lon, mean_node_lon_speed};
pub use planets::{Planet, earth_state, planet_state};
