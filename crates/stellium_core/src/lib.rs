//! Core ephemeris engine: body dispatch and the apparent-position
//! pipeline.
//!
//! [`Engine::position`] returns a body's apparent geocentric ecliptic
//! position and speeds at a UT Julian Day. Natural-frame positions come
//! from `stellium_theory`; every body that produces an equatorial-J2000
//! cartesian state goes through the same four-stage pipeline:
//!
//! 1. precess position and velocity J2000 → date,
//! 2. rotate by nutation (first-order, linearized),
//! 3. rotate equatorial → ecliptic by the true obliquity,
//! 4. convert cartesian → polar with velocity propagation.
//!
//! The UT → TT correction (ΔT) is supplied by the caller through the
//! [`DeltaT`] trait; it is consumed, never computed, here.

use std::error::Error;
use std::fmt::{Display, Formatter};

use stellium_frames::{
    PrecessDirection, cart_to_polar_state, mean_obliquity_rad, normalize_deg, nutation_rad,
    precess, rotate_x_state,
};
use stellium_theory::{
    ChironOutOfRange, Planet, chiron_lon_speed, earth_state, mean_node_lon_speed, moon_state,
    planet_state,
};
pub use stellium_time::{CalendarDate, DeltaT, FixedDeltaT, from_julian_day, julian_day};

/// Mean distance assigned to the lunar node, in AU.
const MEAN_NODE_DIST_AU: f64 = 0.002569;

/// Bodies served by [`Engine::position`].
///
/// The integer codes are a fixed external contract (chart-assembly
/// consumers store them): 0 Sun, 1 Moon, 2 Mercury … 9 Pluto,
/// 10 mean node, 15 Chiron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
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
    MeanNode,
    Chiron,
}

impl Body {
    /// Stable body code.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
            Self::MeanNode => 10,
            Self::Chiron => 15,
        }
    }

    /// Convert a stable body code into a [`Body`].
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Sun),
            1 => Some(Self::Moon),
            2 => Some(Self::Mercury),
            3 => Some(Self::Venus),
            4 => Some(Self::Mars),
            5 => Some(Self::Jupiter),
            6 => Some(Self::Saturn),
            7 => Some(Self::Uranus),
            8 => Some(Self::Neptune),
            9 => Some(Self::Pluto),
            10 => Some(Self::MeanNode),
            15 => Some(Self::Chiron),
            _ => None,
        }
    }
}

/// Apparent geocentric ecliptic position and motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPosition {
    /// Ecliptic longitude in degrees, range [0, 360).
    pub longitude: f64,
    /// Ecliptic latitude in degrees.
    pub latitude: f64,
    /// Geocentric distance in AU.
    pub distance: f64,
    /// Longitude rate in degrees/day.
    pub longitude_speed: f64,
    /// Latitude rate in degrees/day.
    pub latitude_speed: f64,
    /// Radial rate in AU/day.
    pub distance_speed: f64,
}

impl PlanetPosition {
    /// Apparent backward motion: negative longitude speed.
    pub fn is_retrograde(&self) -> bool {
        self.longitude_speed < 0.0
    }
}

/// Errors from position computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Body code not in the recognized set.
    UnsupportedBody { code: i32 },
    /// Chiron query outside the interpolation table's span.
    ChironOutOfRange { jd: f64, start: f64, end: f64 },
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedBody { code } => write!(f, "unsupported body: {code}"),
            Self::ChironOutOfRange { jd, start, end } => {
                write!(f, "Chiron: JD {jd} outside table range {start}..{end}")
            }
        }
    }
}

impl Error for EphemerisError {}

impl From<ChironOutOfRange> for EphemerisError {
    fn from(e: ChironOutOfRange) -> Self {
        Self::ChironOutOfRange {
            jd: e.jd,
            start: e.start,
            end: e.end,
        }
    }
}

/// The ephemeris engine.
///
/// Holds the caller-supplied ΔT provider; all computation is pure and
/// per-call, so a shared `Engine` can serve concurrent callers when `D`
/// is `Sync`.
#[derive(Debug, Clone)]
pub struct Engine<D: DeltaT> {
    delta_t: D,
}

impl<D: DeltaT> Engine<D> {
    pub fn new(delta_t: D) -> Self {
        Self { delta_t }
    }

    /// Apparent geocentric ecliptic position of `body` at a UT Julian
    /// Day.
    pub fn position(&self, body: Body, jd_ut: f64) -> Result<PlanetPosition, EphemerisError> {
        let dt = self.delta_t.delta_t_days(jd_ut);
        let tjde = jd_ut + dt;

        match body {
            Body::MeanNode => {
                let (longitude, speed) = mean_node_lon_speed(tjde);
                Ok(PlanetPosition {
                    longitude,
                    latitude: 0.0,
                    distance: MEAN_NODE_DIST_AU,
                    longitude_speed: speed,
                    latitude_speed: 0.0,
                    distance_speed: 0.0,
                })
            }
            // The Chiron table is indexed by UT day.
            Body::Chiron => {
                let (longitude, speed) = chiron_lon_speed(jd_ut)?;
                Ok(PlanetPosition {
                    longitude,
                    latitude: 0.0,
                    distance: 0.0,
                    longitude_speed: speed,
                    latitude_speed: 0.0,
                    distance_speed: 0.0,
                })
            }
            Body::Moon => {
                let xp = moon_state(jd_ut, dt);
                Ok(to_position(apparent_ecl_of_date(&xp, tjde)))
            }
            Body::Sun => {
                let xe = earth_state(jd_ut, dt);
                let mut xgeo = [0.0; 6];
                for i in 0..6 {
                    xgeo[i] = -xe[i];
                }
                Ok(to_position(apparent_ecl_of_date(&xgeo, tjde)))
            }
            _ => {
                let planet = match body {
                    Body::Mercury => Planet::Mercury,
                    Body::Venus => Planet::Venus,
                    Body::Mars => Planet::Mars,
                    Body::Jupiter => Planet::Jupiter,
                    Body::Saturn => Planet::Saturn,
                    Body::Uranus => Planet::Uranus,
                    Body::Neptune => Planet::Neptune,
                    Body::Pluto => Planet::Pluto,
                    _ => unreachable!("remaining bodies handled above"),
                };
                let xp = planet_state(planet, jd_ut);
                let xe = earth_state(jd_ut, dt);
                let mut xgeo = [0.0; 6];
                for i in 0..6 {
                    xgeo[i] = xp[i] - xe[i];
                }
                Ok(to_position(apparent_ecl_of_date(&xgeo, tjde)))
            }
        }
    }

    /// [`Engine::position`] keyed by the stable integer body code.
    pub fn position_by_code(
        &self,
        code: i32,
        jd_ut: f64,
    ) -> Result<PlanetPosition, EphemerisError> {
        let body = Body::from_code(code).ok_or(EphemerisError::UnsupportedBody { code })?;
        self.position(body, jd_ut)
    }
}

/// Linearized nutation rotation of an equatorial state: mean equatorial
/// of date → true equatorial of date.
fn nutate(p: &mut [f64; 6], dpsi: f64, deps: f64, mean_eps: f64) {
    let a = dpsi * mean_eps.cos();
    let b = dpsi * mean_eps.sin();

    let x0 = p[0] - a * p[1] - b * p[2];
    let x1 = a * p[0] + p[1] - deps * p[2];
    let x2 = b * p[0] + deps * p[1] + p[2];
    p[0] = x0;
    p[1] = x1;
    p[2] = x2;

    let x3 = p[3] - a * p[4] - b * p[5];
    let x4 = a * p[3] + p[4] - deps * p[5];
    let x5 = b * p[3] + deps * p[4] + p[5];
    p[3] = x3;
    p[4] = x4;
    p[5] = x5;
}

/// The shared four-stage pipeline: geocentric equatorial J2000 state →
/// apparent ecliptic-of-date polar state (radians, AU).
fn apparent_ecl_of_date(xeq: &[f64; 6], tjde: f64) -> [f64; 6] {
    let mean_eps = mean_obliquity_rad(tjde);
    let (dpsi, deps) = nutation_rad(tjde);
    let true_eps = mean_eps + deps;

    let mut pos = [xeq[0], xeq[1], xeq[2]];
    precess(&mut pos, tjde, PrecessDirection::J2000ToDate);
    let mut vel = [xeq[3], xeq[4], xeq[5]];
    precess(&mut vel, tjde, PrecessDirection::J2000ToDate);

    let mut x = [pos[0], pos[1], pos[2], vel[0], vel[1], vel[2]];
    nutate(&mut x, dpsi, deps, mean_eps);

    // Positive angle here is the equatorial → ecliptic direction.
    let ecl = rotate_x_state(&x, true_eps);
    cart_to_polar_state(&ecl)
}

fn to_position(polar: [f64; 6]) -> PlanetPosition {
    PlanetPosition {
        longitude: normalize_deg(polar[0].to_degrees()),
        latitude: polar[1].to_degrees(),
        distance: polar[2],
        longitude_speed: polar[3].to_degrees(),
        latitude_speed: polar[4].to_degrees(),
        distance_speed: polar[5],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine<FixedDeltaT> {
        Engine::new(FixedDeltaT::new(60.0))
    }

    #[test]
    fn body_code_roundtrip() {
        for body in [
            Body::Sun,
            Body::Moon,
            Body::Mercury,
            Body::Venus,
            Body::Mars,
            Body::Jupiter,
            Body::Saturn,
            Body::Uranus,
            Body::Neptune,
            Body::Pluto,
            Body::MeanNode,
            Body::Chiron,
        ] {
            assert_eq!(Body::from_code(body.code()), Some(body));
        }
    }

    #[test]
    fn body_codes_are_the_published_contract() {
        assert_eq!(Body::Sun.code(), 0);
        assert_eq!(Body::Moon.code(), 1);
        assert_eq!(Body::Mercury.code(), 2);
        assert_eq!(Body::Pluto.code(), 9);
        assert_eq!(Body::MeanNode.code(), 10);
        assert_eq!(Body::Chiron.code(), 15);
    }

    #[test]
    fn unknown_code_is_unsupported() {
        let err = engine().position_by_code(11, 2_451_545.0).unwrap_err();
        assert_eq!(err, EphemerisError::UnsupportedBody { code: 11 });
    }

    #[test]
    fn mean_node_has_fixed_distance() {
        let pos = engine().position(Body::MeanNode, 2_451_545.0).unwrap();
        assert_eq!(pos.distance, 0.002569);
        assert_eq!(pos.latitude, 0.0);
        assert!(pos.longitude_speed < 0.0);
    }

    #[test]
    fn longitudes_are_normalized() {
        let e = engine();
        for body in [Body::Sun, Body::Moon, Body::Mercury, Body::Jupiter] {
            let pos = e.position(body, 2_447_030.3).unwrap();
            assert!(
                (0.0..360.0).contains(&pos.longitude),
                "{body:?} lon = {}",
                pos.longitude
            );
        }
    }

    #[test]
    fn engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine<FixedDeltaT>>();
        assert_send_sync::<PlanetPosition>();
        assert_send_sync::<EphemerisError>();
    }
}
