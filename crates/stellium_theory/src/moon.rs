//! Geocentric lunar position from the ELP-2000/82 series.
//!
//! The series yields ecliptic-of-date angles and a distance in km; this
//! module assembles them into a geocentric equatorial J2000 cartesian
//! state. Velocity comes from parabolic (3-point) interpolation at
//! ±0.1 day — lunar angular motion is not linear enough over the step for
//! 2-point differencing, so the whole natural-frame evaluation runs three
//! times per call. Both the step and the interpolation order are part of
//! the precision contract.

use astro::lunar;
use stellium_frames::{
    AU_KM, PrecessDirection, mean_obliquity_rad, polar_to_cart, precess, rotate_x,
};

/// Differentiation interval for the lunar velocity, in days.
const MOON_SPEED_INTV: f64 = 0.1;

/// Ecliptic-of-date polar position `[lon, lat, r]` (radians, AU).
fn ecl_date_polar(jd: f64) -> [f64; 3] {
    let (p, dist_km) = lunar::geocent_ecl_pos(jd);
    [p.long, p.lat, dist_km / AU_KM]
}

/// Ecliptic of date → equatorial J2000 cartesian, in AU.
fn ecl_date_to_equ_j2000(tjd: f64, dt_days: f64) -> [f64; 3] {
    let cart = polar_to_cart(&ecl_date_polar(tjd));
    let tjde = tjd + dt_days;
    let eps = mean_obliquity_rad(tjde);
    let mut eq = rotate_x(&cart, -eps);
    precess(&mut eq, tjde, PrecessDirection::DateToJ2000);
    eq
}

/// Geocentric equatorial-J2000 state of the Moon (position AU,
/// velocity AU/day).
///
/// `dt_days` is the caller's ΔT at `jd_ut`; the series are evaluated at
/// the passed epoch, ΔT only enters through the frame conversion.
pub fn moon_state(jd_ut: f64, dt_days: f64) -> [f64; 6] {
    let xpm = ecl_date_to_equ_j2000(jd_ut, dt_days);
    let x1 = ecl_date_to_equ_j2000(jd_ut + MOON_SPEED_INTV, dt_days);
    let x2 = ecl_date_to_equ_j2000(jd_ut - MOON_SPEED_INTV, dt_days);

    let mut xp = [0.0; 6];
    for i in 0..3 {
        xp[i] = xpm[i];
        let b = (x1[i] - x2[i]) / 2.0;
        let a = (x1[i] + x2[i]) / 2.0 - xpm[i];
        xp[i + 3] = (2.0 * a + b) / MOON_SPEED_INTV;
    }
    xp
}
