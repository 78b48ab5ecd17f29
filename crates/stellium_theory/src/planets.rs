//! Heliocentric planetary positions in the equatorial J2000 frame.
//!
//! Mercury through Neptune and the Earth-Moon barycenter come from the
//! VSOP87A rectangular series (heliocentric ecliptic J2000, AU). Pluto,
//! which VSOP87 does not cover, uses Keplerian approximate elements with
//! linear rates. Earth is derived from the barycenter by subtracting the
//! Moon's offset via a short dedicated lunar series.
//!
//! Velocities are two-point backward differences at a 0.1-day step; the
//! step size is part of the model's precision contract.

use stellium_frames::{
    PrecessDirection, mean_obliquity_rad, normalize_deg, polar_to_cart, precess, rotate_x,
};
use stellium_time::J2000_JD;
use vsop87::vsop87a;

/// Differentiation interval for planetary velocities, in days.
const PLAN_SPEED_INTV: f64 = 0.1;

/// Earth/Moon mass ratio of the reference theory. Exact constant; do not
/// re-derive.
const EARTH_MOON_MRAT: f64 = 81.30056;

const J1900_JD: f64 = 2_415_020.0;

/// Planets served by the heliocentric series (Earth and Sun are handled
/// through [`earth_state`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// Heliocentric ecliptic-J2000 cartesian position in AU.
fn helio_ecl_j2000(planet: Planet, jd: f64) -> [f64; 3] {
    match planet {
        Planet::Mercury => rect(vsop87a::mercury(jd)),
        Planet::Venus => rect(vsop87a::venus(jd)),
        Planet::Mars => rect(vsop87a::mars(jd)),
        Planet::Jupiter => rect(vsop87a::jupiter(jd)),
        Planet::Saturn => rect(vsop87a::saturn(jd)),
        Planet::Uranus => rect(vsop87a::uranus(jd)),
        Planet::Neptune => rect(vsop87a::neptune(jd)),
        Planet::Pluto => pluto_helio_ecl(jd),
    }
}

fn rect(c: vsop87::RectangularCoordinates) -> [f64; 3] {
    [c.x, c.y, c.z]
}

/// Pluto from JPL approximate Keplerian elements (valid 1800–2050,
/// degrading gracefully outside), Newton-solved Kepler equation.
fn pluto_helio_ecl(jd: f64) -> [f64; 3] {
    let t = (jd - J2000_JD) / 36525.0;

    let a = 39.48211675 - 0.00031596 * t;
    let e = 0.24882730 + 0.00005170 * t;
    let i = (17.14001206 + 0.00004818 * t).to_radians();
    let l = 238.92903833 + 145.20780515 * t;
    let varpi = 224.06891629 - 0.04062942 * t;
    let node = (110.30393684 - 0.01183482 * t).to_radians();

    let omega = (varpi - 110.30393684 + 0.01183482 * t).to_radians();
    let mut m = normalize_deg(l - varpi);
    if m > 180.0 {
        m -= 360.0;
    }
    let m = m.to_radians();

    // Kepler's equation, Newton iteration.
    let mut ecc_anom = m + e * m.sin();
    for _ in 0..50 {
        let delta = (ecc_anom - e * ecc_anom.sin() - m) / (1.0 - e * ecc_anom.cos());
        ecc_anom -= delta;
        if delta.abs() < 1e-13 {
            break;
        }
    }

    // Orbital-plane coordinates, then rotate by ω, i, Ω.
    let xp = a * (ecc_anom.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anom.sin();

    let (so, co) = omega.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = i.sin_cos();

    [
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        so * si * xp + co * si * yp,
    ]
}

/// EMB heliocentric position rotated into the equatorial J2000 frame.
fn emb_equ_j2000(jd: f64) -> [f64; 3] {
    let eps2000 = mean_obliquity_rad(J2000_JD);
    let c = vsop87a::earth_moon(jd);
    rotate_x(&[c.x, c.y, c.z], -eps2000)
}

/// Short lunar theory for the EMB → Earth-center adjustment.
///
/// Computes the Moon's geocentric position from a handful of literal
/// perturbation terms (mean anomaly, elongation, node), converts it to
/// equatorial J2000, and subtracts `moon / (1 + mass ratio)` from the EMB
/// vector in place. This deliberately duplicates a low-precision slice of
/// the full lunar theory; the two must not be unified.
fn embofs(tjd: f64, xemb: &mut [f64; 3], eps_date: f64) {
    let t = (tjd - J1900_JD) / 36525.0;

    // Mean anomaly of Moon (MP)
    let a = normalize_deg(((1.44e-5 * t + 0.009192) * t + 477_198.8491) * t + 296.104608)
        .to_radians();
    let smp = a.sin();
    let cmp = a.cos();
    let s2mp = 2.0 * smp * cmp;
    let c2mp = cmp * cmp - smp * smp;
    // Mean elongation (D), doubled
    let a = 2.0
        * normalize_deg(((1.9e-6 * t - 0.001436) * t + 445_267.1142) * t + 350.737486)
            .to_radians();
    let s2d = a.sin();
    let c2d = a.cos();
    // Mean distance from ascending node (F)
    let a = normalize_deg(((-3e-7 * t - 0.003211) * t + 483_202.0251) * t + 11.250889)
        .to_radians();
    let sf = a.sin();
    let cf = a.cos();
    let s2f = 2.0 * sf * cf;
    let sx = s2d * cmp - c2d * smp; // sin(2D - MP)
    // Mean longitude of Moon (LP)
    let mut lon = ((1.9e-6 * t - 0.001133) * t + 481_267.8831) * t + 270.434164;
    // Mean anomaly of Sun (M)
    let m = normalize_deg(((-3.3e-6 * t - 1.50e-4) * t + 35_999.0498) * t + 358.475833);

    lon += 6.288750 * smp + 1.274018 * sx + 0.658309 * s2d + 0.213616 * s2mp
        - 0.185596 * m.to_radians().sin()
        - 0.114336 * s2f;

    let smp_cf = smp * cf;
    let cmp_sf = cmp * sf;
    let lat = (5.128189 * sf
        + 0.280606 * (smp_cf + cmp_sf)
        + 0.277693 * (smp_cf - cmp_sf)
        + 0.173238 * (s2d * cf - c2d * sf))
        .to_radians();

    // Horizontal parallax → distance in AU.
    let parallax = (0.950724
        + 0.051818 * cmp
        + 0.009531 * (c2d * cmp + s2d * smp) // cos(2D - MP)
        + 0.007843 * c2d
        + 0.002824 * c2mp)
        .to_radians();
    let dist = 4.263523e-5 / parallax.sin();

    let lon = normalize_deg(lon).to_radians();
    let xyz = polar_to_cart(&[lon, lat, dist]);
    let mut eq = rotate_x(&xyz, -eps_date);
    precess(&mut eq, tjd, PrecessDirection::DateToJ2000);

    for i in 0..3 {
        xemb[i] -= eq[i] / (EARTH_MOON_MRAT + 1.0);
    }
}

/// Heliocentric equatorial-J2000 state of the Earth (position AU,
/// velocity AU/day).
///
/// `dt_days` is the caller's ΔT at `jd_ut`; the series themselves are
/// evaluated at the passed epoch, ΔT only enters through the obliquity of
/// date used by the EMB correction.
pub fn earth_state(jd_ut: f64, dt_days: f64) -> [f64; 6] {
    let eps_date = mean_obliquity_rad(jd_ut + dt_days);

    let mut xe = emb_equ_j2000(jd_ut);
    embofs(jd_ut, &mut xe, eps_date);

    let mut x2 = emb_equ_j2000(jd_ut - PLAN_SPEED_INTV);
    embofs(jd_ut - PLAN_SPEED_INTV, &mut x2, eps_date);

    [
        xe[0],
        xe[1],
        xe[2],
        (xe[0] - x2[0]) / PLAN_SPEED_INTV,
        (xe[1] - x2[1]) / PLAN_SPEED_INTV,
        (xe[2] - x2[2]) / PLAN_SPEED_INTV,
    ]
}

/// Heliocentric equatorial-J2000 state of a planet (position AU,
/// velocity AU/day).
pub fn planet_state(planet: Planet, jd_ut: f64) -> [f64; 6] {
    let eps2000 = mean_obliquity_rad(J2000_JD);

    let xp = rotate_x(&helio_ecl_j2000(planet, jd_ut), -eps2000);
    let x2 = rotate_x(
        &helio_ecl_j2000(planet, jd_ut - PLAN_SPEED_INTV),
        -eps2000,
    );

    [
        xp[0],
        xp[1],
        xp[2],
        (xp[0] - x2[0]) / PLAN_SPEED_INTV,
        (xp[1] - x2[1]) / PLAN_SPEED_INTV,
        (xp[2] - x2[2]) / PLAN_SPEED_INTV,
    ]
}
