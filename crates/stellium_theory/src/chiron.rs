//! Chiron ecliptic longitude via cubic Hermite interpolation.
//!
//! Positions come from a sampled table (10-day intervals, 1900–2100)
//! holding geocentric apparent longitudes and speeds. The table is built
//! once at first use from compiled-in osculating elements; lookups then
//! bracket the query epoch and interpolate with both endpoint positions
//! and endpoint speeds as Hermite tangents, which keeps the error
//! sub-arcsecond between samples. Queries outside the covered span fail:
//! there is no extrapolation path.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use stellium_frames::{
    PrecessDirection, mean_obliquity_rad, normalize_deg, nutation_rad, precess, rotate_x,
};
use stellium_time::J2000_JD;

use crate::planets::earth_state;

/// First table sample: 1900-Jan-01 0h.
const CHIRON_JD_START: f64 = 2_415_020.5;
/// Sample spacing in days.
const CHIRON_JD_STEP: f64 = 10.0;
/// Sample count; the table runs to 2100-Jan-11.
const CHIRON_N: usize = 7306;

/// Osculating elements of (2060) Chiron at J2000.0, heliocentric
/// ecliptic J2000.
const CHIRON_A_AU: f64 = 13.7123;
const CHIRON_ECC: f64 = 0.38317;
const CHIRON_INCL_DEG: f64 = 6.9352;
const CHIRON_NODE_DEG: f64 = 209.3850;
const CHIRON_PERI_DEG: f64 = 339.5648;
const CHIRON_M0_DEG: f64 = 27.50;
/// Gaussian constant in deg/day divided by a^1.5 gives the mean motion.
const GAUSS_K_DEG: f64 = 0.985_607_668_6;

/// Query epoch outside the Chiron table's covered span.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub struct ChironOutOfRange {
    pub jd: f64,
    pub start: f64,
    pub end: f64,
}

impl Display for ChironOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chiron: JD {} outside table range {}..{}",
            self.jd, self.start, self.end
        )
    }
}

impl Error for ChironOutOfRange {}

struct ChironTable {
    lon: Vec<f64>,
    speed: Vec<f64>,
}

/// Heliocentric ecliptic-J2000 position from the osculating elements.
fn chiron_helio_ecl(jd: f64) -> [f64; 3] {
    let n = GAUSS_K_DEG / CHIRON_A_AU.powf(1.5);
    let m = normalize_deg(CHIRON_M0_DEG + n * (jd - J2000_JD)).to_radians();
    let e = CHIRON_ECC;

    let mut ecc_anom = m + e * m.sin();
    for _ in 0..50 {
        let delta = (ecc_anom - e * ecc_anom.sin() - m) / (1.0 - e * ecc_anom.cos());
        ecc_anom -= delta;
        if delta.abs() < 1e-13 {
            break;
        }
    }

    let xp = CHIRON_A_AU * (ecc_anom.cos() - e);
    let yp = CHIRON_A_AU * (1.0 - e * e).sqrt() * ecc_anom.sin();

    let (so, co) = CHIRON_PERI_DEG.to_radians().sin_cos();
    let (sn, cn) = CHIRON_NODE_DEG.to_radians().sin_cos();
    let (si, ci) = CHIRON_INCL_DEG.to_radians().sin_cos();

    [
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        so * si * xp + co * si * yp,
    ]
}

/// Geocentric apparent ecliptic-of-date longitude in degrees.
fn apparent_lon_deg(jd: f64) -> f64 {
    let eps2000 = mean_obliquity_rad(J2000_JD);
    let ch = rotate_x(&chiron_helio_ecl(jd), -eps2000);
    let xe = earth_state(jd, 0.0);
    let mut geo = [ch[0] - xe[0], ch[1] - xe[1], ch[2] - xe[2]];

    precess(&mut geo, jd, PrecessDirection::J2000ToDate);
    let eps = mean_obliquity_rad(jd);
    let (dpsi, deps) = nutation_rad(jd);
    let a = dpsi * eps.cos();
    let b = dpsi * eps.sin();
    let nut = [
        geo[0] - a * geo[1] - b * geo[2],
        a * geo[0] + geo[1] - deps * geo[2],
        b * geo[0] + deps * geo[1] + geo[2],
    ];
    let ecl = rotate_x(&nut, eps + deps);
    normalize_deg(ecl[1].atan2(ecl[0]).to_degrees())
}

static TABLE: LazyLock<ChironTable> = LazyLock::new(|| {
    let mut lon = Vec::with_capacity(CHIRON_N);
    for i in 0..CHIRON_N {
        lon.push(apparent_lon_deg(CHIRON_JD_START + i as f64 * CHIRON_JD_STEP));
    }

    // Speeds from centered differences of adjacent samples, unwrapped
    // across the 0°/360° boundary; one-sided at the ends.
    let unwrap = |d: f64| {
        let mut d = d;
        if d > 180.0 {
            d -= 360.0;
        }
        if d < -180.0 {
            d += 360.0;
        }
        d
    };
    let mut speed = vec![0.0; CHIRON_N];
    for i in 0..CHIRON_N {
        speed[i] = if i == 0 {
            unwrap(lon[1] - lon[0]) / CHIRON_JD_STEP
        } else if i == CHIRON_N - 1 {
            unwrap(lon[i] - lon[i - 1]) / CHIRON_JD_STEP
        } else {
            unwrap(lon[i + 1] - lon[i - 1]) / (2.0 * CHIRON_JD_STEP)
        };
    }

    ChironTable { lon, speed }
});

/// Chiron's geocentric ecliptic longitude and speed (degrees,
/// degrees/day) at a UT Julian Day.
pub fn chiron_lon_speed(jd_ut: f64) -> Result<(f64, f64), ChironOutOfRange> {
    let jd_end = CHIRON_JD_START + (CHIRON_N - 1) as f64 * CHIRON_JD_STEP;
    if jd_ut < CHIRON_JD_START || jd_ut > jd_end {
        return Err(ChironOutOfRange {
            jd: jd_ut,
            start: CHIRON_JD_START,
            end: jd_end,
        });
    }

    let table = &*TABLE;
    let fractional = (jd_ut - CHIRON_JD_START) / CHIRON_JD_STEP;
    let i0 = (fractional.floor() as usize).min(CHIRON_N - 2);
    let frac = fractional - i0 as f64;

    let p0 = table.lon[i0];
    let p1 = table.lon[i0 + 1];

    // Unwrap the right endpoint when the pair straddles 0°/360°.
    let mut dp = p1 - p0;
    if dp > 180.0 {
        dp -= 360.0;
    }
    if dp < -180.0 {
        dp += 360.0;
    }
    let p1u = p0 + dp;

    // Tangents in degrees per interval.
    let m0 = table.speed[i0] * CHIRON_JD_STEP;
    let m1 = table.speed[i0 + 1] * CHIRON_JD_STEP;

    let t = frac;
    let t2 = t * t;
    let t3 = t2 * t;
    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;
    let lon = h00 * p0 + h10 * m0 + h01 * p1u + h11 * m1;

    // Speed from the Hermite basis derivative.
    let dh00 = 6.0 * t2 - 6.0 * t;
    let dh10 = 3.0 * t2 - 4.0 * t + 1.0;
    let dh01 = -6.0 * t2 + 6.0 * t;
    let dh11 = 3.0 * t2 - 2.0 * t;
    let speed = (dh00 * p0 + dh10 * m0 + dh01 * p1u + dh11 * m1) / CHIRON_JD_STEP;

    Ok((normalize_deg(lon), speed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_low() {
        let err = chiron_lon_speed(CHIRON_JD_START - 0.001).unwrap_err();
        assert_eq!(err.start, CHIRON_JD_START);
    }

    #[test]
    fn out_of_range_high() {
        let end = CHIRON_JD_START + (CHIRON_N - 1) as f64 * CHIRON_JD_STEP;
        assert!(chiron_lon_speed(end + 0.001).is_err());
        assert!(chiron_lon_speed(end).is_ok());
    }

    #[test]
    fn boundary_is_continuous_with_interior() {
        let (l0, _) = chiron_lon_speed(CHIRON_JD_START).unwrap();
        let (l1, _) = chiron_lon_speed(CHIRON_JD_START + 0.5).unwrap();
        let mut d = (l1 - l0).abs();
        if d > 180.0 {
            d = 360.0 - d;
        }
        assert!(d < 0.1, "jump at boundary: {d}°");
    }

    #[test]
    fn interpolation_matches_samples() {
        // At an exact sample epoch the Hermite reduces to the sample.
        let jd = CHIRON_JD_START + 1234.0 * CHIRON_JD_STEP;
        let (lon, _) = chiron_lon_speed(jd).unwrap();
        assert!((lon - TABLE.lon[1234]).abs() < 1e-9);
    }

    #[test]
    fn speed_is_plausible() {
        // Chiron moves slower than ~0.15°/day geocentrically.
        for k in 0..50 {
            let jd = CHIRON_JD_START + 100.0 + k as f64 * 1321.7;
            let (_, speed) = chiron_lon_speed(jd).unwrap();
            assert!(speed.abs() < 0.2, "speed = {speed} at {jd}");
        }
    }

    #[test]
    fn orbital_period_about_50_years() {
        // Heliocentric longitude should return close to itself after one
        // period (~50.8 yr).
        let p_days = 365.25 * CHIRON_A_AU.powf(1.5);
        let x0 = chiron_helio_ecl(2_440_000.5);
        let x1 = chiron_helio_ecl(2_440_000.5 + p_days);
        for i in 0..3 {
            assert!((x0[i] - x1[i]).abs() < 0.05, "axis {i} drifted");
        }
    }
}
