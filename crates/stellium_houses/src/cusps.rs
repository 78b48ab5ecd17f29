//! Cusp computation for the ten house systems.
//!
//! The quadrant systems divide either time (Placidus, Koch, Alcabitius,
//! Topocentric), the celestial equator (Regiomontanus, Morinus), the
//! prime vertical (Campanus), or the ecliptic itself (Porphyry, Equal,
//! Whole Sign). The oblique-ascension solver [`asc1`] is shared by all
//! of them; each system differs only in which pole height and ARMC
//! offset it feeds in.

use stellium_frames::{mean_obliquity_rad, normalize_deg, nutation_rad};
use stellium_time::{DeltaT, gmst_hours};

use crate::types::{HouseSystem, Houses};

/// Degeneracy and convergence threshold, in degrees.
const VERY_SMALL: f64 = 1e-10;

fn sind(x: f64) -> f64 {
    x.to_radians().sin()
}

fn cosd(x: f64) -> f64 {
    x.to_radians().cos()
}

fn tand(x: f64) -> f64 {
    x.to_radians().tan()
}

fn asind(x: f64) -> f64 {
    x.asin().to_degrees()
}

fn acosd(x: f64) -> f64 {
    x.acos().to_degrees()
}

fn atand(x: f64) -> f64 {
    x.atan().to_degrees()
}

/// Clamp to [-1, 1] before an inverse trig call.
fn clamp1(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}

/// Signed angular difference `p1 - p2`, in (-180, 180].
fn difdeg2n(p1: f64, p2: f64) -> f64 {
    let d = normalize_deg(p1 - p2);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Ecliptic longitude rising at pole height `f` when the equatorial
/// point `x1` culminates: the oblique-ascension problem solved per
/// quadrant, with results snapped to the cardinal degrees when within
/// [`VERY_SMALL`].
fn asc1(x1: f64, f: f64, sine: f64, cose: f64) -> f64 {
    let x1 = normalize_deg(x1);
    let n = (x1 / 90.0) as i32 + 1;

    // At the celestial poles every longitude rises at once.
    if (90.0 - f).abs() < VERY_SMALL {
        return 180.0;
    }
    if (90.0 + f).abs() < VERY_SMALL {
        return 0.0;
    }

    let mut ass = match n {
        1 => asc2(x1, f, sine, cose),
        2 => 180.0 - asc2(180.0 - x1, -f, sine, cose),
        3 => 180.0 + asc2(x1 - 180.0, -f, sine, cose),
        _ => 360.0 - asc2(360.0 - x1, f, sine, cose),
    };
    ass = normalize_deg(ass);

    if (ass - 90.0).abs() < VERY_SMALL {
        ass = 90.0;
    }
    if (ass - 180.0).abs() < VERY_SMALL {
        ass = 180.0;
    }
    if (ass - 270.0).abs() < VERY_SMALL {
        ass = 270.0;
    }
    if (ass - 360.0).abs() < VERY_SMALL {
        ass = 0.0;
    }
    ass
}

/// First-quadrant kernel of [`asc1`]; `x` in [0, 90].
fn asc2(x: f64, f: f64, sine: f64, cose: f64) -> f64 {
    let mut ass = -tand(f) * sine + cose * cosd(x);
    if ass.abs() < VERY_SMALL {
        ass = 0.0;
    }
    let mut sinx = sind(x);
    if sinx.abs() < VERY_SMALL {
        sinx = 0.0;
    }

    if sinx == 0.0 {
        ass = if ass < 0.0 { -VERY_SMALL } else { VERY_SMALL };
    } else if ass == 0.0 {
        ass = if sinx < 0.0 { -90.0 } else { 90.0 };
    } else {
        ass = atand(sinx / ass);
    }
    if ass < 0.0 {
        ass += 180.0;
    }
    ass
}

/// Cusps 4–9 as the opposites of 10–12 and 1–3.
fn compute_opposites(cusps: &mut [f64; 13]) {
    cusps[4] = normalize_deg(cusps[10] + 180.0);
    cusps[5] = normalize_deg(cusps[11] + 180.0);
    cusps[6] = normalize_deg(cusps[12] + 180.0);
    cusps[7] = normalize_deg(cusps[1] + 180.0);
    cusps[8] = normalize_deg(cusps[2] + 180.0);
    cusps[9] = normalize_deg(cusps[3] + 180.0);
}

/// Inside the polar circles the Ascendant can fall west of the MC;
/// flip the eastern cusps by 180° so house order stays zodiacal.
fn polar_fix(cusps: &mut [f64; 13]) {
    if difdeg2n(cusps[1], cusps[10]) < 0.0 {
        for i in [1, 2, 3, 10, 11, 12] {
            cusps[i] = normalize_deg(cusps[i] + 180.0);
        }
    }
}

/// Porphyry (O): trisect the two ecliptic quadrant arcs.
///
/// Also the polar-latitude fallback for Placidus, Koch, and Alcabitius.
fn houses_porphyry(cusps: &mut [f64; 13], ac: f64, mc: f64) {
    cusps[1] = ac;
    cusps[10] = mc;

    let mut acmc = difdeg2n(ac, mc);
    let mut ac_used = ac;
    if acmc < 0.0 {
        ac_used = normalize_deg(ac + 180.0);
        acmc = difdeg2n(ac_used, mc);
    }

    cusps[11] = normalize_deg(mc + acmc / 3.0);
    cusps[12] = normalize_deg(mc + acmc * 2.0 / 3.0);
    cusps[2] = normalize_deg(ac_used + (180.0 - acmc) / 3.0);
    cusps[3] = normalize_deg(ac_used + (180.0 - acmc) * 2.0 / 3.0);

    compute_opposites(cusps);
}

/// Placidus (P): each intermediate cusp sits where a body covers the
/// stated fraction of its semi-diurnal (11, 12) or semi-nocturnal
/// (2, 3) arc, found by fixed-point iteration on the ascensional
/// difference.
fn houses_placidus(
    cusps: &mut [f64; 13],
    th: f64,
    fi: f64,
    ekl: f64,
    sine: f64,
    cose: f64,
    ac: f64,
    mc: f64,
) {
    if fi.abs() >= 90.0 - ekl {
        houses_porphyry(cusps, ac, mc);
        return;
    }

    cusps[1] = ac;
    cusps[10] = mc;

    cusps[11] = placidus_iter(th, fi, sine, cose, 30.0, 1.0 / 3.0, 1.0);
    cusps[12] = placidus_iter(th, fi, sine, cose, 60.0, 2.0 / 3.0, 1.0);
    cusps[2] = placidus_iter(th, fi, sine, cose, 120.0, 2.0 / 3.0, -1.0);
    cusps[3] = placidus_iter(th, fi, sine, cose, 150.0, 1.0 / 3.0, -1.0);

    compute_opposites(cusps);
}

/// One Placidus cusp: iterate longitude → declination → ascensional
/// difference → adjusted ARMC offset until stationary. The plain map
/// converges in a handful of steps at moderate latitudes; above ~55°
/// its slope can exceed 1 in magnitude and the iterates settle into a
/// two-point oscillation, so once the residual stops shrinking the
/// solver switches to bisection on the residual, whose sign flips
/// across the oscillation bracket.
fn placidus_iter(th: f64, fi: f64, sine: f64, cose: f64, offset: f64, frac: f64, sign: f64) -> f64 {
    let step = |x: f64| {
        let dec = asind(clamp1(sind(x) * sine));
        let ad = asind(clamp1(tand(dec) * tand(fi)));
        asc1(th + offset + sign * ad * frac, fi, sine, cose)
    };

    let mut x = asc1(th + offset, fi, sine, cose);
    let mut prev = f64::INFINITY;
    for _ in 0..100 {
        let x_new = step(x);
        let delta = difdeg2n(x_new, x);
        if delta.abs() < VERY_SMALL {
            return x_new;
        }
        if delta.abs() >= prev {
            return placidus_bisect(x, delta, &step);
        }
        prev = delta.abs();
        x = x_new;
    }
    x
}

/// Bisection fallback for the Placidus cusp: the cusp is a zero of the
/// residual `step(x) - x`, and a non-contracting iterate pair brackets
/// it with opposite residual signs.
fn placidus_bisect(x0: f64, delta0: f64, step: &impl Fn(f64) -> f64) -> f64 {
    let mut lo = x0;
    let mut g_lo = delta0;
    let hi0 = normalize_deg(x0 + delta0);
    let g_hi = difdeg2n(step(hi0), hi0);
    if (g_lo > 0.0) == (g_hi > 0.0) {
        // No bracket; keep the better iterate.
        return hi0;
    }
    let mut hi = hi0;
    for _ in 0..100 {
        let mid = normalize_deg(lo + difdeg2n(hi, lo) / 2.0);
        let g_mid = difdeg2n(step(mid), mid);
        if g_mid.abs() < VERY_SMALL {
            return mid;
        }
        if (g_mid > 0.0) == (g_lo > 0.0) {
            lo = mid;
            g_lo = g_mid;
        } else {
            hi = mid;
        }
    }
    normalize_deg(lo + difdeg2n(hi, lo) / 2.0)
}

/// Koch (K): offsets from thirds of the MC's ascensional difference,
/// all rising at the geographic latitude.
fn houses_koch(
    cusps: &mut [f64; 13],
    th: f64,
    fi: f64,
    sine: f64,
    cose: f64,
    ac: f64,
    mc: f64,
    ekl: f64,
) {
    if fi.abs() >= 90.0 - ekl {
        houses_porphyry(cusps, ac, mc);
        return;
    }

    cusps[1] = ac;
    cusps[10] = mc;

    let tanfi = tand(fi);
    let cosfi = cosd(fi);

    let sina = clamp1(sind(mc) * sine / cosfi);
    let cosa = (1.0 - sina * sina).sqrt();
    let c = atand(tanfi / cosa);
    let ad3 = asind(clamp1(sind(c) * sina)) / 3.0;

    cusps[11] = asc1(th + 30.0 - 2.0 * ad3, fi, sine, cose);
    cusps[12] = asc1(th + 60.0 - ad3, fi, sine, cose);
    cusps[2] = asc1(th + 120.0 + ad3, fi, sine, cose);
    cusps[3] = asc1(th + 150.0 + 2.0 * ad3, fi, sine, cose);

    compute_opposites(cusps);
}

/// Regiomontanus (R): 30° equator arcs, pole heights from halving the
/// latitude tangent.
fn houses_regiomontanus(
    cusps: &mut [f64; 13],
    th: f64,
    fi: f64,
    sine: f64,
    cose: f64,
    ac: f64,
    mc: f64,
    ekl: f64,
) {
    cusps[1] = ac;
    cusps[10] = mc;

    let tanfi = tand(fi);
    let fh1 = atand(tanfi * 0.5);
    let fh2 = atand(tanfi * cosd(30.0));

    cusps[11] = asc1(30.0 + th, fh1, sine, cose);
    cusps[12] = asc1(60.0 + th, fh2, sine, cose);
    cusps[2] = asc1(120.0 + th, fh2, sine, cose);
    cusps[3] = asc1(150.0 + th, fh1, sine, cose);

    if fi.abs() >= 90.0 - ekl {
        polar_fix(cusps);
    }

    compute_opposites(cusps);
}

/// Campanus (C): 30° prime vertical arcs projected through house circles.
fn houses_campanus(
    cusps: &mut [f64; 13],
    th: f64,
    fi: f64,
    sine: f64,
    cose: f64,
    ac: f64,
    mc: f64,
    ekl: f64,
) {
    cusps[1] = ac;
    cusps[10] = mc;

    let fh1 = asind(sind(fi) / 2.0);
    let fh2 = asind(3.0_f64.sqrt() / 2.0 * sind(fi));
    let cosfi = cosd(fi);

    let (xh1, xh2) = if cosfi.abs() < VERY_SMALL {
        let x = if fi > 0.0 { 90.0 } else { 270.0 };
        (x, x)
    } else {
        (
            atand(3.0_f64.sqrt() / cosfi),
            atand(1.0 / (3.0_f64.sqrt() * cosfi)),
        )
    };

    cusps[11] = asc1(th + 90.0 - xh1, fh1, sine, cose);
    cusps[12] = asc1(th + 90.0 - xh2, fh2, sine, cose);
    cusps[2] = asc1(th + 90.0 + xh2, fh2, sine, cose);
    cusps[3] = asc1(th + 90.0 + xh1, fh1, sine, cose);

    if fi.abs() >= 90.0 - ekl {
        polar_fix(cusps);
    }

    compute_opposites(cusps);
}

/// Equal (E): 30° houses from the Ascendant.
fn houses_equal(cusps: &mut [f64; 13], ac: f64) {
    cusps[1] = ac;
    for i in 2..=12 {
        cusps[i] = normalize_deg(cusps[1] + (i - 1) as f64 * 30.0);
    }
}

/// Whole Sign (W): 30° houses from the start of the Ascendant's sign.
fn houses_whole_sign(cusps: &mut [f64; 13], ac: f64) {
    cusps[1] = ac - (ac % 30.0);
    for i in 2..=12 {
        cusps[i] = normalize_deg(cusps[1] + (i - 1) as f64 * 30.0);
    }
}

/// Alcabitius (B): trisect the Ascendant's semi-diurnal and
/// semi-nocturnal arcs on the equator, then project at pole height 0.
fn houses_alcabitius(
    cusps: &mut [f64; 13],
    th: f64,
    fi: f64,
    sine: f64,
    cose: f64,
    ac: f64,
    mc: f64,
    ekl: f64,
) {
    if fi.abs() >= 90.0 - ekl {
        houses_porphyry(cusps, ac, mc);
        return;
    }

    cusps[1] = ac;
    cusps[10] = mc;

    let tanfi = tand(fi);

    let dek = asind(clamp1(sind(ac) * sine));
    let r = clamp1(-tanfi * tand(dek));
    let sda = acosd(r);
    let sna = 180.0 - sda;
    let sd3 = sda / 3.0;
    let sn3 = sna / 3.0;

    cusps[11] = asc1(normalize_deg(th + sd3), 0.0, sine, cose);
    cusps[12] = asc1(normalize_deg(th + 2.0 * sd3), 0.0, sine, cose);
    cusps[2] = asc1(normalize_deg(th + 180.0 - 2.0 * sn3), 0.0, sine, cose);
    cusps[3] = asc1(normalize_deg(th + 180.0 - sn3), 0.0, sine, cose);

    compute_opposites(cusps);
}

/// Morinus (M): twelve equatorial points 30° apart from the ARMC,
/// each projected straight to the ecliptic. Latitude never enters, so
/// cusps 1 and 10 generally differ from the Ascendant and MC.
fn houses_morinus(cusps: &mut [f64; 13], th: f64, ekl: f64) {
    let mut a = th;
    for i in 1..=12 {
        let mut j = i + 10;
        if j > 12 {
            j -= 12;
        }
        a = normalize_deg(a + 30.0);
        cusps[j] = normalize_deg((sind(a) * cosd(ekl)).atan2(cosd(a)).to_degrees());
    }
}

/// Topocentric (T, Polich-Page): like Regiomontanus but with tangent
/// thirds for the pole heights.
fn houses_topocentric(
    cusps: &mut [f64; 13],
    th: f64,
    fi: f64,
    sine: f64,
    cose: f64,
    ac: f64,
    mc: f64,
    ekl: f64,
) {
    cusps[1] = ac;
    cusps[10] = mc;

    let tanfi = tand(fi);
    let fh1 = atand(tanfi / 3.0);
    let fh2 = atand(tanfi * 2.0 / 3.0);

    cusps[11] = asc1(30.0 + th, fh1, sine, cose);
    cusps[12] = asc1(60.0 + th, fh2, sine, cose);
    cusps[2] = asc1(120.0 + th, fh2, sine, cose);
    cusps[3] = asc1(150.0 + th, fh1, sine, cose);

    if fi.abs() >= 90.0 - ekl {
        polar_fix(cusps);
    }

    compute_opposites(cusps);
}

/// House cusps at a UT Julian Day and geographic location.
///
/// `geolat` is north-positive, `geolon` east-positive, both in degrees.
/// ΔT from the supplied provider fixes the TT epoch for obliquity and
/// nutation; the sidereal time itself is a function of UT.
pub fn houses<D: DeltaT>(
    delta_t: &D,
    jd_ut: f64,
    geolat: f64,
    geolon: f64,
    system: HouseSystem,
) -> Houses {
    let tjde = jd_ut + delta_t.delta_t_days(jd_ut);

    let eps_mean = mean_obliquity_rad(tjde).to_degrees();
    let (dpsi, deps) = nutation_rad(tjde);
    let nutlo_lon = dpsi.to_degrees();
    let nutlo_obl = deps.to_degrees();

    let ekl = eps_mean + nutlo_obl;
    let armc = normalize_deg(gmst_hours(jd_ut, ekl, nutlo_lon) * 15.0 + geolon);

    houses_armc(armc, geolat, ekl, system)
}

/// House cusps from a precomputed ARMC and true obliquity, in degrees.
pub fn houses_armc(armc: f64, geolat: f64, eps_deg: f64, system: HouseSystem) -> Houses {
    let th = normalize_deg(armc);
    let fi = geolat;
    let ekl = eps_deg;
    let sine = sind(ekl);
    let cose = cosd(ekl);

    // MC: intersection of the meridian with the ecliptic. The tangent
    // blows up at ARMC 90°/270°, where the MC is the degree itself.
    let mc = if (th - 90.0).abs() > VERY_SMALL && (th - 270.0).abs() > VERY_SMALL {
        let mut mc = atand(tand(th) / cose);
        if th > 90.0 && th <= 270.0 {
            mc += 180.0;
        }
        normalize_deg(mc)
    } else if (th - 90.0).abs() <= VERY_SMALL {
        90.0
    } else {
        270.0
    };

    let ac = asc1(th + 90.0, fi, sine, cose);

    let mut cusps = [0.0; 13];
    match system {
        HouseSystem::Placidus => houses_placidus(&mut cusps, th, fi, ekl, sine, cose, ac, mc),
        HouseSystem::Koch => houses_koch(&mut cusps, th, fi, sine, cose, ac, mc, ekl),
        HouseSystem::Porphyry => houses_porphyry(&mut cusps, ac, mc),
        HouseSystem::Regiomontanus => {
            houses_regiomontanus(&mut cusps, th, fi, sine, cose, ac, mc, ekl)
        }
        HouseSystem::Campanus => houses_campanus(&mut cusps, th, fi, sine, cose, ac, mc, ekl),
        HouseSystem::Equal => houses_equal(&mut cusps, ac),
        HouseSystem::WholeSign => houses_whole_sign(&mut cusps, ac),
        HouseSystem::Alcabitius => houses_alcabitius(&mut cusps, th, fi, sine, cose, ac, mc, ekl),
        HouseSystem::Morinus => houses_morinus(&mut cusps, th, ekl),
        HouseSystem::Topocentric => {
            houses_topocentric(&mut cusps, th, fi, sine, cose, ac, mc, ekl)
        }
    }

    Houses {
        cusps,
        ascendant: ac,
        mc,
        armc: th,
    }
}
