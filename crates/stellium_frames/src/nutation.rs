//! Nutation in longitude and obliquity — IAU 1980 with Herring (1987)
//! corrections.
//!
//! 105 tabulated lunisolar terms plus 7 correction terms; the series'
//! leading secular pair in sin Ω / cos Ω is applied outside the table.

use crate::vectors::normalize_deg;
use stellium_time::J2000_JD;

/// One nutation term.
///
/// `[MM, MS, FF, DD, OM, LS, LS2, OC, OC2]`: five integer multipliers of
/// the fundamental arguments, then the longitude amplitude LS (0.0001")
/// with secular part LS2 (0.00001"·T), then the obliquity pair OC/OC2 in
/// the same units.
///
/// Rows with a first entry of 101 or 102 are Herring 1987 corrections:
/// their first multiplier is zero, amplitudes are scaled by 0.1, and
/// flag 102 swaps the sine/cosine roles (cos for Δψ, sin for Δε).
#[rustfmt::skip]
static NUTATION_TERMS: [[i32; 9]; 112] = [
    [  0, 0, 0, 0, 2,  2062,  2, -895,  5],
    [ -2, 0, 2, 0, 1,    46,  0,  -24,  0],
    [  2, 0,-2, 0, 0,    11,  0,    0,  0],
    [ -2, 0, 2, 0, 2,    -3,  0,    1,  0],
    [  1,-1, 0,-1, 0,    -3,  0,    0,  0],
    [  0,-2, 2,-2, 1,    -2,  0,    1,  0],
    [  2, 0,-2, 0, 1,     1,  0,    0,  0],
    [  0, 0, 2,-2, 2,-13187,-16, 5736,-31],
    [  0, 1, 0, 0, 0,  1426,-34,   54, -1],
    [  0, 1, 2,-2, 2,  -517, 12,  224, -6],
    [  0,-1, 2,-2, 2,   217, -5,  -95,  3],
    [  0, 0, 2,-2, 1,   129,  1,  -70,  0],
    [  2, 0, 0,-2, 0,    48,  0,    1,  0],
    [  0, 0, 2,-2, 0,   -22,  0,    0,  0],
    [  0, 2, 0, 0, 0,    17, -1,    0,  0],
    [  0, 1, 0, 0, 1,   -15,  0,    9,  0],
    [  0, 2, 2,-2, 2,   -16,  1,    7,  0],
    [  0,-1, 0, 0, 1,   -12,  0,    6,  0],
    [ -2, 0, 0, 2, 1,    -6,  0,    3,  0],
    [  0,-1, 2,-2, 1,    -5,  0,    3,  0],
    [  2, 0, 0,-2, 1,     4,  0,   -2,  0],
    [  0, 1, 2,-2, 1,     4,  0,   -2,  0],
    [  1, 0, 0,-1, 0,    -4,  0,    0,  0],
    [  2, 1, 0,-2, 0,     1,  0,    0,  0],
    [  0, 0,-2, 2, 1,     1,  0,    0,  0],
    [  0, 1,-2, 2, 0,    -1,  0,    0,  0],
    [  0, 1, 0, 0, 2,     1,  0,    0,  0],
    [ -1, 0, 0, 1, 1,     1,  0,    0,  0],
    [  0, 1, 2,-2, 0,    -1,  0,    0,  0],
    [  0, 0, 2, 0, 2, -2274, -2,  977, -5],
    [  1, 0, 0, 0, 0,   712,  1,   -7,  0],
    [  0, 0, 2, 0, 1,  -386, -4,  200,  0],
    [  1, 0, 2, 0, 2,  -301,  0,  129, -1],
    [  1, 0, 0,-2, 0,  -158,  0,   -1,  0],
    [ -1, 0, 2, 0, 2,   123,  0,  -53,  0],
    [  0, 0, 0, 2, 0,    63,  0,   -2,  0],
    [  1, 0, 0, 0, 1,    63,  1,  -33,  0],
    [ -1, 0, 0, 0, 1,   -58, -1,   32,  0],
    [ -1, 0, 2, 2, 2,   -59,  0,   26,  0],
    [  1, 0, 2, 0, 1,   -51,  0,   27,  0],
    [  0, 0, 2, 2, 2,   -38,  0,   16,  0],
    [  2, 0, 0, 0, 0,    29,  0,   -1,  0],
    [  1, 0, 2,-2, 2,    29,  0,  -12,  0],
    [  2, 0, 2, 0, 2,   -31,  0,   13,  0],
    [  0, 0, 2, 0, 0,    26,  0,   -1,  0],
    [ -1, 0, 2, 0, 1,    21,  0,  -10,  0],
    [ -1, 0, 0, 2, 1,    16,  0,   -8,  0],
    [  1, 0, 0,-2, 1,   -13,  0,    7,  0],
    [ -1, 0, 2, 2, 1,   -10,  0,    5,  0],
    [  1, 1, 0,-2, 0,    -7,  0,    0,  0],
    [  0, 1, 2, 0, 2,     7,  0,   -3,  0],
    [  0,-1, 2, 0, 2,    -7,  0,    3,  0],
    [  1, 0, 2, 2, 2,    -8,  0,    3,  0],
    [  1, 0, 0, 2, 0,     6,  0,    0,  0],
    [  2, 0, 2,-2, 2,     6,  0,   -3,  0],
    [  0, 0, 0, 2, 1,    -6,  0,    3,  0],
    [  0, 0, 2, 2, 1,    -7,  0,    3,  0],
    [  1, 0, 2,-2, 1,     6,  0,   -3,  0],
    [  0, 0, 0,-2, 1,    -5,  0,    3,  0],
    [  1,-1, 0, 0, 0,     5,  0,    0,  0],
    [  2, 0, 2, 0, 1,    -5,  0,    3,  0],
    [  0, 1, 0,-2, 0,    -4,  0,    0,  0],
    [  1, 0,-2, 0, 0,     4,  0,    0,  0],
    [  0, 0, 0, 1, 0,    -4,  0,    0,  0],
    [  1, 1, 0, 0, 0,    -3,  0,    0,  0],
    [  1, 0, 2, 0, 0,     3,  0,    0,  0],
    [  1,-1, 2, 0, 2,    -3,  0,    1,  0],
    [ -1,-1, 2, 2, 2,    -3,  0,    1,  0],
    [ -2, 0, 0, 0, 1,    -2,  0,    1,  0],
    [  3, 0, 2, 0, 2,    -3,  0,    1,  0],
    [  0,-1, 2, 2, 2,    -3,  0,    1,  0],
    [  1, 1, 2, 0, 2,     2,  0,   -1,  0],
    [ -1, 0, 2,-2, 1,    -2,  0,    1,  0],
    [  2, 0, 0, 0, 1,     2,  0,   -1,  0],
    [  1, 0, 0, 0, 2,    -2,  0,    1,  0],
    [  3, 0, 0, 0, 0,     2,  0,    0,  0],
    [  0, 0, 2, 1, 2,     2,  0,   -1,  0],
    [ -1, 0, 0, 0, 2,     1,  0,   -1,  0],
    [  1, 0, 0,-4, 0,    -1,  0,    0,  0],
    [ -2, 0, 2, 2, 2,     1,  0,   -1,  0],
    [ -1, 0, 2, 4, 2,    -2,  0,    1,  0],
    [  2, 0, 0,-4, 0,    -1,  0,    0,  0],
    [  1, 1, 2,-2, 2,     1,  0,   -1,  0],
    [  1, 0, 2, 2, 1,    -1,  0,    1,  0],
    [ -2, 0, 2, 4, 2,    -1,  0,    1,  0],
    [ -1, 0, 4, 0, 2,     1,  0,    0,  0],
    [  1,-1, 0,-2, 0,     1,  0,    0,  0],
    [  2, 0, 2,-2, 1,     1,  0,   -1,  0],
    [  2, 0, 2, 2, 2,    -1,  0,    0,  0],
    [  1, 0, 0, 2, 1,    -1,  0,    0,  0],
    [  0, 0, 4,-2, 2,     1,  0,    0,  0],
    [  3, 0, 2,-2, 2,     1,  0,    0,  0],
    [  1, 0, 2,-2, 0,    -1,  0,    0,  0],
    [  0, 1, 2, 0, 1,     1,  0,    0,  0],
    [ -1,-1, 0, 2, 1,     1,  0,    0,  0],
    [  0, 0,-2, 0, 1,    -1,  0,    0,  0],
    [  0, 0, 2,-1, 2,    -1,  0,    0,  0],
    [  0, 1, 0, 2, 0,    -1,  0,    0,  0],
    [  1, 0,-2,-2, 0,    -1,  0,    0,  0],
    [  0,-1, 2, 0, 1,    -1,  0,    0,  0],
    [  1, 1, 0,-2, 1,    -1,  0,    0,  0],
    [  1, 0,-2, 2, 0,    -1,  0,    0,  0],
    [  2, 0, 0, 2, 0,     1,  0,    0,  0],
    [  0, 0, 2, 4, 2,    -1,  0,    0,  0],
    [  0, 1, 0, 1, 0,     1,  0,    0,  0],
    // Herring 1987 corrections (101: ×0.1; 102: ×0.1 with sin/cos swapped)
    [101, 0, 0, 0, 1,  -725,  0,  213,  0],
    [101, 1, 0, 0, 0,   523,  0,  208,  0],
    [101, 0, 2,-2, 2,   102,  0,  -41,  0],
    [101, 0, 2, 0, 2,   -81,  0,   32,  0],
    [102, 0, 0, 0, 1,   417,  0,  224,  0],
    [102, 1, 0, 0, 0,    61,  0,  -24,  0],
    [102, 0, 2,-2, 2,  -118,  0,  -47,  0],
];

/// Highest multiple of each fundamental argument used by the table
/// (MM, MS, FF, DD, OM).
const MAX_HARMONIC: [usize; 5] = [3, 2, 4, 4, 2];

/// Nutation in longitude (Δψ) and obliquity (Δε) at a TT Julian Day.
///
/// Returns radians. Fundamental arguments are the FK5 expressions used by
/// the IAU 1980 theory.
pub fn nutation_rad(jd_tt: f64) -> (f64, f64) {
    let t = (jd_tt - J2000_JD) / 36525.0;
    let t2 = t * t;

    // Fundamental arguments, arcseconds → degrees → radians.
    let om = normalize_deg((-6_962_890.539 * t + 450_160.280 + (0.008 * t + 7.455) * t2) / 3600.0)
        .to_radians();
    let ms = normalize_deg((129_596_581.224 * t + 1_287_099.804 - (0.012 * t + 0.577) * t2) / 3600.0)
        .to_radians();
    let mm = normalize_deg((1_717_915_922.633 * t + 485_866.733 + (0.064 * t + 31.310) * t2) / 3600.0)
        .to_radians();
    let ff = normalize_deg((1_739_527_263.137 * t + 335_778.877 + (0.011 * t - 13.257) * t2) / 3600.0)
        .to_radians();
    let dd = normalize_deg((1_602_961_601.328 * t + 1_072_261.307 + (0.019 * t - 6.891) * t2) / 3600.0)
        .to_radians();

    let args = [mm, ms, ff, dd, om];

    // Multiple-angle sin/cos per argument: 1× and 2× directly, higher
    // multiples by angle addition. The recurrence order is part of the
    // model's floating-point contract and must not be rearranged.
    let mut ss = [[0.0_f64; 4]; 5];
    let mut cc = [[0.0_f64; 4]; 5];
    for k in 0..5 {
        let su = args[k].sin();
        let cu = args[k].cos();
        ss[k][0] = su;
        cc[k][0] = cu;
        let mut sv = 2.0 * su * cu;
        let mut cv = cu * cu - su * su;
        ss[k][1] = sv;
        cc[k][1] = cv;
        for i in 2..MAX_HARMONIC[k] {
            let s = su * cv + cu * sv;
            cv = cu * cv - su * sv;
            sv = s;
            ss[k][i] = sv;
            cc[k][i] = cv;
        }
    }

    // Leading secular terms, not part of the table.
    let mut c = (-0.01742 * t - 17.1996) * ss[4][0];
    let mut d = (0.00089 * t + 9.2025) * cc[4][0];

    for row in &NUTATION_TERMS {
        // Compose sin/cos of the combined argument by angle addition,
        // skipping zero multipliers.
        let mut started = false;
        let mut sv = 0.0;
        let mut cv = 0.0;
        for m in 0..5 {
            let mut j = row[m];
            if j > 100 {
                // First entry doubles as the Herring flag.
                j = 0;
            }
            if j != 0 {
                let k = j.unsigned_abs() as usize;
                let mut su = ss[m][k - 1];
                if j < 0 {
                    su = -su;
                }
                let cu = cc[m][k - 1];
                if !started {
                    sv = su;
                    cv = cu;
                    started = true;
                } else {
                    let sw = su * cv + cu * sv;
                    cv = cu * cv - su * sv;
                    sv = sw;
                }
            }
        }

        // Amplitudes: 0.0001" with secular parts in 0.00001"·T.
        let mut f = row[5] as f64 * 0.0001;
        if row[6] != 0 {
            f += 0.00001 * t * row[6] as f64;
        }
        let mut g = row[7] as f64 * 0.0001;
        if row[8] != 0 {
            g += 0.00001 * t * row[8] as f64;
        }
        if row[0] >= 100 {
            f *= 0.1;
            g *= 0.1;
        }

        if row[0] != 102 {
            c += f * sv;
            d += g * cv;
        } else {
            c += f * cv;
            d += g * sv;
        }
    }

    ((c / 3600.0).to_radians(), (d / 3600.0).to_radians())
}
