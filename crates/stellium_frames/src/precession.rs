//! Precession of equatorial rectangular coordinates — IAU 1976 (Lieske).

use stellium_time::J2000_JD;

/// Direction of the precession rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecessDirection {
    /// From the J2000 frame to the frame of date.
    J2000ToDate,
    /// From the frame of date back to J2000.
    DateToJ2000,
}

/// Precess an equatorial cartesian vector between J2000 and `jd_tt`.
///
/// Uses the IAU 1976 precession angles ζ, z, θ (Lieske, Astron.
/// Astrophys. 73, 282, 1979), each a quintic polynomial in Julian
/// centuries, applied as an explicit 3×3 rotation.
pub fn precess(r: &mut [f64; 3], jd_tt: f64, direction: PrecessDirection) {
    let t = (jd_tt - J2000_JD) / 36525.0;

    let zeta = (((((-0.000_000_2 * t - 0.000_032_7) * t + 0.017_966_3) * t + 0.301_901_5) * t
        + 2306.2181)
        * t)
        .to_radians()
        / 3600.0;
    let z = (((((-0.000_000_3 * t - 0.000_047) * t + 0.018_223_7) * t + 1.094_779_0) * t
        + 2306.2181)
        * t)
        .to_radians()
        / 3600.0;
    let theta = (((((-0.000_000_1 * t - 0.000_060_1) * t - 0.041_825_1) * t - 0.426_935_3) * t
        + 2004.3109)
        * t)
        .to_radians()
        / 3600.0;

    let sin_th = theta.sin();
    let cos_th = theta.cos();
    let sin_zeta = zeta.sin();
    let cos_zeta = zeta.cos();
    let sin_z = z.sin();
    let cos_z = z.cos();
    let a = cos_zeta * cos_th;
    let b = sin_zeta * cos_th;

    let x = match direction {
        PrecessDirection::J2000ToDate => [
            (a * cos_z - sin_zeta * sin_z) * r[0]
                - (b * cos_z + cos_zeta * sin_z) * r[1]
                - sin_th * cos_z * r[2],
            (a * sin_z + sin_zeta * cos_z) * r[0] - (b * sin_z - cos_zeta * cos_z) * r[1]
                - sin_th * sin_z * r[2],
            cos_zeta * sin_th * r[0] - sin_zeta * sin_th * r[1] + cos_th * r[2],
        ],
        PrecessDirection::DateToJ2000 => [
            (a * cos_z - sin_zeta * sin_z) * r[0]
                + (a * sin_z + sin_zeta * cos_z) * r[1]
                + cos_zeta * sin_th * r[2],
            -(b * cos_z + cos_zeta * sin_z) * r[0] - (b * sin_z - cos_zeta * cos_z) * r[1]
                - sin_zeta * sin_th * r[2],
            -sin_th * cos_z * r[0] - sin_th * sin_z * r[1] + cos_th * r[2],
        ],
    };
    *r = x;
}
