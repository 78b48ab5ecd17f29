//! Mean obliquity of the ecliptic — IAU 1976 (Lieske).

use stellium_time::J2000_JD;

/// Mean obliquity of the ecliptic at a TT Julian Day, in radians.
///
/// Lieske (1977) cubic, the companion model to the IAU 1976 precession.
pub fn mean_obliquity_rad(jd_tt: f64) -> f64 {
    let t = (jd_tt - J2000_JD) / 36525.0;
    // Arcseconds.
    let eps = ((1.813e-3 * t - 5.9e-4) * t - 46.8150) * t + 84381.448;
    (eps / 3600.0).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        // 84381.448" = 23.4392911...°
        let eps = mean_obliquity_rad(J2000_JD).to_degrees();
        assert!((eps - 23.439_291_1).abs() < 1e-6, "eps = {eps}");
    }

    #[test]
    fn decreases_slowly() {
        let e2000 = mean_obliquity_rad(J2000_JD);
        let e2100 = mean_obliquity_rad(J2000_JD + 36525.0);
        let d_arcsec = (e2000 - e2100).to_degrees() * 3600.0;
        // ~46.8" per century.
        assert!((d_arcsec - 46.8).abs() < 0.1, "drift = {d_arcsec}\"");
    }
}
