//! Greenwich Mean Sidereal Time — IAU 1976.
//!
//! GMST polynomial from the IAU 1976 system (Aoki et al. 1982), with the
//! equation of equinoxes applied from the caller-supplied nutation in
//! longitude and true obliquity.

use crate::julian::J2000_JD;

/// Greenwich (apparent) sidereal time in hours [0, 24).
///
/// `eps_true_deg` is the true obliquity (mean + nutation in obliquity) in
/// degrees; `dpsi_deg` the nutation in longitude in degrees. Both are
/// evaluated by the caller at the TT epoch matching `jd_ut`.
pub fn gmst_hours(jd_ut: f64, eps_true_deg: f64, dpsi_deg: f64) -> f64 {
    // Split into 0h-UT day and seconds of day.
    let mut jd0 = jd_ut.floor();
    let mut secs = jd_ut - jd0;
    if secs < 0.5 {
        jd0 -= 0.5;
        secs += 0.5;
    } else {
        jd0 += 0.5;
        secs -= 0.5;
    }
    secs *= 86400.0;

    let tu = (jd0 - J2000_JD) / 36525.0;
    let mut gmst = ((-6.2e-6 * tu + 9.3104e-2) * tu + 8_640_184.812866) * tu + 24110.54841;
    // Sidereal seconds elapsed per UT second at this epoch.
    let msday = 1.0 + ((-1.86e-5 * tu + 0.186208) * tu + 8_640_184.812866) / (86400.0 * 36525.0);
    gmst += msday * secs;

    // Equation of equinoxes, in seconds of time.
    gmst += 240.0 * dpsi_deg * eps_true_deg.to_radians().cos();

    gmst -= 86400.0 * (gmst / 86400.0).floor();
    gmst / 3600.0
}
