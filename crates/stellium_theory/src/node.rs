//! Mean longitude of the Moon's ascending node.
//!
//! Chapront et al., "Expressions for the Mean Elements of the Moon and
//! the Sun". Closed-form polynomial; speed by centered numerical
//! differencing with an explicit wraparound correction.

use stellium_frames::normalize_deg;
use stellium_time::J2000_JD;

/// Mean ascending-node longitude at a TT Julian Day, degrees [0, 360).
pub fn mean_node_lon(jd_tt: f64) -> f64 {
    let t = (jd_tt - J2000_JD) / 36525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let omega =
        125.0445479 - 1934.1362891 * t + 0.0020754 * t2 + t3 / 467_441.0 - t4 / 60_616_000.0;
    normalize_deg(omega)
}

/// Mean-node longitude and speed (degrees, degrees/day).
///
/// The node regresses ~0.053°/day; the raw difference is corrected by
/// ±360° when the two samples straddle the 0°/360° boundary.
pub fn mean_node_lon_speed(jd_tt: f64) -> (f64, f64) {
    let lon = mean_node_lon(jd_tt);
    let dt = 0.1;
    let lon2 = mean_node_lon(jd_tt - dt);
    let mut speed = (lon - lon2) / dt;
    if speed > 180.0 {
        speed -= 360.0;
    }
    if speed < -180.0 {
        speed += 360.0;
    }
    (lon, speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        let lon = mean_node_lon(J2000_JD);
        assert!((lon - 125.0445479).abs() < 1e-9, "node = {lon}");
    }

    #[test]
    fn always_retrograde() {
        for k in 0..200 {
            let jd = 2_440_000.5 + k as f64 * 137.0;
            let (_, speed) = mean_node_lon_speed(jd);
            assert!(
                (-0.06..-0.05).contains(&speed),
                "node speed {speed} at {jd}"
            );
        }
    }

    #[test]
    fn wraparound_is_corrected() {
        // Find an epoch where the node crosses 0° and check the speed
        // stays near -0.0529 rather than jumping by ±3600.
        let mut jd = J2000_JD;
        // Node at J2000 is 125°; it reaches 0° after ~2364 days.
        jd += 125.0 / 0.0529;
        for k in -20..20 {
            let (_, speed) = mean_node_lon_speed(jd + k as f64 * 0.05);
            assert!(speed.abs() < 1.0, "speed {speed} near wrap");
        }
    }

    #[test]
    fn period_about_18_6_years() {
        // Full regression takes 360/0.05295 ≈ 6798 days.
        let l0 = mean_node_lon(J2000_JD);
        let l1 = mean_node_lon(J2000_JD + 6798.38);
        let d = (l0 - l1).abs() % 360.0;
        assert!(d < 0.1 || d > 359.9, "node after one period off by {d}°");
    }
}
