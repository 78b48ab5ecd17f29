//! Cartesian ↔ polar conversion and small vector utilities.
//!
//! Polar triples are `[lon, lat, r]` with lon in radians [0, 2π), lat in
//! radians [-π/2, π/2]. State vectors append the velocity components:
//! `[x, y, z, vx, vy, vz]` ↔ `[lon, lat, r, dlon, dlat, dr]`.

use std::f64::consts::TAU;

/// Reduce an angle in degrees to [0, 360).
///
/// Values within 1e-13 of a multiple of 360 snap to 0, so that results of
/// long polynomial evaluations land exactly on 0 rather than 359.999….
/// Idempotent.
pub fn normalize_deg(x: f64) -> f64 {
    let mut y = x % 360.0;
    if y.abs() < 1e-13 {
        y = 0.0;
    }
    if y < 0.0 {
        y += 360.0;
    }
    y
}

/// Cartesian `[x, y, z]` → polar `[lon, lat, r]` (radians).
pub fn cart_to_polar(x: &[f64; 3]) -> [f64; 3] {
    let r2 = x[0] * x[0] + x[1] * x[1];
    let rr = r2 + x[2] * x[2];

    let lon = if r2 == 0.0 && x[2] == 0.0 {
        0.0
    } else {
        let l = x[1].atan2(x[0]);
        if l < 0.0 { l + TAU } else { l }
    };
    let lat = if x[2] == 0.0 {
        0.0
    } else {
        (x[2] / r2.sqrt()).atan()
    };

    [lon, lat, rr.sqrt()]
}

/// Cartesian state → polar state, propagating velocities analytically.
///
/// The angular rates come from differentiating the atan2/atan forms;
/// a zero-length position yields zero rates rather than NaN.
pub fn cart_to_polar_state(x: &[f64; 6]) -> [f64; 6] {
    let r2 = x[0] * x[0] + x[1] * x[1];
    let rr = r2 + x[2] * x[2];
    let pos = cart_to_polar(&[x[0], x[1], x[2]]);
    let mut result = [pos[0], pos[1], pos[2], 0.0, 0.0, 0.0];

    let sqr2 = r2.sqrt();
    if sqr2 > 0.0 {
        result[3] = (x[0] * x[4] - x[1] * x[3]) / r2;
        result[4] = -(x[2] * (x[0] * x[3] + x[1] * x[4]) - r2 * x[5]) / (rr * sqr2);
    }
    if rr > 0.0 {
        result[5] = (x[0] * x[3] + x[1] * x[4] + x[2] * x[5]) / rr.sqrt();
    }
    result
}

/// Polar `[lon, lat, r]` (radians) → cartesian `[x, y, z]`.
pub fn polar_to_cart(l: &[f64; 3]) -> [f64; 3] {
    let cos_b = l[1].cos();
    let sin_b = l[1].sin();
    let cos_l = l[0].cos();
    let sin_l = l[0].sin();
    [
        l[2] * cos_b * cos_l,
        l[2] * cos_b * sin_l,
        l[2] * sin_b,
    ]
}

/// Polar state → cartesian state, propagating velocities.
pub fn polar_to_cart_state(l: &[f64; 6]) -> [f64; 6] {
    let cos_b = l[1].cos();
    let sin_b = l[1].sin();
    let cos_l = l[0].cos();
    let sin_l = l[0].sin();

    [
        l[2] * cos_b * cos_l,
        l[2] * cos_b * sin_l,
        l[2] * sin_b,
        l[5] * cos_b * cos_l - l[2] * sin_b * cos_l * l[4] - l[2] * cos_b * sin_l * l[3],
        l[5] * cos_b * sin_l - l[2] * sin_b * sin_l * l[4] + l[2] * cos_b * cos_l * l[3],
        l[5] * sin_b + l[2] * cos_b * l[4],
    ]
}

/// Rotate a cartesian vector around the x-axis by `eps` radians.
///
/// With `eps` = obliquity this converts ecliptic → equatorial; negate
/// `eps` for the inverse.
pub fn rotate_x(x: &[f64; 3], eps: f64) -> [f64; 3] {
    let cos_e = eps.cos();
    let sin_e = eps.sin();
    [
        x[0],
        x[1] * cos_e + x[2] * sin_e,
        -x[1] * sin_e + x[2] * cos_e,
    ]
}

/// Rotate a cartesian state (position + velocity) around the x-axis.
pub fn rotate_x_state(x: &[f64; 6], eps: f64) -> [f64; 6] {
    let cos_e = eps.cos();
    let sin_e = eps.sin();
    [
        x[0],
        x[1] * cos_e + x[2] * sin_e,
        -x[1] * sin_e + x[2] * cos_e,
        x[3],
        x[4] * cos_e + x[5] * sin_e,
        -x[4] * sin_e + x[5] * cos_e,
    ]
}

/// Cross product a × b.
pub fn cross(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Dot product.
pub fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Euclidean norm.
pub fn norm(a: &[f64; 3]) -> f64 {
    dot(a, a).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-12;

    #[test]
    fn normalize_range_and_idempotence() {
        for &x in &[-720.5, -360.0, -0.25, 0.0, 359.999, 360.0, 1234.5, 1e9] {
            let y = normalize_deg(x);
            assert!((0.0..360.0).contains(&y), "normalize({x}) = {y}");
            assert_eq!(normalize_deg(y), y, "not idempotent at {x}");
        }
    }

    #[test]
    fn normalize_snaps_tiny_to_zero() {
        assert_eq!(normalize_deg(360.0 - 1e-14), 0.0);
        assert_eq!(normalize_deg(-1e-14), 0.0);
    }

    #[test]
    fn cartpol_axes() {
        let p = cart_to_polar(&[1.0, 0.0, 0.0]);
        assert!((p[0] - 0.0).abs() < EPS && p[1].abs() < EPS && (p[2] - 1.0).abs() < EPS);
        let p = cart_to_polar(&[0.0, 1.0, 0.0]);
        assert!((p[0] - PI / 2.0).abs() < EPS);
        let p = cart_to_polar(&[-1.0, -1.0, 0.0]);
        assert!(p[0] > PI && p[0] < 1.5 * PI);
    }

    #[test]
    fn cartpol_zero_vector() {
        let p = cart_to_polar_state(&[0.0; 6]);
        assert_eq!(p, [0.0; 6]);
    }

    #[test]
    fn cartpol_polcart_roundtrip() {
        let x = [0.3, -1.2, 0.7, 0.01, -0.02, 0.005];
        let p = cart_to_polar_state(&x);
        let back = polar_to_cart_state(&p);
        for i in 0..6 {
            assert!(
                (x[i] - back[i]).abs() < 1e-12,
                "component {i}: {} != {}",
                x[i],
                back[i]
            );
        }
    }

    #[test]
    fn circular_motion_rates() {
        // Unit circle in the x-y plane at angular rate 1 rad/unit time.
        let x = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let p = cart_to_polar_state(&x);
        assert!((p[3] - 1.0).abs() < EPS, "dlon = {}", p[3]);
        assert!(p[4].abs() < EPS && p[5].abs() < EPS);
    }

    #[test]
    fn rotate_x_by_90_deg() {
        let v = rotate_x(&[0.0, 0.0, 1.0], PI / 2.0);
        assert!((v[1] - 1.0).abs() < EPS && v[2].abs() < EPS);
    }

    #[test]
    fn rotate_x_inverse() {
        let x = [0.4, -0.8, 0.3, 0.1, 0.2, -0.05];
        let e = 0.409_1;
        let y = rotate_x_state(&rotate_x_state(&x, e), -e);
        for i in 0..6 {
            assert!((x[i] - y[i]).abs() < EPS);
        }
    }

    #[test]
    fn cross_dot_norm() {
        let a = [1.0, 0.0, 0.0];
        let b = [0.0, 1.0, 0.0];
        assert_eq!(cross(&a, &b), [0.0, 0.0, 1.0]);
        assert_eq!(dot(&a, &b), 0.0);
        assert!((norm(&[3.0, 4.0, 0.0]) - 5.0).abs() < EPS);
    }
}
