//! Golden-value integration tests for apparent positions.
//!
//! Reference longitudes are from standard published ephemerides, quoted
//! to ~0.05°. Tolerances: 0.1° for the Sun and planets, 0.5° for the
//! Moon (truncated lunar series), looser bounds for the slow outer
//! bodies where only the sign of the motion is checked.

use stellium_core::{Body, Engine, FixedDeltaT, julian_day};

fn engine() -> Engine<FixedDeltaT> {
    Engine::new(FixedDeltaT::new(57.0))
}

fn angle_diff(a: f64, b: f64) -> f64 {
    let mut d = (a - b).rem_euclid(360.0);
    if d > 180.0 {
        d -= 360.0;
    }
    d
}

#[test]
fn sun_1987_aug_22() {
    // 1987-Aug-22 19:10 UT: Sun at ~29°09' Leo.
    let jd = julian_day(1987, 8, 22, 19.0 + 10.0 / 60.0);
    let pos = engine().position(Body::Sun, jd).unwrap();
    assert!(
        angle_diff(pos.longitude, 149.16).abs() < 0.1,
        "Sun lon = {}",
        pos.longitude
    );
    assert!(!pos.is_retrograde());
    assert!((0.9..1.1).contains(&pos.longitude_speed));
    // Late August: Earth approaching aphelion distance range.
    assert!((1.0..1.02).contains(&pos.distance), "Sun r = {}", pos.distance);
}

#[test]
fn moon_1987_aug_22() {
    let jd = julian_day(1987, 8, 22, 19.0 + 10.0 / 60.0);
    let pos = engine().position(Body::Moon, jd).unwrap();
    assert!(
        angle_diff(pos.longitude, 130.5).abs() < 0.5,
        "Moon lon = {}",
        pos.longitude
    );
    assert!(
        (11.0..15.5).contains(&pos.longitude_speed),
        "Moon speed = {}",
        pos.longitude_speed
    );
    assert!((0.00238..0.00272).contains(&pos.distance));
}

#[test]
fn mercury_retrograde_1993_mar_12() {
    // Mercury stationed retrograde 1993-Feb-27 and direct Mar-22.
    let jd = julian_day(1993, 3, 12, 0.75);
    let pos = engine().position(Body::Mercury, jd).unwrap();
    assert!(pos.is_retrograde(), "speed = {}", pos.longitude_speed);
    assert!(
        angle_diff(pos.longitude, 345.8).abs() < 0.3,
        "Mercury lon = {}",
        pos.longitude
    );
}

#[test]
fn mercury_direct_1987_aug_22() {
    let jd = julian_day(1987, 8, 22, 19.0 + 10.0 / 60.0);
    let pos = engine().position(Body::Mercury, jd).unwrap();
    assert!(!pos.is_retrograde(), "speed = {}", pos.longitude_speed);
}

#[test]
fn sun_never_retrograde() {
    let e = engine();
    for k in 0..120 {
        let jd = 2_430_000.5 + k as f64 * 305.77;
        let pos = e.position(Body::Sun, jd).unwrap();
        assert!(
            (0.95..1.03).contains(&pos.longitude_speed),
            "Sun speed {} at {jd}",
            pos.longitude_speed
        );
    }
}

#[test]
fn inner_planet_elongation_bounded() {
    // Geometry caps Mercury at ~28° and Venus at ~48° from the Sun.
    let e = engine();
    for k in 0..60 {
        let jd = 2_440_000.5 + k as f64 * 211.3;
        let sun = e.position(Body::Sun, jd).unwrap();
        for (body, max_elong) in [(Body::Mercury, 29.0), (Body::Venus, 49.0)] {
            let p = e.position(body, jd).unwrap();
            let elong = angle_diff(p.longitude, sun.longitude).abs();
            assert!(
                elong < max_elong,
                "{body:?} elongation {elong} at {jd}"
            );
        }
    }
}

#[test]
fn outer_planets_move_slowly() {
    let e = engine();
    let jd = julian_day(2005, 6, 1, 0.0);
    for (body, max_speed) in [
        (Body::Jupiter, 0.25),
        (Body::Saturn, 0.14),
        (Body::Uranus, 0.07),
        (Body::Neptune, 0.04),
        (Body::Pluto, 0.05),
    ] {
        let p = e.position(body, jd).unwrap();
        assert!(
            p.longitude_speed.abs() < max_speed,
            "{body:?} speed = {}",
            p.longitude_speed
        );
    }
}

#[test]
fn planet_latitudes_stay_near_ecliptic() {
    let e = engine();
    let jd = julian_day(1995, 11, 3, 6.0);
    for body in [Body::Sun, Body::Mercury, Body::Venus, Body::Mars, Body::Jupiter] {
        let p = e.position(body, jd).unwrap();
        let cap = if body == Body::Mercury { 7.1 } else { 8.5 };
        assert!(p.latitude.abs() < cap, "{body:?} lat = {}", p.latitude);
    }
    // Sun specifically hugs the ecliptic to under an arcminute.
    let sun = e.position(Body::Sun, jd).unwrap();
    assert!(sun.latitude.abs() < 0.02, "Sun lat = {}", sun.latitude);
}

#[test]
fn node_regression_and_chiron_range() {
    let e = engine();
    let jd = julian_day(2000, 1, 1, 12.0);

    let node = e.position(Body::MeanNode, jd).unwrap();
    assert!(node.is_retrograde());
    assert!(angle_diff(node.longitude, 125.04).abs() < 0.1);

    let chiron = e.position(Body::Chiron, jd).unwrap();
    assert!((0.0..360.0).contains(&chiron.longitude));

    // Outside the sampled span Chiron fails rather than extrapolating.
    let far = julian_day(2150, 1, 1, 0.0);
    assert!(e.position(Body::Chiron, far).is_err());
    assert!(e.position(Body::Sun, far).is_ok());
}

#[test]
fn chiron_pluto_conjunction_1999() {
    // Chiron and Pluto were conjunct 1999-Dec-30 near 11.4° Sagittarius
    // (251.4°). The Chiron table's generating elements osculate at
    // J2000, so this epoch bounds its absolute error; drift toward the
    // span's 1900/2100 ends is expected to be larger.
    let e = engine();
    let jd = julian_day(1999, 12, 30, 12.0);
    let chiron = e.position(Body::Chiron, jd).unwrap();
    let pluto = e.position(Body::Pluto, jd).unwrap();
    assert!(
        angle_diff(chiron.longitude, 251.4).abs() < 1.5,
        "Chiron lon = {}",
        chiron.longitude
    );
    assert!(
        angle_diff(pluto.longitude, 251.4).abs() < 1.5,
        "Pluto lon = {}",
        pluto.longitude
    );
    assert!(
        angle_diff(chiron.longitude, pluto.longitude).abs() < 1.5,
        "separation = {}",
        angle_diff(chiron.longitude, pluto.longitude)
    );
}

#[test]
fn delta_t_only_enters_frame_conversion() {
    let jd = julian_day(1990, 4, 7, 3.0);
    let e0 = Engine::new(FixedDeltaT::zero());
    let e1 = Engine::new(FixedDeltaT::new(600.0));

    let moon0 = e0.position(Body::Moon, jd).unwrap();
    let moon1 = e1.position(Body::Moon, jd).unwrap();
    let d_moon = angle_diff(moon1.longitude, moon0.longitude).abs();
    // The lunar series run on the input epoch; ΔT only reaches the
    // frame conversion, so the shift stays well under the full ~0.09°.
    assert!(d_moon < 0.09, "Moon shifted {d_moon}");

    let sun0 = e0.position(Body::Sun, jd).unwrap();
    let sun1 = e1.position(Body::Sun, jd).unwrap();
    let d_sun = angle_diff(sun1.longitude, sun0.longitude).abs();
    assert!(d_sun < 0.01, "Sun shifted {d_sun}");
}
