use sun_seat::angles::*;
use sun_seat::types::{DirectionSector, GeoPoint};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn pt(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint { lat, lon }
}

// ── Conversions ──

#[test]
fn test_deg_rad_roundtrip() {
    for deg in [0.0, 22.5, 90.0, 180.0, 270.0, 359.9] {
        assert_approx!(rad_to_deg(deg_to_rad(deg)), deg, 1e-9);
    }
    assert_approx!(deg_to_rad(180.0), std::f64::consts::PI, 1e-12);
}

// ── NormalizeAngle ──

#[test]
fn test_normalize_angle_basic() {
    let cases: &[(f64, f64)] = &[
        (0.0, 0.0),
        (45.0, 45.0),
        (360.0, 0.0),
        (361.0, 1.0),
        (-1.0, 359.0),
        (-90.0, 270.0),
        (405.0, 45.0),
        (-180.0, 180.0),
        (-720.0, 0.0),
    ];
    for &(input, expected) in cases {
        assert_approx!(normalize_angle(input), expected, 1e-9);
    }
}

#[test]
fn test_normalize_angle_never_returns_full_circle() {
    for input in [-1e-20, -1e-15, -f64::EPSILON, -0.0, 360.0, 720.0] {
        let a = normalize_angle(input);
        assert!((0.0..360.0).contains(&a), "input={} gave {}", input, a);
    }
}

// ── InitialBearing ──

#[test]
fn test_bearing_cardinal_directions() {
    let origin = pt(30.0, 31.0);
    assert_approx!(initial_bearing(&origin, &pt(31.0, 31.0)), 0.0, 1e-9);
    assert_approx!(initial_bearing(&origin, &pt(29.0, 31.0)), 180.0, 1e-9);
    assert_approx!(initial_bearing(&origin, &pt(30.0, 32.0)), 90.0, 0.5);
    assert_approx!(initial_bearing(&origin, &pt(30.0, 30.0)), 270.0, 0.5);
}

#[test]
fn test_bearing_on_equator_is_exact() {
    assert_approx!(initial_bearing(&pt(0.0, 0.0), &pt(0.0, 10.0)), 90.0, 1e-9);
    assert_approx!(initial_bearing(&pt(0.0, 0.0), &pt(0.0, -10.0)), 270.0, 1e-9);
}

#[test]
fn test_bearing_known_route() {
    // Cairo to Alexandria heads north-west
    let cairo = pt(30.0444, 31.2357);
    let alexandria = pt(31.2001, 29.9187);
    let b = initial_bearing(&cairo, &alexandria);
    assert!(b > 292.5 && b < 337.5, "bearing={}", b);
    assert_eq!(classify_bearing(b), DirectionSector::NW);
}

#[test]
fn test_bearing_across_antimeridian() {
    let b = initial_bearing(&pt(0.0, 179.0), &pt(0.0, -179.0));
    assert_approx!(b, 90.0, 1e-9);
}

#[test]
fn test_bearing_in_range_for_many_pairs() {
    let mut count = 0;
    for lat1 in (-80..=80).step_by(20) {
        for lon1 in (-170..=170).step_by(40) {
            for (dlat, dlon) in [(1.0, 0.0), (-1.0, 0.0), (0.0, 1.0), (0.0, -1.0), (3.0, -7.0), (-0.001, 0.002)] {
                let start = pt(lat1 as f64, lon1 as f64);
                let end = pt(lat1 as f64 + dlat, lon1 as f64 + dlon);
                let b = initial_bearing(&start, &end);
                assert!((0.0..360.0).contains(&b), "{} -> {} gave {}", start, end, b);
                count += 1;
            }
        }
    }
    assert!(count > 0);
}

#[test]
fn test_bearing_same_point_does_not_panic() {
    let p = pt(30.0, 31.0);
    assert_approx!(initial_bearing(&p, &p), 0.0, 1e-12);
}

// ── ClassifyBearing ──

#[test]
fn test_sector_boundaries_are_lower_inclusive() {
    let cases: &[(f64, DirectionSector)] = &[
        (0.0, DirectionSector::N),
        (22.5, DirectionSector::NE),
        (67.5, DirectionSector::E),
        (112.5, DirectionSector::SE),
        (157.5, DirectionSector::S),
        (202.5, DirectionSector::SW),
        (247.5, DirectionSector::W),
        (292.5, DirectionSector::NW),
        (337.5, DirectionSector::N),
    ];
    for &(bearing, expected) in cases {
        assert_eq!(classify_bearing(bearing), expected, "bearing={}", bearing);
    }
}

#[test]
fn test_sector_just_below_boundaries() {
    let cases: &[(f64, DirectionSector)] = &[
        (22.499, DirectionSector::N),
        (67.499, DirectionSector::NE),
        (112.499, DirectionSector::E),
        (157.499, DirectionSector::SE),
        (202.499, DirectionSector::S),
        (247.499, DirectionSector::SW),
        (292.499, DirectionSector::W),
        (337.499, DirectionSector::NW),
        (359.999, DirectionSector::N),
    ];
    for &(bearing, expected) in cases {
        assert_eq!(classify_bearing(bearing), expected, "bearing={}", bearing);
    }
}

#[test]
fn test_sector_centers() {
    for sector in DirectionSector::ALL {
        assert_eq!(classify_bearing(sector.center()), sector);
    }
}

#[test]
fn test_sector_totality_sweep() {
    let mut counts = [0usize; 8];
    let mut bearing = 0.0;
    while bearing < 360.0 {
        counts[classify_bearing(bearing).index()] += 1;
        bearing += 0.25;
    }
    // 45° sectors sampled every 0.25° hit each sector 180 times
    assert!(counts.iter().all(|&c| c == 180), "counts={:?}", counts);
}

#[test]
fn test_sector_defensive_default() {
    for bearing in [f64::NAN, 360.0, 360.0 + 1e-9, -0.5, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(classify_bearing(bearing), DirectionSector::N, "bearing={}", bearing);
    }
}
