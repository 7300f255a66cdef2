use sundial_layout::config::BoxParams;
use sundial_layout::projection::*;
use sundial_layout::types::PlanePoint;

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

const LENGTH: f64 = 27.0;

fn origin() -> PlanePoint {
    PlanePoint::new(150.0, 150.0)
}

fn box_130() -> Option<BoxParams> {
    Some(BoxParams {
        bounding_half_size: 130.0,
    })
}

// ── Flat projection ──

#[test]
fn test_flat_projection_matches_formula() {
    let cases: &[(f64, f64)] = &[
        (45.0, 180.0),
        (30.0, 135.0),
        (60.0, 90.0),
        (15.0, 250.0),
        (89.0, 10.0),
        (120.0, 200.0),
        (5.0, -30.0),
    ];
    for &(el, az) in cases {
        let p = project(LENGTH, el, az, origin(), None);
        let d = LENGTH / el.to_radians().tan();
        assert_approx!(p.x, 150.0 + d * az.to_radians().cos(), 1e-9);
        assert_approx!(p.y, 150.0 + d * az.to_radians().sin(), 1e-9);
    }
}

#[test]
fn test_flat_projection_noon_example() {
    let p = project(LENGTH, 45.0, 180.0, origin(), None);
    assert_approx!(p.x, 123.0, 1e-9);
    assert_approx!(p.y, 150.0, 1e-9);
}

#[test]
fn test_shadow_grows_toward_horizon() {
    let high = project_flat(LENGTH, 60.0, 180.0, origin());
    let low = project_flat(LENGTH, 10.0, 180.0, origin());
    assert!(150.0 - low.x > 150.0 - high.x);
}

#[test]
fn test_elevation_above_90_flips_shadow() {
    let p = project_flat(LENGTH, 135.0, 180.0, origin());
    assert_approx!(p.x, 177.0, 1e-9);
}

#[test]
fn test_deg_to_rad() {
    assert_approx!(deg_to_rad(180.0), std::f64::consts::PI, 1e-12);
    assert_approx!(deg_to_rad(90.0), std::f64::consts::FRAC_PI_2, 1e-12);
}

// ── Box mode ──

#[test]
fn test_box_mode_inside_flat_face_unchanged() {
    let proj = project_detailed(LENGTH, 45.0, 180.0, origin(), box_130());
    assert_eq!(proj.point, proj.flat);
    assert_eq!(proj.wall, None);
    assert!(proj.on_flat_face());
}

#[test]
fn test_box_mode_disabled_returns_flat() {
    let proj = project_detailed(LENGTH, 10.0, 270.0, origin(), None);
    assert_eq!(proj.point, proj.flat);
    assert!(proj.on_flat_face());
}

#[test]
fn test_box_mode_near_wall() {
    let proj = project_detailed(LENGTH, 10.0, 270.0, origin(), box_130());
    assert_approx!(proj.flat.y, -3.1246, 1e-3);
    assert_eq!(proj.wall, Some(BoxWall::Near));
    assert_approx!(proj.point.x, 150.0, 1e-9);
    assert_approx!(proj.point.y, 38.16168, 1e-4);
    assert!(!proj.on_flat_face());
}

#[test]
fn test_box_mode_left_wall() {
    let proj = project_detailed(LENGTH, 10.0, 180.0, origin(), box_130());
    assert_eq!(proj.wall, Some(BoxWall::Left));
    assert_approx!(proj.point.x, 38.16168, 1e-4);
    assert_approx!(proj.point.y, 150.0, 1e-9);
}

#[test]
fn test_box_mode_far_wall() {
    let proj = project_detailed(LENGTH, 10.0, 90.0, origin(), box_130());
    assert_eq!(proj.wall, Some(BoxWall::Far));
    assert_approx!(proj.point.x, 150.0, 1e-9);
    assert_approx!(proj.point.y, 261.83832, 1e-4);
}

#[test]
fn test_box_mode_wall_point_stays_within_bounding_square() {
    for az in [90.0, 180.0, 270.0] {
        let p = project(LENGTH, 10.0, az, origin(), box_130());
        assert!(within_bounds(p, origin(), 130.0), "azimuth {}", az);
    }
}

#[test]
fn test_box_mode_no_right_wall() {
    // Known gap: the larger-x edge has no wall, so the shadow stays on
    // the flat plane and ends up outside the bounding square.
    let proj = project_detailed(LENGTH, 10.0, 0.0, origin(), box_130());
    assert_eq!(proj.wall, None);
    assert_eq!(proj.point, proj.flat);
    assert_approx!(proj.point.x, 303.1246, 1e-3);
    assert!(!within_bounds(proj.point, origin(), 130.0));
}

#[test]
fn test_box_mode_corner_last_wall_wins() {
    // Near fires first, its result lies left of the flat face, so Left
    // fires as well and overrides it.
    let proj = project_detailed(LENGTH, 7.0, 210.0, origin(), box_130());
    assert!(proj.flat.y < 47.0);
    assert_eq!(proj.wall, Some(BoxWall::Left));
    assert_approx!(proj.point.x, 34.60328, 1e-4);
    assert_approx!(proj.point.y, 90.53292, 1e-4);
}

#[test]
fn test_unfold_order() {
    assert_eq!(
        BoxWall::UNFOLD_ORDER,
        [BoxWall::Near, BoxWall::Left, BoxWall::Far]
    );
}

#[test]
fn test_flat_size() {
    let params = BoxParams {
        bounding_half_size: 130.0,
    };
    assert_approx!(params.flat_size(27.0), 103.0, 1e-12);
}

// ── Bounds ──

#[test]
fn test_within_bounds_edges() {
    let o = origin();
    assert!(within_bounds(PlanePoint::new(280.0, 150.0), o, 130.0));
    assert!(within_bounds(PlanePoint::new(20.0, 20.0), o, 130.0));
    assert!(!within_bounds(PlanePoint::new(280.001, 150.0), o, 130.0));
    assert!(!within_bounds(PlanePoint::new(150.0, 19.999), o, 130.0));
}
