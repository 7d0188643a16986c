use sundial::geometry::*;
use sundial::{DialFace, Paint, Primitive, Rgb, NIGHT};

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

fn face() -> DialFace {
    DialFace::default()
}

fn assert_point(p: Point, x: f64, y: f64) {
    assert_approx!(p.x, x, 1e-9);
    assert_approx!(p.y, y, 1e-9);
}

// ── Polar points ──

#[test]
fn test_polar_point_straight_up() {
    let p = face().polar_point(0.0, 45.0);
    assert_eq!(p, Point { x: 50.0, y: 5.0 });
}

#[test]
fn test_polar_point_clockwise_quarters() {
    let f = face();
    assert_point(f.polar_point(0.25, 45.0), 95.0, 50.0);
    assert_point(f.polar_point(0.5, 45.0), 50.0, 95.0);
    assert_point(f.polar_point(0.75, 45.0), 5.0, 50.0);
}

#[test]
fn test_polar_point_wraps() {
    let f = face();
    let quarter = f.polar_point(0.25, 20.0);
    assert_point(f.polar_point(1.25, 20.0), quarter.x, quarter.y);
    assert_point(f.polar_point(-0.75, 20.0), quarter.x, quarter.y);
}

#[test]
fn test_polar_point_zero_radius_is_centre() {
    assert_point(face().polar_point(0.3, 0.0), 50.0, 50.0);
}

#[test]
fn test_wrap() {
    assert_eq!(wrap(0.0), 0.0);
    assert_eq!(wrap(1.0), 0.0);
    assert_approx!(wrap(-0.25), 0.75, 1e-15);
    assert_approx!(wrap(2.5), 0.5, 1e-15);
}

// ── Wedges ──

#[test]
fn test_zero_span_wedge_has_no_area() {
    let w = face().wedge(0.0, 45.0, 0.3, 0.3, NIGHT);
    assert_eq!(w.area(), 0.0);
    match w {
        Primitive::Wedge { span, ref d, .. } => {
            assert_eq!(span, 0.0);
            assert!(d.starts_with('M') && d.ends_with('Z'));
        }
        other => panic!("expected wedge, got {:?}", other),
    }
}

#[test]
fn test_full_revolution_is_circle() {
    let w = face().wedge(0.0, 45.0, 0.0, 1.0, NIGHT);
    assert_eq!(
        w,
        Primitive::Circle {
            center: Point { x: 50.0, y: 50.0 },
            radius: 45.0,
            fill: NIGHT,
        }
    );
}

#[test]
fn test_full_revolution_with_hole_is_annulus() {
    let w = face().wedge(20.0, 45.0, 0.4, 1.4, NIGHT);
    assert!(matches!(&w, Primitive::Annulus { inner, outer, .. } if *inner == 20.0 && *outer == 45.0));
    assert_approx!(w.area(), std::f64::consts::PI * (45.0 * 45.0 - 20.0 * 20.0), 1e-9);
}

#[test]
fn test_full_revolution_from_offset_start_is_circle() {
    // 1.4 - 0.4 falls just short of 1.0 in floating point
    assert!(1.4 - 0.4 < 1.0);
    let w = face().wedge(0.0, 45.0, 0.4, 1.4, NIGHT);
    assert!(matches!(w, Primitive::Circle { radius, .. } if radius == 45.0));

    let w = face().wedge(0.0, 45.0, 0.7, 1.7, NIGHT);
    assert!(matches!(w, Primitive::Circle { .. }));
}

#[test]
fn test_span_just_under_full_turn_stays_wedge() {
    let w = face().wedge(0.0, 45.0, 0.0, 0.999, NIGHT);
    assert!(matches!(w, Primitive::Wedge { .. }));
}

#[test]
fn test_quarter_wedge_path() {
    let w = face().wedge(0.0, 45.0, 0.0, 0.25, NIGHT);
    let Primitive::Wedge { d, start, span, fill, .. } = w else {
        panic!("expected wedge");
    };
    assert_eq!(start, 0.0);
    assert_eq!(span, 0.25);
    assert_eq!(fill, NIGHT);
    assert!(d.starts_with("M 50 50 A 0 0 0 0 0 50 50 L 50 5 A 45 45 0 0 1 "), "{}", d);
    assert!(d.ends_with(" Z"));
}

#[test]
fn test_large_arc_flag_from_half_turn() {
    let f = face();
    let small = f.wedge(0.0, 45.0, 0.0, 0.49, NIGHT);
    let half = f.wedge(0.0, 45.0, 0.0, 0.5, NIGHT);
    let large = f.wedge(0.0, 45.0, 0.1, 0.8, NIGHT);
    let path = |p: &Primitive| match p {
        Primitive::Wedge { d, .. } => d.clone(),
        other => panic!("expected wedge, got {:?}", other),
    };
    assert!(path(&small).contains("A 45 45 0 0 1"));
    assert!(path(&half).contains("A 45 45 0 1 1"));
    assert!(path(&large).contains("A 45 45 0 1 1"));
}

#[test]
fn test_wedge_start_wrapped() {
    let w = face().wedge(0.0, 45.0, -0.25, 0.0, NIGHT);
    let Primitive::Wedge { start, span, .. } = w else {
        panic!("expected wedge");
    };
    assert_approx!(start, 0.75, 1e-15);
    assert_approx!(span, 0.25, 1e-15);
}

#[test]
fn test_wedge_area() {
    let w = face().wedge(10.0, 20.0, 0.0, 0.5, NIGHT);
    assert_approx!(w.area(), 0.5 * std::f64::consts::PI * 300.0, 1e-9);
}

#[test]
fn test_nan_wedge_does_not_panic() {
    let w = face().wedge(0.0, 45.0, f64::NAN, 0.5, Rgb::new(0.0, 0.0, 0.0));
    assert!(w.area().is_nan());
}

// ── Placements ──

#[test]
fn test_place_at_transform() {
    let p = face().place_at(0.5, 45.0);
    assert_eq!(p.transform(), "rotate(180 50 50) translate(50 5)");
    assert_point(p.origin(), 50.0, 95.0);
}

#[test]
fn test_place_at_wraps_angle() {
    let p = face().place_at(1.25, 45.0);
    assert_eq!(p.angle, 0.25);
    assert_point(p.origin(), 95.0, 50.0);
    assert_eq!(face().place_at(-0.5, 10.0).angle, 0.5);
}

#[test]
fn test_place_at_zero_is_top() {
    let p = face().place_at(0.0, 45.0);
    assert_eq!(p.transform(), "rotate(0 50 50) translate(50 5)");
    assert_eq!(p.origin(), Point { x: 50.0, y: 5.0 });
}

// ── Radial marks ──

#[test]
fn test_radial_mark_on_rim() {
    let Primitive::Mark { placement, length, stroke } = face().radial_mark(0.25, 3.0, 0.0) else {
        panic!("expected mark");
    };
    assert_eq!(length, 3.0);
    assert_eq!(stroke, Paint::Face);
    assert_eq!(placement.radius, 45.0);
    assert_point(placement.origin(), 95.0, 50.0);
}

#[test]
fn test_radial_mark_has_no_area() {
    assert_eq!(face().radial_mark(0.6, 3.0, 0.0).area(), 0.0);
}

#[test]
fn test_radial_mark_offset_inward() {
    let Primitive::Mark { placement, .. } = face().radial_mark(0.0, 3.0, 5.0) else {
        panic!("expected mark");
    };
    assert_eq!(placement.radius, 40.0);
    assert_eq!(placement.origin(), Point { x: 50.0, y: 10.0 });
}
