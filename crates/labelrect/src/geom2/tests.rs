use super::*;
use proptest::prelude::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn square10() -> Ring {
    Ring::from_xy(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]).unwrap()
}

#[test]
fn point_in_square() {
    let sq = square10();
    assert!(point_in_polygon(pt(5.0, 5.0), sq.points()));
    for p in [pt(15.0, 5.0), pt(5.0, 15.0), pt(-5.0, 5.0), pt(5.0, -5.0)] {
        assert!(!point_in_polygon(p, sq.points()), "{p:?} reported inside");
    }
}

#[test]
fn point_in_concave_ring() {
    // L-shape: the notch (5, 5) is outside, both arms are inside.
    let l = Ring::from_xy(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 2.0),
        (2.0, 2.0),
        (2.0, 10.0),
        (0.0, 10.0),
    ])
    .unwrap();
    assert!(point_in_polygon(pt(8.0, 1.0), l.points()));
    assert!(point_in_polygon(pt(1.0, 8.0), l.points()));
    assert!(!point_in_polygon(pt(5.0, 5.0), l.points()));
    // Orientation does not matter.
    let mut rev = l.points().to_vec();
    rev.reverse();
    assert!(point_in_polygon(pt(8.0, 1.0), &rev));
    assert!(!point_in_polygon(pt(5.0, 5.0), &rev));
}

#[test]
fn point_in_too_short_slice_is_outside() {
    assert!(!point_in_polygon(pt(0.0, 0.0), &[pt(-1.0, -1.0), pt(1.0, 1.0)]));
}

#[test]
fn segments_crossing_touching_and_parallel() {
    // X crossing
    assert!(segments_intersect(
        pt(0.0, 0.0),
        pt(2.0, 2.0),
        pt(0.0, 2.0),
        pt(2.0, 0.0)
    ));
    // T touching at an endpoint counts (closed interval)
    assert!(segments_intersect(
        pt(0.0, 0.0),
        pt(2.0, 0.0),
        pt(1.0, 0.0),
        pt(1.0, 3.0)
    ));
    // Disjoint, non-parallel
    assert!(!segments_intersect(
        pt(0.0, 0.0),
        pt(1.0, 0.0),
        pt(2.0, -1.0),
        pt(2.0, 1.0)
    ));
    // Parallel
    assert!(!segments_intersect(
        pt(0.0, 0.0),
        pt(1.0, 1.0),
        pt(0.0, 1.0),
        pt(1.0, 2.0)
    ));
    // Collinear overlap is reported as parallel
    assert!(!segments_intersect(
        pt(0.0, 0.0),
        pt(2.0, 0.0),
        pt(1.0, 0.0),
        pt(3.0, 0.0)
    ));
    // Zero-length segment never intersects
    assert!(!segments_intersect(
        pt(1.0, 1.0),
        pt(1.0, 1.0),
        pt(0.0, 0.0),
        pt(2.0, 2.0)
    ));
}

#[test]
fn segments_reversal_symmetry_fixed_cases() {
    let cases = [
        (pt(0.0, 0.0), pt(2.0, 2.0), pt(0.0, 2.0), pt(2.0, 0.0)),
        (pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, -1.0), pt(2.0, 1.0)),
        (pt(0.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0), pt(1.0, 2.0)),
        (pt(-3.0, 0.5), pt(4.0, 0.5), pt(0.0, -2.0), pt(0.25, 7.0)),
        (pt(0.0, 0.0), pt(2.0, 0.0), pt(3.0, 0.0), pt(5.0, 0.0)),
    ];
    for (a1, a2, b1, b2) in cases {
        assert_eq!(
            segments_intersect(a1, a2, b1, b2),
            segments_intersect(a2, a1, b2, b1)
        );
    }
}

proptest! {
    #[test]
    fn segments_reversal_symmetry(
        ax in -10.0f64..10.0, ay in -10.0f64..10.0,
        bx in -10.0f64..10.0, by in -10.0f64..10.0,
        cx in -10.0f64..10.0, cy in -10.0f64..10.0,
        dx in -10.0f64..10.0, dy in -10.0f64..10.0,
    ) {
        let (a1, a2, b1, b2) = (pt(ax, ay), pt(bx, by), pt(cx, cy), pt(dx, dy));
        prop_assert_eq!(
            segments_intersect(a1, a2, b1, b2),
            segments_intersect(a2, a1, b2, b1)
        );
    }

    #[test]
    fn bounding_rect_contains_every_vertex(
        xy in proptest::collection::vec((-180.0f64..180.0, -90.0f64..90.0), 1..40)
    ) {
        let pts: Vec<Point> = xy.iter().map(|&(x, y)| pt(x, y)).collect();
        let b = bounding_rect(&pts).unwrap();
        for p in &pts {
            prop_assert!(contains(&Rect::degenerate(*p), &b));
        }
    }
}

#[test]
fn bounding_rect_of_ring() {
    let r = Ring::from_xy(&[(1.0, -2.0), (4.0, 0.5), (-3.0, 6.0)]).unwrap();
    assert_eq!(r.bounds(), Rect::new(-3.0, 4.0, -2.0, 6.0));
    assert_eq!(bounding_rect(&[]), None);
}

#[test]
fn rect_boundary_crossing() {
    let sq = square10();
    // Strictly inside: no crossing.
    assert!(!rect_intersects_polygon_boundary(
        &Rect::new(1.0, 9.0, 1.0, 9.0),
        &sq
    ));
    // Pokes out on the east side.
    assert!(rect_intersects_polygon_boundary(
        &Rect::new(1.0, 11.0, 1.0, 9.0),
        &sq
    ));
    // Touching a ring edge counts as crossing (perpendicular rect edges hit it).
    assert!(rect_intersects_polygon_boundary(
        &Rect::new(0.0, 5.0, 1.0, 9.0),
        &sq
    ));
    // A degenerate rect has zero-length edges only.
    assert!(!rect_intersects_polygon_boundary(
        &Rect::degenerate(pt(5.0, 5.0)),
        &sq
    ));
}

#[test]
fn rect_containment() {
    let outer = Rect::new(0.0, 10.0, 0.0, 10.0);
    assert!(contains(&Rect::new(1.0, 2.0, 1.0, 2.0), &outer));
    assert!(contains(&outer, &outer));
    assert!(!contains(&outer, &Rect::new(1.0, 2.0, 1.0, 2.0)));
    assert!(!contains(&Rect::new(-1.0, 2.0, 1.0, 2.0), &outer));
}

#[test]
fn rect_growth_is_by_value() {
    let r = Rect::new(1.0, 2.0, 3.0, 4.0);
    let g = r.grown(0.5);
    assert_eq!(g, Rect::new(0.5, 2.5, 2.5, 4.5));
    assert_eq!(r, Rect::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(r.extended(Side::North, 1.0), Rect::new(1.0, 2.0, 3.0, 5.0));
    assert_eq!(r.extended(Side::East, 1.0), Rect::new(1.0, 3.0, 3.0, 4.0));
    assert_eq!(r.extended(Side::South, 1.0), Rect::new(1.0, 2.0, 2.0, 4.0));
    assert_eq!(r.extended(Side::West, 1.0), Rect::new(0.0, 2.0, 3.0, 4.0));
    assert!((g.area() - 4.0).abs() < 1e-12);
}

#[test]
fn ring_validation() {
    // GeoJSON-style explicit closing vertex is dropped.
    let closed =
        Ring::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]).unwrap();
    assert_eq!(closed.len(), 3);
    assert_eq!(closed.edges().count(), 3);
    assert!(Ring::from_xy(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]).is_err());
    assert!(Ring::from_xy(&[(0.0, 0.0), (f64::NAN, 0.0), (1.0, 1.0)]).is_err());
    assert!(Ring::from_xy(&[]).is_err());
}
