//! Exact 2D predicates used by the rectangle search.
//!
//! All functions are pure and allocation-free. Boundary cases are not
//! classified consistently on purpose: the search only relies on them to keep
//! candidates strictly interior.

use super::types::{Point, Rect, Ring};

/// Ray-casting parity test: cast a ray from `p` towards +x and count the ring
/// edges it crosses.
///
/// Points on the boundary get an implementation-defined answer.
pub fn point_in_polygon(p: Point, ring: &[Point]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (ring[i], ring[j]);
        if (pi.y > p.y) != (pj.y > p.y) {
            // pi.y != pj.y here, the division is safe.
            let x_cross = pi.x + (p.y - pi.y) * (pj.x - pi.x) / (pj.y - pi.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[inline]
fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Closed-segment intersection via the parametric solve
/// `a1 + u (a2 - a1) = b1 + v (b2 - b1)`.
///
/// Parallel (and zero-length) segments report `false`, even when collinear and
/// overlapping. Otherwise true iff `u, v ∈ [0, 1]`.
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let r = a2 - a1;
    let s = b2 - b1;
    let det = cross(r, s);
    if det == 0.0 {
        return false;
    }
    let q = b1 - a1;
    let u = cross(q, s) / det;
    let v = cross(q, r) / det;
    (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v)
}

/// Componentwise min/max of `points`; `None` for an empty slice.
pub fn bounding_rect(points: &[Point]) -> Option<Rect> {
    let first = points.first()?;
    let mut r = Rect::degenerate(*first);
    for p in &points[1..] {
        r.min_x = r.min_x.min(p.x);
        r.max_x = r.max_x.max(p.x);
        r.min_y = r.min_y.min(p.y);
        r.max_y = r.max_y.max(p.y);
    }
    Some(r)
}

/// True iff any rect edge intersects any ring edge.
///
/// This is a crossing test, not an overlap test: a rect that starts strictly
/// inside the ring can only leave it by crossing an edge.
pub fn rect_intersects_polygon_boundary(rect: &Rect, ring: &Ring) -> bool {
    let rect_edges = rect.edges();
    ring.edges().any(|(p, q)| {
        rect_edges
            .iter()
            .any(|&(a, b)| segments_intersect(a, b, p, q))
    })
}

/// True iff `a` is fully enclosed in `b`.
#[inline]
pub fn contains(a: &Rect, b: &Rect) -> bool {
    a.within(b)
}
