//! Basic 2D types for rectangle search.
//!
//! - `Point`: `(x, y)` pair; `(lon, lat)` in the pipeline, but nothing here cares.
//! - `Rect`: axis-aligned rectangle, zero area allowed. Growth returns new values.
//! - `Side`: one of the four independently extendable rect edges.
//! - `Ring`: validated closed vertex ring (implicit closing edge).
//!
//! References
//! - Code cross-refs: `primitives::{bounding_rect, rect_intersects_polygon_boundary}`,
//!   `search::expand`

use nalgebra::Vector2;

use crate::search::SearchError;

/// A 2D point.
pub type Point = Vector2<f64>;

/// Axis-aligned rectangle `[min_x, max_x] × [min_y, max_y]`.
///
/// Invariant: `min_x <= max_x` and `min_y <= max_y`. Degenerate (zero-width
/// or zero-height) rects are valid and represent points or segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Rect {
    #[inline]
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        debug_assert!(min_x <= max_x && min_y <= max_y, "inverted rect");
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Zero-area rect sitting on `p`.
    #[inline]
    pub fn degenerate(p: Point) -> Self {
        Self::new(p.x, p.x, p.y, p.y)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            0.5 * (self.min_x + self.max_x),
            0.5 * (self.min_y + self.max_y),
        )
    }

    /// True iff `self` lies inside `outer` (boundaries may coincide).
    #[inline]
    pub fn within(&self, outer: &Rect) -> bool {
        self.min_x >= outer.min_x
            && self.max_x <= outer.max_x
            && self.min_y >= outer.min_y
            && self.max_y <= outer.max_y
    }

    /// Grow every side outward by `step`.
    #[inline]
    pub fn grown(&self, step: f64) -> Rect {
        Rect {
            min_x: self.min_x - step,
            max_x: self.max_x + step,
            min_y: self.min_y - step,
            max_y: self.max_y + step,
        }
    }

    /// Move a single side outward by `step`; the other three stay put.
    #[inline]
    pub fn extended(&self, side: Side, step: f64) -> Rect {
        let mut out = *self;
        match side {
            Side::North => out.max_y += step,
            Side::East => out.max_x += step,
            Side::South => out.min_y -= step,
            Side::West => out.min_x -= step,
        }
        out
    }

    /// Corners in CCW order starting at `(min_x, min_y)`.
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.max_x, self.max_y),
            Point::new(self.min_x, self.max_y),
        ]
    }

    /// The four boundary segments (south, east, north, west).
    #[inline]
    pub fn edges(&self) -> [(Point, Point); 4] {
        let [a, b, c, d] = self.corners();
        [(a, b), (b, c), (c, d), (d, a)]
    }
}

/// Rect side, in the order the directional expansion visits them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    North,
    East,
    South,
    West,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];
}

/// Closed polygon ring without holes.
///
/// Invariants (checked by `Ring::new`):
/// - at least 3 vertices, all coordinates finite;
/// - no explicit closing vertex (a repeated first point is dropped).
///
/// Simplicity (no self-intersections) is assumed, not checked.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    pts: Vec<Point>,
    bounds: Rect,
}

impl Ring {
    pub fn new(mut pts: Vec<Point>) -> Result<Self, SearchError> {
        if let Some(bad) = pts.iter().find(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(SearchError::invalid_ring(format!(
                "non-finite vertex ({}, {})",
                bad.x, bad.y
            )));
        }
        if pts.len() > 1 && pts.first() == pts.last() {
            pts.pop();
        }
        if pts.len() < 3 {
            return Err(SearchError::invalid_ring(format!(
                "need at least 3 distinct vertices, got {}",
                pts.len()
            )));
        }
        let bounds = super::primitives::bounding_rect(&pts)
            .ok_or_else(|| SearchError::invalid_ring("empty ring"))?;
        Ok(Self { pts, bounds })
    }

    /// Convenience constructor from `(x, y)` pairs.
    pub fn from_xy(xy: &[(f64, f64)]) -> Result<Self, SearchError> {
        Self::new(xy.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.pts
    }

    /// Bounding box, computed once at construction.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// Edges `(p_i, p_{i+1})` including the implicit closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.pts.len();
        (0..n).map(move |i| (self.pts[i], self.pts[(i + 1) % n]))
    }
}
