//! Randomized interior seeds for the multi-start search.
//!
//! Seeds are drawn uniformly in the ring's bounding box and kept when they
//! fall inside the ring (rejection sampling). The random source is injected,
//! so tests and replayed pipeline runs get the same seeds every time.

use rand::Rng;

use super::error::SearchError;
use crate::geom2::{point_in_polygon, Point, Rect, Ring};

/// Draw `count` points inside `ring` using at most `max_attempts` draws in
/// `bounds` (the ring's bounding box).
pub fn seed_points<R: Rng + ?Sized>(
    ring: &Ring,
    bounds: &Rect,
    count: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<Point>, SearchError> {
    let mut seeds = Vec::with_capacity(count);
    let mut attempts = 0usize;
    while seeds.len() < count {
        if attempts >= max_attempts {
            return Err(SearchError::InsufficientSeeds {
                found: seeds.len(),
                wanted: count,
                attempts,
            });
        }
        attempts += 1;
        let p = Point::new(
            bounds.min_x + rng.gen::<f64>() * bounds.width(),
            bounds.min_y + rng.gen::<f64>() * bounds.height(),
        );
        if point_in_polygon(p, ring.points()) {
            seeds.push(p);
        }
    }
    Ok(seeds)
}

/// Zero-area starting rects, one per seed.
pub fn degenerate_rects(seeds: &[Point]) -> Vec<Rect> {
    seeds.iter().map(|&p| Rect::degenerate(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn seeds_are_interior_and_reproducible() {
        let ring = Ring::from_xy(&[(0.0, 0.0), (0.0, 10.0), (10.0, 0.0)]).unwrap();
        let b = ring.bounds();
        let a = seed_points(&ring, &b, 10, 100, &mut StdRng::seed_from_u64(5)).unwrap();
        let c = seed_points(&ring, &b, 10, 100, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, c);
        assert_eq!(a.len(), 10);
        assert!(a.iter().all(|p| point_in_polygon(*p, ring.points())));
        let rects = degenerate_rects(&a);
        assert!(rects.iter().zip(&a).all(|(r, p)| r.area() == 0.0 && r.center() == *p));
    }

    #[test]
    fn thin_sliver_runs_out_of_attempts() {
        // Interior is 0.05 of a 100-unit bounding box.
        let ring = Ring::from_xy(&[(0.0, 0.0), (10.0, 10.0), (10.0, 9.99)]).unwrap();
        let b = ring.bounds();
        let err = seed_points(&ring, &b, 10, 100, &mut StdRng::seed_from_u64(1)).unwrap_err();
        match err {
            SearchError::InsufficientSeeds {
                found,
                wanted,
                attempts,
            } => {
                assert!(found < wanted);
                assert_eq!(wanted, 10);
                assert_eq!(attempts, 100);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
