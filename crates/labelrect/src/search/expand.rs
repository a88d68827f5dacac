//! Growth of a single candidate rectangle at a fixed step size.
//!
//! Two phases:
//! - uniform: grow all four sides together (fast, roughly square growth);
//! - directional: round-robin over the sides, extending each alone, until a
//!   whole pass accepts nothing. This adapts the rect to the local boundary
//!   shape in narrow or asymmetric rings.
//!
//! A rect "fits" when it stays inside the ring's bounding box and does not
//! cross the ring boundary. Starting from a strictly interior rect, that keeps
//! it strictly interior.
//!
//! Known limitation: fitness is only checked at step granularity. A ring
//! feature narrower than one step can be missed by the crossing test, so
//! inputs with such features may get a rect that is not truly inscribed or no
//! rect at all. Smaller `epsilon` narrows the window.

use crate::geom2::{rect_intersects_polygon_boundary, Rect, Ring, Side};

#[inline]
fn fits(rect: &Rect, ring: &Ring, bounds: &Rect) -> bool {
    rect.within(bounds) && !rect_intersects_polygon_boundary(rect, ring)
}

/// Grow `rect` inside `ring` by increments of `step`.
///
/// `bounds` must be the bounding box of `ring`. The result always contains
/// `rect`. A non-positive or non-finite `step` returns `rect` unchanged.
pub fn expand(rect: Rect, ring: &Ring, bounds: &Rect, step: f64) -> Rect {
    if !(step.is_finite() && step > 0.0) {
        return rect;
    }
    let rect = expand_uniform(rect, ring, bounds, step);
    expand_directional(rect, ring, bounds, step)
}

pub(crate) fn expand_uniform(mut rect: Rect, ring: &Ring, bounds: &Rect, step: f64) -> Rect {
    loop {
        let next = rect.grown(step);
        // `next == rect` once step is below the coordinates' float resolution.
        if next == rect || !fits(&next, ring, bounds) {
            return rect;
        }
        rect = next;
    }
}

pub(crate) fn expand_directional(mut rect: Rect, ring: &Ring, bounds: &Rect, step: f64) -> Rect {
    loop {
        let mut changed = false;
        for side in Side::ALL {
            let next = rect.extended(side, step);
            if next != rect && fits(&next, ring, bounds) {
                rect = next;
                changed = true;
            }
        }
        if !changed {
            return rect;
        }
    }
}
