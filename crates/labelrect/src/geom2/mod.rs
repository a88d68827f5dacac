//! 2D geometry for the inscribed-rectangle search.
//!
//! Purpose
//! - Value types (`Point`, `Rect`, `Ring`) and the exact predicates the
//!   search is built from: point-in-polygon, segment intersection, bounding
//!   box, containment and rect-vs-boundary crossing.
//! - Keep everything pure and allocation-light so candidates can be expanded
//!   independently (and in parallel).
//!
//! Code cross-refs: `search::{expand, seed_points, largest_inscribed_rect}`

mod primitives;
pub mod rand;
mod types;

pub use primitives::{
    bounding_rect, contains, point_in_polygon, rect_intersects_polygon_boundary,
    segments_intersect,
};
pub use types::{Point, Rect, Ring, Side};

#[cfg(test)]
mod tests;
