//! Flat re-export surface for the pipeline and benches.
//!
//! Mirrors the module tree without nesting so call sites read
//! `api::expand(..)` instead of reaching into `search::`. Not a stability
//! promise; the module layout is free to change.

// 2D predicates and types
pub use crate::geom2::{
    bounding_rect, contains, point_in_polygon, rect_intersects_polygon_boundary,
    segments_intersect, Point, Rect, Ring, Side,
};
// Random rings
pub use crate::geom2::rand::{
    draw_star_ring, RadialCfg as StarRingCfg, ReplayToken, VertexCount,
};
// Search
pub use crate::search::{
    best_candidate, degenerate_rects, expand, largest_inscribed_rect,
    largest_inscribed_rect_with, prune_dominated, seed_points, Candidate, SearchCfg,
    SearchError, DEFAULT_EPSILON,
};
// Pipeline policy
pub use crate::label::{
    best_over_rings, ClusterLabel, LabelRect, RingFilter, RingOutcome, DEFAULT_MIN_EXTENT,
};
