//! Largest axis-aligned inscribed rectangle (randomized local search).
//!
//! Purpose
//! - Given a simple ring, find an axis-aligned rectangle of large area lying
//!   inside it. Used to precompute label rectangles for cluster polygons.
//! - Heuristic: multi-start expansion from random interior seeds, pruning of
//!   dominated candidates, and step halving until `epsilon`.
//!
//! Layout
//! - `cfg.rs`: `SearchCfg` and default constants.
//! - `error.rs`: `SearchError`.
//! - `expand.rs`: two-phase growth of one rect at a fixed step.
//! - `seeds.rs`: rejection-sampled interior seeds.
//! - `driver.rs`: the search loop and candidate selection.
//!
//! Code cross-refs: `geom2::{Ring, Rect, rect_intersects_polygon_boundary}`

mod cfg;
mod driver;
mod error;
mod expand;
mod seeds;

pub use cfg::{
    SearchCfg, DEFAULT_EPSILON, DEFAULT_MAX_SEED_ATTEMPTS, DEFAULT_SEED_COUNT,
    DEFAULT_STEP_DIVISIONS,
};
pub use driver::{
    best_candidate, largest_inscribed_rect, largest_inscribed_rect_with, prune_dominated,
    Candidate,
};
pub use error::SearchError;
pub use expand::expand;
pub use seeds::{degenerate_rects, seed_points};
