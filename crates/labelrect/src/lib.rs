//! Label rectangles: largest axis-aligned inscribed rectangles of polygons.
//!
//! The core is a randomized local search (`search`) over exact 2D predicates
//! (`geom2`). `label` wraps it with the multi-polygon and small-ring policy of
//! the offline label pipeline.
//!
//! API Policy
//! - The library is a pure function of (ring, config, random source): no I/O,
//!   no logging, no process-wide state. Callers own seeding and error policy.

pub mod api;
pub mod geom2;
pub mod label;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Point, Rect, Ring};
pub use search::{Candidate, SearchCfg, SearchError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_star_ring, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{Point, Rect, Ring, Side};
    pub use crate::label::{best_over_rings, ClusterLabel, LabelRect, RingFilter, RingOutcome};
    pub use crate::search::{
        largest_inscribed_rect, largest_inscribed_rect_with, Candidate, SearchCfg, SearchError,
        DEFAULT_EPSILON,
    };
}
