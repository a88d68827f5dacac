//! Label rectangles for (multi-)polygon clusters.
//!
//! The search handles one ring per call. This module applies the pipeline
//! policy around it:
//! - skip rings whose bounding box is narrower than `RingFilter::min_extent`
//!   on either axis (no useful label fits, and the search would mostly fail);
//! - run the search on every remaining ring of a multi-polygon and keep the
//!   largest rectangle.
//!
//! Per-ring outcomes are returned so the caller can log failures by cluster.

use rand::Rng;

use crate::geom2::Ring;
use crate::search::{largest_inscribed_rect_with, Candidate, SearchCfg, SearchError};

/// Default minimum bounding-box extent (degrees) for a ring to be searched.
pub const DEFAULT_MIN_EXTENT: f64 = 0.2;

/// Usefulness threshold applied before searching a ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingFilter {
    pub min_extent: f64,
}

impl Default for RingFilter {
    fn default() -> Self {
        Self {
            min_extent: DEFAULT_MIN_EXTENT,
        }
    }
}

impl RingFilter {
    pub fn validate(&self) -> Result<(), SearchError> {
        if !(self.min_extent.is_finite() && self.min_extent >= 0.0) {
            return Err(SearchError::invalid_config(format!(
                "min_extent must be finite and >= 0, got {}",
                self.min_extent
            )));
        }
        Ok(())
    }

    /// True if both bbox sides are at least `min_extent`.
    #[inline]
    pub fn accepts(&self, ring: &Ring) -> bool {
        let b = ring.bounds();
        b.width() >= self.min_extent && b.height() >= self.min_extent
    }
}

/// What happened to one ring.
#[derive(Clone, Debug, PartialEq)]
pub enum RingOutcome {
    /// Bounding box below the filter threshold; not searched.
    Skipped { width: f64, height: f64 },
    Failed(SearchError),
    Found(Candidate),
}

/// Winning rectangle of a multi-polygon, with the index of its ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelRect {
    pub ring: usize,
    pub candidate: Candidate,
}

/// Result of `best_over_rings`: the winner (if any ring succeeded) and one
/// outcome per input ring, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterLabel {
    pub best: Option<LabelRect>,
    pub outcomes: Vec<RingOutcome>,
}

/// Search every accepted ring and keep the largest rectangle. Ties go to the
/// earlier ring.
///
/// `rng_for` supplies the random source per ring index, so a caller can give
/// each ring its own replayable stream.
pub fn best_over_rings<R, F>(
    rings: &[Ring],
    filter: &RingFilter,
    cfg: &SearchCfg,
    mut rng_for: F,
) -> ClusterLabel
where
    R: Rng,
    F: FnMut(usize) -> R,
{
    let mut best: Option<LabelRect> = None;
    let mut outcomes = Vec::with_capacity(rings.len());
    for (i, ring) in rings.iter().enumerate() {
        if !filter.accepts(ring) {
            let b = ring.bounds();
            outcomes.push(RingOutcome::Skipped {
                width: b.width(),
                height: b.height(),
            });
            continue;
        }
        let mut rng = rng_for(i);
        match largest_inscribed_rect_with(ring, cfg, &mut rng) {
            Ok(c) => {
                if best.map_or(true, |b| c.area > b.candidate.area) {
                    best = Some(LabelRect {
                        ring: i,
                        candidate: c,
                    });
                }
                outcomes.push(RingOutcome::Found(c));
            }
            Err(e) => outcomes.push(RingOutcome::Failed(e)),
        }
    }
    ClusterLabel { best, outcomes }
}
