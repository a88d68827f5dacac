//! Multi-start search driver.
//!
//! Flow: seed → expand every seed at the initial step → prune → halve the step
//! and re-expand survivors until the step reaches `epsilon` → best survivor.
//! Coarse steps move candidates fast early; fine steps polish the fit late,
//! so there are `O(log(step₀ / epsilon))` refinement rounds.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::cfg::SearchCfg;
use super::error::SearchError;
use super::expand::expand;
use super::seeds::{degenerate_rects, seed_points};
use crate::geom2::{Rect, Ring};

/// A rectangle found by the search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub rect: Rect,
    /// Cached `rect.area()`.
    pub area: f64,
    /// Step size of the last expansion that grew `rect`. Rounds that leave
    /// the rect unchanged keep the previous value, so a candidate that stalled
    /// early has a `last_step` larger than the final step.
    pub last_step: f64,
}

impl Candidate {
    #[inline]
    pub fn new(rect: Rect, last_step: f64) -> Self {
        Self {
            rect,
            area: rect.area(),
            last_step,
        }
    }
}

/// Largest inscribed rectangle with default parameters and an entropy-seeded RNG.
pub fn largest_inscribed_rect(ring: &Ring, epsilon: f64) -> Result<Candidate, SearchError> {
    let mut rng = StdRng::from_entropy();
    largest_inscribed_rect_with(ring, &SearchCfg::with_epsilon(epsilon), &mut rng)
}

/// Largest inscribed rectangle with explicit parameters and random source.
///
/// Only seeding consumes randomness; everything after it is deterministic.
pub fn largest_inscribed_rect_with<R: Rng + ?Sized>(
    ring: &Ring,
    cfg: &SearchCfg,
    rng: &mut R,
) -> Result<Candidate, SearchError> {
    cfg.validate()?;
    let eps = cfg.epsilon;
    let bounds = ring.bounds();

    let bbox_area = bounds.area();
    let min_area = cfg.min_bbox_area();
    if bbox_area < min_area {
        return Err(SearchError::PolygonTooSmall {
            bbox_area,
            min_area,
        });
    }

    let seeds = seed_points(ring, &bounds, cfg.seed_count, cfg.max_seed_attempts, rng)?;

    let mut step = bounds.width().min(bounds.height()) / cfg.step_divisions;
    if step < eps {
        return Err(SearchError::StepTooCoarse { step, epsilon: eps });
    }

    let mut cands = map_all(degenerate_rects(&seeds), |r| {
        Candidate::new(expand(r, ring, &bounds, step), step)
    });
    cands.retain(|c| c.area > 0.0);
    let mut cands = prune_dominated(cands);
    if cands.is_empty() {
        return Err(SearchError::NoViableCandidate);
    }

    let mut rounds = 0u32;
    while step > eps {
        if cfg.max_refinement_rounds.is_some_and(|max| rounds >= max) {
            break;
        }
        step *= 0.5;
        cands = prune_dominated(map_all(cands, |c| regrow(c, ring, &bounds, step)));
        rounds += 1;
    }

    best_candidate(&cands).ok_or(SearchError::NoViableCandidate)
}

/// Re-expand `c` at `step`. `last_step` only moves when the rect grows.
pub(crate) fn regrow(c: Candidate, ring: &Ring, bounds: &Rect, step: f64) -> Candidate {
    let rect = expand(c.rect, ring, bounds, step);
    if rect == c.rect {
        c
    } else {
        Candidate::new(rect, step)
    }
}

/// Expand each item independently; with the `parallel` feature this fans out
/// over the rayon pool and joins before returning. Output order follows input.
#[cfg(not(feature = "parallel"))]
fn map_all<T, F>(items: Vec<T>, f: F) -> Vec<Candidate>
where
    T: Send,
    F: Fn(T) -> Candidate + Sync + Send,
{
    items.into_iter().map(f).collect()
}

#[cfg(feature = "parallel")]
fn map_all<T, F>(items: Vec<T>, f: F) -> Vec<Candidate>
where
    T: Send,
    F: Fn(T) -> Candidate + Sync + Send,
{
    use rayon::prelude::*;
    items.into_par_iter().map(f).collect()
}

/// Drop every candidate whose rect lies inside another candidate's rect.
/// Of several identical rects only the first survives. Order is preserved.
pub fn prune_dominated(cands: Vec<Candidate>) -> Vec<Candidate> {
    let keep: Vec<bool> = cands
        .iter()
        .enumerate()
        .map(|(i, c)| {
            !cands.iter().enumerate().any(|(j, o)| {
                j != i && c.rect.within(&o.rect) && (c.rect != o.rect || j < i)
            })
        })
        .collect();
    cands
        .into_iter()
        .zip(keep)
        .filter_map(|(c, k)| k.then_some(c))
        .collect()
}

/// Max-area candidate; the first one wins ties.
pub fn best_candidate(cands: &[Candidate]) -> Option<Candidate> {
    cands.iter().copied().fold(None, |best, c| match best {
        Some(b) if b.area >= c.area => Some(b),
        _ => Some(c),
    })
}
