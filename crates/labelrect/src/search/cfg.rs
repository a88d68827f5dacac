//! Search configuration and its defaults.
//!
//! Policy
//! - Every knob the driver reads lives in `SearchCfg`; the constants below are
//!   the production defaults. `epsilon` in particular is never hardwired at a
//!   call site: callers either take `DEFAULT_EPSILON` or pass their own.

use super::error::SearchError;

/// Default convergence tolerance, in input units (degrees in the pipeline).
pub const DEFAULT_EPSILON: f64 = 0.01;
/// Number of interior seeds, i.e. independent expansion lineages.
pub const DEFAULT_SEED_COUNT: usize = 10;
/// Rejection-sampling budget for all seeds together.
pub const DEFAULT_MAX_SEED_ATTEMPTS: usize = 100;
/// Initial step is `min(bbox width, bbox height) / DEFAULT_STEP_DIVISIONS`.
pub const DEFAULT_STEP_DIVISIONS: f64 = 20.0;

/// Parameters of one inscribed-rectangle search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchCfg {
    /// Refinement stops once the step size is at most `epsilon`. Also sets the
    /// minimum bounding-box area `4·epsilon²`.
    pub epsilon: f64,
    pub seed_count: usize,
    pub max_seed_attempts: usize,
    pub step_divisions: f64,
    /// Optional cap on halving rounds after the initial expansion. `None` runs
    /// until the step drops to `epsilon`.
    pub max_refinement_rounds: Option<u32>,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            seed_count: DEFAULT_SEED_COUNT,
            max_seed_attempts: DEFAULT_MAX_SEED_ATTEMPTS,
            step_divisions: DEFAULT_STEP_DIVISIONS,
            max_refinement_rounds: None,
        }
    }
}

impl SearchCfg {
    /// Default configuration with a custom tolerance.
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self {
            epsilon,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(SearchError::invalid_config(format!(
                "epsilon must be finite and > 0, got {}",
                self.epsilon
            )));
        }
        if self.seed_count == 0 {
            return Err(SearchError::invalid_config("seed_count must be >= 1"));
        }
        if !(self.step_divisions.is_finite() && self.step_divisions >= 1.0) {
            return Err(SearchError::invalid_config(format!(
                "step_divisions must be finite and >= 1, got {}",
                self.step_divisions
            )));
        }
        Ok(())
    }

    /// Smallest bounding-box area a ring needs at this resolution.
    #[inline]
    pub fn min_bbox_area(&self) -> f64 {
        4.0 * self.epsilon * self.epsilon
    }
}
