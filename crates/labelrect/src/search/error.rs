use std::fmt;

/// Errors surfaced by the inscribed-rectangle search.
///
/// All variants are terminal for the call: there is no partial result and the
/// search never retries internally. Retrying with other parameters is up to
/// the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchError {
    /// Vertex list rejected by `Ring::new`.
    InvalidRing { reason: String },
    /// `SearchCfg::validate` failed.
    InvalidConfig { reason: String },
    /// Bounding-box area below `4·epsilon²`.
    PolygonTooSmall { bbox_area: f64, min_area: f64 },
    /// Rejection sampling ran out of attempts (interior tiny relative to the bbox).
    InsufficientSeeds {
        found: usize,
        wanted: usize,
        attempts: usize,
    },
    /// The initial step is already below `epsilon` (very thin bbox).
    StepTooCoarse { step: f64, epsilon: f64 },
    /// Every seed expanded to a zero-area rect.
    NoViableCandidate,
}

impl SearchError {
    pub(crate) fn invalid_ring(reason: impl Into<String>) -> Self {
        Self::InvalidRing {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRing { reason } => write!(f, "invalid ring: {reason}"),
            Self::InvalidConfig { reason } => write!(f, "invalid search config: {reason}"),
            Self::PolygonTooSmall {
                bbox_area,
                min_area,
            } => write!(
                f,
                "polygon too small: bounding box area {bbox_area} is below {min_area}"
            ),
            Self::InsufficientSeeds {
                found,
                wanted,
                attempts,
            } => write!(
                f,
                "found only {found} of {wanted} interior seed points in {attempts} attempts"
            ),
            Self::StepTooCoarse { step, epsilon } => write!(
                f,
                "initial step {step} is below epsilon {epsilon} (bounding box too thin)"
            ),
            Self::NoViableCandidate => {
                write!(f, "no seed expanded to a rectangle with positive area")
            }
        }
    }
}

impl std::error::Error for SearchError {}
