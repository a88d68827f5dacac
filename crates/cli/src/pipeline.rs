//! Offline label pipeline: clusters in, one label rectangle per cluster out.

use anyhow::{Context, Result};
use labelrect::label::{best_over_rings, RingFilter, RingOutcome};
use labelrect::prelude::ReplayToken;
use labelrect::{Rect, Ring, SearchCfg, SearchError};
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::features::FeatureCollection;

/// Everything a run needs besides the input and output paths.
#[derive(Clone, Debug)]
pub struct RunParams {
    pub search: SearchCfg,
    pub filter: RingFilter,
    /// Base seed for replayable runs; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub id_field: String,
}

impl RunParams {
    /// Check search and filter parameters before any input is read.
    pub fn validate(&self) -> Result<(), SearchError> {
        self.search.validate()?;
        self.filter.validate()
    }

    /// Random source for ring `ring` of feature `feature`.
    fn rng_for(&self, feature: usize, ring: usize) -> StdRng {
        match self.seed {
            Some(seed) => ReplayToken {
                seed,
                index: ((feature as u64) << 32) | ring as u64,
            }
            .to_std_rng(),
            None => StdRng::from_entropy(),
        }
    }
}

/// One output row: the winning rectangle of a cluster.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelRow {
    pub id: String,
    /// Index of the winning outer ring within the feature.
    pub ring: u32,
    pub rect: Rect,
    pub area: f64,
    pub last_step: f64,
}

/// Counters reported in logs and the provenance sidecar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub features: usize,
    pub labelled: usize,
    pub unsupported_geometry: usize,
    pub rings_skipped: usize,
    pub rings_failed: usize,
    pub rings_invalid: usize,
}

pub fn label_collection(
    fc: &FeatureCollection,
    params: &RunParams,
) -> (Vec<LabelRow>, RunSummary) {
    let mut rows = Vec::new();
    let mut summary = RunSummary {
        features: fc.features.len(),
        ..RunSummary::default()
    };
    for (fi, feature) in fc.features.iter().enumerate() {
        let id = feature.cluster_id(&params.id_field, fi);
        let Some(parsed) = feature.outer_rings() else {
            tracing::warn!(id, "unsupported or missing geometry, skipping");
            summary.unsupported_geometry += 1;
            continue;
        };
        // Keep the original ring index next to each valid ring.
        let mut index_of = Vec::with_capacity(parsed.len());
        let mut rings: Vec<Ring> = Vec::with_capacity(parsed.len());
        for (ri, ring) in parsed.into_iter().enumerate() {
            match ring {
                Ok(r) => {
                    index_of.push(ri);
                    rings.push(r);
                }
                Err(e) => {
                    tracing::warn!(id, ring = ri, error = %e, "invalid ring");
                    summary.rings_invalid += 1;
                }
            }
        }
        let label = best_over_rings(&rings, &params.filter, &params.search, |k| {
            params.rng_for(fi, index_of[k])
        });
        for (k, outcome) in label.outcomes.iter().enumerate() {
            let ring = index_of[k];
            match outcome {
                RingOutcome::Skipped { width, height } => {
                    tracing::debug!(id, ring, width, height, "ring below min extent");
                    summary.rings_skipped += 1;
                }
                RingOutcome::Failed(e) => {
                    tracing::warn!(id, ring, error = %e, "no label rectangle");
                    summary.rings_failed += 1;
                }
                RingOutcome::Found(_) => {}
            }
        }
        if let Some(best) = label.best {
            let c = best.candidate;
            tracing::debug!(id, ring = index_of[best.ring], area = c.area, "label rectangle");
            rows.push(LabelRow {
                id,
                ring: index_of[best.ring] as u32,
                rect: c.rect,
                area: c.area,
                last_step: c.last_step,
            });
            summary.labelled += 1;
        }
    }
    (rows, summary)
}

pub fn rows_to_frame(rows: &[LabelRow]) -> PolarsResult<DataFrame> {
    df!(
        "id" => rows.iter().map(|r| r.id.clone()).collect::<Vec<_>>(),
        "ring" => rows.iter().map(|r| r.ring).collect::<Vec<_>>(),
        "min_x" => rows.iter().map(|r| r.rect.min_x).collect::<Vec<_>>(),
        "max_x" => rows.iter().map(|r| r.rect.max_x).collect::<Vec<_>>(),
        "min_y" => rows.iter().map(|r| r.rect.min_y).collect::<Vec<_>>(),
        "max_y" => rows.iter().map(|r| r.rect.max_y).collect::<Vec<_>>(),
        "area" => rows.iter().map(|r| r.area).collect::<Vec<_>>(),
        "last_step" => rows.iter().map(|r| r.last_step).collect::<Vec<_>>()
    )
}

/// Write the table as Parquet when `out` ends in `.parquet`, CSV otherwise.
pub fn write_table(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    let is_parquet = out
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("parquet"));
    if is_parquet {
        ParquetWriter::new(file)
            .finish(df)
            .with_context(|| format!("writing parquet {}", out.display()))?;
    } else {
        let mut file = file;
        CsvWriter::new(&mut file)
            .finish(df)
            .with_context(|| format!("writing csv {}", out.display()))?;
    }
    Ok(())
}
