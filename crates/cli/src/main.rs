use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use labelrect::label::{RingFilter, DEFAULT_MIN_EXTENT};
use labelrect::prelude::ReplayToken;
use labelrect::search::{
    largest_inscribed_rect_with, SearchCfg, DEFAULT_EPSILON, DEFAULT_MAX_SEED_ATTEMPTS,
    DEFAULT_SEED_COUNT,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod features;
mod pipeline;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Precompute label rectangles for cluster polygons")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Search parameters shared by `run` and `probe`.
#[derive(Args, Clone, Debug)]
struct SearchArgs {
    /// Convergence tolerance in input units (degrees for WGS84 input)
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    epsilon: f64,
    /// Base seed; omit for entropy-seeded (non-replayable) runs
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_SEED_COUNT)]
    seed_count: usize,
    #[arg(long, default_value_t = DEFAULT_MAX_SEED_ATTEMPTS)]
    max_seed_attempts: usize,
    /// Cap on step-halving rounds after the initial expansion
    #[arg(long)]
    max_rounds: Option<u32>,
}

impl SearchArgs {
    fn cfg(&self) -> SearchCfg {
        SearchCfg {
            epsilon: self.epsilon,
            seed_count: self.seed_count,
            max_seed_attempts: self.max_seed_attempts,
            max_refinement_rounds: self.max_rounds,
            ..SearchCfg::default()
        }
    }

    fn params_json(&self) -> serde_json::Value {
        let cfg = self.cfg();
        json!({
            "epsilon": cfg.epsilon,
            "seed": self.seed,
            "seed_count": cfg.seed_count,
            "max_seed_attempts": cfg.max_seed_attempts,
            "step_divisions": cfg.step_divisions,
            "max_refinement_rounds": cfg.max_refinement_rounds,
        })
    }
}

#[derive(Subcommand)]
enum Action {
    /// Label every cluster of a GeoJSON FeatureCollection
    Run {
        #[arg(long)]
        input: PathBuf,
        /// Output table (.csv, or .parquet)
        #[arg(long)]
        out: PathBuf,
        /// Skip rings whose bounding box is narrower than this on either axis
        #[arg(long, default_value_t = DEFAULT_MIN_EXTENT)]
        min_extent: f64,
        /// Property holding the cluster id when the feature has no `id`
        #[arg(long, default_value = "id")]
        id_field: String,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Search a single ring given as "x,y;x,y;..." and print the result
    Probe {
        #[arg(long)]
        coords: String,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Print a provenance JSON block with the default parameters
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            out,
            min_extent,
            id_field,
            search,
        } => run(input, out, min_extent, id_field, search),
        Action::Probe { coords, search } => probe(coords, search),
        Action::Report => report(),
    }
}

fn run(
    input: PathBuf,
    out: PathBuf,
    min_extent: f64,
    id_field: String,
    search: SearchArgs,
) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), ?search, "run");
    let params = pipeline::RunParams {
        search: search.cfg(),
        filter: RingFilter { min_extent },
        seed: search.seed,
        id_field,
    };
    params.validate()?;

    let fc = features::read_collection(&input)?;
    let (rows, summary) = pipeline::label_collection(&fc, &params);
    tracing::info!(
        features = summary.features,
        labelled = summary.labelled,
        failed = summary.rings_failed,
        skipped = summary.rings_skipped,
        "labelled clusters"
    );

    let mut df = pipeline::rows_to_frame(&rows).context("building label table")?;
    pipeline::write_table(&mut df, &out)?;

    let mut run_params = search.params_json();
    run_params["min_extent"] = json!(min_extent);
    run_params["id_field"] = json!(params.id_field);
    let payload = provenance::Payload::new(run_params)
        .with_input(input.to_string_lossy())
        .with_summary(serde_json::to_value(&summary)?);
    let prov = provenance::write_sidecar(&out, payload)?;
    tracing::info!(provenance = %prov.display(), "wrote outputs");
    Ok(())
}

fn probe(coords: String, search: SearchArgs) -> Result<()> {
    let ring = features::parse_coords(&coords)?;
    let mut rng = match search.seed {
        Some(seed) => ReplayToken { seed, index: 0 }.to_std_rng(),
        None => StdRng::from_entropy(),
    };
    let c = largest_inscribed_rect_with(&ring, &search.cfg(), &mut rng)?;
    let obj = json!({
        "rect": {
            "min_x": c.rect.min_x,
            "max_x": c.rect.max_x,
            "min_y": c.rect.min_y,
            "max_y": c.rect.max_y,
        },
        "area": c.area,
        "last_step": c.last_step,
        "bbox_fill": c.area / ring.bounds().area(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn report() -> Result<()> {
    let cfg = SearchCfg::default();
    let payload = provenance::Payload::new(json!({
        "epsilon": cfg.epsilon,
        "seed_count": cfg.seed_count,
        "max_seed_attempts": cfg.max_seed_attempts,
        "step_divisions": cfg.step_divisions,
        "min_extent": RingFilter::default().min_extent,
    }));
    let obj = provenance::document(&payload, &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
