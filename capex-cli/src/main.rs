//! Command-line orchestrator for the capex estimation pipeline.
//!
//! Loads the corpus and configuration, runs one estimation with a factor
//! payload produced externally, and prints the output payload as JSON for
//! the report renderer. Logs go to stderr so stdout stays machine-readable.

mod oracle;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use capex_core::config::CapexConfig;
use capex_core::models::ProjectRequest;
use capex_corpus::load_corpus;
use capex_pipeline::EstimatePipeline;

use oracle::JsonFileOracle;

#[derive(Debug, Parser)]
#[command(name = "capex", about = "Comparable-based capital cost estimation")]
struct Args {
    /// Path to the historical corpus (JSON rows).
    #[arg(long)]
    corpus: PathBuf,

    /// Factor payload produced by the external estimator (JSON).
    #[arg(long)]
    factors: PathBuf,

    /// Optional TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "Filling Line")]
    project_type: String,

    #[arg(long, default_value = "Europe")]
    region: String,

    #[arg(long, default_value_t = 400.0)]
    capacity: f64,

    #[arg(long, default_value_t = 2022)]
    execution_year: i32,

    /// Number of comparables to retrieve (defaults to the configured value).
    #[arg(long)]
    top_k: Option<usize>,

    /// Also print the retrieved comparables to stderr.
    #[arg(long)]
    print_topk: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CapexConfig::from_path(path).context("loading configuration")?,
        None => CapexConfig::default(),
    };
    let corpus = load_corpus(&args.corpus).context("loading corpus")?;
    let pipeline = EstimatePipeline::new(corpus, &config).context("building pipeline")?;

    let request = ProjectRequest {
        project_type: args.project_type,
        region: args.region,
        capacity: args.capacity,
        execution_year: args.execution_year,
    };

    let oracle = JsonFileOracle::new(args.factors);
    let payload = match args.top_k {
        Some(top_k) => pipeline.estimate_with_top_k(&request, &oracle, top_k),
        None => pipeline.estimate(&request, &oracle),
    }
    .context("running estimation")?;

    if args.print_topk {
        for comparable in &payload.comparables {
            eprintln!(
                "{}  {}  {}  {}  d={:.4}",
                comparable.project.project_id,
                comparable.project.project_type,
                comparable.project.region,
                comparable.project.execution_year,
                comparable.distance
            );
        }
    }

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
