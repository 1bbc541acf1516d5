//! # Bloodline: Pedigree Analysis for Mating Plans
//!
//! ## Usage
//! ```bash
//! # One stallion against one broodmare
//! bloodline "Stallion" "Broodmare"
//!
//! # Every stallion mated with a daughter of "Dam's Sire" and "Broodmare"
//! bloodline all "Dam's Sire" "Broodmare" --out report.csv
//!
//! # With span timings
//! bloodline all all --data-dir database --profile
//! ```

use std::time::Instant;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use bloodline::config::Config;
use bloodline::io::dataset::Dataset;
use bloodline::io::report::ReportWriter;
use bloodline::pipelines::{SearchPipeline, SearchPlan};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber; `profile` adds span close timings
fn init_tracing(profile: bool) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let default_level = if profile { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let span_events = if profile { FmtSpan::CLOSE } else { FmtSpan::NONE };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(span_events)
                .with_target(false)
                .with_timer(fmt::time::uptime()),
        )
        .init();
}

fn run() -> anyhow::Result<()> {
    let start = Instant::now();

    let config = Config::parse_and_validate()?;
    init_tracing(config.profile);
    if config.profile {
        eprintln!("=== Profiling enabled ===\n");
    }

    let paths = config.dataset_paths();
    let dataset = Dataset::load(&paths)
        .with_context(|| format!("loading dataset from {}", config.data_dir.display()))?;

    let plan = SearchPlan::resolve(&dataset, &config.names).context("resolving names")?;

    let mut report = match &config.out {
        Some(path) => ReportWriter::create(path)
            .with_context(|| format!("creating report {}", path.display()))?,
        None => ReportWriter::stdout(),
    };

    let stats = SearchPipeline::new(&dataset, config.flags()).run(&plan, &mut report)?;

    if config.profile {
        eprintln!(
            "\nAnalysed {} matings in {:.2}s",
            stats.n_analysed(),
            start.elapsed().as_secs_f64()
        );
    }

    Ok(())
}
