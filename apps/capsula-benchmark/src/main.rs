//! Capsula collision benchmark
//!
//! Animates a grid of points, spheres and capsules and runs the full pairwise
//! collision pass every frame, reporting timings through `tracing`.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release -p capsula-benchmark -- [OPTIONS]
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod config;
mod scene;

use std::time::{Duration, Instant};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::BenchmarkConfig;
use crate::scene::{FrameStats, Scene};

fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = BenchmarkConfig::from_args();
    info!(?config, "Capsula collision benchmark");

    let mut scene = Scene::new(&config)?;
    info!(shapes = scene.len(), "Scene built");

    let mut update_time = Duration::ZERO;
    let mut query_time = Duration::ZERO;
    let mut totals = FrameStats::default();

    for frame in 0..config.frames {
        let start = Instant::now();
        scene.update(frame);
        let updated = Instant::now();
        let stats = scene.query(config.parallel)?;
        update_time += updated - start;
        query_time += updated.elapsed();

        debug!(frame, contacts = stats.contacts, tested = stats.tested, "Frame done");
        totals = totals.merge(stats);
    }

    let frames = config.frames.max(1);
    info!(
        frames = config.frames,
        tested = totals.tested,
        contacts = totals.contacts,
        skipped = totals.skipped,
        "Benchmark finished"
    );
    info!(
        "Average update {:?}, average query {:?}",
        update_time / frames,
        query_time / frames
    );

    Ok(())
}

fn print_help() {
    eprintln!(
        "Capsula collision benchmark

USAGE:
    cargo run --release -p capsula-benchmark -- [OPTIONS]

OPTIONS:
    --frames <N>     Number of simulated frames (default: 120)
    --grid <N>       Shapes per grid axis (default: 24)
    --spacing <F>    Distance between grid cells (default: 1.5)
    --length <F>     Capsule segment length (default: 2.0)
    --radius <F>     Sphere and capsule radius (default: 0.5)
    --serial         Run the query pass on one thread
    -h, --help       Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG         Set log level (e.g., info, debug, trace)"
    );
}
