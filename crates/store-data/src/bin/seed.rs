//! Default seed script - writes five labeled dataset instances as CSV
//!
//! Run with:
//! ```
//! cargo run -p store-data --bin seed
//! ```
//!
//! Artifacts land in `data/` unless `STORE_DATA_OUT_DIR` says otherwise.

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use store_data::builders::DatasetBuilder;
use store_data::sink::{CsvSink, RunReport};
use tracing_subscriber::EnvFilter;

const RUN_SEEDS: [u64; 5] = [0, 1, 2, 3, 4];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let out_dir = std::env::var("STORE_DATA_OUT_DIR").unwrap_or_else(|_| "data".to_string());
    let sink = CsvSink::new(&out_dir);
    let builder = DatasetBuilder::new();

    for (run_index, seed) in RUN_SEEDS.into_iter().enumerate() {
        let started = Instant::now();

        let mut rng = StdRng::seed_from_u64(seed);
        let dataset = builder.build_data(&mut rng)?;
        sink.write_dataset(&dataset, run_index)?;

        let duration_ms = started.elapsed().as_millis() as u64;
        sink.write_report(&RunReport::new(run_index, seed, duration_ms, &dataset))?;

        let summary = dataset.summary();
        tracing::info!("Run {run_index} (seed {seed}) completed!");
        tracing::info!("  Products: {}", summary.products);
        tracing::info!("  Workers: {}", summary.workers);
        tracing::info!("  Orders: {} ({} lines)", summary.orders, summary.order_lines);
        tracing::info!("  Complaints: {}", summary.complaints);
        tracing::info!("  Reviews: {}", summary.reviews);
    }

    tracing::info!("All {} runs written to {out_dir}/", RUN_SEEDS.len());

    Ok(())
}
