//! Example: Show the deliberately polarized review rating distribution.
//!
//! Ratings are drawn around extreme means and clamped into 1..=5, so the
//! histogram should pile up on 1 and 5 rather than hump in the middle.
//!
//! Run with:
//! ```
//! cargo run -p store-data --example rating_spread
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;
use store_data::builders::DatasetBuilder;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut rng = StdRng::seed_from_u64(42);
    let dataset = DatasetBuilder::review_analytics_test().build_data(&mut rng)?;

    let mut counts = [0usize; 5];
    for review in &dataset.reviews {
        counts[(review.rating - 1) as usize] += 1;
    }

    let total = dataset.reviews.len().max(1);
    tracing::info!("Rating distribution over {} reviews:", dataset.reviews.len());
    for (index, count) in counts.iter().enumerate() {
        let bar = "#".repeat(count * 50 / total);
        tracing::info!("  {}: {count:>5} {bar}", index + 1);
    }

    let extremes = counts[0] + counts[4];
    tracing::info!(
        "Extreme ratings (1 and 5): {extremes} of {} ({:.0}%)",
        dataset.reviews.len(),
        extremes as f64 / total as f64 * 100.0
    );

    Ok(())
}
