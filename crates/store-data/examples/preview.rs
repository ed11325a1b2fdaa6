//! Example: Build one dataset in memory and log a preview.
//!
//! This generates the default store dataset without writing any files:
//! - 72 catalog products priced per department
//! - 40 workers across 9 departments
//! - 500 orders with reviews and intra-team complaints
//!
//! Run with:
//! ```
//! cargo run -p store-data --example preview
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

    let mut rng = StdRng::seed_from_u64(0);
    let dataset = DatasetBuilder::new().build_data(&mut rng)?;

    let summary = dataset.summary();
    tracing::info!("Dataset built!");
    tracing::info!("  Products: {}", summary.products);
    tracing::info!("  Workers: {}", summary.workers);
    tracing::info!("  Orders: {} ({} lines)", summary.orders, summary.order_lines);
    tracing::info!("  Complaints: {}", summary.complaints);
    tracing::info!("  Reviews: {}", summary.reviews);

    // Print a few catalog rows
    for product in dataset.products.iter().take(5) {
        tracing::info!(
            "  Product {} '{}' [{}]: {} in stock at {}",
            product.id,
            product.name,
            product.department,
            product.stock_quantity,
            product.price
        );
    }

    // Print department team sizes
    for (department, members) in dataset.workforce.groups() {
        tracing::info!("  {department}: {} workers", members.len());
    }

    // Print the first complaint, if any
    if let Some(complaint) = dataset.complaints.first() {
        tracing::info!(
            "  First complaint: {} -> {} ({}): {}",
            complaint.complainer_id,
            complaint.complained_on_id,
            complaint.department,
            complaint.reason
        );
    }

    Ok(())
}
