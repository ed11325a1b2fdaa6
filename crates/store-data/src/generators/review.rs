//! Review generation with a deliberately polarized rating distribution.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;
use rand_distr::{Distribution, Normal};
use serde::Serialize;

use crate::config::IdBlock;

/// Generated review row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GeneratedReview {
    pub order_id: i64,
    pub customer_id: i64,
    pub description: String,
    pub rating: u8,
}

/// Configuration for review generation.
#[derive(Debug, Clone)]
pub struct ReviewConfig {
    /// Contiguous customer id block to draw reviewers from.
    pub customer_ids: IdBlock,
    /// Inclusive range of reviews per order.
    pub reviews_per_order: RangeInclusive<usize>,
    /// Review text drawn uniformly, one per review.
    pub texts: Vec<String>,
    /// Candidate means for the rating draw.
    ///
    /// Values near the scale edges, combined with clamping, pile probability
    /// mass onto ratings 1 and 5. That polarization is the point: this data
    /// exists to exercise rating aggregation, not to look like real feedback.
    pub extreme_means: Vec<f64>,
    /// Standard deviation of the rating sample around its chosen mean.
    pub rating_std_dev: f64,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            customer_ids: IdBlock::new(2000, 120),
            reviews_per_order: 1..=3,
            texts: default_texts(),
            extreme_means: vec![0.1, 1.0, 2.0, 3.0, 4.0, 4.8],
            rating_std_dev: 1.2,
        }
    }
}

/// Generates per-order customer reviews.
pub struct ReviewGenerator {
    config: ReviewConfig,
}

impl ReviewGenerator {
    /// Creates a new review generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: ReviewConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: ReviewConfig) -> Self {
        Self { config }
    }

    /// Generates reviews from distinct customers for each order id.
    ///
    /// Each rating picks one of the configured means, samples a normal
    /// distribution around it, then rounds and clamps into the 1..=5 scale.
    /// The customer pool caps the per-order review count the same way the
    /// catalog pool caps order lines.
    pub fn generate(&self, order_ids: &[i64], rng: &mut impl Rng) -> Vec<GeneratedReview> {
        let customer_pool = self.config.customer_ids.ids();

        let max_reviews = (*self.config.reviews_per_order.end()).min(customer_pool.len());
        let min_reviews = (*self.config.reviews_per_order.start()).min(max_reviews);

        // Means are fixed per run, so the distributions can be built once.
        let normals: Vec<Normal<f64>> = self
            .config
            .extreme_means
            .iter()
            .map(|&mean| Normal::new(mean, self.config.rating_std_dev).unwrap())
            .collect();

        let mut reviews = Vec::new();

        for &order_id in order_ids {
            let count = rng.gen_range(min_reviews..=max_reviews);

            for &customer_id in customer_pool.choose_multiple(rng, count) {
                let normal = &normals[rng.gen_range(0..normals.len())];
                let rating = normal.sample(rng).round().clamp(1.0, 5.0) as u8;
                let description = &self.config.texts[rng.gen_range(0..self.config.texts.len())];

                reviews.push(GeneratedReview {
                    order_id,
                    customer_id,
                    description: description.clone(),
                    rating,
                });
            }
        }

        // Deduplicate on the full record; distinct reviewers per order already
        // preclude repeats, so this is a safety net that keeps record order.
        let mut seen = HashSet::new();
        reviews.retain(|r| seen.insert(r.clone()));

        reviews
    }
}

impl Default for ReviewGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn default_texts() -> Vec<String> {
    vec![
        "Fast delivery".into(),
        "Great product".into(),
        "Not satisfied".into(),
        "Will order again".into(),
        "Packing was bad".into(),
        "Excellent service".into(),
        "Product as described".into(),
        "Late delivery".into(),
    ]
}
