//! Order generation: unordered sets of catalog products with quantities.

use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::config::IdBlock;

/// Generated order line row.
///
/// An order is the set of lines sharing an `order_id`; there is no separate
/// order header table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GeneratedOrderLine {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: u32,
}

/// Configuration for order generation.
#[derive(Debug, Clone)]
pub struct OrderConfig {
    /// Contiguous order id block; one order per id.
    pub order_ids: IdBlock,
    /// Inclusive range of distinct products per order.
    pub lines_per_order: RangeInclusive<usize>,
    /// Inclusive quantity range per order line.
    pub quantity_range: RangeInclusive<u32>,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            order_ids: IdBlock::new(3000, 500),
            lines_per_order: 1..=5,
            quantity_range: 1..=7,
        }
    }
}

/// Generates orders as flat order-line rows.
pub struct OrderGenerator {
    config: OrderConfig,
}

impl OrderGenerator {
    /// Creates a new order generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: OrderConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: OrderConfig) -> Self {
        Self { config }
    }

    /// Generates lines for every order id in the configured block.
    ///
    /// Each order draws a line count, then that many products without
    /// replacement, so a product never repeats within one order. The catalog
    /// pool caps the line count: a pool of three products yields orders of
    /// one to three lines regardless of the configured upper bound.
    pub fn generate(&self, product_ids: &[i64], rng: &mut impl Rng) -> Vec<GeneratedOrderLine> {
        let mut lines = Vec::new();

        let max_lines = (*self.config.lines_per_order.end()).min(product_ids.len());
        let min_lines = (*self.config.lines_per_order.start()).min(max_lines);

        for order_id in self.config.order_ids.ids() {
            let count = rng.gen_range(min_lines..=max_lines);

            for &product_id in product_ids.choose_multiple(rng, count) {
                lines.push(GeneratedOrderLine {
                    order_id,
                    product_id,
                    quantity: rng.gen_range(self.config.quantity_range.clone()),
                });
            }
        }

        lines
    }
}

impl Default for OrderGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn product_pool(count: usize) -> Vec<i64> {
        (0..count as i64).map(|offset| 1000 + offset).collect()
    }

    fn lines_by_order(lines: &[GeneratedOrderLine]) -> HashMap<i64, Vec<GeneratedOrderLine>> {
        let mut by_order: HashMap<i64, Vec<GeneratedOrderLine>> = HashMap::new();
        for line in lines {
            by_order.entry(line.order_id).or_default().push(*line);
        }
        by_order
    }

    #[test]
    fn test_every_order_id_appears() {
        let order_gen = OrderGenerator::new();
        let mut rng = rand::thread_rng();

        let lines = order_gen.generate(&product_pool(72), &mut rng);
        let by_order = lines_by_order(&lines);

        assert_eq!(by_order.len(), 500);
        for order_id in 3000..3500 {
            assert!(by_order.contains_key(&order_id), "order {order_id} missing");
        }
    }

    #[test]
    fn test_products_are_distinct_within_an_order() {
        let order_gen = OrderGenerator::new();
        let mut rng = rand::thread_rng();

        let lines = order_gen.generate(&product_pool(72), &mut rng);

        for (order_id, order_lines) in lines_by_order(&lines) {
            let distinct: HashSet<i64> = order_lines.iter().map(|l| l.product_id).collect();
            assert_eq!(
                distinct.len(),
                order_lines.len(),
                "order {order_id} repeats a product"
            );
            assert!((1..=5).contains(&order_lines.len()));
        }
    }

    #[test]
    fn test_small_pool_caps_line_count() {
        let order_gen = OrderGenerator::new();
        let mut rng = rand::thread_rng();

        let pool = product_pool(3);
        let lines = order_gen.generate(&pool, &mut rng);

        for (order_id, order_lines) in lines_by_order(&lines) {
            assert!(
                (1..=3).contains(&order_lines.len()),
                "order {order_id} drew {} lines from a pool of 3",
                order_lines.len()
            );
        }
    }

    #[test]
    fn test_lines_reference_the_pool_with_quantities_in_range() {
        let order_gen = OrderGenerator::new();
        let mut rng = rand::thread_rng();

        let pool = product_pool(72);
        let lines = order_gen.generate(&pool, &mut rng);

        for line in &lines {
            assert!(pool.contains(&line.product_id));
            assert!((1..=7).contains(&line.quantity));
        }
    }

    #[test]
    fn test_custom_config_is_honored() {
        let order_gen = OrderGenerator::with_config(OrderConfig {
            order_ids: IdBlock::new(9000, 20),
            lines_per_order: 2..=2,
            quantity_range: 5..=5,
        });
        let mut rng = rand::thread_rng();

        let lines = order_gen.generate(&product_pool(10), &mut rng);

        assert_eq!(lines.len(), 40);
        for line in &lines {
            assert_eq!(line.quantity, 5);
            assert!(line.order_id >= 9000 && line.order_id < 9020);
        }
    }

    #[test]
    fn test_same_seed_reproduces_lines() {
        let order_gen = OrderGenerator::new();
        let pool = product_pool(72);

        let mut rng_a = StdRng::seed_from_u64(5);
        let mut rng_b = StdRng::seed_from_u64(5);

        assert_eq!(
            order_gen.generate(&pool, &mut rng_a),
            order_gen.generate(&pool, &mut rng_b)
        );
    }
}
