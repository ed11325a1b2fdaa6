//! Fluent builder for constructing complete dataset instances.

use std::collections::{HashMap, HashSet};

use catalog::ProductTemplate;
use rand::Rng;
use serde::Serialize;

use crate::errors::ConfigError;
use crate::generators::{
    complaint::{ComplaintConfig, ComplaintGenerator, GeneratedComplaint},
    order::{GeneratedOrderLine, OrderConfig, OrderGenerator},
    product::{CatalogAssembler, CatalogConfig, GeneratedProduct},
    review::{GeneratedReview, ReviewConfig, ReviewGenerator},
    workforce::{GeneratedWorker, WorkforceConfig, WorkforceGenerator, WorkforcePartition},
};

/// One fully generated dataset instance.
///
/// All five tables are internally consistent: order lines reference catalog
/// products, complaints stay inside workforce departments, and reviews point
/// at generated orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub products: Vec<GeneratedProduct>,
    pub workforce: WorkforcePartition,
    pub order_lines: Vec<GeneratedOrderLine>,
    pub complaints: Vec<GeneratedComplaint>,
    pub reviews: Vec<GeneratedReview>,
}

impl Dataset {
    /// Worker assignment rows, ordered by worker id.
    pub fn workers(&self) -> &[GeneratedWorker] {
        self.workforce.workers()
    }

    /// Distinct order ids in first-appearance order.
    pub fn order_ids(&self) -> Vec<i64> {
        distinct_order_ids(&self.order_lines)
    }

    /// Row counts per table, for logging and run reports.
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            products: self.products.len(),
            workers: self.workforce.len(),
            orders: self.order_ids().len(),
            order_lines: self.order_lines.len(),
            complaints: self.complaints.len(),
            reviews: self.reviews.len(),
        }
    }
}

/// Row counts for one dataset instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    /// Number of catalog products.
    pub products: usize,
    /// Number of assigned workers.
    pub workers: usize,
    /// Number of distinct orders.
    pub orders: usize,
    /// Number of order line rows.
    pub order_lines: usize,
    /// Number of complaint rows.
    pub complaints: usize,
    /// Number of review rows.
    pub reviews: usize,
}

/// Builder for creating complete dataset instances.
///
/// # Example
///
/// ```rust,ignore
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let dataset = DatasetBuilder::new()
///     .with_workers(40)
///     .with_orders(500)
///     .with_customers(120)
///     .build_data(&mut rng)?;
/// ```
pub struct DatasetBuilder {
    // Catalog configuration
    templates: Vec<ProductTemplate>,
    catalog_config: CatalogConfig,

    // Workforce configuration
    departments: Vec<String>,
    workforce_config: WorkforceConfig,

    // Order configuration
    order_config: OrderConfig,

    // Complaint configuration
    complaint_config: ComplaintConfig,

    // Review configuration
    review_config: ReviewConfig,
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetBuilder {
    /// Creates a new dataset builder with the default store configuration.
    pub fn new() -> Self {
        Self {
            templates: catalog::all_templates(),
            catalog_config: CatalogConfig::default(),
            departments: catalog::DEPARTMENTS.iter().map(|d| d.to_string()).collect(),
            workforce_config: WorkforceConfig::default(),
            order_config: OrderConfig::default(),
            complaint_config: ComplaintConfig::default(),
            review_config: ReviewConfig::default(),
        }
    }

    /// Sets the product templates to assemble the catalog from.
    pub fn with_templates(mut self, templates: Vec<ProductTemplate>) -> Self {
        self.templates = templates;
        self
    }

    /// Sets the catalog assembly configuration.
    pub fn with_catalog_config(mut self, config: CatalogConfig) -> Self {
        self.catalog_config = config;
        self
    }

    /// Sets the department list used for workforce partitioning.
    pub fn with_departments(mut self, departments: Vec<String>) -> Self {
        self.departments = departments;
        self
    }

    /// Sets the workforce generation configuration.
    pub fn with_workforce_config(mut self, config: WorkforceConfig) -> Self {
        self.workforce_config = config;
        self
    }

    /// Sets the number of workers, keeping the id base.
    pub fn with_workers(mut self, count: usize) -> Self {
        self.workforce_config.worker_ids.count = count;
        self
    }

    /// Sets the order generation configuration.
    pub fn with_order_config(mut self, config: OrderConfig) -> Self {
        self.order_config = config;
        self
    }

    /// Sets the number of orders, keeping the id base.
    pub fn with_orders(mut self, count: usize) -> Self {
        self.order_config.order_ids.count = count;
        self
    }

    /// Sets the complaint generation configuration.
    pub fn with_complaint_config(mut self, config: ComplaintConfig) -> Self {
        self.complaint_config = config;
        self
    }

    /// Sets the review generation configuration.
    pub fn with_review_config(mut self, config: ReviewConfig) -> Self {
        self.review_config = config;
        self
    }

    /// Sets the number of customers available as reviewers, keeping the id
    /// base.
    pub fn with_customers(mut self, count: usize) -> Self {
        self.review_config.customer_ids.count = count;
        self
    }

    /// Validates the configuration without generating anything.
    ///
    /// Every check here is fatal: generation refuses to start from a
    /// configuration it would have to silently repair.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.departments.is_empty() {
            return Err(ConfigError::NoDepartments);
        }
        if self.templates.is_empty() {
            return Err(ConfigError::NoTemplates);
        }
        if self.workforce_config.worker_ids.count < self.departments.len() {
            return Err(ConfigError::TooFewWorkers {
                workers: self.workforce_config.worker_ids.count,
                departments: self.departments.len(),
            });
        }
        if self.review_config.customer_ids.count == 0 {
            return Err(ConfigError::NoCustomers);
        }

        for (_, (min, max)) in self.catalog_config.price_ranges.entries() {
            if min > max {
                return Err(ConfigError::InvertedRange { what: "price" });
            }
        }
        let (min_default, max_default) = self.catalog_config.price_ranges.default_range();
        if min_default > max_default {
            return Err(ConfigError::InvertedRange { what: "default price" });
        }
        let (min_stock, max_stock) = self.catalog_config.stock_range;
        if min_stock > max_stock {
            return Err(ConfigError::InvertedRange { what: "stock" });
        }

        check_count_range("lines per order", &self.order_config.lines_per_order)?;
        if self.order_config.quantity_range.is_empty() {
            return Err(ConfigError::InvertedRange { what: "quantity" });
        }
        if *self.order_config.quantity_range.start() == 0 {
            return Err(ConfigError::ZeroMinimum { what: "quantity" });
        }
        check_count_range("reviews per order", &self.review_config.reviews_per_order)?;

        if self.complaint_config.reasons.is_empty() {
            return Err(ConfigError::EmptyList { list: "complaint reason" });
        }
        if self.review_config.texts.is_empty() {
            return Err(ConfigError::EmptyList { list: "review text" });
        }
        if self.review_config.extreme_means.is_empty() {
            return Err(ConfigError::EmptyList { list: "rating mean" });
        }
        let std_dev = self.review_config.rating_std_dev;
        if !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(ConfigError::InvalidStdDev { value: std_dev });
        }

        Ok(())
    }

    /// Generates a complete dataset against the supplied RNG handle.
    ///
    /// Stages run in a fixed order (catalog, workforce, orders, complaints,
    /// reviews) drawing from the one handle, so a seeded handle reproduces
    /// the same dataset every time. The finished dataset is run through
    /// consistency checks that abort on violation rather than repair.
    pub fn build_data(&self, rng: &mut impl Rng) -> Result<Dataset, ConfigError> {
        self.validate()?;

        let assembler = CatalogAssembler::with_config(self.catalog_config.clone());
        let products = assembler.assemble(&self.templates, rng)?;
        let product_ids: Vec<i64> = products.iter().map(|p| p.id).collect();

        let workforce_gen = WorkforceGenerator::with_config(self.workforce_config.clone());
        let workforce = workforce_gen.generate(&self.departments, rng)?;

        let order_gen = OrderGenerator::with_config(self.order_config.clone());
        let order_lines = order_gen.generate(&product_ids, rng);

        let complaint_gen = ComplaintGenerator::with_config(self.complaint_config.clone());
        let complaints = complaint_gen.generate(&workforce, rng);

        let review_gen = ReviewGenerator::with_config(self.review_config.clone());
        let order_ids = distinct_order_ids(&order_lines);
        let reviews = review_gen.generate(&order_ids, rng);

        let dataset = Dataset {
            products,
            workforce,
            order_lines,
            complaints,
            reviews,
        };
        self.check_integrity(&dataset);

        Ok(dataset)
    }

    /// Cross-table consistency checks for a finished dataset.
    ///
    /// These guard the invariants downstream consumers join on. A dataset
    /// that violates them is worse than no dataset, so violations abort.
    fn check_integrity(&self, dataset: &Dataset) {
        let product_ids: HashSet<i64> = dataset.products.iter().map(|p| p.id).collect();
        assert_eq!(
            product_ids.len(),
            dataset.products.len(),
            "product ids must be unique"
        );
        if let (Some(first), Some(last)) = (dataset.products.first(), dataset.products.last()) {
            assert_eq!(
                last.id - first.id + 1,
                dataset.products.len() as i64,
                "product ids must be contiguous"
            );
        }

        for department in &self.departments {
            assert!(
                dataset
                    .workforce
                    .groups()
                    .iter()
                    .any(|(name, members)| name == department && !members.is_empty()),
                "department {department} has no workers"
            );
        }

        let max_lines = *self.order_config.lines_per_order.end();
        let mut per_order: HashMap<i64, HashSet<i64>> = HashMap::new();
        for line in &dataset.order_lines {
            assert!(
                product_ids.contains(&line.product_id),
                "order {} references unknown product {}",
                line.order_id,
                line.product_id
            );
            assert!(
                per_order.entry(line.order_id).or_default().insert(line.product_id),
                "order {} repeats product {}",
                line.order_id,
                line.product_id
            );
        }
        for (order_id, order_products) in &per_order {
            assert!(
                (1..=max_lines).contains(&order_products.len()),
                "order {order_id} has {} lines",
                order_products.len()
            );
        }

        for complaint in &dataset.complaints {
            assert_ne!(
                complaint.complainer_id, complaint.complained_on_id,
                "worker {} complained about themselves",
                complaint.complainer_id
            );
            assert_eq!(
                dataset.workforce.department_of(complaint.complainer_id),
                Some(complaint.department.as_str()),
                "complainer {} outside department {}",
                complaint.complainer_id,
                complaint.department
            );
            assert_eq!(
                dataset.workforce.department_of(complaint.complained_on_id),
                Some(complaint.department.as_str()),
                "target {} outside department {}",
                complaint.complained_on_id,
                complaint.department
            );
        }

        for review in &dataset.reviews {
            assert!(
                per_order.contains_key(&review.order_id),
                "review references unknown order {}",
                review.order_id
            );
            assert!(
                (1..=5).contains(&review.rating),
                "review rating {} off scale",
                review.rating
            );
        }
    }
}

/// Preset configurations for common dataset shapes.
impl DatasetBuilder {
    /// Compact dataset for fast tests.
    ///
    /// Same shape as the default configuration, an order of magnitude
    /// smaller: 12 workers, 25 orders, 15 customers.
    pub fn compact() -> Self {
        Self::new().with_workers(12).with_orders(25).with_customers(15)
    }

    /// Dataset sized for rating aggregation queries.
    ///
    /// Four times the default order volume so per-product rating averages
    /// settle, with a wider customer pool to match.
    pub fn review_analytics_test() -> Self {
        Self::new().with_orders(2000).with_customers(400)
    }

    /// Dataset with a dense complaint graph.
    ///
    /// Three departments and thirty workers leave each worker roughly ten
    /// eligible targets, so most directed pairs get exercised.
    pub fn complaint_graph_test() -> Self {
        let departments = ["Kayaks", "E-Bikes", "Backpacks"]
            .iter()
            .map(|d| d.to_string())
            .collect();
        Self::new().with_departments(departments).with_workers(30)
    }
}

fn check_count_range(
    what: &'static str,
    range: &std::ops::RangeInclusive<usize>,
) -> Result<(), ConfigError> {
    if range.is_empty() {
        return Err(ConfigError::InvertedRange { what });
    }
    if *range.start() == 0 {
        return Err(ConfigError::ZeroMinimum { what });
    }
    Ok(())
}

/// Distinct order ids in first-appearance order.
fn distinct_order_ids(lines: &[GeneratedOrderLine]) -> Vec<i64> {
    let mut ids = Vec::new();
    let mut seen = HashSet::new();
    for line in lines {
        if seen.insert(line.order_id) {
            ids.push(line.order_id);
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_build_data_default_shape() {
        let mut rng = StdRng::seed_from_u64(0);

        let dataset = DatasetBuilder::new().build_data(&mut rng).unwrap();
        let summary = dataset.summary();

        assert_eq!(summary.products, 72);
        assert_eq!(summary.workers, 40);
        assert_eq!(summary.orders, 500);
        assert!((500..=2500).contains(&summary.order_lines));
        assert!((500..=1500).contains(&summary.reviews));
    }

    #[test]
    fn test_same_seed_reproduces_dataset() {
        let builder = DatasetBuilder::new();

        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);

        let first = builder.build_data(&mut rng_a).unwrap();
        let second = builder.build_data(&mut rng_b).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let builder = DatasetBuilder::compact();

        let mut rng_a = StdRng::seed_from_u64(0);
        let mut rng_b = StdRng::seed_from_u64(1);

        let first = builder.build_data(&mut rng_a).unwrap();
        let second = builder.build_data(&mut rng_b).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_order_ids_are_the_configured_block() {
        let mut rng = StdRng::seed_from_u64(3);

        let dataset = DatasetBuilder::new().build_data(&mut rng).unwrap();
        let order_ids = dataset.order_ids();

        assert_eq!(order_ids.len(), 500);
        assert_eq!(order_ids.first(), Some(&3000));
        assert_eq!(order_ids.last(), Some(&3499));
    }

    #[test]
    fn test_reviews_reference_generated_orders() {
        let mut rng = StdRng::seed_from_u64(11);

        let dataset = DatasetBuilder::compact().build_data(&mut rng).unwrap();
        let order_ids: HashSet<i64> = dataset.order_ids().into_iter().collect();

        assert!(!dataset.reviews.is_empty());
        for review in &dataset.reviews {
            assert!(order_ids.contains(&review.order_id));
        }
    }

    #[test]
    fn test_empty_department_list_is_rejected() {
        let mut rng = rand::thread_rng();

        let result = DatasetBuilder::new()
            .with_departments(Vec::new())
            .build_data(&mut rng);

        assert!(matches!(result, Err(ConfigError::NoDepartments)));
    }

    #[test]
    fn test_undersized_workforce_is_rejected() {
        let mut rng = rand::thread_rng();

        let result = DatasetBuilder::new().with_workers(4).build_data(&mut rng);

        assert!(matches!(
            result,
            Err(ConfigError::TooFewWorkers { workers: 4, departments: 9 })
        ));
    }

    #[test]
    fn test_zero_line_minimum_is_rejected() {
        let mut rng = rand::thread_rng();

        let result = DatasetBuilder::new()
            .with_order_config(OrderConfig {
                lines_per_order: 0..=5,
                ..Default::default()
            })
            .build_data(&mut rng);

        assert!(matches!(
            result,
            Err(ConfigError::ZeroMinimum { what: "lines per order" })
        ));
    }

    #[test]
    fn test_invalid_std_dev_is_rejected() {
        let mut rng = rand::thread_rng();

        let result = DatasetBuilder::new()
            .with_review_config(ReviewConfig {
                rating_std_dev: 0.0,
                ..Default::default()
            })
            .build_data(&mut rng);

        assert!(matches!(result, Err(ConfigError::InvalidStdDev { .. })));
    }

    #[test]
    fn test_empty_reason_list_is_rejected() {
        let mut rng = rand::thread_rng();

        let result = DatasetBuilder::new()
            .with_complaint_config(ComplaintConfig {
                reasons: Vec::new(),
                ..Default::default()
            })
            .build_data(&mut rng);

        assert!(matches!(
            result,
            Err(ConfigError::EmptyList { list: "complaint reason" })
        ));
    }

    #[test]
    fn test_inverted_quantity_range_is_rejected() {
        let mut rng = rand::thread_rng();

        let result = DatasetBuilder::new()
            .with_order_config(OrderConfig {
                quantity_range: 7..=1,
                ..Default::default()
            })
            .build_data(&mut rng);

        assert!(matches!(
            result,
            Err(ConfigError::InvertedRange { what: "quantity" })
        ));
    }

    #[test]
    fn test_preset_compact() {
        let builder = DatasetBuilder::compact();
        assert_eq!(builder.workforce_config.worker_ids.count, 12);
        assert_eq!(builder.order_config.order_ids.count, 25);
        assert_eq!(builder.review_config.customer_ids.count, 15);

        let mut rng = StdRng::seed_from_u64(5);
        let dataset = builder.build_data(&mut rng).unwrap();
        assert_eq!(dataset.summary().orders, 25);
    }

    #[test]
    fn test_preset_complaint_graph() {
        let builder = DatasetBuilder::complaint_graph_test();
        assert_eq!(builder.departments.len(), 3);

        let mut rng = StdRng::seed_from_u64(5);
        let dataset = builder.build_data(&mut rng).unwrap();

        // Ten-ish eligible targets per worker makes empty complaint sets rare.
        assert!(dataset.complaints.len() > 30);
    }
}
