//! Catalog assembly: raw product templates into priced, stocked entries.

use catalog::ProductTemplate;
use rand::Rng;
use serde::Serialize;

use crate::config::PriceTable;
use crate::errors::ConfigError;

/// Generated catalog entry ready for the tabular sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedProduct {
    #[serde(rename = "product_id")]
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub stock_quantity: u32,
    #[serde(rename = "department_name")]
    pub department: String,
}

/// Configuration for catalog assembly.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// First product id; templates are numbered sequentially from here.
    pub id_base: i64,
    /// Department-keyed price ranges with a wide fallback.
    pub price_ranges: PriceTable,
    /// Inclusive stock range applied to every product.
    pub stock_range: (u32, u32),
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            id_base: 1000,
            price_ranges: PriceTable::default(),
            stock_range: (0, 150),
        }
    }
}

/// Turns raw product templates into priced, stocked catalog entries.
pub struct CatalogAssembler {
    config: CatalogConfig,
}

impl CatalogAssembler {
    /// Creates a new assembler with default configuration.
    pub fn new() -> Self {
        Self {
            config: CatalogConfig::default(),
        }
    }

    /// Creates an assembler with custom configuration.
    pub fn with_config(config: CatalogConfig) -> Self {
        Self { config }
    }

    /// Assembles the catalog in template order.
    ///
    /// Ids are assigned sequentially from the configured base, so the input
    /// order is a contract: the same template list always maps to the same
    /// id for each product. Prices come from the department's range, with
    /// the fallback range covering departments the table does not list.
    pub fn assemble(
        &self,
        templates: &[ProductTemplate],
        rng: &mut impl Rng,
    ) -> Result<Vec<GeneratedProduct>, ConfigError> {
        if templates.is_empty() {
            return Err(ConfigError::NoTemplates);
        }

        let mut products = Vec::with_capacity(templates.len());

        for (index, template) in templates.iter().enumerate() {
            check_template(index, template)?;

            let (min_price, max_price) = self.config.price_ranges.range_for(&template.department);
            let (min_stock, max_stock) = self.config.stock_range;

            products.push(GeneratedProduct {
                id: self.config.id_base + index as i64,
                name: template.name.clone(),
                description: template.description.clone(),
                price: rng.gen_range(min_price..=max_price),
                stock_quantity: rng.gen_range(min_stock..=max_stock),
                department: template.department.clone(),
            });
        }

        Ok(products)
    }
}

impl Default for CatalogAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejects templates that cannot become a valid catalog row.
fn check_template(index: usize, template: &ProductTemplate) -> Result<(), ConfigError> {
    if template.name.trim().is_empty() {
        return Err(ConfigError::MalformedTemplate {
            index,
            reason: "empty name".to_string(),
        });
    }
    if template.department.trim().is_empty() {
        return Err(ConfigError::MalformedTemplate {
            index,
            reason: "empty department".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_ids_are_contiguous_from_base() {
        let assembler = CatalogAssembler::new();
        let mut rng = rand::thread_rng();

        let products = assembler.assemble(&catalog::all_templates(), &mut rng).unwrap();

        assert_eq!(products.len(), catalog::all_templates().len());
        for (index, product) in products.iter().enumerate() {
            assert_eq!(product.id, 1000 + index as i64);
        }
    }

    #[test]
    fn test_prices_respect_department_ranges() {
        let assembler = CatalogAssembler::new();
        let table = PriceTable::default();
        let mut rng = rand::thread_rng();

        let products = assembler.assemble(&catalog::all_templates(), &mut rng).unwrap();

        for product in &products {
            let (min, max) = table.range_for(&product.department);
            assert!(
                (min..=max).contains(&product.price),
                "{} priced at {} outside {min}..={max}",
                product.name,
                product.price
            );
            assert!(product.stock_quantity <= 150);
        }
    }

    #[test]
    fn test_unknown_department_uses_fallback_range() {
        let assembler = CatalogAssembler::new();
        let mut rng = rand::thread_rng();

        let templates = vec![ProductTemplate::new("Firewood Bundle", "Seasoned oak", "Firewood")];
        let products = assembler.assemble(&templates, &mut rng).unwrap();

        let (min, max) = PriceTable::default().default_range();
        assert!((min..=max).contains(&products[0].price));
    }

    #[test]
    fn test_empty_template_list_is_rejected() {
        let assembler = CatalogAssembler::new();
        let mut rng = rand::thread_rng();

        let result = assembler.assemble(&[], &mut rng);
        assert!(matches!(result, Err(ConfigError::NoTemplates)));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let assembler = CatalogAssembler::new();
        let mut rng = rand::thread_rng();

        let templates = vec![ProductTemplate::new("  ", "No name", "Kayaks")];
        let result = assembler.assemble(&templates, &mut rng);
        assert!(matches!(result, Err(ConfigError::MalformedTemplate { index: 0, .. })));
    }

    #[test]
    fn test_same_seed_reproduces_catalog() {
        let assembler = CatalogAssembler::new();
        let templates = catalog::all_templates();

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let first = assembler.assemble(&templates, &mut rng_a).unwrap();
        let second = assembler.assemble(&templates, &mut rng_b).unwrap();

        assert_eq!(first, second);
    }
}
