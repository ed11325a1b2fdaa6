//! Static product catalog for store dataset generation.
//!
//! This crate plays the role of the merchandising source of truth: a fixed
//! department list plus, per department, an ordered set of raw product
//! templates (name, description, department). Templates carry no ids, prices
//! or stock levels; downstream generation assigns those. The template order
//! exposed by [`all_templates`] is a contract surface, because product ids are
//! handed out sequentially over it.

mod templates;

pub use templates::{
    all_templates, backpacks, binoculars, e_bikes, gps_watches, headlamps, kayaks, sleeping_bags,
    trail_snacks, water_bottles,
};

use serde::{Deserialize, Serialize};

/// Store departments, in canonical order.
///
/// This order is the deterministic traversal order wherever one is needed
/// (price tables, workforce grouping). It is not the id-assignment order;
/// that one belongs to [`all_templates`].
pub const DEPARTMENTS: [&str; 9] = [
    "Kayaks",
    "E-Bikes",
    "Trail Snacks",
    "Binoculars",
    "Headlamps",
    "Water Bottles",
    "Sleeping Bags",
    "Backpacks",
    "GPS Watches",
];

/// A raw product template before enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTemplate {
    /// Display name of the product.
    pub name: String,
    /// Short marketing description.
    pub description: String,
    /// Department the product is sold under.
    pub department: String,
}

impl ProductTemplate {
    /// Creates a template from borrowed parts.
    pub fn new(name: &str, description: &str, department: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            department: department.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_departments_are_distinct() {
        let unique: HashSet<&str> = DEPARTMENTS.iter().copied().collect();
        assert_eq!(unique.len(), DEPARTMENTS.len());
    }

    #[test]
    fn test_every_department_has_templates() {
        let all = all_templates();
        for department in DEPARTMENTS {
            let count = all.iter().filter(|t| t.department == department).count();
            assert!(count > 0, "department {department} has no templates");
        }
    }

    #[test]
    fn test_templates_only_use_known_departments() {
        for template in all_templates() {
            assert!(
                DEPARTMENTS.contains(&template.department.as_str()),
                "unknown department {} on {}",
                template.department,
                template.name
            );
        }
    }

    #[test]
    fn test_all_templates_order_is_stable() {
        let first = all_templates();
        let second = all_templates();
        assert_eq!(first, second);

        // Id assignment relies on this concatenation order.
        assert_eq!(first[0], e_bikes()[0]);
        let expected_len = e_bikes().len()
            + kayaks().len()
            + trail_snacks().len()
            + binoculars().len()
            + headlamps().len()
            + water_bottles().len()
            + sleeping_bags().len()
            + backpacks().len()
            + gps_watches().len();
        assert_eq!(first.len(), expected_len);
    }

    #[test]
    fn test_template_fields_are_non_empty() {
        for template in all_templates() {
            assert!(!template.name.trim().is_empty());
            assert!(!template.description.trim().is_empty());
            assert!(!template.department.trim().is_empty());
        }
    }

    #[test]
    fn test_template_names_are_unique() {
        let all = all_templates();
        let unique: HashSet<&str> = all.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn test_template_deserializes_from_json() {
        let template: ProductTemplate = serde_json::from_str(
            r#"{"name":"Driftwater Touring 14","description":"Touring kayak","department":"Kayaks"}"#,
        )
        .unwrap();
        assert_eq!(template.department, "Kayaks");
    }
}
