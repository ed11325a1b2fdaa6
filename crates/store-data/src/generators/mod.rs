//! Entity generators for dataset stages.
//!
//! This module provides one generator per entity kind, in dependency order:
//! - [`CatalogAssembler`]: Price and stock raw product templates
//! - [`WorkforceGenerator`]: Partition workers across departments
//! - [`OrderGenerator`]: Build orders as distinct product sets with quantities
//! - [`ComplaintGenerator`]: Create intra-department complaint records
//! - [`ReviewGenerator`]: Create per-order reviews with polarized ratings
//!
//! Generators are pure: they draw from a caller-supplied RNG handle and
//! return plain row structs, so a seeded handle reproduces identical output.

pub mod complaint;
pub mod order;
pub mod product;
pub mod review;
pub mod workforce;

pub use complaint::{ComplaintConfig, ComplaintGenerator, GeneratedComplaint};
pub use order::{GeneratedOrderLine, OrderConfig, OrderGenerator};
pub use product::{CatalogAssembler, CatalogConfig, GeneratedProduct};
pub use review::{GeneratedReview, ReviewConfig, ReviewGenerator};
pub use workforce::{
    GeneratedWorker, WorkforceConfig, WorkforceGenerator, WorkforcePartition,
};
