//! Seeded dataset generation for storesim.
//!
//! This crate builds internally consistent relational test data - a priced
//! product catalog, a department-partitioned workforce, orders, intra-team
//! complaints, and deliberately polarized customer reviews - and writes it out
//! as tabular CSV artifacts. Every run is driven by a single seeded RNG
//! handle, so a given seed and configuration reproduce the same bytes.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use store_data::prelude::*;
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let dataset = DatasetBuilder::new()
//!     .with_workers(40)
//!     .with_orders(500)
//!     .build_data(&mut rng)?;
//! CsvSink::new("data").write_dataset(&dataset, 0)?;
//! ```

pub mod builders;
pub mod config;
pub mod errors;
pub mod generators;
pub mod sink;

// Re-export the template types from the catalog crate
pub use catalog::{DEPARTMENTS, ProductTemplate, all_templates};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{Dataset, DatasetBuilder, DatasetSummary};
    pub use crate::config::{IdBlock, PriceTable};
    pub use crate::errors::ConfigError;
    pub use crate::generators::{
        CatalogAssembler, ComplaintGenerator, OrderGenerator, ReviewGenerator, WorkforceGenerator,
        WorkforcePartition,
    };
    pub use crate::sink::{CsvSink, RunReport, SinkError};
    pub use crate::{DEPARTMENTS, ProductTemplate, all_templates};
}
