//! Builders for complete dataset instances.

mod dataset;

pub use dataset::{Dataset, DatasetBuilder, DatasetSummary};
