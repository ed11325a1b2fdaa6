//! Error types for dataset generation.

use thiserror::Error;

/// Fatal configuration problems detected before any rows are generated.
///
/// Generation never tries to repair a bad configuration: a run that starts
/// is a run whose settings were fully validated.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("department list is empty")]
    NoDepartments,

    #[error("product template set is empty")]
    NoTemplates,

    #[error("product template {index} is malformed: {reason}")]
    MalformedTemplate { index: usize, reason: String },

    #[error("{workers} workers cannot cover {departments} departments")]
    TooFewWorkers { workers: usize, departments: usize },

    #[error("customer id block is empty")]
    NoCustomers,

    #[error("{list} list is empty")]
    EmptyList { list: &'static str },

    #[error("{what} range is inverted")]
    InvertedRange { what: &'static str },

    #[error("{what} must be at least 1")]
    ZeroMinimum { what: &'static str },

    #[error("rating standard deviation must be positive and finite, got {value}")]
    InvalidStdDev { value: f64 },
}
