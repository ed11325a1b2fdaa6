//! Tabular output for generated datasets.

mod csv;

pub use csv::{CsvSink, RunReport, SinkError};
