//! CSV writing utilities for dataset runs.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;

use crate::builders::{Dataset, DatasetSummary};

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}

/// Metadata written alongside the CSV artifacts of one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Run label used in the artifact file names.
    pub run_index: usize,
    /// Seed the run's RNG was created from.
    pub seed: u64,
    /// Generation timestamp (RFC 3339).
    pub generated_at: String,
    /// Wall-clock generation time in milliseconds.
    pub duration_ms: u64,
    /// Row counts per table.
    pub tables: DatasetSummary,
}

impl RunReport {
    /// Builds a report for a finished run.
    pub fn new(run_index: usize, seed: u64, duration_ms: u64, dataset: &Dataset) -> Self {
        let generated_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default();
        Self {
            run_index,
            seed,
            generated_at,
            duration_ms,
            tables: dataset.summary(),
        }
    }
}

/// Writes generated datasets as one CSV file per table per run.
///
/// File names carry the run label (`products_test0.csv`, `review_test3.csv`)
/// so several runs can live side by side in one directory. Table bytes are a
/// pure function of the dataset contents: rewriting the same dataset under
/// the same label produces identical files.
pub struct CsvSink {
    out_dir: PathBuf,
}

impl CsvSink {
    /// Creates a sink rooted at the given directory.
    ///
    /// The directory is created on first write if it does not exist.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Writes all five tables of a dataset under one run label.
    pub fn write_dataset(&self, dataset: &Dataset, run_index: usize) -> Result<(), SinkError> {
        fs::create_dir_all(&self.out_dir)?;

        self.write_table(&format!("products_test{run_index}.csv"), &dataset.products)?;
        self.write_table(&format!("workers_test{run_index}.csv"), dataset.workers())?;
        self.write_table(&format!("ordered_test{run_index}.csv"), &dataset.order_lines)?;
        self.write_table(&format!("complaint_test{run_index}.csv"), &dataset.complaints)?;
        self.write_table(&format!("review_test{run_index}.csv"), &dataset.reviews)?;

        Ok(())
    }

    /// Writes the JSON run report next to the tables.
    pub fn write_report(&self, report: &RunReport) -> Result<(), SinkError> {
        fs::create_dir_all(&self.out_dir)?;

        let path = self.out_dir.join(format!("report_test{}.json", report.run_index));
        fs::write(&path, serde_json::to_vec_pretty(report)?)?;

        info!("Wrote run report to {}", path.display());
        Ok(())
    }

    /// Serializes one table into a headed CSV file.
    fn write_table<T: Serialize>(&self, file_name: &str, rows: &[T]) -> Result<(), SinkError> {
        let path = self.out_dir.join(file_name);
        let mut writer = csv::Writer::from_path(&path)?;

        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        info!("Wrote {} rows to {}", rows.len(), path.display());
        Ok(())
    }
}
