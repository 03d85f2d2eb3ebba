pub mod formatters;
pub mod utils;

use dqcheck_core::{ColumnProfile, PartitionReport, TableSummary, ValidationResult};
use thiserror::Error;

pub use formatters::{console::ConsoleReporter, json::JsonReporter};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Report is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Renders profiler and validator output. Reporters never see the table.
pub trait Reporter {
    fn report_validation(&self, results: &[ValidationResult]) -> Result<String, ReportError>;
    fn report_profile(
        &self,
        profiles: &[ColumnProfile],
        summary: Option<&TableSummary>,
    ) -> Result<String, ReportError>;
    fn report_partition(&self, report: &PartitionReport) -> Result<String, ReportError>;
}
