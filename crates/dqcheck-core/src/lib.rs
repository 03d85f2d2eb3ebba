pub mod errors;
pub mod profiler;
pub mod results;
pub mod rules;
pub mod tables;
pub mod types;
pub mod utils;
pub mod validator;

pub use errors::DqError;
pub use profiler::{
    ColumnProfile, NumericStats, PartitionAssessment, PartitionReport, Profiler, TableSummary,
    TextStats,
};
pub use results::{ValidationResult, ValidationTally};
pub use tables::{Column, ColumnKind, Table};
pub use types::{Batch, Value};
pub use validator::{CheckKind, CheckSpec, Validator};
