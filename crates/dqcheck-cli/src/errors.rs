use arrow::error::ArrowError;
use dqcheck_core::DqError;
use parquet::errors::ParquetError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unsupported file format '{path}'. Supported: .csv, .parquet")]
    UnsupportedFormat { path: String },
    #[error("Failed to open '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to decode csv file '{path}'")]
    Csv {
        path: String,
        #[source]
        source: ArrowError,
    },
    #[error("Failed to decode parquet file '{path}'")]
    Parquet {
        path: String,
        #[source]
        source: ParquetError,
    },
    #[error("Failed to decode parquet file '{path}'")]
    ParquetBatch {
        path: String,
        #[source]
        source: ArrowError,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    // Usage errors from core
    #[error(transparent)]
    Core(#[from] DqError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file contains no column")]
    Empty,
    #[error("Column '{column_name}' is not present in the input table")]
    UnknownColumn { column_name: String },
    #[error("Rule logic error: rule '{rule_name}' for '{column_name}' - {message}")]
    RuleError {
        rule_name: String,
        column_name: String,
        message: String,
    },
}
