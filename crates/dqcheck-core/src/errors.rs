use thiserror::Error;

#[derive(Error, Debug)]
pub enum DqError {
    /// Column name absent from the table
    #[error("Column '{0}' not found in table")]
    ColumnNotFound(String),

    /// A check was queued before any column was selected
    #[error("Check '{check}' was registered before any column was selected")]
    NoColumnSelected { check: String },

    /// The regex given to `matches` does not compile
    #[error("Invalid regex pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Columns handed to `Table::try_new` do not line up
    #[error("Invalid table: {0}")]
    InvalidTable(String),

    /// The Arrow kernel produced an error (e.g., unsupported cast)
    #[error("Arrow computation error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),
}
