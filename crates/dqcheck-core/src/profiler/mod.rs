//! Column and table statistics.
//!
//! The [`Profiler`] borrows a [`Table`] and computes read-only statistics:
//! per-column profiles, a table summary, and a partitioning advisory.

pub mod partition;
pub mod stats;

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::errors::DqError;
use crate::tables::{Column, ColumnKind, Table};
use crate::utils::hasher::{ValueKey, Xxh3Builder};
use crate::utils::rounding::percentage;

pub use partition::{CardinalityLevel, PartitionAssessment, PartitionReport, SkewLevel};
pub use stats::{NumericStats, TextStats};

/// Statistics of a single column.
///
/// `numeric` is set only for numeric columns and `text` only for text
/// columns holding at least one non-missing value.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnProfile {
    pub column: String,
    /// Arrow data type, e.g. `Int64`.
    pub data_type: String,
    pub kind: ColumnKind,
    pub count: usize,
    pub null_count: usize,
    pub null_percentage: f64,
    /// Distinct non-missing values.
    pub unique_count: usize,
    pub numeric: Option<NumericStats>,
    pub text: Option<TextStats>,
}

impl ColumnProfile {
    pub fn from_column(column: &Column<'_>) -> Self {
        let count = column.len();
        let null_count = column.missing_count();
        let numeric = column.numbers().map(|n| NumericStats::from_array(&n));
        let text = if column.kind().is_textual() {
            column.strings().and_then(TextStats::from_array)
        } else {
            None
        };

        Self {
            column: column.name().to_string(),
            data_type: column.data_type().to_string(),
            kind: column.kind(),
            count,
            null_count,
            null_percentage: percentage(null_count, count),
            unique_count: distinct_count(column),
            numeric,
            text,
        }
    }

    pub fn non_null_count(&self) -> usize {
        self.count - self.null_count
    }
}

/// Table-level summary.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSummary {
    pub row_count: usize,
    pub column_count: usize,
    pub columns: Vec<String>,
    pub memory_usage_bytes: usize,
    pub total_null_count: usize,
}

pub struct Profiler<'t> {
    table: &'t Table,
}

impl<'t> Profiler<'t> {
    pub fn new(table: &'t Table) -> Self {
        Self { table }
    }

    /// Profile one column.
    ///
    /// # Errors
    ///
    /// * `DqError::ColumnNotFound` - `name` is not a column of the table
    pub fn profile_column(&self, name: &str) -> Result<ColumnProfile, DqError> {
        let column = self.table.column(name)?;
        let profile = ColumnProfile::from_column(&column);
        debug!(
            column = %profile.column,
            kind = %profile.kind,
            nulls = profile.null_count,
            unique = profile.unique_count,
            "Profiled column"
        );
        Ok(profile)
    }

    /// Profile every column, in table order.
    #[instrument(skip(self), fields(columns = self.table.num_columns()))]
    pub fn profile_all(&self) -> Result<Vec<ColumnProfile>, DqError> {
        self.table
            .column_names()
            .iter()
            .map(|name| self.profile_column(name))
            .collect()
    }

    pub fn summary(&self) -> Result<TableSummary, DqError> {
        let total_null_count = self
            .table
            .columns()?
            .iter()
            .map(|c| c.missing_count())
            .sum();
        Ok(TableSummary {
            row_count: self.table.num_rows(),
            column_count: self.table.num_columns(),
            columns: self.table.column_names(),
            memory_usage_bytes: self.table.memory_size(),
            total_null_count,
        })
    }

    /// Assess whether `name` is a good partitioning key.
    ///
    /// Datetime and other non-partitionable kinds get a report without an
    /// assessment.
    pub fn partition_recommendations(&self, name: &str) -> Result<PartitionReport, DqError> {
        let column = self.table.column(name)?;
        let report = PartitionReport::from_column(&column);
        match &report.assessment {
            Some(a) => debug!(
                column = %name,
                skew_factor = a.skew_factor,
                cardinality = a.cardinality,
                score = a.score(),
                "Assessed partition key"
            ),
            None => debug!(column = %name, kind = %report.kind, "Column kind is not partitionable"),
        }
        Ok(report)
    }
}

fn distinct_count(column: &Column<'_>) -> usize {
    let mut seen: HashSet<ValueKey, Xxh3Builder> = HashSet::with_hasher(Xxh3Builder);
    seen.extend(column.values().filter_map(|v| ValueKey::from_value(&v)));
    seen.len()
}
