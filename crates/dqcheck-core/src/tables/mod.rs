//! In-memory table over a single Arrow `RecordBatch`.
//!
//! Profiler and Validator borrow a [`Table`] and look columns up by name.
//! Each lookup produces a [`Column`] whose [`ColumnKind`] is decided once
//! from the Arrow data type.

pub mod column;

use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::datatypes::{Field, Schema};

use crate::errors::DqError;
use crate::types::Batch;

pub use column::{Column, ColumnKind};

#[derive(Debug, Clone)]
pub struct Table {
    batch: Batch,
}

impl From<Batch> for Table {
    fn from(batch: Batch) -> Self {
        Self::new(batch)
    }
}

impl Table {
    pub fn new(batch: Batch) -> Self {
        Self { batch }
    }

    /// Build a table from `(name, array)` pairs, in column order.
    ///
    /// Every array must have the same length. Fields are declared nullable.
    pub fn try_new<S: Into<String>>(columns: Vec<(S, ArrayRef)>) -> Result<Self, DqError> {
        if columns.is_empty() {
            return Ok(Self::new(Batch::new_empty(Arc::new(Schema::empty()))));
        }
        let (fields, arrays): (Vec<Field>, Vec<ArrayRef>) = columns
            .into_iter()
            .map(|(name, array)| {
                let field = Field::new(name.into(), array.data_type().clone(), true);
                (field, array)
            })
            .unzip();
        let batch = Batch::try_new(Arc::new(Schema::new(fields)), arrays)
            .map_err(|e| DqError::InvalidTable(e.to_string()))?;
        Ok(Self::new(batch))
    }

    pub fn batch(&self) -> &Batch {
        &self.batch
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn num_columns(&self) -> usize {
        self.batch.num_columns()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.batch
            .schema_ref()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.batch.schema_ref().index_of(name).is_ok()
    }

    /// Look a column up by name.
    ///
    /// # Errors
    ///
    /// * `DqError::ColumnNotFound` - no column with this name
    /// * `DqError::ArrowError` - the column could not be normalized for reading
    pub fn column(&self, name: &str) -> Result<Column<'_>, DqError> {
        let index = self
            .batch
            .schema_ref()
            .index_of(name)
            .map_err(|_| DqError::ColumnNotFound(name.to_string()))?;
        self.column_at(index)
    }

    /// All columns, in table order.
    pub fn columns(&self) -> Result<Vec<Column<'_>>, DqError> {
        (0..self.num_columns()).map(|i| self.column_at(i)).collect()
    }

    /// Bytes held by the underlying Arrow buffers.
    pub fn memory_size(&self) -> usize {
        self.batch.get_array_memory_size()
    }

    fn column_at(&self, index: usize) -> Result<Column<'_>, DqError> {
        let field = self.batch.schema_ref().field(index);
        Column::new(field.name(), self.batch.column(index))
    }
}
