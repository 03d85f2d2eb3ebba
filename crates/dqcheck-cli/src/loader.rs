use std::fs::File;
use std::io::Seek;
use std::path::Path;
use std::sync::Arc;

use arrow::compute::concat_batches;
use arrow::csv::ReaderBuilder as CsvReaderBuilder;
use arrow::csv::reader::Format;
use arrow::record_batch::RecordBatch;
use dqcheck_core::Table;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use tracing::debug;

use crate::errors::CliError;

/// Rows sampled for csv schema inference.
const INFER_SCHEMA_ROWS: usize = 1000;

/// File format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Parquet,
}

impl FileFormat {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "csv" => Some(FileFormat::Csv),
            "parquet" => Some(FileFormat::Parquet),
            _ => None,
        }
    }
}

/// Reads a whole csv or parquet file into one in-memory table.
pub fn load_table(path: &Path) -> Result<Table, CliError> {
    let display = path.display().to_string();
    let format = FileFormat::from_path(path).ok_or_else(|| CliError::UnsupportedFormat {
        path: display.clone(),
    })?;
    let file = File::open(path).map_err(|source| CliError::Io {
        path: display.clone(),
        source,
    })?;

    let batch = match format {
        FileFormat::Csv => read_csv(file, &display)?,
        FileFormat::Parquet => read_parquet(file, &display)?,
    };
    debug!(
        path = %path.display(),
        rows = batch.num_rows(),
        columns = batch.num_columns(),
        "loaded table"
    );
    Ok(Table::new(batch))
}

fn read_csv(mut file: File, path: &str) -> Result<RecordBatch, CliError> {
    let csv_err = |source| CliError::Csv {
        path: path.to_string(),
        source,
    };
    let (schema, _) = Format::default()
        .with_header(true)
        .infer_schema(&mut file, Some(INFER_SCHEMA_ROWS))
        .map_err(csv_err)?;
    file.rewind().map_err(|source| CliError::Io {
        path: path.to_string(),
        source,
    })?;

    let schema = Arc::new(schema);
    let reader = CsvReaderBuilder::new(schema.clone())
        .with_header(true)
        .build(file)
        .map_err(csv_err)?;
    let batches = reader.collect::<Result<Vec<_>, _>>().map_err(csv_err)?;
    concat_batches(&schema, &batches).map_err(csv_err)
}

fn read_parquet(file: File, path: &str) -> Result<RecordBatch, CliError> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(file).map_err(|source| {
        CliError::Parquet {
            path: path.to_string(),
            source,
        }
    })?;
    let schema = builder.schema().clone();
    let reader = builder.build().map_err(|source| CliError::Parquet {
        path: path.to_string(),
        source,
    })?;

    let batch_err = |source| CliError::ParquetBatch {
        path: path.to_string(),
        source,
    };
    let batches = reader.collect::<Result<Vec<_>, _>>().map_err(batch_err)?;
    concat_batches(&schema, &batches).map_err(batch_err)
}
