//! Low-level Parquet reading and writing shared by the readers and
//! writers.

use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, AsArray, RecordBatch};
use arrow::datatypes::{DataType, Schema};
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::error::IoError;

/// Reads all record batches from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or
/// [`IoError::Parquet`] if the file cannot be opened or read.
pub(crate) fn read_batches(path: &Path) -> Result<Vec<RecordBatch>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = std::fs::File::open(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;
    let batches = reader
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| IoError::Parquet {
            reason: e.to_string(),
        })?;
    Ok(batches)
}

/// Writes record batches to `path` with snappy compression.
///
/// # Errors
///
/// Returns [`IoError::Parquet`] if file creation, batch writing, or
/// finalisation fails.
pub(crate) fn write_batches(
    path: &Path,
    batches: &[RecordBatch],
    schema: &Schema,
) -> Result<(), IoError> {
    let file = std::fs::File::create(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();
    let mut writer = ArrowWriter::try_new(file, Arc::new(schema.clone()), Some(props))?;
    for batch in batches {
        writer.write(batch)?;
    }
    writer.close()?;
    Ok(())
}

/// Looks a named column up in a batch, checking its type.
///
/// # Errors
///
/// Returns [`IoError::Validation`] if the column is absent or carries
/// the wrong type.
pub(crate) fn column<'a>(
    batch: &'a RecordBatch,
    name: &str,
    expected: &DataType,
) -> Result<&'a dyn Array, IoError> {
    let col = batch
        .column_by_name(name)
        .ok_or_else(|| IoError::Validation {
            details: format!("missing column '{name}'"),
        })?;
    if col.data_type() != expected {
        return Err(IoError::Validation {
            details: format!(
                "column '{name}' has type {}, expected {expected}",
                col.data_type()
            ),
        });
    }
    Ok(col.as_ref())
}

/// A named utf8 column as owned strings.
pub(crate) fn string_column(batch: &RecordBatch, name: &str) -> Result<Vec<String>, IoError> {
    let col = column(batch, name, &DataType::Utf8)?;
    Ok(col
        .as_string::<i32>()
        .iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect())
}
